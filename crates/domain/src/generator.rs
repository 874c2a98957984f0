use std::ops::RangeInclusive;

use log::{debug, warn};
use rand::{Rng, seq::SliceRandom};
use strum::IntoEnumIterator;

use crate::{
    AthleteProfile, Catalog, Equipment, Exercise, Format, GeneratedExercise, GeneratedWorkout,
    Pattern, RateModel, Scheme, TimeDomain, WorkoutID, back_calculate, generate_load,
    pacing_factor, predict,
    workload::{Slot, amrap_reps, for_time_reps, rounds_for_time_reps},
};

/// Reps per minute assumed when planning For Time workouts before exercises are chosen.
const NOMINAL_RATE: f32 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Attempts per workout to land in the requested time domain.
    pub max_attempts: usize,
    /// Number of workouts generated per batch.
    pub batch_size: usize,
}

impl GeneratorConfig {
    pub const MAX_ATTEMPTS: usize = 10;
    pub const BATCH_SIZE: usize = 5;
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_attempts: Self::MAX_ATTEMPTS,
            batch_size: Self::BATCH_SIZE,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationOptions {
    pub format: Option<Format>,
    pub exercise_count: Option<usize>,
    pub barbell: Requirement,
    pub dumbbell: Requirement,
    pub cardio: CardioPreference,
    /// Exercises that are tried first, if the athlete can do them.
    pub include_exercises: Vec<String>,
    pub exclude_exercises: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Requirement {
    #[default]
    Any,
    Required,
    Excluded,
}

/// Calorie machines a workout may use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CardioPreference {
    #[default]
    Any,
    Rower,
    Bike,
    Ski,
    None,
}

impl CardioPreference {
    #[must_use]
    pub fn allows(self, exercise: &Exercise) -> bool {
        if !exercise.cardio {
            return true;
        }
        let machine = match self {
            CardioPreference::Any => return true,
            CardioPreference::None => return false,
            CardioPreference::Rower => Equipment::RowingMachine,
            CardioPreference::Bike => Equipment::BikeErg,
            CardioPreference::Ski => Equipment::SkiErg,
        };
        exercise.equipment.contains(&machine)
    }
}

impl Catalog {
    /// Exercises the athlete can do and the options permit, in catalog order.
    #[must_use]
    pub fn eligible(
        &self,
        profile: Option<&AthleteProfile>,
        options: &GenerationOptions,
    ) -> Vec<&Exercise> {
        self.exercises()
            .filter(|e| profile.is_none_or(|p| p.allows(e)))
            .filter(|e| !options.exclude_exercises.iter().any(|name| name == e.name))
            .filter(|e| options.barbell != Requirement::Excluded || !e.is_barbell())
            .filter(|e| options.dumbbell != Requirement::Excluded || !e.is_dumbbell())
            .filter(|e| options.cardio.allows(e))
            .collect()
    }
}

/// Result of generating a workout for a time domain.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Matched(GeneratedWorkout),
    /// No attempt landed in the time domain. Contains the last attempt, if any was possible.
    Exhausted(Option<GeneratedWorkout>),
}

impl Outcome {
    #[must_use]
    pub fn into_workout(self) -> Option<GeneratedWorkout> {
        match self {
            Outcome::Matched(workout) => Some(workout),
            Outcome::Exhausted(workout) => workout,
        }
    }
}

pub struct Generator<'c> {
    catalog: &'c Catalog,
    config: GeneratorConfig,
}

impl<'c> Generator<'c> {
    #[must_use]
    pub fn new(catalog: &'c Catalog, config: GeneratorConfig) -> Self {
        Self { catalog, config }
    }

    /// Generate a batch of workouts.
    ///
    /// Every distinct requested time domain gets one workout, the remaining slots are filled with
    /// randomly chosen requested domains. No requested domain means all domains. Workouts with
    /// too few exercises are dropped, so the batch may be shorter than configured.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        domains: &[TimeDomain],
        profile: Option<&AthleteProfile>,
        options: &GenerationOptions,
        rng: &mut R,
    ) -> Vec<GeneratedWorkout> {
        let mut requested = Vec::new();
        for domain in domains {
            if !requested.contains(domain) {
                requested.push(*domain);
            }
        }
        if requested.is_empty() {
            requested = TimeDomain::iter().collect();
        }

        let mut slots = requested
            .iter()
            .copied()
            .take(self.config.batch_size)
            .collect::<Vec<_>>();
        let missing = self.config.batch_size.saturating_sub(slots.len());
        slots.extend((0..missing).filter_map(|_| requested.choose(rng).copied()));

        let universe = self.catalog.eligible(profile, options);
        let mut workouts = Vec::with_capacity(slots.len());

        for domain in slots {
            match self.run(domain, profile, options, &universe, rng) {
                Outcome::Matched(workout) => workouts.push(workout),
                Outcome::Exhausted(Some(workout)) if is_complete(&workout) => {
                    debug!(
                        "accepting workout in {} for {domain} after {} attempts",
                        workout.time_domain, self.config.max_attempts
                    );
                    workouts.push(workout);
                }
                Outcome::Exhausted(_) => {
                    warn!("dropping workout for {domain}, no attempt had enough exercises");
                }
            }
        }

        for (i, workout) in workouts.iter_mut().enumerate() {
            workout.name = format!("Workout {}", i + 1);
        }

        debug!(
            "generated {} of {} workouts",
            workouts.len(),
            self.config.batch_size
        );

        workouts
    }

    /// Generate a single workout, retrying until it lands in the time domain.
    pub fn generate_for_domain<R: Rng + ?Sized>(
        &self,
        domain: TimeDomain,
        profile: Option<&AthleteProfile>,
        options: &GenerationOptions,
        rng: &mut R,
    ) -> Outcome {
        let universe = self.catalog.eligible(profile, options);
        self.run(domain, profile, options, &universe, rng)
    }

    fn run<R: Rng + ?Sized>(
        &self,
        domain: TimeDomain,
        profile: Option<&AthleteProfile>,
        options: &GenerationOptions,
        universe: &[&'c Exercise],
        rng: &mut R,
    ) -> Outcome {
        let mut last = None;

        for attempt in 1..=self.config.max_attempts {
            let Some(workout) = self.attempt(domain, profile, options, universe, rng) else {
                debug!("no format available for {domain}");
                break;
            };
            if workout.time_domain == domain && is_complete(&workout) {
                return Outcome::Matched(workout);
            }
            debug!(
                "attempt {attempt} for {domain} resulted in {} {} with {} exercises",
                workout.format(),
                workout.time_domain,
                workout.exercises.len()
            );
            last = Some(workout);
        }

        Outcome::Exhausted(last)
    }

    fn attempt<R: Rng + ?Sized>(
        &self,
        domain: TimeDomain,
        profile: Option<&AthleteProfile>,
        options: &GenerationOptions,
        universe: &[&'c Exercise],
        rng: &mut R,
    ) -> Option<GeneratedWorkout> {
        let format = pick_format(domain, options.format, rng)?;
        let seeds = seeds(universe, options, rng);

        let (scheme, pacing, count) = match format {
            Format::Amrap => {
                let time_cap = rng.gen_range(domain.amrap_caps()?);
                #[allow(clippy::cast_precision_loss)]
                let pacing = time_cap as f32;
                let count = exercise_count(format, pacing, options, rng);
                (Scheme::Amrap { time_cap }, pacing, count)
            }
            Format::RoundsForTime => {
                let rounds = rng.gen_range(domain.rounds());
                let pacing = domain.target_minutes();
                let count = exercise_count(format, pacing, options, rng);
                (Scheme::RoundsForTime { rounds }, pacing, count)
            }
            Format::ForTime => {
                let pacing = domain.target_minutes();
                let seed_names = seeds.iter().map(|e| e.name).collect::<Vec<_>>();
                let mut patterns = self.catalog.allowed_patterns(&seed_names);
                if patterns.is_empty() {
                    patterns = Pattern::ALL.to_vec();
                }
                let (count, pattern) = plan_for_time(
                    domain,
                    counts(format, pacing, options),
                    &patterns,
                    rng,
                )?;
                (Scheme::ForTime { pattern }, pacing, count)
            }
        };
        let pattern = match scheme {
            Scheme::ForTime { pattern } => Some(pattern),
            Scheme::Amrap { .. } | Scheme::RoundsForTime { .. } => None,
        };

        let selected = self
            .catalog
            .select_exercises(universe, count, pattern, &seeds, rng);
        let slots = selected
            .into_iter()
            .map(|exercise| (exercise, generate_load(exercise, profile, rng)))
            .collect::<Vec<Slot>>();

        let model = RateModel::new(self.catalog, profile);
        let (scheme, reps) = match scheme {
            Scheme::Amrap { time_cap } => (scheme, amrap_reps(&model, &slots, time_cap)),
            Scheme::RoundsForTime { rounds } => {
                let (reps, rounds) = rounds_for_time_reps(&model, &slots, pacing, Some(rounds));
                (Scheme::RoundsForTime { rounds }, reps)
            }
            Scheme::ForTime { pattern } => (scheme, for_time_reps(pattern, slots.len())),
        };
        let exercises = slots
            .iter()
            .zip(reps)
            .map(|((exercise, load), reps)| GeneratedExercise {
                name: exercise.name.to_string(),
                reps,
                load: *load,
            })
            .collect::<Vec<_>>();

        let (duration, time_domain) = back_calculate(&model, scheme, &exercises, pacing);
        let benchmark = predict(&model, scheme, &exercises, pacing);

        Some(GeneratedWorkout {
            id: WorkoutID::random(rng),
            name: String::from("Workout 1"),
            scheme,
            duration,
            pacing,
            time_domain,
            exercises,
            benchmark,
        })
    }
}

/// Generate a batch of workouts from the standard catalog with default settings.
#[must_use]
pub fn generate_workouts(
    domains: &[TimeDomain],
    profile: Option<&AthleteProfile>,
) -> Vec<GeneratedWorkout> {
    let catalog = Catalog::default();
    Generator::new(&catalog, GeneratorConfig::default()).generate(
        domains,
        profile,
        &GenerationOptions::default(),
        &mut rand::thread_rng(),
    )
}

fn is_complete(workout: &GeneratedWorkout) -> bool {
    workout
        .format()
        .exercise_count(workout.pacing)
        .contains(&workout.exercises.len())
}

fn pick_format<R: Rng + ?Sized>(
    domain: TimeDomain,
    requested: Option<Format>,
    rng: &mut R,
) -> Option<Format> {
    match requested {
        Some(format) => Some(format).filter(|f| f.is_available(domain)),
        None => Format::iter()
            .filter(|f| f.is_available(domain))
            .collect::<Vec<_>>()
            .choose(rng)
            .copied(),
    }
}

fn counts(format: Format, pacing: f32, options: &GenerationOptions) -> RangeInclusive<usize> {
    let range = format.exercise_count(pacing);
    match options.exercise_count {
        Some(count) => {
            let count = count.clamp(*range.start(), *range.end());
            count..=count
        }
        None => range,
    }
}

fn exercise_count<R: Rng + ?Sized>(
    format: Format,
    pacing: f32,
    options: &GenerationOptions,
    rng: &mut R,
) -> usize {
    rng.gen_range(counts(format, pacing, options))
}

/// Explicitly included exercises followed by a random pick for every required implement
/// not covered yet.
fn seeds<'e, R: Rng + ?Sized>(
    universe: &[&'e Exercise],
    options: &GenerationOptions,
    rng: &mut R,
) -> Vec<&'e Exercise> {
    let mut seeds = options
        .include_exercises
        .iter()
        .filter_map(|name| universe.iter().find(|e| e.name == name))
        .copied()
        .collect::<Vec<_>>();

    let required: [(Requirement, fn(&Exercise) -> bool); 2] = [
        (options.barbell, Exercise::is_barbell),
        (options.dumbbell, Exercise::is_dumbbell),
    ];
    for (requirement, is_implement) in required {
        if requirement != Requirement::Required || seeds.iter().any(|e| is_implement(e)) {
            continue;
        }
        let candidates = universe
            .iter()
            .copied()
            .filter(|e| is_implement(e))
            .collect::<Vec<_>>();
        if let Some(&exercise) = candidates.choose(rng) {
            seeds.push(exercise);
        }
    }

    seeds
}

/// Choose exercise count and pattern of a For Time workout.
///
/// Combinations whose nominal duration lands in the time domain are preferred. Otherwise the
/// combination closest to the domain's target duration is taken.
fn plan_for_time<R: Rng + ?Sized>(
    domain: TimeDomain,
    counts: RangeInclusive<usize>,
    patterns: &[Pattern],
    rng: &mut R,
) -> Option<(usize, Pattern)> {
    let target = domain.target_minutes();
    let combinations = counts
        .flat_map(|count| {
            patterns
                .iter()
                .filter(move |p| count == 2 || !p.is_long())
                .map(move |p| (count, *p))
        })
        .collect::<Vec<_>>();
    let nominal = |(count, pattern): (usize, Pattern)| {
        #[allow(clippy::cast_precision_loss)]
        let reps = (pattern.total() as usize * count) as f32;
        reps / (NOMINAL_RATE * pacing_factor(target))
    };

    let matching = combinations
        .iter()
        .copied()
        .filter(|c| TimeDomain::classify(nominal(*c)) == domain)
        .collect::<Vec<_>>();
    if let Some(combination) = matching.choose(rng) {
        return Some(*combination);
    }

    combinations.into_iter().min_by(|a, b| {
        (nominal(*a) - target)
            .abs()
            .total_cmp(&(nominal(*b) - target).abs())
    })
}
