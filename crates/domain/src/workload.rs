use crate::{Exercise, Load, Pattern, RateModel, TimeDomain};

/// Maximum difference of rep counts that are unified into one value.
pub const CLUSTER_DISTANCE: u32 = 2;

/// Exercise and load a workload is computed for.
pub type Slot<'c> = (&'c Exercise, Option<Load>);

/// Reps per round of an AMRAP workout with the given time cap in minutes.
#[must_use]
pub fn amrap_reps(model: &RateModel, slots: &[Slot], time_cap: u32) -> Vec<u32> {
    #[allow(clippy::cast_precision_loss)]
    let minutes = time_cap as f32;
    let rounds = estimated_rounds(minutes);
    reps_per_round(model, slots, minutes, rounds)
}

/// Reps per round and number of rounds of a Rounds For Time workout paced for the given duration.
///
/// If no round count is given, it is derived from the time a round of the snapped reps takes.
#[must_use]
pub fn rounds_for_time_reps(
    model: &RateModel,
    slots: &[Slot],
    minutes: f32,
    rounds: Option<u32>,
) -> (Vec<u32>, u32) {
    if let Some(rounds) = rounds {
        let rounds = rounds.max(1);
        return (reps_per_round(model, slots, minutes, rounds), rounds);
    }

    let estimate = reps_per_round(model, slots, minutes, estimated_rounds(minutes));
    let round_minutes = slots
        .iter()
        .zip(&estimate)
        .map(|((exercise, load), reps)| {
            #[allow(clippy::cast_precision_loss)]
            let reps = *reps as f32;
            reps / model.adjusted_rate(exercise.name, *load, minutes)
        })
        .sum::<f32>();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let rounds = if round_minutes > 0.0 {
        ((minutes / round_minutes).round() as u32).max(1)
    } else {
        1
    };

    (reps_per_round(model, slots, minutes, rounds), rounds)
}

/// Total reps of each exercise of a For Time workout.
#[must_use]
pub fn for_time_reps(pattern: Pattern, exercises: usize) -> Vec<u32> {
    vec![pattern.total(); exercises]
}

fn estimated_rounds(minutes: f32) -> u32 {
    let domain = TimeDomain::classify(minutes);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let rounds = (minutes / domain.minutes_per_round()).floor() as u32;
    rounds.max(domain.min_rounds())
}

fn reps_per_round(model: &RateModel, slots: &[Slot], minutes: f32, rounds: u32) -> Vec<u32> {
    #[allow(clippy::cast_precision_loss)]
    let share = minutes / rounds as f32 / slots.len().max(1) as f32;
    let mut reps = slots
        .iter()
        .map(|(exercise, load)| {
            snap(
                model.adjusted_rate(exercise.name, *load, minutes) * share,
                exercise.reps,
            )
        })
        .collect::<Vec<_>>();
    let tables = slots.iter().map(|(e, _)| e.reps).collect::<Vec<_>>();
    cluster(&mut reps, &tables);
    reps
}

/// Nearest allowed rep count. Ties resolve to the smaller option.
#[must_use]
pub fn snap(raw: f32, options: &[u32]) -> u32 {
    #[allow(clippy::cast_precision_loss)]
    let distance = |option: u32| (option as f32 - raw).abs();
    options
        .iter()
        .copied()
        .reduce(|nearest, option| {
            if distance(option) < distance(nearest) {
                option
            } else {
                nearest
            }
        })
        .unwrap_or_else(|| {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let reps = raw.round().max(1.0) as u32;
            reps
        })
}

/// Unify rep counts that are close to each other.
///
/// Every not yet assigned rep count collects all later unassigned counts within
/// [`CLUSTER_DISTANCE`]. A cluster takes its most frequent value (the earliest one on ties),
/// considering only values every member's table allows. Clusters without such a value are left
/// unchanged.
pub fn cluster(reps: &mut [u32], tables: &[&[u32]]) {
    let mut assigned = vec![false; reps.len()];

    for i in 0..reps.len() {
        if assigned[i] {
            continue;
        }
        assigned[i] = true;
        let mut members = vec![i];
        for j in i + 1..reps.len() {
            if !assigned[j] && reps[i].abs_diff(reps[j]) <= CLUSTER_DISTANCE {
                assigned[j] = true;
                members.push(j);
            }
        }
        if members.len() < 2 {
            continue;
        }

        let allowed = |value: u32| {
            members.iter().all(|&m| {
                tables
                    .get(m)
                    .is_none_or(|table| table.is_empty() || table.contains(&value))
            })
        };
        let mut mode = None;
        let mut max_count = 0;
        for &m in &members {
            let value = reps[m];
            if !allowed(value) {
                continue;
            }
            let count = members.iter().filter(|&&n| reps[n] == value).count();
            if count > max_count {
                max_count = count;
                mode = Some(value);
            }
        }

        if let Some(mode) = mode {
            for m in members {
                reps[m] = mode;
            }
        }
    }
}
