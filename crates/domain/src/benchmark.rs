use std::{cmp::Ordering, fmt};

use chrono::Duration;
use serde::{Serialize, Serializer};

use crate::{GeneratedExercise, RateModel, Scheme};

/// Rate multiplier of the sustainable tier.
pub const SUSTAINABLE_PACE: f32 = 1.0;
/// Rate multiplier of the elite tier.
pub const ELITE_PACE: f32 = 1.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Benchmark {
    pub sustainable: Score,
    pub elite: Score,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Score {
    /// Completed rounds and reps of a partial round.
    Rounds { rounds: u32, reps: u32 },
    Time(Duration),
}

impl Score {
    /// Compare two scores by performance. Better scores are greater.
    ///
    /// Scores of different kinds are not comparable.
    #[must_use]
    pub fn compare(&self, other: &Score) -> Option<Ordering> {
        match (self, other) {
            (
                Score::Rounds { rounds, reps },
                Score::Rounds {
                    rounds: other_rounds,
                    reps: other_reps,
                },
            ) => Some((rounds, reps).cmp(&(other_rounds, other_reps))),
            (Score::Time(time), Score::Time(other_time)) => Some(other_time.cmp(time)),
            _ => None,
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::Rounds { rounds, reps } => write!(f, "{rounds}+{reps}"),
            Score::Time(time) => {
                let seconds = time.num_seconds();
                write!(f, "{}:{:02}", seconds / 60, seconds % 60)
            }
        }
    }
}

impl Serialize for Score {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Predict the sustainable and elite scores of a workout.
#[must_use]
pub fn predict(
    model: &RateModel,
    scheme: Scheme,
    exercises: &[GeneratedExercise],
    pacing: f32,
) -> Benchmark {
    Benchmark {
        sustainable: score(model, scheme, exercises, pacing, SUSTAINABLE_PACE),
        elite: score(model, scheme, exercises, pacing, ELITE_PACE),
    }
}

fn score(
    model: &RateModel,
    scheme: Scheme,
    exercises: &[GeneratedExercise],
    pacing: f32,
    pace: f32,
) -> Score {
    let rates = exercises
        .iter()
        .map(|e| model.adjusted_rate(&e.name, e.load, pacing) * pace)
        .collect::<Vec<_>>();
    #[allow(clippy::cast_precision_loss)]
    let round_minutes = exercises
        .iter()
        .zip(&rates)
        .map(|(e, rate)| e.reps as f32 / rate)
        .sum::<f32>();

    match scheme {
        Scheme::Amrap { time_cap } => {
            #[allow(clippy::cast_precision_loss)]
            let time_cap = time_cap as f32;
            amrap_score(exercises, &rates, round_minutes, time_cap)
        }
        Scheme::ForTime { .. } | Scheme::RoundsForTime { .. } => {
            #[allow(clippy::cast_precision_loss)]
            let minutes = round_minutes * scheme.rounds() as f32;
            #[allow(clippy::cast_possible_truncation)]
            let seconds = (minutes * 60.0).round() as i64;
            Score::Time(Duration::seconds(seconds))
        }
    }
}

fn amrap_score(
    exercises: &[GeneratedExercise],
    rates: &[f32],
    round_minutes: f32,
    time_cap: f32,
) -> Score {
    if round_minutes <= 0.0 {
        return Score::Rounds { rounds: 0, reps: 0 };
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let rounds = (time_cap / round_minutes).floor() as u32;
    #[allow(clippy::cast_precision_loss)]
    let mut remaining = time_cap - rounds as f32 * round_minutes;
    let mut reps = 0;

    for (exercise, rate) in exercises.iter().zip(rates) {
        #[allow(clippy::cast_precision_loss)]
        let minutes = exercise.reps as f32 / rate;
        if minutes <= remaining {
            reps += exercise.reps;
            remaining -= minutes;
        } else {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let partial = (rate * remaining).floor().max(0.0) as u32;
            reps += partial;
            break;
        }
    }

    Score::Rounds { rounds, reps }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::{Catalog, Load, Pattern};

    use super::*;

    fn exercise(name: &str, reps: u32) -> GeneratedExercise {
        GeneratedExercise {
            name: name.to_string(),
            reps,
            load: None,
        }
    }

    #[rstest]
    #[case(Score::Rounds { rounds: 5, reps: 12 }, "5+12")]
    #[case(Score::Rounds { rounds: 0, reps: 0 }, "0+0")]
    #[case(Score::Time(Duration::seconds(425)), "7:05")]
    #[case(Score::Time(Duration::seconds(59)), "0:59")]
    #[case(Score::Time(Duration::seconds(1500)), "25:00")]
    fn test_score_display(#[case] score: Score, #[case] expected: &str) {
        assert_eq!(score.to_string(), expected);
    }

    #[rstest]
    #[case(Score::Rounds { rounds: 5, reps: 0 }, Score::Rounds { rounds: 4, reps: 30 }, Some(Ordering::Greater))]
    #[case(Score::Rounds { rounds: 5, reps: 3 }, Score::Rounds { rounds: 5, reps: 9 }, Some(Ordering::Less))]
    #[case(Score::Time(Duration::seconds(200)), Score::Time(Duration::seconds(300)), Some(Ordering::Greater))]
    #[case(Score::Time(Duration::seconds(300)), Score::Time(Duration::seconds(300)), Some(Ordering::Equal))]
    #[case(Score::Time(Duration::seconds(300)), Score::Rounds { rounds: 5, reps: 0 }, None)]
    fn test_score_compare(
        #[case] score: Score,
        #[case] other: Score,
        #[case] expected: Option<Ordering>,
    ) {
        assert_eq!(score.compare(&other), expected);
    }

    #[test]
    fn test_predict_for_time() {
        let catalog = Catalog::default();
        let model = RateModel::new(&catalog, None);
        let exercises = [exercise("Thrusters", 45), exercise("Burpees", 45)];

        // 45 / 15 + 45 / 12 = 6.75 minutes at sustainable pace
        assert_eq!(
            predict(
                &model,
                Scheme::ForTime {
                    pattern: Pattern::_21_15_9
                },
                &exercises,
                3.0
            ),
            Benchmark {
                sustainable: Score::Time(Duration::seconds(405)),
                elite: Score::Time(Duration::seconds(312)),
            }
        );
    }

    #[test]
    fn test_predict_rounds_for_time() {
        let catalog = Catalog::default();
        let model = RateModel::new(&catalog, None);
        let exercises = [exercise("Wall Balls", 15), exercise("Box Jumps", 15)];

        // 5 rounds of 15 / 17 + 15 / 12.75 minutes
        assert_eq!(
            predict(
                &model,
                Scheme::RoundsForTime { rounds: 5 },
                &exercises,
                7.5
            )
            .sustainable,
            Score::Time(Duration::seconds(618))
        );
    }

    #[test]
    fn test_predict_amrap() {
        let catalog = Catalog::default();
        let model = RateModel::new(&catalog, None);
        let exercises = [exercise("Pull-ups", 9), exercise("Push-ups", 15)];

        // A round takes 9 / 13.5 + 15 / 15 = 5 / 3 minutes, leaving 1 / 3 minutes after 7 rounds
        assert_eq!(
            predict(&model, Scheme::Amrap { time_cap: 12 }, &exercises, 12.0),
            Benchmark {
                sustainable: Score::Rounds { rounds: 7, reps: 4 },
                elite: Score::Rounds { rounds: 9, reps: 8 },
            }
        );
    }

    #[test]
    fn test_predict_elite_not_behind_sustainable() {
        let catalog = Catalog::default();
        let model = RateModel::new(&catalog, None);
        let exercises = [
            GeneratedExercise {
                load: Some(Load::Standard {
                    male: 135,
                    female: 95,
                }),
                ..exercise("Power Cleans", 10)
            },
            exercise("Toes to Bar", 12),
            exercise("Double Unders", 50),
        ];

        for time_cap in 6..=25 {
            let benchmark = predict(&model, Scheme::Amrap { time_cap }, &exercises, 12.0);
            assert_ne!(
                benchmark.elite.compare(&benchmark.sustainable),
                Some(Ordering::Less)
            );
        }
        for rounds in 1..=12 {
            let benchmark = predict(&model, Scheme::RoundsForTime { rounds }, &exercises, 17.5);
            assert_eq!(
                benchmark.elite.compare(&benchmark.sustainable),
                Some(Ordering::Greater)
            );
        }
    }
}
