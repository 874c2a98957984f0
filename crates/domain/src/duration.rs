use crate::{GeneratedExercise, RateModel, Scheme, TimeDomain};

/// Minutes a workout takes at sustainable pace.
///
/// AMRAP workouts last exactly their time cap. Timed workouts take the sum of every exercise's
/// reps divided by its adjusted rate, multiplied by the number of rounds. Rates are paced for
/// `pacing` minutes.
#[must_use]
pub fn workout_minutes(
    model: &RateModel,
    scheme: Scheme,
    exercises: &[GeneratedExercise],
    pacing: f32,
) -> f32 {
    match scheme {
        #[allow(clippy::cast_precision_loss)]
        Scheme::Amrap { time_cap } => time_cap as f32,
        Scheme::ForTime { .. } | Scheme::RoundsForTime { .. } => {
            let round_minutes = exercises
                .iter()
                .map(|e| {
                    #[allow(clippy::cast_precision_loss)]
                    let reps = e.reps as f32;
                    reps / model.adjusted_rate(&e.name, e.load, pacing)
                })
                .sum::<f32>();
            #[allow(clippy::cast_precision_loss)]
            let rounds = scheme.rounds() as f32;
            round_minutes * rounds
        }
    }
}

/// Duration in minutes and time domain of a workout.
#[must_use]
pub fn back_calculate(
    model: &RateModel,
    scheme: Scheme,
    exercises: &[GeneratedExercise],
    pacing: f32,
) -> (f32, TimeDomain) {
    let minutes = workout_minutes(model, scheme, exercises, pacing);
    (minutes, TimeDomain::classify(minutes))
}
