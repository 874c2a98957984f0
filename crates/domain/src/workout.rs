use derive_more::{Deref, Display};
use rand::Rng;
use serde::Serialize;
use uuid::{Builder, Uuid};

use crate::{Benchmark, Format, Load, Pattern, TimeDomain};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedWorkout {
    pub id: WorkoutID,
    pub name: String,
    #[serde(flatten)]
    pub scheme: Scheme,
    /// Back-calculated duration in minutes.
    pub duration: f32,
    /// Duration in minutes the rates of this workout are paced for.
    pub pacing: f32,
    pub time_domain: TimeDomain,
    pub exercises: Vec<GeneratedExercise>,
    pub benchmark: Benchmark,
}

impl GeneratedWorkout {
    #[must_use]
    pub fn format(&self) -> Format {
        self.scheme.format()
    }

    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.exercises.iter().map(|e| e.name.as_str()).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "format")]
pub enum Scheme {
    #[serde(rename = "AMRAP")]
    Amrap { time_cap: u32 },
    #[serde(rename = "For Time")]
    ForTime { pattern: Pattern },
    #[serde(rename = "Rounds For Time")]
    RoundsForTime { rounds: u32 },
}

impl Scheme {
    #[must_use]
    pub fn format(self) -> Format {
        match self {
            Scheme::Amrap { .. } => Format::Amrap,
            Scheme::ForTime { .. } => Format::ForTime,
            Scheme::RoundsForTime { .. } => Format::RoundsForTime,
        }
    }

    /// Number of times the listed reps are performed.
    #[must_use]
    pub fn rounds(self) -> u32 {
        match self {
            Scheme::RoundsForTime { rounds } => rounds,
            Scheme::Amrap { .. } | Scheme::ForTime { .. } => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedExercise {
    pub name: String,
    /// Reps per round, or the total reps of the pattern in For Time workouts.
    pub reps: u32,
    pub load: Option<Load>,
}

#[derive(Deref, Display, Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct WorkoutID(Uuid);

impl WorkoutID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut bytes = [0; 16];
        rng.fill_bytes(&mut bytes);
        Self(Builder::from_random_bytes(bytes).into_uuid())
    }
}

impl From<Uuid> for WorkoutID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for WorkoutID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}
