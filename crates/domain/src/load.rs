use std::fmt;

use log::warn;
use rand::{Rng, seq::SliceRandom};
use serde::{Serialize, Serializer};

use crate::{AthleteProfile, Barbell, Exercise, Gender, Implement};

pub const DUMBBELL_LOAD: Load = Load::Standard {
    male: 50,
    female: 35,
};

/// External load in pounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Load {
    Standard { male: u32, female: u32 },
    Personal(u32),
}

impl Load {
    #[must_use]
    pub fn for_gender(self, gender: Gender) -> u32 {
        match (self, gender) {
            (Load::Standard { male, .. }, Gender::Male) => male,
            (Load::Standard { female, .. }, Gender::Female) => female,
            (Load::Personal(weight), _) => weight,
        }
    }
}

impl fmt::Display for Load {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Load::Standard { male, female } => write!(f, "{male}/{female}"),
            Load::Personal(weight) => write!(f, "{weight}"),
        }
    }
}

impl Serialize for Load {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Pick a working load for an exercise.
///
/// Barbell movements get a personal load below 80 % of the athlete's one-rep max, if the profile
/// contains the relevant lift, and a standard pair from the movement's ladder otherwise. Dumbbell
/// movements always get the standard dumbbell pair. Other exercises are unloaded.
pub fn generate_load<R: Rng + ?Sized>(
    exercise: &Exercise,
    profile: Option<&AthleteProfile>,
    rng: &mut R,
) -> Option<Load> {
    match &exercise.implement {
        Some(Implement::Barbell(barbell)) => barbell_load(exercise.name, barbell, profile, rng),
        Some(Implement::Dumbbell) => Some(DUMBBELL_LOAD),
        Some(Implement::Kettlebell) | None => None,
    }
}

fn barbell_load<R: Rng + ?Sized>(
    name: &str,
    barbell: &Barbell,
    profile: Option<&AthleteProfile>,
    rng: &mut R,
) -> Option<Load> {
    let Some((profile, cap)) = profile.and_then(|p| p.load_cap(barbell).map(|cap| (p, cap)))
    else {
        return barbell
            .ladder
            .choose(rng)
            .map(|&(male, female)| Load::Standard { male, female });
    };

    let weights = barbell
        .ladder
        .iter()
        .map(|&(male, female)| Load::Standard { male, female }.for_gender(profile.gender))
        .collect::<Vec<_>>();
    #[allow(clippy::cast_precision_loss)]
    let feasible = weights
        .iter()
        .copied()
        .filter(|weight| *weight as f32 <= cap)
        .collect::<Vec<_>>();

    if let Some(weight) = feasible.choose(rng) {
        return Some(Load::Personal(*weight));
    }

    let lightest = weights.iter().copied().min()?;
    warn!("no standard load of {name} below {cap:.0} lb, falling back to {lightest} lb");
    Some(Load::Personal(lightest))
}
