use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
};

use crate::{Barbell, Equipment, Exercise, Lift};

/// Share of a one-rep max that a working load may reach.
pub const LOAD_CAP: f32 = 0.8;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AthleteProfile {
    pub gender: Gender,
    pub equipment: BTreeSet<Equipment>,
    /// Skill levels by exercise name.
    pub skills: BTreeMap<String, SkillLevel>,
    /// One-rep maxes in pounds.
    pub one_rep_maxes: BTreeMap<Lift, f32>,
}

impl AthleteProfile {
    /// Whether the athlete owns the equipment and has the skill for an exercise.
    #[must_use]
    pub fn allows(&self, exercise: &Exercise) -> bool {
        exercise
            .equipment
            .iter()
            .all(|e| self.equipment.contains(e))
            && self.skill(exercise.name) != Some(SkillLevel::DontHaveIt)
    }

    #[must_use]
    pub fn skill(&self, name: &str) -> Option<SkillLevel> {
        self.skills.get(name).copied()
    }

    #[must_use]
    pub fn one_rep_max(&self, lift: Lift) -> Option<f32> {
        self.one_rep_maxes
            .get(&lift)
            .copied()
            .filter(|weight| *weight > 0.0)
    }

    /// Heaviest working load for a barbell movement, if the relevant one-rep max is known.
    #[must_use]
    pub fn load_cap(&self, barbell: &Barbell) -> Option<f32> {
        self.one_rep_max(barbell.lift)
            .map(|one_rep_max| one_rep_max * barbell.ratio * LOAD_CAP)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Female,
    #[default]
    Male,
}

impl From<&str> for Gender {
    fn from(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("female") {
            Gender::Female
        } else {
            Gender::Male
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Gender::Female => "Female",
                Gender::Male => "Male",
            }
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SkillLevel {
    DontHaveIt,
    Beginner,
    Intermediate,
    Advanced,
}

impl From<&str> for SkillLevel {
    fn from(value: &str) -> Self {
        let value = value.trim().to_ascii_lowercase().replace('\u{2019}', "'");
        if value.starts_with("don't have") || value.starts_with("dont have") {
            SkillLevel::DontHaveIt
        } else if value.starts_with("advanced") {
            SkillLevel::Advanced
        } else if value.starts_with("intermediate") {
            SkillLevel::Intermediate
        } else {
            SkillLevel::Beginner
        }
    }
}
