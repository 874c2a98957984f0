use std::fmt;

use serde::{Serialize, Serializer};

use crate::{Catalog, PatternError, Tier};

/// Descending rep scheme of a For Time workout, applied to every exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern(&'static [u32]);

impl Pattern {
    pub const _21_15_9: Pattern = Pattern(&[21, 15, 9]);
    pub const _15_12_9: Pattern = Pattern(&[15, 12, 9]);
    pub const _12_9_6: Pattern = Pattern(&[12, 9, 6]);
    pub const _10_8_6_4_2: Pattern = Pattern(&[10, 8, 6, 4, 2]);
    pub const _15_12_9_6_3: Pattern = Pattern(&[15, 12, 9, 6, 3]);
    pub const _27_21_15_9: Pattern = Pattern(&[27, 21, 15, 9]);
    pub const _33_27_21_15_9: Pattern = Pattern(&[33, 27, 21, 15, 9]);
    pub const _50_40_30_20_10: Pattern = Pattern(&[50, 40, 30, 20, 10]);
    pub const _40_30_20_10: Pattern = Pattern(&[40, 30, 20, 10]);

    pub const ALL: [Pattern; 9] = [
        Pattern::_21_15_9,
        Pattern::_15_12_9,
        Pattern::_12_9_6,
        Pattern::_10_8_6_4_2,
        Pattern::_15_12_9_6_3,
        Pattern::_27_21_15_9,
        Pattern::_33_27_21_15_9,
        Pattern::_50_40_30_20_10,
        Pattern::_40_30_20_10,
    ];

    #[must_use]
    pub fn reps(self) -> &'static [u32] {
        self.0
    }

    #[must_use]
    pub fn total(self) -> u32 {
        self.0.iter().sum()
    }

    /// Long patterns are only offered to workouts with two exercises.
    #[must_use]
    pub fn is_long(self) -> bool {
        [
            Pattern::_27_21_15_9,
            Pattern::_33_27_21_15_9,
            Pattern::_50_40_30_20_10,
            Pattern::_40_30_20_10,
        ]
        .contains(&self)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reps = self
            .0
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join("-");
        write!(f, "{reps}")
    }
}

impl TryFrom<&str> for Pattern {
    type Error = PatternError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let reps = value
            .trim()
            .split('-')
            .map(|r| r.trim().parse::<u32>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| PatternError::ParseError)?;
        Pattern::ALL
            .into_iter()
            .find(|p| p.0 == reps.as_slice())
            .ok_or_else(|| PatternError::Unknown(value.trim().to_string()))
    }
}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl Tier {
    #[must_use]
    pub fn patterns(self) -> &'static [Pattern] {
        match self {
            Tier::HighSkill => &[Pattern::_21_15_9, Pattern::_15_12_9, Pattern::_12_9_6],
            Tier::HighVolume | Tier::Moderate => &[
                Pattern::_21_15_9,
                Pattern::_15_12_9,
                Pattern::_12_9_6,
                Pattern::_10_8_6_4_2,
                Pattern::_15_12_9_6_3,
            ],
            Tier::LowSkill => &Pattern::ALL,
        }
    }
}

impl Catalog {
    /// Patterns under which all given exercises may be combined.
    ///
    /// The most restrictive tier among the exercises determines the base list,
    /// which is then narrowed by every exercise-specific restriction. Names
    /// missing from the catalog do not restrict anything. An empty result means
    /// the combination is not possible as a For Time workout.
    #[must_use]
    pub fn allowed_patterns(&self, names: &[&str]) -> Vec<Pattern> {
        let exercises = names
            .iter()
            .filter_map(|name| self.get(name))
            .collect::<Vec<_>>();
        let tier = exercises
            .iter()
            .map(|e| e.tier)
            .max()
            .unwrap_or(Tier::LowSkill);

        tier.patterns()
            .iter()
            .copied()
            .filter(|pattern| {
                exercises
                    .iter()
                    .filter_map(|e| e.patterns)
                    .all(|restriction| restriction.contains(pattern))
            })
            .collect()
    }
}
