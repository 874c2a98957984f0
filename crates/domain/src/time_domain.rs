use std::ops::RangeInclusive;

use serde::Serialize;
use strum::{AsRefStr, Display, EnumIter, IntoEnumIterator};

use crate::TimeDomainError;

/// Duration bucket of a workout.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    AsRefStr,
    Display,
    EnumIter,
    Serialize,
)]
pub enum TimeDomain {
    #[strum(serialize = "1:00 - 5:00")]
    #[serde(rename = "1:00 - 5:00")]
    Sprint,
    #[strum(serialize = "5:00 - 10:00")]
    #[serde(rename = "5:00 - 10:00")]
    Short,
    #[strum(serialize = "10:00 - 15:00")]
    #[serde(rename = "10:00 - 15:00")]
    Medium,
    #[strum(serialize = "15:00 - 20:00")]
    #[serde(rename = "15:00 - 20:00")]
    Long,
    #[strum(serialize = "20:00+")]
    #[serde(rename = "20:00+")]
    Extended,
}

impl TimeDomain {
    #[must_use]
    pub fn classify(minutes: f32) -> Self {
        if minutes <= 5.0 {
            TimeDomain::Sprint
        } else if minutes <= 10.0 {
            TimeDomain::Short
        } else if minutes <= 15.0 {
            TimeDomain::Medium
        } else if minutes <= 20.0 {
            TimeDomain::Long
        } else {
            TimeDomain::Extended
        }
    }

    /// Duration a workout of this bucket is paced for.
    #[must_use]
    pub fn target_minutes(self) -> f32 {
        match self {
            TimeDomain::Sprint => 3.0,
            TimeDomain::Short => 7.5,
            TimeDomain::Medium => 12.5,
            TimeDomain::Long => 17.5,
            TimeDomain::Extended => 25.0,
        }
    }

    /// Share of the sustainable rate that can be held for the whole bucket.
    #[must_use]
    pub fn pacing_factor(self) -> f32 {
        match self {
            TimeDomain::Sprint => 1.0,
            TimeDomain::Short => 0.85,
            TimeDomain::Medium => 0.75,
            TimeDomain::Long => 0.65,
            TimeDomain::Extended => 0.55,
        }
    }

    #[must_use]
    pub fn minutes_per_round(self) -> f32 {
        match self {
            TimeDomain::Sprint => 1.5,
            TimeDomain::Short => 1.8,
            TimeDomain::Medium => 2.0,
            TimeDomain::Long | TimeDomain::Extended => 2.2,
        }
    }

    #[must_use]
    pub fn min_rounds(self) -> u32 {
        match self {
            TimeDomain::Sprint => 2,
            TimeDomain::Short => 3,
            TimeDomain::Medium => 4,
            TimeDomain::Long | TimeDomain::Extended => 5,
        }
    }

    /// Time caps in minutes of AMRAP workouts in this bucket.
    ///
    /// AMRAP workouts need at least six minutes, so there are none in the shortest bucket.
    #[must_use]
    pub fn amrap_caps(self) -> Option<RangeInclusive<u32>> {
        match self {
            TimeDomain::Sprint => None,
            TimeDomain::Short => Some(6..=10),
            TimeDomain::Medium => Some(11..=15),
            TimeDomain::Long => Some(16..=20),
            TimeDomain::Extended => Some(21..=25),
        }
    }

    #[must_use]
    pub fn rounds(self) -> RangeInclusive<u32> {
        match self {
            TimeDomain::Sprint => 1..=3,
            TimeDomain::Short => 3..=5,
            TimeDomain::Medium => 5..=7,
            TimeDomain::Long => 6..=9,
            TimeDomain::Extended => 8..=12,
        }
    }
}

impl TryFrom<&str> for TimeDomain {
    type Error = TimeDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let value = value.trim();
        if value == "20+" {
            return Ok(TimeDomain::Extended);
        }
        TimeDomain::iter()
            .find(|d| d.as_ref() == value)
            .ok_or_else(|| TimeDomainError::Unknown(value.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, Serialize)]
pub enum Format {
    #[strum(serialize = "AMRAP")]
    #[serde(rename = "AMRAP")]
    Amrap,
    #[strum(serialize = "For Time")]
    #[serde(rename = "For Time")]
    ForTime,
    #[strum(serialize = "Rounds For Time")]
    #[serde(rename = "Rounds For Time")]
    RoundsForTime,
}

impl Format {
    #[must_use]
    pub fn is_available(self, domain: TimeDomain) -> bool {
        self != Format::Amrap || domain.amrap_caps().is_some()
    }

    /// Allowed number of exercises for a workout paced for the given duration.
    #[must_use]
    pub fn exercise_count(self, target_minutes: f32) -> RangeInclusive<usize> {
        match self {
            Format::ForTime => 2..=3,
            Format::Amrap | Format::RoundsForTime => {
                if target_minutes <= 10.0 {
                    2..=3
                } else {
                    2..=4
                }
            }
        }
    }
}
