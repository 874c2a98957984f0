use std::slice::Iter;

use crate::{EquipmentError, LiftError, Pattern};

#[derive(Debug, Clone, PartialEq)]
pub struct Exercise {
    pub name: &'static str,
    /// Sustainable reps per minute at moderate intensity.
    pub rate: f32,
    pub equipment: &'static [Equipment],
    pub tier: Tier,
    pub implement: Option<Implement>,
    /// Allowed reps per round.
    pub reps: &'static [u32],
    /// Exercise-specific pattern restriction, intersected with the tier's patterns.
    pub patterns: Option<&'static [Pattern]>,
    pub cardio: bool,
}

impl Exercise {
    #[must_use]
    pub fn is_barbell(&self) -> bool {
        matches!(self.implement, Some(Implement::Barbell(_)))
    }

    #[must_use]
    pub fn is_dumbbell(&self) -> bool {
        matches!(self.implement, Some(Implement::Dumbbell))
    }

    #[must_use]
    pub fn is_kettlebell(&self) -> bool {
        matches!(self.implement, Some(Implement::Kettlebell))
    }

    #[must_use]
    pub fn barbell(&self) -> Option<&Barbell> {
        match &self.implement {
            Some(Implement::Barbell(barbell)) => Some(barbell),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Implement {
    Barbell(Barbell),
    Dumbbell,
    Kettlebell,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Barbell {
    /// Lift whose one-rep max bounds the working load.
    pub lift: Lift,
    /// Share of the lift's one-rep max that counts as this movement's maximum.
    pub ratio: f32,
    pub degradation: Degradation,
    /// Standard loads as (male, female) pairs in pounds, ascending.
    pub ladder: &'static [(u32, u32)],
}

/// How strongly heavy loads slow a barbell movement down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Degradation {
    Mild,
    Medium,
    Highest,
}

impl Degradation {
    /// Rate multiplier at 100 % intensity.
    #[must_use]
    pub fn floor(self) -> f32 {
        match self {
            Degradation::Mild => 0.8,
            Degradation::Medium => 0.7,
            Degradation::Highest => 0.6,
        }
    }

    /// Rate multiplier for an intensity relative to the load cap.
    ///
    /// Intensities up to 50 % do not slow the movement down. Above that the
    /// multiplier falls linearly and reaches [`Degradation::floor`] at 100 %.
    #[must_use]
    pub fn multiplier(self, intensity: f32) -> f32 {
        if intensity <= 0.5 {
            return 1.0;
        }
        let progress = ((intensity - 0.5) / 0.5).min(1.0);
        1.0 - (1.0 - self.floor()) * progress
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    LowSkill,
    Moderate,
    HighVolume,
    HighSkill,
}

impl Property for Tier {
    fn iter() -> Iter<'static, Tier> {
        static TIERS: [Tier; 4] = [
            Tier::LowSkill,
            Tier::Moderate,
            Tier::HighVolume,
            Tier::HighSkill,
        ];
        TIERS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Tier::LowSkill => "Low Skill",
            Tier::Moderate => "Moderate",
            Tier::HighVolume => "High Volume",
            Tier::HighSkill => "High Skill",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Lift {
    Snatch,
    CleanAndJerk,
    OverheadSquat,
    Deadlift,
}

impl Property for Lift {
    fn iter() -> Iter<'static, Lift> {
        static LIFTS: [Lift; 4] = [
            Lift::Snatch,
            Lift::CleanAndJerk,
            Lift::OverheadSquat,
            Lift::Deadlift,
        ];
        LIFTS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Lift::Snatch => "Snatch",
            Lift::CleanAndJerk => "Clean and Jerk",
            Lift::OverheadSquat => "Overhead Squat",
            Lift::Deadlift => "Deadlift",
        }
    }
}

impl TryFrom<&str> for Lift {
    type Error = LiftError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("Clean & Jerk") {
            return Ok(Lift::CleanAndJerk);
        }
        Lift::iter()
            .find(|l| l.name().eq_ignore_ascii_case(value))
            .copied()
            .ok_or_else(|| LiftError::Unknown(value.to_string()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Equipment {
    Barbell,
    BikeErg,
    ClimbingRope,
    Dumbbells,
    Ghd,
    HighRings,
    JumpRope,
    Kettlebells,
    PlyoBox,
    PullUpBar,
    RowingMachine,
    SkiErg,
    SquatRack,
    WallBall,
    WallSpace,
}

impl Property for Equipment {
    fn iter() -> Iter<'static, Equipment> {
        static EQUIPMENT: [Equipment; 15] = [
            Equipment::Barbell,
            Equipment::BikeErg,
            Equipment::ClimbingRope,
            Equipment::Dumbbells,
            Equipment::Ghd,
            Equipment::HighRings,
            Equipment::JumpRope,
            Equipment::Kettlebells,
            Equipment::PlyoBox,
            Equipment::PullUpBar,
            Equipment::RowingMachine,
            Equipment::SkiErg,
            Equipment::SquatRack,
            Equipment::WallBall,
            Equipment::WallSpace,
        ];
        EQUIPMENT.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Equipment::Barbell => "Barbell",
            Equipment::BikeErg => "Bike Erg",
            Equipment::ClimbingRope => "Climbing Rope",
            Equipment::Dumbbells => "Dumbbells",
            Equipment::Ghd => "GHD",
            Equipment::HighRings => "High Rings",
            Equipment::JumpRope => "Jump Rope",
            Equipment::Kettlebells => "Kettlebells",
            Equipment::PlyoBox => "Plyo Box",
            Equipment::PullUpBar => "Pullup Bar or Rig",
            Equipment::RowingMachine => "Rowing Machine",
            Equipment::SkiErg => "Ski Erg",
            Equipment::SquatRack => "Squat Rack",
            Equipment::WallBall => "Wall Ball",
            Equipment::WallSpace => "Wall Space",
        }
    }
}

impl TryFrom<&str> for Equipment {
    type Error = EquipmentError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let value = value.trim();
        Equipment::iter()
            .find(|e| e.name().eq_ignore_ascii_case(value))
            .copied()
            .ok_or_else(|| EquipmentError::Unknown(value.to_string()))
    }
}

pub trait Property: Clone + Copy + Sized {
    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Degradation::Mild, 0.0, 1.0)]
    #[case(Degradation::Mild, 0.5, 1.0)]
    #[case(Degradation::Mild, 0.75, 0.9)]
    #[case(Degradation::Mild, 1.0, 0.8)]
    #[case(Degradation::Medium, 1.0, 0.7)]
    #[case(Degradation::Highest, 0.75, 0.8)]
    #[case(Degradation::Highest, 1.0, 0.6)]
    #[case(Degradation::Highest, 1.2, 0.6)]
    fn test_degradation_multiplier(
        #[case] degradation: Degradation,
        #[case] intensity: f32,
        #[case] expected: f32,
    ) {
        assert_approx_eq!(degradation.multiplier(intensity), expected);
    }

    #[test]
    fn test_tier_order() {
        assert!(Tier::HighSkill > Tier::HighVolume);
        assert!(Tier::HighVolume > Tier::Moderate);
        assert!(Tier::Moderate > Tier::LowSkill);
        assert_eq!(Tier::iter().max(), Some(&Tier::HighSkill));
    }

    #[rstest]
    #[case("Pullup Bar or Rig", Ok(Equipment::PullUpBar))]
    #[case("ghd", Ok(Equipment::Ghd))]
    #[case(" Rowing Machine ", Ok(Equipment::RowingMachine))]
    #[case("Trap Bar", Err(EquipmentError::Unknown("Trap Bar".to_string())))]
    fn test_equipment_try_from_str(
        #[case] value: &str,
        #[case] expected: Result<Equipment, EquipmentError>,
    ) {
        assert_eq!(Equipment::try_from(value), expected);
    }

    #[rstest]
    #[case("Snatch", Ok(Lift::Snatch))]
    #[case("Clean and Jerk", Ok(Lift::CleanAndJerk))]
    #[case("Clean & Jerk", Ok(Lift::CleanAndJerk))]
    #[case("overhead squat", Ok(Lift::OverheadSquat))]
    #[case("Deadlift", Ok(Lift::Deadlift))]
    #[case("Bench Press", Err(LiftError::Unknown("Bench Press".to_string())))]
    fn test_lift_try_from_str(#[case] value: &str, #[case] expected: Result<Lift, LiftError>) {
        assert_eq!(Lift::try_from(value), expected);
    }
}
