use std::collections::BTreeMap;

use crate::{Barbell, Degradation, Equipment, Exercise, Implement, Lift, Pattern, Tier};

/// Exercises, load ladders and forbidden combinations the engine works with.
///
/// A catalog is passed into every component instead of being looked up globally, so that tests
/// can work with reduced catalogs.
#[derive(Debug, Clone)]
pub struct Catalog {
    exercises: BTreeMap<&'static str, Exercise>,
    forbidden_pairs: Vec<(&'static str, &'static str)>,
}

impl Catalog {
    #[must_use]
    pub fn new(
        exercises: impl IntoIterator<Item = Exercise>,
        forbidden_pairs: impl IntoIterator<Item = (&'static str, &'static str)>,
    ) -> Self {
        Self {
            exercises: exercises.into_iter().map(|e| (e.name, e)).collect(),
            forbidden_pairs: forbidden_pairs.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Exercise> {
        self.exercises.get(name)
    }

    /// Exercises in name order.
    pub fn exercises(&self) -> impl Iterator<Item = &Exercise> {
        self.exercises.values()
    }

    #[must_use]
    pub fn forbidden_pairs(&self) -> &[(&'static str, &'static str)] {
        &self.forbidden_pairs
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(EXERCISES.iter().cloned(), FORBIDDEN_PAIRS.iter().copied())
    }
}

const LOADED_REPS: &[u32] = &[3, 5, 6, 10, 12, 15, 18, 20, 25, 30];
const GYMNASTICS_REPS: &[u32] = &[3, 5, 6, 9, 10, 12, 15, 18, 20, 24, 25, 30];
const BOX_REPS: &[u32] = &[3, 5, 10, 12, 15, 18, 20, 24, 25, 30];
const CALORIE_REPS: &[u32] = &[10, 12, 15, 18, 21, 24, 25, 30, 35, 40, 50, 60, 75, 100];
const KETTLEBELL_REPS: &[u32] = &[10, 12, 15, 18, 20, 25, 30, 40, 50, 60];
const DOUBLE_UNDER_REPS: &[u32] = &[15, 20, 25, 30, 35, 40, 50, 60, 75, 100];
const WALL_BALL_REPS: &[u32] = &[10, 12, 15, 18, 20, 24, 25, 30, 35, 36, 40, 50, 60, 75];
const ROPE_CLIMB_REPS: &[u32] = &[2, 3, 5];
const LEGLESS_ROPE_CLIMB_REPS: &[u32] = &[1, 2, 3];

const DEADLIFT_LOADS: &[(u32, u32)] = &[(135, 95), (185, 135), (225, 155), (275, 185), (315, 205)];
const CLEAN_LOADS: &[(u32, u32)] = &[
    (75, 55),
    (95, 65),
    (115, 75),
    (135, 95),
    (165, 115),
    (185, 135),
    (225, 155),
    (275, 185),
    (315, 205),
];
const SNATCH_LOADS: &[(u32, u32)] = &[
    (75, 55),
    (95, 65),
    (115, 75),
    (135, 95),
    (165, 115),
    (185, 135),
    (225, 155),
];
const SQUAT_LOADS: &[(u32, u32)] = SNATCH_LOADS;

const CALORIE_PATTERNS: &[Pattern] = &[
    Pattern::_21_15_9,
    Pattern::_15_12_9_6_3,
    Pattern::_27_21_15_9,
    Pattern::_33_27_21_15_9,
    Pattern::_50_40_30_20_10,
    Pattern::_40_30_20_10,
];
const HIGH_REP_PATTERNS: &[Pattern] = &[Pattern::_50_40_30_20_10, Pattern::_40_30_20_10];

const fn barbell(
    lift: Lift,
    ratio: f32,
    degradation: Degradation,
    ladder: &'static [(u32, u32)],
) -> Option<Implement> {
    Some(Implement::Barbell(Barbell {
        lift,
        ratio,
        degradation,
        ladder,
    }))
}

const fn exercise(
    name: &'static str,
    rate: f32,
    equipment: &'static [Equipment],
    tier: Tier,
    reps: &'static [u32],
) -> Exercise {
    Exercise {
        name,
        rate,
        equipment,
        tier,
        implement: None,
        reps,
        patterns: None,
        cardio: false,
    }
}

const EXERCISES: [Exercise; 35] = [
    Exercise {
        implement: Some(Implement::Dumbbell),
        ..exercise(
            "Alternating Dumbbell Snatches",
            20.79,
            &[Equipment::Dumbbells],
            Tier::LowSkill,
            LOADED_REPS,
        )
    },
    exercise("Bar Muscle Ups", 7.0, &[Equipment::PullUpBar], Tier::HighSkill, GYMNASTICS_REPS),
    Exercise {
        cardio: true,
        patterns: Some(CALORIE_PATTERNS),
        ..exercise("Bike Calories", 18.0, &[Equipment::BikeErg], Tier::LowSkill, CALORIE_REPS)
    },
    exercise("Box Jump Overs", 15.0, &[Equipment::PlyoBox], Tier::LowSkill, BOX_REPS),
    exercise("Box Jumps", 15.0, &[Equipment::PlyoBox], Tier::LowSkill, BOX_REPS),
    exercise("Burpee Box Jump Overs", 12.0, &[Equipment::PlyoBox], Tier::LowSkill, BOX_REPS),
    exercise("Burpees", 12.0, &[], Tier::Moderate, GYMNASTICS_REPS),
    exercise(
        "Chest to Bar Pull-ups",
        18.0,
        &[Equipment::PullUpBar],
        Tier::Moderate,
        GYMNASTICS_REPS,
    ),
    Exercise {
        implement: barbell(Lift::CleanAndJerk, 1.0, Degradation::Medium, CLEAN_LOADS),
        ..exercise("Clean and Jerks", 12.0, &[Equipment::Barbell], Tier::Moderate, LOADED_REPS)
    },
    Exercise {
        implement: barbell(Lift::Deadlift, 1.0, Degradation::Mild, DEADLIFT_LOADS),
        ..exercise(
            "Deadlifts",
            12.0,
            &[Equipment::Barbell, Equipment::SquatRack],
            Tier::Moderate,
            LOADED_REPS,
        )
    },
    Exercise {
        patterns: Some(HIGH_REP_PATTERNS),
        ..exercise(
            "Double Unders",
            60.0,
            &[Equipment::JumpRope],
            Tier::HighVolume,
            DOUBLE_UNDER_REPS,
        )
    },
    Exercise {
        implement: Some(Implement::Dumbbell),
        ..exercise(
            "Dumbbell Box Step-Ups",
            15.0,
            &[Equipment::Dumbbells, Equipment::PlyoBox],
            Tier::LowSkill,
            LOADED_REPS,
        )
    },
    Exercise {
        implement: Some(Implement::Dumbbell),
        ..exercise(
            "Dumbbell Clean and Jerk",
            12.0,
            &[Equipment::Dumbbells],
            Tier::LowSkill,
            LOADED_REPS,
        )
    },
    Exercise {
        implement: Some(Implement::Dumbbell),
        ..exercise("Dumbbell Thrusters", 15.0, &[Equipment::Dumbbells], Tier::LowSkill, LOADED_REPS)
    },
    exercise("GHD Sit-ups", 15.0, &[Equipment::Ghd], Tier::Moderate, GYMNASTICS_REPS),
    exercise("Handstand Push-ups", 15.0, &[Equipment::WallSpace], Tier::HighSkill, GYMNASTICS_REPS),
    Exercise {
        implement: Some(Implement::Kettlebell),
        ..exercise(
            "Kettlebell Snatches",
            18.0,
            &[Equipment::Kettlebells],
            Tier::LowSkill,
            KETTLEBELL_REPS,
        )
    },
    Exercise {
        implement: Some(Implement::Kettlebell),
        ..exercise(
            "Kettlebell Swings",
            20.79,
            &[Equipment::Kettlebells],
            Tier::LowSkill,
            KETTLEBELL_REPS,
        )
    },
    Exercise {
        patterns: Some(&[]),
        ..exercise(
            "Legless Rope Climbs",
            3.0,
            &[Equipment::ClimbingRope],
            Tier::HighSkill,
            LEGLESS_ROPE_CLIMB_REPS,
        )
    },
    Exercise {
        implement: barbell(Lift::OverheadSquat, 1.0, Degradation::Highest, SQUAT_LOADS),
        ..exercise(
            "Overhead Squats",
            15.0,
            &[Equipment::Barbell, Equipment::SquatRack],
            Tier::Moderate,
            LOADED_REPS,
        )
    },
    Exercise {
        implement: barbell(Lift::CleanAndJerk, 1.0, Degradation::Mild, CLEAN_LOADS),
        ..exercise("Power Cleans", 15.0, &[Equipment::Barbell], Tier::Moderate, LOADED_REPS)
    },
    Exercise {
        implement: barbell(Lift::Snatch, 1.0, Degradation::Mild, SNATCH_LOADS),
        ..exercise("Power Snatch", 15.0, &[Equipment::Barbell], Tier::Moderate, LOADED_REPS)
    },
    exercise("Pull-ups", 18.0, &[Equipment::PullUpBar], Tier::Moderate, GYMNASTICS_REPS),
    exercise("Push-ups", 20.0, &[], Tier::Moderate, GYMNASTICS_REPS),
    exercise("Ring Muscle Ups", 7.0, &[Equipment::HighRings], Tier::HighSkill, GYMNASTICS_REPS),
    Exercise {
        patterns: Some(&[Pattern::_10_8_6_4_2]),
        ..exercise("Rope Climbs", 5.0, &[Equipment::ClimbingRope], Tier::HighSkill, ROPE_CLIMB_REPS)
    },
    Exercise {
        cardio: true,
        patterns: Some(CALORIE_PATTERNS),
        ..exercise(
            "Rowing Calories",
            18.0,
            &[Equipment::RowingMachine],
            Tier::LowSkill,
            CALORIE_REPS,
        )
    },
    Exercise {
        cardio: true,
        patterns: Some(CALORIE_PATTERNS),
        ..exercise("Ski Calories", 18.0, &[Equipment::SkiErg], Tier::LowSkill, CALORIE_REPS)
    },
    Exercise {
        implement: barbell(Lift::Snatch, 1.0, Degradation::Medium, SNATCH_LOADS),
        ..exercise("Snatch", 12.0, &[Equipment::Barbell], Tier::HighSkill, LOADED_REPS)
    },
    Exercise {
        implement: barbell(Lift::CleanAndJerk, 1.0, Degradation::Highest, CLEAN_LOADS),
        ..exercise("Squat Cleans", 12.0, &[Equipment::Barbell], Tier::Moderate, LOADED_REPS)
    },
    Exercise {
        implement: barbell(Lift::Snatch, 1.0, Degradation::Highest, SNATCH_LOADS),
        ..exercise("Squat Snatch", 12.0, &[Equipment::Barbell], Tier::HighSkill, LOADED_REPS)
    },
    exercise("Strict Pull-ups", 7.0, &[Equipment::PullUpBar], Tier::Moderate, GYMNASTICS_REPS),
    Exercise {
        implement: barbell(Lift::CleanAndJerk, 0.7, Degradation::Medium, SQUAT_LOADS),
        ..exercise("Thrusters", 15.0, &[Equipment::Barbell], Tier::Moderate, LOADED_REPS)
    },
    exercise("Toes to Bar", 15.0, &[Equipment::PullUpBar], Tier::Moderate, GYMNASTICS_REPS),
    Exercise {
        patterns: Some(HIGH_REP_PATTERNS),
        ..exercise(
            "Wall Balls",
            20.0,
            &[Equipment::WallBall, Equipment::WallSpace],
            Tier::HighVolume,
            WALL_BALL_REPS,
        )
    },
];

/// Redundant combinations. When both exercises are selected, the second one is dropped.
const FORBIDDEN_PAIRS: [(&str, &str); 41] = [
    ("Pull-ups", "Chest to Bar Pull-ups"),
    ("Pull-ups", "Toes to Bar"),
    ("Pull-ups", "Ring Muscle Ups"),
    ("Handstand Push-ups", "Push-ups"),
    ("Burpee Box Jump Overs", "Box Jump Overs"),
    ("Box Jump Overs", "Box Jumps"),
    ("Burpee Box Jump Overs", "Box Jumps"),
    ("Burpees", "Burpee Box Jump Overs"),
    ("Box Jumps", "Dumbbell Box Step-Ups"),
    ("Box Jump Overs", "Dumbbell Box Step-Ups"),
    ("Burpee Box Jump Overs", "Dumbbell Box Step-Ups"),
    ("Rope Climbs", "Legless Rope Climbs"),
    ("Rope Climbs", "Ring Muscle Ups"),
    ("Rope Climbs", "Toes to Bar"),
    ("Rope Climbs", "Pull-ups"),
    ("Rope Climbs", "Chest to Bar Pull-ups"),
    ("Legless Rope Climbs", "Ring Muscle Ups"),
    ("Legless Rope Climbs", "Chest to Bar Pull-ups"),
    ("Legless Rope Climbs", "Pull-ups"),
    ("Legless Rope Climbs", "Toes to Bar"),
    ("GHD Sit-ups", "Toes to Bar"),
    ("Ring Muscle Ups", "Toes to Bar"),
    ("Ring Muscle Ups", "Chest to Bar Pull-ups"),
    ("Bar Muscle Ups", "Rope Climbs"),
    ("Bar Muscle Ups", "Legless Rope Climbs"),
    ("Bar Muscle Ups", "Ring Muscle Ups"),
    ("Bar Muscle Ups", "Toes to Bar"),
    ("Bar Muscle Ups", "Pull-ups"),
    ("Bar Muscle Ups", "Chest to Bar Pull-ups"),
    ("Strict Pull-ups", "Rope Climbs"),
    ("Strict Pull-ups", "Legless Rope Climbs"),
    ("Strict Pull-ups", "Ring Muscle Ups"),
    ("Strict Pull-ups", "Bar Muscle Ups"),
    ("Strict Pull-ups", "Toes to Bar"),
    ("Strict Pull-ups", "Chest to Bar Pull-ups"),
    ("Rowing Calories", "Bike Calories"),
    ("Rowing Calories", "Ski Calories"),
    ("Bike Calories", "Ski Calories"),
    ("Dumbbell Thrusters", "Dumbbell Clean and Jerk"),
    ("Alternating Dumbbell Snatches", "Dumbbell Thrusters"),
    ("Alternating Dumbbell Snatches", "Dumbbell Clean and Jerk"),
];
