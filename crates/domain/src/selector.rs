use rand::{Rng, seq::SliceRandom};

use crate::{Catalog, Exercise, Pattern};

/// Number of exercises that requires a cardio-calorie movement.
pub const CARDIO_REQUIRED_AT: usize = 4;

impl Catalog {
    /// Randomly pick up to `count` exercises that can be combined with each other.
    ///
    /// Seeds are tried first in the given order, followed by the shuffled universe. A candidate
    /// is only accepted if the selection stays compatible and, for patterned workouts, still
    /// allows the pattern. A selection of four exercises without a cardio-calorie movement has
    /// its last exercise replaced by the first fitting cardio movement of the universe, or
    /// dropped if there is none. The result may contain fewer than `count` exercises.
    pub fn select_exercises<'e, R: Rng + ?Sized>(
        &self,
        universe: &[&'e Exercise],
        count: usize,
        pattern: Option<Pattern>,
        seeds: &[&'e Exercise],
        rng: &mut R,
    ) -> Vec<&'e Exercise> {
        let mut candidates = universe.to_vec();
        candidates.shuffle(rng);

        let mut selected: Vec<&'e Exercise> = Vec::with_capacity(count);
        for &candidate in seeds.iter().chain(&candidates) {
            if selected.len() >= count {
                break;
            }
            if !selected.iter().any(|e| e.name == candidate.name)
                && self.accepts(&selected, candidate, pattern)
            {
                selected.push(candidate);
            }
        }

        if selected.len() == CARDIO_REQUIRED_AT && !selected.iter().any(|e| e.cardio) {
            selected.pop();
            if let Some(&cardio) = universe
                .iter()
                .find(|e| e.cardio && self.accepts(&selected, e, pattern))
            {
                selected.push(cardio);
            }
        }

        selected
    }

    fn accepts(
        &self,
        selected: &[&Exercise],
        candidate: &Exercise,
        pattern: Option<Pattern>,
    ) -> bool {
        let names = selected
            .iter()
            .map(|e| e.name)
            .chain([candidate.name])
            .collect::<Vec<_>>();
        self.is_compatible(&names)
            && pattern.is_none_or(|pattern| self.allowed_patterns(&names).contains(&pattern))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn exercises<'c>(catalog: &'c Catalog, names: &[&str]) -> Vec<&'c Exercise> {
        names.iter().map(|name| catalog.get(name).unwrap()).collect()
    }

    fn names(exercises: &[&Exercise]) -> Vec<&'static str> {
        exercises.iter().map(|e| e.name).collect()
    }

    #[test]
    fn test_select_exercises_compatible() {
        let catalog = Catalog::default();
        let universe = catalog.exercises().collect::<Vec<_>>();

        for seed in 0..50 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let selected = catalog.select_exercises(&universe, 3, None, &[], &mut rng);
            let names = names(&selected);

            assert_eq!(selected.len(), 3, "{names:?}");
            assert!(catalog.is_compatible(&names), "{names:?}");
        }
    }

    #[test]
    fn test_select_exercises_pattern() {
        let catalog = Catalog::default();
        let universe = catalog.exercises().collect::<Vec<_>>();

        for seed in 0..50 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let selected = catalog.select_exercises(
                &universe,
                2,
                Some(Pattern::_10_8_6_4_2),
                &[],
                &mut rng,
            );
            let names = names(&selected);

            assert!(
                catalog
                    .allowed_patterns(&names)
                    .contains(&Pattern::_10_8_6_4_2),
                "{names:?}"
            );
            assert!(!names.contains(&"Legless Rope Climbs"), "{names:?}");
            assert!(!names.contains(&"Wall Balls"), "{names:?}");
        }
    }

    #[test]
    fn test_select_exercises_seeds_first() {
        let catalog = Catalog::default();
        let universe = catalog.exercises().collect::<Vec<_>>();
        let seeds = exercises(&catalog, &["Thrusters", "Deadlifts", "Pull-ups"]);
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        let selected = catalog.select_exercises(&universe, 3, None, &seeds, &mut rng);

        assert_eq!(selected.len(), 3);
        assert_eq!(names(&selected[..2]), vec!["Thrusters", "Pull-ups"]);
        assert!(!names(&selected).contains(&"Deadlifts"));
    }

    #[test]
    fn test_select_exercises_replaces_last_with_cardio() {
        let catalog = Catalog::default();
        let seeds = exercises(&catalog, &["Burpees", "Pull-ups", "Box Jumps", "Wall Balls"]);
        let mut universe = seeds.clone();
        universe.extend(exercises(&catalog, &["Ski Calories", "Rowing Calories"]));
        let mut rng = ChaCha8Rng::seed_from_u64(11);

        let selected = catalog.select_exercises(&universe, 4, None, &seeds, &mut rng);

        assert_eq!(
            names(&selected),
            vec!["Burpees", "Pull-ups", "Box Jumps", "Ski Calories"]
        );
    }

    #[test]
    fn test_select_exercises_without_cardio_available() {
        let catalog = Catalog::default();
        let universe = exercises(&catalog, &["Burpees", "Pull-ups", "Box Jumps", "Wall Balls"]);
        let mut rng = ChaCha8Rng::seed_from_u64(13);

        let selected = catalog.select_exercises(&universe, 4, None, &universe, &mut rng);

        assert_eq!(names(&selected), vec!["Burpees", "Pull-ups", "Box Jumps"]);
    }

    #[test]
    fn test_select_exercises_short_universe() {
        let catalog = Catalog::default();
        let universe = exercises(&catalog, &["Pull-ups", "Chest to Bar Pull-ups"]);
        let mut rng = ChaCha8Rng::seed_from_u64(17);

        assert_eq!(
            catalog
                .select_exercises(&universe, 3, None, &[], &mut rng)
                .len(),
            1
        );
        assert!(
            catalog
                .select_exercises(&[], 3, None, &[], &mut rng)
                .is_empty()
        );
    }
}
