use crate::{Catalog, Exercise};

impl Catalog {
    /// Remove exercises that would need a second implement setup.
    ///
    /// Only the first barbell and the first dumbbell movement are kept. Dumbbells are dropped
    /// when a barbell is present, and kettlebells are dropped when a barbell or dumbbell is
    /// present.
    #[must_use]
    pub fn filter_for_consistency<'n>(&self, names: &[&'n str]) -> Vec<&'n str> {
        let mut names = keep_first(names, |name| self.get(name).is_some_and(Exercise::is_barbell));
        names = keep_first(&names, |name| self.get(name).is_some_and(Exercise::is_dumbbell));

        let contains = |names: &[&str], predicate: fn(&Exercise) -> bool| {
            names
                .iter()
                .any(|name| self.get(name).is_some_and(predicate))
        };
        let without = |names: Vec<&'n str>, predicate: fn(&Exercise) -> bool| {
            names
                .into_iter()
                .filter(|name| !self.get(name).is_some_and(predicate))
                .collect::<Vec<_>>()
        };

        if contains(&names, Exercise::is_barbell) {
            names = without(names, Exercise::is_dumbbell);
            names = without(names, Exercise::is_kettlebell);
        }
        if contains(&names, Exercise::is_dumbbell) {
            names = without(names, Exercise::is_kettlebell);
        }

        names
    }

    /// Remove the second exercise of every forbidden pair that is fully present.
    #[must_use]
    pub fn filter_forbidden_pairs<'n>(&self, names: &[&'n str]) -> Vec<&'n str> {
        let mut names = names.to_vec();
        for (first, second) in self.forbidden_pairs() {
            if names.contains(first) && names.contains(second) {
                names.retain(|name| name != second);
            }
        }
        names
    }

    /// Whether the exercises pass both filters unchanged.
    #[must_use]
    pub fn is_compatible(&self, names: &[&str]) -> bool {
        let filtered = self.filter_forbidden_pairs(&self.filter_for_consistency(names));
        filtered.len() == names.len()
    }
}

fn keep_first<'n>(names: &[&'n str], predicate: impl Fn(&str) -> bool) -> Vec<&'n str> {
    let mut found = false;
    names
        .iter()
        .copied()
        .filter(|name| {
            if !predicate(*name) {
                return true;
            }
            let first = !found;
            found = true;
            first
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::empty(&[], &[])]
    #[case::single(&["Thrusters"], &["Thrusters"])]
    #[case::two_barbells(
        &["Deadlifts", "Burpees", "Thrusters"],
        &["Deadlifts", "Burpees"]
    )]
    #[case::two_dumbbells(
        &["Dumbbell Thrusters", "Dumbbell Box Step-Ups"],
        &["Dumbbell Thrusters"]
    )]
    #[case::barbell_and_dumbbell(
        &["Dumbbell Thrusters", "Power Cleans"],
        &["Power Cleans"]
    )]
    #[case::barbell_and_kettlebell(
        &["Kettlebell Swings", "Snatch", "Pull-ups"],
        &["Snatch", "Pull-ups"]
    )]
    #[case::dumbbell_and_kettlebell(
        &["Alternating Dumbbell Snatches", "Kettlebell Snatches"],
        &["Alternating Dumbbell Snatches"]
    )]
    #[case::kettlebells_only(
        &["Kettlebell Swings", "Kettlebell Snatches"],
        &["Kettlebell Swings", "Kettlebell Snatches"]
    )]
    #[case::unknown_names(&["Jumping Jacks", "Thrusters"], &["Jumping Jacks", "Thrusters"])]
    fn test_filter_for_consistency(#[case] names: &[&str], #[case] expected: &[&str]) {
        assert_eq!(Catalog::default().filter_for_consistency(names), expected);
    }

    #[rstest]
    #[case::empty(&[], &[])]
    #[case::pulling(&["Pull-ups", "Chest to Bar Pull-ups"], &["Pull-ups"])]
    #[case::pulling_reversed(&["Chest to Bar Pull-ups", "Pull-ups"], &["Pull-ups"])]
    #[case::pushing(&["Push-ups", "Handstand Push-ups", "Burpees"], &["Handstand Push-ups", "Burpees"])]
    #[case::boxes(&["Box Jumps", "Box Jump Overs", "Wall Balls"], &["Box Jump Overs", "Wall Balls"])]
    #[case::rope_climbs(&["Rope Climbs", "Legless Rope Climbs"], &["Rope Climbs"])]
    #[case::cardio(
        &["Ski Calories", "Bike Calories", "Rowing Calories"],
        &["Rowing Calories"]
    )]
    #[case::chain(
        &["Burpees", "Burpee Box Jump Overs", "Box Jumps"],
        &["Burpees"]
    )]
    #[case::unrelated(&["Thrusters", "Pull-ups"], &["Thrusters", "Pull-ups"])]
    fn test_filter_forbidden_pairs(#[case] names: &[&str], #[case] expected: &[&str]) {
        assert_eq!(Catalog::default().filter_forbidden_pairs(names), expected);
    }

    #[test]
    fn test_filters_idempotent() {
        let catalog = Catalog::default();
        let names = catalog.exercises().map(|e| e.name).collect::<Vec<_>>();
        let filtered = catalog.filter_forbidden_pairs(&catalog.filter_for_consistency(&names));

        assert!(filtered.len() < names.len());
        assert!(catalog.is_compatible(&filtered));
        assert_eq!(catalog.filter_for_consistency(&filtered), filtered);
        assert_eq!(catalog.filter_forbidden_pairs(&filtered), filtered);
    }

    #[rstest]
    #[case(&["Thrusters", "Pull-ups", "Double Unders"], true)]
    #[case(&["Thrusters", "Deadlifts"], false)]
    #[case(&["Toes to Bar", "GHD Sit-ups"], false)]
    fn test_is_compatible(#[case] names: &[&str], #[case] expected: bool) {
        assert_eq!(Catalog::default().is_compatible(names), expected);
    }
}
