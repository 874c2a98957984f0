use crate::{AthleteProfile, Catalog, Load, TimeDomain};

/// Reps per minute assumed for exercises missing from the catalog.
pub const DEFAULT_RATE: f32 = 10.0;

#[must_use]
pub fn pacing_factor(minutes: f32) -> f32 {
    TimeDomain::classify(minutes).pacing_factor()
}

/// Work rates of exercises for a specific athlete.
#[derive(Debug, Clone, Copy)]
pub struct RateModel<'a> {
    catalog: &'a Catalog,
    profile: Option<&'a AthleteProfile>,
}

impl<'a> RateModel<'a> {
    #[must_use]
    pub fn new(catalog: &'a Catalog, profile: Option<&'a AthleteProfile>) -> Self {
        Self { catalog, profile }
    }

    #[must_use]
    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    #[must_use]
    pub fn profile(&self) -> Option<&'a AthleteProfile> {
        self.profile
    }

    #[must_use]
    pub fn base_rate(&self, name: &str) -> f32 {
        self.catalog.get(name).map_or(DEFAULT_RATE, |e| e.rate)
    }

    /// Slowdown caused by the load of a barbell movement relative to the athlete's strength.
    #[must_use]
    pub fn load_multiplier(&self, name: &str, load: Option<Load>) -> f32 {
        let (Some(profile), Some(load)) = (self.profile, load) else {
            return 1.0;
        };
        let Some(barbell) = self.catalog.get(name).and_then(|e| e.barbell()) else {
            return 1.0;
        };
        let Some(cap) = profile.load_cap(barbell) else {
            return 1.0;
        };

        #[allow(clippy::cast_precision_loss)]
        let weight = load.for_gender(profile.gender) as f32;
        barbell.degradation.multiplier(weight.min(cap) / cap)
    }

    /// Reps per minute that can be sustained over the given duration.
    #[must_use]
    pub fn adjusted_rate(&self, name: &str, load: Option<Load>, minutes: f32) -> f32 {
        self.base_rate(name) * self.load_multiplier(name, load) * pacing_factor(minutes)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use assert_approx_eq::assert_approx_eq;
    use rstest::rstest;

    use crate::{Gender, Lift};

    use super::*;

    static PROFILE: std::sync::LazyLock<AthleteProfile> =
        std::sync::LazyLock::new(|| AthleteProfile {
            gender: Gender::Male,
            one_rep_maxes: BTreeMap::from([(Lift::CleanAndJerk, 250.0), (Lift::Deadlift, 400.0)]),
            ..AthleteProfile::default()
        });

    #[rstest]
    #[case(1.0, 1.0)]
    #[case(5.0, 1.0)]
    #[case(7.5, 0.85)]
    #[case(10.0, 0.85)]
    #[case(12.5, 0.75)]
    #[case(17.5, 0.65)]
    #[case(25.0, 0.55)]
    fn test_pacing_factor(#[case] minutes: f32, #[case] expected: f32) {
        assert_approx_eq!(pacing_factor(minutes), expected);
    }

    #[rstest]
    #[case("Double Unders", 60.0)]
    #[case("Kettlebell Swings", 20.79)]
    #[case("Legless Rope Climbs", 3.0)]
    #[case("Jumping Jacks", DEFAULT_RATE)]
    fn test_base_rate(#[case] name: &str, #[case] expected: f32) {
        let catalog = Catalog::default();
        assert_approx_eq!(RateModel::new(&catalog, None).base_rate(name), expected);
    }

    #[rstest]
    #[case::light_load("Clean and Jerks", Load::Personal(95), 1.0)]
    #[case::at_cap("Clean and Jerks", Load::Personal(200), 0.7)]
    #[case::above_cap("Clean and Jerks", Load::Standard { male: 225, female: 155 }, 0.7)]
    #[case::three_quarters("Squat Cleans", Load::Personal(150), 0.8)]
    #[case::thruster_proxy("Thrusters", Load::Personal(140), 0.7)]
    #[case::mild("Deadlifts", Load::Personal(240), 0.9)]
    #[case::no_one_rep_max("Snatch", Load::Personal(185), 1.0)]
    #[case::not_a_barbell("Dumbbell Thrusters", Load::Personal(50), 1.0)]
    fn test_load_multiplier(#[case] name: &str, #[case] load: Load, #[case] expected: f32) {
        let catalog = Catalog::default();
        let model = RateModel::new(&catalog, Some(&PROFILE));
        assert_approx_eq!(model.load_multiplier(name, Some(load)), expected);
    }

    #[test]
    fn test_load_multiplier_without_profile() {
        let catalog = Catalog::default();
        let model = RateModel::new(&catalog, None);
        assert_approx_eq!(
            model.load_multiplier("Clean and Jerks", Some(Load::Personal(315))),
            1.0
        );
    }

    #[rstest]
    #[case("Wall Balls", None, 3.0, 20.0)]
    #[case("Wall Balls", None, 25.0, 11.0)]
    #[case("Clean and Jerks", Some(Load::Personal(200)), 12.5, 6.3)]
    #[case("Deadlifts", Some(Load::Personal(135)), 7.5, 10.2)]
    fn test_adjusted_rate(
        #[case] name: &str,
        #[case] load: Option<Load>,
        #[case] minutes: f32,
        #[case] expected: f32,
    ) {
        let catalog = Catalog::default();
        let model = RateModel::new(&catalog, Some(&PROFILE));
        assert_approx_eq!(model.adjusted_rate(name, load, minutes), expected, 1e-4);
    }
}
