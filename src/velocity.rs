//! Mean velocity grouping.
//!
//! Velocities are binned into seven groups before the category resolver
//! colors them. Thresholds are in mm/yr; negative velocities are movement
//! away from the satellite.

use crate::feature::to_number;
use geojson::FeatureCollection;

/// Property the velocity group label is written to.
pub const VELOCITY_GROUP_PROPERTY: &str = "mean_velocity_grp";

/// Property holding the mean velocity in mm/yr.
pub const MEAN_VELOCITY_PROPERTY: &str = "mean_velocity";

/// Mean velocity bin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum VelocityGroup {
    /// Below -10
    FastSubsidence,
    /// [-10, -6)
    Subsidence,
    /// [-6, -2)
    SlowSubsidence,
    /// [-2, 2]
    Stable,
    /// (2, 6]
    SlowUplift,
    /// (6, 10]
    Uplift,
    /// Above 10, and anything not comparable
    FastUplift,
}

impl VelocityGroup {
    /// Bins a velocity. NaN falls through every comparison into the last group.
    pub fn classify(velocity: f64) -> Self {
        if velocity < -10.0 {
            Self::FastSubsidence
        } else if velocity < -6.0 {
            Self::Subsidence
        } else if velocity < -2.0 {
            Self::SlowSubsidence
        } else if (-2.0..=2.0).contains(&velocity) {
            Self::Stable
        } else if velocity > 2.0 && velocity <= 6.0 {
            Self::SlowUplift
        } else if velocity > 6.0 && velocity <= 10.0 {
            Self::Uplift
        } else {
            Self::FastUplift
        }
    }

    /// Class label used in hideouts and legends.
    pub fn label(&self) -> &'static str {
        match self {
            Self::FastSubsidence => "<-10",
            Self::Subsidence => "<-6",
            Self::SlowSubsidence => "<-2",
            Self::Stable => "[-2, 2]",
            Self::SlowUplift => ">2",
            Self::Uplift => ">6",
            Self::FastUplift => ">10",
        }
    }
}

/// Writes the velocity group of every feature into `mean_velocity_grp`.
///
/// Features without properties get a property map. Returns how many features
/// were annotated.
pub fn annotate_velocity_groups(collection: &mut FeatureCollection) -> usize {
    for feature in &mut collection.features {
        let velocity = to_number(feature.property(MEAN_VELOCITY_PROPERTY));
        let group = VelocityGroup::classify(velocity);
        feature.set_property(VELOCITY_GROUP_PROPERTY, group.label());
    }

    log::debug!(
        "Annotated {} features with velocity groups",
        collection.features.len()
    );
    collection.features.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette;

    #[test]
    fn test_thresholds() {
        assert_eq!(VelocityGroup::classify(-12.0), VelocityGroup::FastSubsidence);
        assert_eq!(VelocityGroup::classify(-10.0), VelocityGroup::Subsidence);
        assert_eq!(VelocityGroup::classify(-6.0), VelocityGroup::SlowSubsidence);
        assert_eq!(VelocityGroup::classify(-2.0), VelocityGroup::Stable);
        assert_eq!(VelocityGroup::classify(2.0), VelocityGroup::Stable);
        assert_eq!(VelocityGroup::classify(2.5), VelocityGroup::SlowUplift);
        assert_eq!(VelocityGroup::classify(6.0), VelocityGroup::SlowUplift);
        assert_eq!(VelocityGroup::classify(10.0), VelocityGroup::Uplift);
        assert_eq!(VelocityGroup::classify(10.1), VelocityGroup::FastUplift);
        assert_eq!(VelocityGroup::classify(f64::NAN), VelocityGroup::FastUplift);
    }

    #[test]
    fn test_labels_follow_palette_order() {
        let groups = [
            VelocityGroup::FastSubsidence,
            VelocityGroup::Subsidence,
            VelocityGroup::SlowSubsidence,
            VelocityGroup::Stable,
            VelocityGroup::SlowUplift,
            VelocityGroup::Uplift,
            VelocityGroup::FastUplift,
        ];
        let labels: Vec<&str> = groups.iter().map(|g| g.label()).collect();
        let classes = palette::classes(palette::VELOCITY_GROUP);
        assert_eq!(labels, classes);
    }

    #[test]
    fn test_annotate_collection() {
        let mut collection: FeatureCollection = r#"{
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "geometry": null, "properties": {"mean_velocity": -7.5}},
                {"type": "Feature", "geometry": null, "properties": {"mean_velocity": "1.0"}},
                {"type": "Feature", "geometry": null, "properties": null}
            ]
        }"#
        .parse()
        .unwrap();

        assert_eq!(annotate_velocity_groups(&mut collection), 3);
        let groups: Vec<_> = collection
            .features
            .iter()
            .map(|f| f.property(VELOCITY_GROUP_PROPERTY).and_then(|v| v.as_str()))
            .collect();
        assert_eq!(groups, vec![Some("<-6"), Some("[-2, 2]"), Some(">10")]);
    }
}
