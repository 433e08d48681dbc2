//! Colormaps used by the ground-motion dashboard.
//!
//! Category maps are ordered `(class, color)` tables; the order is the legend
//! order and the order in which the category resolver scans classes.

/// Trend type of a measurement point time series.
pub const TREND_CLASS: &[(&str, &str)] = &[
    ("stable", "#4daf4a"),
    ("linear", "#377eb8"),
    ("quadratic", "#ff7f00"),
    ("changepoint", "#984ea3"),
    ("step", "#e41a1c"),
];

/// Trend subtype of a measurement point time series.
pub const TREND_SUBCLASS: &[(&str, &str)] = &[
    ("stable", "green"),
    ("active-stable", "blue"),
    ("gradual-deceleration", "lightblue"),
    ("stable-active", "red"),
    ("gradual-acceleration", "salmon"),
    ("rebound", "deeppink"),
    ("active-constant", "orange"),
    ("active-acceleration", "purple"),
    ("active-deceleration", "yellow"),
    ("active-dir-change", "black"),
];

/// Mean velocity groups (mm/yr), see [`crate::VelocityGroup`].
pub const VELOCITY_GROUP: &[(&str, &str)] = &[
    ("<-10", "red"),
    ("<-6", "orange"),
    ("<-2", "yellow"),
    ("[-2, 2]", "lime"),
    (">2", "aquamarine"),
    (">6", "darkturquoise"),
    (">10", "blue"),
];

/// Continuous ramp for mean velocity.
pub const VELOCITY_RAMP: &[&str] = &[
    "darkred",
    "red",
    "orange",
    "yellow",
    "lime",
    "aquamarine",
    "darkturquoise",
    "blue",
    "darkblue",
];

/// Continuous ramp for label probabilities.
pub const LABEL_PROB_RAMP: &[&str] = &["blue", "white"];

/// Continuous ramp for the stable proportion of an ADA.
pub const STABLE_PROP_RAMP: &[&str] = &["red", "white"];

/// Class labels of a category map, in order.
pub fn classes(map: &[(&str, &str)]) -> Vec<String> {
    map.iter().map(|(class, _)| class.to_string()).collect()
}

/// Colors of a category map, in class order.
pub fn colors(map: &[(&str, &str)]) -> Vec<String> {
    map.iter().map(|(_, color)| color.to_string()).collect()
}

/// Converts a ramp into owned color strings.
pub fn ramp(stops: &[&str]) -> Vec<String> {
    stops.iter().map(|s| s.to_string()).collect()
}
