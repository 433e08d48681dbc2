//! Error type shared by the styling, tooltip and settings code.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StyleError>;

/// Failures that stop a styling or tooltip call.
///
/// Degraded outcomes (an unmatched category, an out-of-domain value) are not
/// errors; they produce an unchanged or fallback color instead.
#[derive(Debug, Error)]
pub enum StyleError {
    /// A color stop could not be parsed as a CSS color.
    #[error("unknown color format: {0:?}")]
    UnknownColor(String),

    /// A continuous scale was configured without any color stops.
    #[error("color scale has no stops")]
    EmptyColorScale,

    /// A property formatted as a decimal was missing or not a number.
    #[error("property {property:?} is {found}, expected a number")]
    NotNumeric {
        property: &'static str,
        found: &'static str,
    },

    /// The metric has no styling for the requested layer kind.
    #[error("metric {metric:?} cannot style {layer} layers")]
    UnsupportedMetric {
        metric: &'static str,
        layer: &'static str,
    },

    /// A metric name that the dashboard does not offer.
    #[error("unknown metric: {0:?}")]
    UnknownMetric(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("GeoJSON error: {0}")]
    GeoJson(#[from] geojson::Error),
}
