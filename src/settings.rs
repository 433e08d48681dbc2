//! Styling settings shared by every layer of the map.
//!
//! Settings are plain JSON so the dashboard can ship them alongside its data.

use crate::color::parse_css_color;
use crate::error::Result;
use crate::style::{CircleOptions, PathStyle};
use eframe::egui::Color32;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How mean velocity is colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VelocityMode {
    /// Discrete velocity groups (`<-10` ... `>10`).
    #[default]
    Grouped,
    /// Continuous ramp over [`StyleSettings::velocity_domain`].
    Continuous,
}

/// Numeric domain of a continuous color scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

impl Domain {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

/// Base styles and scale parameters for polygon and point layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleSettings {
    /// Base style for ADA polygons; the resolvers only set its fill color.
    pub polygon_style: PathStyle,
    /// Style applied to a polygon under the cursor.
    pub hover_style: PathStyle,
    /// Base options for measurement point markers.
    pub circle_options: CircleOptions,
    /// Fill for missing or non-numeric values on continuous scales.
    pub no_data_color: String,
    pub velocity_mode: VelocityMode,
    /// Mean velocity domain in mm/yr.
    pub velocity_domain: Domain,
    pub label_prob_domain: Domain,
    pub stable_prop_domain: Domain,
}

impl Default for StyleSettings {
    fn default() -> Self {
        Self {
            polygon_style: PathStyle {
                weight: Some(1.0),
                opacity: Some(1.0),
                color: Some("black".to_string()),
                dash_array: Some("3".to_string()),
                fill_opacity: Some(0.7),
                ..Default::default()
            },
            hover_style: PathStyle {
                weight: Some(4.0),
                color: Some("#222222".to_string()),
                dash_array: Some(String::new()),
                ..Default::default()
            },
            circle_options: CircleOptions {
                radius: Some(2.5),
                stroke: Some(false),
                fill_opacity: Some(1.0),
                ..Default::default()
            },
            no_data_color: "#cccccc".to_string(),
            velocity_mode: VelocityMode::Grouped,
            velocity_domain: Domain::new(-10.0, 10.0),
            label_prob_domain: Domain::new(0.0, 1.0),
            stable_prop_domain: Domain::new(0.0, 1.0),
        }
    }
}

impl StyleSettings {
    /// Parses settings from JSON. Missing fields take their default.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.no_data()?;
        Ok(settings)
    }

    /// Reads settings from a JSON file.
    ///
    /// A missing, unreadable or malformed file is an error rather than a
    /// silent fallback to the defaults.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            log::warn!("Failed to read style settings {}: {}", path.display(), e);
            e
        })?;

        let settings = Self::from_json_str(&json).map_err(|e| {
            log::warn!("Failed to parse style settings {}: {}", path.display(), e);
            e
        })?;
        log::info!("Loaded style settings from {}", path.display());
        Ok(settings)
    }

    /// Parsed no-data color.
    pub fn no_data(&self) -> Result<Color32> {
        parse_css_color(&self.no_data_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StyleError;

    #[test]
    fn test_defaults_match_dashboard() {
        let settings = StyleSettings::default();
        assert_eq!(settings.polygon_style.dash_array.as_deref(), Some("3"));
        assert_eq!(settings.polygon_style.fill_opacity, Some(0.7));
        assert_eq!(settings.polygon_style.fill_color, None);
        assert_eq!(settings.circle_options.radius, Some(2.5));
        assert_eq!(settings.circle_options.stroke, Some(false));
        assert_eq!(settings.velocity_mode, VelocityMode::Grouped);
        assert_eq!(
            settings.no_data().unwrap(),
            Color32::from_rgb(204, 204, 204)
        );
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = StyleSettings::from_json_str(
            r#"{"velocity_mode": "continuous", "velocity_domain": {"min": -20, "max": 20}}"#,
        )
        .unwrap();
        assert_eq!(settings.velocity_mode, VelocityMode::Continuous);
        assert_eq!(settings.velocity_domain, Domain::new(-20.0, 20.0));
        assert_eq!(settings.label_prob_domain, Domain::new(0.0, 1.0));
        assert_eq!(settings.circle_options.radius, Some(2.5));
    }

    #[test]
    fn test_invalid_json_and_colors_are_errors() {
        assert!(matches!(
            StyleSettings::from_json_str("{"),
            Err(StyleError::Serialization(_))
        ));
        assert!(matches!(
            StyleSettings::from_json_str(r#"{"no_data_color": "bogus"}"#),
            Err(StyleError::UnknownColor(_))
        ));
    }

    #[test]
    fn test_from_path_reads_file() {
        let path = std::env::temp_dir().join("egms-style-settings-read.json");
        std::fs::write(&path, r#"{"no_data_color": "black"}"#).unwrap();

        let settings = StyleSettings::from_path(&path).unwrap();
        assert_eq!(settings.no_data().unwrap(), Color32::from_rgb(0, 0, 0));
        assert_eq!(settings.polygon_style, StyleSettings::default().polygon_style);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_from_path_failures_are_errors() {
        assert!(matches!(
            StyleSettings::from_path("/nonexistent/egms-style.json"),
            Err(StyleError::Io(_))
        ));

        let path = std::env::temp_dir().join("egms-style-settings-bad.json");
        std::fs::write(&path, "{\"velocity_mode\": ").unwrap();
        assert!(matches!(
            StyleSettings::from_path(&path),
            Err(StyleError::Serialization(_))
        ));
        std::fs::remove_file(&path).ok();
    }
}
