//! Per-render styling configuration ("hideout").
//!
//! The dashboard passes one configuration object with every render. Each
//! resolver variant gets its own typed struct here; the serde names match the
//! keys the dashboard sends (`colorProp`, `circleOptions`, `color_dict`).

use crate::color::{parse_css_color, ColorScale};
use crate::error::Result;
use crate::style::{CircleOptions, PathStyle};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Class table for polygon features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryHideout {
    /// Class values, compared loosely against the property.
    pub classes: Vec<Value>,
    /// Fill color for each class, parallel to `classes`.
    pub colorscale: Vec<String>,
    #[serde(default)]
    pub style: PathStyle,
    #[serde(rename = "colorProp")]
    pub color_prop: String,
}

/// Direct class-to-color lookup for point markers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryMarkerHideout {
    #[serde(rename = "colorProp")]
    pub color_prop: String,
    #[serde(rename = "circleOptions", default)]
    pub circle_options: CircleOptions,
    pub color_dict: BTreeMap<String, String>,
}

/// Color scale over a numeric domain for polygon features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContinuousHideout {
    pub min: f64,
    pub max: f64,
    pub colorscale: Vec<String>,
    #[serde(default)]
    pub style: PathStyle,
    #[serde(rename = "colorProp")]
    pub color_prop: String,
    /// Fill for missing or non-numeric values; `#cccccc` when unset.
    #[serde(rename = "naColor", default, skip_serializing_if = "Option::is_none")]
    pub no_data: Option<String>,
}

/// Color scale over a numeric domain for point markers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContinuousMarkerHideout {
    pub min: f64,
    pub max: f64,
    pub colorscale: Vec<String>,
    #[serde(rename = "circleOptions", default)]
    pub circle_options: CircleOptions,
    #[serde(rename = "colorProp")]
    pub color_prop: String,
    #[serde(rename = "naColor", default, skip_serializing_if = "Option::is_none")]
    pub no_data: Option<String>,
}

impl ContinuousHideout {
    /// Builds the color scale this hideout describes.
    pub fn scale(&self) -> Result<ColorScale> {
        build_scale(&self.colorscale, self.min, self.max, self.no_data.as_deref())
    }
}

impl ContinuousMarkerHideout {
    /// Builds the color scale this hideout describes.
    pub fn scale(&self) -> Result<ColorScale> {
        build_scale(&self.colorscale, self.min, self.max, self.no_data.as_deref())
    }
}

fn build_scale(colors: &[String], min: f64, max: f64, no_data: Option<&str>) -> Result<ColorScale> {
    let scale = ColorScale::new(colors, min, max)?;
    match no_data {
        Some(color) => Ok(scale.with_no_data(parse_css_color(color)?)),
        None => Ok(scale),
    }
}

/// Configuration for a polygon layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PolygonHideout {
    Category(CategoryHideout),
    Continuous(ContinuousHideout),
}

/// Configuration for a point layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PointHideout {
    Category(CategoryMarkerHideout),
    Continuous(ContinuousMarkerHideout),
}

impl PolygonHideout {
    /// Name of the property the layer is colored by.
    pub fn color_prop(&self) -> &str {
        match self {
            Self::Category(h) => &h.color_prop,
            Self::Continuous(h) => &h.color_prop,
        }
    }
}

impl PointHideout {
    /// Name of the property the layer is colored by.
    pub fn color_prop(&self) -> &str {
        match self {
            Self::Category(h) => &h.color_prop,
            Self::Continuous(h) => &h.color_prop,
        }
    }
}
