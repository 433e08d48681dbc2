//! Style records handed back to the map layer.
//!
//! Field names serialize in Leaflet's camelCase so the records can be passed
//! straight to `L.geoJSON` style callbacks and `L.circleMarker`. Options this
//! crate does not model are kept in `extra` and passed through untouched.

use geo_types::Coord;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Path options for polygon and line features.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathStyle {
    /// Stroke width in pixels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Stroke opacity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    /// Stroke color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Stroke dash pattern, e.g. `"3"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dash_array: Option<String>,
    /// Fill opacity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_opacity: Option<f64>,
    /// Fill color, the only field the resolvers change
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PathStyle {
    /// Returns this style with the fill color replaced.
    pub fn with_fill_color(mut self, fill_color: Option<String>) -> Self {
        self.fill_color = fill_color;
        self
    }
}

/// Options for a circle marker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CircleOptions {
    /// Radius in pixels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    /// Whether to draw the outline
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_opacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CircleOptions {
    /// Returns these options with the fill color replaced.
    pub fn with_fill_color(mut self, fill_color: Option<String>) -> Self {
        self.fill_color = fill_color;
        self
    }
}

/// Geographic position in Leaflet's `{lat, lng}` form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<Coord<f64>> for LatLng {
    fn from(coord: Coord<f64>) -> Self {
        Self {
            lat: coord.y,
            lng: coord.x,
        }
    }
}

impl From<LatLng> for Coord<f64> {
    fn from(latlng: LatLng) -> Self {
        Coord {
            x: latlng.lng,
            y: latlng.lat,
        }
    }
}

/// A circle marker to be placed for a point feature.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CircleMarker {
    pub latlng: LatLng,
    pub options: CircleOptions,
}

impl CircleMarker {
    pub fn new(latlng: LatLng, options: CircleOptions) -> Self {
        Self { latlng, options }
    }

    /// Fill color of the marker, `None` when no color was resolved.
    pub fn fill_color(&self) -> Option<&str> {
        self.options.fill_color.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_path_style_roundtrips_leaflet_keys() {
        let raw = json!({
            "weight": 1,
            "opacity": 1,
            "color": "black",
            "dashArray": "3",
            "fillOpacity": 0.7,
            "lineJoin": "round"
        });
        let style: PathStyle = serde_json::from_value(raw).unwrap();
        assert_eq!(style.dash_array.as_deref(), Some("3"));
        assert_eq!(style.fill_color, None);
        assert_eq!(style.extra.get("lineJoin"), Some(&json!("round")));

        let out = serde_json::to_value(style.with_fill_color(Some("red".into()))).unwrap();
        assert_eq!(out["fillColor"], json!("red"));
        assert_eq!(out["lineJoin"], json!("round"));
        assert!(out.get("fill_color").is_none());
    }

    #[test]
    fn test_with_fill_color_touches_only_fill() {
        let base = PathStyle {
            weight: Some(2.0),
            color: Some("black".into()),
            fill_color: Some("green".into()),
            ..Default::default()
        };
        let updated = base.clone().with_fill_color(Some("blue".into()));
        assert_eq!(updated.fill_color.as_deref(), Some("blue"));
        assert_eq!(
            PathStyle {
                fill_color: base.fill_color.clone(),
                ..updated
            },
            base
        );
    }

    #[test]
    fn test_latlng_coord_conversion() {
        let coord = Coord { x: -1.2, y: 53.1 };
        let latlng = LatLng::from(coord);
        assert_eq!(latlng, LatLng::new(53.1, -1.2));
        assert_eq!(Coord::from(latlng), coord);
    }
}
