//! Render pass over a GeoJSON feature collection.
//!
//! Mirrors what the map does with the callbacks: for every feature, resolve
//! a style (polygons) or a marker (points), then bind the tooltip.

use crate::error::Result;
use crate::hideout::{PointHideout, PolygonHideout};
use crate::resolve::{point_marker, polygon_style};
use crate::style::{CircleMarker, LatLng, PathStyle};
use crate::tooltip::{bind_aggregate_tooltip, bind_point_tooltip, TooltipLayer};
use geo_types::Coord;
use geojson::{Feature, FeatureCollection, Value};
use serde::Serialize;

/// Property that [`embed_styles`] writes the resolved style into.
pub const STYLE_PROPERTY: &str = "style";

/// Property that [`embed_styles`] writes the tooltip into.
pub const TOOLTIP_PROPERTY: &str = "tooltip";

/// The style resolved for one feature.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FeatureStyle {
    /// Path options for a polygon or line
    Path(PathStyle),
    /// Circle marker for a point
    Marker(CircleMarker),
}

impl FeatureStyle {
    /// The resolved fill color, if any.
    pub fn fill_color(&self) -> Option<&str> {
        match self {
            FeatureStyle::Path(style) => style.fill_color.as_deref(),
            FeatureStyle::Marker(marker) => marker.fill_color(),
        }
    }
}

/// A styled feature, the stand-in for a map layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedFeature {
    /// Position of the feature in its collection
    pub index: usize,
    pub style: FeatureStyle,
    pub tooltip: Option<String>,
}

impl RenderedFeature {
    fn new(index: usize, style: FeatureStyle) -> Self {
        Self {
            index,
            style,
            tooltip: None,
        }
    }
}

impl TooltipLayer for RenderedFeature {
    fn bind_tooltip(&mut self, text: String) {
        self.tooltip = Some(text);
    }
}

/// Styles every ADA polygon and binds its summary tooltip.
pub fn render_polygons(
    collection: &FeatureCollection,
    hideout: &PolygonHideout,
) -> Result<Vec<RenderedFeature>> {
    let mut rendered = Vec::with_capacity(collection.features.len());

    for (index, feature) in collection.features.iter().enumerate() {
        let style = polygon_style(feature, hideout)?;
        let mut layer = RenderedFeature::new(index, FeatureStyle::Path(style));
        bind_aggregate_tooltip(feature, &mut layer)?;
        rendered.push(layer);
    }

    log::info!(
        "Styled {} polygons by {}",
        rendered.len(),
        hideout.color_prop()
    );
    Ok(rendered)
}

/// Builds a marker for every point feature and binds its tooltip.
///
/// Only `Point` geometries get a marker. Other geometries are skipped,
/// including `MultiPoint`, which Leaflet would expand into one marker per
/// position; EGMS measurement points are always single points.
pub fn render_points(
    collection: &FeatureCollection,
    hideout: &PointHideout,
) -> Result<Vec<RenderedFeature>> {
    let mut rendered = Vec::with_capacity(collection.features.len());
    let mut skipped = 0;

    for (index, feature) in collection.features.iter().enumerate() {
        let Some(latlng) = point_location(feature) else {
            skipped += 1;
            continue;
        };

        let marker = point_marker(feature, latlng, hideout)?;
        let mut layer = RenderedFeature::new(index, FeatureStyle::Marker(marker));
        bind_point_tooltip(feature, &mut layer)?;
        rendered.push(layer);
    }

    if skipped > 0 {
        log::warn!("Skipped {} features without a point geometry", skipped);
    }
    log::info!(
        "Built {} markers by {}",
        rendered.len(),
        hideout.color_prop()
    );
    Ok(rendered)
}

/// Location of a `Point` feature. GeoJSON positions are `[lng, lat]`.
pub fn point_location(feature: &Feature) -> Option<LatLng> {
    match &feature.geometry.as_ref()?.value {
        Value::Point(coords) if coords.len() >= 2 => Some(LatLng::from(Coord {
            x: coords[0],
            y: coords[1],
        })),
        _ => None,
    }
}

/// Writes each rendered style and tooltip back into its feature's properties.
pub fn embed_styles(
    collection: &mut FeatureCollection,
    rendered: &[RenderedFeature],
) -> Result<()> {
    for layer in rendered {
        let Some(feature) = collection.features.get_mut(layer.index) else {
            continue;
        };
        feature.set_property(STYLE_PROPERTY, serde_json::to_value(&layer.style)?);
        if let Some(tooltip) = &layer.tooltip {
            feature.set_property(TOOLTIP_PROPERTY, tooltip.clone());
        }
    }
    Ok(())
}
