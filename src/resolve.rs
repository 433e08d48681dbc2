//! Fill color resolvers.
//!
//! Each resolver reads one property from a feature and returns a fresh style
//! or marker with the fill color applied. The base style in the hideout is
//! never modified, so an unmatched feature always keeps the base fill color
//! rather than whatever the previous feature was given.

use crate::color::to_hex;
use crate::error::Result;
use crate::feature::{loosely_equals, property, to_js_string, to_number};
use crate::hideout::{
    CategoryHideout, CategoryMarkerHideout, ContinuousHideout, ContinuousMarkerHideout,
    PointHideout, PolygonHideout,
};
use crate::style::{CircleMarker, LatLng, PathStyle};
use geojson::Feature;
use serde_json::Value;

/// Colors a polygon by the first class its property loosely equals.
///
/// With no matching class the base style is returned unchanged. A match
/// without a color at the same index clears the fill color.
pub fn category_style(feature: &Feature, hideout: &CategoryHideout) -> PathStyle {
    let value = property(feature, &hideout.color_prop);
    let style = hideout.style.clone();

    match hideout
        .classes
        .iter()
        .position(|class| loosely_equals(value, class))
    {
        Some(idx) => style.with_fill_color(hideout.colorscale.get(idx).cloned()),
        None => {
            log::debug!(
                "No class matches {}={}",
                hideout.color_prop,
                to_js_string(value)
            );
            style
        }
    }
}

/// Builds a circle marker colored by direct lookup in `color_dict`.
///
/// The property is converted to its object-key string (`2.0` -> `"2"`) and
/// matched exactly. An unknown key leaves the marker without a fill color.
pub fn category_marker(
    feature: &Feature,
    latlng: LatLng,
    hideout: &CategoryMarkerHideout,
) -> CircleMarker {
    let key = to_js_string(property(feature, &hideout.color_prop));
    let fill_color = hideout.color_dict.get(&key).cloned();
    if fill_color.is_none() {
        log::debug!("No color for {}={}", hideout.color_prop, key);
    }

    CircleMarker::new(
        latlng,
        hideout.circle_options.clone().with_fill_color(fill_color),
    )
}

/// Colors a polygon by interpolating its property on the hideout's scale.
pub fn continuous_style(feature: &Feature, hideout: &ContinuousHideout) -> Result<PathStyle> {
    let scale = hideout.scale()?;
    let color = scale.color_at(scale_input(property(feature, &hideout.color_prop)));
    Ok(hideout.style.clone().with_fill_color(Some(to_hex(color))))
}

/// Builds a circle marker colored by interpolating its property.
pub fn continuous_marker(
    feature: &Feature,
    latlng: LatLng,
    hideout: &ContinuousMarkerHideout,
) -> Result<CircleMarker> {
    let scale = hideout.scale()?;
    let color = scale.color_at(scale_input(property(feature, &hideout.color_prop)));
    Ok(CircleMarker::new(
        latlng,
        hideout
            .circle_options
            .clone()
            .with_fill_color(Some(to_hex(color))),
    ))
}

/// Styles a polygon with whichever resolver the hideout calls for.
pub fn polygon_style(feature: &Feature, hideout: &PolygonHideout) -> Result<PathStyle> {
    match hideout {
        PolygonHideout::Category(h) => Ok(category_style(feature, h)),
        PolygonHideout::Continuous(h) => continuous_style(feature, h),
    }
}

/// Builds a point marker with whichever resolver the hideout calls for.
pub fn point_marker(
    feature: &Feature,
    latlng: LatLng,
    hideout: &PointHideout,
) -> Result<CircleMarker> {
    match hideout {
        PointHideout::Category(h) => Ok(category_marker(feature, latlng, h)),
        PointHideout::Continuous(h) => continuous_marker(feature, latlng, h),
    }
}

/// Numeric input for a color scale; `null` and missing values have no data.
fn scale_input(value: Option<&Value>) -> f64 {
    match value {
        None | Some(Value::Null) => f64::NAN,
        Some(v) => to_number(Some(v)),
    }
}
