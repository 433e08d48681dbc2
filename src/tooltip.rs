//! Tooltip text for measurement points and ADA polygons.
//!
//! Tooltips are small HTML fragments, one `<br>`-terminated line per
//! attribute. Property values are embedded as-is without escaping.

use crate::error::{Result, StyleError};
use crate::feature::{property, to_fixed, to_js_string, to_number};
use geojson::Feature;
use serde_json::Value;

/// A rendered layer that can carry a tooltip.
pub trait TooltipLayer {
    /// Attaches `text` as the layer's tooltip, replacing any previous one.
    fn bind_tooltip(&mut self, text: String);
}

/// Tooltip for a single measurement point.
///
/// Fails with [`StyleError::NotNumeric`] when `mean_velocity` or
/// `mp_label_prob` is missing or not a number.
pub fn point_tooltip(feature: &Feature) -> Result<String> {
    Ok(format!(
        "PID: {}<br>\
         Mean velocity: {}mm/yr<br>\
         Label prob: {}<br>\
         Trend class: {}<br>\
         Trend subclass: {}<br>",
        text(feature, "pid"),
        fixed(feature, "mean_velocity")?,
        fixed(feature, "mp_label_prob")?,
        text(feature, "trend_class"),
        text(feature, "trend_subclass"),
    ))
}

/// Tooltip for an ADA polygon summarizing its points.
///
/// `stable_prop` is shown as a percentage and goes through numeric coercion,
/// so a missing value prints `NaN%` instead of failing.
pub fn aggregate_tooltip(feature: &Feature) -> Result<String> {
    let stable_pct = to_number(property(feature, "stable_prop")) * 100.0;

    Ok(format!(
        "N active MPs: {}<br>\
         Mean velocity: {}mm/yr<br>\
         Stable prop: {}%<br>\
         Avg. label prob: {}<br>\
         ADA major class: {}<br>\
         ADA major subclass: {}<br>",
        text(feature, "n_ada_points"),
        fixed(feature, "mean_velocity")?,
        to_fixed(stable_pct, 2),
        fixed(feature, "label_prob")?,
        text(feature, "ada_major_class"),
        text(feature, "ada_major_subclass"),
    ))
}

/// Binds the point tooltip onto `layer`.
pub fn bind_point_tooltip(feature: &Feature, layer: &mut impl TooltipLayer) -> Result<()> {
    layer.bind_tooltip(point_tooltip(feature)?);
    Ok(())
}

/// Binds the aggregate tooltip onto `layer`.
pub fn bind_aggregate_tooltip(feature: &Feature, layer: &mut impl TooltipLayer) -> Result<()> {
    layer.bind_tooltip(aggregate_tooltip(feature)?);
    Ok(())
}

fn text(feature: &Feature, key: &str) -> String {
    to_js_string(property(feature, key))
}

fn fixed(feature: &Feature, key: &'static str) -> Result<String> {
    match property(feature, key) {
        Some(Value::Number(n)) => Ok(to_fixed(n.as_f64().unwrap_or(f64::NAN), 2)),
        other => Err(StyleError::NotNumeric {
            property: key,
            found: kind(other),
        }),
    }
}

fn kind(value: Option<&Value>) -> &'static str {
    match value {
        None => "missing",
        Some(Value::Null) => "null",
        Some(Value::Bool(_)) => "a boolean",
        Some(Value::Number(_)) => "a number",
        Some(Value::String(_)) => "a string",
        Some(Value::Array(_)) => "an array",
        Some(Value::Object(_)) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn feature(properties: Value) -> Feature {
        Feature {
            bbox: None,
            geometry: None,
            id: None,
            properties: properties.as_object().cloned(),
            foreign_members: None,
        }
    }

    fn point() -> Feature {
        feature(json!({
            "pid": "1lLuCiQfNb",
            "mean_velocity": 3.456,
            "mp_label_prob": 0.912,
            "trend_class": "linear",
            "trend_subclass": "active-constant"
        }))
    }

    fn ada() -> Feature {
        feature(json!({
            "n_ada_points": 14,
            "mean_velocity": -6.1,
            "stable_prop": 0.5,
            "label_prob": 0.8765,
            "ada_major_class": "quadratic",
            "ada_major_subclass": "active-acceleration"
        }))
    }

    #[derive(Default)]
    struct Layer {
        tooltip: Option<String>,
    }

    impl TooltipLayer for Layer {
        fn bind_tooltip(&mut self, text: String) {
            self.tooltip = Some(text);
        }
    }

    #[test]
    fn test_point_tooltip_text() {
        let text = point_tooltip(&point()).unwrap();
        assert_eq!(
            text,
            "PID: 1lLuCiQfNb<br>Mean velocity: 3.46mm/yr<br>Label prob: 0.91<br>\
             Trend class: linear<br>Trend subclass: active-constant<br>"
        );
        assert!(text.contains("3.46mm/yr"));
    }

    #[test]
    fn test_aggregate_tooltip_text() {
        let text = aggregate_tooltip(&ada()).unwrap();
        assert!(text.starts_with("N active MPs: 14<br>"));
        assert!(text.contains("Mean velocity: -6.10mm/yr<br>"));
        assert!(text.contains("Stable prop: 50.00%<br>"));
        assert!(text.contains("Avg. label prob: 0.88<br>"));
        assert!(text.ends_with("ADA major subclass: active-acceleration<br>"));
    }

    #[test]
    fn test_tooltips_are_deterministic() {
        assert_eq!(point_tooltip(&point()).unwrap(), point_tooltip(&point()).unwrap());
        assert_eq!(aggregate_tooltip(&ada()).unwrap(), aggregate_tooltip(&ada()).unwrap());
    }

    #[test]
    fn test_missing_text_fields_print_undefined() {
        let text = point_tooltip(&feature(json!({
            "mean_velocity": 1,
            "mp_label_prob": 0.5,
            "trend_class": null
        })))
        .unwrap();
        assert!(text.starts_with("PID: undefined<br>"));
        assert!(text.contains("Mean velocity: 1.00mm/yr"));
        assert!(text.contains("Trend class: null<br>"));
    }

    #[test]
    fn test_non_numeric_velocity_fails() {
        let err = point_tooltip(&feature(json!({"mean_velocity": "3.4", "mp_label_prob": 0.5})))
            .unwrap_err();
        assert!(matches!(
            err,
            StyleError::NotNumeric {
                property: "mean_velocity",
                found: "a string"
            }
        ));

        let err = aggregate_tooltip(&feature(json!({"mean_velocity": 1.0}))).unwrap_err();
        assert!(matches!(
            err,
            StyleError::NotNumeric {
                property: "label_prob",
                found: "missing"
            }
        ));
    }

    #[test]
    fn test_stable_prop_coerces() {
        let mut props = ada().properties.unwrap();
        props.insert("stable_prop".into(), json!("0.25"));
        let text = aggregate_tooltip(&feature(Value::Object(props.clone()))).unwrap();
        assert!(text.contains("Stable prop: 25.00%"));

        props.remove("stable_prop");
        let text = aggregate_tooltip(&feature(Value::Object(props))).unwrap();
        assert!(text.contains("Stable prop: NaN%"));
    }

    #[test]
    fn test_bind_onto_layer() {
        let mut layer = Layer::default();
        bind_point_tooltip(&point(), &mut layer).unwrap();
        assert!(layer.tooltip.as_deref().unwrap().starts_with("PID: 1lLuCiQfNb"));

        let mut layer = Layer::default();
        assert!(bind_aggregate_tooltip(&feature(json!({})), &mut layer).is_err());
        assert!(layer.tooltip.is_none());
    }
}
