//! Browser bindings for the dashboard's GeoJSON layer callbacks.
//!
//! Every callback export keeps the calling convention of the Leaflet
//! callback it replaces, so the map can register it directly. Hideouts arrive
//! as `context.hideout`. The `*_layer_config` exports build the hideout,
//! hover style and legend for a metric. Errors are thrown as JS exceptions.

use crate::error::StyleError;
use crate::hideout::{ContinuousHideout, ContinuousMarkerHideout, PointHideout, PolygonHideout};
use crate::metric::{point_layer, polygon_layer, Metric};
use crate::resolve::{continuous_marker, continuous_style, point_marker, polygon_style};
use crate::settings::StyleSettings;
use crate::style::{CircleMarker, LatLng};
use crate::tooltip::{bind_aggregate_tooltip, bind_point_tooltip, TooltipLayer};
use geojson::Feature;
use js_sys::{Function, Reflect};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[derive(Deserialize)]
struct Context<H> {
    hideout: H,
}

/// Redirects `log` messages to the browser console.
#[wasm_bindgen(start)]
pub fn start() {
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();
}

/// Polygon style callback, `(feature, context) => style`.
///
/// Accepts either a category or a continuous hideout.
#[wasm_bindgen]
pub fn poly_style_handle(feature: JsValue, context: JsValue) -> Result<JsValue, JsValue> {
    let feature = parse_feature(feature)?;
    let hideout: PolygonHideout = parse_hideout(context)?;
    let style = polygon_style(&feature, &hideout).map_err(to_js)?;
    to_object(&style)
}

/// Point-to-layer callback, `(feature, latlng, context) => L.circleMarker`.
#[wasm_bindgen]
pub fn cat_points_style_handle(
    feature: JsValue,
    latlng: JsValue,
    context: JsValue,
) -> Result<JsValue, JsValue> {
    let parsed = parse_feature(feature)?;
    let hideout: PointHideout = parse_hideout(context)?;
    let marker = point_marker(&parsed, parse_latlng(&latlng)?, &hideout).map_err(to_js)?;
    circle_marker(&latlng, &marker)
}

/// Polygon style callback for continuous hideouts only.
#[wasm_bindgen]
pub fn insar_vel_poly_style_handle(
    feature: JsValue,
    context: JsValue,
) -> Result<JsValue, JsValue> {
    let feature = parse_feature(feature)?;
    let hideout: ContinuousHideout = parse_hideout(context)?;
    let style = continuous_style(&feature, &hideout).map_err(to_js)?;
    to_object(&style)
}

/// Point-to-layer callback for continuous hideouts only.
#[wasm_bindgen]
pub fn insar_vel_points_style_handle(
    feature: JsValue,
    latlng: JsValue,
    context: JsValue,
) -> Result<JsValue, JsValue> {
    let parsed = parse_feature(feature)?;
    let hideout: ContinuousMarkerHideout = parse_hideout(context)?;
    let marker = continuous_marker(&parsed, parse_latlng(&latlng)?, &hideout).map_err(to_js)?;
    circle_marker(&latlng, &marker)
}

/// Tooltip callback for measurement points, `(feature, layer, context)`.
#[wasm_bindgen]
pub fn on_each_feature(feature: JsValue, layer: JsValue, _context: JsValue) -> Result<(), JsValue> {
    let feature = parse_feature(feature)?;
    let mut layer = JsLayer::new(layer);
    bind_point_tooltip(&feature, &mut layer).map_err(to_js)?;
    layer.finish()
}

/// Tooltip callback for ADA polygons, `(feature, layer, context)`.
#[wasm_bindgen]
pub fn on_each_poly_feature(
    feature: JsValue,
    layer: JsValue,
    _context: JsValue,
) -> Result<(), JsValue> {
    let feature = parse_feature(feature)?;
    let mut layer = JsLayer::new(layer);
    bind_aggregate_tooltip(&feature, &mut layer).map_err(to_js)?;
    layer.finish()
}

/// Hideout, hover style and legend for an ADA polygon layer.
///
/// `settings` may be `undefined` to use the defaults.
#[wasm_bindgen]
pub fn polygon_layer_config(metric: &str, settings: JsValue) -> Result<JsValue, JsValue> {
    let metric: Metric = metric.parse().map_err(to_js)?;
    to_object(&polygon_layer(metric, &parse_settings(settings)?))
}

/// Hideout and legend for a measurement point layer.
#[wasm_bindgen]
pub fn point_layer_config(metric: &str, settings: JsValue) -> Result<JsValue, JsValue> {
    let metric: Metric = metric.parse().map_err(to_js)?;
    let layer = point_layer(metric, &parse_settings(settings)?).map_err(to_js)?;
    to_object(&layer)
}

/// A Leaflet layer. `bindTooltip` failures are held until [`JsLayer::finish`].
struct JsLayer {
    layer: JsValue,
    result: Result<(), JsValue>,
}

impl JsLayer {
    fn new(layer: JsValue) -> Self {
        Self {
            layer,
            result: Ok(()),
        }
    }

    fn finish(self) -> Result<(), JsValue> {
        self.result
    }
}

impl TooltipLayer for JsLayer {
    fn bind_tooltip(&mut self, text: String) {
        self.result = call_method(&self.layer, "bindTooltip", &[JsValue::from_str(&text)]);
    }
}

fn parse_feature(feature: JsValue) -> Result<Feature, JsValue> {
    Ok(serde_wasm_bindgen::from_value(feature)?)
}

fn parse_hideout<H: DeserializeOwned>(context: JsValue) -> Result<H, JsValue> {
    let context: Context<H> = serde_wasm_bindgen::from_value(context)?;
    Ok(context.hideout)
}

fn parse_settings(settings: JsValue) -> Result<StyleSettings, JsValue> {
    if settings.is_undefined() || settings.is_null() {
        return Ok(StyleSettings::default());
    }
    let settings: StyleSettings = serde_wasm_bindgen::from_value(settings)?;
    settings.no_data().map_err(to_js)?;
    Ok(settings)
}

fn parse_latlng(latlng: &JsValue) -> Result<LatLng, JsValue> {
    Ok(serde_wasm_bindgen::from_value(latlng.clone())?)
}

fn to_object<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    Ok(value.serialize(&serializer)?)
}

/// Builds the Leaflet marker, reusing the caller's `latlng` object.
fn circle_marker(latlng: &JsValue, marker: &CircleMarker) -> Result<JsValue, JsValue> {
    let leaflet = Reflect::get(&js_sys::global(), &JsValue::from_str("L"))?;
    let factory: Function = Reflect::get(&leaflet, &JsValue::from_str("circleMarker"))?
        .dyn_into()
        .map_err(|_| JsValue::from_str("L.circleMarker is not a function"))?;
    factory.call2(&leaflet, latlng, &to_object(&marker.options)?)
}

fn call_method(target: &JsValue, name: &str, args: &[JsValue]) -> Result<(), JsValue> {
    let method: Function = Reflect::get(target, &JsValue::from_str(name))?
        .dyn_into()
        .map_err(|_| JsValue::from_str(&format!("{name} is not a function")))?;
    let args: js_sys::Array = args.iter().collect();
    method.apply(target, &args)?;
    Ok(())
}

fn to_js(err: StyleError) -> JsValue {
    log::error!("{err}");
    JsValue::from_str(&err.to_string())
}
