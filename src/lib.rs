#![warn(clippy::all)]

//! Feature styling for the EGMS ground-motion dashboard.
//!
//! The map shows two layers built from European Ground Motion Service
//! InSAR data: measurement points and the active deformation areas (ADAs)
//! aggregated from them. This crate resolves fill colors for both layers
//! from a per-layer hideout (categorical class tables or continuous color
//! scales) and formats their hover tooltips.
//!
//! On `wasm32` the resolvers are exported with the calling conventions of
//! the map's GeoJSON callbacks; see the `wasm` module.

pub mod color;
pub mod error;
pub mod feature;
pub mod hideout;
pub mod legend;
pub mod metric;
pub mod palette;
pub mod render;
pub mod resolve;
pub mod settings;
pub mod style;
pub mod tooltip;
pub mod velocity;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use color::ColorScale;
pub use error::{Result, StyleError};
pub use hideout::{
    CategoryHideout, CategoryMarkerHideout, ContinuousHideout, ContinuousMarkerHideout,
    PointHideout, PolygonHideout,
};
pub use legend::Legend;
pub use metric::{
    point_hideout, point_layer, polygon_hideout, polygon_layer, Metric, PointLayer, PolygonLayer,
};
pub use render::{embed_styles, render_points, render_polygons, FeatureStyle, RenderedFeature};
pub use resolve::{
    category_marker, category_style, continuous_marker, continuous_style, point_marker,
    polygon_style,
};
pub use settings::StyleSettings;
pub use style::{CircleMarker, CircleOptions, LatLng, PathStyle};
pub use tooltip::{
    aggregate_tooltip, bind_aggregate_tooltip, bind_point_tooltip, point_tooltip, TooltipLayer,
};
pub use velocity::{annotate_velocity_groups, VelocityGroup};
