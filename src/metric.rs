//! Metrics the map can be colored by, and the hideouts that implement them.

use crate::error::{Result, StyleError};
use crate::hideout::{
    CategoryHideout, CategoryMarkerHideout, ContinuousHideout, ContinuousMarkerHideout,
    PointHideout, PolygonHideout,
};
use crate::legend::Legend;
use crate::palette;
use crate::settings::{Domain, StyleSettings, VelocityMode};
use crate::style::PathStyle;
use crate::velocity::{MEAN_VELOCITY_PROPERTY, VELOCITY_GROUP_PROPERTY};
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// A feature attribute selectable in the dashboard's color dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    /// Mean line-of-sight velocity in mm/yr
    MeanVelocity,
    /// Classifier confidence in the trend label
    LabelProb,
    /// Share of an ADA's points that are stable (polygons only)
    StableProp,
    /// Majority trend class
    MajorClass,
    /// Majority trend subclass
    MajorSubclass,
}

/// How a metric is colored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Coloring {
    /// Ordered `(class, color)` table
    Classes(&'static [(&'static str, &'static str)]),
    /// Color stops spread over a domain
    Scale(&'static [&'static str], Domain),
}

impl Metric {
    /// Column name used by the dashboard.
    pub fn name(&self) -> &'static str {
        match self {
            Self::MeanVelocity => "mean_velocity",
            Self::LabelProb => "label_prob",
            Self::StableProp => "stable_prop",
            Self::MajorClass => "ada_major_class",
            Self::MajorSubclass => "ada_major_subclass",
        }
    }

    /// Property a polygon layer reads for this metric.
    pub fn polygon_property(&self, settings: &StyleSettings) -> &'static str {
        match self {
            Self::MeanVelocity => velocity_property(settings),
            other => other.name(),
        }
    }

    /// Property a point layer reads for this metric.
    pub fn point_property(&self, settings: &StyleSettings) -> Result<&'static str> {
        match self {
            Self::MeanVelocity => Ok(velocity_property(settings)),
            Self::LabelProb => Ok("mp_label_prob"),
            Self::MajorClass => Ok("trend_class"),
            Self::MajorSubclass => Ok("trend_subclass"),
            Self::StableProp => Err(StyleError::UnsupportedMetric {
                metric: self.name(),
                layer: "point",
            }),
        }
    }

    /// Palette used for this metric under the given settings.
    pub fn coloring(&self, settings: &StyleSettings) -> Coloring {
        match self {
            Self::MeanVelocity => match settings.velocity_mode {
                VelocityMode::Grouped => Coloring::Classes(palette::VELOCITY_GROUP),
                VelocityMode::Continuous => {
                    Coloring::Scale(palette::VELOCITY_RAMP, settings.velocity_domain)
                }
            },
            Self::LabelProb => {
                Coloring::Scale(palette::LABEL_PROB_RAMP, settings.label_prob_domain)
            }
            Self::StableProp => {
                Coloring::Scale(palette::STABLE_PROP_RAMP, settings.stable_prop_domain)
            }
            Self::MajorClass => Coloring::Classes(palette::TREND_CLASS),
            Self::MajorSubclass => Coloring::Classes(palette::TREND_SUBCLASS),
        }
    }
}

fn velocity_property(settings: &StyleSettings) -> &'static str {
    match settings.velocity_mode {
        VelocityMode::Grouped => VELOCITY_GROUP_PROPERTY,
        VelocityMode::Continuous => MEAN_VELOCITY_PROPERTY,
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = StyleError;

    /// Accepts the dashboard column names and the per-point aliases.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "mean_velocity" | "mean_velocity_grp" => Ok(Self::MeanVelocity),
            "label_prob" | "mp_label_prob" => Ok(Self::LabelProb),
            "stable_prop" => Ok(Self::StableProp),
            "ada_major_class" | "trend_class" => Ok(Self::MajorClass),
            "ada_major_subclass" | "trend_subclass" => Ok(Self::MajorSubclass),
            other => Err(StyleError::UnknownMetric(other.to_string())),
        }
    }
}

/// Builds the hideout for an ADA polygon layer colored by `metric`.
pub fn polygon_hideout(metric: Metric, settings: &StyleSettings) -> PolygonHideout {
    let color_prop = metric.polygon_property(settings).to_string();
    let style = settings.polygon_style.clone();

    match metric.coloring(settings) {
        Coloring::Classes(map) => PolygonHideout::Category(CategoryHideout {
            classes: palette::classes(map).into_iter().map(Value::String).collect(),
            colorscale: palette::colors(map),
            style,
            color_prop,
        }),
        Coloring::Scale(stops, domain) => PolygonHideout::Continuous(ContinuousHideout {
            min: domain.min,
            max: domain.max,
            colorscale: palette::ramp(stops),
            style,
            color_prop,
            no_data: Some(settings.no_data_color.clone()),
        }),
    }
}

/// Builds the hideout for a measurement point layer colored by `metric`.
pub fn point_hideout(metric: Metric, settings: &StyleSettings) -> Result<PointHideout> {
    let color_prop = metric.point_property(settings)?.to_string();
    let circle_options = settings.circle_options.clone();

    Ok(match metric.coloring(settings) {
        Coloring::Classes(map) => PointHideout::Category(CategoryMarkerHideout {
            color_prop,
            circle_options,
            color_dict: map
                .iter()
                .map(|(class, color)| (class.to_string(), color.to_string()))
                .collect(),
        }),
        Coloring::Scale(stops, domain) => PointHideout::Continuous(ContinuousMarkerHideout {
            min: domain.min,
            max: domain.max,
            colorscale: palette::ramp(stops),
            circle_options,
            color_prop,
            no_data: Some(settings.no_data_color.clone()),
        }),
    })
}

/// Everything the map needs to draw an ADA polygon layer for one metric.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolygonLayer {
    pub hideout: PolygonHideout,
    /// Style for the polygon under the cursor
    pub hover_style: PathStyle,
    pub legend: Legend,
}

/// Everything the map needs to draw a measurement point layer for one metric.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointLayer {
    pub hideout: PointHideout,
    pub legend: Legend,
}

/// Hideout, hover style and legend for a polygon layer colored by `metric`.
pub fn polygon_layer(metric: Metric, settings: &StyleSettings) -> PolygonLayer {
    PolygonLayer {
        hideout: polygon_hideout(metric, settings),
        hover_style: settings.hover_style.clone(),
        legend: Legend::for_metric(metric, settings),
    }
}

/// Hideout and legend for a point layer colored by `metric`.
pub fn point_layer(metric: Metric, settings: &StyleSettings) -> Result<PointLayer> {
    Ok(PointLayer {
        hideout: point_hideout(metric, settings)?,
        legend: Legend::for_metric(metric, settings),
    })
}
