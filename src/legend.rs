//! Map legends for the active metric.

use crate::metric::{Coloring, Metric};
use crate::settings::{Domain, StyleSettings};
use serde::Serialize;

/// One swatch of a categorical legend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub label: String,
    pub color: String,
}

/// Legend describing how a metric is colored.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Legend {
    /// Swatches in class order.
    Categorical {
        title: String,
        entries: Vec<LegendEntry>,
    },
    /// A gradient over a domain.
    Continuous {
        title: String,
        min: f64,
        max: f64,
        stops: Vec<String>,
    },
}

impl Legend {
    /// Builds the legend for `metric` under the given settings.
    pub fn for_metric(metric: Metric, settings: &StyleSettings) -> Self {
        let title = prettify_label(metric.name());

        match metric.coloring(settings) {
            Coloring::Classes(classes) => Legend::Categorical {
                title,
                entries: classes
                    .iter()
                    .map(|(label, color)| LegendEntry {
                        label: label.to_string(),
                        color: color.to_string(),
                    })
                    .collect(),
            },
            Coloring::Scale(stops, Domain { min, max }) => Legend::Continuous {
                title,
                min,
                max,
                stops: stops.iter().map(|s| s.to_string()).collect(),
            },
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Legend::Categorical { title, .. } | Legend::Continuous { title, .. } => title,
        }
    }
}

/// Turns a column name into a display label: underscores become spaces and
/// only the first letter is capitalized (`"ada_major_class"` -> `"Ada major class"`).
pub fn prettify_label(name: &str) -> String {
    let spaced = name.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => String::new(),
    }
}
