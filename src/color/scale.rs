//! Continuous color scale over a numeric domain.

use super::parse_css_color;
use crate::error::{Result, StyleError};
use eframe::egui::Color32;

/// Maps a numeric domain onto a gradient of evenly spaced color stops.
///
/// Interpolation is linear per RGB channel. Values outside the domain clamp to
/// the nearest endpoint color and NaN maps to the no-data color.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScale {
    stops: Vec<Color32>,
    /// Position of each stop in [0, 1]
    positions: Vec<f64>,
    min: f64,
    max: f64,
    no_data: Color32,
}

impl ColorScale {
    /// Color returned for missing or non-numeric input (`#cccccc`).
    pub const DEFAULT_NO_DATA: Color32 = Color32::from_rgb(204, 204, 204);

    /// Builds a scale from CSS color stops over `[min, max]`.
    ///
    /// `min > max` is allowed and runs the gradient backwards.
    pub fn new<S: AsRef<str>>(colors: &[S], min: f64, max: f64) -> Result<Self> {
        if colors.is_empty() {
            return Err(StyleError::EmptyColorScale);
        }

        let stops = colors
            .iter()
            .map(|c| parse_css_color(c.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        let last = (stops.len() - 1).max(1) as f64;
        let positions = (0..stops.len()).map(|i| i as f64 / last).collect();

        Ok(Self {
            stops,
            positions,
            min,
            max,
            no_data: Self::DEFAULT_NO_DATA,
        })
    }

    /// Replaces the no-data color.
    pub fn with_no_data(mut self, color: Color32) -> Self {
        self.no_data = color;
        self
    }

    /// Evaluates the scale at `value`.
    pub fn color_at(&self, value: f64) -> Color32 {
        if value.is_nan() {
            return self.no_data;
        }

        let t = self.normalize(value);
        let last = self.stops.len() - 1;

        if t <= self.positions[0] {
            return self.stops[0];
        }
        if t >= self.positions[last] {
            return self.stops[last];
        }

        for i in 0..last {
            let (p0, p1) = (self.positions[i], self.positions[i + 1]);
            if t >= p0 && t < p1 {
                return lerp(self.stops[i], self.stops[i + 1], (t - p0) / (p1 - p0));
            }
        }

        self.stops[last]
    }

    /// Position of `value` within the domain, clamped to [0, 1].
    fn normalize(&self, value: f64) -> f64 {
        let t = if self.max != self.min {
            (value - self.min) / (self.max - self.min)
        } else {
            1.0
        };
        t.clamp(0.0, 1.0)
    }
}

fn lerp(from: Color32, to: Color32, f: f64) -> Color32 {
    let channel = |a: u8, b: u8| -> u8 {
        let (a, b) = (a as f64, b as f64);
        (a + f * (b - a)).round().clamp(0.0, 255.0) as u8
    };
    Color32::from_rgb(
        channel(from.r(), to.r()),
        channel(from.g(), to.g()),
        channel(from.b(), to.b()),
    )
}
