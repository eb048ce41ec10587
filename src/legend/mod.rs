//! Legend models: per-class ranges and renderer-facing rows.

mod format;

pub use format::format_number;

use serde::Serialize;

use crate::color::Rgb;
use crate::layer::LayerId;

/// One legend class: a color plus the value range it covers.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorClass {
    pub index: usize,
    pub color: Rgb,
    pub range_min: f64,
    pub range_max: f64,
}

/// Per-layer legend, rebuilt on every apply and dropped on reset.
#[derive(Clone, Debug)]
pub struct LegendModel {
    pub layer: LayerId,
    pub attribute: String,
    pub classes: Vec<ColorClass>,
}

/// One formatted legend row for an external UI.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LegendEntry {
    pub min: String,
    pub max: String,
    pub color: String,
}

impl LegendEntry {
    /// Combined range label, e.g. `2.5K – 8.1K`.
    pub fn label(&self) -> String {
        format!("{} – {}", self.min, self.max)
    }
}

/// Build the legend model for a classification: one class per adjacent break
/// pair, zipped with the class colors.
pub fn build_legend(layer: LayerId, attribute: String, breaks: &[f64], colors: &[Rgb]) -> LegendModel {
    let classes = breaks
        .windows(2)
        .zip(colors)
        .enumerate()
        .map(|(index, (pair, &color))| ColorClass {
            index,
            color,
            range_min: pair[0],
            range_max: pair[1],
        })
        .collect();
    LegendModel { layer, attribute, classes }
}

/// Renderer-facing legend rows: formatted bounds plus hex colors.
pub fn legend_data(breaks: &[f64], colors: &[Rgb]) -> Vec<LegendEntry> {
    breaks
        .windows(2)
        .zip(colors)
        .map(|(pair, color)| LegendEntry {
            min: format_number(pair[0]),
            max: format_number(pair[1]),
            color: color.to_hex(),
        })
        .collect()
}
