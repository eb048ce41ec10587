#![doc = "Choroplex public API"]
mod classify;
mod color;
mod engine;
mod io;
mod layer;
mod legend;
mod style;

pub mod cli;
pub mod commands;

#[doc(inline)]
pub use classify::{
    Method, breaks_for, class_of, collect_values, equal_interval, methods, natural_breaks,
    numeric_attributes, quantile,
};

#[doc(inline)]
pub use color::{
    NamedRamp, RAMP_LEN, Rgb, Rgba, interpolate_stops, named_ramps, ramp_colors, resolve_colors,
    sample_ramp,
};

#[doc(inline)]
pub use engine::{Classification, ClassificationConfig, ClassificationEngine, EventSink, NullSink};

#[doc(inline)]
pub use io::{parse_feature_collection, read_feature_collection};

#[doc(inline)]
pub use layer::{Feature, Layer, LayerId, LayerRegistry, MemoryRegistry};

#[doc(inline)]
pub use legend::{ColorClass, LegendEntry, LegendModel, build_legend, format_number, legend_data};

#[doc(inline)]
pub use style::{FILL_ALPHA, FeatureStyle, OUTLINE_DARKEN, Style, StyleFn};
