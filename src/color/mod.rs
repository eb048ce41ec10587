mod ramp;
mod rgb;

pub use ramp::{
    NamedRamp, RAMP_LEN, interpolate_stops, named_ramps, ramp_colors, resolve_colors, sample_ramp,
};
pub use rgb::{Rgb, Rgba};
