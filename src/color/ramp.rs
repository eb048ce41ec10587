//! Built-in color ramps and per-class color resolution.

use serde::{Deserialize, Serialize};

use super::rgb::Rgb;

/// Every named ramp carries exactly this many colors.
pub const RAMP_LEN: usize = 8;

// ColorBrewer 8-class sequential schemes, light to dark.
const BLUES: [Rgb; RAMP_LEN] = [
    Rgb::new(0xf7, 0xfb, 0xff), Rgb::new(0xde, 0xeb, 0xf7),
    Rgb::new(0xc6, 0xdb, 0xef), Rgb::new(0x9e, 0xca, 0xe1),
    Rgb::new(0x6b, 0xae, 0xd6), Rgb::new(0x42, 0x92, 0xc6),
    Rgb::new(0x21, 0x71, 0xb5), Rgb::new(0x08, 0x45, 0x94),
];

const GREENS: [Rgb; RAMP_LEN] = [
    Rgb::new(0xf7, 0xfc, 0xf5), Rgb::new(0xe5, 0xf5, 0xe0),
    Rgb::new(0xc7, 0xe9, 0xc0), Rgb::new(0xa1, 0xd9, 0x9b),
    Rgb::new(0x74, 0xc4, 0x76), Rgb::new(0x41, 0xab, 0x5d),
    Rgb::new(0x23, 0x8b, 0x45), Rgb::new(0x00, 0x5a, 0x32),
];

const ORANGES: [Rgb; RAMP_LEN] = [
    Rgb::new(0xff, 0xf5, 0xeb), Rgb::new(0xfe, 0xe6, 0xce),
    Rgb::new(0xfd, 0xd0, 0xa2), Rgb::new(0xfd, 0xae, 0x6b),
    Rgb::new(0xfd, 0x8d, 0x3c), Rgb::new(0xf1, 0x69, 0x13),
    Rgb::new(0xd9, 0x48, 0x01), Rgb::new(0x8c, 0x2d, 0x04),
];

const PURPLES: [Rgb; RAMP_LEN] = [
    Rgb::new(0xfc, 0xfb, 0xfd), Rgb::new(0xef, 0xed, 0xf5),
    Rgb::new(0xda, 0xda, 0xeb), Rgb::new(0xbc, 0xbd, 0xdc),
    Rgb::new(0x9e, 0x9a, 0xc8), Rgb::new(0x80, 0x7d, 0xba),
    Rgb::new(0x6a, 0x51, 0xa3), Rgb::new(0x4a, 0x14, 0x86),
];

const REDS: [Rgb; RAMP_LEN] = [
    Rgb::new(0xff, 0xf5, 0xf0), Rgb::new(0xfe, 0xe0, 0xd2),
    Rgb::new(0xfc, 0xbb, 0xa1), Rgb::new(0xfc, 0x92, 0x72),
    Rgb::new(0xfb, 0x6a, 0x4a), Rgb::new(0xef, 0x3b, 0x2c),
    Rgb::new(0xcb, 0x18, 0x1d), Rgb::new(0x99, 0x00, 0x0d),
];

// Diverging scheme, warm to cool.
const SPECTRAL: [Rgb; RAMP_LEN] = [
    Rgb::new(0xd5, 0x3e, 0x4f), Rgb::new(0xf4, 0x6d, 0x43),
    Rgb::new(0xfd, 0xae, 0x61), Rgb::new(0xfe, 0xe0, 0x8b),
    Rgb::new(0xe6, 0xf5, 0x98), Rgb::new(0xab, 0xdd, 0xa4),
    Rgb::new(0x66, 0xc2, 0xa5), Rgb::new(0x32, 0x88, 0xbd),
];

/// A built-in color ramp.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamedRamp {
    Blues,
    Greens,
    Oranges,
    Purples,
    Reds,
    Spectral,
}

impl NamedRamp {
    pub const ALL: [NamedRamp; 6] = [
        NamedRamp::Blues,
        NamedRamp::Greens,
        NamedRamp::Oranges,
        NamedRamp::Purples,
        NamedRamp::Reds,
        NamedRamp::Spectral,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            NamedRamp::Blues => "blues",
            NamedRamp::Greens => "greens",
            NamedRamp::Oranges => "oranges",
            NamedRamp::Purples => "purples",
            NamedRamp::Reds => "reds",
            NamedRamp::Spectral => "spectral",
        }
    }

    /// Case-insensitive lookup by name.
    pub fn from_name(name: &str) -> Option<NamedRamp> {
        Self::ALL.into_iter().find(|r| r.name().eq_ignore_ascii_case(name))
    }

    pub fn colors(&self) -> &'static [Rgb; RAMP_LEN] {
        match self {
            NamedRamp::Blues => &BLUES,
            NamedRamp::Greens => &GREENS,
            NamedRamp::Oranges => &ORANGES,
            NamedRamp::Purples => &PURPLES,
            NamedRamp::Reds => &REDS,
            NamedRamp::Spectral => &SPECTRAL,
        }
    }
}

/// Names of all built-in ramps.
pub fn named_ramps() -> Vec<&'static str> {
    NamedRamp::ALL.iter().map(|r| r.name()).collect()
}

/// Colors of a built-in ramp looked up by name.
pub fn ramp_colors(name: &str) -> Option<&'static [Rgb; RAMP_LEN]> {
    NamedRamp::from_name(name).map(|r| r.colors())
}

/// Pick `n` colors from a fixed ramp by discrete sampling: each class takes
/// the last color of its stride-aligned bucket, biasing toward the dark end.
/// With more classes than ramp colors the stride clamps to 1 and the tail
/// reuses the last color.
pub fn sample_ramp(ramp: &[Rgb], n: usize) -> Vec<Rgb> {
    if ramp.is_empty() || n == 0 {
        return Vec::new();
    }
    let step = (ramp.len() / n).max(1);
    (0..n).map(|i| ramp[(i * step + step - 1).min(ramp.len() - 1)]).collect()
}

/// Resolve `n` colors from `k` custom stops: with enough stops, pick evenly
/// by index; with more classes than stops, interpolate each class position
/// along the piecewise-linear gradient.
pub fn interpolate_stops(stops: &[Rgb], n: usize) -> Vec<Rgb> {
    let k = stops.len();
    match (k, n) {
        (0, _) | (_, 0) => Vec::new(),
        (1, _) => vec![stops[0]; n],
        (_, 1) => vec![stops[0]],
        (k, n) if n <= k => (0..n)
            .map(|i| stops[((i * (k - 1)) as f64 / (n - 1) as f64).round() as usize])
            .collect(),
        (k, n) => (0..n)
            .map(|i| {
                let t = i as f64 / (n - 1) as f64;
                let pos = t * (k - 1) as f64;
                let seg = (pos.floor() as usize).min(k - 2);
                Rgb::lerp(stops[seg], stops[seg + 1], pos - seg as f64)
            })
            .collect(),
    }
}

/// Per-class color array for a classification. Custom stops (two or more)
/// take precedence over the named ramp; `reverse` flips the final array so
/// the highest class takes the lowest class's color.
pub fn resolve_colors(custom: Option<&[Rgb]>, ramp: NamedRamp, n: usize, reverse: bool) -> Vec<Rgb> {
    let mut colors = match custom {
        Some(stops) if stops.len() >= 2 => interpolate_stops(stops, n),
        _ => sample_ramp(ramp.colors(), n),
    };
    if reverse {
        colors.reverse();
    }
    colors
}
