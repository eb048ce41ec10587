//! Resolved feature appearance and the static/computed style variant.

use std::fmt;
use std::rc::Rc;

use crate::color::{Rgb, Rgba};
use crate::layer::Feature;

/// Fill transparency applied to every class fill.
pub const FILL_ALPHA: f64 = 0.6;

/// Per-channel darkening applied to derive outline colors.
pub const OUTLINE_DARKEN: u8 = 40;

/// Resolved appearance of a single feature.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FeatureStyle {
    pub fill: Rgba,
    pub outline: Rgba,
}

impl FeatureStyle {
    /// Class appearance: alpha-blended fill, darkened opaque outline.
    pub fn for_class(color: Rgb) -> Self {
        Self {
            fill: color.with_alpha(FILL_ALPHA),
            outline: color.darken(OUTLINE_DARKEN).with_alpha(1.0),
        }
    }

    /// Neutral appearance for features whose attribute fails to parse.
    pub fn fallback() -> Self {
        Self {
            fill: Rgb::new(160, 160, 160).with_alpha(0.45),
            outline: Rgb::new(96, 96, 96).with_alpha(1.0),
        }
    }

    /// Appearance of layers before any classification.
    pub fn base() -> Self {
        Self {
            fill: Rgb::new(110, 150, 210).with_alpha(FILL_ALPHA),
            outline: Rgb::new(60, 90, 150).with_alpha(1.0),
        }
    }
}

/// Per-feature style resolver installed by a classification.
pub type StyleFn = Rc<dyn Fn(&Feature) -> FeatureStyle>;

/// A layer's style: either one fixed appearance or a per-feature resolver.
#[derive(Clone)]
pub enum Style {
    Static(FeatureStyle),
    Computed(StyleFn),
}

impl Style {
    /// Appearance of `feature` under this style.
    pub fn resolve(&self, feature: &Feature) -> FeatureStyle {
        match self {
            Style::Static(style) => *style,
            Style::Computed(resolver) => resolver(feature),
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Style::Static(FeatureStyle::base())
    }
}

impl PartialEq for Style {
    /// Static styles compare by value; computed styles by resolver identity.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Style::Static(a), Style::Static(b)) => a == b,
            (Style::Computed(a), Style::Computed(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Style::Static(style) => f.debug_tuple("Static").field(style).finish(),
            Style::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::{FeatureStyle, Style};
    use crate::color::Rgb;

    #[test]
    fn class_style_blends_and_darkens() {
        let style = FeatureStyle::for_class(Rgb::new(100, 150, 200));
        assert_eq!(style.fill.rgb, Rgb::new(100, 150, 200));
        assert_eq!(style.fill.alpha, 0.6);
        assert_eq!(style.outline.rgb, Rgb::new(60, 110, 160));
        assert_eq!(style.outline.alpha, 1.0);
    }

    #[test]
    fn equality_follows_the_variant() {
        let a = Style::Static(FeatureStyle::base());
        let b = Style::Static(FeatureStyle::base());
        assert_eq!(a, b);

        let f = Style::Computed(Rc::new(|_: &crate::layer::Feature| FeatureStyle::fallback()));
        let g = f.clone();
        assert_eq!(f, g);
        assert_ne!(f, Style::Computed(Rc::new(|_: &crate::layer::Feature| FeatureStyle::fallback())));
        assert_ne!(a, f);
    }
}
