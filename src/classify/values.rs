//! Attribute discovery and numeric value extraction from feature collections.

use serde_json::Value;

use crate::layer::Feature;

/// Attribute names usable for classification: property keys of the first
/// feature whose first-seen value is a number or numeric-looking text.
/// Empty collection yields an empty list.
pub fn numeric_attributes(features: &[Feature]) -> Vec<String> {
    let Some(first) = features.first() else {
        return Vec::new();
    };
    first
        .properties()
        .iter()
        .filter(|(_, value)| parse_numeric(value).is_some())
        .map(|(key, _)| key.clone())
        .collect()
}

/// Collect the attribute's numeric values across all features, sorted
/// ascending. Missing, null and unparseable values are skipped, so the
/// result is NaN-free.
pub fn collect_values(features: &[Feature], attribute: &str) -> Vec<f64> {
    let mut values: Vec<f64> = features
        .iter()
        .filter_map(|f| f.get(attribute).and_then(parse_numeric))
        .collect();
    values.sort_by(f64::total_cmp);
    values
}

/// Numeric coercion: JSON numbers pass through, strings are trimmed and
/// parsed whole. Everything else (and NaN) is rejected.
pub(crate) fn parse_numeric(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| !v.is_nan())
}
