//! GeoJSON ingestion: feature collections as attribute bags.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde_json::Value;

use crate::layer::Feature;

/// Read a GeoJSON FeatureCollection from `path`.
pub fn read_feature_collection(path: &Path) -> Result<Vec<Feature>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_feature_collection(&text)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

/// Parse GeoJSON FeatureCollection text. Properties become the attribute
/// bag; geometry is carried through opaquely and never interpreted.
pub fn parse_feature_collection(text: &str) -> Result<Vec<Feature>> {
    let value: Value = serde_json::from_str(text).context("Invalid JSON")?;
    if value["type"].as_str() != Some("FeatureCollection") {
        bail!("Expected a FeatureCollection, got {}", value["type"]);
    }

    let mut features = Vec::new();
    if let Some(items) = value["features"].as_array() {
        for item in items {
            let properties = item["properties"].as_object().cloned().unwrap_or_default();
            let geometry = match &item["geometry"] {
                Value::Null => None,
                geometry => Some(geometry.clone()),
            };
            features.push(Feature::with_geometry(properties, geometry));
        }
    }
    Ok(features)
}

#[cfg(test)]
mod tests {
    use super::parse_feature_collection;

    const COLLECTION: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "geometry": {"type": "Point", "coordinates": [-89.4, 43.1]},
                "properties": {"name": "Dane", "pop": 561504}
            },
            {
                "type": "Feature",
                "geometry": null,
                "properties": {"name": "Iron", "pop": "6137"}
            }
        ]
    }"#;

    #[test]
    fn properties_and_geometry_split() {
        let features = parse_feature_collection(COLLECTION).unwrap();
        assert_eq!(features.len(), 2);
        assert_eq!(features[0].get("pop"), Some(&serde_json::json!(561504)));
        assert!(features[0].geometry().is_some());
        assert!(features[1].geometry().is_none());
    }

    #[test]
    fn non_collections_are_rejected() {
        assert!(parse_feature_collection("{\"type\": \"Feature\"}").is_err());
        assert!(parse_feature_collection("not json").is_err());
    }
}
