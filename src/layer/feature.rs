//! Features as attribute bags. Geometry is carried opaquely and never read.

use serde_json::{Map, Value};

/// One map feature: named properties plus an opaque geometry slot owned by
/// the host application's renderer.
#[derive(Clone, Debug, Default)]
pub struct Feature {
    properties: Map<String, Value>,
    geometry: Option<Value>,
}

impl Feature {
    pub fn new(properties: Map<String, Value>) -> Self {
        Self { properties, geometry: None }
    }

    pub fn with_geometry(properties: Map<String, Value>, geometry: Option<Value>) -> Self {
        Self { properties, geometry }
    }

    /// Raw property value, if present and non-null.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.properties.get(name).filter(|v| !v.is_null())
    }

    pub fn properties(&self) -> &Map<String, Value> {
        &self.properties
    }

    pub fn geometry(&self) -> Option<&Value> {
        self.geometry.as_ref()
    }
}
