//! Layers and the registry seam between the engine and its host.

mod feature;

pub use feature::Feature;

use std::fmt;
use std::sync::Arc;

use ahash::AHashMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::style::Style;

/// Stable key identifying a layer across the engine and its collaborators.
/// Keeps the original id text; cheap to clone.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LayerId(Arc<str>);

impl LayerId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LayerId {
    fn from(id: &str) -> Self {
        Self(Arc::from(id))
    }
}

impl From<String> for LayerId {
    fn from(id: String) -> Self {
        Self(Arc::from(id.as_str()))
    }
}

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for LayerId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for LayerId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(LayerId::from(String::deserialize(deserializer)?))
    }
}

/// One map layer: a feature collection plus its active style.
#[derive(Debug)]
pub struct Layer {
    id: LayerId,
    name: String,
    features: Vec<Feature>,
    style: Style,
}

impl Layer {
    pub fn new(id: LayerId, name: impl Into<String>, features: Vec<Feature>) -> Self {
        Self { id, name: name.into(), features, style: Style::default() }
    }

    pub fn id(&self) -> &LayerId {
        &self.id
    }

    pub fn display_name(&self) -> &str {
        &self.name
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn set_style(&mut self, style: Style) {
        self.style = style;
    }
}

/// Source of layers for the engine. The host application owns the real
/// registry; tests and the CLI use [`MemoryRegistry`].
pub trait LayerRegistry {
    fn layer(&self, id: &LayerId) -> Option<&Layer>;
    fn layer_mut(&mut self, id: &LayerId) -> Option<&mut Layer>;
}

/// Hash-map-backed registry.
#[derive(Debug, Default)]
pub struct MemoryRegistry {
    layers: AHashMap<LayerId, Layer>,
}

impl MemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, layer: Layer) {
        self.layers.insert(layer.id().clone(), layer);
    }

    pub fn remove(&mut self, id: &LayerId) -> Option<Layer> {
        self.layers.remove(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &LayerId> {
        self.layers.keys()
    }
}

impl LayerRegistry for MemoryRegistry {
    fn layer(&self, id: &LayerId) -> Option<&Layer> {
        self.layers.get(id)
    }

    fn layer_mut(&mut self, id: &LayerId) -> Option<&mut Layer> {
        self.layers.get_mut(id)
    }
}
