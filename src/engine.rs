//! Classification orchestration: the apply/reset lifecycle and per-layer
//! cached state.

use std::rc::Rc;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::classify::{Method, breaks_for, class_of, collect_values, numeric_attributes, parse_numeric};
use crate::color::{NamedRamp, Rgb, resolve_colors};
use crate::layer::{Feature, LayerId, LayerRegistry};
use crate::legend::{LegendModel, build_legend};
use crate::style::{FeatureStyle, Style};

/// One classification request. Owned by the engine for the duration of one
/// classification and replaced wholesale on reapply.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClassificationConfig {
    pub layer: LayerId,
    pub attribute: String,
    pub method: Method,
    pub num_classes: usize,
    pub ramp: NamedRamp,
    #[serde(default)]
    pub reverse: bool,
    /// Two or more stop colors override the named ramp.
    #[serde(default)]
    pub custom_colors: Option<Vec<Rgb>>,
}

/// Breaks and colors produced by a successful apply.
#[derive(Clone, Debug, PartialEq)]
pub struct Classification {
    pub breaks: Vec<f64>,
    pub colors: Vec<Rgb>,
}

/// Outbound notifications to the host application.
pub trait EventSink {
    /// A layer's style changed; the renderer should redraw it.
    fn style_changed(&mut self, layer: &LayerId);
}

/// Sink that drops every event.
#[derive(Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn style_changed(&mut self, _layer: &LayerId) {}
}

/// Orchestrates classification over a layer registry: computes breaks and
/// colors, installs per-feature resolvers, and tracks the cached original
/// style and legend for each classified layer.
pub struct ClassificationEngine<R, E = NullSink> {
    registry: R,
    events: E,
    originals: AHashMap<LayerId, Style>,
    legends: AHashMap<LayerId, LegendModel>,
    active: Option<(LayerId, String)>,
}

impl<R: LayerRegistry> ClassificationEngine<R> {
    pub fn new(registry: R) -> Self {
        Self::with_events(registry, NullSink)
    }
}

impl<R: LayerRegistry, E: EventSink> ClassificationEngine<R, E> {
    pub fn with_events(registry: R, events: E) -> Self {
        Self {
            registry,
            events,
            originals: AHashMap::new(),
            legends: AHashMap::new(),
            active: None,
        }
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut R {
        &mut self.registry
    }

    /// Attributes of `layer` usable for classification.
    pub fn numeric_attributes(&self, layer: &LayerId) -> Vec<String> {
        self.registry
            .layer(layer)
            .map(|l| numeric_attributes(l.features()))
            .unwrap_or_default()
    }

    /// Classify a layer: compute breaks and colors, install the per-feature
    /// resolver, and publish the legend. Returns `None` without touching any
    /// state when the layer is missing, the attribute has no numeric values,
    /// or the class count is zero.
    pub fn apply(&mut self, config: &ClassificationConfig) -> Option<Classification> {
        if config.num_classes < 1 {
            warn!(layer = %config.layer, "rejected classification with zero classes");
            return None;
        }
        let Some(layer) = self.registry.layer_mut(&config.layer) else {
            warn!(layer = %config.layer, "layer not found");
            return None;
        };
        let values = collect_values(layer.features(), &config.attribute);
        if values.is_empty() {
            warn!(
                layer = %config.layer,
                attribute = %config.attribute,
                "no numeric values to classify"
            );
            return None;
        }

        let breaks = breaks_for(&values, config.num_classes, config.method);
        let colors = resolve_colors(
            config.custom_colors.as_deref(),
            config.ramp,
            config.num_classes,
            config.reverse,
        );

        // Only the first classification captures the pre-classification
        // style; reapplies must not overwrite it.
        self.originals
            .entry(config.layer.clone())
            .or_insert_with(|| layer.style().clone());

        layer.set_style(make_resolver(&config.attribute, &breaks, &colors));

        let legend = build_legend(config.layer.clone(), config.attribute.clone(), &breaks, &colors);
        self.legends.insert(config.layer.clone(), legend);
        self.active = Some((config.layer.clone(), config.attribute.clone()));
        self.events.style_changed(&config.layer);
        debug!(
            layer = %config.layer,
            attribute = %config.attribute,
            method = config.method.key(),
            classes = colors.len(),
            "classification applied"
        );
        Some(Classification { breaks, colors })
    }

    /// Restore the layer's pre-classification style and drop its cached
    /// state. Idempotent; a layer that was never classified is untouched.
    pub fn reset(&mut self, layer_id: &LayerId) {
        if let Some(original) = self.originals.remove(layer_id) {
            if let Some(layer) = self.registry.layer_mut(layer_id) {
                layer.set_style(original);
            }
            self.events.style_changed(layer_id);
            debug!(layer = %layer_id, "classification reset");
        }
        self.legends.remove(layer_id);
        self.clear_tracking(layer_id);
    }

    /// Host notification that a layer was removed externally: drop every
    /// cached entry for it without touching the registry.
    pub fn layer_removed(&mut self, layer_id: &LayerId) {
        self.originals.remove(layer_id);
        self.legends.remove(layer_id);
        self.clear_tracking(layer_id);
        debug!(layer = %layer_id, "dropped cached state for removed layer");
    }

    /// Legend of a classified layer, if any.
    pub fn legend(&self, layer_id: &LayerId) -> Option<&LegendModel> {
        self.legends.get(layer_id)
    }

    /// Currently classified layer and attribute.
    pub fn active(&self) -> Option<(&LayerId, &str)> {
        self.active.as_ref().map(|(id, attribute)| (id, attribute.as_str()))
    }

    fn clear_tracking(&mut self, layer_id: &LayerId) {
        if self.active.as_ref().is_some_and(|(id, _)| id == layer_id) {
            self.active = None;
        }
    }
}

/// Build the per-feature resolver for a classification. The resolver closes
/// over its own snapshot of breaks and colors, so a superseding apply can
/// never corrupt rendering that still holds the previous style.
fn make_resolver(attribute: &str, breaks: &[f64], colors: &[Rgb]) -> Style {
    let attribute = attribute.to_owned();
    let breaks = breaks.to_vec();
    let colors = colors.to_vec();
    Style::Computed(Rc::new(move |feature: &Feature| {
        match feature.get(&attribute).and_then(parse_numeric) {
            Some(value) => {
                let class = class_of(value, &breaks).min(colors.len() - 1);
                FeatureStyle::for_class(colors[class])
            }
            None => FeatureStyle::fallback(),
        }
    }))
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use serde_json::json;

    use super::{ClassificationConfig, ClassificationEngine, EventSink, NullSink};
    use crate::classify::Method;
    use crate::color::{NamedRamp, Rgb};
    use crate::layer::{Feature, Layer, LayerId, LayerRegistry, MemoryRegistry};
    use crate::style::{FeatureStyle, Style};

    fn feat(props: serde_json::Value) -> Feature {
        Feature::new(props.as_object().cloned().unwrap())
    }

    fn counties() -> Layer {
        let features = (1..=10)
            .map(|i| feat(json!({"name": format!("county {i}"), "pop": i})))
            .collect();
        Layer::new(LayerId::from("counties"), "Counties", features)
    }

    fn engine_with(layer: Layer) -> ClassificationEngine<MemoryRegistry, NullSink> {
        let mut registry = MemoryRegistry::new();
        registry.insert(layer);
        ClassificationEngine::new(registry)
    }

    fn config() -> ClassificationConfig {
        ClassificationConfig {
            layer: LayerId::from("counties"),
            attribute: "pop".into(),
            method: Method::EqualInterval,
            num_classes: 5,
            ramp: NamedRamp::Blues,
            reverse: false,
            custom_colors: None,
        }
    }

    #[test]
    fn apply_returns_breaks_and_colors() {
        let mut engine = engine_with(counties());
        let result = engine.apply(&config()).unwrap();
        assert_eq!(result.breaks.len(), 6);
        assert_eq!(result.colors.len(), 5);
        assert_eq!(result.breaks[0], 1.0);
        assert_eq!(result.breaks[5], 10.0);

        let legend = engine.legend(&LayerId::from("counties")).unwrap();
        assert_eq!(legend.classes.len(), 5);
        assert_eq!(legend.attribute, "pop");
        assert_eq!(engine.active().unwrap().1, "pop");
    }

    #[test]
    fn apply_installs_a_working_resolver() {
        let mut engine = engine_with(counties());
        let result = engine.apply(&config()).unwrap();

        let id = LayerId::from("counties");
        let style = engine.registry().layer(&id).unwrap().style().clone();

        // Lowest value gets the first class color, highest the last.
        let low = style.resolve(&feat(json!({"pop": 1})));
        let high = style.resolve(&feat(json!({"pop": 10})));
        assert_eq!(low.fill.rgb, result.colors[0]);
        assert_eq!(high.fill.rgb, result.colors[4]);
        assert_eq!(low.outline.rgb, result.colors[0].darken(40));

        // Numeric strings classify like numbers; garbage gets the fallback.
        let text = style.resolve(&feat(json!({"pop": "10"})));
        assert_eq!(text.fill.rgb, result.colors[4]);
        let bad = style.resolve(&feat(json!({"pop": "unknown"})));
        assert_eq!(bad, FeatureStyle::fallback());
        let missing = style.resolve(&feat(json!({})));
        assert_eq!(missing, FeatureStyle::fallback());
    }

    #[test]
    fn missing_layer_and_empty_data_return_none() {
        let mut engine = engine_with(counties());

        let mut bad = config();
        bad.layer = LayerId::from("nope");
        assert!(engine.apply(&bad).is_none());

        let mut no_data = config();
        no_data.attribute = "name".into();
        assert!(engine.apply(&no_data).is_none());

        // A failed apply installs nothing.
        let id = LayerId::from("counties");
        assert!(engine.legend(&id).is_none());
        assert_eq!(*engine.registry().layer(&id).unwrap().style(), Style::default());
    }

    #[test]
    fn zero_classes_are_rejected() {
        let mut engine = engine_with(counties());
        let mut cfg = config();
        cfg.num_classes = 0;
        assert!(engine.apply(&cfg).is_none());
    }

    #[test]
    fn reset_restores_the_original_style() {
        let mut engine = engine_with(counties());
        let id = LayerId::from("counties");
        let before = engine.registry().layer(&id).unwrap().style().clone();

        engine.apply(&config()).unwrap();
        assert_ne!(*engine.registry().layer(&id).unwrap().style(), before);

        engine.reset(&id);
        assert_eq!(*engine.registry().layer(&id).unwrap().style(), before);
        assert!(engine.legend(&id).is_none());
        assert!(engine.active().is_none());

        // Second reset is a no-op.
        engine.reset(&id);
        assert_eq!(*engine.registry().layer(&id).unwrap().style(), before);
    }

    #[test]
    fn reset_restores_a_computed_original_by_identity() {
        let mut engine = engine_with(counties());
        let id = LayerId::from("counties");
        let custom = Style::Computed(Rc::new(|_: &Feature| FeatureStyle::fallback()));
        engine.registry_mut().layer_mut(&id).unwrap().set_style(custom.clone());

        engine.apply(&config()).unwrap();
        engine.reset(&id);
        assert_eq!(*engine.registry().layer(&id).unwrap().style(), custom);
    }

    #[test]
    fn reapply_keeps_the_first_captured_original() {
        let mut engine = engine_with(counties());
        let id = LayerId::from("counties");
        let before = engine.registry().layer(&id).unwrap().style().clone();

        engine.apply(&config()).unwrap();
        let mut second = config();
        second.method = Method::Quantile;
        second.num_classes = 3;
        engine.apply(&second).unwrap();

        assert_eq!(engine.legend(&id).unwrap().classes.len(), 3);
        engine.reset(&id);
        assert_eq!(*engine.registry().layer(&id).unwrap().style(), before);
    }

    #[test]
    fn superseded_resolvers_stay_usable() {
        let mut engine = engine_with(counties());
        let id = LayerId::from("counties");

        let first = engine.apply(&config()).unwrap();
        let old_style = engine.registry().layer(&id).unwrap().style().clone();

        let mut second = config();
        second.reverse = true;
        engine.apply(&second).unwrap();

        // The old resolver still answers from its own snapshot.
        let resolved = old_style.resolve(&feat(json!({"pop": 1})));
        assert_eq!(resolved.fill.rgb, first.colors[0]);
    }

    #[test]
    fn layer_removed_drops_cached_state() {
        let mut engine = engine_with(counties());
        let id = LayerId::from("counties");
        engine.apply(&config()).unwrap();

        engine.registry_mut().remove(&id);
        engine.layer_removed(&id);
        assert!(engine.legend(&id).is_none());
        assert!(engine.active().is_none());

        // A later reset finds nothing to restore and stays quiet.
        engine.reset(&id);
    }

    #[test]
    fn custom_colors_override_the_ramp() {
        let mut engine = engine_with(counties());
        let mut cfg = config();
        cfg.num_classes = 3;
        cfg.custom_colors = Some(vec![Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)]);
        let result = engine.apply(&cfg).unwrap();
        assert_eq!(
            result.colors,
            vec![Rgb::new(0, 0, 0), Rgb::new(128, 128, 128), Rgb::new(255, 255, 255)]
        );
    }

    #[test]
    fn style_change_events_fire_on_apply_and_reset() {
        #[derive(Default)]
        struct Recorder(Rc<RefCell<Vec<String>>>);

        impl EventSink for Recorder {
            fn style_changed(&mut self, layer: &LayerId) {
                self.0.borrow_mut().push(layer.to_string());
            }
        }

        let events = Rc::new(RefCell::new(Vec::new()));
        let mut registry = MemoryRegistry::new();
        registry.insert(counties());
        let mut engine = ClassificationEngine::with_events(registry, Recorder(events.clone()));

        engine.apply(&config()).unwrap();
        engine.reset(&LayerId::from("counties"));
        assert_eq!(*events.borrow(), vec!["counties".to_string(), "counties".to_string()]);
    }
}
