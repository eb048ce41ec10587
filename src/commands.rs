use anyhow::{Result, anyhow};

use crate::cli::{AttributesArgs, ClassifyArgs, Cli};
use crate::color::{NamedRamp, Rgb};
use crate::engine::{ClassificationConfig, ClassificationEngine};
use crate::io::read_feature_collection;
use crate::layer::{Layer, LayerId, MemoryRegistry};
use crate::legend::legend_data;

pub fn attributes(_cli: &Cli, args: &AttributesArgs) -> Result<()> {
    let features = read_feature_collection(&args.input)?;
    for name in crate::classify::numeric_attributes(&features) {
        println!("{name}");
    }
    Ok(())
}

pub fn ramps(_cli: &Cli) -> Result<()> {
    for ramp in NamedRamp::ALL {
        let swatch: Vec<String> = ramp.colors().iter().map(Rgb::to_hex).collect();
        println!("{:<10} {}", ramp.name(), swatch.join(" "));
    }
    Ok(())
}

pub fn classify(_cli: &Cli, args: &ClassifyArgs) -> Result<()> {
    let features = read_feature_collection(&args.input)?;

    let name = args
        .input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "layer".to_string());
    let layer_id = LayerId::from(name.as_str());

    let mut registry = MemoryRegistry::new();
    registry.insert(Layer::new(layer_id.clone(), name, features));
    let mut engine = ClassificationEngine::new(registry);

    let ramp = NamedRamp::from_name(&args.ramp)
        .ok_or_else(|| anyhow!("Unknown ramp {:?} (try `choroplex ramps`)", args.ramp))?;
    let custom_colors = if args.colors.is_empty() {
        None
    } else {
        Some(args.colors.iter().map(|c| Rgb::from_hex(c)).collect::<Result<Vec<_>>>()?)
    };

    let config = ClassificationConfig {
        layer: layer_id.clone(),
        attribute: args.attribute.clone(),
        method: args.method,
        num_classes: args.classes,
        ramp,
        reverse: args.reverse,
        custom_colors,
    };

    let result = engine
        .apply(&config)
        .ok_or_else(|| anyhow!("No numeric values for attribute {:?}", args.attribute))?;

    println!("{} classes over {:?} ({})", result.colors.len(), args.attribute, args.method.label());
    for entry in legend_data(&result.breaks, &result.colors) {
        println!("  {}  {}", entry.color, entry.label());
    }
    Ok(())
}
