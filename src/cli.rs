use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueHint};

use crate::classify::Method;

/// Choropleth styling CLI (argument schema only)
#[derive(Parser, Debug)]
#[command(name = "choroplex", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List attributes of a feature collection usable for classification
    Attributes(AttributesArgs),

    /// List built-in color ramps
    Ramps,

    /// Classify a feature collection and print the legend
    Classify(ClassifyArgs),
}

#[derive(Args, Debug)]
pub struct AttributesArgs {
    /// Input GeoJSON FeatureCollection
    #[arg(value_hint = ValueHint::FilePath)]
    pub input: PathBuf,
}

#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Input GeoJSON FeatureCollection
    #[arg(value_hint = ValueHint::FilePath)]
    pub input: PathBuf,

    /// Attribute to classify
    #[arg(short, long)]
    pub attribute: String,

    /// Classification method
    #[arg(short, long, value_enum, default_value_t = Method::EqualInterval)]
    pub method: Method,

    /// Number of classes
    #[arg(short = 'n', long, default_value_t = 5)]
    pub classes: usize,

    /// Named color ramp
    #[arg(short, long, default_value = "blues")]
    pub ramp: String,

    /// Give the highest class the lowest class's color
    #[arg(long)]
    pub reverse: bool,

    /// Custom stop colors (hex); two or more override the ramp
    #[arg(long = "color", value_name = "HEX")]
    pub colors: Vec<String>,
}
