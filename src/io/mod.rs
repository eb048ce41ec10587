mod geojson;

pub use geojson::{parse_feature_collection, read_feature_collection};
