use std::collections::HashMap;
use std::sync::OnceLock;

// Kognic class names and their OpenLABEL object types
pub const CLASS_MAP: &[(&str, &str)] = &[
    ("Vehicle", "Vehicle"),
    ("Animal", "Animal"),
    ("LicensePlate", "LicensePlate"),
];

/// Object type used when a class is missing or not in `CLASS_MAP`
pub const UNKNOWN_TYPE: &str = "Unknown";

/// Stream every converted bounding box is attached to
pub const STREAM_DEFAULT: &str = "CAM";

/// Geometry kind the converter understands
pub const EXTREME_POINT_BOX: &str = "ExtremePointBox";

// Property keys
pub const ALL_PROPERTIES_KEY: &str = "@all";
pub const FRAME_KEY: &str = "@timestamp";
pub const UNCLEAR_KEY: &str = "Unclear";
pub const OBJECT_TYPE_KEY: &str = "ObjectType";

/// Frame key used when a feature carries no timestamp
pub const DEFAULT_FRAME: &str = "0";

pub const BBOX_NAME_PREFIX: &str = "bbox-";

static CLASS_MAP_LOOKUP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

fn class_map_lookup() -> &'static HashMap<&'static str, &'static str> {
    CLASS_MAP_LOOKUP.get_or_init(|| CLASS_MAP.iter().copied().collect())
}

/// Translate a Kognic class into an OpenLABEL object type
pub fn map_class(class: Option<&str>) -> &'static str {
    class
        .and_then(|class| class_map_lookup().get(class).copied())
        .unwrap_or(UNKNOWN_TYPE)
}

/// Name of the bounding box for an object: `bbox-` plus the id up to its first `-`
pub fn bbox_name(object_id: &str) -> String {
    let prefix = object_id.split('-').next().unwrap_or_default();
    format!("{}{}", BBOX_NAME_PREFIX, prefix)
}
