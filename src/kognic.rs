//! Kognic annotation data structures
//!
//! This module models the simplified Kognic export consumed by the converter.
//! Decoding is permissive: unknown top-level fields are ignored so that newer
//! exports keep converting, while the fields the converter relies on are
//! required and strictly typed.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ConvertError;
use crate::mapping::ALL_PROPERTIES_KEY;

/// One extreme point of an `ExtremePointBox`, stored as `[x, y]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExtremePoint {
    pub coordinates: [f64; 2],
}

impl ExtremePoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            coordinates: [x, y],
        }
    }

    pub fn x(&self) -> f64 {
        self.coordinates[0]
    }

    pub fn y(&self) -> f64 {
        self.coordinates[1]
    }
}

/// The four extreme points of an object.
///
/// `minX`/`maxX` carry the horizontal extremes (their y is the height at which
/// the extreme was hit), `minY`/`maxY` carry the vertical extremes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtremeCoordinates {
    pub max_x: ExtremePoint,
    pub max_y: ExtremePoint,
    pub min_x: ExtremePoint,
    pub min_y: ExtremePoint,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: ExtremeCoordinates,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub id: String,
    #[serde(rename = "type", default = "default_feature_type")]
    pub kind: String,
    pub geometry: Geometry,
    #[serde(default)]
    pub properties: IndexMap<String, Value>,
}

fn default_feature_type() -> String {
    "Feature".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type", default = "default_collection_type")]
    pub kind: String,
    pub features: Vec<Feature>,
}

fn default_collection_type() -> String {
    "FeatureCollection".to_string()
}

/// Shapes grouped by sensor stream; only the camera stream is converted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shapes {
    #[serde(rename = "CAM")]
    pub cam: FeatureCollection,
}

/// Per-object properties that apply to every frame
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyBundle {
    #[serde(rename = "class", default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(rename = "Unclear", default, skip_serializing_if = "Option::is_none")]
    pub unclear: Option<bool>,
    #[serde(rename = "ObjectType", default, skip_serializing_if = "Option::is_none")]
    pub object_type: Option<String>,
}

// The root of a Kognic annotation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KognicAnnotation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certainty: Option<String>,
    pub shape_properties: IndexMap<String, IndexMap<String, PropertyBundle>>,
    pub shapes: Shapes,
}

impl KognicAnnotation {
    /// Decode an untyped JSON record, rejecting anything the converter can't use
    pub fn from_value(value: &Value) -> Result<Self, ConvertError> {
        Self::deserialize(value).map_err(|e| ConvertError::Validation(e.to_string()))
    }

    /// The `@all` property bundle of an object, if it declared one
    pub fn properties_of(&self, object_id: &str) -> Option<&PropertyBundle> {
        self.shape_properties
            .get(object_id)
            .and_then(|scopes| scopes.get(ALL_PROPERTIES_KEY))
    }

    pub fn features(&self) -> &[Feature] {
        &self.shapes.cam.features
    }
}
