//! OpenLABEL format data structures
//!
//! A reduced OpenLABEL document: object definitions plus per-frame bounding
//! boxes and object attributes. Maps keep insertion order so the serialized
//! document is stable between runs.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::mapping::{bbox_name, DEFAULT_FRAME, STREAM_DEFAULT};

/// Bounding box in center/width/height form, `val = [cx, cy, w, h]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BBox {
    pub name: String,
    pub stream: String,
    pub val: [f64; 4],
}

impl BBox {
    /// Box for an object on the default camera stream
    pub fn for_object(object_id: &str, val: [f64; 4]) -> Self {
        Self {
            name: bbox_name(object_id),
            stream: STREAM_DEFAULT.to_string(),
            val,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BooleanEntry {
    pub name: String,
    pub val: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextEntry {
    pub name: String,
    pub val: String,
}

/// Per-frame data of one object. Attribute lists that would be empty are omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bbox: Option<Vec<BBox>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boolean: Option<Vec<BooleanEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<Vec<TextEntry>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameObject {
    pub object_data: ObjectData,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub objects: IndexMap<String, FrameObject>,
}

/// Object definition shared by all frames
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectDef {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl ObjectDef {
    pub fn new(id: &str, kind: &str) -> Self {
        Self {
            name: id.to_string(),
            kind: kind.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OpenLabel {
    pub objects: IndexMap<String, ObjectDef>,
    pub frames: IndexMap<String, Frame>,
}

impl OpenLabel {
    /// Document with no objects and the single empty default frame
    pub fn empty() -> Self {
        let mut frames = IndexMap::new();
        frames.insert(DEFAULT_FRAME.to_string(), Frame::default());
        Self {
            objects: IndexMap::new(),
            frames,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenLabelData {
    pub openlabel: OpenLabel,
}

/// Complete OpenLABEL document, `{"data": {"openlabel": ...}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenLabelRoot {
    pub data: OpenLabelData,
}

impl OpenLabelRoot {
    pub fn new(openlabel: OpenLabel) -> Self {
        Self {
            data: OpenLabelData { openlabel },
        }
    }
}
