use indexmap::IndexMap;
use log::{debug, warn};
use serde_json::Value;

use crate::error::ConvertError;
use crate::kognic::{ExtremeCoordinates, Feature, KognicAnnotation, PropertyBundle};
use crate::mapping::{
    map_class, DEFAULT_FRAME, EXTREME_POINT_BOX, FRAME_KEY, OBJECT_TYPE_KEY, UNCLEAR_KEY,
    UNKNOWN_TYPE,
};
use crate::openlabel::{
    BBox, BooleanEntry, Frame, FrameObject, ObjectData, ObjectDef, OpenLabel, OpenLabelRoot,
    TextEntry,
};

/// Convert an untyped Kognic record into an untyped OpenLABEL document
pub fn convert(kognic: &Value) -> Result<Value, ConvertError> {
    let annotation = KognicAnnotation::from_value(kognic)?;
    let root = convert_annotation(&annotation)?;
    serde_json::to_value(&root).map_err(|e| ConvertError::Validation(e.to_string()))
}

/// Convert a decoded Kognic annotation into an OpenLABEL document
pub fn convert_annotation(annotation: &KognicAnnotation) -> Result<OpenLabelRoot, ConvertError> {
    let mut objects = build_object_defs(annotation);
    let mut frames: IndexMap<String, Frame> = IndexMap::new();

    for feature in annotation.features() {
        let object_id = feature.id.as_str();
        if !objects.contains_key(object_id) {
            warn!(
                "Object {} has no shape properties, typing it as {}",
                object_id, UNKNOWN_TYPE
            );
            objects.insert(feature.id.clone(), ObjectDef::new(object_id, UNKNOWN_TYPE));
        }

        if feature.geometry.kind != EXTREME_POINT_BOX {
            return Err(ConvertError::UnsupportedGeometry {
                id: feature.id.clone(),
                kind: feature.geometry.kind.clone(),
            });
        }

        let (cx, cy, w, h) = extreme_box_to_cxcywh(&feature.geometry.coordinates);
        if ![cx, cy, w, h].iter().all(|v| v.is_finite()) {
            return Err(ConvertError::Validation(format!(
                "bounding box of object {} is not finite: [{}, {}, {}, {}]",
                object_id, cx, cy, w, h
            )));
        }
        let object_data = build_object_data(
            BBox::for_object(object_id, [cx, cy, w, h]),
            annotation.properties_of(object_id),
        );

        let timestamp = frame_key(feature);
        let frame = frames.entry(timestamp).or_default();
        let previous = frame
            .objects
            .insert(feature.id.clone(), FrameObject { object_data });
        if previous.is_some() {
            warn!(
                "Object {} appears more than once in a frame, keeping the last one",
                object_id
            );
        }
    }

    debug!(
        "Converted {} features into {} objects across {} frames",
        annotation.features().len(),
        objects.len(),
        frames.len()
    );

    let openlabel = if frames.is_empty() {
        OpenLabel {
            objects,
            ..OpenLabel::empty()
        }
    } else {
        OpenLabel { objects, frames }
    };

    Ok(OpenLabelRoot::new(openlabel))
}

/// Convert extreme points into `(center_x, center_y, width, height)`.
///
/// Width and height are not checked for sign: inverted extremes yield
/// negative sizes.
pub fn extreme_box_to_cxcywh(coords: &ExtremeCoordinates) -> (f64, f64, f64, f64) {
    let min_x = coords.min_x.x();
    let max_x = coords.max_x.x();
    let min_y = coords.min_y.y();
    let max_y = coords.max_y.y();

    let width = max_x - min_x;
    let height = max_y - min_y;
    let center_x = min_x + width / 2.0;
    let center_y = min_y + height / 2.0;

    (center_x, center_y, width, height)
}

/// One object definition per id in `shapeProperties`, in source order
fn build_object_defs(annotation: &KognicAnnotation) -> IndexMap<String, ObjectDef> {
    annotation
        .shape_properties
        .keys()
        .map(|object_id| {
            let class = annotation
                .properties_of(object_id)
                .and_then(|bundle| bundle.class.as_deref());
            (object_id.clone(), ObjectDef::new(object_id, map_class(class)))
        })
        .collect()
}

fn build_object_data(bbox: BBox, properties: Option<&PropertyBundle>) -> ObjectData {
    let boolean = properties.and_then(|p| p.unclear).map(|unclear| {
        vec![BooleanEntry {
            name: UNCLEAR_KEY.to_string(),
            val: unclear,
        }]
    });
    let text = properties
        .and_then(|p| p.object_type.as_ref())
        .map(|object_type| {
            vec![TextEntry {
                name: OBJECT_TYPE_KEY.to_string(),
                val: object_type.clone(),
            }]
        });

    ObjectData {
        bbox: Some(vec![bbox]),
        boolean,
        text,
    }
}

/// Frame key of a feature: its `@timestamp` property as text, `"0"` if missing.
///
/// Non-string values use their JSON text, so `true` becomes `"true"`.
fn frame_key(feature: &Feature) -> String {
    match feature.properties.get(FRAME_KEY) {
        None | Some(Value::Null) => DEFAULT_FRAME.to_string(),
        Some(Value::String(timestamp)) => timestamp.clone(),
        Some(other) => other.to_string(),
    }
}
