//! Flat-record project persistence.
//!
//! A document serializes to a flat list of elements in pre-order (parents
//! precede their children), each carrying its kind, its id, its parent id
//! (`"Overlay"` for canvas children), and its components with wire-form
//! vector and color values. Loading rebuilds the tree by relinking each
//! element to its recorded parent; an element whose parent id is unknown
//! stays on the canvas root.

use crate::anchors::RectTransform;
use crate::components::{ButtonComponent, ImageComponent, TextComponent};
use crate::emitter::ROOT_LAYER;
use crate::id::ElementId;
use crate::model::{Canvas, Element, ElementKind};
use crate::wire;
use petgraph::graph::NodeIndex;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// The transform's wire form: four space-separated vector strings under
/// the CUI field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformRecord {
    pub anchormin: String,
    pub anchormax: String,
    pub offsetmin: String,
    pub offsetmax: String,
}

impl From<&RectTransform> for TransformRecord {
    fn from(transform: &RectTransform) -> Self {
        Self {
            anchormin: wire::format_vec2(transform.anchor_min),
            anchormax: wire::format_vec2(transform.anchor_max),
            offsetmin: wire::format_vec2(transform.offset_min),
            offsetmax: wire::format_vec2(transform.offset_max),
        }
    }
}

impl TransformRecord {
    fn parse(&self) -> Result<RectTransform, String> {
        Ok(RectTransform::new(
            wire::parse_vec2(&self.anchormin)?,
            wire::parse_vec2(&self.anchormax)?,
            wire::parse_vec2(&self.offsetmin)?,
            wire::parse_vec2(&self.offsetmax)?,
        ))
    }
}

/// One serialized component, tagged with its CUI type name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ComponentRecord {
    #[serde(rename = "RectTransform")]
    RectTransform(TransformRecord),
    #[serde(rename = "UnityEngine.UI.Text")]
    Text(TextComponent),
    #[serde(rename = "UnityEngine.UI.Image")]
    Image(ImageComponent),
    #[serde(rename = "UnityEngine.UI.Button")]
    Button(ButtonComponent),
}

/// One serialized element of the flat list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementRecord {
    #[serde(rename = "type")]
    pub kind: ElementKind,
    /// The element id, as the decimal wire string.
    pub name: String,
    /// Parent id, or [`ROOT_LAYER`] for canvas children.
    pub parent: String,
    pub components: SmallVec<[ComponentRecord; 3]>,
}

/// A whole saved project: document size plus the flat element list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub name: String,
    pub width: f32,
    pub height: f32,
    pub elements: Vec<ElementRecord>,
}

/// Flatten the tree into records, pre-order.
pub fn to_records(canvas: &Canvas) -> Vec<ElementRecord> {
    let mut records = Vec::new();
    for child in canvas.children(canvas.root) {
        collect_records(canvas, child, &mut records);
    }
    records
}

fn collect_records(canvas: &Canvas, idx: NodeIndex, records: &mut Vec<ElementRecord>) {
    let element = &canvas.graph[idx];
    let parent = match canvas.parent(idx) {
        Some(parent) if parent != canvas.root => canvas.graph[parent].id.to_string(),
        _ => ROOT_LAYER.to_string(),
    };

    let mut components: SmallVec<[ComponentRecord; 3]> = SmallVec::new();
    components.push(ComponentRecord::RectTransform(TransformRecord::from(
        &element.transform,
    )));
    if let Some(image) = &element.image {
        components.push(ComponentRecord::Image(image.clone()));
    }
    if let Some(button) = &element.button {
        components.push(ComponentRecord::Button(button.clone()));
    }
    if let Some(text) = &element.text {
        components.push(ComponentRecord::Text(text.clone()));
    }

    records.push(ElementRecord {
        kind: element.kind,
        name: element.id.to_string(),
        parent,
        components,
    });

    for child in canvas.children(idx) {
        collect_records(canvas, child, records);
    }
}

/// Rebuild a canvas from records.
///
/// Elements are created on the root first, then relinked to their
/// recorded parent. Records always relink to elements created earlier, so
/// no cycle can form. A parent id that never appears leaves the element
/// on the root (logged, not an error); malformed ids or wire strings are
/// errors.
pub fn from_records(
    width: f32,
    height: f32,
    records: &[ElementRecord],
) -> Result<Canvas, String> {
    let mut canvas = Canvas::new(width, height);

    for record in records {
        let id: ElementId = record
            .name
            .parse()
            .map_err(|e| format!("bad element id \"{}\": {e}", record.name))?;
        ElementId::reserve(id.raw());

        let mut element = Element::with_id(record.kind, id);
        for component in &record.components {
            match component {
                ComponentRecord::RectTransform(transform) => {
                    element.transform = transform.parse()?;
                }
                ComponentRecord::Text(text) => element.text = Some(text.clone()),
                ComponentRecord::Image(image) => element.image = Some(image.clone()),
                ComponentRecord::Button(button) => element.button = Some(button.clone()),
            }
        }

        let idx = canvas.add_element(canvas.root, element);
        if record.parent != ROOT_LAYER {
            let parent_idx = record
                .parent
                .parse::<ElementId>()
                .ok()
                .and_then(|parent_id| canvas.get_by_id(parent_id));
            match parent_idx {
                Some(parent_idx) => {
                    canvas.reparent(idx, parent_idx);
                }
                None => log::warn!(
                    "element {id} refers to missing parent \"{}\"; kept on the canvas root",
                    record.parent
                ),
            }
        }
    }

    Ok(canvas)
}

/// Serialize a project to JSON.
pub fn to_json(name: &str, canvas: &Canvas) -> Result<String, String> {
    let record = ProjectRecord {
        name: name.to_string(),
        width: canvas.width,
        height: canvas.height,
        elements: to_records(canvas),
    };
    serde_json::to_string_pretty(&record).map_err(|e| format!("serialize failed: {e}"))
}

/// Load a project from JSON. Returns the project name and the rebuilt
/// canvas.
pub fn from_json(json: &str) -> Result<(String, Canvas), String> {
    let record: ProjectRecord =
        serde_json::from_str(json).map_err(|e| format!("parse failed: {e}"))?;
    let canvas = from_records(record.width, record.height, &record.elements)?;
    Ok((record.name, canvas))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Vec2;

    #[test]
    fn records_are_preorder_with_parent_names() {
        let mut canvas = Canvas::new(1282.0, 722.0);
        let root = canvas.root;
        let panel = canvas.add_element(root, Element::new(ElementKind::Panel));
        canvas.add_element(panel, Element::new(ElementKind::Label));
        canvas.add_element(root, Element::new(ElementKind::Button));

        let records = to_records(&canvas);
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].parent, ROOT_LAYER);
        assert_eq!(records[1].parent, records[0].name);
        assert_eq!(records[2].parent, ROOT_LAYER);
        assert_eq!(records[0].kind, ElementKind::Panel);
        assert_eq!(records[1].kind, ElementKind::Label);
    }

    #[test]
    fn transform_record_roundtrip() {
        let transform = RectTransform::new(
            Vec2::new(0.1, 0.1),
            Vec2::new(0.2, 0.2),
            Vec2::new(43.6, 55.6),
            Vec2::new(-10.0, -10.0),
        );
        let record = TransformRecord::from(&transform);
        assert_eq!(record.offsetmin, "43.6 55.6");
        assert_eq!(record.parse().unwrap(), transform);
    }

    #[test]
    fn missing_parent_keeps_element_on_root() {
        let records = vec![ElementRecord {
            kind: ElementKind::Label,
            name: "17".into(),
            parent: "9999".into(),
            components: SmallVec::new(),
        }];
        let canvas = from_records(800.0, 600.0, &records).unwrap();
        let idx = canvas.get_by_id(ElementId::from_raw(17)).unwrap();
        assert_eq!(canvas.parent(idx), Some(canvas.root));
    }

    #[test]
    fn malformed_vector_string_is_an_error() {
        let records = vec![ElementRecord {
            kind: ElementKind::Panel,
            name: "1".into(),
            parent: ROOT_LAYER.into(),
            components: SmallVec::from_vec(vec![ComponentRecord::RectTransform(
                TransformRecord {
                    anchormin: "zero zero".into(),
                    anchormax: "1 1".into(),
                    offsetmin: "0 0".into(),
                    offsetmax: "0 0".into(),
                },
            )]),
        }];
        assert!(from_records(800.0, 600.0, &records).is_err());
    }

    #[test]
    fn component_record_tags_match_cui_type_names() {
        let json =
            serde_json::to_string(&ComponentRecord::Text(TextComponent::default())).unwrap();
        assert!(json.contains("\"type\":\"UnityEngine.UI.Text\""));
    }
}
