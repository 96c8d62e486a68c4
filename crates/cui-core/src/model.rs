//! Element tree: the document model the editor mutates.
//!
//! Elements live in a `StableDiGraph` owned by [`Canvas`]; edges run
//! parent → child and carry a monotonic insertion counter, so sibling
//! order is stable and reparenting appends at the end of the new parent's
//! children. All parent lookups go through the graph — elements hold no
//! back-pointers.

use crate::anchors::RectTransform;
use crate::components::{ButtonComponent, ImageComponent, TextComponent};
use crate::geometry::Rect;
use crate::id::ElementId;
use petgraph::Direction;
use petgraph::graph::NodeIndex;
use petgraph::stable_graph::StableDiGraph;
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// What kind of CUI element a node is. The kind decides which component
/// slots are populated and which C# container type the emitter produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElementKind {
    #[serde(rename = "CuiPanel")]
    Panel,
    #[serde(rename = "CuiButton")]
    Button,
    #[serde(rename = "CuiLabel")]
    Label,
    /// The canvas surface itself. Never serialized, emitted, or hit-tested.
    Root,
}

impl ElementKind {
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::Panel => "CuiPanel",
            Self::Button => "CuiButton",
            Self::Label => "CuiLabel",
            Self::Root => "Root",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// A single element: one transform, plus the component slots its kind
/// uses.
#[derive(Debug, Clone)]
pub struct Element {
    pub id: ElementId,
    pub kind: ElementKind,
    pub visible: bool,
    pub transform: RectTransform,
    pub image: Option<ImageComponent>,
    pub text: Option<TextComponent>,
    pub button: Option<ButtonComponent>,
}

impl Element {
    /// Create an element of `kind` with a fresh id, the editor's default
    /// placement, and the kind's component slots populated with defaults.
    pub fn new(kind: ElementKind) -> Self {
        Self::with_id(kind, ElementId::next())
    }

    /// Create an element with a caller-supplied id (the persistence
    /// loader's path).
    pub fn with_id(kind: ElementKind, id: ElementId) -> Self {
        let mut element = Self {
            id,
            kind,
            visible: true,
            transform: RectTransform::default(),
            image: None,
            text: None,
            button: None,
        };
        match kind {
            ElementKind::Panel => element.image = Some(ImageComponent::default()),
            ElementKind::Button => {
                element.button = Some(ButtonComponent::default());
                element.text = Some(TextComponent::default());
            }
            ElementKind::Label => element.text = Some(TextComponent::default()),
            ElementKind::Root => {}
        }
        element
    }
}

/// The document tree plus the fixed pixel size of the editing surface.
///
/// The root node represents the canvas; it supplies the base rectangle
/// `(0, 0, width, height)` every anchor chain ultimately resolves against.
pub struct Canvas {
    pub graph: StableDiGraph<Element, u64>,
    pub root: NodeIndex,
    pub width: f32,
    pub height: f32,
    id_index: HashMap<ElementId, NodeIndex>,
    next_order: u64,
}

impl Canvas {
    pub fn new(width: f32, height: f32) -> Self {
        let mut graph = StableDiGraph::new();
        let root_element = Element::new(ElementKind::Root);
        let root_id = root_element.id;
        let root = graph.add_node(root_element);

        Self {
            graph,
            root,
            width,
            height,
            id_index: HashMap::from([(root_id, root)]),
            next_order: 0,
        }
    }

    /// Add an element as the last child of `parent`. Returns the new
    /// element's index.
    pub fn add_element(&mut self, parent: NodeIndex, element: Element) -> NodeIndex {
        let id = element.id;
        let idx = self.graph.add_node(element);
        let order = self.next_order;
        self.next_order += 1;
        self.graph.add_edge(parent, idx, order);
        self.id_index.insert(id, idx);
        idx
    }

    /// Look up an element by id. Exact for present ids, `None` for absent.
    pub fn get_by_id(&self, id: ElementId) -> Option<NodeIndex> {
        self.id_index.get(&id).copied()
    }

    /// The parent index of an element, or `None` for the root and for
    /// detached elements.
    pub fn parent(&self, idx: NodeIndex) -> Option<NodeIndex> {
        self.graph.neighbors_directed(idx, Direction::Incoming).next()
    }

    /// Children in insertion order. Later children sit on top for hit
    /// testing and paint.
    pub fn children(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        let mut children: Vec<(u64, NodeIndex)> = self
            .graph
            .edges(idx)
            .map(|edge| (*edge.weight(), edge.target()))
            .collect();
        children.sort_by_key(|(order, _)| *order);
        children.into_iter().map(|(_, child)| child).collect()
    }

    /// True when `ancestor` lies on `descendant`'s parent chain.
    pub fn is_ancestor_of(&self, ancestor: NodeIndex, descendant: NodeIndex) -> bool {
        if ancestor == descendant {
            return false;
        }
        let mut current = descendant;
        while let Some(parent) = self.parent(current) {
            if parent == ancestor {
                return true;
            }
            current = parent;
        }
        false
    }

    /// Move `child` under `new_parent`, appended after its existing
    /// children. Atomic: the element is never in two child lists.
    ///
    /// The child's transform is left untouched: anchors are not
    /// renormalized against the new parent, so the element may
    /// visually jump. Returns `false` (and does nothing) when the move
    /// would create a cycle or reparent the root.
    pub fn reparent(&mut self, child: NodeIndex, new_parent: NodeIndex) -> bool {
        if child == self.root || child == new_parent || self.is_ancestor_of(child, new_parent) {
            return false;
        }
        if let Some(old_parent) = self.parent(child)
            && let Some(edge) = self.graph.find_edge(old_parent, child)
        {
            self.graph.remove_edge(edge);
        }
        let order = self.next_order;
        self.next_order += 1;
        self.graph.add_edge(new_parent, child, order);
        true
    }

    /// Detach `child` from its parent without removing it from the
    /// document. A detached element resolves against a zero parent
    /// rectangle until it is reattached.
    pub fn detach(&mut self, child: NodeIndex) {
        if let Some(parent) = self.parent(child)
            && let Some(edge) = self.graph.find_edge(parent, child)
        {
            self.graph.remove_edge(edge);
        }
    }

    /// Delete an element and its whole subtree, keeping the id index in
    /// sync. Deleting the root is refused.
    pub fn remove_subtree(&mut self, idx: NodeIndex) {
        if idx == self.root {
            return;
        }
        let mut doomed = Vec::new();
        self.for_each_post_order(idx, &mut |node| doomed.push(node));
        for node in doomed {
            if let Some(removed) = self.graph.remove_node(node) {
                self.id_index.remove(&removed.id);
            }
        }
    }

    /// Depth-first traversal of the subtree at `idx`, children before
    /// self, self included.
    pub fn for_each_post_order<F: FnMut(NodeIndex)>(&self, idx: NodeIndex, visit: &mut F) {
        for child in self.children(idx) {
            self.for_each_post_order(child, visit);
        }
        visit(idx);
    }

    /// The resolved rectangle of an element's parent. Zero for the root
    /// and for detached elements.
    pub fn parent_rect(&self, idx: NodeIndex) -> Rect {
        if idx == self.root {
            return Rect::ZERO;
        }
        match self.parent(idx) {
            Some(parent) => self.resolved_rect(parent),
            None => Rect::ZERO,
        }
    }

    /// The absolute rectangle of an element, resolved recursively up the
    /// parent chain. Pure: repeated calls on an unchanged tree return
    /// identical results.
    pub fn resolved_rect(&self, idx: NodeIndex) -> Rect {
        if idx == self.root {
            return Rect::new(0.0, 0.0, self.width, self.height);
        }
        self.graph[idx].transform.resolve(self.parent_rect(idx))
    }
}

impl Default for Canvas {
    /// A fresh document at the editor's standard surface size.
    fn default() -> Self {
        Self::new(1282.0, 722.0)
    }
}
