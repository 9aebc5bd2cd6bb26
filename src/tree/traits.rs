use std::sync::Arc;

use crate::geometry::{Point, Rect};
use crate::model::{Alignment, Border, BoxModel, DimensionConstraint, Display, Style, Whitespace};

use super::core::{Node, NodeId, Tree};
use super::extensions::Extensions;

/// Structural navigation.
pub trait HasTree: Sized {
    fn node_id(&self) -> NodeId;
    fn parent(&self) -> Option<Self>;
    fn children(&self) -> Vec<Self>;
    fn previous_sibling(&self) -> Option<Self>;
    fn next_sibling(&self) -> Option<Self>;
    /// All earlier siblings in document order.
    fn previous_siblings(&self) -> Vec<Self>;
    /// All later siblings in document order.
    fn following_siblings(&self) -> Vec<Self>;
}

/// Resolved geometry.
pub trait HasBounds {
    fn bounds(&self) -> Rect;
    fn set_bounds(&self, bounds: Rect);
    fn inner_bounds(&self) -> Rect;
    fn absolute_position(&self) -> Option<Point>;
}

/// Sizing inputs read by the resolver.
pub trait HasConstraints {
    fn display(&self) -> Display;
    fn width_constraint(&self) -> DimensionConstraint;
    fn height_constraint(&self) -> DimensionConstraint;
    fn min_width(&self) -> i32;
    fn min_height(&self) -> i32;
    fn horizontal_space(&self) -> i32;
    fn vertical_space(&self) -> i32;
    fn border(&self) -> Option<Border>;
}

pub trait HasStyle: HasTree {
    fn style(&self) -> Style;
    fn alignment(&self) -> Alignment;
    fn whitespace(&self) -> Whitespace;

    /// Own style with unset colors taken from the nearest ancestor that
    /// sets them.
    fn computed_style(&self) -> Style {
        let mut style = self.style();
        let mut cursor = self.parent();
        while !style.is_complete() {
            let Some(ancestor) = cursor else {
                break;
            };
            style = style.inherit(ancestor.style());
            cursor = ancestor.parent();
        }
        style
    }
}

pub trait HasText {
    fn text_content(&self) -> Option<String>;
}

/// Everything the layout resolver and painter need from a node.
pub trait Plottable: HasTree + HasBounds + HasConstraints + HasStyle + HasText {}

impl<T> Plottable for T where T: HasTree + HasBounds + HasConstraints + HasStyle + HasText {}

/// Borrowed handle to one node of a [`Tree`].
#[derive(Clone)]
pub struct NodeRef<'t> {
    tree: &'t Tree,
    id: NodeId,
    node: Arc<Node>,
}

impl<'t> NodeRef<'t> {
    pub(crate) fn new(tree: &'t Tree, id: NodeId, node: Arc<Node>) -> Self {
        Self { tree, id, node }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn tree(&self) -> &'t Tree {
        self.tree
    }

    /// Snapshot of the box model.
    pub fn model(&self) -> BoxModel {
        self.node.model().clone()
    }

    pub fn extensions(&self) -> &Extensions {
        self.node.extensions()
    }

    fn wrap(&self, id: Option<NodeId>) -> Option<NodeRef<'t>> {
        id.and_then(|id| self.tree.node(id))
    }

    fn wrap_all(&self, ids: Vec<NodeId>) -> Vec<NodeRef<'t>> {
        ids.into_iter().filter_map(|id| self.tree.node(id)).collect()
    }
}

impl std::fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeRef").field("id", &self.id).finish()
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl HasTree for NodeRef<'_> {
    fn node_id(&self) -> NodeId {
        self.id
    }

    fn parent(&self) -> Option<Self> {
        self.wrap(self.tree.parent(self.id))
    }

    fn children(&self) -> Vec<Self> {
        self.wrap_all(self.tree.children(self.id))
    }

    fn previous_sibling(&self) -> Option<Self> {
        self.wrap(self.tree.previous_sibling(self.id))
    }

    fn next_sibling(&self) -> Option<Self> {
        self.wrap(self.tree.next_sibling(self.id))
    }

    fn previous_siblings(&self) -> Vec<Self> {
        self.wrap_all(self.tree.previous_siblings(self.id))
    }

    fn following_siblings(&self) -> Vec<Self> {
        self.wrap_all(self.tree.following_siblings(self.id))
    }
}

impl HasBounds for NodeRef<'_> {
    fn bounds(&self) -> Rect {
        self.node.model().bounds
    }

    fn set_bounds(&self, bounds: Rect) {
        self.node.model_mut().bounds = bounds;
    }

    fn inner_bounds(&self) -> Rect {
        self.node.model().inner_bounds()
    }

    fn absolute_position(&self) -> Option<Point> {
        self.node.model().absolute_position
    }
}

impl HasConstraints for NodeRef<'_> {
    fn display(&self) -> Display {
        self.node.model().display
    }

    fn width_constraint(&self) -> DimensionConstraint {
        self.node.model().width.normalized()
    }

    fn height_constraint(&self) -> DimensionConstraint {
        self.node.model().height.normalized()
    }

    fn min_width(&self) -> i32 {
        self.node.model().min_width
    }

    fn min_height(&self) -> i32 {
        self.node.model().min_height
    }

    fn horizontal_space(&self) -> i32 {
        self.node.model().horizontal_space()
    }

    fn vertical_space(&self) -> i32 {
        self.node.model().vertical_space()
    }

    fn border(&self) -> Option<Border> {
        self.node.model().border.clone()
    }
}

impl HasStyle for NodeRef<'_> {
    fn style(&self) -> Style {
        self.node.model().style
    }

    fn alignment(&self) -> Alignment {
        self.node.model().alignment
    }

    fn whitespace(&self) -> Whitespace {
        self.node.model().whitespace
    }
}

impl HasText for NodeRef<'_> {
    fn text_content(&self) -> Option<String> {
        self.node.model().text_content().map(str::to_string)
    }
}
