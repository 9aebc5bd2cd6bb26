use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard, TryLockError};

use crate::error::{LayoutError, Result};
use crate::geometry::Rect;
use crate::model::BoxModel;

use super::extensions::Extensions;
use super::traits::NodeRef;

/// Stable handle to a node inside a [`Tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Default)]
struct Links {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    index: usize,
}

#[derive(Debug, Default)]
pub(crate) struct Node {
    links: RwLock<Links>,
    model: RwLock<BoxModel>,
    extensions: Extensions,
}

impl Node {
    pub(crate) fn model(&self) -> RwLockReadGuard<'_, BoxModel> {
        read(&self.model)
    }

    pub(crate) fn model_mut(&self) -> RwLockWriteGuard<'_, BoxModel> {
        write(&self.model)
    }

    pub(crate) fn extensions(&self) -> &Extensions {
        &self.extensions
    }
}

// Guarded data is plain geometry and ids, so a poisoned lock is still usable.
fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

/// `None` only when another thread holds the lock.
fn try_read<T>(lock: &RwLock<T>) -> Option<RwLockReadGuard<'_, T>> {
    match lock.try_read() {
        Ok(guard) => Some(guard),
        Err(TryLockError::Poisoned(poisoned)) => Some(poisoned.into_inner()),
        Err(TryLockError::WouldBlock) => None,
    }
}

fn try_write<T>(lock: &RwLock<T>) -> Option<RwLockWriteGuard<'_, T>> {
    match lock.try_write() {
        Ok(guard) => Some(guard),
        Err(TryLockError::Poisoned(poisoned)) => Some(poisoned.into_inner()),
        Err(TryLockError::WouldBlock) => None,
    }
}

/// Owner of every node. Shareable across threads behind an `Arc`.
#[derive(Debug, Default)]
pub struct Tree {
    nodes: RwLock<Vec<Arc<Node>>>,
}

impl Tree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a detached node.
    pub fn create(&self, model: BoxModel) -> NodeId {
        let node = Node {
            model: RwLock::new(model),
            ..Node::default()
        };
        let mut nodes = write(&self.nodes);
        nodes.push(Arc::new(node));
        NodeId(nodes.len() - 1)
    }

    /// Allocate a node and append it under `parent`.
    pub fn add_child(&self, parent: NodeId, model: BoxModel) -> Result<NodeId> {
        self.slot(parent).ok_or(LayoutError::NodeNotFound(parent))?;
        let child = self.create(model);
        self.append_child(parent, child)?;
        Ok(child)
    }

    pub fn len(&self) -> usize {
        read(&self.nodes).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, id: NodeId) -> bool {
        id.0 < self.len()
    }

    /// Capability handle for `id`.
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_>> {
        self.slot(id).map(|node| NodeRef::new(self, id, node))
    }

    pub(crate) fn slot(&self, id: NodeId) -> Option<Arc<Node>> {
        read(&self.nodes).get(id.0).cloned()
    }

    /// Append `child` as the last child of `parent`.
    ///
    /// The parent is locked first, then the child. Only the parent lock is
    /// waited on; the child and the ancestor walk use `try_` locks, and the
    /// attempt starts over if another writer holds one of them. The cycle
    /// check runs while both locks are held, so two concurrent appends in
    /// opposite directions cannot both succeed.
    pub fn append_child(&self, parent: NodeId, child: NodeId) -> Result<()> {
        let parent_node = self.slot(parent).ok_or(LayoutError::NodeNotFound(parent))?;
        let child_node = self.slot(child).ok_or(LayoutError::NodeNotFound(child))?;
        if parent == child {
            return Err(LayoutError::Cycle { parent, child });
        }

        loop {
            if self.try_attach(parent, &parent_node, child, &child_node)? {
                return Ok(());
            }
            std::thread::yield_now();
        }
    }

    /// One locking attempt. `Ok(false)` means a node was busy and nothing
    /// changed.
    fn try_attach(
        &self,
        parent: NodeId,
        parent_node: &Node,
        child: NodeId,
        child_node: &Node,
    ) -> Result<bool> {
        let mut parent_links = write(&parent_node.links);
        let Some(mut child_links) = try_write(&child_node.links) else {
            return Ok(false);
        };
        if let Some(existing) = child_links.parent {
            return Err(LayoutError::AlreadyAttached {
                child,
                parent: existing,
            });
        }

        // Every upward path into the child's subtree passes through the
        // child, which stays locked until the links are committed.
        let mut cursor = parent_links.parent;
        let mut budget = self.len();
        while let Some(ancestor) = cursor {
            if ancestor == child {
                return Err(LayoutError::Cycle { parent, child });
            }
            if budget == 0 {
                break;
            }
            budget -= 1;
            let Some(node) = self.slot(ancestor) else {
                break;
            };
            let Some(links) = try_read(&node.links) else {
                return Ok(false);
            };
            cursor = links.parent;
        }

        child_links.parent = Some(parent);
        child_links.index = parent_links.children.len();
        parent_links.children.push(child);
        Ok(true)
    }

    /// Detach and return the last child of `parent`, if any.
    pub fn pop_last_child(&self, parent: NodeId) -> Option<NodeId> {
        let parent_node = self.slot(parent)?;
        let mut parent_links = write(&parent_node.links);
        let child = parent_links.children.pop()?;
        if let Some(child_node) = self.slot(child) {
            let mut child_links = write(&child_node.links);
            child_links.parent = None;
            child_links.index = 0;
        }
        Some(child)
    }

    /// Detach every child of `parent`, returning them in document order.
    pub fn clear_children(&self, parent: NodeId) -> Vec<NodeId> {
        let Some(parent_node) = self.slot(parent) else {
            return Vec::new();
        };
        let mut parent_links = write(&parent_node.links);
        let removed = std::mem::take(&mut parent_links.children);
        for child in &removed {
            if let Some(child_node) = self.slot(*child) {
                let mut child_links = write(&child_node.links);
                child_links.parent = None;
                child_links.index = 0;
            }
        }
        removed
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        let node = self.slot(id)?;
        read(&node.links).parent
    }

    /// Position of `id` in its parent's child list (0 for detached nodes).
    pub fn index_in_parent(&self, id: NodeId) -> Option<usize> {
        let node = self.slot(id)?;
        Some(read(&node.links).index)
    }

    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        self.slot(id)
            .map(|node| read(&node.links).children.clone())
            .unwrap_or_default()
    }

    pub fn child_count(&self, id: NodeId) -> usize {
        self.slot(id)
            .map(|node| read(&node.links).children.len())
            .unwrap_or(0)
    }

    pub fn child_at(&self, id: NodeId, index: usize) -> Option<NodeId> {
        let node = self.slot(id)?;
        read(&node.links).children.get(index).copied()
    }

    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.child_at(id, 0)
    }

    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        let node = self.slot(id)?;
        read(&node.links).children.last().copied()
    }

    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        let (parent, index) = self.position(id)?;
        self.child_at(parent, index + 1)
    }

    pub fn previous_sibling(&self, id: NodeId) -> Option<NodeId> {
        let (parent, index) = self.position(id)?;
        let previous = index.checked_sub(1)?;
        self.child_at(parent, previous)
    }

    /// Every sibling before `id`, in document order.
    pub fn previous_siblings(&self, id: NodeId) -> Vec<NodeId> {
        match self.position(id) {
            Some((parent, index)) => {
                let siblings = self.children(parent);
                siblings[..index.min(siblings.len())].to_vec()
            }
            None => Vec::new(),
        }
    }

    /// Every sibling after `id`, in document order.
    pub fn following_siblings(&self, id: NodeId) -> Vec<NodeId> {
        match self.position(id) {
            Some((parent, index)) => {
                let siblings = self.children(parent);
                siblings.get(index + 1..).map(<[NodeId]>::to_vec).unwrap_or_default()
            }
            None => Vec::new(),
        }
    }

    /// Parent chain from the immediate parent up to the root.
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut chain = Vec::new();
        let mut cursor = self.parent(id);
        while let Some(parent) = cursor {
            if chain.contains(&parent) {
                break;
            }
            chain.push(parent);
            cursor = self.parent(parent);
        }
        chain
    }

    /// `id` followed by all of its descendants in depth-first pre-order.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        if !self.contains(id) {
            return Vec::new();
        }
        let mut order = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            order.push(current);
            stack.extend(self.children(current).into_iter().rev());
        }
        order
    }

    /// Copy of the node's box model.
    pub fn model(&self, id: NodeId) -> Option<BoxModel> {
        self.slot(id).map(|node| node.model().clone())
    }

    /// Read the box model without cloning it.
    pub fn with_model<R>(&self, id: NodeId, f: impl FnOnce(&BoxModel) -> R) -> Option<R> {
        self.slot(id).map(|node| f(&node.model()))
    }

    /// Mutate the box model under the node's write lock.
    pub fn update<R>(&self, id: NodeId, f: impl FnOnce(&mut BoxModel) -> R) -> Result<R> {
        let node = self.slot(id).ok_or(LayoutError::NodeNotFound(id))?;
        let mut model = node.model_mut();
        Ok(f(&mut model))
    }

    pub fn bounds(&self, id: NodeId) -> Option<Rect> {
        self.with_model(id, |model| model.bounds)
    }

    pub fn inner_bounds(&self, id: NodeId) -> Option<Rect> {
        self.with_model(id, BoxModel::inner_bounds)
    }

    /// Pin a node's outer bounds, typically a root sized to the screen.
    pub fn set_bounds(&self, id: NodeId, bounds: Rect) -> Result<()> {
        self.update(id, |model| model.bounds = bounds)
    }

    /// Clear a node's bounds so the next pass lays it out again.
    pub fn reset_bounds(&self, id: NodeId) -> Result<()> {
        self.set_bounds(id, Rect::EMPTY)
    }

    /// Clear bounds of `id` and every descendant.
    pub fn reset_subtree(&self, id: NodeId) -> Result<()> {
        if !self.contains(id) {
            return Err(LayoutError::NodeNotFound(id));
        }
        for node in self.descendants(id) {
            self.reset_bounds(node)?;
        }
        Ok(())
    }

    fn position(&self, id: NodeId) -> Option<(NodeId, usize)> {
        let node = self.slot(id)?;
        let links = read(&node.links);
        links.parent.map(|parent| (parent, links.index))
    }
}
