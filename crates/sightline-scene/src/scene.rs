//! Arena-backed scene hierarchy.

use slotmap::SlotMap;

use sightline_math::Transform;

use crate::{Node, NodeId, Result, SceneError};

/// A forest of [`Node`]s addressed by [`NodeId`].
#[derive(Debug, Clone, Default)]
pub struct Scene {
    nodes: SlotMap<NodeId, Node>,
    roots: Vec<NodeId>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `node` as a new root.
    pub fn add(&mut self, mut node: Node) -> NodeId {
        node.parent = None;
        node.children.clear();
        let id = self.nodes.insert(node);
        self.roots.push(id);
        id
    }

    /// Insert `node` as the last child of `parent`.
    pub fn add_child(&mut self, parent: NodeId, mut node: Node) -> Result<NodeId> {
        if !self.nodes.contains_key(parent) {
            return Err(SceneError::UnknownNode(parent));
        }
        node.parent = Some(parent);
        node.children.clear();
        let id = self.nodes.insert(node);
        self.nodes[parent].children.push(id);
        Ok(id)
    }

    /// Look up a node.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Look up a node mutably.
    ///
    /// Changing position, rotation or scale requires a call to
    /// [`Scene::update_world_transforms`] before the next query.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    /// Whether `id` belongs to this scene.
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Root nodes in insertion order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the scene has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes, in arena order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter()
    }

    /// First node with the given name, searching roots depth-first.
    pub fn find_by_name(&self, name: &str) -> Option<NodeId> {
        self.roots
            .iter()
            .flat_map(|&root| std::iter::once(root).chain(self.descendants(root)))
            .find(|&id| self.nodes[id].name == name)
    }

    /// Every node below `id`, depth-first pre-order: each child is followed
    /// by its own descendants before the next sibling. `id` itself is not
    /// included. Yields nothing for an unknown id.
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        let stack = self
            .nodes
            .get(id)
            .map(|node| node.children.iter().rev().copied().collect())
            .unwrap_or_default();
        Descendants { scene: self, stack }
    }

    /// Recompute every node's world transform from its local transform and
    /// its parent's world transform.
    pub fn update_world_transforms(&mut self) {
        let mut stack: Vec<(NodeId, Transform)> = self
            .roots
            .iter()
            .map(|&id| (id, Transform::identity()))
            .collect();

        while let Some((id, parent_world)) = stack.pop() {
            let node = &mut self.nodes[id];
            node.world = parent_world.then(&node.local_transform());
            let world = node.world;
            stack.extend(node.children.iter().map(|&child| (child, world)));
        }
    }
}

/// Iterator returned by [`Scene::descendants`].
pub struct Descendants<'a> {
    scene: &'a Scene,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        if let Some(node) = self.scene.nodes.get(id) {
            self.stack.extend(node.children.iter().rev().copied());
        }
        Some(id)
    }
}
