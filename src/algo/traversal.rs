// src/algo/traversal.rs

use crate::graph::Vertex;

/// Visitation record of a whole-graph traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Traversal {
    /// Every vertex exactly once, in visitation order.
    pub order: Vec<Vertex>,
    /// Start vertex of each traversal, in the order they were started.
    pub roots: Vec<Vertex>,
    /// Depth below the traversal root, indexed by vertex id.
    depth: Vec<Option<usize>>,
}

impl Traversal {
    pub(crate) fn with_slots(slots: usize) -> Self {
        Self {
            order: Vec::new(),
            roots: Vec::new(),
            depth: vec![None; slots],
        }
    }

    pub(crate) fn visit(&mut self, v: Vertex, depth: usize) {
        self.order.push(v);
        self.depth[v] = Some(depth);
    }

    pub fn depth_of(&self, v: Vertex) -> Option<usize> {
        self.depth.get(v).copied().flatten()
    }

    pub fn component_count(&self) -> usize {
        self.roots.len()
    }

    /// Visitation order split by component.
    pub fn components(&self) -> Vec<&[Vertex]> {
        let mut parts = Vec::with_capacity(self.roots.len());
        let mut start = 0;
        for (i, &v) in self.order.iter().enumerate() {
            if i > start && self.depth_of(v) == Some(0) {
                parts.push(&self.order[start..i]);
                start = i;
            }
        }
        if start < self.order.len() {
            parts.push(&self.order[start..]);
        }
        parts
    }
}
