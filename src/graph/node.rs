//! Graph Node definition.

// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::error::{KernelError, Result};
use crate::types::id::NodeId;
use crate::types::value::Value;

/// A single assignable region.
///
/// `key` is the id from the node source and is what equality and lookups use;
/// `name` is a display label only. Neighbours are indices into the owning
/// graph, so a node can only be judged valid through that graph.
#[derive(Clone, Debug)]
pub struct Node {
    pub(crate) id: NodeId,
    pub(crate) key: String,
    pub(crate) name: String,
    pub(crate) neighbours: Vec<NodeId>,
    pub(crate) value: Option<Value>,
}

impl Node {
    pub fn new(id: NodeId, key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            key: key.into(),
            name: name.into(),
            neighbours: Vec::new(),
            value: None,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Neighbours in the order they were attached.
    pub fn neighbours(&self) -> &[NodeId] {
        &self.neighbours
    }

    pub fn degree(&self) -> usize {
        self.neighbours.len()
    }

    /// Registers `other` as a neighbour of this node only.
    ///
    /// Returns false when `other` is this node or is already registered.
    /// Callers outside the graph go through
    /// [`Graph::add_neighbour`](crate::graph::Graph::add_neighbour), which
    /// checks that both ids exist and links both directions.
    pub(crate) fn add_neighbour(&mut self, other: NodeId) -> bool {
        if other == self.id || self.neighbours.contains(&other) {
            return false;
        }
        self.neighbours.push(other);
        true
    }

    pub fn is_neighbour(&self, other: NodeId) -> bool {
        self.neighbours.contains(&other)
    }

    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }

    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    pub fn get_value(&self) -> Result<&Value> {
        self.value
            .as_ref()
            .ok_or_else(|| KernelError::NotAssigned(self.key.clone()))
    }

    /// Assigns or overwrites the value. No neighbour check happens here.
    pub fn set_value(&mut self, value: Value) {
        self.value = Some(value);
    }

    pub fn clear_value(&mut self) -> Option<Value> {
        self.value.take()
    }
}

/// Nodes are equal when they sit at the same index under the same key.
/// Name, neighbours and value play no part.
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.key == other.key
    }
}

impl Eq for Node {}
