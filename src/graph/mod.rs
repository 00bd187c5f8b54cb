// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Region graph and its constraint queries.
//!
//! Nodes are stored in load order and every query that walks the node set
//! (violations, first empty node) follows that order.

pub mod adjacency;
pub mod node;

use std::io::Read;
use std::path::Path;

use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::config::{
    ADJACENCY_LIST_COLUMN, ADJACENCY_OWNER_COLUMN, NODE_ID_COLUMN, NODE_NAME_COLUMN,
};
use crate::error::{KernelError, Result};
use crate::source::{open_file, read_rows};
use crate::types::id::NodeId;
use crate::types::value::{Cost, Value};

pub use adjacency::{parse_neighbour_list, EdgeIterator};
pub use node::Node;

#[derive(Debug, Deserialize)]
struct NodeRecord {
    id: String,
    name: String,
}

#[derive(Debug, Deserialize)]
struct AdjacencyRecord {
    state: String,
    neighbours: String,
}

#[derive(Clone, Debug, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    index: FxHashMap<String, NodeId>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from a node source and an adjacency source.
    ///
    /// Construction is all or nothing: any failure in either source is
    /// returned and no graph is produced.
    pub fn from_readers<N: Read, A: Read>(nodes: N, neighbours: A) -> Result<Self> {
        let mut graph = Self::load_nodes(nodes)?;
        graph.load_neighbours(neighbours)?;
        Ok(graph)
    }

    pub fn open(nodes_path: impl AsRef<Path>, neighbours_path: impl AsRef<Path>) -> Result<Self> {
        Self::from_readers(open_file(nodes_path)?, open_file(neighbours_path)?)
    }

    /// Loads the `id`/`name` node source into a graph without adjacency.
    pub fn load_nodes<R: Read>(source: R) -> Result<Self> {
        let rows: Vec<NodeRecord> =
            read_rows(source, "node", &[NODE_ID_COLUMN, NODE_NAME_COLUMN])?;

        let mut graph = Self::new();
        for row in rows {
            graph.insert_node(row.id, row.name)?;
        }
        tracing::debug!(nodes = graph.len(), "Loaded nodes");
        Ok(graph)
    }

    /// Appends a node. Fails with `DuplicateId` if the key is taken.
    pub fn insert_node(&mut self, key: impl Into<String>, name: impl Into<String>) -> Result<NodeId> {
        let key = key.into();
        if key.is_empty() {
            return Err(KernelError::MalformedSource("node id is empty".to_string()));
        }
        if self.index.contains_key(&key) {
            return Err(KernelError::DuplicateId(key));
        }
        let id = NodeId(self.nodes.len() as u32);
        self.index.insert(key.clone(), id);
        self.nodes.push(Node::new(id, key, name));
        Ok(id)
    }

    /// Loads the `state`/`neighbours` adjacency source into the existing nodes.
    ///
    /// Every row is resolved before the first edge is added, so on error the
    /// adjacency of the graph is left as it was.
    pub fn load_neighbours<R: Read>(&mut self, source: R) -> Result<()> {
        let rows: Vec<AdjacencyRecord> = read_rows(
            source,
            "adjacency",
            &[ADJACENCY_OWNER_COLUMN, ADJACENCY_LIST_COLUMN],
        )?;

        let mut edges = Vec::new();
        for row in &rows {
            let owner = self
                .lookup(&row.state)
                .ok_or_else(|| KernelError::UnknownNodeId(row.state.clone()))?;

            for key in parse_neighbour_list(&row.neighbours) {
                let neighbour = self.lookup(key).ok_or_else(|| KernelError::UnknownNeighbourId {
                    owner: row.state.clone(),
                    neighbour: key.to_string(),
                })?;
                if neighbour == owner {
                    tracing::warn!(node = %row.state, "Skipping self reference in adjacency source");
                    continue;
                }
                edges.push((owner, neighbour));
            }
        }

        for (a, b) in edges {
            self.add_neighbour(a, b)?;
        }
        tracing::debug!(rows = rows.len(), edges = self.edge_count(), "Loaded adjacency");
        Ok(())
    }

    /// Registers `a` and `b` as neighbours of each other.
    ///
    /// Returns false when the edge already existed or `a == b`.
    pub fn add_neighbour(&mut self, a: NodeId, b: NodeId) -> Result<bool> {
        self.node(b)?;
        if a == b {
            tracing::warn!(node = %self.node(a)?.key, "Ignoring self neighbour");
            return Ok(false);
        }
        self.node(a)?;
        let added = self.nodes[a.index()].add_neighbour(b);
        let reverse = self.nodes[b.index()].add_neighbour(a);
        Ok(added || reverse)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    pub fn edges(&self) -> EdgeIterator<'_> {
        EdgeIterator::new(&self.nodes)
    }

    /// Nodes in load order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    pub fn lookup(&self, key: &str) -> Option<NodeId> {
        self.index.get(key).copied()
    }

    pub fn node(&self, id: NodeId) -> Result<&Node> {
        self.nodes
            .get(id.index())
            .ok_or_else(|| KernelError::UnknownNodeId(format!("#{}", id.0)))
    }

    /// Neighbour sets are only changed through [`Graph::add_neighbour`], so
    /// mutable node access stays inside the crate.
    pub(crate) fn node_mut(&mut self, id: NodeId) -> Result<&mut Node> {
        self.nodes
            .get_mut(id.index())
            .ok_or_else(|| KernelError::UnknownNodeId(format!("#{}", id.0)))
    }

    pub fn node_by_key(&self, key: &str) -> Result<&Node> {
        let id = self
            .lookup(key)
            .ok_or_else(|| KernelError::UnknownNodeId(key.to_string()))?;
        self.node(id)
    }

    pub fn set_value(&mut self, id: NodeId, value: Value) -> Result<()> {
        self.node_mut(id)?.set_value(value);
        Ok(())
    }

    pub fn clear_value(&mut self, id: NodeId) -> Result<Option<Value>> {
        Ok(self.node_mut(id)?.clear_value())
    }

    pub fn clear_values(&mut self) {
        for node in &mut self.nodes {
            node.value = None;
        }
    }

    /// Copies out the current assignment, one entry per node in load order.
    pub fn snapshot(&self) -> Vec<Option<Value>> {
        self.nodes.iter().map(|n| n.value.clone()).collect()
    }

    /// Puts back an assignment taken with [`Graph::snapshot`].
    pub fn restore(&mut self, values: Vec<Option<Value>>) -> Result<()> {
        if values.len() != self.nodes.len() {
            return Err(KernelError::SnapshotMismatch {
                expected: self.nodes.len(),
                found: values.len(),
            });
        }
        for (node, value) in self.nodes.iter_mut().zip(values) {
            node.value = value;
        }
        Ok(())
    }

    /// True iff `id` is unassigned or no neighbour holds a value with the same token.
    pub fn is_valid(&self, id: NodeId) -> Result<bool> {
        let node = self.node(id)?;
        Ok(self.is_node_valid(node))
    }

    fn is_node_valid(&self, node: &Node) -> bool {
        let Some(value) = node.value.as_ref() else {
            return true;
        };
        !node.neighbours.iter().any(|n| {
            self.nodes[n.index()]
                .value
                .as_ref()
                .is_some_and(|other| value.conflicts_with(other))
        })
    }

    /// True when giving `value` to `id` would clash with a neighbour.
    pub fn would_conflict(&self, id: NodeId, value: &Value) -> Result<bool> {
        let node = self.node(id)?;
        Ok(self.neighbour_conflicts(node, value) > 0)
    }

    /// Number of neighbours of `node` currently holding a token equal to `value`.
    pub fn neighbour_conflicts(&self, node: &Node, value: &Value) -> usize {
        node.neighbours
            .iter()
            .filter(|n| {
                self.nodes[n.index()]
                    .value
                    .as_ref()
                    .is_some_and(|other| value.conflicts_with(other))
            })
            .count()
    }

    /// Every node that shares a token with at least one neighbour, in load order.
    pub fn get_violations(&self) -> Vec<&Node> {
        self.nodes.iter().filter(|n| !self.is_node_valid(n)).collect()
    }

    pub fn violation_count(&self) -> usize {
        self.nodes.iter().filter(|n| !self.is_node_valid(n)).count()
    }

    /// Conflicting edges, each once with the lower id first.
    pub fn conflicts(&self) -> Vec<(NodeId, NodeId)> {
        self.edges()
            .filter(|(a, b)| {
                match (&self.nodes[a.index()].value, &self.nodes[b.index()].value) {
                    (Some(x), Some(y)) => x.conflicts_with(y),
                    _ => false,
                }
            })
            .collect()
    }

    /// True iff every node has a value. Says nothing about violations.
    pub fn is_solution(&self) -> bool {
        self.nodes.iter().all(Node::has_value)
    }

    /// Sum of the assigned costs. Fails with `NotAssigned` on the first empty
    /// node and `Overflow` when the sum leaves the `Cost` range.
    pub fn calculate_value(&self) -> Result<Cost> {
        let mut total: Cost = 0;
        for node in &self.nodes {
            total = total
                .checked_add(node.get_value()?.cost)
                .ok_or(KernelError::Overflow)?;
        }
        Ok(total)
    }

    /// First unassigned node in load order.
    pub fn get_empty_node(&self) -> Option<&Node> {
        self.nodes.iter().find(|n| !n.has_value())
    }
}
