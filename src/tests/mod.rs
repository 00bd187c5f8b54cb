#[cfg(test)]
// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
pub mod node_tests;
pub mod scheme_tests;

use crate::graph::Graph;

/// `A - B - C`, no edge between A and C.
pub(crate) fn path_graph() -> Graph {
    Graph::from_readers(
        "id,name\nA,Alpha\nB,Bravo\nC,Charlie\n".as_bytes(),
        "state,neighbours\nA,\"[B]\"\nB,\"[A, C]\"\nC,\"[B]\"\n".as_bytes(),
    )
    .unwrap()
}

pub(crate) fn keys(nodes: &[&crate::graph::Node]) -> Vec<String> {
    nodes.iter().map(|n| n.key().to_string()).collect()
}
