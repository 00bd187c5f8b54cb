// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::error::KernelError;
use crate::graph::Node;
use crate::types::id::NodeId;
use crate::types::value::Value;

#[test]
fn test_node_value_lifecycle() {
    let mut node = Node::new(NodeId(0), "GR", "Groningen");
    assert!(!node.has_value());
    assert!(matches!(node.get_value(), Err(KernelError::NotAssigned(ref k)) if k == "GR"));

    node.set_value(Value::new("A", 12));
    assert!(node.has_value());
    assert_eq!(node.get_value().unwrap(), &Value::new("A", 12));

    // Overwrite replaces, no validation
    node.set_value(Value::new("B", 26));
    assert_eq!(node.get_value().unwrap().token, "B");

    assert_eq!(node.clear_value(), Some(Value::new("B", 26)));
    assert!(!node.has_value());
}

#[test]
fn test_node_neighbour_set() {
    let mut node = Node::new(NodeId(0), "A", "Alpha");

    assert!(!node.add_neighbour(NodeId(0)), "A node is never its own neighbour");
    assert!(node.add_neighbour(NodeId(1)));
    assert!(node.add_neighbour(NodeId(2)));
    assert!(!node.add_neighbour(NodeId(1)), "Neighbours are a set");

    assert_eq!(node.neighbours(), &[NodeId(1), NodeId(2)]);
    assert_eq!(node.degree(), 2);
    assert!(node.is_neighbour(NodeId(2)));
    assert!(!node.is_neighbour(NodeId(0)));
}

#[test]
fn test_value_conflict_ignores_cost() {
    let a = Value::new("A", 12);
    assert!(a.conflicts_with(&Value::new("A", 99)));
    assert!(!a.conflicts_with(&Value::new("B", 12)));
}

#[test]
fn test_node_equality_uses_id_and_key() {
    let mut a = Node::new(NodeId(0), "A", "Alpha");
    let mut renamed = Node::new(NodeId(0), "A", "Other label");
    a.set_value(Value::new("1", 5));
    renamed.add_neighbour(NodeId(3));
    assert_eq!(a, renamed);

    assert_ne!(a, Node::new(NodeId(1), "A", "Alpha"));
    assert_ne!(a, Node::new(NodeId(0), "B", "Alpha"));
}
