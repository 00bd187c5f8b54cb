// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::error::KernelError;
use crate::fixtures::TRANSMITTERS_CSV;
use crate::scheme::CostSchemes;
use crate::tests::path_graph;
use crate::types::id::SchemeId;

#[test]
fn test_load_transmitter_schemes() {
    let schemes = CostSchemes::from_reader(TRANSMITTERS_CSV.as_bytes()).unwrap();
    assert_eq!(schemes.len(), 4);
    assert_eq!(schemes.ids().collect::<Vec<_>>(), vec![SchemeId(1), SchemeId(2), SchemeId(3), SchemeId(4)]);

    let first = schemes.get_scheme(SchemeId(1)).unwrap();
    assert_eq!(first.len(), 7);
    assert_eq!(first.cost_of("A"), Some(12));
    assert_eq!(first.cost_of("G"), Some(41));
    assert_eq!(first.cost_of("H"), None);
    assert_eq!(first.cheapest().unwrap().token, "A");

    let tokens: Vec<&str> = first.values().iter().map(|v| v.token.as_str()).collect();
    assert_eq!(tokens, vec!["A", "B", "C", "D", "E", "F", "G"]);
}

#[test]
fn test_by_cost_keeps_source_order_on_ties() {
    let schemes =
        CostSchemes::from_reader("scheme,token,cost\n7,x,3\n7,y,1\n7,z,3\n".as_bytes()).unwrap();
    let scheme = schemes.get_scheme(SchemeId(7)).unwrap();
    let ranked: Vec<&str> = scheme.by_cost().iter().map(|v| v.token.as_str()).collect();
    assert_eq!(ranked, vec!["y", "x", "z"]);
}

#[test]
fn test_unknown_scheme_id() {
    let schemes = CostSchemes::from_reader(TRANSMITTERS_CSV.as_bytes()).unwrap();
    let before = schemes.clone();
    let graph = path_graph();

    let err = schemes.get_scheme(SchemeId(9)).unwrap_err();
    assert!(matches!(err, KernelError::UnknownSchemeId(SchemeId(9))));

    // Nothing moved
    assert_eq!(schemes, before);
    assert!(graph.get_empty_node().is_some());
    assert!(graph.nodes().all(|n| !n.has_value()));
}

#[test]
fn test_negative_cost_rejected() {
    let err = CostSchemes::from_reader("scheme,token,cost\n1,A,-4\n".as_bytes()).unwrap_err();
    assert!(matches!(err, KernelError::MalformedSource(_)), "got {:?}", err);
}

#[test]
fn test_duplicate_token_rejected() {
    let err = CostSchemes::from_reader("scheme,token,cost\n1,A,4\n1,A,5\n".as_bytes()).unwrap_err();
    assert!(matches!(err, KernelError::MalformedSource(_)));

    // Same token in different schemes is fine
    assert!(CostSchemes::from_reader("scheme,token,cost\n1,A,4\n2,A,5\n".as_bytes()).is_ok());
}

#[test]
fn test_scheme_missing_column() {
    let err = CostSchemes::from_reader("scheme,token\n1,A\n".as_bytes()).unwrap_err();
    assert!(matches!(err, KernelError::MalformedSource(_)));
}

#[test]
fn test_open_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let paths = crate::fixtures::generate_test_scenario(dir.path()).unwrap();
    let schemes = CostSchemes::open(&paths.schemes).unwrap();
    assert_eq!(schemes.get_scheme(SchemeId(4)).unwrap().cost_of("A"), Some(3));

    let missing = CostSchemes::open(dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(missing, KernelError::Io(_)));
}
