use tempfile::tempdir;

use freqmap_cli::commands::{inspect, schemes, solve};
use freqmap_cli::config::{GraphSources, RunConfig};
use freqmap_cli::engine::AssignmentEngine;
use freqmap_kernel::fixtures;
use freqmap_kernel::{KernelError, SchemeId, StrategyKind, StrategySettings};

fn sources(paths: &fixtures::TestPaths) -> GraphSources {
    GraphSources {
        nodes: paths.nodes.clone(),
        neighbours: paths.neighbours.clone(),
    }
}

#[test]
fn test_integration_workflow() {
    let dir = tempdir().unwrap();
    let paths = fixtures::generate_test_scenario(dir.path()).unwrap();

    assert!(inspect::run(&sources(&paths)).is_ok());
    assert!(schemes::run(&paths.schemes).is_ok());

    for strategy in StrategyKind::ALL {
        let cfg = RunConfig {
            schemes: paths.schemes.clone(),
            strategy,
            ..RunConfig::default()
        };
        let report = solve::run(&sources(&paths), &cfg).unwrap();
        assert!(report.solution, "{} left nodes empty", strategy);
        assert_eq!(report.nodes.len(), 12);
        assert_eq!(report.outcome.strategy, strategy.as_str());
        assert_eq!(report.violations.len(), report.outcome.violations);
        assert_eq!(report.cost, Some(report.outcome.cost));
    }
}

#[test]
fn test_solve_writes_json_report() {
    let dir = tempdir().unwrap();
    let paths = fixtures::generate_path_scenario(dir.path()).unwrap();
    let json_path = dir.path().join("report.json");

    let cfg = RunConfig {
        schemes: paths.schemes.clone(),
        strategy: StrategyKind::Exhaustive,
        json_report: Some(json_path.clone()),
        ..RunConfig::default()
    };
    let report = solve::run(&sources(&paths), &cfg).unwrap();
    assert_eq!(report.cost, Some(17));
    assert!(report.violations.is_empty());

    let body: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(body["cost"], 17);
    assert_eq!(body["solution"], true);
    assert_eq!(body["outcome"]["strategy"], "exhaustive");
    assert_eq!(body["nodes"][1]["token"], "2");
}

#[test]
fn test_unknown_scheme_leaves_graph_untouched() {
    let dir = tempdir().unwrap();
    let paths = fixtures::generate_test_scenario(dir.path()).unwrap();

    let mut engine = AssignmentEngine::load(&sources(&paths), &paths.schemes).unwrap();
    let err = engine
        .run(StrategyKind::Greedy, SchemeId(42), &StrategySettings::default())
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<KernelError>(),
        Some(KernelError::UnknownSchemeId(SchemeId(42)))
    ));
    assert!(engine.graph.nodes().all(|n| !n.has_value()));
}

#[test]
fn test_missing_neighbour_fails_load() {
    let dir = tempdir().unwrap();
    let paths = fixtures::write_sources(
        dir.path(),
        "id,name\nA,Alpha\n",
        "state,neighbours\nA,\"[B]\"\n",
        "scheme,token,cost\n1,x,1\n",
    )
    .unwrap();

    let err = inspect::run(&sources(&paths)).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<KernelError>(),
        Some(KernelError::UnknownNeighbourId { .. })
    ));
}
