use confluence_cli::{load_subsystems, ChecklistHarness, LoggingDeployer, SnapshotFileProbe};
use confluence_core::config::ImprovementConfig;
use confluence_core::traits::IPerformanceProbe;
use confluence_improvement::ImprovementLoop;
use test_fixtures::{fixture_path, SUBSYSTEMS};

#[test]
fn loads_and_extracts_fixture_subsystems() {
    let paths: Vec<_> = SUBSYSTEMS
        .iter()
        .map(|name| fixture_path(&format!("subsystems/{name}.json")))
        .collect();
    let subsystems = load_subsystems(&paths).unwrap();

    let ids: Vec<&str> = subsystems.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, SUBSYSTEMS.to_vec());
    assert!(subsystems.iter().all(|s| !s.capability_set.is_empty()));
    assert_eq!(subsystems[0].capability_set.len(), 20);
}

#[test]
fn missing_subsystem_file_names_the_path() {
    let err = load_subsystems(&[fixture_path("subsystems/missing.json")]).unwrap_err();
    assert!(format!("{err:#}").contains("missing.json"));
}

#[test]
fn file_probe_stamps_read_time() {
    let probe = SnapshotFileProbe::new(fixture_path("snapshots/degraded.json"));
    let snapshot = probe.snapshot().unwrap();
    assert_eq!(snapshot.subject, "confluence");
    assert_eq!(snapshot.get("latency_p99_ms"), Some(940.0));
    assert!(snapshot.taken_at.timestamp() > 1_772_424_000);
}

#[test]
fn cli_collaborators_apply_every_candidate() {
    let mut lp = ImprovementLoop::new(
        SnapshotFileProbe::new(fixture_path("snapshots/degraded.json")),
        ChecklistHarness::default(),
        LoggingDeployer,
        &ImprovementConfig::default(),
    )
    .unwrap();
    let cycle = lp.run_cycle().unwrap();
    assert_eq!(cycle.applied_count(), 10);
    assert!(cycle.rejected.is_empty());
}

#[test]
fn narrow_harness_rejects_what_it_cannot_check() {
    let mut lp = ImprovementLoop::new(
        SnapshotFileProbe::new(fixture_path("snapshots/degraded.json")),
        ChecklistHarness::new(["unit_tests", "lint", "code_review"]),
        LoggingDeployer,
        &ImprovementConfig::default(),
    )
    .unwrap();
    let cycle = lp.run_cycle().unwrap();
    // Only the two retained code candidates need nothing beyond these checks.
    assert_eq!(cycle.applied_count(), 2);
    assert_eq!(cycle.rejected.len(), 8);
    assert!(cycle.rejected.iter().all(|r| r.reason.starts_with("missing checks")));
}
