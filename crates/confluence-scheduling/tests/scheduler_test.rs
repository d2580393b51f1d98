use std::time::Duration as StdDuration;

use chrono::{DateTime, Duration, TimeZone, Utc};

use confluence_core::config::ConfluenceConfig;
use confluence_scheduling::signals::{standard, HourlyProfile, PeakHours};
use confluence_scheduling::{
    DecayingInterval, IntensityBlend, SignalDimension, SignalRegistry, WindowScheduler,
};

fn monday_noon() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 2, 12, 0, 0).unwrap()
}

#[test]
fn standard_week_has_four_windows_per_day() {
    let config = ConfluenceConfig::default();
    let scheduler = WindowScheduler::standard().unwrap();
    let dims = standard::convergence_dimensions();

    let windows = scheduler.compute_windows(
        monday_noon(),
        &dims,
        config.scheduler.horizon_hours,
        config.scheduler.threshold,
    );

    // Hours 01..=04 UTC on each of the seven days the horizon reaches.
    assert_eq!(windows.len(), 28);
    assert!(windows
        .iter()
        .all(|w| (1..=4).contains(&w.hour_of_day)));

    let best = &windows[0];
    assert_eq!(best.hour_of_day, 4);
    assert_eq!(best.timestamp, monday_noon() + Duration::hours(16));
    assert_eq!(best.hour_offset, 16);
}

#[test]
fn window_fields_are_consistent_with_base() {
    let scheduler = WindowScheduler::standard().unwrap();
    let dims = standard::convergence_dimensions();
    let base = monday_noon();
    for w in scheduler.compute_windows(base, &dims, 72, 3.5) {
        assert_eq!(w.timestamp, base + Duration::hours(w.hour_offset));
        assert!(w.convergence_score > 3.5);
        assert!(w.convergence_score <= WindowScheduler::max_convergence(&dims));
        assert!((0.0..=1.0).contains(&w.intensity));
    }
}

#[test]
fn custom_signals_can_replace_the_standard_set() {
    let registry = SignalRegistry::new()
        .with("quiet", PeakHours::new([23], 1.0, 0.0))
        .with("calm", HourlyProfile::flat(0.8));
    let blend = IntensityBlend::new(vec![SignalDimension::unit("calm")]).unwrap();
    let scheduler = WindowScheduler::new(registry, blend);

    let dims = [SignalDimension::unit("quiet")];
    let best = scheduler
        .best_window(monday_noon(), &dims, 24, 0.5)
        .unwrap();
    assert_eq!(best.hour_of_day, 23);
    assert_eq!(best.hour_offset, 11);
    assert!((best.intensity - 0.8).abs() < 1e-12);
}

#[test]
fn threshold_at_maximum_admits_nothing() {
    let scheduler = WindowScheduler::standard().unwrap();
    let dims = standard::convergence_dimensions();
    let max = WindowScheduler::max_convergence(&dims);
    assert_eq!(max, 5.0);
    assert!(scheduler
        .compute_windows(monday_noon(), &dims, 168, max)
        .is_empty());
}

#[test]
fn horizon_stops_at_the_end_of_representable_time() {
    let scheduler = WindowScheduler::standard().unwrap();
    let dims = standard::convergence_dimensions();
    let base = DateTime::<Utc>::MAX_UTC - Duration::hours(2);

    let windows = scheduler.compute_windows(base, &dims, 5, 0.0);
    assert!(windows.len() <= 3);
    assert!(windows.iter().all(|w| w.hour_offset <= 2));
}

#[test]
fn oversized_horizon_does_not_overflow() {
    let scheduler = WindowScheduler::standard().unwrap();
    let dims = standard::convergence_dimensions();
    let base = DateTime::<Utc>::MAX_UTC - Duration::hours(30);

    let windows = scheduler.compute_windows(base, &dims, i64::MAX, 0.0);
    assert!(!windows.is_empty());
    assert!(windows.iter().all(|w| w.hour_offset <= 30));
}

#[test]
fn cadence_follows_config() {
    let mut config = ConfluenceConfig::default();
    config.improvement.base_interval_secs = 900.0;
    config.improvement.floor_interval_secs = 60.0;
    let cadence = DecayingInterval::from_config(&config.improvement).unwrap();
    assert_eq!(cadence.wait_for_cycle(1), StdDuration::from_secs(900));
    assert_eq!(cadence.wait_for_cycle(9), StdDuration::from_secs(300));
    assert_eq!(cadence.wait_for_cycle(1_000), StdDuration::from_secs(60));
}
