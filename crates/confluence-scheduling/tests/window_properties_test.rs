use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;

use confluence_scheduling::signals::{standard, HourlyProfile};
use confluence_scheduling::{IntensityBlend, SignalDimension, SignalRegistry, WindowScheduler};

fn base_at(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap() + Duration::hours(hour as i64)
}

fn arb_profile() -> impl Strategy<Value = [f64; 24]> {
    proptest::array::uniform24(0.0f64..=1.0)
}

fn scheduler_for(profiles: [[f64; 24]; 3]) -> (WindowScheduler, Vec<SignalDimension>) {
    let names = ["a", "b", "c"];
    let mut registry = SignalRegistry::new();
    for (name, table) in names.iter().zip(profiles) {
        registry.register(*name, HourlyProfile::new(table));
    }
    let blend = IntensityBlend::new(vec![
        SignalDimension::new("a", 0.5).unwrap(),
        SignalDimension::new("b", 0.5).unwrap(),
    ])
    .unwrap();
    let dims = names.iter().map(|n| SignalDimension::unit(*n)).collect();
    (WindowScheduler::new(registry, blend), dims)
}

proptest! {
    #[test]
    fn windows_are_sorted_descending_then_by_time(
        a in arb_profile(),
        b in arb_profile(),
        c in arb_profile(),
        start in 0u32..24,
        horizon in 1i64..200,
        threshold in 0.0f64..3.0,
    ) {
        let (scheduler, dims) = scheduler_for([a, b, c]);
        let windows = scheduler.compute_windows(base_at(start), &dims, horizon, threshold);
        prop_assert!(windows.len() as i64 <= horizon);
        for pair in windows.windows(2) {
            prop_assert!(pair[0].convergence_score >= pair[1].convergence_score);
            if pair[0].convergence_score == pair[1].convergence_score {
                prop_assert!(pair[0].timestamp < pair[1].timestamp);
            }
        }
        for w in &windows {
            prop_assert!(w.convergence_score > threshold);
            prop_assert!((0.0..=1.0).contains(&w.intensity));
        }
    }

    #[test]
    fn threshold_at_or_above_max_yields_nothing(
        a in arb_profile(),
        b in arb_profile(),
        c in arb_profile(),
        extra in 0.0f64..2.0,
        horizon in 0i64..200,
    ) {
        let (scheduler, dims) = scheduler_for([a, b, c]);
        let threshold = WindowScheduler::max_convergence(&dims) + extra;
        prop_assert!(scheduler
            .compute_windows(base_at(0), &dims, horizon, threshold)
            .is_empty());
    }

    #[test]
    fn standard_scores_are_deterministic(hour in 0u32..24) {
        let scheduler = WindowScheduler::standard().unwrap();
        let dims = standard::convergence_dimensions();
        let first = scheduler.convergence_score(&dims, hour);
        let second = scheduler.convergence_score(&dims, hour);
        prop_assert_eq!(first, second);
        prop_assert!((0.0..=5.0).contains(&first));
    }
}
