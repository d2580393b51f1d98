//! WindowScheduler: ranks future hours by multi-signal convergence.
//!
//! For each hour offset in `[0, horizon_hours)`:
//!
//! ```text
//! convergence = Σ weight_d × score_d(hour)        (not normalized)
//! intensity   = Σ weight_i × score_i(hour)        (weights sum to 1)
//! ```
//!
//! Windows with `convergence > threshold` are kept and sorted by descending
//! convergence, ties broken by earliest timestamp.

use chrono::{DateTime, Duration, Timelike, Utc};
use tracing::debug;

use confluence_core::constants::WEIGHT_SUM_TOLERANCE;
use confluence_core::errors::SchedulingError;
use confluence_core::models::TimeWindow;

use crate::signals::{standard, SignalRegistry};

/// A registered signal and its weight in a combination.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalDimension {
    name: String,
    weight: f64,
}

impl SignalDimension {
    /// Weights must be finite and non-negative.
    pub fn new(name: impl Into<String>, weight: f64) -> Result<Self, SchedulingError> {
        let name = name.into();
        if !weight.is_finite() || weight < 0.0 {
            return Err(SchedulingError::InvalidWeight {
                dimension: name,
                weight,
            });
        }
        Ok(Self { name, weight })
    }

    /// Dimension with weight 1.0.
    pub fn unit(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            weight: 1.0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }
}

/// Fixed weighted blend of a dimension subset. Weights sum to 1, so the
/// blend stays in [0.0, 1.0].
#[derive(Debug, Clone, PartialEq)]
pub struct IntensityBlend {
    components: Vec<SignalDimension>,
}

impl IntensityBlend {
    pub fn new(components: Vec<SignalDimension>) -> Result<Self, SchedulingError> {
        let sum: f64 = components.iter().map(|c| c.weight).sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(SchedulingError::InvalidIntensityWeights { sum });
        }
        Ok(Self { components })
    }

    pub fn components(&self) -> &[SignalDimension] {
        &self.components
    }

    pub fn evaluate(&self, registry: &SignalRegistry, hour: u32) -> f64 {
        self.components
            .iter()
            .map(|c| c.weight * registry.score(&c.name, hour))
            .sum::<f64>()
            .clamp(0.0, 1.0)
    }
}

/// Combines registered signals into ranked candidate windows.
#[derive(Debug, Clone)]
pub struct WindowScheduler {
    registry: SignalRegistry,
    intensity: IntensityBlend,
}

impl WindowScheduler {
    pub fn new(registry: SignalRegistry, intensity: IntensityBlend) -> Self {
        Self {
            registry,
            intensity,
        }
    }

    /// Scheduler over the standard signal set.
    pub fn standard() -> Result<Self, SchedulingError> {
        Ok(Self::new(standard::registry(), standard::intensity_blend()?))
    }

    pub fn registry(&self) -> &SignalRegistry {
        &self.registry
    }

    pub fn intensity_blend(&self) -> &IntensityBlend {
        &self.intensity
    }

    /// Weighted sum of the dimension scores at `hour`.
    pub fn convergence_score(&self, dimensions: &[SignalDimension], hour: u32) -> f64 {
        dimensions
            .iter()
            .map(|d| d.weight * self.registry.score(&d.name, hour))
            .sum()
    }

    /// Upper bound on the convergence score: every signal scoring 1.0.
    pub fn max_convergence(dimensions: &[SignalDimension]) -> f64 {
        dimensions.iter().map(|d| d.weight).sum()
    }

    /// Rank the hours in `[0, horizon_hours)` after `base`.
    ///
    /// Returns an empty sequence when `horizon_hours <= 0` or nothing clears
    /// `threshold`; neither is an error. Hours that would fall outside
    /// chrono's timestamp range are not scanned.
    pub fn compute_windows(
        &self,
        base: DateTime<Utc>,
        dimensions: &[SignalDimension],
        horizon_hours: i64,
        threshold: f64,
    ) -> Vec<TimeWindow> {
        if horizon_hours <= 0 {
            return Vec::new();
        }

        // Offsets past the representable range end the horizon early.
        let mut windows: Vec<TimeWindow> = (0..horizon_hours)
            .map_while(|offset| {
                let timestamp = Duration::try_hours(offset)
                    .and_then(|delta| base.checked_add_signed(delta))?;
                Some((offset, timestamp))
            })
            .filter_map(|(offset, timestamp)| {
                let hour = timestamp.hour();
                let convergence_score = self.convergence_score(dimensions, hour);
                (convergence_score > threshold).then(|| TimeWindow {
                    timestamp,
                    hour_offset: offset,
                    hour_of_day: hour,
                    convergence_score,
                    intensity: self.intensity.evaluate(&self.registry, hour),
                })
            })
            .collect();

        windows.sort_by(|a, b| {
            b.convergence_score
                .total_cmp(&a.convergence_score)
                .then_with(|| a.timestamp.cmp(&b.timestamp))
        });

        debug!(
            horizon_hours,
            threshold,
            candidates = windows.len(),
            "computed merge windows"
        );
        windows
    }

    /// The top-ranked window, or `NoViableWindow`.
    pub fn best_window(
        &self,
        base: DateTime<Utc>,
        dimensions: &[SignalDimension],
        horizon_hours: i64,
        threshold: f64,
    ) -> Result<TimeWindow, SchedulingError> {
        self.compute_windows(base, dimensions, horizon_hours, threshold)
            .into_iter()
            .next()
            .ok_or(SchedulingError::NoViableWindow {
                threshold,
                horizon_hours,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signals::{HourlyProfile, PeakHours};
    use chrono::TimeZone;

    fn midnight() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 5, 0, 0, 0).unwrap()
    }

    fn flat_blend() -> IntensityBlend {
        IntensityBlend::new(vec![SignalDimension::unit("calm")]).unwrap()
    }

    #[test]
    fn non_positive_horizon_yields_no_windows() {
        let scheduler = WindowScheduler::standard().unwrap();
        let dims = standard::convergence_dimensions();
        assert!(scheduler.compute_windows(midnight(), &dims, 0, 0.0).is_empty());
        assert!(scheduler.compute_windows(midnight(), &dims, -5, 0.0).is_empty());
    }

    #[test]
    fn threshold_is_strict() {
        let registry = SignalRegistry::new().with("load", HourlyProfile::flat(0.5));
        let scheduler = WindowScheduler::new(registry, flat_blend());
        let dims = [SignalDimension::unit("load")];
        assert!(scheduler.compute_windows(midnight(), &dims, 24, 0.5).is_empty());
        assert_eq!(scheduler.compute_windows(midnight(), &dims, 24, 0.49).len(), 24);
    }

    #[test]
    fn ties_break_by_earliest_timestamp() {
        let registry = SignalRegistry::new().with("load", PeakHours::new([2, 5], 1.0, 0.0));
        let scheduler = WindowScheduler::new(registry, flat_blend());
        let dims = [SignalDimension::unit("load")];
        let windows = scheduler.compute_windows(midnight(), &dims, 48, 0.5);
        let offsets: Vec<i64> = windows.iter().map(|w| w.hour_offset).collect();
        assert_eq!(offsets, vec![2, 5, 26, 29]);
    }

    #[test]
    fn unregistered_dimension_contributes_nothing() {
        let registry = SignalRegistry::new().with("load", HourlyProfile::flat(0.6));
        let scheduler = WindowScheduler::new(registry, flat_blend());
        let dims = [SignalDimension::unit("load"), SignalDimension::unit("missing")];
        assert!((scheduler.convergence_score(&dims, 7) - 0.6).abs() < 1e-12);
    }

    #[test]
    fn weights_scale_convergence() {
        let registry = SignalRegistry::new().with("load", HourlyProfile::flat(0.5));
        let scheduler = WindowScheduler::new(registry, flat_blend());
        let dims = [SignalDimension::new("load", 3.0).unwrap()];
        assert!((scheduler.convergence_score(&dims, 0) - 1.5).abs() < 1e-12);
        assert_eq!(WindowScheduler::max_convergence(&dims), 3.0);
    }

    #[test]
    fn invalid_weights_are_rejected() {
        assert!(SignalDimension::new("load", -0.1).is_err());
        assert!(SignalDimension::new("load", f64::INFINITY).is_err());
        let err = IntensityBlend::new(vec![
            SignalDimension::new("a", 0.5).unwrap(),
            SignalDimension::new("b", 0.4).unwrap(),
        ])
        .unwrap_err();
        assert!(matches!(err, SchedulingError::InvalidIntensityWeights { .. }));
    }

    #[test]
    fn standard_set_prefers_early_utc_hours() {
        let scheduler = WindowScheduler::standard().unwrap();
        let dims = standard::convergence_dimensions();
        let windows = scheduler.compute_windows(midnight(), &dims, 24, 3.5);
        let hours: Vec<u32> = windows.iter().map(|w| w.hour_of_day).collect();
        assert_eq!(hours, vec![4, 3, 2, 1]);
        for w in &windows {
            assert!((0.0..=1.0).contains(&w.intensity));
        }
    }

    #[test]
    fn best_window_reports_no_viable_window() {
        let scheduler = WindowScheduler::standard().unwrap();
        let dims = standard::convergence_dimensions();
        let err = scheduler
            .best_window(midnight(), &dims, 168, 5.0)
            .unwrap_err();
        assert!(matches!(err, SchedulingError::NoViableWindow { .. }));
    }
}
