//! Signal models: pure, total functions from hour of day to a score.

mod registry;
pub mod standard;

pub use registry::SignalRegistry;

use confluence_core::constants::HOURS_PER_DAY;

/// One scoring axis (load, stability, traffic, ...).
///
/// Must be deterministic for a given hour. The registry clamps results to
/// [0.0, 1.0], so implementations may be sloppy at the edges.
pub trait SignalModel: Send + Sync {
    fn score(&self, hour: u32) -> f64;
}

impl<F> SignalModel for F
where
    F: Fn(u32) -> f64 + Send + Sync,
{
    fn score(&self, hour: u32) -> f64 {
        self(hour)
    }
}

/// A fixed 24-entry table.
#[derive(Debug, Clone, PartialEq)]
pub struct HourlyProfile {
    scores: [f64; HOURS_PER_DAY as usize],
}

impl HourlyProfile {
    pub fn new(scores: [f64; HOURS_PER_DAY as usize]) -> Self {
        Self { scores }
    }

    /// Same score for every hour.
    pub fn flat(score: f64) -> Self {
        Self {
            scores: [score; HOURS_PER_DAY as usize],
        }
    }
}

impl SignalModel for HourlyProfile {
    fn score(&self, hour: u32) -> f64 {
        self.scores[(hour % HOURS_PER_DAY) as usize]
    }
}

/// `peak` during the listed hours, `baseline` otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct PeakHours {
    hours: Vec<u32>,
    peak: f64,
    baseline: f64,
}

impl PeakHours {
    pub fn new(hours: impl IntoIterator<Item = u32>, peak: f64, baseline: f64) -> Self {
        Self {
            hours: hours.into_iter().map(|h| h % HOURS_PER_DAY).collect(),
            peak,
            baseline,
        }
    }
}

impl SignalModel for PeakHours {
    fn score(&self, hour: u32) -> f64 {
        if self.hours.contains(&(hour % HOURS_PER_DAY)) {
            self.peak
        } else {
            self.baseline
        }
    }
}

/// Smooth daily cycle: 1.0 at `peak_hour`, `baseline` twelve hours away.
///
/// `score = baseline + (1 - baseline) * (1 + cos(2π (hour - peak) / 24)) / 2`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Diurnal {
    peak_hour: u32,
    baseline: f64,
}

impl Diurnal {
    pub fn new(peak_hour: u32, baseline: f64) -> Self {
        Self {
            peak_hour: peak_hour % HOURS_PER_DAY,
            baseline,
        }
    }
}

impl SignalModel for Diurnal {
    fn score(&self, hour: u32) -> f64 {
        let delta = (hour % HOURS_PER_DAY) as f64 - self.peak_hour as f64;
        let phase = 2.0 * std::f64::consts::PI * delta / HOURS_PER_DAY as f64;
        self.baseline + (1.0 - self.baseline) * (1.0 + phase.cos()) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peak_hours_switches_between_peak_and_baseline() {
        let model = PeakHours::new([1, 2, 3], 1.0, 0.3);
        assert_eq!(model.score(2), 1.0);
        assert_eq!(model.score(5), 0.3);
        // Hours wrap.
        assert_eq!(model.score(26), 1.0);
    }

    #[test]
    fn diurnal_peaks_at_peak_hour_and_bottoms_opposite() {
        let model = Diurnal::new(4, 0.2);
        assert!((model.score(4) - 1.0).abs() < 1e-12);
        assert!((model.score(16) - 0.2).abs() < 1e-12);
        assert!(model.score(10) > 0.2 && model.score(10) < 1.0);
    }

    #[test]
    fn closures_are_signal_models() {
        let model = |hour: u32| if hour < 12 { 0.25 } else { 0.75 };
        assert_eq!(model.score(3), 0.25);
        assert_eq!(SignalModel::score(&model, 13), 0.75);
    }

    #[test]
    fn hourly_profile_is_total() {
        let mut table = [0.0; 24];
        table[23] = 0.9;
        let model = HourlyProfile::new(table);
        assert_eq!(model.score(23), 0.9);
        assert_eq!(model.score(47), 0.9);
        assert_eq!(HourlyProfile::flat(0.4).score(11), 0.4);
    }
}
