//! The standard signal set for merge scheduling.
//!
//! Five convergence dimensions, each weight 1.0, so the maximum achievable
//! convergence score is 5.0. The default threshold of 3.5 admits only the
//! early-UTC hours where load, energy, and traffic troughs line up.
//!
//! The intensity blend reads five separate signals with weights
//! 0.15 / 0.25 / 0.30 / 0.20 / 0.10 (sum 1.0).

use confluence_core::errors::SchedulingError;

use super::{Diurnal, PeakHours, SignalRegistry};
use crate::scheduler::{IntensityBlend, SignalDimension};

pub const COMPUTE_CAPACITY: &str = "compute_capacity";
pub const ENERGY_EFFICIENCY: &str = "energy_efficiency";
pub const NETWORK_HEADROOM: &str = "network_headroom";
pub const OPERATOR_ATTENTION: &str = "operator_attention";
pub const ADOPTION_READINESS: &str = "adoption_readiness";

pub const PLATFORM_STABILITY: &str = "platform_stability";
pub const TRAFFIC_QUIETNESS: &str = "traffic_quietness";
pub const CAPACITY_HEADROOM: &str = "capacity_headroom";
pub const DEPLOY_READINESS: &str = "deploy_readiness";
pub const TEAM_AVAILABILITY: &str = "team_availability";

/// Low global load hours (UTC).
const LOW_LOAD_HOURS: [u32; 7] = [1, 2, 3, 4, 13, 14, 22];
const BUSINESS_HOURS: std::ops::RangeInclusive<u32> = 9..=17;

/// Registry holding every standard convergence and intensity signal.
pub fn registry() -> SignalRegistry {
    SignalRegistry::new()
        .with(COMPUTE_CAPACITY, PeakHours::new(LOW_LOAD_HOURS, 1.0, 0.3))
        .with(ENERGY_EFFICIENCY, Diurnal::new(3, 0.2))
        .with(NETWORK_HEADROOM, Diurnal::new(4, 0.3))
        .with(OPERATOR_ATTENTION, PeakHours::new(BUSINESS_HOURS, 0.9, 0.2))
        .with(ADOPTION_READINESS, Diurnal::new(6, 0.4))
        .with(PLATFORM_STABILITY, Diurnal::new(2, 0.5))
        .with(TRAFFIC_QUIETNESS, Diurnal::new(4, 0.1))
        .with(CAPACITY_HEADROOM, PeakHours::new(LOW_LOAD_HOURS, 0.9, 0.4))
        .with(DEPLOY_READINESS, PeakHours::new(8..=11, 1.0, 0.5))
        .with(TEAM_AVAILABILITY, PeakHours::new(BUSINESS_HOURS, 1.0, 0.1))
}

/// The five convergence dimensions, weight 1.0 each.
pub fn convergence_dimensions() -> Vec<SignalDimension> {
    [
        COMPUTE_CAPACITY,
        ENERGY_EFFICIENCY,
        NETWORK_HEADROOM,
        OPERATOR_ATTENTION,
        ADOPTION_READINESS,
    ]
    .into_iter()
    .map(SignalDimension::unit)
    .collect()
}

/// The standard intensity blend.
pub fn intensity_blend() -> Result<IntensityBlend, SchedulingError> {
    IntensityBlend::new(vec![
        SignalDimension::new(PLATFORM_STABILITY, 0.15)?,
        SignalDimension::new(TRAFFIC_QUIETNESS, 0.25)?,
        SignalDimension::new(CAPACITY_HEADROOM, 0.30)?,
        SignalDimension::new(DEPLOY_READINESS, 0.20)?,
        SignalDimension::new(TEAM_AVAILABILITY, 0.10)?,
    ])
}
