use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use confluence_core::cancellation::{Cancellable, CancellationToken};
use confluence_core::config::ImprovementConfig;
use confluence_core::errors::{ConfigError, ConfluenceError, ConfluenceResult};
use confluence_core::models::{
    DroppedOpportunity, Improvement, ImprovementCycle, Opportunity, RejectedImprovement,
};
use confluence_core::traits::{IDeployer, IPerformanceProbe, IValidationHarness};
use confluence_observability::improvement_cycle_span;
use confluence_observability::tracing_setup::events;
use confluence_observability::ImprovementMetricsCollector;
use confluence_scheduling::{suspend_for, DecayingInterval};

use crate::detectors::{standard_detectors, OpportunityDetector};
use crate::generators;
use crate::history::CycleHistory;
use crate::ledger::LearningLedger;
use crate::ranking::{self, Ranked};

/// The continuous improvement loop.
///
/// Each cycle: snapshot → detect → rank → generate → validate → deploy →
/// learn, then suspend for a decaying interval. Cycles never overlap; the
/// loop owns its state and runs until its token is cancelled.
pub struct ImprovementLoop<P, V, D> {
    probe: P,
    harness: V,
    deployer: D,
    detectors: Vec<Box<dyn OpportunityDetector>>,
    cadence: DecayingInterval,
    top_k: usize,
    cycle: u64,
    ledger: LearningLedger,
    history: Arc<RwLock<CycleHistory>>,
    metrics: Arc<RwLock<ImprovementMetricsCollector>>,
}

/// Read-only view of a running loop's history and metrics.
#[derive(Clone)]
pub struct LoopHandle {
    history: Arc<RwLock<CycleHistory>>,
    metrics: Arc<RwLock<ImprovementMetricsCollector>>,
}

impl LoopHandle {
    pub fn latest(&self) -> Option<ImprovementCycle> {
        read(&self.history).latest().cloned()
    }

    pub fn cycle(&self, cycle_number: u64) -> Option<ImprovementCycle> {
        read(&self.history).get(cycle_number).cloned()
    }

    /// Retained cycles, oldest first.
    pub fn history(&self) -> Vec<ImprovementCycle> {
        read(&self.history).iter().cloned().collect()
    }

    pub fn total_recorded(&self) -> u64 {
        read(&self.history).total_recorded()
    }

    pub fn metrics(&self) -> ImprovementMetricsCollector {
        read(&self.metrics).clone()
    }
}

impl<P, V, D> ImprovementLoop<P, V, D>
where
    P: IPerformanceProbe,
    V: IValidationHarness,
    D: IDeployer,
{
    /// Fails when `config` does not pass [`ImprovementConfig::validate`].
    pub fn new(
        probe: P,
        harness: V,
        deployer: D,
        config: &ImprovementConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            probe,
            harness,
            deployer,
            detectors: standard_detectors(),
            cadence: DecayingInterval::from_config(config)?,
            top_k: config.top_k,
            cycle: 0,
            ledger: LearningLedger::new(),
            history: Arc::new(RwLock::new(CycleHistory::new(config.history_capacity))),
            metrics: Arc::new(RwLock::new(ImprovementMetricsCollector::new())),
        })
    }

    /// Replace the standard detector set. Order is discovery order.
    pub fn with_detectors(mut self, detectors: Vec<Box<dyn OpportunityDetector>>) -> Self {
        self.detectors = detectors;
        self
    }

    pub fn handle(&self) -> LoopHandle {
        LoopHandle {
            history: Arc::clone(&self.history),
            metrics: Arc::clone(&self.metrics),
        }
    }

    /// Cycles started so far, including ones whose probe failed.
    pub fn cycle_count(&self) -> u64 {
        self.cycle
    }

    pub fn ledger(&self) -> &LearningLedger {
        &self.ledger
    }

    pub fn cadence(&self) -> DecayingInterval {
        self.cadence
    }

    /// Run exactly one cycle, without the trailing suspension.
    ///
    /// Only a probe failure returns `Err`: the cycle number is still
    /// consumed but nothing is written to history. Rejected and failed
    /// candidates are part of a successful cycle.
    pub fn run_cycle(&mut self) -> ConfluenceResult<ImprovementCycle> {
        self.cycle += 1;
        let cycle_number = self.cycle;
        let span = improvement_cycle_span!(cycle_number);
        let _entered = span.enter();
        let started_at = Utc::now();

        let snapshot = match self.probe.snapshot() {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(cycle = cycle_number, error = %e, "performance probe failed");
                write(&self.metrics).record_probe_failure();
                return Err(e);
            }
        };

        let found: Vec<Opportunity> = self
            .detectors
            .iter()
            .flat_map(|detector| detector.detect(&snapshot))
            .collect();
        debug!(found = found.len(), "opportunities detected");

        let Ranked {
            retained,
            mut dropped,
        } = ranking::rank(found, &self.ledger, self.top_k);
        for d in &dropped {
            events::opportunity_dropped(&d.opportunity.component, d.opportunity.kind.as_str(), &d.reason);
        }

        let mut candidates = Vec::with_capacity(retained.len());
        for opportunity in &retained {
            match generators::generate(opportunity) {
                Ok(candidate) => candidates.push(candidate),
                Err(reason) => {
                    events::opportunity_dropped(&opportunity.component, opportunity.kind.as_str(), &reason);
                    dropped.push(DroppedOpportunity {
                        opportunity: opportunity.clone(),
                        reason,
                    });
                }
            }
        }

        let mut applied = Vec::new();
        let mut rejected = Vec::new();
        for candidate in candidates {
            match self.apply(candidate) {
                Ok(improvement) => applied.push(improvement),
                Err(r) => rejected.push(r),
            }
        }

        let cycle = ImprovementCycle {
            cycle_number,
            started_at,
            completed_at: Utc::now(),
            performance_snapshot: snapshot,
            opportunities: retained,
            dropped,
            applied_improvements: applied,
            rejected,
            next_wait: self.cadence.wait_for_cycle(cycle_number),
        };

        write(&self.history).push(cycle.clone());
        write(&self.metrics).record(&cycle);
        events::cycle_completed(
            cycle_number,
            cycle.applied_improvements.len(),
            cycle.rejected.len(),
            cycle.next_wait.as_secs_f64(),
        );
        Ok(cycle)
    }

    /// Validate then deploy one candidate. Validation verdicts feed the
    /// ledger; harness and deployer failures do not.
    fn apply(&mut self, candidate: Improvement) -> Result<Improvement, RejectedImprovement> {
        let verdict = match self.harness.validate(&candidate) {
            Ok(verdict) => verdict,
            Err(e) => return Err(reject(candidate, format!("validation harness failed: {e}"))),
        };
        self.ledger.record(&candidate.kind, verdict.accepted);
        if !verdict.accepted {
            return Err(reject(candidate, verdict.reason));
        }

        match self.deployer.deploy(&candidate) {
            Ok(ack) => {
                debug!(candidate_id = %ack.candidate_id, deployed_at = %ack.deployed_at, "candidate deployed");
                Ok(candidate)
            }
            Err(e) => Err(reject(candidate, format!("deployment failed: {e}"))),
        }
    }

    /// Run cycles until `token` is cancelled. Returns the number of cycles
    /// started.
    ///
    /// A failed cycle is logged and followed by the regular wait for its
    /// cycle number. Cancellation is checked before each cycle and ends the
    /// suspension between cycles immediately.
    pub async fn run(&mut self, token: &CancellationToken) -> u64 {
        info!(
            base_secs = self.cadence.base().as_secs_f64(),
            floor_secs = self.cadence.floor().as_secs_f64(),
            top_k = self.top_k,
            "improvement loop started"
        );
        while !token.is_cancelled() {
            let wait = match self.run_cycle() {
                Ok(cycle) => cycle.next_wait,
                Err(ConfluenceError::Cancelled) => break,
                Err(e) => {
                    warn!(cycle = self.cycle, error = %e, "improvement cycle failed");
                    self.cadence.wait_for_cycle(self.cycle)
                }
            };
            if suspend_for(wait, token).await.is_err() {
                break;
            }
        }
        info!(cycles = self.cycle, "improvement loop stopped");
        self.cycle
    }
}

impl<P, V, D> ImprovementLoop<P, V, D>
where
    P: IPerformanceProbe + 'static,
    V: IValidationHarness + 'static,
    D: IDeployer + 'static,
{
    /// Run on a tokio task. The task resolves to the cycle count once
    /// `token` is cancelled.
    pub fn spawn(mut self, token: CancellationToken) -> JoinHandle<u64> {
        tokio::spawn(async move { self.run(&token).await })
    }
}

fn reject(improvement: Improvement, reason: String) -> RejectedImprovement {
    events::candidate_rejected(&improvement.id, improvement.kind.as_str(), &reason);
    RejectedImprovement {
        improvement,
        reason,
    }
}

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(|e| e.into_inner())
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(|e| e.into_inner())
}
