use std::collections::VecDeque;

use confluence_core::models::ImprovementCycle;

/// Bounded ring of completed cycles. Pushing past capacity evicts the oldest.
#[derive(Debug, Clone)]
pub struct CycleHistory {
    cycles: VecDeque<ImprovementCycle>,
    capacity: usize,
    total_recorded: u64,
}

impl CycleHistory {
    /// A zero capacity is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            cycles: VecDeque::with_capacity(capacity),
            capacity,
            total_recorded: 0,
        }
    }

    pub fn push(&mut self, cycle: ImprovementCycle) {
        if self.cycles.len() == self.capacity {
            self.cycles.pop_front();
        }
        self.cycles.push_back(cycle);
        self.total_recorded += 1;
    }

    /// Look up a retained cycle by number.
    pub fn get(&self, cycle_number: u64) -> Option<&ImprovementCycle> {
        self.cycles.iter().find(|c| c.cycle_number == cycle_number)
    }

    pub fn latest(&self) -> Option<&ImprovementCycle> {
        self.cycles.back()
    }

    pub fn len(&self) -> usize {
        self.cycles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cycles.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &ImprovementCycle> {
        self.cycles.iter()
    }

    /// Cycles ever pushed, including evicted ones.
    pub fn total_recorded(&self) -> u64 {
        self.total_recorded
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use chrono::Utc;
    use confluence_core::models::PerformanceSnapshot;

    use super::*;

    fn cycle(n: u64) -> ImprovementCycle {
        ImprovementCycle {
            cycle_number: n,
            started_at: Utc::now(),
            completed_at: Utc::now(),
            performance_snapshot: PerformanceSnapshot::new("test"),
            opportunities: vec![],
            dropped: vec![],
            applied_improvements: vec![],
            rejected: vec![],
            next_wait: Duration::from_secs(60),
        }
    }

    #[test]
    fn evicts_oldest_past_capacity() {
        let mut history = CycleHistory::new(3);
        for n in 1..=5 {
            history.push(cycle(n));
        }
        assert_eq!(history.len(), 3);
        assert_eq!(history.total_recorded(), 5);
        assert!(history.get(2).is_none());
        assert!(history.get(3).is_some());
        assert_eq!(history.latest().map(|c| c.cycle_number), Some(5));
        let numbers: Vec<u64> = history.iter().map(|c| c.cycle_number).collect();
        assert_eq!(numbers, vec![3, 4, 5]);
    }

    #[test]
    fn zero_capacity_keeps_one() {
        let mut history = CycleHistory::new(0);
        assert_eq!(history.capacity(), 1);
        history.push(cycle(1));
        history.push(cycle(2));
        assert_eq!(history.len(), 1);
        assert_eq!(history.latest().map(|c| c.cycle_number), Some(2));
    }

    #[test]
    fn empty_history() {
        let history = CycleHistory::new(4);
        assert!(history.is_empty());
        assert!(history.latest().is_none());
    }
}
