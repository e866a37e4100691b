//! Statistics collector and the final simulation report.

use serde::{Deserialize, Serialize};

use crate::models::agent::AgentPool;

/// Running counters accumulated while events dispatch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsCollector {
    total_calls: u64,
    abandoned_calls: u64,
}

impl StatsCollector {
    /// Create a collector with zeroed counters
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one processed arrival
    pub fn record_arrival(&mut self) {
        self.total_calls += 1;
    }

    /// Count one abandoned call
    pub fn record_abandonment(&mut self) {
        self.abandoned_calls += 1;
    }

    /// Arrivals processed so far
    pub fn total_calls(&self) -> u64 {
        self.total_calls
    }

    /// Abandonments counted so far
    pub fn abandoned_calls(&self) -> u64 {
        self.abandoned_calls
    }

    /// Build the final report
    ///
    /// Utilization is the pool's reserved busy minutes over the total
    /// agent-minutes available in the horizon. Because busy time is
    /// reserved at assignment, a service interval running past the
    /// horizon still counts in full — the value can exceed 1.0 and is
    /// intentionally not clamped, so such a configuration is surfaced
    /// rather than hidden.
    pub fn finish(&self, pool: &AgentPool, horizon: u64) -> SimulationReport {
        let capacity = (pool.len() as u64) * horizon;
        let utilization = pool.total_busy_minutes() as f64 / capacity as f64;

        SimulationReport {
            total_calls: self.total_calls,
            abandoned_calls: self.abandoned_calls,
            utilization,
        }
    }
}

/// Aggregate outcome of one simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Calls whose arrival was processed before the horizon
    pub total_calls: u64,

    /// Calls that left the wait queue without service
    pub abandoned_calls: u64,

    /// Reserved agent-minutes over available agent-minutes
    pub utilization: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_accumulate() {
        let mut stats = StatsCollector::new();
        stats.record_arrival();
        stats.record_arrival();
        stats.record_abandonment();

        assert_eq!(stats.total_calls(), 2);
        assert_eq!(stats.abandoned_calls(), 1);
    }

    #[test]
    fn test_utilization_over_pool_capacity() {
        let mut pool = AgentPool::new(2);
        pool.agent_mut(0).begin_call(30).unwrap();
        pool.agent_mut(1).begin_call(10).unwrap();

        let report = StatsCollector::new().finish(&pool, 100);
        // 40 busy minutes over 2 agents * 100 minutes
        assert!((report.utilization - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_utilization_not_clamped_above_one() {
        let mut pool = AgentPool::new(1);
        pool.agent_mut(0).begin_call(50).unwrap();

        let report = StatsCollector::new().finish(&pool, 10);
        assert!((report.utilization - 5.0).abs() < 1e-12);
    }
}
