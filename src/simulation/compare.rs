//! Side-by-side fault counts for every policy.

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::policy::Policy;
use crate::simulation::runner::policy_faults;
use crate::simulation::ReferenceStream;

/// Fault counts for FIFO, LRU and Optimal over the same input.
///
/// Serialises as `fifo_faults`, `lru_faults`, `optimal_faults`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonResult {
    #[serde(rename = "fifo_faults")]
    pub fifo: usize,
    #[serde(rename = "lru_faults")]
    pub lru: usize,
    #[serde(rename = "optimal_faults")]
    pub optimal: usize,
}

impl ComparisonResult {
    /// Run every policy over `stream`, each from fresh frames, and keep only
    /// the fault counts. No frame trace is recorded.
    pub fn collect<P: PartialEq + Clone>(stream: &ReferenceStream<'_, P>) -> Self {
        let faults = |policy| policy_faults(policy, stream);
        let result = Self {
            fifo: faults(Policy::Fifo),
            lru: faults(Policy::Lru),
            optimal: faults(Policy::Optimal),
        };
        debug!("comparison over {} references: {:?}", stream.len(), result);
        result
    }

    pub fn fault_count(&self, policy: Policy) -> usize {
        match policy {
            Policy::Fifo => self.fifo,
            Policy::Lru => self.lru,
            Policy::Optimal => self.optimal,
        }
    }

    /// `(policy, faults)` pairs in [`Policy::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Policy, usize)> + '_ {
        Policy::ALL
            .into_iter()
            .map(move |policy| (policy, self.fault_count(policy)))
    }

    /// Policy with the fewest faults; ties go to the earlier one in
    /// [`Policy::ALL`] order.
    pub fn best(&self) -> Policy {
        let mut best = Policy::Fifo;
        for (policy, faults) in self.iter() {
            if faults < self.fault_count(best) {
                best = policy;
            }
        }
        best
    }
}

impl fmt::Display for ComparisonResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (policy, faults) in self.iter() {
            writeln!(f, "{:<8} {:>6}", policy.name(), faults)?;
        }
        write!(f, "best     {:>6}", self.best().name())
    }
}
