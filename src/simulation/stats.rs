//! Simulation summary statistics.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Aggregate counts for one simulation run.
///
/// `faults + hits` is the number of references simulated. `evictions` counts
/// faults that displaced a resident page; the first `capacity` distinct pages
/// fault without evicting anything.
///
/// # Example
/// ```
/// use pagesim::{simulate, Policy};
///
/// let result = simulate(Policy::Lru, &[1, 2, 1, 3], 2).unwrap();
/// let stats = result.stats();
/// assert_eq!(stats.faults, 3);
/// assert_eq!(stats.hits, 1);
/// assert_eq!(stats.evictions, 1);
/// println!("{}", stats);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SimulationStats {
    pub faults: usize,
    pub hits: usize,
    pub evictions: usize,
}

impl SimulationStats {
    /// Number of references simulated.
    pub fn references(&self) -> usize {
        self.faults + self.hits
    }

    /// Fraction of references that hit (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        let total = self.references();
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Fraction of references that faulted (0.0 to 1.0).
    pub fn fault_rate(&self) -> f64 {
        let total = self.references();
        if total == 0 {
            0.0
        } else {
            self.faults as f64 / total as f64
        }
    }
}

impl fmt::Display for SimulationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ faults: {}, hits: {}, evictions: {}, hit_rate: {:.2}% }}",
            self.faults,
            self.hits,
            self.evictions,
            self.hit_rate() * 100.0
        )
    }
}
