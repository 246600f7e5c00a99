//! Simulation driver and results.
//!
//! # Components
//! - [`ReferenceStream`] - Validated reference string + frame capacity
//! - [`FrameState`] - Snapshot of every frame slot after a step
//! - [`run`] / [`count_faults`] - The step loop shared by every policy
//! - [`SimulationResult`] / [`StepResult`] - Per-step trace and counts
//! - [`ComparisonResult`] - Fault counts for every policy on one input
//! - [`SimulationStats`] - Summary counts and rates
//!
//! [`simulate`], [`simulate_named`] and [`compare`] are the entry points
//! adapters call.

mod compare;
mod recorder;
mod result;
mod runner;
mod stats;
mod stream;

pub use compare::ComparisonResult;
pub use recorder::FrameState;
pub use result::{Outcome, SimulationResult, StepResult};
pub use runner::{count_faults, run};
pub use stats::SimulationStats;
pub use stream::ReferenceStream;

use crate::common::Result;
use crate::policy::Policy;
use runner::run_policy;

/// Simulate one policy over a reference string.
///
/// # Errors
/// `Error::InvalidInput` if `pages` is empty, `capacity <= 0`, or `capacity`
/// exceeds [`MAX_FRAME_COUNT`](crate::common::config::MAX_FRAME_COUNT). No
/// simulation state is built in that case.
///
/// # Example
/// ```
/// use pagesim::{simulate, Policy};
///
/// let pages = [7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2];
/// let result = simulate(Policy::Optimal, &pages, 4).unwrap();
/// assert_eq!(result.fault_count(), 6);
/// assert_eq!(result.hit_count(), 7);
/// ```
pub fn simulate<P>(policy: Policy, pages: &[P], capacity: i64) -> Result<SimulationResult<P>>
where
    P: PartialEq + Clone,
{
    let stream = ReferenceStream::new(pages, capacity)?;
    run_policy(policy, &stream)
}

/// Like [`simulate`], with the policy given by name (`"FIFO"`, `"LRU"`,
/// `"Optimal"`, any case).
///
/// # Errors
/// `Error::InvalidInput` for an unknown policy name, in addition to the
/// checks [`simulate`] makes.
pub fn simulate_named<P>(policy: &str, pages: &[P], capacity: i64) -> Result<SimulationResult<P>>
where
    P: PartialEq + Clone,
{
    let policy: Policy = policy.parse()?;
    simulate(policy, pages, capacity)
}

/// Fault counts of every policy over the same reference string.
///
/// Only fault counts are kept, so there is no upper bound on `capacity`.
///
/// # Errors
/// `Error::InvalidInput` if `pages` is empty or `capacity <= 0`.
///
/// # Example
/// ```
/// use pagesim::compare;
///
/// let result = compare(&["A", "B", "C", "A", "D", "B"], 3).unwrap();
/// assert!(result.optimal <= result.fifo);
/// assert!(result.optimal <= result.lru);
/// ```
pub fn compare<P>(pages: &[P], capacity: i64) -> Result<ComparisonResult>
where
    P: PartialEq + Clone,
{
    let stream = ReferenceStream::new(pages, capacity)?;
    Ok(ComparisonResult::collect(&stream))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::InvalidInput;

    #[test]
    fn test_simulate_named() {
        let result = simulate_named("lru", &[1, 2, 1], 2).unwrap();
        assert_eq!(result.policy(), Policy::Lru);
        assert_eq!(result.hit_count(), 1);
    }

    #[test]
    fn test_simulate_named_rejects_unknown_policy() {
        let err = simulate_named("MRU", &[1, 2, 1], 2).unwrap_err();
        assert_eq!(err.reason(), &InvalidInput::UnknownPolicy("MRU".into()));
    }

    #[test]
    fn test_simulate_rejects_untraceable_capacity() {
        use crate::common::config::MAX_FRAME_COUNT;

        let err = simulate(Policy::Fifo, &[1u32, 2, 1], i64::MAX).unwrap_err();
        assert!(matches!(err.reason(), InvalidInput::TooManyFrames { .. }));

        let err = simulate(Policy::Lru, &[1u32], MAX_FRAME_COUNT as i64 + 1).unwrap_err();
        assert!(matches!(err.reason(), InvalidInput::TooManyFrames { .. }));

        let result = simulate(Policy::Lru, &[1u32], MAX_FRAME_COUNT as i64).unwrap();
        assert_eq!(result.states().next().map(|s| s.len()), Some(MAX_FRAME_COUNT));
    }

    #[test]
    fn test_compare_accepts_oversized_capacity() {
        let result = compare(&[1u32, 2, 1], 1 << 40).unwrap();
        assert_eq!(result.fifo, 2);
        assert_eq!(result.optimal, 2);
    }

    #[test]
    fn test_compare_rejects_bad_input() {
        let empty: [u8; 0] = [];
        assert!(compare(&empty, 3).is_err());
        assert!(compare(&[1], 0).is_err());
        assert!(compare(&[1], -1).is_err());
    }
}
