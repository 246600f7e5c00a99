//! Configuration constants for pagesim.

/// Frame count used by the command-line adapter when `--frames` is omitted.
///
/// Three frames is the usual textbook setting: small enough that every policy
/// faults regularly, large enough that the policies disagree.
pub const DEFAULT_FRAME_COUNT: i64 = 3;

/// Longest reference string an adapter will accept.
///
/// The Optimal policy rescans the remaining suffix for every resident page on
/// every full fault, so its cost grows with N²·K. The core itself does not
/// bound N; adapters do, through [`crate::parse_reference_string`].
pub const MAX_REFERENCE_LEN: usize = 4096;

/// Largest frame count a traced simulation will accept.
///
/// Every step of a trace records all `capacity` slots, so the trace costs
/// N·K slots. Fault counting alone ([`crate::compare`]) stores only admitted
/// pages and takes any positive capacity.
pub const MAX_FRAME_COUNT: usize = 1024;

/// How an empty frame slot is rendered in traces.
pub const EMPTY_SLOT_MARKER: &str = "-";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_frame_count_is_positive() {
        assert!(DEFAULT_FRAME_COUNT > 0);
    }

    #[test]
    fn test_trace_size_stays_bounded() {
        let slots = MAX_REFERENCE_LEN as u64 * MAX_FRAME_COUNT as u64;
        assert!(slots <= 1 << 22);
        assert!(DEFAULT_FRAME_COUNT as usize <= MAX_FRAME_COUNT);
    }

    #[test]
    fn test_optimal_worst_case_stays_bounded() {
        // N² · K with the default frame count must fit comfortably in a u64.
        let work = (MAX_REFERENCE_LEN as u64).pow(2) * DEFAULT_FRAME_COUNT as u64;
        assert!(work < 1 << 32);
    }
}
