//! pagesim - A page replacement policy simulator.
//!
//! Runs a reference string through FIFO, LRU or Optimal replacement over a
//! fixed number of frames and reports every step: hit or fault, the frame
//! contents afterwards, and the page evicted, if any. A comparison mode runs
//! all three on the same input and reports fault counts side by side.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │          Entry points (simulate / compare)              │   │
//! │  │      input validation → ReferenceStream                  │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │             Simulation loop (simulation/)               │   │
//! │  │   hit/fault → FrameSet update → FrameState snapshot     │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │          Replacement policies (policy/)                 │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │          FIFO  |  LRU  |  Optimal               │   │   │
//! │  │   │      (selected by Policy at runtime)            │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  │                 ResidentQueue                           │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (Error, PageRef, config)
//! - [`policy`] - Replacement policies and the frame containers they manage
//! - [`simulation`] - The step loop, snapshots, results and comparison
//!
//! # Quick Start
//! ```
//! use pagesim::{compare, simulate, Policy};
//!
//! let pages = [7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2];
//!
//! let result = simulate(Policy::Lru, &pages, 4).unwrap();
//! for step in result.steps() {
//!     println!("{}", step);
//! }
//!
//! let faults = compare(&pages, 4).unwrap();
//! assert_eq!(faults.optimal, 6);
//! ```

pub mod common;
pub mod policy;
pub mod simulation;

// Re-export commonly used items at crate root for convenience
pub use common::config::{DEFAULT_FRAME_COUNT, MAX_FRAME_COUNT, MAX_REFERENCE_LEN};
pub use common::{
    load_reference_file, parse_reference_string, Error, InvalidInput, PageRef, Result,
};

pub use policy::{FrameSet, Policy};
pub use simulation::{
    compare, count_faults, run, simulate, simulate_named, ComparisonResult, FrameState, Outcome, ReferenceStream,
    SimulationResult, SimulationStats, StepResult,
};
