//! Simulation output types.

use std::fmt;

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use crate::policy::Policy;
use crate::simulation::{FrameState, SimulationStats};

/// Whether a reference found its page resident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Hit,
    Fault,
}

impl Outcome {
    pub fn is_hit(&self) -> bool {
        matches!(self, Outcome::Hit)
    }

    pub fn is_fault(&self) -> bool {
        matches!(self, Outcome::Fault)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Hit => f.pad("Hit"),
            Outcome::Fault => f.pad("Fault"),
        }
    }
}

/// One simulated reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepResult<P> {
    /// Zero-based position in the reference string.
    pub index: usize,

    /// The page referenced.
    pub page: P,

    pub outcome: Outcome,

    /// Frame contents after this step's policy update.
    pub frames: FrameState<P>,

    /// Page displaced by this step, if it faulted on a full frame set.
    pub evicted: Option<P>,
}

impl<P: fmt::Display> fmt::Display for StepResult<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>4}  {:>6}  {:<5}  {}",
            self.index + 1,
            self.page,
            self.outcome,
            self.frames
        )?;
        if let Some(victim) = &self.evicted {
            write!(f, "  evicted {}", victim)?;
        }
        Ok(())
    }
}

/// The full trace and counts for one policy over one reference string.
///
/// Invariants, upheld by the runner:
/// - `fault_count() + hit_count() == steps().len()`
/// - every `FrameState` has `capacity()` slots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationResult<P> {
    pub(crate) policy: Policy,
    pub(crate) capacity: usize,
    pub(crate) faults: usize,
    pub(crate) hits: usize,
    pub(crate) steps: Vec<StepResult<P>>,
}

impl<P> SimulationResult<P> {
    pub fn policy(&self) -> Policy {
        self.policy
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn fault_count(&self) -> usize {
        self.faults
    }

    pub fn hit_count(&self) -> usize {
        self.hits
    }

    pub fn steps(&self) -> &[StepResult<P>] {
        &self.steps
    }

    /// Frame snapshots, one per step.
    pub fn states(&self) -> impl Iterator<Item = &FrameState<P>> + '_ {
        self.steps.iter().map(|step| &step.frames)
    }

    /// Hit/fault classification, one per step.
    pub fn outcomes(&self) -> impl Iterator<Item = Outcome> + '_ {
        self.steps.iter().map(|step| step.outcome)
    }

    /// Pages evicted, in eviction order.
    pub fn evictions(&self) -> impl Iterator<Item = &P> + '_ {
        self.steps.iter().filter_map(|step| step.evicted.as_ref())
    }

    pub fn stats(&self) -> SimulationStats {
        SimulationStats {
            faults: self.faults,
            hits: self.hits,
            evictions: self.evictions().count(),
        }
    }
}

/// Wire shape: `policy`, `frames`, `faults`, `hits`, `states`, `results`.
///
/// `states` lists the frame snapshots and `results` the outcomes as parallel
/// arrays, which is what the visualisation front end consumes.
impl<P: Serialize> Serialize for SimulationResult<P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let states: Vec<&FrameState<P>> = self.states().collect();
        let results: Vec<Outcome> = self.outcomes().collect();

        let mut s = serializer.serialize_struct("SimulationResult", 6)?;
        s.serialize_field("policy", &self.policy)?;
        s.serialize_field("frames", &self.capacity)?;
        s.serialize_field("faults", &self.faults)?;
        s.serialize_field("hits", &self.hits)?;
        s.serialize_field("states", &states)?;
        s.serialize_field("results", &results)?;
        s.end()
    }
}
