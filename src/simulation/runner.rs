//! The simulation loop shared by every policy.

use log::debug;

use crate::common::config::MAX_FRAME_COUNT;
use crate::common::{InvalidInput, Result};
use crate::policy::{FifoFrames, FrameSet, LruFrames, OptimalFrames, Policy};
use crate::simulation::{FrameState, Outcome, ReferenceStream, SimulationResult, StepResult};

/// Drive `stream` through `policy` with a full trace, starting from empty
/// frames.
///
/// Each call builds its own frame set; nothing is shared between runs.
pub(crate) fn run_policy<P>(
    policy: Policy,
    stream: &ReferenceStream<'_, P>,
) -> Result<SimulationResult<P>>
where
    P: PartialEq + Clone,
{
    let capacity = stream.capacity();
    match policy {
        Policy::Fifo => run(FifoFrames::new(capacity), stream),
        Policy::Lru => run(LruFrames::new(capacity), stream),
        Policy::Optimal => run(OptimalFrames::new(capacity), stream),
    }
}

/// Fault count of `policy` over `stream`, without recording a trace.
pub(crate) fn policy_faults<P>(policy: Policy, stream: &ReferenceStream<'_, P>) -> usize
where
    P: PartialEq + Clone,
{
    let capacity = stream.capacity();
    match policy {
        Policy::Fifo => count_faults(FifoFrames::new(capacity), stream),
        Policy::Lru => count_faults(LruFrames::new(capacity), stream),
        Policy::Optimal => count_faults(OptimalFrames::new(capacity), stream),
    }
}

/// Drive `stream` through a frame set, recording every step.
///
/// The result is labelled with `F::POLICY`.
///
/// # Errors
/// `InvalidInput::TooManyFrames` if the frame set is wider than
/// [`MAX_FRAME_COUNT`]; each step records every slot.
pub fn run<P, F>(mut frames: F, stream: &ReferenceStream<'_, P>) -> Result<SimulationResult<P>>
where
    P: PartialEq + Clone,
    F: FrameSet<P>,
{
    let capacity = frames.resident().capacity();
    if capacity > MAX_FRAME_COUNT {
        return Err(InvalidInput::TooManyFrames {
            count: capacity,
            limit: MAX_FRAME_COUNT,
        }
        .into());
    }

    let mut steps = Vec::with_capacity(stream.len());
    let (faults, hits) = drive(&mut frames, stream, |index, page, outcome, evicted, frames| {
        steps.push(StepResult {
            index,
            page: page.clone(),
            outcome,
            frames: FrameState::capture(frames.resident()),
            evicted,
        });
    });

    Ok(SimulationResult {
        policy: F::POLICY,
        capacity,
        faults,
        hits,
        steps,
    })
}

/// Drive `stream` through a frame set and return only the fault count.
///
/// Memory use is bounded by the pages admitted, so any capacity is accepted.
pub fn count_faults<P, F>(mut frames: F, stream: &ReferenceStream<'_, P>) -> usize
where
    P: PartialEq + Clone,
    F: FrameSet<P>,
{
    let (faults, _) = drive(&mut frames, stream, |_, _, _, _, _| {});
    faults
}

/// For each reference, in order:
/// 1. classify it as a hit or a fault by membership;
/// 2. apply the frame set's update (`on_hit` or `on_fault`);
/// 3. hand the step to `observe`, with the frames as they are afterwards.
///
/// Returns `(faults, hits)`.
fn drive<P, F>(
    frames: &mut F,
    stream: &ReferenceStream<'_, P>,
    mut observe: impl FnMut(usize, &P, Outcome, Option<P>, &F),
) -> (usize, usize)
where
    P: PartialEq + Clone,
    F: FrameSet<P>,
{
    let mut faults = 0;
    let mut hits = 0;

    for (index, page) in stream.pages().iter().enumerate() {
        let (outcome, evicted) = if frames.contains(page) {
            hits += 1;
            frames.on_hit(page);
            (Outcome::Hit, None)
        } else {
            faults += 1;
            let evicted = frames.on_fault(page.clone(), stream.upcoming(index));
            (Outcome::Fault, evicted)
        };
        observe(index, page, outcome, evicted, frames);
    }

    debug!(
        "{} over {} references with {} frames: {} faults, {} hits",
        F::POLICY,
        stream.len(),
        stream.capacity(),
        faults,
        hits
    );
    (faults, hits)
}
