//! Frame occupancy snapshots.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::common::config::EMPTY_SLOT_MARKER;
use crate::policy::ResidentQueue;

/// Contents of every frame slot at one point in a simulation.
///
/// Always exactly `capacity` slots long: resident pages first in the policy's
/// slot order, then `None` for each free frame. A snapshot owns its pages, so
/// later steps cannot change it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrameState<P> {
    slots: Vec<Option<P>>,
}

impl<P: Clone + PartialEq> FrameState<P> {
    /// Copy the resident pages, padded with empty slots up to capacity.
    pub fn capture(resident: &ResidentQueue<P>) -> Self {
        let capacity = resident.capacity();
        let mut slots: Vec<Option<P>> = Vec::with_capacity(capacity);
        slots.extend(resident.iter().cloned().map(Some));
        slots.resize(capacity, None);
        Self { slots }
    }
}

impl<P> FrameState<P> {
    pub fn slots(&self) -> &[Option<P>] {
        &self.slots
    }

    /// Number of slots; equals the frame capacity.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of occupied slots.
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Resident pages, in slot order.
    pub fn pages(&self) -> impl Iterator<Item = &P> + '_ {
        self.slots.iter().flatten()
    }
}

impl<P: fmt::Display> fmt::Display for FrameState<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match slot {
                Some(page) => write!(f, "{}", page)?,
                None => f.write_str(EMPTY_SLOT_MARKER)?,
            }
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_pads_to_capacity() {
        let mut resident = ResidentQueue::new(4);
        resident.push_tail(7);
        resident.push_tail(0);

        let state = FrameState::capture(&resident);
        assert_eq!(state.len(), 4);
        assert_eq!(state.occupied(), 2);
        assert_eq!(state.slots(), &[Some(7), Some(0), None, None]);
    }

    #[test]
    fn test_capture_is_independent_copy() {
        let mut resident = ResidentQueue::new(2);
        resident.push_tail(1);
        let before = FrameState::capture(&resident);

        resident.push_tail(2);
        resident.pop_head();

        assert_eq!(before.slots(), &[Some(1), None]);
        assert_eq!(FrameState::capture(&resident).slots(), &[Some(2), None]);
    }

    #[test]
    fn test_display() {
        let mut resident = ResidentQueue::new(3);
        resident.push_tail(4);
        resident.push_tail(2);

        let state = FrameState::capture(&resident);
        assert_eq!(format!("{}", state), "[4 2 -]");
        assert_eq!(state.pages().copied().collect::<Vec<_>>(), vec![4, 2]);
    }
}
