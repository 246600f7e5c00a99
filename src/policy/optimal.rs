//! Optimal (Belady) replacement policy.
//!
//! Evicts the resident page whose next use lies farthest in the future. This
//! needs the rest of the reference string, so it is only usable offline, as a
//! lower bound for the other policies.

use log::trace;

use crate::policy::{FrameSet, Policy, ResidentQueue};

/// Frames managed with full knowledge of upcoming references.
///
/// Slots are kept in admission order; the victim's slot is vacated and the new
/// page goes to the tail.
#[derive(Debug, Clone)]
pub struct OptimalFrames<P> {
    resident: ResidentQueue<P>,
}

impl<P: PartialEq> OptimalFrames<P> {
    /// Create an empty Optimal frame set.
    pub fn new(capacity: usize) -> Self {
        Self {
            resident: ResidentQueue::new(capacity),
        }
    }
}

impl<P: PartialEq> FrameSet<P> for OptimalFrames<P> {
    const POLICY: Policy = Policy::Optimal;

    fn resident(&self) -> &ResidentQueue<P> {
        &self.resident
    }

    fn on_hit(&mut self, _page: &P) {}

    fn on_fault(&mut self, page: P, upcoming: &[P]) -> Option<P> {
        let victim = if self.resident.is_full() {
            let slot = select_victim(&self.resident, upcoming);
            self.resident.remove_at(slot)
        } else {
            None
        };
        self.resident.push_tail(page);
        victim
    }
}

/// Choose the slot to evict, given the references still to come.
///
/// Resident pages are scanned head to tail:
/// - a page that never appears in `upcoming` is returned at once;
/// - otherwise the page with the largest next-use index wins, and on equal
///   distance the earlier slot is kept.
///
/// Slot 0 is the candidate until something farther is seen, so a slot is
/// always returned for a non-empty queue.
pub fn select_victim<P: PartialEq>(resident: &ResidentQueue<P>, upcoming: &[P]) -> usize {
    let mut victim = 0;
    let mut farthest: Option<usize> = None;

    for (slot, page) in resident.iter().enumerate() {
        match upcoming.iter().position(|p| p == page) {
            None => {
                trace!("optimal: slot {} is never referenced again", slot);
                return slot;
            }
            Some(next_use) => {
                if farthest.map_or(true, |best| next_use > best) {
                    farthest = Some(next_use);
                    victim = slot;
                }
            }
        }
    }

    trace!(
        "optimal: slot {} has the farthest next use ({:?})",
        victim,
        farthest
    );
    victim
}
