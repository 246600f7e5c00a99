//! FIFO (First-In-First-Out) replacement policy.

use crate::policy::{FrameSet, Policy, ResidentQueue};

/// Frames managed in strict admission order.
///
/// Evicts the page that was admitted earliest. Hits do not reorder anything,
/// which is what separates FIFO from LRU.
#[derive(Debug, Clone)]
pub struct FifoFrames<P> {
    /// Resident pages in admission order (head = oldest).
    resident: ResidentQueue<P>,
}

impl<P: PartialEq> FifoFrames<P> {
    /// Create an empty FIFO frame set.
    pub fn new(capacity: usize) -> Self {
        Self {
            resident: ResidentQueue::new(capacity),
        }
    }
}

impl<P: PartialEq> FrameSet<P> for FifoFrames<P> {
    const POLICY: Policy = Policy::Fifo;

    fn resident(&self) -> &ResidentQueue<P> {
        &self.resident
    }

    fn on_hit(&mut self, _page: &P) {}

    fn on_fault(&mut self, page: P, _upcoming: &[P]) -> Option<P> {
        let victim = if self.resident.is_full() {
            self.resident.pop_head()
        } else {
            None
        };
        self.resident.push_tail(page);
        victim
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admit(frames: &mut FifoFrames<u32>, page: u32) -> Option<u32> {
        frames.on_fault(page, &[])
    }

    #[test]
    fn test_fifo_basic() {
        let mut frames = FifoFrames::new(3);

        assert_eq!(admit(&mut frames, 0), None);
        assert_eq!(admit(&mut frames, 1), None);
        assert_eq!(admit(&mut frames, 2), None);

        // Should evict in FIFO order
        assert_eq!(admit(&mut frames, 3), Some(0));
        assert_eq!(admit(&mut frames, 4), Some(1));
        assert_eq!(admit(&mut frames, 5), Some(2));
    }

    #[test]
    fn test_fifo_hit_no_reorder() {
        let mut frames = FifoFrames::new(2);

        admit(&mut frames, 0);
        admit(&mut frames, 1);
        frames.on_hit(&0); // Hit - should NOT reorder

        // FIFO: page 0 was first, should be evicted first
        assert_eq!(admit(&mut frames, 2), Some(0));
        assert_eq!(admit(&mut frames, 3), Some(1));
    }

    #[test]
    fn test_fifo_slot_order() {
        let mut frames = FifoFrames::new(3);
        for page in [7, 0, 1, 2] {
            admit(&mut frames, page);
        }

        let slots: Vec<u32> = frames.resident().iter().copied().collect();
        assert_eq!(slots, vec![0, 1, 2]);
    }
}
