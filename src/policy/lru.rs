//! LRU (Least Recently Used) replacement policy.

use crate::policy::{FrameSet, Policy, ResidentQueue};

/// Frames ordered by recency of use.
///
/// The head is the least recently used page. A hit moves the page to the
/// tail, so a hit changes future eviction order without changing membership.
#[derive(Debug, Clone)]
pub struct LruFrames<P> {
    /// Resident pages by recency (head = least recent, tail = most recent).
    resident: ResidentQueue<P>,
}

impl<P: PartialEq> LruFrames<P> {
    /// Create an empty LRU frame set.
    pub fn new(capacity: usize) -> Self {
        Self {
            resident: ResidentQueue::new(capacity),
        }
    }
}

impl<P: PartialEq> FrameSet<P> for LruFrames<P> {
    const POLICY: Policy = Policy::Lru;

    fn resident(&self) -> &ResidentQueue<P> {
        &self.resident
    }

    fn on_hit(&mut self, page: &P) {
        self.resident.move_to_tail(page);
    }

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

    #[test]
    fn test_lru_evicts_least_recent() {
        let mut frames = LruFrames::new(3);
        frames.on_fault(1, &[]);
        frames.on_fault(2, &[]);
        frames.on_fault(3, &[]);

        assert_eq!(frames.on_fault(4, &[]), Some(1));
        assert_eq!(frames.on_fault(5, &[]), Some(2));
    }

    #[test]
    fn test_lru_hit_refreshes_recency() {
        let mut frames = LruFrames::new(3);
        frames.on_fault(1, &[]);
        frames.on_fault(2, &[]);
        frames.on_fault(3, &[]);

        // Page 1 is oldest by admission, but the hit makes it most recent.
        frames.on_hit(&1);
        let slots: Vec<i32> = frames.resident().iter().copied().collect();
        assert_eq!(slots, vec![2, 3, 1]);

        assert_eq!(frames.on_fault(4, &[]), Some(2));
        assert_eq!(frames.on_fault(5, &[]), Some(3));
        assert_eq!(frames.on_fault(6, &[]), Some(1));
    }

    #[test]
    fn test_lru_hit_on_tail_is_noop() {
        let mut frames = LruFrames::new(2);
        frames.on_fault('a', &[]);
        frames.on_fault('b', &[]);
        frames.on_hit(&'b');

        let slots: Vec<char> = frames.resident().iter().copied().collect();
        assert_eq!(slots, vec!['a', 'b']);
    }
}
