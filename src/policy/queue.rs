//! Ordered container for resident pages.

use std::collections::VecDeque;

/// Capacity-bounded, ordered set of resident pages.
///
/// The head is the next eviction candidate for FIFO and LRU; the tail is where
/// newly admitted (or, for LRU, just-touched) pages go. Membership uses only
/// `PartialEq`, so page tokens need no `Hash` or `Ord`.
///
/// Lookups are linear. Frame counts in this simulator are small, and a linear
/// scan keeps the slot order the trace displays identical to the order the
/// policy reasons about.
///
/// Storage grows with the pages actually admitted, never with `capacity`: a
/// capacity far above the number of distinct pages costs nothing.
#[derive(Debug, Clone)]
pub struct ResidentQueue<P> {
    /// Resident pages (front = head, back = tail).
    pages: VecDeque<P>,

    /// Maximum number of resident pages.
    capacity: usize,
}

impl<P: PartialEq> ResidentQueue<P> {
    /// Create an empty queue holding at most `capacity` pages.
    ///
    /// Storage grows with the pages admitted; nothing is reserved for
    /// `capacity` up front.
    ///
    /// # Panics
    /// Panics if `capacity` is 0. Callers validate capacity before building
    /// frame state.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be > 0");
        Self {
            pages: VecDeque::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.pages.len() == self.capacity
    }

    pub fn contains(&self, page: &P) -> bool {
        self.position(page).is_some()
    }

    /// Slot index of `page`, counted from the head.
    pub fn position(&self, page: &P) -> Option<usize> {
        self.pages.iter().position(|p| p == page)
    }

    /// Append at the tail.
    ///
    /// # Panics
    /// Panics if the queue is already full; make room with
    /// [`pop_head`](Self::pop_head) or [`remove_at`](Self::remove_at) first.
    pub fn push_tail(&mut self, page: P) {
        assert!(!self.is_full(), "push_tail on a full ResidentQueue");
        self.pages.push_back(page);
    }

    /// Remove and return the head (oldest / least recent) page.
    pub fn pop_head(&mut self) -> Option<P> {
        self.pages.pop_front()
    }

    /// Remove and return the page at slot `index`.
    pub fn remove_at(&mut self, index: usize) -> Option<P> {
        self.pages.remove(index)
    }

    /// Move a resident page to the tail. Returns `false` if it is not resident.
    pub fn move_to_tail(&mut self, page: &P) -> bool {
        match self.position(page) {
            Some(index) => {
                if let Some(p) = self.pages.remove(index) {
                    self.pages.push_back(p);
                }
                true
            }
            None => false,
        }
    }

    /// Resident pages, head first.
    pub fn iter(&self) -> impl Iterator<Item = &P> + '_ {
        self.pages.iter()
    }
}
