//! Validated simulation input.

use crate::common::{InvalidInput, Result};

/// A reference string paired with a frame capacity, both checked.
///
/// Holding a `ReferenceStream` means the input is simulatable: at least one
/// reference and at least one frame.
///
/// # Example
/// ```
/// use pagesim::ReferenceStream;
///
/// let pages = [7, 0, 1, 2];
/// let stream = ReferenceStream::new(&pages, 3).unwrap();
/// assert_eq!(stream.capacity(), 3);
/// assert_eq!(stream.upcoming(1), &[1, 2]);
///
/// assert!(ReferenceStream::new(&pages, 0).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ReferenceStream<'a, P> {
    pages: &'a [P],
    capacity: usize,
}

impl<'a, P> ReferenceStream<'a, P> {
    /// Validate a reference string and frame capacity.
    ///
    /// # Errors
    /// - `InvalidInput::EmptyReferenceString` if `pages` is empty
    /// - `InvalidInput::NonPositiveCapacity` if `capacity <= 0`
    pub fn new(pages: &'a [P], capacity: i64) -> Result<Self> {
        if pages.is_empty() {
            return Err(InvalidInput::EmptyReferenceString.into());
        }
        let capacity = usize::try_from(capacity)
            .ok()
            .filter(|&k| k > 0)
            .ok_or(InvalidInput::NonPositiveCapacity(capacity))?;

        Ok(Self { pages, capacity })
    }

    pub fn pages(&self) -> &'a [P] {
        self.pages
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of references (N).
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Always `false`; construction rejects empty input.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// References strictly after position `index`.
    pub fn upcoming(&self, index: usize) -> &'a [P] {
        self.pages.get(index + 1..).unwrap_or(&[])
    }
}
