//! Page replacement policies.
//!
//! Implements:
//! - [`FifoFrames`] - evict the earliest admitted page
//! - [`LruFrames`] - evict the least recently used page
//! - [`OptimalFrames`] - evict the page used farthest in the future
//!
//! All three keep their resident pages in a [`ResidentQueue`] and plug into the
//! simulation loop through the [`FrameSet`] trait. [`Policy`] names them.

mod fifo;
mod lru;
mod optimal;
mod queue;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::{Error, InvalidInput};

pub use fifo::FifoFrames;
pub use lru::LruFrames;
pub use optimal::{select_victim, OptimalFrames};
pub use queue::ResidentQueue;

/// A capacity-bounded set of resident pages with a replacement rule.
///
/// The simulation loop does the membership test itself, then calls exactly one
/// of [`on_hit`](Self::on_hit) or [`on_fault`](Self::on_fault) per reference.
pub trait FrameSet<P: PartialEq> {
    /// The policy this frame set implements; results are labelled with it.
    const POLICY: Policy;

    /// Resident pages in the policy's slot order.
    fn resident(&self) -> &ResidentQueue<P>;

    /// Whether `page` is resident.
    fn contains(&self, page: &P) -> bool {
        self.resident().contains(page)
    }

    /// Record a reference to a resident page.
    fn on_hit(&mut self, page: &P);

    /// Admit a non-resident page, evicting one if the set is full.
    ///
    /// `upcoming` holds the references after this one, in order. Only
    /// lookahead policies read it.
    ///
    /// Returns the evicted page, if any.
    fn on_fault(&mut self, page: P, upcoming: &[P]) -> Option<P>;
}

/// The available replacement policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Policy {
    #[serde(rename = "FIFO")]
    Fifo,
    #[serde(rename = "LRU")]
    Lru,
    #[serde(rename = "Optimal")]
    Optimal,
}

impl Policy {
    /// Every policy, in comparison order.
    pub const ALL: [Policy; 3] = [Policy::Fifo, Policy::Lru, Policy::Optimal];

    /// Display name, as accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Fifo => "FIFO",
            Policy::Lru => "LRU",
            Policy::Optimal => "Optimal",
        }
    }
}

impl FromStr for Policy {
    type Err = Error;

    /// Matches policy names case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Policy::ALL
            .into_iter()
            .find(|policy| policy.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| InvalidInput::UnknownPolicy(s.to_string()).into())
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
