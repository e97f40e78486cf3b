//! Identifiers and a simple allocator for registered tweens.

use serde::{Deserialize, Serialize};

/// Identifies one started tween. Returned by every start call and accepted by
/// `TweenRegistry::cancel`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TweenId(pub u32);

impl std::fmt::Display for TweenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "tween#{}", self.0)
    }
}

/// Monotonic allocator for TweenId.
/// IDs are not reused until the u32 counter wraps, so a stale id cannot cancel
/// a newer tween short of 2^32 allocations.
#[derive(Default, Debug)]
pub struct IdAllocator {
    next_tween: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn alloc_tween(&mut self) -> TweenId {
        let id = TweenId(self.next_tween);
        self.next_tween = self.next_tween.wrapping_add(1);
        id
    }
}
