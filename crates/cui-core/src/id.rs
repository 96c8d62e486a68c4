use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

/// Process-wide id allocator. Starts above zero so the decimal wire form
/// never collides with an empty/placeholder name.
static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for an element, stable for the element's lifetime.
///
/// The CUI wire format carries element ids as the decimal `Name` string,
/// so `Display`/`FromStr` round-trip through that form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(u64);

impl ElementId {
    /// Allocate the next unique id.
    pub fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Bump the allocator past `raw` so ids loaded from a saved project
    /// never collide with freshly allocated ones.
    pub fn reserve(raw: u64) {
        NEXT_ID.fetch_max(raw.saturating_add(1), Ordering::Relaxed);
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ElementId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(Self)
    }
}
