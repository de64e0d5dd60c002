//! Unique-ID generation for library objects and scene assets.
//!
//! IDs are 8 lowercase hexadecimal digits. Each [`UniqueIdGenerator`] owns
//! its randomness and the set of IDs it has already issued, so independent
//! generators never share state and tests can force collisions with a
//! seeded RNG.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::trace;

/// Number of hex digits in a unique ID.
pub const UNIQUE_ID_LEN: usize = 8;

/// Check whether `value` has the shape of a unique ID.
///
/// # Example
///
/// ```
/// use edx::id::is_unique_id;
///
/// assert!(is_unique_id("a3f09c1e"));
/// assert!(!is_unique_id("A3F09C1E"));
/// assert!(!is_unique_id("a3f09c1"));
/// ```
pub fn is_unique_id(value: &str) -> bool {
    value.len() == UNIQUE_ID_LEN
        && value
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
}

/// Issues unique IDs that do not collide with any ID it has seen.
#[derive(Debug, Clone)]
pub struct UniqueIdGenerator<R = StdRng> {
    rng: R,
    used: HashSet<String>,
}

impl UniqueIdGenerator<StdRng> {
    /// Create a generator seeded from the operating system.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }
}

impl Default for UniqueIdGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore> UniqueIdGenerator<R> {
    /// Create a generator drawing from `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            used: HashSet::new(),
        }
    }

    /// Mark `ids` as already used.
    pub fn with_used<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.used.extend(ids.into_iter().map(Into::into));
        self
    }

    /// Issue a fresh ID and record it as used.
    pub fn generate(&mut self) -> String {
        loop {
            let candidate = format!("{:08x}", self.rng.next_u32());
            if self.used.insert(candidate.clone()) {
                return candidate;
            }
            trace!(id = %candidate, "Unique ID collision, redrawing");
        }
    }

    /// Record an externally chosen ID. Returns false if it was already used.
    pub fn reserve(&mut self, id: impl Into<String>) -> bool {
        self.used.insert(id.into())
    }

    /// Whether `id` has been issued or reserved.
    pub fn is_used(&self, id: &str) -> bool {
        self.used.contains(id)
    }

    /// Number of IDs issued or reserved so far.
    pub fn issued_count(&self) -> usize {
        self.used.len()
    }
}
