//! Unique-identifier generation for graph entities.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// A process-unique identifier source for synthesized graph entities.
///
/// Each call to [`generate`](Self::generate) returns the current Unix time in
/// milliseconds concatenated with a strictly increasing counter value, so ids
/// stay unique even when several calls land in the same millisecond. The
/// counter is an atomic, making a shared generator safe to use from
/// concurrent translation runs.
///
/// The generator is an explicit service handed to the translator rather than
/// hidden global state, so translation runs remain independently testable.
#[derive(Debug, Default)]
pub struct IdGenerator {
    counter: AtomicU64,
}

impl IdGenerator {
    /// Creates a new generator with its counter at zero.
    pub fn new() -> Self {
        Self {
            counter: AtomicU64::new(0),
        }
    }

    /// Returns a fresh identifier, unique for the lifetime of this generator.
    pub fn generate(&self) -> String {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        let count = self.counter.fetch_add(1, Ordering::Relaxed);
        format!("{millis}{count}")
    }
}
