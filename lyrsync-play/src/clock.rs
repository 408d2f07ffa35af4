use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Last known elapsed playback time in seconds.
///
/// Written only by the status-reader task, read only by the key loop; the
/// value is a single f64 stored as its bit pattern in one atomic, so neither
/// side takes a lock. Starts at 0.0 and goes stale (not erroneous) if the
/// player dies.
#[derive(Clone, Debug, Default)]
pub struct PlaybackClock {
    bits: Arc<AtomicU64>,
}

impl PlaybackClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, seconds: f64) {
        self.bits.store(seconds.to_bits(), Ordering::Relaxed);
    }

    pub fn elapsed(&self) -> f64 {
        f64::from_bits(self.bits.load(Ordering::Relaxed))
    }
}
