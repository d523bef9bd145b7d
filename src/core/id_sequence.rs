use std::sync::atomic::{AtomicU64, Ordering};

/// Caller-owned generator of unique element ids such as gradient ids.
///
/// One sequence is typically created per rendered chart tree. `next_id` takes
/// `&self` and increments atomically, so a sequence shared between threads
/// never hands out the same id twice.
#[derive(Debug)]
pub struct IdSequence {
    prefix: String,
    counter: AtomicU64,
}

impl IdSequence {
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(0),
        }
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns `"{prefix}-{n}"`, with `n` starting at `1`.
    #[must_use]
    pub fn next_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}-{n}", self.prefix)
    }

    /// Number of ids handed out so far.
    #[must_use]
    pub fn issued(&self) -> u64 {
        self.counter.load(Ordering::Relaxed)
    }

    /// Restarts numbering. Requires exclusive access, so no concurrent caller
    /// can observe a reused id mid-reset.
    pub fn reset(&mut self) {
        *self.counter.get_mut() = 0;
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new("chart")
    }
}
