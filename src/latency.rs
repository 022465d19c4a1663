//! Simulated network latency.
//!
//! The backend this crate stands in for is remote, so every operation
//! advertises an asynchronous round-trip. The delay is a policy knob on
//! the database, not hard-coded blocking behavior: production-shaped
//! code uses [`Latency::simulated`], tests use [`Latency::none`]. The
//! wait is a pure time-based suspension (`tokio::time::sleep`); no lock
//! is ever held across it.

use std::time::Duration;

/// Per-operation latency profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    /// Delay before every CRUD operation (get, filter, create, update,
    /// delete).
    pub crud: Duration,
    /// Delay of the LLM invocation stub.
    pub llm: Duration,
    /// Delay of the email stub.
    pub email: Duration,
    /// Delay of the file-upload stub.
    pub upload: Duration,
    /// Delay of the image-generation stub.
    pub image: Duration,
    /// Delay of the file-extraction stub.
    pub extraction: Duration,
}

impl Latency {
    /// The nominal profile of the simulated remote backend: 300 ms per
    /// CRUD round-trip plus slower per-integration delays.
    #[must_use]
    pub const fn simulated() -> Self {
        Self {
            crud: Duration::from_millis(300),
            llm: Duration::from_millis(500),
            email: Duration::from_millis(300),
            upload: Duration::from_millis(800),
            image: Duration::from_millis(1000),
            extraction: Duration::from_millis(600),
        }
    }

    /// Zero delay everywhere. Intended for tests.
    #[must_use]
    pub const fn none() -> Self {
        Self::uniform(Duration::ZERO)
    }

    /// The same delay for every operation.
    #[must_use]
    pub const fn uniform(delay: Duration) -> Self {
        Self {
            crud: delay,
            llm: delay,
            email: delay,
            upload: delay,
            image: delay,
            extraction: delay,
        }
    }
}

impl Default for Latency {
    fn default() -> Self {
        Self::simulated()
    }
}

/// Suspends for the given delay. Zero-delay waits return immediately
/// without touching the timer.
pub(crate) async fn wait(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
