//! Candidate probing module

pub mod engine;
pub mod http;
pub mod recorder;

// Re-export main functionality
pub use engine::ProbeEngine;
pub use http::HttpProber;
pub use recorder::HitRecorder;

use crate::types::{Candidate, ProbeOutcome};
use async_trait::async_trait;

/// Status codes treated as evidence that the host exists
pub const VALID_STATUS_CODES: &[u16] = &[200, 302];

/// Trait for candidate probing methods
#[async_trait]
pub trait ProbeMethod: Send + Sync {
    /// Probe one candidate. Failures are folded into the outcome, never returned.
    async fn probe(&self, candidate: &Candidate) -> ProbeOutcome;

    /// Get the method name
    fn method_name(&self) -> &'static str;
}

/// Classify the initial response status of a probe
pub fn classify_status(status: u16) -> ProbeOutcome {
    if VALID_STATUS_CODES.contains(&status) {
        ProbeOutcome::Valid { status }
    } else {
        ProbeOutcome::Rejected { status }
    }
}
