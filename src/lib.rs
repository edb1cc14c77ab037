//! cloudsub - cloud-hosted subdomain discovery
//!
//! Generates candidate hostnames from a wordlist and a company token across
//! known cloud base domains, then probes each one over HTTPS with a fixed
//! number of concurrent requests. Hosts answering 200 or 302 are reported and
//! appended to a hit file.

pub mod candidate;
pub mod cli;
pub mod error;
pub mod probe;
pub mod types;

// Re-export commonly used types
pub use error::{CloudSubError, Result};
pub use types::{
    Candidate, EnumConfig, PermutationTemplate, ProbeOutcome, ProbeResult, ScanProgress,
    ScanSummary,
};

// Re-export main functionality
pub use candidate::CandidateGenerator;
pub use probe::{HitRecorder, ProbeEngine};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Already-installed subscriber is fine (tests, embedding)
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init()
        .ok();

    Ok(())
}
