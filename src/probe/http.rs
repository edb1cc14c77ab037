//! HTTPS prober

use async_trait::async_trait;
use reqwest::{redirect, Client};
use std::time::Duration;

use super::{classify_status, ProbeMethod};
use crate::error::Result;
use crate::types::{Candidate, EnumConfig, ProbeOutcome};

/// Issues a single GET per candidate and classifies the initial status
pub struct HttpProber {
    client: Client,
    scheme: String,
}

impl HttpProber {
    /// Create a prober from the run configuration
    pub fn new(config: &EnumConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.timeout)
            // 302 is itself a positive signal; never follow it
            .redirect(redirect::Policy::none())
            .pool_max_idle_per_host(1)
            .pool_idle_timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            scheme: config.scheme.clone(),
        })
    }
}

#[async_trait]
impl ProbeMethod for HttpProber {
    async fn probe(&self, candidate: &Candidate) -> ProbeOutcome {
        match self.client.get(candidate.url(&self.scheme)).send().await {
            Ok(response) => classify_status(response.status().as_u16()),
            Err(_) => ProbeOutcome::Unreachable,
        }
    }

    fn method_name(&self) -> &'static str {
        "http"
    }
}
