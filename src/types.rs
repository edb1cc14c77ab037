//! Core types and structures for cloudsub

use chrono::{DateTime, Utc};
use std::path::PathBuf;
use std::time::Duration;

use crate::candidate::{BASE_DOMAINS, DEFAULT_WORDLIST};

/// Default hit file, relative to the working directory
pub const DEFAULT_OUTPUT_FILE: &str = "valid_subdomains.txt";

/// Number of probes in flight at once
pub const PROBE_CONCURRENCY: usize = 50;

/// Per-probe deadline
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Naming permutation combining a wordlist entry with the company token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermutationTemplate {
    /// `{word}-{company}`
    WordDashCompany,
    /// `{company}-{word}`
    CompanyDashWord,
    /// `{word}{company}`
    WordCompany,
    /// `{company}{word}`
    CompanyWord,
}

impl PermutationTemplate {
    /// All templates, in candidate generation order
    pub const ALL: [PermutationTemplate; 4] = [
        PermutationTemplate::WordDashCompany,
        PermutationTemplate::CompanyDashWord,
        PermutationTemplate::WordCompany,
        PermutationTemplate::CompanyWord,
    ];

    /// Apply the template. Plain substitution, no normalization.
    pub fn render(&self, word: &str, company: &str) -> String {
        match self {
            PermutationTemplate::WordDashCompany => format!("{}-{}", word, company),
            PermutationTemplate::CompanyDashWord => format!("{}-{}", company, word),
            PermutationTemplate::WordCompany => format!("{}{}", word, company),
            PermutationTemplate::CompanyWord => format!("{}{}", company, word),
        }
    }

    /// Pattern notation with named slots
    pub fn pattern(&self) -> &'static str {
        match self {
            PermutationTemplate::WordDashCompany => "{word}-{company}",
            PermutationTemplate::CompanyDashWord => "{company}-{word}",
            PermutationTemplate::WordCompany => "{word}{company}",
            PermutationTemplate::CompanyWord => "{company}{word}",
        }
    }
}

impl std::fmt::Display for PermutationTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.pattern())
    }
}

/// Fully-qualified hostname to probe
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Candidate(String);

impl Candidate {
    /// Join a rendered permutation and a base domain with a dot
    pub fn new(label: &str, base_domain: &str) -> Self {
        Self(format!("{}.{}", label, base_domain))
    }

    /// Wrap an already-assembled hostname (or `host:port`)
    pub fn from_hostname(hostname: impl Into<String>) -> Self {
        Self(hostname.into())
    }

    pub fn hostname(&self) -> &str {
        &self.0
    }

    /// Probe URL for this candidate
    pub fn url(&self, scheme: &str) -> String {
        format!("{}://{}", scheme, self.0)
    }
}

impl std::fmt::Display for Candidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Classification of a single probe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// Responded with 200 or 302
    Valid { status: u16 },
    /// Responded, but with any other status
    Rejected { status: u16 },
    /// Connect, DNS, TLS, timeout or protocol failure
    Unreachable,
}

impl ProbeOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ProbeOutcome::Valid { .. })
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            ProbeOutcome::Valid { status } | ProbeOutcome::Rejected { status } => Some(*status),
            ProbeOutcome::Unreachable => None,
        }
    }
}

/// A candidate together with its classification
#[derive(Debug, Clone)]
pub struct ProbeResult {
    pub candidate: Candidate,
    pub outcome: ProbeOutcome,
}

/// Immutable run configuration, passed to the generator and the engine
#[derive(Debug, Clone)]
pub struct EnumConfig {
    pub wordlist: PathBuf,
    pub base_domains: Vec<String>,
    pub templates: Vec<PermutationTemplate>,
    pub concurrency: usize,
    pub timeout: Duration,
    pub output_file: PathBuf,
    /// `https` in production; tests point this at plain-HTTP mock servers
    pub scheme: String,
}

impl Default for EnumConfig {
    fn default() -> Self {
        Self {
            wordlist: PathBuf::from(DEFAULT_WORDLIST),
            base_domains: BASE_DOMAINS.iter().map(|s| s.to_string()).collect(),
            templates: PermutationTemplate::ALL.to_vec(),
            concurrency: PROBE_CONCURRENCY,
            timeout: PROBE_TIMEOUT,
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            scheme: "https".to_string(),
        }
    }
}

impl EnumConfig {
    /// Defaults with `CLOUDSUB_WORDLIST` / `CLOUDSUB_OUTPUT` overrides applied
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(path) = std::env::var("CLOUDSUB_WORDLIST") {
            tracing::debug!(wordlist = %path, "Wordlist overridden from environment");
            config.wordlist = PathBuf::from(path);
        }
        if let Ok(path) = std::env::var("CLOUDSUB_OUTPUT") {
            tracing::debug!(output = %path, "Output file overridden from environment");
            config.output_file = PathBuf::from(path);
        }

        config
    }
}

/// Scan progress info
#[derive(Debug, Clone, Copy)]
pub struct ScanProgress {
    pub completed: u64,
    pub total: u64,
    pub valid: u64,
}

/// Totals for a finished sweep
#[derive(Debug, Clone)]
pub struct ScanSummary {
    pub total: u64,
    pub valid: u64,
    pub discarded: u64,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl ScanSummary {
    pub fn elapsed(&self) -> chrono::Duration {
        self.finished_at - self.started_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_render() {
        assert_eq!(PermutationTemplate::WordDashCompany.render("test", "acme"), "test-acme");
        assert_eq!(PermutationTemplate::CompanyDashWord.render("test", "acme"), "acme-test");
        assert_eq!(PermutationTemplate::WordCompany.render("test", "acme"), "testacme");
        assert_eq!(PermutationTemplate::CompanyWord.render("test", "acme"), "acmetest");
    }

    #[test]
    fn test_template_render_keeps_braces_literal() {
        assert_eq!(
            PermutationTemplate::WordDashCompany.render("{company}", "acme"),
            "{company}-acme"
        );
    }

    #[test]
    fn test_empty_word_leaves_separator() {
        assert_eq!(PermutationTemplate::WordDashCompany.render("", "acme"), "-acme");
    }

    #[test]
    fn test_candidate_url() {
        let c = Candidate::new("test-acme", "azurewebsites.net");
        assert_eq!(c.hostname(), "test-acme.azurewebsites.net");
        assert_eq!(c.url("https"), "https://test-acme.azurewebsites.net");
    }

    #[test]
    fn test_default_config() {
        let config = EnumConfig::default();
        assert_eq!(config.concurrency, 50);
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.base_domains.len(), 6);
        assert_eq!(config.templates.len(), 4);
        assert_eq!(config.output_file, PathBuf::from("valid_subdomains.txt"));
        assert_eq!(config.scheme, "https");
    }

    #[test]
    fn test_outcome_status() {
        assert!(ProbeOutcome::Valid { status: 302 }.is_valid());
        assert!(!ProbeOutcome::Rejected { status: 403 }.is_valid());
        assert_eq!(ProbeOutcome::Unreachable.status_code(), None);
    }
}
