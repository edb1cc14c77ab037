//! Candidate hostname generation
//!
//! Expands (base domain × wordlist entry × permutation template) into the
//! full, ordered list of hostnames to probe.

mod generator;
mod wordlist;

pub use generator::CandidateGenerator;
pub use wordlist::load_wordlist;

/// Cloud DNS suffixes candidates are tested under
pub const BASE_DOMAINS: &[&str] = &[
    "azurewebsites.net",
    "blob.core.windows.net",
    "queue.core.windows.net",
    "file.core.windows.net",
    "table.core.windows.net",
    "scm.azurewebsites.net",
];

/// SecLists DNS wordlist
pub const DEFAULT_WORDLIST: &str =
    "/usr/share/seclists/Discovery/DNS/subdomains-top1million-110000.txt";
