//! Candidate generator

use super::load_wordlist;
use crate::error::Result;
use crate::types::{Candidate, EnumConfig, PermutationTemplate};

/// Generator for candidate hostnames.
///
/// Order is fixed: base domains outermost, then wordlist entries in file
/// order, then permutation templates.
pub struct CandidateGenerator {
    company: String,
    words: Vec<String>,
    templates: Vec<PermutationTemplate>,
    base_domains: Vec<String>,
}

impl CandidateGenerator {
    /// Create a generator from an in-memory wordlist
    pub fn new(
        company: impl Into<String>,
        words: Vec<String>,
        templates: Vec<PermutationTemplate>,
        base_domains: Vec<String>,
    ) -> Self {
        Self {
            company: company.into(),
            words,
            templates,
            base_domains,
        }
    }

    /// Load the configured wordlist and build a generator for `company`.
    ///
    /// Fails with `FileAccess` if the wordlist cannot be read.
    pub fn from_config(config: &EnumConfig, company: impl Into<String>) -> Result<Self> {
        let words = load_wordlist(&config.wordlist)?;
        Ok(Self::new(
            company,
            words,
            config.templates.clone(),
            config.base_domains.clone(),
        ))
    }

    /// Get total number of candidates
    pub fn total(&self) -> u64 {
        self.base_domains.len() as u64 * self.words.len() as u64 * self.templates.len() as u64
    }

    /// Materialize the whole sequence
    pub fn generate(&self) -> Vec<Candidate> {
        let mut candidates = Vec::with_capacity(self.total() as usize);

        for base in &self.base_domains {
            for word in &self.words {
                for template in &self.templates {
                    candidates.push(Candidate::new(&template.render(word, &self.company), base));
                }
            }
        }

        candidates
    }

    pub fn company(&self) -> &str {
        &self.company
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}
