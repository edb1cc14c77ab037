//! Bounded-concurrency probe engine

use std::io::Write;
use std::sync::Arc;

use chrono::Utc;
use futures::stream::{self, StreamExt};

use super::{HitRecorder, HttpProber, ProbeMethod};
use crate::error::Result;
use crate::types::{Candidate, EnumConfig, ProbeResult, ScanProgress, ScanSummary};

/// Drains a candidate list through a fixed number of in-flight probes.
///
/// Probe tasks only classify. The coordinating loop in [`ProbeEngine::run`]
/// receives each result as it completes and is the only place that prints or
/// writes to the hit file.
pub struct ProbeEngine {
    prober: Arc<dyn ProbeMethod>,
    concurrency: usize,
}

impl ProbeEngine {
    /// Create an engine with the HTTPS prober
    pub fn new(config: &EnumConfig) -> Result<Self> {
        let prober = HttpProber::new(config)?;
        Ok(Self::with_prober(Arc::new(prober), config.concurrency))
    }

    /// Create an engine around any probing method
    pub fn with_prober(prober: Arc<dyn ProbeMethod>, concurrency: usize) -> Self {
        Self {
            prober,
            concurrency: concurrency.max(1),
        }
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Probe every candidate, reporting progress after each completion
    pub async fn run<W, F>(
        &self,
        candidates: &[Candidate],
        recorder: &mut HitRecorder<W>,
        on_progress: F,
    ) -> ScanSummary
    where
        W: Write,
        F: Fn(&ScanProgress),
    {
        let started_at = Utc::now();
        let total = candidates.len() as u64;

        recorder.announce(total);

        tracing::info!(
            candidates = total,
            concurrency = self.concurrency,
            method = self.prober.method_name(),
            "Probe sweep started"
        );

        let mut results = stream::iter(candidates.iter().cloned())
            .map(|candidate| {
                let prober = Arc::clone(&self.prober);
                async move {
                    let outcome = prober.probe(&candidate).await;
                    ProbeResult { candidate, outcome }
                }
            })
            .buffer_unordered(self.concurrency);

        let mut completed = 0u64;
        let mut valid = 0u64;

        // Single writer: hits are printed and appended only from this loop
        while let Some(result) = results.next().await {
            completed += 1;
            if result.outcome.is_valid() {
                valid += 1;
            }
            recorder.record(&result);

            on_progress(&ScanProgress {
                completed,
                total,
                valid,
            });
        }

        let summary = ScanSummary {
            total,
            valid,
            discarded: completed - valid,
            started_at,
            finished_at: Utc::now(),
        };

        tracing::info!(
            total = summary.total,
            valid = summary.valid,
            discarded = summary.discarded,
            duration_ms = summary.elapsed().num_milliseconds(),
            "Probe sweep completed"
        );

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProbeOutcome;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    /// Marks hosts starting with "hit" as valid and tracks peak parallelism
    struct FakeProber {
        in_flight: AtomicUsize,
        peak: AtomicUsize,
    }

    impl FakeProber {
        fn new() -> Self {
            Self {
                in_flight: AtomicUsize::new(0),
                peak: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl ProbeMethod for FakeProber {
        async fn probe(&self, candidate: &Candidate) -> ProbeOutcome {
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak.fetch_max(now, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(5)).await;
            self.in_flight.fetch_sub(1, Ordering::SeqCst);

            if candidate.hostname().starts_with("hit") {
                ProbeOutcome::Valid { status: 200 }
            } else {
                ProbeOutcome::Unreachable
            }
        }

        fn method_name(&self) -> &'static str {
            "fake"
        }
    }

    fn candidates(hits: usize, misses: usize) -> Vec<Candidate> {
        (0..hits)
            .map(|i| Candidate::new(&format!("hit{}", i), "x.net"))
            .chain((0..misses).map(|i| Candidate::new(&format!("miss{}", i), "x.net")))
            .collect()
    }

    #[tokio::test]
    async fn test_concurrency_is_capped() {
        let prober = Arc::new(FakeProber::new());
        let engine = ProbeEngine::with_prober(prober.clone(), 8);
        let dir = tempfile::tempdir().unwrap();
        let mut recorder = HitRecorder::new(Vec::new(), dir.path().join("hits.txt"));

        let summary = engine.run(&candidates(5, 95), &mut recorder, |_| {}).await;

        assert_eq!(summary.total, 100);
        assert_eq!(summary.valid, 5);
        assert_eq!(summary.discarded, 95);
        assert!(prober.peak.load(Ordering::SeqCst) <= 8);
        assert!(prober.peak.load(Ordering::SeqCst) > 1);
    }

    #[tokio::test]
    async fn test_progress_reaches_total() {
        let engine = ProbeEngine::with_prober(Arc::new(FakeProber::new()), 4);
        let dir = tempfile::tempdir().unwrap();
        let mut recorder = HitRecorder::new(Vec::new(), dir.path().join("hits.txt"));
        let last = std::sync::Mutex::new(None);

        engine
            .run(&candidates(2, 10), &mut recorder, |p| {
                *last.lock().unwrap() = Some(*p);
            })
            .await;

        let last = last.into_inner().unwrap().unwrap();
        assert_eq!(last.completed, 12);
        assert_eq!(last.total, 12);
        assert_eq!(last.valid, 2);
    }

    #[tokio::test]
    async fn test_empty_candidate_list() {
        let engine = ProbeEngine::with_prober(Arc::new(FakeProber::new()), 50);
        let dir = tempfile::tempdir().unwrap();
        let mut recorder = HitRecorder::new(Vec::new(), dir.path().join("hits.txt"));

        let summary = engine.run(&[], &mut recorder, |_| {}).await;

        assert_eq!(summary.total, 0);
        let out = String::from_utf8(recorder.into_console()).unwrap();
        assert_eq!(out, "[*] Testing 0 subdomains...\n");
    }

    #[test]
    fn test_zero_concurrency_is_clamped() {
        let engine = ProbeEngine::with_prober(Arc::new(FakeProber::new()), 0);
        assert_eq!(engine.concurrency(), 1);
    }

    #[test]
    fn test_default_engine_uses_fifty_workers() {
        let engine = ProbeEngine::new(&EnumConfig::default()).unwrap();
        assert_eq!(engine.concurrency(), 50);
    }
}
