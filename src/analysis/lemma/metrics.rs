//! Metrics collection for lemmatization.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use serde::Serialize;

/// Point-in-time copy of the lemmatizer counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MetricsSnapshot {
    /// Total number of lemmatize calls.
    pub total_calls: u64,

    /// Calls answered by the dictionary.
    pub lookup_hits: u64,

    /// Dictionary lookups that found nothing.
    pub lookup_misses: u64,

    /// Calls that ran the suffix stripper.
    pub heuristic_calls: u64,

    pub total_time: Duration,
    pub lookup_time: Duration,
    pub heuristic_time: Duration,
}

impl MetricsSnapshot {
    /// Share of all calls answered by the dictionary.
    pub fn cache_hit_rate(&self) -> f64 {
        ratio(self.lookup_hits, self.total_calls)
    }

    /// Share of dictionary lookups that found a lemma.
    pub fn lookup_hit_rate(&self) -> f64 {
        ratio(self.lookup_hits, self.lookup_hits + self.lookup_misses)
    }

    /// Average wall time per call in milliseconds.
    pub fn avg_call_time_ms(&self) -> f64 {
        if self.total_calls == 0 {
            return 0.0;
        }
        self.total_time.as_secs_f64() * 1000.0 / self.total_calls as f64
    }
}

fn ratio(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

impl fmt::Display for MetricsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Lemmatizer Metrics:")?;
        writeln!(f, "  Total Calls:         {}", self.total_calls)?;
        writeln!(
            f,
            "  Lookup Hits:         {} ({:.1}% of all calls)",
            self.lookup_hits,
            self.cache_hit_rate() * 100.0
        )?;
        writeln!(f, "  Lookup Hit Rate:     {:.1}%", self.lookup_hit_rate() * 100.0)?;
        writeln!(f, "  Heuristic Fallbacks: {}", self.heuristic_calls)?;
        writeln!(f, "  Avg Call Time:       {:.3}ms", self.avg_call_time_ms())?;
        writeln!(f, "  Total Time:          {:.3}s", self.total_time.as_secs_f64())?;
        writeln!(f, "  Lookup Time:         {:.3}s", self.lookup_time.as_secs_f64())?;
        write!(f, "  Heuristic Time:      {:.3}s", self.heuristic_time.as_secs_f64())
    }
}

/// Lock-free counters shared by every caller of one engine.
#[derive(Debug, Default)]
pub struct LemmaMetrics {
    total_calls: AtomicU64,
    lookup_hits: AtomicU64,
    lookup_misses: AtomicU64,
    heuristic_calls: AtomicU64,
    total_nanos: AtomicU64,
    lookup_nanos: AtomicU64,
    heuristic_nanos: AtomicU64,
}

impl LemmaMetrics {
    /// Create a collector with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_lookup(&self, hit: bool, elapsed: Duration) {
        if hit {
            self.lookup_hits.fetch_add(1, Ordering::Relaxed);
        } else {
            self.lookup_misses.fetch_add(1, Ordering::Relaxed);
        }
        self.lookup_nanos.fetch_add(nanos(elapsed), Ordering::Relaxed);
    }

    pub(crate) fn record_heuristic(&self, elapsed: Duration) {
        self.heuristic_calls.fetch_add(1, Ordering::Relaxed);
        self.heuristic_nanos.fetch_add(nanos(elapsed), Ordering::Relaxed);
    }

    pub(crate) fn record_call(&self, elapsed: Duration) {
        self.total_calls.fetch_add(1, Ordering::Relaxed);
        self.total_nanos.fetch_add(nanos(elapsed), Ordering::Relaxed);
    }

    /// Get the current metrics snapshot.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            total_calls: self.total_calls.load(Ordering::Relaxed),
            lookup_hits: self.lookup_hits.load(Ordering::Relaxed),
            lookup_misses: self.lookup_misses.load(Ordering::Relaxed),
            heuristic_calls: self.heuristic_calls.load(Ordering::Relaxed),
            total_time: Duration::from_nanos(self.total_nanos.load(Ordering::Relaxed)),
            lookup_time: Duration::from_nanos(self.lookup_nanos.load(Ordering::Relaxed)),
            heuristic_time: Duration::from_nanos(self.heuristic_nanos.load(Ordering::Relaxed)),
        }
    }

    /// Reset all counters to zero.
    pub fn reset(&self) {
        for counter in [
            &self.total_calls,
            &self.lookup_hits,
            &self.lookup_misses,
            &self.heuristic_calls,
            &self.total_nanos,
            &self.lookup_nanos,
            &self.heuristic_nanos,
        ] {
            counter.store(0, Ordering::Relaxed);
        }
    }
}

fn nanos(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX)
}
