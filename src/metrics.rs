//! Production monitoring for X25519/Ed25519 operations.
//!
//! Modeled on the teacher crate's `metrics` module: atomic counters behind
//! `Arc`, cloned cheaply per caller, exported in both Prometheus and JSON
//! text formats. Durations are recorded in microseconds; no cryptographic
//! material is ever observable through a metric.

use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

static GLOBAL: Lazy<Metrics> = Lazy::new(Metrics::new);

/// Atomic counters for sign/verify/verify_batch operations.
#[derive(Clone)]
pub struct Metrics {
    sign_total: Arc<AtomicU64>,
    sign_duration_us: Arc<AtomicU64>,

    verify_total: Arc<AtomicU64>,
    verify_success: Arc<AtomicU64>,
    verify_failure: Arc<AtomicU64>,
    verify_duration_us: Arc<AtomicU64>,

    verify_batch_total: Arc<AtomicU64>,
    verify_batch_success: Arc<AtomicU64>,
    verify_batch_failure: Arc<AtomicU64>,
    verify_batch_members: Arc<AtomicU64>,
    verify_batch_duration_us: Arc<AtomicU64>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Creates a fresh, independent set of counters. Most callers want
    /// [`Metrics::global`] instead, which shares one process-wide instance.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sign_total: Arc::new(AtomicU64::new(0)),
            sign_duration_us: Arc::new(AtomicU64::new(0)),
            verify_total: Arc::new(AtomicU64::new(0)),
            verify_success: Arc::new(AtomicU64::new(0)),
            verify_failure: Arc::new(AtomicU64::new(0)),
            verify_duration_us: Arc::new(AtomicU64::new(0)),
            verify_batch_total: Arc::new(AtomicU64::new(0)),
            verify_batch_success: Arc::new(AtomicU64::new(0)),
            verify_batch_failure: Arc::new(AtomicU64::new(0)),
            verify_batch_members: Arc::new(AtomicU64::new(0)),
            verify_batch_duration_us: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Returns the process-wide metrics instance (cheap clone, shared atomics).
    #[must_use]
    pub fn global() -> Self {
        GLOBAL.clone()
    }

    /// Records a `sign` call.
    pub fn record_sign(&self, duration: Duration, success: bool) {
        self.sign_total.fetch_add(1, Ordering::Relaxed);
        self.sign_duration_us
            .fetch_add(duration.as_micros() as u64, Ordering::Relaxed);
        let _ = success; // signing has no legitimate failure mode (spec §7)
    }

    /// Records a `verify` call.
    pub fn record_verify(&self, duration: Duration, success: bool) {
        self.verify_total.fetch_add(1, Ordering::Relaxed);
        self.verify_duration_us
            .fetch_add(duration.as_micros() as u64, Ordering::Relaxed);
        if success {
            self.verify_success.fetch_add(1, Ordering::Relaxed);
        } else {
            self.verify_failure.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Records a `verify_batch` call over `members` signatures.
    pub fn record_verify_batch(&self, duration: Duration, success: bool, members: usize) {
        self.verify_batch_total.fetch_add(1, Ordering::Relaxed);
        self.verify_batch_members
            .fetch_add(members as u64, Ordering::Relaxed);
        self.verify_batch_duration_us
            .fetch_add(duration.as_micros() as u64, Ordering::Relaxed);
        if success {
            self.verify_batch_success.fetch_add(1, Ordering::Relaxed);
        } else {
            self.verify_batch_failure.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Prometheus exposition format.
    #[must_use]
    pub fn prometheus_format(&self) -> String {
        let sign_total = self.sign_total.load(Ordering::Relaxed);
        let sign_duration = self.sign_duration_us.load(Ordering::Relaxed);
        let avg_sign_us = if sign_total > 0 { sign_duration / sign_total } else { 0 };

        let verify_total = self.verify_total.load(Ordering::Relaxed);
        let verify_success = self.verify_success.load(Ordering::Relaxed);
        let verify_failure = self.verify_failure.load(Ordering::Relaxed);
        let verify_duration = self.verify_duration_us.load(Ordering::Relaxed);
        let avg_verify_us = if verify_total > 0 { verify_duration / verify_total } else { 0 };

        let batch_total = self.verify_batch_total.load(Ordering::Relaxed);
        let batch_success = self.verify_batch_success.load(Ordering::Relaxed);
        let batch_failure = self.verify_batch_failure.load(Ordering::Relaxed);
        let batch_members = self.verify_batch_members.load(Ordering::Relaxed);

        format!(
            "# HELP curve25519_sign_total Total sign operations\n\
             # TYPE curve25519_sign_total counter\n\
             curve25519_sign_total {sign_total}\n\
             # HELP curve25519_sign_duration_microseconds_avg Average sign duration\n\
             # TYPE curve25519_sign_duration_microseconds_avg gauge\n\
             curve25519_sign_duration_microseconds_avg {avg_sign_us}\n\
             # HELP curve25519_verify_total Total verify operations\n\
             # TYPE curve25519_verify_total counter\n\
             curve25519_verify_total {verify_total}\n\
             # HELP curve25519_verify_success Successful verify operations\n\
             # TYPE curve25519_verify_success counter\n\
             curve25519_verify_success {verify_success}\n\
             # HELP curve25519_verify_failure Failed verify operations\n\
             # TYPE curve25519_verify_failure counter\n\
             curve25519_verify_failure {verify_failure}\n\
             # HELP curve25519_verify_duration_microseconds_avg Average verify duration\n\
             # TYPE curve25519_verify_duration_microseconds_avg gauge\n\
             curve25519_verify_duration_microseconds_avg {avg_verify_us}\n\
             # HELP curve25519_verify_batch_total Total verify_batch calls\n\
             # TYPE curve25519_verify_batch_total counter\n\
             curve25519_verify_batch_total {batch_total}\n\
             # HELP curve25519_verify_batch_success Successful verify_batch calls\n\
             # TYPE curve25519_verify_batch_success counter\n\
             curve25519_verify_batch_success {batch_success}\n\
             # HELP curve25519_verify_batch_failure Failed verify_batch calls\n\
             # TYPE curve25519_verify_batch_failure counter\n\
             curve25519_verify_batch_failure {batch_failure}\n\
             # HELP curve25519_verify_batch_members Total signatures seen across verify_batch calls\n\
             # TYPE curve25519_verify_batch_members counter\n\
             curve25519_verify_batch_members {batch_members}\n"
        )
    }

    /// JSON-formatted metrics snapshot.
    #[must_use]
    pub fn json_format(&self) -> String {
        format!(
            "{{\"sign\":{{\"total\":{}}},\"verify\":{{\"total\":{},\"success\":{},\"failure\":{}}},\
             \"verify_batch\":{{\"total\":{},\"success\":{},\"failure\":{},\"members\":{}}}}}",
            self.sign_total.load(Ordering::Relaxed),
            self.verify_total.load(Ordering::Relaxed),
            self.verify_success.load(Ordering::Relaxed),
            self.verify_failure.load(Ordering::Relaxed),
            self.verify_batch_total.load(Ordering::Relaxed),
            self.verify_batch_success.load(Ordering::Relaxed),
            self.verify_batch_failure.load(Ordering::Relaxed),
            self.verify_batch_members.load(Ordering::Relaxed),
        )
    }
}
