//! # Metrics Traits
//!
//! Recording, snapshotting and export are split into small traits so the
//! list's link surgery does not depend on how counters are consumed.
//!
//! ```text
//!   UniqueIndexedList ──► UniqueListMetricsRecorder      (&mut self paths)
//!                    └──► UniqueListMetricsReadRecorder  (&self paths)
//!
//!   Consumption:
//!   ┌──────────────────────────────┐    ┌──────────────────────────────┐
//!   │ MetricsSnapshotProvider<S>   │    │ MetricsExporter<S>           │
//!   │ (bench/test)                 │    │ (production monitoring)      │
//!   └──────────────────────────────┘    └──────────────────────────────┘
//! ```

/// Counters bumped by mutating list operations.
pub trait UniqueListMetricsRecorder {
    fn record_add_call(&mut self);
    /// A fresh entry was linked.
    fn record_add_new(&mut self);
    /// An equal value was present and its entry was relinked instead.
    fn record_add_relinked(&mut self);
    /// A strict insertion refused an equal value.
    fn record_add_rejected(&mut self);
    fn record_remove_call(&mut self);
    fn record_remove_found(&mut self);
    fn record_move_call(&mut self);
    /// The entry changed position.
    fn record_move_relinked(&mut self);
    /// The entry was already at the requested end.
    fn record_move_at_end(&mut self);
    fn record_clear(&mut self);
}

/// Counters bumped by lookups (uses interior mutability).
pub trait UniqueListMetricsReadRecorder {
    fn record_contains_call(&self);
    fn record_contains_hit(&self);
}

/// Snapshot provider for bench/testing.
pub trait MetricsSnapshotProvider<S> {
    fn snapshot(&self) -> S;
}

/// Reset metrics between tests or benchmark iterations.
pub trait MetricsReset {
    fn reset_metrics(&mut self);
}

/// Export/publish metrics to production monitoring backends.
pub trait MetricsExporter<S> {
    fn export(&self, snapshot: &S);
}
