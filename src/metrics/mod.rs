//! Operation counters for [`UniqueIndexedList`](crate::ds::UniqueIndexedList).
//!
//! Enabled with the `metrics` feature. Recording lives in
//! [`metrics_impl`], reading in [`snapshot`], publishing in [`exporter`].

pub mod cell;
pub mod exporter;
pub mod metrics_impl;
pub mod snapshot;
pub mod traits;
