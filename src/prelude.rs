pub use crate::builder::UniqueListBuilder;
pub use crate::ds::{Stack, UniqueIndexedList};
pub use crate::error::{DuplicateValue, InvariantError};
#[cfg(feature = "metrics")]
pub use crate::metrics::snapshot::UniqueListMetricsSnapshot;
