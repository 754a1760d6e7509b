#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UniqueListMetricsSnapshot {
    pub add_calls: u64,
    pub add_new: u64,
    pub add_relinked: u64,
    pub add_rejected: u64,

    pub remove_calls: u64,
    pub remove_found: u64,

    pub move_calls: u64,
    pub move_relinked: u64,
    pub move_at_end: u64,

    pub contains_calls: u64,
    pub contains_hits: u64,

    pub clear_calls: u64,

    // gauges captured at snapshot time
    pub len: usize,
    pub capacity: usize,
}

impl UniqueListMetricsSnapshot {
    /// Removals that found nothing (empty list or absent value).
    pub fn remove_misses(&self) -> u64 {
        self.remove_calls - self.remove_found
    }

    /// Moves that named a value not in the list.
    pub fn move_absent(&self) -> u64 {
        self.move_calls - self.move_relinked - self.move_at_end
    }

    /// Fraction of `contains` calls that hit, `0.0` before the first call.
    pub fn contains_hit_rate(&self) -> f64 {
        if self.contains_calls == 0 {
            0.0
        } else {
            self.contains_hits as f64 / self.contains_calls as f64
        }
    }
}
