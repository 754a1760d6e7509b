use crate::metrics::cell::MetricsCell;
use crate::metrics::snapshot::UniqueListMetricsSnapshot;
use crate::metrics::traits::{UniqueListMetricsReadRecorder, UniqueListMetricsRecorder};

#[derive(Debug, Default)]
pub struct UniqueListMetrics {
    pub add_calls: u64,
    pub add_new: u64,
    pub add_relinked: u64,
    pub add_rejected: u64,
    pub remove_calls: u64,
    pub remove_found: u64,
    pub move_calls: u64,
    pub move_relinked: u64,
    pub move_at_end: u64,
    pub clear_calls: u64,
    pub contains_calls: MetricsCell,
    pub contains_hits: MetricsCell,
}

impl UniqueListMetrics {
    /// Copies the counters out, attaching the gauges supplied by the list.
    pub fn snapshot(&self, len: usize, capacity: usize) -> UniqueListMetricsSnapshot {
        UniqueListMetricsSnapshot {
            add_calls: self.add_calls,
            add_new: self.add_new,
            add_relinked: self.add_relinked,
            add_rejected: self.add_rejected,
            remove_calls: self.remove_calls,
            remove_found: self.remove_found,
            move_calls: self.move_calls,
            move_relinked: self.move_relinked,
            move_at_end: self.move_at_end,
            clear_calls: self.clear_calls,
            contains_calls: self.contains_calls.get(),
            contains_hits: self.contains_hits.get(),
            len,
            capacity,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl UniqueListMetricsRecorder for UniqueListMetrics {
    fn record_add_call(&mut self) {
        self.add_calls += 1;
    }

    fn record_add_new(&mut self) {
        self.add_new += 1;
    }

    fn record_add_relinked(&mut self) {
        self.add_relinked += 1;
    }

    fn record_add_rejected(&mut self) {
        self.add_rejected += 1;
    }

    fn record_remove_call(&mut self) {
        self.remove_calls += 1;
    }

    fn record_remove_found(&mut self) {
        self.remove_found += 1;
    }

    fn record_move_call(&mut self) {
        self.move_calls += 1;
    }

    fn record_move_relinked(&mut self) {
        self.move_relinked += 1;
    }

    fn record_move_at_end(&mut self) {
        self.move_at_end += 1;
    }

    fn record_clear(&mut self) {
        self.clear_calls += 1;
    }
}

impl UniqueListMetricsReadRecorder for &UniqueListMetrics {
    fn record_contains_call(&self) {
        self.contains_calls.incr();
    }

    fn record_contains_hit(&self) {
        self.contains_hits.incr();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorder_counts_land_in_snapshot() {
        let mut metrics = UniqueListMetrics::default();
        metrics.record_add_call();
        metrics.record_add_new();
        metrics.record_move_call();
        metrics.record_move_at_end();
        (&metrics).record_contains_call();
        (&metrics).record_contains_hit();

        let snap = metrics.snapshot(1, 8);
        assert_eq!(snap.add_calls, 1);
        assert_eq!(snap.add_new, 1);
        assert_eq!(snap.move_calls, 1);
        assert_eq!(snap.move_at_end, 1);
        assert_eq!(snap.contains_calls, 1);
        assert_eq!(snap.contains_hits, 1);
        assert_eq!(snap.len, 1);
        assert_eq!(snap.capacity, 8);
    }

    #[test]
    fn reset_zeroes_every_counter() {
        let mut metrics = UniqueListMetrics::default();
        metrics.record_clear();
        metrics.record_remove_call();
        (&metrics).record_contains_call();
        metrics.reset();

        let snap = metrics.snapshot(0, 0);
        assert_eq!(snap.clear_calls, 0);
        assert_eq!(snap.remove_calls, 0);
        assert_eq!(snap.contains_calls, 0);
    }
}
