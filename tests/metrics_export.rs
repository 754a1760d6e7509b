// ==============================================
// METRICS EXPORT (integration)
// ==============================================
//
// Drives a list through a short workload and publishes its counters in
// Prometheus text format.

#![cfg(feature = "metrics")]

use unique_deque::ds::UniqueIndexedList;
use unique_deque::metrics::exporter::PrometheusTextExporter;
use unique_deque::metrics::traits::{MetricsExporter, MetricsReset, MetricsSnapshotProvider};

#[test]
fn workload_counters_are_exported() {
    let mut list = UniqueIndexedList::with_capacity(8);
    for v in 0..6u32 {
        list.add_last(v);
    }
    list.add_first(3);
    list.move_to_tail(&0);
    list.move_to_tail(&0);
    list.remove_first();
    list.remove_last();
    list.contains(&1);

    let snapshot = list.snapshot();
    assert_eq!(snapshot.add_calls, 7);
    assert_eq!(snapshot.add_new, 6);
    assert_eq!(snapshot.add_relinked, 1);
    assert_eq!(snapshot.move_relinked, 1);
    assert_eq!(snapshot.move_at_end, 1);
    assert_eq!(snapshot.remove_found, 2);
    assert_eq!(snapshot.len, 4);

    let exporter = PrometheusTextExporter::new("recency", Vec::new());
    exporter.export(&snapshot);
    let text = String::from_utf8(exporter.into_inner()).unwrap();
    assert!(text.contains("recency_add_calls_total 7\n"));
    assert!(text.contains("recency_add_relinked_total 1\n"));
    assert!(text.contains("recency_remove_found_total 2\n"));
    assert!(text.contains("recency_contains_hits_total 1\n"));
    assert!(text.contains("recency_len 4\n"));
}

#[test]
fn reset_clears_counters_but_not_contents() {
    let mut list = UniqueIndexedList::new();
    list.add_last("a");
    list.add_last("b");
    list.reset_metrics();

    let snapshot = list.snapshot();
    assert_eq!(snapshot.add_calls, 0);
    assert_eq!(snapshot.len, 2);
    assert!(list.contains(&"a"));
}

#[test]
fn clone_starts_with_fresh_counters() {
    let mut list = UniqueIndexedList::new();
    list.add_last(1);
    let copy = list.clone();
    assert_eq!(copy.snapshot().add_calls, 0);
    assert_eq!(list.snapshot().add_calls, 1);
}
