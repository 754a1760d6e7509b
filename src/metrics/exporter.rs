use std::io::Write;
use std::sync::Mutex;

use crate::metrics::snapshot::UniqueListMetricsSnapshot;
use crate::metrics::traits::MetricsExporter;

/// Prometheus text exporter for list metrics snapshots.
///
/// Writes the Prometheus text exposition format so the output can be scraped
/// by Prometheus or forwarded to an OpenTelemetry collector.
#[derive(Debug)]
pub struct PrometheusTextExporter<W: Write + Send + Sync> {
    prefix: String,
    writer: Mutex<W>,
}

impl<W: Write + Send + Sync> PrometheusTextExporter<W> {
    pub fn new(prefix: impl Into<String>, writer: W) -> Self {
        Self {
            prefix: prefix.into(),
            writer: Mutex::new(writer),
        }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_counter(&self, name: &str, value: u64) {
        let mut writer = self
            .writer
            .lock()
            .expect("metrics exporter writer poisoned");
        let _ = writeln!(writer, "# TYPE {} counter", name);
        let _ = writeln!(writer, "{} {}", name, value);
    }

    fn write_gauge(&self, name: &str, value: u64) {
        let mut writer = self
            .writer
            .lock()
            .expect("metrics exporter writer poisoned");
        let _ = writeln!(writer, "# TYPE {} gauge", name);
        let _ = writeln!(writer, "{} {}", name, value);
    }

    fn metric_name(&self, suffix: &str) -> String {
        if self.prefix.is_empty() {
            suffix.to_string()
        } else {
            format!("{}_{}", self.prefix, suffix)
        }
    }
}

impl<W: Write + Send + Sync> MetricsExporter<UniqueListMetricsSnapshot>
    for PrometheusTextExporter<W>
{
    fn export(&self, snapshot: &UniqueListMetricsSnapshot) {
        self.write_counter(&self.metric_name("add_calls_total"), snapshot.add_calls);
        self.write_counter(&self.metric_name("add_new_total"), snapshot.add_new);
        self.write_counter(
            &self.metric_name("add_relinked_total"),
            snapshot.add_relinked,
        );
        self.write_counter(
            &self.metric_name("add_rejected_total"),
            snapshot.add_rejected,
        );
        self.write_counter(
            &self.metric_name("remove_calls_total"),
            snapshot.remove_calls,
        );
        self.write_counter(
            &self.metric_name("remove_found_total"),
            snapshot.remove_found,
        );
        self.write_counter(&self.metric_name("move_calls_total"), snapshot.move_calls);
        self.write_counter(
            &self.metric_name("move_relinked_total"),
            snapshot.move_relinked,
        );
        self.write_counter(
            &self.metric_name("move_at_end_total"),
            snapshot.move_at_end,
        );
        self.write_counter(
            &self.metric_name("contains_calls_total"),
            snapshot.contains_calls,
        );
        self.write_counter(
            &self.metric_name("contains_hits_total"),
            snapshot.contains_hits,
        );
        self.write_counter(&self.metric_name("clear_calls_total"), snapshot.clear_calls);
        self.write_gauge(&self.metric_name("len"), snapshot.len as u64);
        self.write_gauge(&self.metric_name("capacity"), snapshot.capacity as u64);
    }
}
