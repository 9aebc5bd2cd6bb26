use crate::logging::{LogEvent, LogFields, LogLevel};
use serde_json::json;

/// Counters accumulated across layout passes.
#[derive(Debug, Default, Clone)]
pub struct LayoutMetrics {
    passes: u64,
    plotted: u64,
    skipped: u64,
    overflow_resets: u64,
    clipped: u64,
}

impl LayoutMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_pass(&mut self) {
        self.passes = self.passes.saturating_add(1);
    }

    pub fn record_plotted(&mut self) {
        self.plotted = self.plotted.saturating_add(1);
    }

    pub fn record_skipped(&mut self) {
        self.skipped = self.skipped.saturating_add(1);
    }

    pub fn record_overflow_reset(&mut self) {
        self.overflow_resets = self.overflow_resets.saturating_add(1);
    }

    pub fn record_clipped(&mut self) {
        self.clipped = self.clipped.saturating_add(1);
    }

    pub fn snapshot(&self) -> MetricSnapshot {
        MetricSnapshot {
            passes: self.passes,
            plotted: self.plotted,
            skipped: self.skipped,
            overflow_resets: self.overflow_resets,
            clipped: self.clipped,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricSnapshot {
    pub passes: u64,
    pub plotted: u64,
    pub skipped: u64,
    pub overflow_resets: u64,
    pub clipped: u64,
}

impl MetricSnapshot {
    pub fn to_log_event(&self, target: &str) -> LogEvent {
        LogEvent::with_fields(LogLevel::Debug, target, "pass.completed", self.as_fields())
    }

    pub fn as_fields(&self) -> LogFields {
        let mut map = LogFields::new();
        map.insert("passes".to_string(), json!(self.passes));
        map.insert("plotted".to_string(), json!(self.plotted));
        map.insert("skipped".to_string(), json!(self.skipped));
        map.insert("overflow_resets".to_string(), json!(self.overflow_resets));
        map.insert("clipped".to_string(), json!(self.clipped));
        map
    }
}
