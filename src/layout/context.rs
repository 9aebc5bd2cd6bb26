use serde_json::Value;

use crate::config::LayoutConfig;
use crate::logging::{LogLevel, Logger, default_logger, event_with_fields};
use crate::metrics::LayoutMetrics;

pub(crate) const PLOT_TARGET: &str = "layout::plot";

/// Per-pass state threaded through [`plot`](super::plot): configuration,
/// the logging side channel and counters.
#[derive(Debug, Clone)]
pub struct LayoutContext {
    config: LayoutConfig,
    logger: Option<Logger>,
    metrics: LayoutMetrics,
}

impl Default for LayoutContext {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutContext {
    /// Default configuration, logging to the process default logger if one
    /// was installed.
    pub fn new() -> Self {
        Self {
            config: LayoutConfig::default(),
            logger: default_logger(),
            metrics: LayoutMetrics::new(),
        }
    }

    pub fn with_config(mut self, config: LayoutConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn without_logger(mut self) -> Self {
        self.logger = None;
        self
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn metrics(&self) -> &LayoutMetrics {
        &self.metrics
    }

    pub(crate) fn metrics_mut(&mut self) -> &mut LayoutMetrics {
        &mut self.metrics
    }

    pub(crate) fn logger(&self) -> Option<&Logger> {
        self.logger.as_ref()
    }

    pub(crate) fn log<I>(&self, level: LogLevel, message: &str, fields: I)
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        if let Some(logger) = self.logger.as_ref() {
            let event = event_with_fields(level, PLOT_TARGET, message, fields);
            let _ = logger.log_event(event);
        }
    }

    /// Per-node records, only when tracing is configured.
    pub(crate) fn trace<I>(&self, message: &str, fields: I)
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        if self.config.trace {
            self.log(LogLevel::Trace, message, fields);
        }
    }
}
