//! Logger capability passed into every core operation.
//!
//! Components never read process-wide verbosity. They receive a [`Logger`]
//! and it decides whether an event is emitted; `tracing` is only the sink.

use std::fmt;

use serde::Deserialize;
use tracing::level_filters::LevelFilter;

/// Verbosity, ordered from quietest to loudest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Silent,
    Error,
    #[default]
    Info,
    Debug,
}

impl LogLevel {
    /// Level filter for the tracing subscriber.
    pub fn filter(self) -> LevelFilter {
        match self {
            LogLevel::Silent => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
        }
    }
}

/// Level-gated logger handed to components.
#[derive(Debug, Clone, Copy, Default)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    pub fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Logger that emits nothing. Used by tests.
    pub fn silent() -> Self {
        Self::new(LogLevel::Silent)
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Derive a logger that only reports errors.
    pub fn quiet(&self) -> Self {
        Self::new(self.level.min(LogLevel::Error))
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        level != LogLevel::Silent && self.level >= level
    }

    pub fn error(&self, args: fmt::Arguments<'_>) {
        if self.enabled(LogLevel::Error) {
            tracing::error!("{}", args);
        }
    }

    pub fn warn(&self, args: fmt::Arguments<'_>) {
        // warnings ride along with info
        if self.enabled(LogLevel::Info) {
            tracing::warn!("{}", args);
        }
    }

    pub fn info(&self, args: fmt::Arguments<'_>) {
        if self.enabled(LogLevel::Info) {
            tracing::info!("{}", args);
        }
    }

    pub fn debug(&self, args: fmt::Arguments<'_>) {
        if self.enabled(LogLevel::Debug) {
            tracing::debug!("{}", args);
        }
    }
}
