//! Logging and observability
//!
//! Structured logging with:
//! - Human or JSON console output on stderr
//! - Configurable log levels
//! - Optional local file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use pii_setup::logging::init_logging;
//! use pii_setup::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log the outcome of a store mutation
///
/// # Example
///
/// ```no_run
/// use pii_setup::log_mutation;
///
/// log_mutation!("update", "42", 7);
/// ```
#[macro_export]
macro_rules! log_mutation {
    ($operation:expr, $id:expr, $count:expr) => {
        tracing::info!(
            operation = $operation,
            configuration_id = %$id,
            cached = $count,
            "Configuration list updated"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use pii_setup::log_error_with_context;
///
/// log_error_with_context!("HTTP error! status: 500", "Failed to add configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
