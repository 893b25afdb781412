//! Remote store adapter
//!
//! The API client: the sole boundary between the application and the REST
//! store holding PII configuration records.

pub mod client;
pub mod normalize;
pub mod service;

pub use client::PiiApiClient;
pub use service::{ApiResponse, ConfigurationService};
