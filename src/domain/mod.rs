//! Domain models and types.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Records** ([`PiiConfiguration`]) and their editable projection
//!   ([`PiiConfigurationFormData`])
//! - **Closed vocabularies** ([`PiiCategory`], [`SensitivityLevel`])
//! - **Typed field edits** ([`FieldUpdate`], [`FormField`])
//! - **Error types** ([`PiiSetupError`], [`RemoteError`]) and the [`Result`] alias
//!
//! # Field Edits
//!
//! Form state is changed one field at a time through a single reducer:
//!
//! ```rust
//! use pii_setup::domain::{FieldUpdate, PiiCategory, PiiConfigurationFormData};
//!
//! let form = PiiConfigurationFormData::default()
//!     .with(FieldUpdate::PiiCategory(Some(PiiCategory::ContactInformation)))
//!     .with(FieldUpdate::DataElementName("Email".to_string()))
//!     .with(FieldUpdate::MaskingRequired(true));
//!
//! assert_eq!(form.data_element_name, "Email");
//! assert!(form.masking_required);
//! ```

pub mod category;
pub mod configuration;
pub mod errors;
pub mod ids;
pub mod result;

// Re-export commonly used types for convenience
pub use category::{BadgeVariant, PiiCategory, SensitivityLevel};
pub use configuration::{FieldUpdate, FormField, PiiConfiguration, PiiConfigurationFormData};
pub use errors::{PiiSetupError, RemoteError};
pub use ids::ConfigurationId;
pub use result::Result;
