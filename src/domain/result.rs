//! Result type alias
//!
//! Convenience alias that uses [`PiiSetupError`] as the error type.

use super::errors::PiiSetupError;

/// Result type alias for PII setup operations
///
/// # Examples
///
/// ```
/// use pii_setup::domain::result::Result;
/// use pii_setup::domain::errors::PiiSetupError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(PiiSetupError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, PiiSetupError>;
