//! Normalization of raw records received from the remote store
//!
//! The store is schemaless: fields may be missing, `null`, or of the wrong
//! type. Every record is back-filled here so the rest of the crate only ever
//! sees fully populated [`PiiConfiguration`] values.
//!
//! Rules:
//! - text fields: falsy values (`null`, `false`, `0`, `""`, missing) become
//!   `""`; other non-string scalars are stringified
//! - booleans: truthiness (`null`, `false`, `0`, `""`, missing are false)
//! - sensitivity: falsy becomes `Medium`; unrecognised strings are kept
//! - category: falsy becomes no category; unrecognised strings are kept
//! - records without a usable `id` are dropped

use crate::domain::{
    ConfigurationId, PiiCategory, PiiConfiguration, RemoteError, SensitivityLevel,
};
use serde_json::{Map, Value};

/// Normalizes a list response
///
/// # Errors
///
/// Returns [`RemoteError::InvalidResponse`] when the body is not a JSON array.
pub fn normalize_records(raw: Value) -> Result<Vec<PiiConfiguration>, RemoteError> {
    let Value::Array(items) = raw else {
        return Err(RemoteError::InvalidResponse(format!(
            "Expected a JSON array of configurations, got {}",
            kind(&raw)
        )));
    };

    let total = items.len();
    let records: Vec<PiiConfiguration> = items.iter().filter_map(normalize_record).collect();

    if records.len() < total {
        tracing::warn!(
            received = total,
            kept = records.len(),
            "Skipped configurations without a usable id"
        );
    }

    Ok(records)
}

/// Normalizes a single record response (create or update)
///
/// # Errors
///
/// Returns [`RemoteError::InvalidResponse`] when the body is not an object
/// with a usable `id`.
pub fn normalize_single(raw: Value) -> Result<PiiConfiguration, RemoteError> {
    normalize_record(&raw).ok_or_else(|| {
        RemoteError::InvalidResponse(format!(
            "Expected a configuration record with an id, got {}",
            kind(&raw)
        ))
    })
}

/// Normalizes one raw item; `None` when it is not an object or has no id
pub fn normalize_record(raw: &Value) -> Option<PiiConfiguration> {
    let obj = raw.as_object()?;

    let id = match id_of(obj) {
        Some(id) => id,
        None => {
            tracing::warn!(record = %raw, "Skipping configuration without id");
            return None;
        }
    };

    Some(PiiConfiguration {
        pii_category: category_of(obj.get("piiCategory")),
        data_element_name: text(obj.get("dataElementName")),
        description: text(obj.get("description")),
        sensitivity_level: sensitivity_of(obj.get("sensitivityLevel")),
        masking_required: truthy(obj.get("maskingRequired")),
        encryption_required: truthy(obj.get("encryptionRequired")),
        access_control_level: text(obj.get("accessControlLevel")),
        retention_policy: text(obj.get("retentionPolicy")),
        purpose: text(obj.get("purpose")),
        created_at: optional_text(obj.get("createdAt")),
        updated_at: optional_text(obj.get("updatedAt")),
        id,
    })
}

/// Loose truthiness over JSON values
///
/// Missing, `null`, `false`, `0`, `NaN` and `""` are false; everything else,
/// including empty arrays and objects, is true.
pub fn truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

fn text(value: Option<&Value>) -> String {
    optional_text(value).unwrap_or_default()
}

fn optional_text(value: Option<&Value>) -> Option<String> {
    if !truthy(value) {
        return None;
    }
    match value? {
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn id_of(obj: &Map<String, Value>) -> Option<ConfigurationId> {
    optional_text(obj.get("id")).and_then(|id| ConfigurationId::new(id).ok())
}

fn sensitivity_of(value: Option<&Value>) -> SensitivityLevel {
    let level = optional_text(value).map(SensitivityLevel::from).unwrap_or_default();
    if let SensitivityLevel::Other(raw) = &level {
        tracing::debug!(value = %raw, "Keeping unrecognised sensitivity level");
    }
    level
}

fn category_of(value: Option<&Value>) -> Option<PiiCategory> {
    let category = PiiCategory::from(optional_text(value)?);
    if let PiiCategory::Other(raw) = &category {
        tracing::debug!(value = %raw, "Keeping unrecognised PII category");
    }
    Some(category)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
