//! PII configuration records and their editable projection

use super::category::{PiiCategory, SensitivityLevel};
use super::ids::ConfigurationId;
use serde::{Deserialize, Serialize};

/// A stored PII configuration as held by the remote store
///
/// Every field except the two timestamps is always populated; records coming
/// off the wire are normalized before they reach this type (see
/// [`crate::adapters::remote::normalize`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PiiConfiguration {
    /// Assigned by the remote store on create
    pub id: ConfigurationId,

    #[serde(with = "category_or_empty")]
    pub pii_category: Option<PiiCategory>,

    pub data_element_name: String,

    pub description: String,

    pub sensitivity_level: SensitivityLevel,

    pub masking_required: bool,

    pub encryption_required: bool,

    pub access_control_level: String,

    pub retention_policy: String,

    pub purpose: String,

    /// Opaque timestamp set by the remote store
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    /// Opaque timestamp set by the remote store
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl PiiConfiguration {
    /// Combines a store-assigned id with submitted form data
    pub fn from_form(id: ConfigurationId, form: PiiConfigurationFormData) -> Self {
        Self {
            id,
            pii_category: form.pii_category,
            data_element_name: form.data_element_name,
            description: form.description,
            sensitivity_level: form.sensitivity_level,
            masking_required: form.masking_required,
            encryption_required: form.encryption_required,
            access_control_level: form.access_control_level,
            retention_policy: form.retention_policy,
            purpose: form.purpose,
            created_at: None,
            updated_at: None,
        }
    }

    /// Editable projection: everything except `id` and the timestamps
    pub fn form_data(&self) -> PiiConfigurationFormData {
        PiiConfigurationFormData {
            pii_category: self.pii_category.clone(),
            data_element_name: self.data_element_name.clone(),
            description: self.description.clone(),
            sensitivity_level: self.sensitivity_level.clone(),
            masking_required: self.masking_required,
            encryption_required: self.encryption_required,
            access_control_level: self.access_control_level.clone(),
            retention_policy: self.retention_policy.clone(),
            purpose: self.purpose.clone(),
        }
    }

    /// Category as displayed, empty when unset
    pub fn category_label(&self) -> &str {
        self.pii_category.as_ref().map_or("", PiiCategory::as_str)
    }
}

/// The editable shape of a configuration, used while composing a create or
/// update request
///
/// `Default` is the template every new dialog session starts from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PiiConfigurationFormData {
    #[serde(with = "category_or_empty")]
    pub pii_category: Option<PiiCategory>,
    pub data_element_name: String,
    pub description: String,
    pub sensitivity_level: SensitivityLevel,
    pub masking_required: bool,
    pub encryption_required: bool,
    pub access_control_level: String,
    pub retention_policy: String,
    pub purpose: String,
}

impl PiiConfigurationFormData {
    /// Applies a single field edit
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::PiiCategory(v) => self.pii_category = v,
            FieldUpdate::DataElementName(v) => self.data_element_name = v,
            FieldUpdate::Description(v) => self.description = v,
            FieldUpdate::SensitivityLevel(v) => self.sensitivity_level = v,
            FieldUpdate::MaskingRequired(v) => self.masking_required = v,
            FieldUpdate::EncryptionRequired(v) => self.encryption_required = v,
            FieldUpdate::AccessControlLevel(v) => self.access_control_level = v,
            FieldUpdate::RetentionPolicy(v) => self.retention_policy = v,
            FieldUpdate::Purpose(v) => self.purpose = v,
        }
    }

    /// Builder-style variant of [`apply`](Self::apply)
    pub fn with(mut self, update: FieldUpdate) -> Self {
        self.apply(update);
        self
    }

    /// Required fields that are still blank
    ///
    /// Advisory only; submission never checks this.
    pub fn missing_required(&self) -> Vec<FormField> {
        FormField::ALL
            .into_iter()
            .filter(|field| field.is_required() && self.is_blank(*field))
            .collect()
    }

    fn is_blank(&self, field: FormField) -> bool {
        match field {
            FormField::PiiCategory => self.pii_category.is_none(),
            FormField::DataElementName => self.data_element_name.trim().is_empty(),
            FormField::Description => self.description.trim().is_empty(),
            FormField::AccessControlLevel => self.access_control_level.trim().is_empty(),
            FormField::RetentionPolicy => self.retention_policy.trim().is_empty(),
            FormField::Purpose => self.purpose.trim().is_empty(),
            FormField::SensitivityLevel
            | FormField::MaskingRequired
            | FormField::EncryptionRequired => false,
        }
    }
}

/// A typed edit of one form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    PiiCategory(Option<PiiCategory>),
    DataElementName(String),
    Description(String),
    SensitivityLevel(SensitivityLevel),
    MaskingRequired(bool),
    EncryptionRequired(bool),
    AccessControlLevel(String),
    RetentionPolicy(String),
    Purpose(String),
}

impl FieldUpdate {
    /// The field this update targets
    pub fn field(&self) -> FormField {
        match self {
            FieldUpdate::PiiCategory(_) => FormField::PiiCategory,
            FieldUpdate::DataElementName(_) => FormField::DataElementName,
            FieldUpdate::Description(_) => FormField::Description,
            FieldUpdate::SensitivityLevel(_) => FormField::SensitivityLevel,
            FieldUpdate::MaskingRequired(_) => FormField::MaskingRequired,
            FieldUpdate::EncryptionRequired(_) => FormField::EncryptionRequired,
            FieldUpdate::AccessControlLevel(_) => FormField::AccessControlLevel,
            FieldUpdate::RetentionPolicy(_) => FormField::RetentionPolicy,
            FieldUpdate::Purpose(_) => FormField::Purpose,
        }
    }
}

/// Identifier of an editable field, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    PiiCategory,
    DataElementName,
    Description,
    SensitivityLevel,
    MaskingRequired,
    EncryptionRequired,
    AccessControlLevel,
    RetentionPolicy,
    Purpose,
}

impl FormField {
    pub const ALL: [FormField; 9] = [
        FormField::PiiCategory,
        FormField::DataElementName,
        FormField::Description,
        FormField::SensitivityLevel,
        FormField::MaskingRequired,
        FormField::EncryptionRequired,
        FormField::AccessControlLevel,
        FormField::RetentionPolicy,
        FormField::Purpose,
    ];

    /// Wire name of the field
    pub fn key(&self) -> &'static str {
        match self {
            FormField::PiiCategory => "piiCategory",
            FormField::DataElementName => "dataElementName",
            FormField::Description => "description",
            FormField::SensitivityLevel => "sensitivityLevel",
            FormField::MaskingRequired => "maskingRequired",
            FormField::EncryptionRequired => "encryptionRequired",
            FormField::AccessControlLevel => "accessControlLevel",
            FormField::RetentionPolicy => "retentionPolicy",
            FormField::Purpose => "purpose",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::PiiCategory => "PII Category",
            FormField::DataElementName => "Data Element Name",
            FormField::Description => "Description",
            FormField::SensitivityLevel => "Sensitivity Level",
            FormField::MaskingRequired => "Masking Required",
            FormField::EncryptionRequired => "Encryption Required",
            FormField::AccessControlLevel => "Access Control Level",
            FormField::RetentionPolicy => "Retention Policy",
            FormField::Purpose => "Purpose",
        }
    }

    /// Whether the form marks this field with an asterisk
    pub fn is_required(&self) -> bool {
        !matches!(self, FormField::MaskingRequired | FormField::EncryptionRequired)
    }
}

/// Serializes an absent category as `""`, matching the defaults template
mod category_or_empty {
    use super::PiiCategory;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<PiiCategory>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(value.as_ref().map_or("", PiiCategory::as_str))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<PiiCategory>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw
            .filter(|s| !s.trim().is_empty())
            .map(PiiCategory::from))
    }
}
