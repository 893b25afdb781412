//! Closed vocabularies used by PII configuration records
//!
//! Both enums serialize as the human-readable strings the remote store keeps,
//! e.g. `"Contact Information"` and `"High"`. Strings outside the known set
//! are kept verbatim in an `Other` variant so they survive an edit.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of personal data a field holds
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PiiCategory {
    PersonalIdentifiers,
    ContactInformation,
    FinancialInformation,
    HealthInformation,
    BiometricData,
    LocationData,
    EmploymentInformation,
    EducationalInformation,
    /// A value the store holds that is not one of the form's options
    Other(String),
}

impl PiiCategory {
    /// Every category, in the order the form offers them
    pub const ALL: [PiiCategory; 8] = [
        PiiCategory::PersonalIdentifiers,
        PiiCategory::ContactInformation,
        PiiCategory::FinancialInformation,
        PiiCategory::HealthInformation,
        PiiCategory::BiometricData,
        PiiCategory::LocationData,
        PiiCategory::EmploymentInformation,
        PiiCategory::EducationalInformation,
    ];

    /// Display string, identical to the wire value
    pub fn as_str(&self) -> &str {
        match self {
            PiiCategory::PersonalIdentifiers => "Personal Identifiers",
            PiiCategory::ContactInformation => "Contact Information",
            PiiCategory::FinancialInformation => "Financial Information",
            PiiCategory::HealthInformation => "Health Information",
            PiiCategory::BiometricData => "Biometric Data",
            PiiCategory::LocationData => "Location Data",
            PiiCategory::EmploymentInformation => "Employment Information",
            PiiCategory::EducationalInformation => "Educational Information",
            PiiCategory::Other(raw) => raw,
        }
    }

    /// One of the form's options, matched case-insensitively
    fn known(raw: &str) -> Option<Self> {
        let wanted = raw.trim();
        PiiCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
    }
}

impl From<String> for PiiCategory {
    fn from(raw: String) -> Self {
        PiiCategory::known(&raw).unwrap_or(PiiCategory::Other(raw))
    }
}

impl From<PiiCategory> for String {
    fn from(category: PiiCategory) -> Self {
        match category {
            PiiCategory::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for PiiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PiiCategory {
    type Err = String;

    /// Accepts one of the known display strings, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PiiCategory::known(s).ok_or_else(|| {
            let options: Vec<String> = PiiCategory::ALL.into_iter().map(String::from).collect();
            format!(
                "Unknown PII category '{s}'. Must be one of: {}",
                options.join(", ")
            )
        })
    }
}

/// Coarse sensitivity classification of a data element
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SensitivityLevel {
    High,
    #[default]
    Medium,
    Low,
    Other(String),
}

impl SensitivityLevel {
    pub const ALL: [SensitivityLevel; 3] = [
        SensitivityLevel::High,
        SensitivityLevel::Medium,
        SensitivityLevel::Low,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            SensitivityLevel::High => "High",
            SensitivityLevel::Medium => "Medium",
            SensitivityLevel::Low => "Low",
            SensitivityLevel::Other(raw) => raw,
        }
    }

    /// Badge style used when the level is shown in the list
    pub fn badge_variant(&self) -> BadgeVariant {
        match self {
            SensitivityLevel::High => BadgeVariant::Destructive,
            SensitivityLevel::Medium => BadgeVariant::Default,
            SensitivityLevel::Low => BadgeVariant::Secondary,
            SensitivityLevel::Other(_) => BadgeVariant::Outline,
        }
    }
}

impl From<String> for SensitivityLevel {
    fn from(raw: String) -> Self {
        raw.parse().unwrap_or(SensitivityLevel::Other(raw))
    }
}

impl From<SensitivityLevel> for String {
    fn from(level: SensitivityLevel) -> Self {
        match level {
            SensitivityLevel::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for SensitivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SensitivityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(SensitivityLevel::High),
            "medium" => Ok(SensitivityLevel::Medium),
            "low" => Ok(SensitivityLevel::Low),
            _ => Err(format!(
                "Invalid sensitivity level '{s}'. Must be one of: High, Medium, Low"
            )),
        }
    }
}

/// Visual emphasis of a badge cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    Destructive,
    Default,
    Secondary,
    Outline,
}

impl BadgeVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeVariant::Destructive => "destructive",
            BadgeVariant::Default => "default",
            BadgeVariant::Secondary => "secondary",
            BadgeVariant::Outline => "outline",
        }
    }
}
