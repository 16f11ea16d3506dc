//! Incident model

use serde::{Deserialize, Serialize};

/// CSV headers the dashboard depends on. Names and units are part of the
/// dataset contract and must match the file byte for byte.
pub mod columns {
    pub const YEAR: &str = "Year";
    pub const COUNTRY: &str = "Country";
    pub const FINANCIAL_LOSS: &str = "Financial Loss (in Million $)";
    pub const ATTACK_TYPE: &str = "Attack Type";
    pub const TARGET_INDUSTRY: &str = "Target Industry";
    pub const ATTACK_SOURCE: &str = "Attack Source";
    pub const RESOLUTION_TIME: &str = "Incident Resolution Time (in Hours)";
    pub const AFFECTED_USERS: &str = "Number of Affected Users";

    pub const REQUIRED: [&str; 8] = [
        YEAR,
        COUNTRY,
        FINANCIAL_LOSS,
        ATTACK_TYPE,
        TARGET_INDUSTRY,
        ATTACK_SOURCE,
        RESOLUTION_TIME,
        AFFECTED_USERS,
    ];
}

/// One row of the incident dataset. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentRecord {
    #[serde(rename = "Year")]
    pub year: i32,

    #[serde(rename = "Country")]
    pub country: String,

    /// Millions of USD
    #[serde(rename = "Financial Loss (in Million $)")]
    pub financial_loss: f64,

    #[serde(rename = "Attack Type")]
    pub attack_type: String,

    #[serde(rename = "Target Industry")]
    pub target_industry: String,

    #[serde(rename = "Attack Source")]
    pub attack_source: String,

    /// Hours
    #[serde(rename = "Incident Resolution Time (in Hours)")]
    pub resolution_time: f64,

    #[serde(rename = "Number of Affected Users")]
    pub affected_users: u64,

    #[serde(rename = "Security Vulnerability Type", default)]
    pub vulnerability_type: Option<String>,

    #[serde(rename = "Defense Mechanism Used", default)]
    pub defense_mechanism: Option<String>,
}

impl IncidentRecord {
    /// Minimal record for tests and fixtures; optional columns left empty.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        year: i32,
        country: impl Into<String>,
        financial_loss: f64,
        attack_type: impl Into<String>,
        target_industry: impl Into<String>,
        attack_source: impl Into<String>,
        resolution_time: f64,
        affected_users: u64,
    ) -> Self {
        Self {
            year,
            country: country.into(),
            financial_loss,
            attack_type: attack_type.into(),
            target_industry: target_industry.into(),
            attack_source: attack_source.into(),
            resolution_time,
            affected_users,
            vulnerability_type: None,
            defense_mechanism: None,
        }
    }

    /// Name of the first numeric column holding an unusable value, if any.
    pub fn invalid_numeric_column(&self) -> Option<&'static str> {
        if !self.financial_loss.is_finite() || self.financial_loss < 0.0 {
            return Some(columns::FINANCIAL_LOSS);
        }
        if !self.resolution_time.is_finite() || self.resolution_time < 0.0 {
            return Some(columns::RESOLUTION_TIME);
        }
        None
    }
}
