use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// PIES description codes per the Auto Care PIES standard.
///
/// The code set is closed, but external input is matched as a string:
/// anything that fails to parse falls back to the generic purpose text and
/// the default 255-character budget instead of being rejected.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, EnumString, EnumIter, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DescriptionCode {
    ShortDesc,
    FitSummary,
    UserWarning,
    FullDesc,
    ExtendedDesc,
    FeatureBenefit,
    ImportantInfo,
    InstallGuide,
    InvoiceDesc,
    SearchTerms,
    LabelText,
    MarketingCopy,
    CondensedDesc,
    AltNames,
    TitleDesc,
    TechTipIntro,
    TechTipDetail,
}

/// PIES maintenance type attribute carried through to the export formats.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, EnumString, Display, PartialEq, Eq, Default)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum MaintenanceType {
    /// Add or update.
    #[default]
    Add,
    /// Delete.
    Del,
    /// No change.
    Noc,
}

/// One generated description, in export field order.
///
/// Collections of these are owned and ordered by the caller; the service
/// never accumulates them in shared state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratedDescription {
    pub language_code: String,
    pub maintenance_type: MaintenanceType,
    pub description_code: String,
    pub sequence: u16,
    pub description_text: String,
}

/// Result of checking a description against PIES length and character rules.
///
/// Issues are human-readable and ordered: the length check first, then one
/// entry per forbidden character found. Never an error — the caller decides
/// whether to accept, edit, or regenerate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub issues: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_description_code_round_trip() {
        assert_eq!(DescriptionCode::ShortDesc.to_string(), "SHORT_DESC");
        assert_eq!(
            DescriptionCode::from_str("MARKETING_COPY").unwrap(),
            DescriptionCode::MarketingCopy
        );
    }

    #[test]
    fn test_unknown_code_fails_parse() {
        assert!(DescriptionCode::from_str("NOT_A_CODE").is_err());
    }

    #[test]
    fn test_maintenance_type_display() {
        assert_eq!(MaintenanceType::Add.to_string(), "ADD");
        assert_eq!(MaintenanceType::Del.to_string(), "DEL");
        assert_eq!(MaintenanceType::Noc.to_string(), "NOC");
    }
}
