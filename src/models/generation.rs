use garde::Validate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::description::{GeneratedDescription, MaintenanceType, ValidationResult};
use crate::models::part::ProductAttributes;

/// Request to submit a description generation job.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateRequest {
    #[garde(dive)]
    pub attributes: ProductAttributes,

    /// PIES description code, e.g. "FULL_DESC". Unknown codes degrade to
    /// the generic purpose text and the default 255-character budget.
    #[garde(length(min = 1, max = 32))]
    pub description_code: String,

    /// PIES language code, e.g. "ENGL". Unknown codes default to English.
    #[serde(default = "default_language_code")]
    #[garde(length(min = 1, max = 8))]
    pub language_code: String,

    #[serde(default)]
    #[garde(skip)]
    pub maintenance_type: MaintenanceType,

    #[serde(default = "default_sequence")]
    #[garde(range(min = 1, max = 999))]
    pub sequence: u16,
}

fn default_language_code() -> String {
    "ENGL".to_string()
}

fn default_sequence() -> u16 {
    1
}

/// Response after submitting a generation job.
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub job_id: Uuid,
    pub status: String,
    pub message: String,
}

/// Response for querying job status.
#[derive(Debug, Serialize)]
pub struct JobStatusResponse {
    pub job_id: Uuid,
    pub status: String,
    pub result: Option<serde_json::Value>,
    pub error: Option<String>,
}

/// Final product of a generation job: the description in export field
/// order plus the validation verdict the caller branches on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DescriptionOutcome {
    pub description: GeneratedDescription,
    pub validation: ValidationResult,
}

/// One entry in the description-code catalog listing.
#[derive(Debug, Serialize)]
pub struct CatalogEntry {
    pub code: String,
    pub purpose: String,
    pub max_length: usize,
}

/// Request to re-validate description text, e.g. after a manual edit.
#[derive(Debug, Deserialize, Validate)]
pub struct ValidateRequest {
    #[garde(length(min = 1, max = 32))]
    pub description_code: String,

    #[garde(length(max = 10000))]
    pub text: String,
}
