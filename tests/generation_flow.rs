use std::sync::Mutex;

use pies_desc_genie::models::description::{GeneratedDescription, MaintenanceType};
use pies_desc_genie::models::part::ProductAttributes;
use pies_desc_genie::services::llm::{GenerationBackend, GenerationError};
use pies_desc_genie::services::{export, pipeline, prompt, sanitize, validation};

/// Backend double that replays canned responses and records prompts.
struct MockBackend {
    responses: Mutex<Vec<String>>,
    prompts: Mutex<Vec<String>>,
}

impl MockBackend {
    fn new(responses: Vec<&str>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().map(String::from).collect()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl GenerationBackend for MockBackend {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        let mut responses = self.responses.lock().unwrap();
        if responses.len() > 1 {
            Ok(responses.remove(0))
        } else {
            Ok(responses[0].clone())
        }
    }
}

fn oxygen_sensor() -> ProductAttributes {
    ProductAttributes {
        part_number: "OX100".to_string(),
        product_category: "Oxygen Sensor".to_string(),
        brand: "Bosch".to_string(),
        part_type: "Heated Zirconia O2 Sensor".to_string(),
        engine_application: Some("2.0L, 2.4L I4".to_string()),
        material: Some("Stainless steel body".to_string()),
        fitment: None,
    }
}

#[tokio::test]
async fn test_clean_generation_passes_validation() {
    let backend = MockBackend::new(vec![
        "Bosch heated zirconia oxygen sensor for precise air-fuel control",
    ]);

    let result = pipeline::generate_compliant_description(
        &backend,
        &oxygen_sensor(),
        "FULL_DESC",
        "ENGL",
        5,
    )
    .await
    .unwrap();

    assert!(result.validation.is_valid);
    assert_eq!(
        result.description_text,
        "Bosch heated zirconia oxygen sensor for precise air-fuel control"
    );

    // Exactly one backend call, with the generation prompt.
    let prompts = backend.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("OX100"));
    assert!(prompts[0].contains("Maximum length is 64 characters"));
}

#[tokio::test]
async fn test_markup_in_output_is_stripped_before_validation() {
    let backend = MockBackend::new(vec!["<p>Bosch oxygen sensor & \"OE\" quality</p>"]);

    let result = pipeline::generate_compliant_description(
        &backend,
        &oxygen_sensor(),
        "FULL_DESC",
        "ENGL",
        5,
    )
    .await
    .unwrap();

    assert!(result.validation.is_valid);
    assert_eq!(result.description_text, "pBosch oxygen sensor  OE qualityp");
}

#[tokio::test]
async fn test_over_length_output_triggers_shorten_prompts() {
    let long = "An extremely detailed description of an oxygen sensor that keeps going well past the budget";
    let backend = MockBackend::new(vec![long, long, "Bosch O2 sensor, OE-grade fit"]);

    let result = pipeline::generate_compliant_description(
        &backend,
        &oxygen_sensor(),
        "FULL_DESC",
        "ENGL",
        5,
    )
    .await
    .unwrap();

    assert!(result.validation.is_valid);
    assert_eq!(result.description_text, "Bosch O2 sensor, OE-grade fit");

    // 1 generation + 2 shortenings; shorten prompts quote the hard limit.
    let prompts = backend.prompts();
    assert_eq!(prompts.len(), 3);
    assert!(prompts[1].contains("strictly under 80 characters"));
    assert!(prompts[2].contains("strictly under 80 characters"));
}

#[tokio::test]
async fn test_best_effort_result_is_kept_and_flagged() {
    // The backend never fits SHORT_DESC's 12-character budget: after the
    // shortening attempts run out, the last text is kept and the
    // validation result carries the remaining issue.
    let backend = MockBackend::new(vec!["O2 Sensor Kit"]);

    let result = pipeline::generate_compliant_description(
        &backend,
        &oxygen_sensor(),
        "SHORT_DESC",
        "ENGL",
        5,
    )
    .await
    .unwrap();

    assert_eq!(backend.prompts().len(), 6); // 1 generation + 5 shortenings
    assert_eq!(result.description_text, "O2 Sensor Kit");
    assert!(!result.validation.is_valid);
    assert_eq!(
        result.validation.issues,
        vec!["Description exceeds maximum length of 12 characters"]
    );
}

#[tokio::test]
async fn test_generated_descriptions_export_to_both_formats() {
    let backend = MockBackend::new(vec!["Bosch heated oxygen sensor, OE-grade"]);

    let result = pipeline::generate_compliant_description(
        &backend,
        &oxygen_sensor(),
        "FULL_DESC",
        "ENGL",
        5,
    )
    .await
    .unwrap();

    // The caller owns the ordered collection handed to the exporters.
    let descriptions = vec![GeneratedDescription {
        language_code: "ENGL".to_string(),
        maintenance_type: MaintenanceType::Add,
        description_code: "FULL_DESC".to_string(),
        sequence: 1,
        description_text: result.description_text,
    }];

    let csv = export::to_csv(&descriptions);
    assert_eq!(
        csv,
        "LanguageCode,MaintenanceType,DescriptionCode,Sequence,Description\n\
         ENGL,ADD,FULL_DESC,1,\"Bosch heated oxygen sensor, OE-grade\"\n"
    );

    let xml = export::to_xml(&descriptions);
    assert_eq!(
        xml,
        "<Descriptions>\n\
         \x20 <Description LanguageCode=\"ENGL\" MaintenanceType=\"ADD\" DescriptionCode=\"FULL_DESC\" Sequence=\"1\">Bosch heated oxygen sensor, OE-grade</Description>\n\
         </Descriptions>"
    );
}

#[test]
fn test_manual_edit_revalidation_round() {
    // A user edit can reintroduce forbidden characters; re-validation and
    // re-sanitization bring it back to compliant text.
    let edited = "Bosch \"premium\" oxygen sensor <heated>";
    let validation = validation::validate("FULL_DESC", edited);
    assert!(!validation.is_valid);
    assert_eq!(validation.issues.len(), 3); // < > "

    let cleaned = sanitize::sanitize(edited);
    assert!(validation::validate("FULL_DESC", &cleaned).is_valid);
}

#[test]
fn test_prompt_is_stable_across_calls() {
    let attrs = oxygen_sensor();
    let first = prompt::build_generation_prompt(&attrs, "MARKETING_COPY", "SPAN");
    let second = prompt::build_generation_prompt(&attrs, "MARKETING_COPY", "SPAN");
    assert_eq!(first, second);
    assert!(first.prompt_text.contains("Spanish"));
    assert!(first.prompt_text.contains("Maximum length is 1600 characters"));
}
