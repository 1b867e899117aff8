//! Prompt assembly for PIES description generation.
//!
//! Prompts are a pure function of the product attributes, description
//! code, and language code: same inputs, same text. The hard character
//! limit is stated up front and the adjusted (80%) budget is restated at
//! the end, because backends follow the last instruction most reliably.

use crate::models::part::ProductAttributes;
use crate::services::catalog;
use crate::services::sanitize::INVALID_CHARACTERS;

/// What gets handed to the generation backend for one description:
/// the prompt text and the adjusted budget it was instructed with.
/// Computed fresh per call, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub prompt_text: String,
    pub adjusted_max_length: f64,
}

/// Build the generation prompt for one description.
pub fn build_generation_prompt(
    attributes: &ProductAttributes,
    description_code: &str,
    language_code: &str,
) -> GenerationRequest {
    let max_length = catalog::max_length(description_code);
    let adjusted_max_length = catalog::adjusted_max_length(description_code);
    let adjusted = format_limit(adjusted_max_length);

    let mut prompt = format!(
        "You are a professional automotive aftermarket content writer specializing in \
         PIES-compliant product descriptions. It is extremely IMPORTANT that you should make \
         sure that the description is not longer than {max_length} characters.\n\
         \n\
         Write a {purpose} for part number {part_number}, which is a {category} from {brand}. \
         This must be written in {language}.\n",
        purpose = catalog::purpose(description_code),
        part_number = attributes.part_number,
        category = attributes.product_category,
        brand = attributes.brand,
        language = catalog::language_name(language_code),
    );

    if !attributes.part_type.is_empty() {
        prompt.push_str(&format!("Specific part type: {}.\n", attributes.part_type));
    }
    if let Some(engine_application) = present(&attributes.engine_application) {
        prompt.push_str(&format!("Engine application: {engine_application}.\n"));
    }
    if let Some(material) = present(&attributes.material) {
        prompt.push_str(&format!("Material: {material}.\n"));
    }
    if let Some(fitment) = present(&attributes.fitment) {
        prompt.push_str(&format!("Fitment information: {fitment}.\n"));
    }

    // Unknown codes get no per-type block, only the generic framing above.
    if let Some(block) = catalog::instructions(description_code) {
        prompt.push('\n');
        prompt.push_str(&block.replace("{limit}", &adjusted));
        prompt.push('\n');
    }

    prompt.push_str(&format!(
        "\nPIES XML COMPLIANCE REQUIREMENTS:\n\
         1. Do not include HTML or XML tags in your description\n\
         2. IMPORTANT: Must NOT include special characters like {forbidden}. \
         Do not include line breaks in your description.\n\
         3. Do not include marketing slogans or excessive capitalization\n\
         4. Focus on factual, specific information about the part\n\
         5. Respond with ONLY the description text, nothing else\n",
        forbidden = forbidden_character_list(),
    ));

    prompt.push_str(&format!(
        "\nIMPORTANT: Maximum length is {adjusted} characters. Do not exceed this limit."
    ));

    GenerationRequest {
        prompt_text: prompt,
        adjusted_max_length,
    }
}

/// Build the follow-up prompt asking the backend to rewrite an
/// over-length description under the code's hard limit.
pub fn build_shorten_prompt(current: &str, description_code: &str) -> String {
    let max_length = catalog::max_length(description_code);
    let current_length = current.chars().count();

    format!(
        "The following {description_code} product description is {current_length} characters \
         long, which exceeds the PIES limit of {max_length} characters. Rewrite it so it is \
         strictly under {max_length} characters while keeping the most essential product \
         information. Do not add any new details.\n\
         \n\
         {current}\n\
         \n\
         Respond with ONLY the rewritten description text, nothing else."
    )
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn forbidden_character_list() -> String {
    INVALID_CHARACTERS
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Budgets render without a trailing ".0" (64, not 64.0) but keep real
/// fractions (9.6).
fn format_limit(limit: f64) -> String {
    format!("{limit}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_attributes() -> ProductAttributes {
        ProductAttributes {
            part_number: "OX100".to_string(),
            product_category: "Oxygen Sensor".to_string(),
            brand: "Bosch".to_string(),
            part_type: String::new(),
            engine_application: None,
            material: None,
            fitment: None,
        }
    }

    #[test]
    fn test_deterministic() {
        let attrs = sample_attributes();
        let a = build_generation_prompt(&attrs, "FULL_DESC", "ENGL");
        let b = build_generation_prompt(&attrs, "FULL_DESC", "ENGL");
        assert_eq!(a, b);
    }

    #[test]
    fn test_full_desc_prompt_reflects_inputs() {
        let request = build_generation_prompt(&sample_attributes(), "FULL_DESC", "ENGL");
        assert!(request.prompt_text.contains("OX100"));
        assert!(request.prompt_text.contains("Bosch"));
        assert!(request.prompt_text.contains("Oxygen Sensor"));
        assert!(request.prompt_text.contains("English"));
        // FULL_DESC budget is 80; the instructed budget is 80 - 16 = 64.
        assert!(request.prompt_text.contains("Maximum length is 64 characters"));
        assert_eq!(request.adjusted_max_length, 64.0);
    }

    #[test]
    fn test_fractional_adjusted_budget_rendered() {
        let request = build_generation_prompt(&sample_attributes(), "SHORT_DESC", "ENGL");
        assert!(request.prompt_text.contains("Maximum length is 9.6 characters"));
        assert_eq!(request.adjusted_max_length, 9.6);
    }

    #[test]
    fn test_optional_attribute_adds_exactly_one_line() {
        let without = build_generation_prompt(&sample_attributes(), "FULL_DESC", "ENGL");
        let mut attrs = sample_attributes();
        attrs.engine_application = Some("2.0L Turbo I4".to_string());
        let with = build_generation_prompt(&attrs, "FULL_DESC", "ENGL");

        let line = "Engine application: 2.0L Turbo I4.\n";
        assert!(with.prompt_text.contains(line));
        assert_eq!(with.prompt_text.replacen(line, "", 1), without.prompt_text);
    }

    #[test]
    fn test_empty_optional_attribute_omitted() {
        let mut attrs = sample_attributes();
        attrs.material = Some(String::new());
        let request = build_generation_prompt(&attrs, "FULL_DESC", "ENGL");
        assert!(!request.prompt_text.contains("Material:"));
    }

    #[test]
    fn test_unknown_code_uses_generic_framing() {
        let request = build_generation_prompt(&sample_attributes(), "NOT_A_CODE", "ENGL");
        assert!(request.prompt_text.contains("Write a product description for part number"));
        assert!(request.prompt_text.contains("not longer than 255 characters"));
        assert!(request.prompt_text.contains("Maximum length is 204 characters"));
        // No per-type instruction block for unknown codes.
        assert!(!request.prompt_text.contains("For this "));
    }

    #[test]
    fn test_unknown_language_defaults_to_english() {
        let request = build_generation_prompt(&sample_attributes(), "FULL_DESC", "ITAL");
        assert!(request.prompt_text.contains("This must be written in English."));
    }

    #[test]
    fn test_prompt_lists_forbidden_characters() {
        let request = build_generation_prompt(&sample_attributes(), "FULL_DESC", "ENGL");
        assert!(request.prompt_text.contains("<, >, &"));
        assert!(request.prompt_text.contains("Do not include line breaks"));
    }

    #[test]
    fn test_shorten_prompt_names_limit_and_length() {
        let text = "An over-length description of an oxygen sensor";
        let prompt = build_shorten_prompt(text, "SHORT_DESC");
        assert!(prompt.contains("SHORT_DESC"));
        assert!(prompt.contains("46 characters"));
        assert!(prompt.contains("strictly under 12 characters"));
        assert!(prompt.contains(text));
    }
}
