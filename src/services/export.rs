//! PIES CSV and XML export.
//!
//! These are the interchange surfaces downstream catalog tooling consumes,
//! so the byte layout is fixed: column and attribute order never change,
//! and the emitters take a caller-owned ordered slice rather than any
//! accumulated session state.

use crate::models::description::GeneratedDescription;

pub const CSV_HEADER: &str = "LanguageCode,MaintenanceType,DescriptionCode,Sequence,Description";

/// Render descriptions as PIES CSV. Every row, header included, ends with
/// a newline. Fields containing a comma, quote, or line break are
/// double-quoted with embedded quotes doubled.
pub fn to_csv(descriptions: &[GeneratedDescription]) -> String {
    let mut output = String::from(CSV_HEADER);
    output.push('\n');

    for desc in descriptions {
        output.push_str(&csv_field(&desc.language_code));
        output.push(',');
        output.push_str(&csv_field(&desc.maintenance_type.to_string()));
        output.push(',');
        output.push_str(&csv_field(&desc.description_code));
        output.push(',');
        output.push_str(&desc.sequence.to_string());
        output.push(',');
        output.push_str(&csv_field(&desc.description_text));
        output.push('\n');
    }

    output
}

/// Render descriptions as the PIES `<Descriptions>` XML fragment.
/// Attribute order is LanguageCode, MaintenanceType, DescriptionCode,
/// Sequence; element text is the description as-is (sanitized text never
/// contains markup characters).
pub fn to_xml(descriptions: &[GeneratedDescription]) -> String {
    let mut output = String::from("<Descriptions>\n");

    for desc in descriptions {
        output.push_str(&format!(
            "  <Description LanguageCode=\"{}\" MaintenanceType=\"{}\" DescriptionCode=\"{}\" Sequence=\"{}\">{}</Description>\n",
            desc.language_code,
            desc.maintenance_type,
            desc.description_code,
            desc.sequence,
            desc.description_text,
        ));
    }

    output.push_str("</Descriptions>");
    output
}

fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') || value.contains('\r') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
