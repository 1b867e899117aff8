//! Removal of characters unsafe for the PIES interchange formats.

/// Characters that must never appear in exported description text. The
/// prompt asks the backend to avoid them; this strips whatever slips
/// through anyway.
pub const INVALID_CHARACTERS: [char; 27] = [
    '<', '>', '&', '"', '\'', '`', '#', '*', '_', '^', '~', '|', ':', ';', '/', '\\', '@', '$',
    '%', '+', '=', '{', '}', '[', ']', '(', ')',
];

/// Remove every occurrence of the invalid characters. Idempotent.
pub fn sanitize(text: &str) -> String {
    text.chars().filter(|c| !INVALID_CHARACTERS.contains(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_all_invalid_characters() {
        let input = "<b>Bosch</b> OX100 & \"premium\" #1 (50% off) [NEW] {sale} ~best~ a@b";
        let cleaned = sanitize(input);
        for c in INVALID_CHARACTERS {
            assert!(!cleaned.contains(c), "character {c:?} survived sanitization");
        }
    }

    #[test]
    fn test_idempotent() {
        let input = "Oxygen Sensor <OE-grade> fits 2.0L & 2.4L engines: heated; 4-wire";
        let once = sanitize(input);
        assert_eq!(sanitize(&once), once);
    }

    #[test]
    fn test_clean_text_unchanged() {
        let input = "Direct-fit oxygen sensor with heated zirconia element";
        assert_eq!(sanitize(input), input);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(sanitize(""), "");
    }
}
