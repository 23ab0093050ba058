//! Reference title extraction
//!
//! References arrive as free text with comma-delimited sub-fields; the
//! cited title sits before the first parenthesis in the first sub-field
//! that carries one.

/// Extract the cited title from one free-text reference.
///
/// Splits the reference on commas and returns the substring before the
/// first `(` in the first comma-delimited field containing one, trimmed
/// of surrounding whitespace. Returns the empty string if no field
/// contains a `(`; an empty result means "no edge" downstream, not a
/// failure.
pub fn extract_ref_title(raw: &str) -> &str {
    for field in raw.split(',') {
        if let Some(idx) = field.find('(') {
            return field[..idx].trim();
        }
    }
    ""
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_before_parenthesis() {
        let raw = "Deep Residual Learning (2016), CVPR, pp. 770-778";
        assert_eq!(extract_ref_title(raw), "Deep Residual Learning");
    }

    #[test]
    fn test_first_field_with_parenthesis_wins() {
        let raw = "Smith J., Attention Is All You Need (2017), NeurIPS";
        assert_eq!(extract_ref_title(raw), "Attention Is All You Need");
    }

    #[test]
    fn test_no_parenthesis_yields_empty() {
        assert_eq!(extract_ref_title("Smith J., untitled note, 2001"), "");
        assert_eq!(extract_ref_title("plain text without any markers"), "");
        assert_eq!(extract_ref_title(""), "");
        // Comma count makes no difference
        assert_eq!(extract_ref_title(",,,,,"), "");
    }

    #[test]
    fn test_parenthesis_at_field_start() {
        // Nothing precedes the parenthesis: empty title, trimmed
        assert_eq!(extract_ref_title("(2019), Some Venue"), "");
    }

    #[test]
    fn test_whitespace_trimmed() {
        assert_eq!(extract_ref_title("   Spaced Out Title   (1999)"), "Spaced Out Title");
    }
}
