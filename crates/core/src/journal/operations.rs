use super::error::ValidationError;

/// Validates a required text field.
///
/// The text must contain at least one non-whitespace character. The value is
/// returned untrimmed; whitespace is only ignored for the emptiness check.
pub fn validate_text(text: Option<&str>) -> Result<&str, ValidationError> {
    match text {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(ValidationError::TextRequired),
    }
}

/// Validates a raw path id: it must parse as a positive integer.
pub fn validate_id(raw: &str) -> Result<i64, ValidationError> {
    match raw.trim().parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ValidationError::InvalidId(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_text_accepts_non_blank() {
        assert_eq!(validate_text(Some("Day one")), Ok("Day one"));
        assert_eq!(validate_text(Some("  padded  ")), Ok("  padded  "));
    }

    #[test]
    fn test_validate_text_rejects_missing_or_blank() {
        assert_eq!(validate_text(None), Err(ValidationError::TextRequired));
        assert_eq!(validate_text(Some("")), Err(ValidationError::TextRequired));
        assert_eq!(
            validate_text(Some(" \t\n ")),
            Err(ValidationError::TextRequired)
        );
    }

    #[test]
    fn test_validate_id() {
        assert_eq!(validate_id("1"), Ok(1));
        assert_eq!(validate_id("42"), Ok(42));
        assert!(validate_id("0").is_err());
        assert!(validate_id("-3").is_err());
        assert!(validate_id("abc").is_err());
        assert!(validate_id("").is_err());
    }
}
