//! Input sanitizing utilities

/// Sanitize string input (remove control characters, trim whitespace)
pub fn sanitize_string(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_control())
        .collect::<String>()
        .trim()
        .to_string()
}

/// Sanitize and reject strings that end up empty
pub fn non_blank(input: &str) -> Option<String> {
    let sanitized = sanitize_string(input);
    if sanitized.is_empty() {
        None
    } else {
        Some(sanitized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_string() {
        assert_eq!(sanitize_string("  Spring Cup \n"), "Spring Cup");
        assert_eq!(sanitize_string("Winter\u{0007} Cup"), "Winter Cup");
        assert_eq!(sanitize_string("\t\r\n"), "");
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(" Finals ").as_deref(), Some("Finals"));
        assert!(non_blank("   ").is_none());
        assert!(non_blank("").is_none());
    }
}
