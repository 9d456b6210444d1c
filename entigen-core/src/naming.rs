/// Pattern entity names must match, reported in naming errors.
pub const PASCAL_CASE_PATTERN: &str = "^[A-Z][A-Za-z0-9]*$";

/// PascalCase check: an uppercase ASCII letter followed by ASCII letters and
/// digits only. Separators (`_`, `-`, spaces) are rejected.
///
/// The name is reused verbatim as table name, schema type name and API
/// component name, so it must be a plain identifier in all three.
pub fn is_pascal_case(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_uppercase() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric())
}

/// Column names: `[A-Za-z_][A-Za-z0-9_]*`.
pub fn is_valid_identifier(ident: &str) -> bool {
    let mut chars = ident.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pascal_case() {
        assert!(is_pascal_case("User"));
        assert!(is_pascal_case("UserProfile"));
        assert!(is_pascal_case("Oauth2Token"));
        assert!(!is_pascal_case("user"));
        assert!(!is_pascal_case("userProfile"));
        assert!(!is_pascal_case("User_Profile"));
        assert!(!is_pascal_case("User-Profile"));
        assert!(!is_pascal_case("User Profile"));
        assert!(!is_pascal_case("2User"));
        assert!(!is_pascal_case(""));
        assert!(!is_pascal_case("Ünicode"));
    }

    #[test]
    fn test_identifier() {
        assert!(is_valid_identifier("createdAt"));
        assert!(is_valid_identifier("_internal"));
        assert!(is_valid_identifier("line2"));
        assert!(!is_valid_identifier("2line"));
        assert!(!is_valid_identifier("drop;table"));
        assert!(!is_valid_identifier("a.b"));
        assert!(!is_valid_identifier(""));
    }
}
