use url::Url;

/// Maximum stored URL length.
pub const MAX_URL_LENGTH: usize = 200;

/// Maximum length of the manufacturer and device fields.
pub const MAX_METADATA_LENGTH: usize = 255;

/// Validate a required text field with a max length in characters.
pub fn validate_required(value: &str, field_name: &str, max_len: usize) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(format!("{field_name} is required"));
    }
    if trimmed.chars().count() > max_len {
        return Some(format!("{field_name} must be at most {max_len} characters"));
    }
    None
}

/// Validate an optional text field with a max length (empty is OK).
pub fn validate_optional(value: &str, field_name: &str, max_len: usize) -> Option<String> {
    let trimmed = value.trim();
    if !trimmed.is_empty() && trimmed.chars().count() > max_len {
        return Some(format!("{field_name} must be at most {max_len} characters"));
    }
    None
}

/// Schemes a submitted URL may use. Browser-internal pages (`about:`,
/// `chrome:`) are allowed so reports can name them.
pub const ALLOWED_URL_SCHEMES: [&str; 5] = ["http", "https", "ftp", "about", "chrome"];

const WEB_SCHEMES: [&str; 3] = ["http", "https", "ftp"];

/// Validate an absolute URL against the allowed schemes. Web URLs also need
/// a host. Empty values pass; use `validate_required` first when the URL is
/// mandatory.
pub fn validate_url(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.chars().count() > MAX_URL_LENGTH {
        return Some(format!("URL must be at most {MAX_URL_LENGTH} characters"));
    }
    // Url::parse silently drops tabs and newlines; treat any whitespace as malformed.
    if trimmed.chars().any(char::is_whitespace) {
        return Some("Enter a valid URL".to_string());
    }

    let Ok(parsed) = Url::parse(trimmed) else {
        return Some("Enter a valid URL".to_string());
    };
    if !ALLOWED_URL_SCHEMES.contains(&parsed.scheme()) {
        return Some("Enter a valid URL".to_string());
    }
    if WEB_SCHEMES.contains(&parsed.scheme()) && parsed.host_str().is_none_or(str::is_empty) {
        return Some("Enter a valid URL".to_string());
    }
    None
}

/// Whether `value` is an http(s) URL safe to render as a link.
pub fn is_link_url(value: &str) -> bool {
    Url::parse(value.trim())
        .is_ok_and(|u| matches!(u.scheme(), "http" | "https") && u.host_str().is_some())
}

/// HTML checkbox semantics: absent, empty, `false`, `0` and `off` are unchecked.
pub fn checkbox(value: Option<&str>) -> bool {
    match value.map(|v| v.trim().to_ascii_lowercase()) {
        None => false,
        Some(v) => !matches!(v.as_str(), "" | "false" | "0" | "off"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_counts_characters_not_bytes() {
        assert!(validate_required("ünïcödé", "Description", 7).is_none());
        assert!(validate_required("   ", "Description", 7).is_some());
        assert_eq!(
            validate_required("abcdefgh", "Description", 7).as_deref(),
            Some("Description must be at most 7 characters")
        );
    }

    #[test]
    fn urls() {
        assert!(validate_url("").is_none());
        assert!(validate_url("http://example.com").is_none());
        assert!(validate_url("https://example.com/path?q=1").is_none());
        assert!(validate_url("about:config").is_none());
        assert!(validate_url("example.com").is_some());
        assert!(validate_url("http://").is_some());
        assert!(validate_url("http:// spaced.com").is_some());
        assert!(validate_url(&format!("http://{}.com", "a".repeat(200))).is_some());
    }

    #[test]
    fn script_and_data_urls_rejected() {
        assert!(validate_url("javascript:alert(document.cookie)").is_some());
        assert!(validate_url("JavaScript:alert(1)").is_some());
        assert!(validate_url("data:text/html,<script>alert(1)</script>").is_some());
        assert!(validate_url("vbscript:msgbox").is_some());
        assert!(validate_url("chrome://browser/content/browser.xul").is_none());
    }

    #[test]
    fn link_urls() {
        assert!(is_link_url("https://example.com/a"));
        assert!(!is_link_url("about:config"));
        assert!(!is_link_url("javascript:alert(1)"));
        assert!(!is_link_url(""));
    }

    #[test]
    fn checkbox_values() {
        assert!(!checkbox(None));
        assert!(!checkbox(Some("")));
        assert!(!checkbox(Some("false")));
        assert!(!checkbox(Some("0")));
        assert!(checkbox(Some("on")));
        assert!(checkbox(Some("1")));
    }
}
