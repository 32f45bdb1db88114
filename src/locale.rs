//! Locale detection from `Accept-Language`.

use actix_web::{HttpRequest, http::header};

use crate::config::AppConfig;

/// Pick the best supported locale for the request, falling back to the
/// configured default.
pub fn detect_language(req: &HttpRequest, config: &AppConfig) -> String {
    let accept = req
        .headers()
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|v| v.to_str().ok());
    negotiate(accept, &config.supported_locales)
        .unwrap_or_else(|| config.default_locale.clone())
}

/// Match an `Accept-Language` header against the supported locales.
///
/// Tags are tried in descending quality order. An exact (case-insensitive)
/// match wins; otherwise the primary subtag is matched, so `de-AT` can land
/// on `de` and `pt` on `pt-BR`.
pub fn negotiate(accept: Option<&str>, supported: &[String]) -> Option<String> {
    let mut ranges: Vec<(String, f32)> = accept?
        .split(',')
        .filter_map(|item| {
            let mut pieces = item.split(';');
            let tag = pieces.next()?.trim().to_ascii_lowercase();
            if tag.is_empty() || tag == "*" {
                return None;
            }
            let q = pieces
                .find_map(|p| p.trim().strip_prefix("q=").and_then(|q| q.trim().parse::<f32>().ok()))
                .unwrap_or(1.0);
            (q > 0.0).then_some((tag, q))
        })
        .collect();

    // Stable sort keeps header order among equal weights.
    ranges.sort_by(|a, b| b.1.total_cmp(&a.1));

    for (tag, _) in &ranges {
        if let Some(exact) = supported.iter().find(|s| s.eq_ignore_ascii_case(tag)) {
            return Some(exact.clone());
        }
        let primary = tag.split('-').next().unwrap_or(tag.as_str());
        let by_primary = supported.iter().find(|s| {
            s.split('-')
                .next()
                .is_some_and(|p| p.eq_ignore_ascii_case(primary))
        });
        if let Some(found) = by_primary {
            return Some(found.clone());
        }
    }
    None
}

/// English display name for a locale code.
pub fn locale_name(code: &str) -> &'static str {
    match code {
        "en-US" => "English (US)",
        "en-GB" => "English (British)",
        "de" => "German",
        "es" | "es-ES" => "Spanish",
        "fr" => "French",
        "it" => "Italian",
        "ja" => "Japanese",
        "nl" => "Dutch",
        "pl" => "Polish",
        "pt-BR" => "Portuguese (Brazilian)",
        "pt-PT" => "Portuguese (Portugal)",
        "ru" => "Russian",
        "zh-CN" => "Chinese (Simplified)",
        "zh-TW" => "Chinese (Traditional)",
        _ => "Unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn supported() -> Vec<String> {
        ["en-US", "de", "fr", "pt-BR"].iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn exact_match_by_quality() {
        let got = negotiate(Some("fr;q=0.5, de;q=0.9, en-US;q=0.1"), &supported());
        assert_eq!(got.as_deref(), Some("de"));
    }

    #[test]
    fn region_falls_back_to_primary_subtag() {
        assert_eq!(negotiate(Some("de-AT"), &supported()).as_deref(), Some("de"));
        assert_eq!(negotiate(Some("pt"), &supported()).as_deref(), Some("pt-BR"));
        assert_eq!(negotiate(Some("EN-us"), &supported()).as_deref(), Some("en-US"));
    }

    #[test]
    fn nothing_matches() {
        assert_eq!(negotiate(Some("ja, *;q=0.1"), &supported()), None);
        assert_eq!(negotiate(Some("de;q=0"), &supported()), None);
        assert_eq!(negotiate(None, &supported()), None);
    }

    #[test]
    fn names() {
        assert_eq!(locale_name("de"), "German");
        assert_eq!(locale_name("xx"), "Unknown");
    }
}
