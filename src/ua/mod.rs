//! User-Agent parsing and the minimum-version policy for feedback clients.

pub mod policy;
pub mod version;

pub use policy::{ClientUa, UaPolicy, UaVerdict, check_user_agent};
pub use version::Version;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static PREAMBLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Mozilla/5\.0 \((?P<system>[^)]*)\)").expect("valid regex"));
static FENNEC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Fennec/(?P<version>\d+[\w.+]*)").expect("valid regex"));
static FIREFOX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Firefox/(?P<version>\d+[\w.+]*)").expect("valid regex"));

/// Gecko-based products that also advertise a `Firefox/` token.
const LOOKALIKES: &[&str] = &["SeaMonkey/", "Thunderbird/", "Camino/", "Iceweasel/"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Browser {
    Firefox,
    Mobile,
}

impl Browser {
    pub fn short(&self) -> &'static str {
        match self {
            Browser::Firefox => "firefox",
            Browser::Mobile => "mobile",
        }
    }

    pub fn pretty(&self) -> &'static str {
        match self {
            Browser::Firefox => "Firefox",
            Browser::Mobile => "Firefox for mobile",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Win,
    Mac,
    Linux,
    Android,
    Maemo,
    Other,
}

impl Platform {
    pub fn short(&self) -> &'static str {
        match self {
            Platform::Win => "win",
            Platform::Mac => "mac",
            Platform::Linux => "linux",
            Platform::Android => "android",
            Platform::Maemo => "maemo",
            Platform::Other => "other",
        }
    }

    pub fn pretty(&self) -> &'static str {
        match self {
            Platform::Win => "Windows",
            Platform::Mac => "Mac OS X",
            Platform::Linux => "Linux",
            Platform::Android => "Android",
            Platform::Maemo => "Maemo",
            Platform::Other => "Other",
        }
    }

    /// Resolve a stored short name; unknown names map to `Other`.
    pub fn from_short(short: &str) -> Self {
        match short {
            "win" => Platform::Win,
            "mac" => Platform::Mac,
            "linux" => Platform::Linux,
            "android" => Platform::Android,
            "maemo" => Platform::Maemo,
            _ => Platform::Other,
        }
    }

    fn detect(system: &str) -> Self {
        let system = system.to_ascii_lowercase();
        if system.contains("android") {
            Platform::Android
        } else if system.contains("maemo") {
            Platform::Maemo
        } else if system.contains("windows") {
            Platform::Win
        } else if system.contains("macintosh") || system.contains("mac os x") {
            Platform::Mac
        } else if system.contains("linux") || system.contains("x11") {
            Platform::Linux
        } else {
            Platform::Other
        }
    }
}

/// Structured view of a recognized `User-Agent` header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedUa {
    pub browser: Browser,
    pub version: String,
    pub platform: Platform,
}

impl ParsedUa {
    pub fn version(&self) -> Version {
        Version::parse(&self.version)
    }
}

/// Parse a raw `User-Agent` header. Returns `None` for anything that is not
/// desktop or mobile Firefox.
pub fn parse(ua: &str) -> Option<ParsedUa> {
    let preamble = PREAMBLE.captures(ua)?;
    if LOOKALIKES.iter().any(|token| ua.contains(token)) {
        return None;
    }

    let system = preamble.name("system").map_or("", |m| m.as_str());
    let platform = Platform::detect(system);

    if let Some(caps) = FENNEC.captures(ua) {
        return Some(ParsedUa {
            browser: Browser::Mobile,
            version: caps["version"].to_string(),
            platform,
        });
    }

    let caps = FIREFOX.captures(ua)?;
    let is_mobile = platform == Platform::Android
        || system.split(';').any(|t| matches!(t.trim(), "Mobile" | "Tablet"));
    Some(ParsedUa {
        browser: if is_mobile { Browser::Mobile } else { Browser::Firefox },
        version: caps["version"].to_string(),
        platform,
    })
}
