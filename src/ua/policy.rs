use actix_web::http::Method;

use super::{Browser, ParsedUa, Version, parse};

/// Minimum-version policy applied to feedback submitters.
#[derive(Debug, Clone)]
pub struct UaPolicy {
    pub enforce: bool,
    pub latest_firefox: Version,
    pub latest_mobile: Version,
}

impl UaPolicy {
    pub fn latest_release(&self, browser: Browser) -> &Version {
        match browser {
            Browser::Firefox => &self.latest_firefox,
            Browser::Mobile => &self.latest_mobile,
        }
    }
}

/// A recognized client, as accepted by the policy. Handlers receive this
/// through the request extensions.
#[derive(Debug, Clone)]
pub struct ClientUa {
    pub raw: String,
    pub parsed: ParsedUa,
}

#[derive(Debug, Clone)]
pub enum UaVerdict {
    Accept(ClientUa),
    /// Unknown browser on a read, or a known browser that is too old.
    RedirectToDownload,
    Reject(&'static str),
}

pub const MISSING_UA_MESSAGE: &str = "User-Agent request header must be set.";

/// Decide what to do with a request given its `User-Agent` header.
pub fn check_user_agent(ua: Option<&str>, method: &Method, policy: &UaPolicy) -> UaVerdict {
    let raw = ua.unwrap_or("");
    let Some(parsed) = parse(raw) else {
        return if *method == Method::GET {
            UaVerdict::RedirectToDownload
        } else {
            UaVerdict::Reject(MISSING_UA_MESSAGE)
        };
    };

    if policy.enforce && parsed.version() < *policy.latest_release(parsed.browser) {
        return UaVerdict::RedirectToDownload;
    }

    UaVerdict::Accept(ClientUa {
        raw: raw.to_string(),
        parsed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const FX4: &str = "Mozilla/5.0 (Windows NT 6.1; rv:2.0) Gecko/20100101 Firefox/4.0";
    const FX36: &str = "Mozilla/5.0 (Windows; U; Windows NT 6.1; en-US; rv:1.9.2.13) Gecko/20101203 Firefox/3.6.13";

    fn policy(enforce: bool) -> UaPolicy {
        UaPolicy {
            enforce,
            latest_firefox: Version::parse("4.0"),
            latest_mobile: Version::parse("4.0"),
        }
    }

    #[test]
    fn current_release_is_accepted() {
        let verdict = check_user_agent(Some(FX4), &Method::POST, &policy(true));
        assert!(matches!(verdict, UaVerdict::Accept(ref c) if c.raw == FX4));
    }

    #[test]
    fn outdated_release_is_redirected_for_any_method() {
        for method in [Method::GET, Method::POST] {
            let verdict = check_user_agent(Some(FX36), &method, &policy(true));
            assert!(matches!(verdict, UaVerdict::RedirectToDownload));
        }
    }

    #[test]
    fn outdated_release_passes_without_enforcement() {
        let verdict = check_user_agent(Some(FX36), &Method::POST, &policy(false));
        assert!(matches!(verdict, UaVerdict::Accept(_)));
    }

    #[test]
    fn unknown_agent_redirects_reads_and_rejects_writes() {
        let get = check_user_agent(None, &Method::GET, &policy(false));
        assert!(matches!(get, UaVerdict::RedirectToDownload));

        let post = check_user_agent(Some("curl/8.4.0"), &Method::POST, &policy(false));
        assert!(matches!(post, UaVerdict::Reject(MISSING_UA_MESSAGE)));
    }
}
