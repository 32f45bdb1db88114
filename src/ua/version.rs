use std::cmp::Ordering;
use std::fmt;

/// A browser version string such as `4.0`, `10.0b2` or `3.6.13`, ordered
/// the way release channels are: `4.0a1 < 4.0b1 < 4.0pre < 4.0 < 4.0.1`.
///
/// Every dot-separated part is read as `<number><string><number><extra>`.
/// Numbers compare numerically, a missing string sorts after any present
/// one, and missing trailing parts count as zero.
#[derive(Debug, Clone)]
pub struct Version {
    raw: String,
    parts: Vec<VersionPart>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct VersionPart {
    num_a: u64,
    str_b: String,
    num_c: u64,
    extra_d: String,
}

impl Version {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        let parts = trimmed.split('.').map(VersionPart::parse).collect();
        Version {
            raw: trimmed.to_string(),
            parts,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// True for alpha, beta and `pre` builds.
    pub fn is_prerelease(&self) -> bool {
        self.parts.iter().any(|p| !p.str_b.is_empty())
    }
}

impl VersionPart {
    fn parse(part: &str) -> Self {
        let (num_a, rest) = take_number(part);
        let (mut str_b, rest) = take_non_digits(rest);
        let (num_c, extra) = take_number(rest);

        let mut num_a = num_a;
        // "1.0+" is shorthand for "1.1pre".
        if str_b == "+" {
            num_a = num_a.saturating_add(1);
            str_b = "pre".to_string();
        }

        VersionPart {
            num_a,
            str_b,
            num_c,
            extra_d: extra.to_string(),
        }
    }
}

fn take_number(s: &str) -> (u64, &str) {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    let (digits, rest) = s.split_at(end);
    let n = if digits.is_empty() {
        0
    } else {
        digits.parse().unwrap_or(u64::MAX)
    };
    (n, rest)
}

fn take_non_digits(s: &str) -> (String, &str) {
    let end = s.find(|c: char| c.is_ascii_digit()).unwrap_or(s.len());
    let (text, rest) = s.split_at(end);
    (text.to_string(), rest)
}

/// Empty strings rank above non-empty ones: a release beats its pre-releases.
fn cmp_suffix(a: &str, b: &str) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.cmp(b),
    }
}

impl Ord for VersionPart {
    fn cmp(&self, other: &Self) -> Ordering {
        self.num_a
            .cmp(&other.num_a)
            .then_with(|| cmp_suffix(&self.str_b, &other.str_b))
            .then_with(|| self.num_c.cmp(&other.num_c))
            .then_with(|| cmp_suffix(&self.extra_d, &other.extra_d))
    }
}

impl PartialOrd for VersionPart {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let zero = VersionPart::default();
        let len = self.parts.len().max(other.parts.len());
        for i in 0..len {
            let a = self.parts.get(i).unwrap_or(&zero);
            let b = other.parts.get(i).unwrap_or(&zero);
            match a.cmp(b) {
                Ordering::Equal => continue,
                unequal => return unequal,
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
