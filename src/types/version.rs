//! Version numbers: `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]`.

use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::error::{AtlasError, AtlasResult};

/// A parsed version number with a total order.
///
/// Ordering compares major, minor and patch numerically, then the
/// prerelease (a version without one sorts above any prerelease of the same
/// core), then build metadata as a final tiebreaker.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VersionNumber {
    major: u64,
    minor: u64,
    patch: u64,
    prerelease: Option<String>,
    build: Option<String>,
}

impl VersionNumber {
    /// A release version with no prerelease or build metadata.
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            prerelease: None,
            build: None,
        }
    }

    /// Attach a prerelease tag, checked with the same rules as [`parse`](Self::parse).
    pub fn with_prerelease(mut self, prerelease: impl Into<String>) -> AtlasResult<Self> {
        let prerelease = prerelease.into();
        if !valid_identifiers(&prerelease, true) {
            return Err(AtlasError::InvalidVersionString {
                input: format!("{}-{}", self, prerelease),
                reason: "malformed prerelease",
            });
        }
        self.prerelease = Some(prerelease);
        Ok(self)
    }

    /// Attach build metadata, checked with the same rules as [`parse`](Self::parse).
    pub fn with_build(mut self, build: impl Into<String>) -> AtlasResult<Self> {
        let build = build.into();
        if !valid_identifiers(&build, false) {
            return Err(AtlasError::InvalidVersionString {
                input: format!("{}+{}", self, build),
                reason: "malformed build metadata",
            });
        }
        self.build = Some(build);
        Ok(self)
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    pub fn prerelease(&self) -> Option<&str> {
        self.prerelease.as_deref()
    }

    pub fn build(&self) -> Option<&str> {
        self.build.as_deref()
    }

    /// Parse the canonical string form.
    pub fn parse(input: &str) -> AtlasResult<Self> {
        let invalid = |reason| AtlasError::InvalidVersionString {
            input: input.to_string(),
            reason,
        };

        let (rest, build) = match input.split_once('+') {
            Some((rest, build)) => (rest, Some(build)),
            None => (input, None),
        };
        let (core, prerelease) = match rest.split_once('-') {
            Some((core, pre)) => (core, Some(pre)),
            None => (rest, None),
        };

        let numbers: Vec<&str> = core.split('.').collect();
        if numbers.len() != 3 {
            return Err(invalid("expected MAJOR.MINOR.PATCH"));
        }
        let mut parsed = [0u64; 3];
        for (slot, part) in parsed.iter_mut().zip(&numbers) {
            if !is_numeric_identifier(part) {
                return Err(invalid("version numbers must be digits without leading zeros"));
            }
            *slot = part
                .parse()
                .map_err(|_| invalid("version number out of range"))?;
        }

        if let Some(pre) = prerelease {
            if !valid_identifiers(pre, true) {
                return Err(invalid("malformed prerelease"));
            }
        }
        if let Some(build) = build {
            if !valid_identifiers(build, false) {
                return Err(invalid("malformed build metadata"));
            }
        }

        Ok(Self {
            major: parsed[0],
            minor: parsed[1],
            patch: parsed[2],
            prerelease: prerelease.map(str::to_string),
            build: build.map(str::to_string),
        })
    }

    /// Whether this is a prerelease version.
    pub fn is_prerelease(&self) -> bool {
        self.prerelease.is_some()
    }
}

fn is_numeric_identifier(part: &str) -> bool {
    !part.is_empty()
        && part.bytes().all(|b| b.is_ascii_digit())
        && (part == "0" || !part.starts_with('0'))
}

/// Dot-separated, non-empty `[0-9A-Za-z-]` identifiers. Numeric prerelease
/// identifiers may not carry leading zeros.
fn valid_identifiers(text: &str, prerelease: bool) -> bool {
    text.split('.').all(|ident| {
        if ident.is_empty()
            || !ident
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-')
        {
            return false;
        }
        if prerelease && ident.bytes().all(|b| b.is_ascii_digit()) {
            return is_numeric_identifier(ident);
        }
        true
    })
}

fn compare_prerelease(a: &str, b: &str) -> Ordering {
    let mut left = a.split('.');
    let mut right = b.split('.');
    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                let ord = match (x.parse::<u64>(), y.parse::<u64>()) {
                    (Ok(nx), Ok(ny)) => nx.cmp(&ny),
                    (Ok(_), Err(_)) => Ordering::Less,
                    (Err(_), Ok(_)) => Ordering::Greater,
                    (Err(_), Err(_)) => x.cmp(y),
                };
                if ord != Ordering::Equal {
                    return ord;
                }
            }
        }
    }
}

impl Ord for VersionNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
            .then_with(|| match (&self.prerelease, &other.prerelease) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(a), Some(b)) => compare_prerelease(a, b),
            })
            .then_with(|| self.build.cmp(&other.build))
    }
}

impl PartialOrd for VersionNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for VersionNumber {
    type Err = AtlasError;

    fn from_str(s: &str) -> AtlasResult<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for VersionNumber {
    type Error = AtlasError;

    fn try_from(value: String) -> AtlasResult<Self> {
        Self::parse(&value)
    }
}

impl From<VersionNumber> for String {
    fn from(version: VersionNumber) -> Self {
        version.to_string()
    }
}

impl std::fmt::Display for VersionNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre) = &self.prerelease {
            write!(f, "-{}", pre)?;
        }
        if let Some(build) = &self.build {
            write!(f, "+{}", build)?;
        }
        Ok(())
    }
}
