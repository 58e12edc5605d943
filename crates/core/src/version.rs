//! Documentation release identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Every documentation release the downloader knows about, oldest first.
pub const ALL_VERSIONS: &[&str] = &["2.6", "2.7", "3.0", "3.1", "3.2", "3.3", "3.4", "3.5", "3.6", "3.7", "3.8", "3.9"];

/// A `MAJOR.MINOR` documentation release label such as `3.9`.
///
/// The label doubles as a cache directory name and a URL path segment, so
/// only ASCII digits around a single dot are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Version(String);

impl Version {
    pub fn parse(input: &str) -> Result<Self, Error> {
        let trimmed = input.trim();
        let valid = match trimmed.split_once('.') {
            Some((major, minor)) => is_number(major) && is_number(minor),
            None => false,
        };

        if valid { Ok(Self(trimmed.to_string())) } else { Err(Error::InvalidVersion(input.to_string())) }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The built-in release list, in processing order.
    pub fn all() -> Vec<Version> {
        ALL_VERSIONS.iter().map(|v| Version(v.to_string())).collect()
    }
}

fn is_number(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Version {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Version {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Version> for String {
    fn from(v: Version) -> Self {
        v.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let v = Version::parse("3.9").unwrap();
        assert_eq!(v.as_str(), "3.9");
        assert_eq!(v.to_string(), "3.9");
    }

    #[test]
    fn test_parse_trims() {
        assert_eq!(Version::parse(" 2.7\n").unwrap().as_str(), "2.7");
    }

    #[test]
    fn test_parse_rejects_path_segments() {
        for bad in ["", "3", "3.", ".9", "3.9.1", "../3.9", "3/9", "3.x", "latest"] {
            assert!(matches!(Version::parse(bad), Err(Error::InvalidVersion(_))), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_all_versions_parse() {
        let all = Version::all();
        assert_eq!(all.len(), 12);
        assert_eq!(all.first().unwrap().as_str(), "2.6");
        assert_eq!(all.last().unwrap().as_str(), "3.9");
        for v in ALL_VERSIONS {
            assert!(Version::parse(v).is_ok());
        }
    }

    #[test]
    fn test_from_str() {
        let v: Version = "3.4".parse().unwrap();
        assert_eq!(v, Version::parse("3.4").unwrap());
    }
}
