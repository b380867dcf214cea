//! Fix-version parsing and precedence comparison.
//!
//! Advisory feeds are loose about version strings: alongside strict semver
//! they emit two-segment ("4.17"), four-segment ("1.0.2.8"), and
//! `v`-prefixed forms. [`FixVersion`] accepts all of these and compares them
//! by numeric precedence on the release segments, with missing segments
//! treated as zero, so `"4.17"` and `"4.17.0"` are equal. A pre-release
//! sorts below the plain release it precedes.
//!
//! Anything that does not parse is "not comparable": callers must leave the
//! current farthest version untouched rather than let a malformed string win.

use semver::Prerelease;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a fix-version string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized version string {0:?}")]
pub struct VersionError(pub String);

/// A fix version parsed for precedence comparison.
///
/// # Example
///
/// ```
/// use fixplan::version::FixVersion;
///
/// let old: FixVersion = "4.17.11".parse().unwrap();
/// let new: FixVersion = "v4.18".parse().unwrap();
///
/// assert!(old < new);
/// assert_eq!(new.to_string(), "4.18.0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixVersion {
    release: Vec<u64>,
    pre: Prerelease,
}

impl FromStr for FixVersion {
    type Err = VersionError;

    fn from_str(raw: &str) -> Result<Self, VersionError> {
        let trimmed = raw.trim().trim_start_matches(['v', 'V']);
        if trimmed.is_empty() {
            return Err(VersionError(raw.to_string()));
        }

        // Strict semver first, matching how registries publish versions.
        if let Ok(version) = semver::Version::parse(trimmed) {
            return Ok(Self {
                release: normalize(vec![version.major, version.minor, version.patch]),
                pre: version.pre,
            });
        }

        // Lenient fallback for the dotted forms semver rejects.
        let (release_part, pre_part) = match trimmed.split_once('-') {
            Some((release, pre)) => (release, Some(pre)),
            None => (trimmed, None),
        };
        let release_part = release_part
            .split_once('+')
            .map(|(release, _)| release)
            .unwrap_or(release_part);

        let release: Vec<u64> = release_part
            .split('.')
            .map(|segment| segment.parse::<u64>())
            .collect::<Result<_, _>>()
            .map_err(|_| VersionError(raw.to_string()))?;

        let pre = pre_part
            .map(|pre| pre.split_once('+').map(|(pre, _)| pre).unwrap_or(pre))
            .and_then(|pre| Prerelease::new(pre).ok())
            .unwrap_or(Prerelease::EMPTY);

        Ok(Self {
            release: normalize(release),
            pre,
        })
    }
}

/// Pads the release to three segments and drops trailing zeros beyond them,
/// so that equal precedence implies structural equality ("1.2" == "1.2.0").
fn normalize(mut release: Vec<u64>) -> Vec<u64> {
    while release.len() < 3 {
        release.push(0);
    }
    while release.len() > 3 && release.last() == Some(&0) {
        release.pop();
    }
    release
}

impl Ord for FixVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let segments = self.release.len().max(other.release.len());
        for i in 0..segments {
            let ours = self.release.get(i).copied().unwrap_or(0);
            let theirs = other.release.get(i).copied().unwrap_or(0);
            match ours.cmp(&theirs) {
                Ordering::Equal => continue,
                ordering => return ordering,
            }
        }
        // semver orders the empty pre-release above any real one.
        self.pre.cmp(&other.pre)
    }
}

impl PartialOrd for FixVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for FixVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let release = self
            .release
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(".");
        if self.pre.is_empty() {
            write!(f, "{}", release)
        } else {
            write!(f, "{}-{}", release, self.pre)
        }
    }
}

/// Compares two raw version strings by precedence.
///
/// Returns `None` when either side fails to parse; the caller must then
/// treat the pair as not comparable and skip any update that depends on it.
pub fn compare(a: &str, b: &str) -> Option<Ordering> {
    let a = a.parse::<FixVersion>().ok()?;
    let b = b.parse::<FixVersion>().ok()?;
    Some(a.cmp(&b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> FixVersion {
        raw.parse().unwrap()
    }

    #[test]
    fn test_semver_precedence() {
        assert!(parse("4.17.11") < parse("4.17.21"));
        assert!(parse("0.21.1") < parse("1.0.0"));
        assert!(parse("2.0.0") > parse("1.99.99"));
    }

    #[test]
    fn test_lenient_two_segment() {
        assert!(parse("4.17") < parse("4.18"));
        assert_eq!(parse("4.17"), parse("4.17.0"));
    }

    #[test]
    fn test_lenient_four_segment() {
        assert!(parse("1.0.2.8") > parse("1.0.2"));
        assert!(parse("1.0.2.8") < parse("1.0.3"));
        assert_eq!(parse("1.2.3.0"), parse("1.2.3"));
    }

    #[test]
    fn test_v_prefix_stripped() {
        assert_eq!(parse("v4.17.21"), parse("4.17.21"));
        assert_eq!(parse("V2.0"), parse("2.0.0"));
    }

    #[test]
    fn test_prerelease_sorts_below_release() {
        assert!(parse("1.0.0-beta.1") < parse("1.0.0"));
        assert!(parse("1.0.0-alpha") < parse("1.0.0-beta"));
        assert!(parse("1.0-rc1") < parse("1.0.0"));
    }

    #[test]
    fn test_build_metadata_ignored() {
        assert_eq!(parse("1.2.3+build.5"), parse("1.2.3"));
    }

    #[test]
    fn test_canonical_display() {
        assert_eq!(parse("v4.18").to_string(), "4.18.0");
        assert_eq!(parse("4.17.21").to_string(), "4.17.21");
        assert_eq!(parse("1.0.2.8").to_string(), "1.0.2.8");
        assert_eq!(parse("1.0.0-beta.1").to_string(), "1.0.0-beta.1");
    }

    #[test]
    fn test_unparsable_rejected() {
        assert!("".parse::<FixVersion>().is_err());
        assert!("not-a-version".parse::<FixVersion>().is_err());
        assert!("1..2".parse::<FixVersion>().is_err());
        assert!("1.x.3".parse::<FixVersion>().is_err());
    }

    #[test]
    fn test_error_names_the_input() {
        let err = "bogus".parse::<FixVersion>().unwrap_err();
        assert!(err.to_string().contains("bogus"));
    }

    #[test]
    fn test_compare_parsable_pair() {
        assert_eq!(compare("4.17.11", "4.17.21"), Some(Ordering::Less));
        assert_eq!(compare("4.17", "4.17.0"), Some(Ordering::Equal));
    }

    #[test]
    fn test_compare_unparsable_side_is_none() {
        assert_eq!(compare("garbage", "1.2.3"), None);
        assert_eq!(compare("1.2.3", "garbage"), None);
        assert_eq!(compare("", ""), None);
    }
}
