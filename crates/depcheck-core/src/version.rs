//! Maven version parsing and comparison.
//!
//! Maven orders versions unlike semver:
//! - Versions split into segments on `.` and `-`
//! - Numeric segments compare as numbers
//! - Known qualifiers order
//!   `alpha < beta < milestone < rc < snapshot < "" (release) < sp`;
//!   unknown text qualifiers sort below a release
//! - Trailing null segments are insignificant, so `1.0` equals `1.0.0`
//! - `1.0-SNAPSHOT` sorts before `1.0`

use std::cmp::Ordering;
use std::fmt;

/// Version suffix marking an unstable, non-final build.
pub const SNAPSHOT_SUFFIX: &str = "-SNAPSHOT";

/// A parsed Maven version with comparable segments.
///
/// Parsing never fails: any string is a version. Equality follows the
/// comparison, so versions that compare equal (`1.0` vs `1.0.0`) coalesce
/// in ordered collections.
#[derive(Debug, Clone)]
pub struct MavenVersion {
    original: String,
    segments: Vec<Segment>,
}

#[derive(Debug, Clone, Eq, PartialEq)]
enum Segment {
    Number(u64),
    /// A well-known qualifier, stored as its rank in the qualifier ordering.
    Qualifier(u8),
    /// An unknown qualifier, lowercased.
    Word(String),
}

/// Rank of the implicit release qualifier.
const RELEASE: u8 = 5;

fn qualifier_rank(token: &str) -> Option<u8> {
    match token {
        "alpha" | "a" => Some(0),
        "beta" | "b" => Some(1),
        "milestone" | "m" => Some(2),
        "rc" | "cr" => Some(3),
        "snapshot" => Some(4),
        "ga" | "final" | "release" => Some(RELEASE),
        "sp" => Some(6),
        _ => None,
    }
}

fn classify(token: &str) -> Segment {
    if let Ok(n) = token.parse::<u64>() {
        return Segment::Number(n);
    }
    let lower = token.to_lowercase();
    match qualifier_rank(&lower) {
        Some(rank) => Segment::Qualifier(rank),
        None => Segment::Word(lower),
    }
}

impl MavenVersion {
    pub fn parse(version: &str) -> Self {
        let segments = version
            .split(['.', '-'])
            .filter(|t| !t.is_empty())
            .map(classify)
            .collect();
        Self {
            original: version.to_string(),
            segments,
        }
    }

    /// The version string as originally written.
    pub fn as_str(&self) -> &str {
        &self.original
    }

    pub fn is_snapshot(&self) -> bool {
        self.original.ends_with(SNAPSHOT_SUFFIX)
    }

    /// The base version without the `-SNAPSHOT` suffix.
    pub fn base_version(&self) -> &str {
        self.original
            .strip_suffix(SNAPSHOT_SUFFIX)
            .unwrap_or(&self.original)
    }
}

impl fmt::Display for MavenVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

impl Ord for MavenVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.segments.len().max(other.segments.len());
        for i in 0..len {
            let ord = match (self.segments.get(i), other.segments.get(i)) {
                (Some(a), Some(b)) => compare_segments(a, b),
                // The shorter version is padded with implicit release segments
                (Some(a), None) => against_release(a),
                (None, Some(b)) => against_release(b).reverse(),
                (None, None) => Ordering::Equal,
            };
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for MavenVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for MavenVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for MavenVersion {}

/// How a segment compares against implicit release padding.
fn against_release(seg: &Segment) -> Ordering {
    match seg {
        Segment::Number(n) => n.cmp(&0),
        Segment::Qualifier(rank) => rank.cmp(&RELEASE),
        Segment::Word(_) => Ordering::Less,
    }
}

fn compare_segments(a: &Segment, b: &Segment) -> Ordering {
    use Segment::*;
    match (a, b) {
        (Number(a), Number(b)) => a.cmp(b),
        (Qualifier(a), Qualifier(b)) => a.cmp(b),
        (Word(a), Word(b)) => a.cmp(b),
        (Number(_), _) => Ordering::Greater,
        (_, Number(_)) => Ordering::Less,
        (Qualifier(rank), Word(_)) => {
            if *rank >= RELEASE {
                Ordering::Greater
            } else {
                Ordering::Less
            }
        }
        (Word(_), Qualifier(rank)) => {
            if *rank >= RELEASE {
                Ordering::Less
            } else {
                Ordering::Greater
            }
        }
    }
}
