//! Dotted numeric server versions (`13.5`, `12.10.3`).
//!
//! Comparison is field by field; missing trailing fields count as zero, so
//! `13.5` and `13.5.0` are equal.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Version reported by (or configured for) a git hosting server.
#[derive(Debug, Clone)]
pub struct ServerVersion {
    components: Vec<u32>,
}

/// Returned when a string is not a dotted numeric version.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid server version '{input}'")]
pub struct ParseVersionError {
    pub input: String,
}

const MIN_COMPONENTS: usize = 2;
const MAX_COMPONENTS: usize = 4;

impl ServerVersion {
    pub fn components(&self) -> &[u32] {
        &self.components
    }

    fn component(&self, index: usize) -> u32 {
        self.components.get(index).copied().unwrap_or(0)
    }
}

/// Two-component version usable in `const` items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MajorMinor {
    pub major: u32,
    pub minor: u32,
}

impl MajorMinor {
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }
}

impl From<MajorMinor> for ServerVersion {
    fn from(v: MajorMinor) -> Self {
        Self {
            components: vec![v.major, v.minor],
        }
    }
}

impl FromStr for ServerVersion {
    type Err = ParseVersionError;

    /// Accepts two to four dot-separated components, each a non-negative
    /// 32-bit signed integer with optional surrounding whitespace and an
    /// optional leading `+`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseVersionError {
            input: s.to_string(),
        };
        let parts: Vec<&str> = s.split('.').collect();
        if !(MIN_COMPONENTS..=MAX_COMPONENTS).contains(&parts.len()) {
            return Err(err());
        }
        let components = parts
            .into_iter()
            .map(|part| {
                let part = part.trim();
                let digits = part.strip_prefix('+').unwrap_or(part);
                if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(err());
                }
                digits
                    .parse::<u32>()
                    .ok()
                    .filter(|&n| n <= i32::MAX as u32)
                    .ok_or_else(err)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { components })
    }
}

impl fmt::Display for ServerVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for c in &self.components {
            if !first {
                write!(f, ".")?;
            }
            write!(f, "{}", c)?;
            first = false;
        }
        Ok(())
    }
}

impl Ord for ServerVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.components.len().max(other.components.len());
        (0..len)
            .map(|i| self.component(i).cmp(&other.component(i)))
            .find(|o| o.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for ServerVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ServerVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ServerVersion {}
