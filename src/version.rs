//! Image version marker and semantic version bumping.
use clap::ValueEnum;
use std::{fmt::Display, str::FromStr};

use crate::error::{ReleaseError, Result};

/// Version assumed when an image has never been released.
pub const INITIAL_VERSION: Version = Version::new(0, 0, 0);

/// Plain `major.minor.patch` version stored in an image's VERSION file.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

/// Which version component to increment.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum BumpType {
    Major,
    Minor,
    #[default]
    Patch,
}

impl Version {
    /// Build a version from its three components.
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Returns the next version: the selected component is incremented and
    /// every lower component is reset to zero. Fails when the component is
    /// already `u64::MAX`.
    pub fn bump(self, bump_type: BumpType) -> Result<Self> {
        let next = match bump_type {
            BumpType::Major => {
                self.major.checked_add(1).map(|major| Self::new(major, 0, 0))
            }
            BumpType::Minor => self
                .minor
                .checked_add(1)
                .map(|minor| Self::new(self.major, minor, 0)),
            BumpType::Patch => self
                .patch
                .checked_add(1)
                .map(|patch| Self::new(self.major, self.minor, patch)),
        };

        next.ok_or_else(|| {
            ReleaseError::invalid_version(
                self.to_string(),
                format!("{bump_type} component overflows"),
            )
        })
    }
}

impl FromStr for Version {
    type Err = ReleaseError;

    /// Parses `major.minor.patch`, ignoring surrounding whitespace. Each
    /// part must be a run of ASCII digits; leading zeros are accepted.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();

        let parts = trimmed
            .split('.')
            .map(|part| parse_component(trimmed, part))
            .collect::<Result<Vec<u64>>>()?;

        match parts.as_slice() {
            [major, minor, patch] => Ok(Self::new(*major, *minor, *patch)),
            _ => Err(ReleaseError::invalid_version(
                trimmed,
                format!(
                    "expected 3 dot-separated parts, found {}",
                    parts.len()
                ),
            )),
        }
    }
}

fn parse_component(value: &str, part: &str) -> Result<u64> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ReleaseError::invalid_version(
            value,
            format!("'{part}' is not a non-negative integer"),
        ));
    }

    part.parse::<u64>()
        .map_err(|err| ReleaseError::invalid_version(value, err.to_string()))
}

impl Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl Display for BumpType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BumpType::Major => f.write_str("major"),
            BumpType::Minor => f.write_str("minor"),
            BumpType::Patch => f.write_str("patch"),
        }
    }
}
