//! Abstraction levels: the fixed ordered chain language → platform.

use serde::{Deserialize, Serialize};

use crate::types::error::{AtlasError, AtlasResult};

/// Rank of a tech object in the abstraction chain.
///
/// Only the five ranks below are constructible. Navigation may only move
/// between adjacent ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum AbstractionLevel {
    /// Programming languages.
    Language = 1,
    /// Libraries written in or for a language.
    Library = 2,
    /// Frameworks composed from libraries.
    Framework = 3,
    /// Applications built on frameworks.
    Application = 4,
    /// Platforms hosting applications.
    Platform = 5,
}

impl AbstractionLevel {
    /// All levels, lowest first.
    pub const ALL: [AbstractionLevel; 5] = [
        Self::Language,
        Self::Library,
        Self::Framework,
        Self::Application,
        Self::Platform,
    ];

    /// Convert a rank to a level, returning None for ranks outside 1..=5.
    pub fn from_rank(rank: u8) -> Option<Self> {
        match rank {
            1 => Some(Self::Language),
            2 => Some(Self::Library),
            3 => Some(Self::Framework),
            4 => Some(Self::Application),
            5 => Some(Self::Platform),
            _ => None,
        }
    }

    /// Like [`from_rank`](Self::from_rank) but fails with `InvalidLevel`.
    pub fn try_from_rank(rank: i64) -> AtlasResult<Self> {
        u8::try_from(rank)
            .ok()
            .and_then(Self::from_rank)
            .ok_or(AtlasError::InvalidLevel(rank))
    }

    /// The numeric rank (1 = language).
    pub fn rank(&self) -> u8 {
        *self as u8
    }

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Language => "language",
            Self::Library => "library",
            Self::Framework => "framework",
            Self::Application => "application",
            Self::Platform => "platform",
        }
    }

    /// Parse a level from its name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "language" => Some(Self::Language),
            "library" => Some(Self::Library),
            "framework" => Some(Self::Framework),
            "application" => Some(Self::Application),
            "platform" => Some(Self::Platform),
            _ => None,
        }
    }

    /// The next level up, if any.
    pub fn higher(&self) -> Option<Self> {
        Self::from_rank(self.rank() + 1)
    }

    /// The next level down, if any.
    pub fn lower(&self) -> Option<Self> {
        Self::from_rank(self.rank().checked_sub(1)?)
    }

    /// True iff `other` is exactly one rank away. Symmetric; never true for
    /// the level itself.
    pub fn can_abstract_to(&self, other: AbstractionLevel) -> bool {
        self.rank().abs_diff(other.rank()) == 1
    }
}

impl TryFrom<u8> for AbstractionLevel {
    type Error = AtlasError;

    fn try_from(rank: u8) -> AtlasResult<Self> {
        Self::from_rank(rank).ok_or(AtlasError::InvalidLevel(rank as i64))
    }
}

impl From<AbstractionLevel> for u8 {
    fn from(level: AbstractionLevel) -> Self {
        level.rank()
    }
}

impl std::fmt::Display for AbstractionLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name(), self.rank())
    }
}
