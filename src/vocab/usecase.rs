//! Use-case relationships.

use serde::{Deserialize, Serialize};

use super::RelationKind;
use crate::types::Dimension;

/// How two tech objects relate in terms of the problems they solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum UseCaseKind {
    /// This object makes that object's use case possible.
    Enables = 0,
    EnabledBy = 1,
    /// This object narrows that object to a specific use case.
    Specializes = 2,
    Generalizes = 3,
    /// This object takes over that object's use case.
    Replaces = 4,
    ReplacedBy = 5,
    Complements = 6,
    CompetesWith = 7,
}

impl RelationKind for UseCaseKind {
    const DIMENSION: Dimension = Dimension::UseCase;

    const TABLE: &'static [(Self, Self)] = &[
        (Self::Enables, Self::EnabledBy),
        (Self::EnabledBy, Self::Enables),
        (Self::Specializes, Self::Generalizes),
        (Self::Generalizes, Self::Specializes),
        (Self::Replaces, Self::ReplacedBy),
        (Self::ReplacedBy, Self::Replaces),
        (Self::Complements, Self::Complements),
        (Self::CompetesWith, Self::CompetesWith),
    ];

    fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Enables),
            1 => Some(Self::EnabledBy),
            2 => Some(Self::Specializes),
            3 => Some(Self::Generalizes),
            4 => Some(Self::Replaces),
            5 => Some(Self::ReplacedBy),
            6 => Some(Self::Complements),
            7 => Some(Self::CompetesWith),
            _ => None,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Enables => "ENABLES",
            Self::EnabledBy => "ENABLED_BY",
            Self::Specializes => "SPECIALIZES",
            Self::Generalizes => "GENERALIZES",
            Self::Replaces => "REPLACES",
            Self::ReplacedBy => "REPLACED_BY",
            Self::Complements => "COMPLEMENTS",
            Self::CompetesWith => "COMPETES_WITH",
        }
    }
}

impl std::fmt::Display for UseCaseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
