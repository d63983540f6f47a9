//! Paradigm relationships.

use serde::{Deserialize, Serialize};

use super::RelationKind;
use crate::types::Dimension;

/// How two tech objects relate through the programming paradigms they carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum ParadigmKind {
    /// This object is a canonical example of that object's paradigm.
    Exemplifies = 0,
    ExemplifiedBy = 1,
    /// This object took a paradigm over from that object.
    Adopts = 2,
    AdoptedBy = 3,
    /// This object introduced a paradigm later found in that object.
    Introduces = 4,
    IntroducedBy = 5,
    SharesParadigmWith = 6,
    ContrastsWith = 7,
}

impl RelationKind for ParadigmKind {
    const DIMENSION: Dimension = Dimension::Paradigm;

    const TABLE: &'static [(Self, Self)] = &[
        (Self::Exemplifies, Self::ExemplifiedBy),
        (Self::ExemplifiedBy, Self::Exemplifies),
        (Self::Adopts, Self::AdoptedBy),
        (Self::AdoptedBy, Self::Adopts),
        (Self::Introduces, Self::IntroducedBy),
        (Self::IntroducedBy, Self::Introduces),
        (Self::SharesParadigmWith, Self::SharesParadigmWith),
        (Self::ContrastsWith, Self::ContrastsWith),
    ];

    fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Exemplifies),
            1 => Some(Self::ExemplifiedBy),
            2 => Some(Self::Adopts),
            3 => Some(Self::AdoptedBy),
            4 => Some(Self::Introduces),
            5 => Some(Self::IntroducedBy),
            6 => Some(Self::SharesParadigmWith),
            7 => Some(Self::ContrastsWith),
            _ => None,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Exemplifies => "EXEMPLIFIES",
            Self::ExemplifiedBy => "EXEMPLIFIED_BY",
            Self::Adopts => "ADOPTS",
            Self::AdoptedBy => "ADOPTED_BY",
            Self::Introduces => "INTRODUCES",
            Self::IntroducedBy => "INTRODUCED_BY",
            Self::SharesParadigmWith => "SHARES_PARADIGM_WITH",
            Self::ContrastsWith => "CONTRASTS_WITH",
        }
    }
}

impl std::fmt::Display for ParadigmKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
