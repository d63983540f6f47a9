//! Temporal relationships: lineage and succession over time.

use serde::{Deserialize, Serialize};

use super::RelationKind;
use crate::types::Dimension;

/// How two tech objects relate along the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum TemporalKind {
    /// This object appeared before that object.
    Precedes = 0,
    Follows = 1,
    /// This object replaced that object as the maintained successor.
    Supersedes = 2,
    SupersededBy = 3,
    /// This object was forked from that object's code base.
    ForkedFrom = 4,
    ForkedInto = 5,
    /// This object grew out of that object.
    EvolvedFrom = 6,
    EvolvedInto = 7,
    /// Both objects emerged in the same era.
    ContemporaryWith = 8,
}

impl RelationKind for TemporalKind {
    const DIMENSION: Dimension = Dimension::Temporal;

    const TABLE: &'static [(Self, Self)] = &[
        (Self::Precedes, Self::Follows),
        (Self::Follows, Self::Precedes),
        (Self::Supersedes, Self::SupersededBy),
        (Self::SupersededBy, Self::Supersedes),
        (Self::ForkedFrom, Self::ForkedInto),
        (Self::ForkedInto, Self::ForkedFrom),
        (Self::EvolvedFrom, Self::EvolvedInto),
        (Self::EvolvedInto, Self::EvolvedFrom),
        (Self::ContemporaryWith, Self::ContemporaryWith),
    ];

    fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Precedes),
            1 => Some(Self::Follows),
            2 => Some(Self::Supersedes),
            3 => Some(Self::SupersededBy),
            4 => Some(Self::ForkedFrom),
            5 => Some(Self::ForkedInto),
            6 => Some(Self::EvolvedFrom),
            7 => Some(Self::EvolvedInto),
            8 => Some(Self::ContemporaryWith),
            _ => None,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Precedes => "PRECEDES",
            Self::Follows => "FOLLOWS",
            Self::Supersedes => "SUPERSEDES",
            Self::SupersededBy => "SUPERSEDED_BY",
            Self::ForkedFrom => "FORKED_FROM",
            Self::ForkedInto => "FORKED_INTO",
            Self::EvolvedFrom => "EVOLVED_FROM",
            Self::EvolvedInto => "EVOLVED_INTO",
            Self::ContemporaryWith => "CONTEMPORARY_WITH",
        }
    }
}

impl std::fmt::Display for TemporalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
