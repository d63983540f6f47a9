//! Structural relationships: composition, dependency and influence.

use serde::{Deserialize, Serialize};

use super::RelationKind;
use crate::types::Dimension;

/// How one tech object is built from, or shapes the build of, another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum StructuralKind {
    /// This object uses that object directly.
    Uses = 0,
    UsedBy = 1,
    /// This object cannot work without that object.
    DependsOn = 2,
    DependencyOf = 3,
    /// This object extends the surface of that object.
    Extends = 4,
    ExtendedBy = 5,
    /// This object implements a specification or interface defined by that object.
    Implements = 6,
    ImplementedBy = 7,
    /// This object contains that object as a component.
    Contains = 8,
    PartOf = 9,
    /// This object is built on top of that object.
    BuiltOn = 10,
    FoundationOf = 11,
    /// This object's design shaped that object.
    Influences = 12,
    InfluencedBy = 13,
    /// The two objects can be used together.
    CompatibleWith = 14,
    /// The two objects fill the same role.
    AlternativeTo = 15,
}

impl RelationKind for StructuralKind {
    const DIMENSION: Dimension = Dimension::Structural;

    const TABLE: &'static [(Self, Self)] = &[
        (Self::Uses, Self::UsedBy),
        (Self::UsedBy, Self::Uses),
        (Self::DependsOn, Self::DependencyOf),
        (Self::DependencyOf, Self::DependsOn),
        (Self::Extends, Self::ExtendedBy),
        (Self::ExtendedBy, Self::Extends),
        (Self::Implements, Self::ImplementedBy),
        (Self::ImplementedBy, Self::Implements),
        (Self::Contains, Self::PartOf),
        (Self::PartOf, Self::Contains),
        (Self::BuiltOn, Self::FoundationOf),
        (Self::FoundationOf, Self::BuiltOn),
        (Self::Influences, Self::InfluencedBy),
        (Self::InfluencedBy, Self::Influences),
        (Self::CompatibleWith, Self::CompatibleWith),
        (Self::AlternativeTo, Self::AlternativeTo),
    ];

    fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Uses),
            1 => Some(Self::UsedBy),
            2 => Some(Self::DependsOn),
            3 => Some(Self::DependencyOf),
            4 => Some(Self::Extends),
            5 => Some(Self::ExtendedBy),
            6 => Some(Self::Implements),
            7 => Some(Self::ImplementedBy),
            8 => Some(Self::Contains),
            9 => Some(Self::PartOf),
            10 => Some(Self::BuiltOn),
            11 => Some(Self::FoundationOf),
            12 => Some(Self::Influences),
            13 => Some(Self::InfluencedBy),
            14 => Some(Self::CompatibleWith),
            15 => Some(Self::AlternativeTo),
            _ => None,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Uses => "USES",
            Self::UsedBy => "USED_BY",
            Self::DependsOn => "DEPENDS_ON",
            Self::DependencyOf => "DEPENDENCY_OF",
            Self::Extends => "EXTENDS",
            Self::ExtendedBy => "EXTENDED_BY",
            Self::Implements => "IMPLEMENTS",
            Self::ImplementedBy => "IMPLEMENTED_BY",
            Self::Contains => "CONTAINS",
            Self::PartOf => "PART_OF",
            Self::BuiltOn => "BUILT_ON",
            Self::FoundationOf => "FOUNDATION_OF",
            Self::Influences => "INFLUENCES",
            Self::InfluencedBy => "INFLUENCED_BY",
            Self::CompatibleWith => "COMPATIBLE_WITH",
            Self::AlternativeTo => "ALTERNATIVE_TO",
        }
    }
}

impl std::fmt::Display for StructuralKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
