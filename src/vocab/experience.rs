//! Experience relationships: learning paths and developer experience.

use serde::{Deserialize, Serialize};

use super::RelationKind;
use crate::types::Dimension;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum ExperienceKind {
    /// Knowing this object helps before learning that object.
    PrerequisiteFor = 0,
    RequiresKnowledgeOf = 1,
    EasierThan = 2,
    HarderThan = 3,
    /// Users of this object commonly migrate to that object.
    MigrationPathTo = 4,
    MigrationPathFrom = 5,
    SimilarExperienceTo = 6,
}

impl RelationKind for ExperienceKind {
    const DIMENSION: Dimension = Dimension::Experience;

    const TABLE: &'static [(Self, Self)] = &[
        (Self::PrerequisiteFor, Self::RequiresKnowledgeOf),
        (Self::RequiresKnowledgeOf, Self::PrerequisiteFor),
        (Self::EasierThan, Self::HarderThan),
        (Self::HarderThan, Self::EasierThan),
        (Self::MigrationPathTo, Self::MigrationPathFrom),
        (Self::MigrationPathFrom, Self::MigrationPathTo),
        (Self::SimilarExperienceTo, Self::SimilarExperienceTo),
    ];

    fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::PrerequisiteFor),
            1 => Some(Self::RequiresKnowledgeOf),
            2 => Some(Self::EasierThan),
            3 => Some(Self::HarderThan),
            4 => Some(Self::MigrationPathTo),
            5 => Some(Self::MigrationPathFrom),
            6 => Some(Self::SimilarExperienceTo),
            _ => None,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::PrerequisiteFor => "PREREQUISITE_FOR",
            Self::RequiresKnowledgeOf => "REQUIRES_KNOWLEDGE_OF",
            Self::EasierThan => "EASIER_THAN",
            Self::HarderThan => "HARDER_THAN",
            Self::MigrationPathTo => "MIGRATION_PATH_TO",
            Self::MigrationPathFrom => "MIGRATION_PATH_FROM",
            Self::SimilarExperienceTo => "SIMILAR_EXPERIENCE_TO",
        }
    }
}

impl std::fmt::Display for ExperienceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
