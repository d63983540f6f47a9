//! The six viewer dimensions.

use serde::{Deserialize, Serialize};

/// One of the six independent viewpoints on a tech object. Each dimension
/// owns a closed vocabulary of relationship kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Dimension {
    /// History: releases, forks, successors.
    Temporal = 0,
    /// Composition and dependencies.
    Structural = 1,
    /// Programming paradigms.
    Paradigm = 2,
    /// Runtimes, platforms, compilation targets.
    System = 3,
    /// What the object is used for.
    UseCase = 4,
    /// Learning curve and developer experience.
    Experience = 5,
}

impl Dimension {
    /// All dimensions in bundle order.
    pub const ALL: [Dimension; 6] = [
        Self::Temporal,
        Self::Structural,
        Self::Paradigm,
        Self::System,
        Self::UseCase,
        Self::Experience,
    ];

    /// Return the canonical (lowercase) name of this dimension.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Temporal => "temporal",
            Self::Structural => "structural",
            Self::Paradigm => "paradigm",
            Self::System => "system",
            Self::UseCase => "usecase",
            Self::Experience => "experience",
        }
    }

    /// Parse a dimension from its name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "temporal" => Some(Self::Temporal),
            "structural" => Some(Self::Structural),
            "paradigm" => Some(Self::Paradigm),
            "system" => Some(Self::System),
            "usecase" | "use_case" | "use-case" => Some(Self::UseCase),
            "experience" => Some(Self::Experience),
            _ => None,
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
