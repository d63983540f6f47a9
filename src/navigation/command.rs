//! Navigation commands as flat data, and their typed counterparts.

use serde::{Deserialize, Serialize};

use crate::filter::{FilterCriterion, FilterLogic};
use crate::graph::TechObject;
use crate::types::{AbstractionLevel, AtlasError, AtlasResult, Dimension, TechObjectId, VersionNumber};
use crate::vocab::DimensionKind;

/// A relationship a higher-level candidate must declare toward the object
/// being abstracted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RelationshipFilter {
    pub kind: DimensionKind,
}

impl RelationshipFilter {
    pub fn new(kind: impl Into<DimensionKind>) -> Self {
        Self { kind: kind.into() }
    }

    /// Validate `kind` against `viewer`'s vocabulary.
    pub fn parse(viewer: Dimension, kind: &str) -> AtlasResult<Self> {
        Ok(Self {
            kind: DimensionKind::parse(viewer, kind)?,
        })
    }

    pub fn viewer(&self) -> Dimension {
        self.kind.dimension()
    }

    /// The `has_relationship` criterion this filter stands for, aimed at `target`.
    pub fn to_criterion(&self, target: &TechObjectId) -> FilterCriterion {
        FilterCriterion::has_relationship(self.kind, target.clone())
    }
}

/// `{viewer, type}` as it arrives from callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipFilterSpec {
    pub viewer: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl TryFrom<&RelationshipFilterSpec> for RelationshipFilter {
    type Error = AtlasError;

    fn try_from(spec: &RelationshipFilterSpec) -> AtlasResult<Self> {
        let viewer = Dimension::from_name(&spec.viewer).ok_or_else(|| {
            AtlasError::InvalidCriterion(format!("unknown viewer '{}'", spec.viewer))
        })?;
        Self::parse(viewer, &spec.kind)
    }
}

/// Move focus to the next level up, keeping candidates related to the current object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbstractUp {
    pub current_tech_object_id: String,
    #[serde(default)]
    pub filters: Vec<RelationshipFilterSpec>,
    /// Falls back to the engine's default combinator when absent.
    #[serde(default)]
    pub combination_logic: Option<FilterLogic>,
}

/// Move focus to a specific object one level down.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbstractDown {
    pub current_tech_object_id: String,
    pub target_tech_object_id: String,
}

/// Move focus across the current object's version trees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigateHorizontal {
    pub current_tech_object_id: String,
    pub target_version: String,
}

/// Any navigation command, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum NavigationCommand {
    AbstractUp(AbstractUp),
    AbstractDown(AbstractDown),
    NavigateHorizontal(NavigateHorizontal),
}

impl AbstractUp {
    /// Validate every filter against its viewer's vocabulary.
    pub fn relationship_filters(&self) -> AtlasResult<Vec<RelationshipFilter>> {
        self.filters.iter().map(RelationshipFilter::try_from).collect()
    }
}

/// An object viewed at one of its versions.
#[derive(Debug, Clone, PartialEq)]
pub struct VersionedObject {
    /// The object with the version's viewer data in place of its own.
    pub object: TechObject,
    pub version: VersionNumber,
}

/// What a command produced.
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationOutcome {
    /// Objects at a level, in repository order. May be empty.
    Level {
        level: AbstractionLevel,
        objects: Vec<TechObject>,
    },
    /// A single object.
    Object(TechObject),
    /// An object seen at a version.
    Version(VersionedObject),
}
