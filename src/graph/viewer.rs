//! Viewer data: the six per-dimension slots attached to every object and version.

use serde::{Deserialize, Serialize};

use super::relationship::RelationshipRecord;
use crate::types::{Dimension, TechObjectId};
use crate::vocab::{
    DimensionKind, ExperienceKind, ParadigmKind, RelationKind, StructuralKind, SystemKind,
    TemporalKind, UseCaseKind,
};

/// Release history facts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TemporalFacts {
    pub first_released: Option<String>,
    pub latest_release: Option<String>,
    pub era: Option<String>,
    pub maintained: Option<bool>,
}

/// Composition facts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StructuralFacts {
    pub architecture: Option<String>,
    pub components: Vec<String>,
    pub written_in: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParadigmFacts {
    pub paradigms: Vec<String>,
    pub typing: Option<String>,
}

/// Execution-environment facts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SystemFacts {
    pub platforms: Vec<String>,
    pub runtime: Option<String>,
    pub license: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UseCaseFacts {
    pub domains: Vec<String>,
    pub typical_projects: Vec<String>,
}

/// Developer-experience facts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExperienceFacts {
    pub learning_curve: Option<String>,
    pub community_size: Option<String>,
    /// Survey satisfaction in [0.0, 1.0].
    pub satisfaction: Option<f32>,
}

/// One dimension's data: descriptive facts plus typed relationships.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerSlot<F, K> {
    pub facts: F,
    pub relationships: Vec<RelationshipRecord<K>>,
}

impl<F: Default, K> Default for ViewerSlot<F, K> {
    fn default() -> Self {
        Self {
            facts: F::default(),
            relationships: Vec::new(),
        }
    }
}

impl<F, K: RelationKind> ViewerSlot<F, K> {
    /// A slot with the given facts and no relationships.
    pub fn new(facts: F) -> Self {
        Self {
            facts,
            relationships: Vec::new(),
        }
    }

    /// Append a relationship record.
    pub fn with_relationship(mut self, record: RelationshipRecord<K>) -> Self {
        self.relationships.push(record);
        self
    }

    /// Records that take part in matching.
    pub fn active_relationships(&self) -> impl Iterator<Item = &RelationshipRecord<K>> {
        self.relationships.iter().filter(|r| r.is_active)
    }

    /// Whether an active outgoing record of `kind` targets `target`.
    pub fn has_active_relationship(&self, kind: K, target: &TechObjectId) -> bool {
        self.relationships.iter().any(|r| r.matches(kind, target))
    }
}

pub type TemporalViewer = ViewerSlot<TemporalFacts, TemporalKind>;
pub type StructuralViewer = ViewerSlot<StructuralFacts, StructuralKind>;
pub type ParadigmViewer = ViewerSlot<ParadigmFacts, ParadigmKind>;
pub type SystemViewer = ViewerSlot<SystemFacts, SystemKind>;
pub type UseCaseViewer = ViewerSlot<UseCaseFacts, UseCaseKind>;
pub type ExperienceViewer = ViewerSlot<ExperienceFacts, ExperienceKind>;

/// Exactly six slots, one per dimension. A slot is never absent; its
/// relationship list may be empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewerDataBundle {
    pub temporal: TemporalViewer,
    pub structural: StructuralViewer,
    pub paradigm: ParadigmViewer,
    pub system: SystemViewer,
    pub usecase: UseCaseViewer,
    pub experience: ExperienceViewer,
}

impl ViewerDataBundle {
    /// An empty bundle: default facts, no relationships.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the slot for `kind`'s dimension holds an active record of that
    /// kind targeting `target`. Direction matters: only outgoing records of
    /// this bundle's owner are consulted, and `reverse()` is not applied.
    pub fn has_active_relationship(&self, kind: &DimensionKind, target: &TechObjectId) -> bool {
        match *kind {
            DimensionKind::Temporal(k) => self.temporal.has_active_relationship(k, target),
            DimensionKind::Structural(k) => self.structural.has_active_relationship(k, target),
            DimensionKind::Paradigm(k) => self.paradigm.has_active_relationship(k, target),
            DimensionKind::System(k) => self.system.has_active_relationship(k, target),
            DimensionKind::UseCase(k) => self.usecase.has_active_relationship(k, target),
            DimensionKind::Experience(k) => self.experience.has_active_relationship(k, target),
        }
    }

    /// Append a record to the slot matching `kind`'s dimension.
    pub fn add_relationship(
        &mut self,
        source_id: TechObjectId,
        kind: DimensionKind,
        target_id: TechObjectId,
        is_active: bool,
    ) {
        fn record<K: RelationKind>(
            source_id: TechObjectId,
            target_id: TechObjectId,
            kind: K,
            is_active: bool,
        ) -> RelationshipRecord<K> {
            let record = RelationshipRecord::new(source_id, target_id, kind);
            if is_active {
                record
            } else {
                record.deactivate()
            }
        }

        match kind {
            DimensionKind::Temporal(k) => self
                .temporal
                .relationships
                .push(record(source_id, target_id, k, is_active)),
            DimensionKind::Structural(k) => self
                .structural
                .relationships
                .push(record(source_id, target_id, k, is_active)),
            DimensionKind::Paradigm(k) => self
                .paradigm
                .relationships
                .push(record(source_id, target_id, k, is_active)),
            DimensionKind::System(k) => self
                .system
                .relationships
                .push(record(source_id, target_id, k, is_active)),
            DimensionKind::UseCase(k) => self
                .usecase
                .relationships
                .push(record(source_id, target_id, k, is_active)),
            DimensionKind::Experience(k) => self
                .experience
                .relationships
                .push(record(source_id, target_id, k, is_active)),
        }
    }

    /// Active relationships of one dimension as (kind, target) pairs.
    pub fn active_edges(&self, dimension: Dimension) -> Vec<(DimensionKind, &TechObjectId)> {
        fn edges<K: RelationKind + Into<DimensionKind>, F>(
            slot: &ViewerSlot<F, K>,
        ) -> Vec<(DimensionKind, &TechObjectId)> {
            slot.active_relationships()
                .map(|r| (r.kind.into(), &r.target_id))
                .collect()
        }

        match dimension {
            Dimension::Temporal => edges(&self.temporal),
            Dimension::Structural => edges(&self.structural),
            Dimension::Paradigm => edges(&self.paradigm),
            Dimension::System => edges(&self.system),
            Dimension::UseCase => edges(&self.usecase),
            Dimension::Experience => edges(&self.experience),
        }
    }

    /// Number of records (active or not) across all six slots.
    pub fn relationship_count(&self) -> usize {
        self.temporal.relationships.len()
            + self.structural.relationships.len()
            + self.paradigm.relationships.len()
            + self.system.relationships.len()
            + self.usecase.relationships.len()
            + self.experience.relationships.len()
    }
}
