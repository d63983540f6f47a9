//! Typed relationship records.

use std::collections::BTreeMap;

use crate::types::{now_micros, AtlasResult, TechObjectId};
use crate::vocab::RelationKind;

/// A directed, typed edge from one tech object to another within a single
/// dimension. Inactive records are kept for audit but never matched.
#[derive(Debug, Clone, PartialEq)]
pub struct RelationshipRecord<K> {
    /// Object declaring the relationship.
    pub source_id: TechObjectId,
    /// Object the relationship points at.
    pub target_id: TechObjectId,
    /// Kind from the owning dimension's vocabulary.
    pub kind: K,
    /// Free-form annotations (e.g. "since", "notes").
    pub context: BTreeMap<String, serde_json::Value>,
    /// When this record was created (Unix epoch microseconds).
    pub created_at: u64,
    /// Whether the record takes part in matching.
    pub is_active: bool,
}

impl<K: RelationKind> RelationshipRecord<K> {
    /// Create an active record stamped with the current time.
    pub fn new(source_id: TechObjectId, target_id: TechObjectId, kind: K) -> Self {
        Self::with_timestamp(source_id, target_id, kind, now_micros())
    }

    /// Create an active record with an explicit timestamp.
    pub fn with_timestamp(
        source_id: TechObjectId,
        target_id: TechObjectId,
        kind: K,
        created_at: u64,
    ) -> Self {
        Self {
            source_id,
            target_id,
            kind,
            context: BTreeMap::new(),
            created_at,
            is_active: true,
        }
    }

    /// Create a record from an untyped kind name. Fails with
    /// `InvalidRelationshipKind` if the name is not in `K`'s vocabulary.
    pub fn parse(source_id: TechObjectId, target_id: TechObjectId, kind: &str) -> AtlasResult<Self> {
        Ok(Self::new(source_id, target_id, K::parse(kind)?))
    }

    /// Attach a context entry.
    pub fn with_context(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.context.insert(key.into(), value);
        self
    }

    /// The same record, retired from matching.
    pub fn deactivate(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// The record as declared by the other endpoint: endpoints swapped and
    /// kind reversed.
    pub fn reversed(&self) -> Self {
        Self {
            source_id: self.target_id.clone(),
            target_id: self.source_id.clone(),
            kind: self.kind.reverse(),
            context: self.context.clone(),
            created_at: self.created_at,
            is_active: self.is_active,
        }
    }

    /// Active, of this kind, and pointing at `target`.
    pub fn matches(&self, kind: K, target: &TechObjectId) -> bool {
        self.is_active && self.kind == kind && &self.target_id == target
    }
}
