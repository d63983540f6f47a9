//! Flat data transfer objects and their mapping to the graph model.
//!
//! Mapping an object to a DTO and back preserves id, name, level, the full
//! version tree structure and every viewer slot. The reverse direction is
//! where untrusted input is validated: ids, levels, version strings and
//! relationship kinds against each dimension's vocabulary.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::graph::{
    ExperienceFacts, ParadigmFacts, RelationshipRecord, StructuralFacts, SystemFacts,
    TechObject, TechVersion, TemporalFacts, UseCaseFacts, ViewerDataBundle, ViewerSlot,
};
use crate::types::{AbstractionLevel, AtlasError, AtlasResult, TechObjectId, VersionNumber};
use crate::vocab::RelationKind;

fn default_active() -> bool {
    true
}

/// A relationship record with its kind as a plain string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipRecordDto {
    pub source_id: String,
    pub target_id: String,
    pub kind: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub context: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    pub created_at: u64,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

/// One dimension slot: facts flattened next to the relationship list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewerSlotDto<F> {
    #[serde(flatten)]
    pub facts: F,
    #[serde(default)]
    pub relationships: Vec<RelationshipRecordDto>,
}

/// All six dimension slots. Missing slots deserialize as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerDataBundleDto {
    pub temporal: ViewerSlotDto<TemporalFacts>,
    pub structural: ViewerSlotDto<StructuralFacts>,
    pub paradigm: ViewerSlotDto<ParadigmFacts>,
    pub system: ViewerSlotDto<SystemFacts>,
    pub usecase: ViewerSlotDto<UseCaseFacts>,
    pub experience: ViewerSlotDto<ExperienceFacts>,
}

/// One version tree node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionDto {
    pub id: String,
    pub version: String,
    #[serde(default)]
    pub children: Vec<VersionDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewers_data: Option<ViewerDataBundleDto>,
}

/// A tech object as flat data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechObjectDto {
    pub id: String,
    pub name: String,
    pub level: i64,
    #[serde(default)]
    pub versions: Vec<VersionDto>,
    #[serde(default)]
    pub viewers_data: ViewerDataBundleDto,
}

// ==================== Graph -> DTO ====================

impl<K: RelationKind> From<&RelationshipRecord<K>> for RelationshipRecordDto {
    fn from(record: &RelationshipRecord<K>) -> Self {
        Self {
            source_id: record.source_id.to_string(),
            target_id: record.target_id.to_string(),
            kind: record.kind.name().to_string(),
            context: record.context.clone(),
            created_at: record.created_at,
            is_active: record.is_active,
        }
    }
}

fn slot_to_dto<F: Clone, K: RelationKind>(slot: &ViewerSlot<F, K>) -> ViewerSlotDto<F> {
    ViewerSlotDto {
        facts: slot.facts.clone(),
        relationships: slot.relationships.iter().map(Into::into).collect(),
    }
}

impl From<&ViewerDataBundle> for ViewerDataBundleDto {
    fn from(bundle: &ViewerDataBundle) -> Self {
        Self {
            temporal: slot_to_dto(&bundle.temporal),
            structural: slot_to_dto(&bundle.structural),
            paradigm: slot_to_dto(&bundle.paradigm),
            system: slot_to_dto(&bundle.system),
            usecase: slot_to_dto(&bundle.usecase),
            experience: slot_to_dto(&bundle.experience),
        }
    }
}

impl From<&TechVersion> for VersionDto {
    fn from(version: &TechVersion) -> Self {
        Self {
            id: version.id.to_string(),
            version: version.version.to_string(),
            children: version.children.iter().map(Into::into).collect(),
            viewers_data: Some((&version.viewer_data).into()),
        }
    }
}

impl From<&TechObject> for TechObjectDto {
    fn from(object: &TechObject) -> Self {
        Self {
            id: object.id().to_string(),
            name: object.name().to_string(),
            level: object.level().rank() as i64,
            versions: object.versions().iter().map(Into::into).collect(),
            viewers_data: object.viewer_data().into(),
        }
    }
}

// ==================== DTO -> Graph ====================

impl<K: RelationKind> TryFrom<RelationshipRecordDto> for RelationshipRecord<K> {
    type Error = AtlasError;

    fn try_from(dto: RelationshipRecordDto) -> AtlasResult<Self> {
        let mut record = RelationshipRecord::with_timestamp(
            TechObjectId::new(dto.source_id)?,
            TechObjectId::new(dto.target_id)?,
            K::parse(&dto.kind)?,
            dto.created_at,
        );
        record.context = dto.context;
        record.is_active = dto.is_active;
        Ok(record)
    }
}

fn slot_from_dto<F, K: RelationKind>(dto: ViewerSlotDto<F>) -> AtlasResult<ViewerSlot<F, K>> {
    Ok(ViewerSlot {
        facts: dto.facts,
        relationships: dto
            .relationships
            .into_iter()
            .map(RelationshipRecord::try_from)
            .collect::<AtlasResult<Vec<_>>>()?,
    })
}

impl TryFrom<ViewerDataBundleDto> for ViewerDataBundle {
    type Error = AtlasError;

    fn try_from(dto: ViewerDataBundleDto) -> AtlasResult<Self> {
        Ok(Self {
            temporal: slot_from_dto(dto.temporal)?,
            structural: slot_from_dto(dto.structural)?,
            paradigm: slot_from_dto(dto.paradigm)?,
            system: slot_from_dto(dto.system)?,
            usecase: slot_from_dto(dto.usecase)?,
            experience: slot_from_dto(dto.experience)?,
        })
    }
}

impl TryFrom<VersionDto> for TechVersion {
    type Error = AtlasError;

    fn try_from(dto: VersionDto) -> AtlasResult<Self> {
        Ok(Self {
            id: TechObjectId::new(dto.id)?,
            version: VersionNumber::parse(&dto.version)?,
            children: dto
                .children
                .into_iter()
                .map(TechVersion::try_from)
                .collect::<AtlasResult<Vec<_>>>()?,
            viewer_data: dto
                .viewers_data
                .map(ViewerDataBundle::try_from)
                .transpose()?
                .unwrap_or_default(),
        })
    }
}

impl TryFrom<TechObjectDto> for TechObject {
    type Error = AtlasError;

    fn try_from(dto: TechObjectDto) -> AtlasResult<Self> {
        let versions = dto
            .versions
            .into_iter()
            .map(TechVersion::try_from)
            .collect::<AtlasResult<Vec<_>>>()?;
        TechObject::from_parts(
            TechObjectId::new(dto.id)?,
            dto.name,
            AbstractionLevel::try_from_rank(dto.level)?,
            versions,
            dto.viewers_data.try_into()?,
        )
    }
}

/// Parse a JSON array of tech objects.
pub fn parse_catalog(json: &str) -> AtlasResult<Vec<TechObjectDto>> {
    Ok(serde_json::from_str(json)?)
}
