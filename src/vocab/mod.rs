//! Relationship vocabulary: one closed set of relation kinds per dimension.
//!
//! Every dimension declares a single table pairing each kind with its
//! reverse. A kind is bidirectional iff it is its own reverse, so the
//! directional/bidirectional partition can never drift from the reverse
//! mapping. [`verify_all`] checks that each table lists every kind exactly
//! once and that `reverse` is an involution.

pub mod experience;
pub mod paradigm;
pub mod structural;
pub mod system;
pub mod temporal;
pub mod usecase;

use std::fmt::{Debug, Display};
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::types::{AtlasError, AtlasResult, Dimension};

pub use experience::ExperienceKind;
pub use paradigm::ParadigmKind;
pub use structural::StructuralKind;
pub use system::SystemKind;
pub use temporal::TemporalKind;
pub use usecase::UseCaseKind;

/// A relation kind belonging to one dimension's closed vocabulary.
pub trait RelationKind:
    Copy + Eq + Hash + Debug + Display + Send + Sync + Serialize + 'static
{
    /// The dimension owning this vocabulary.
    const DIMENSION: Dimension;

    /// Every kind paired with its reverse. Bidirectional kinds map to themselves.
    const TABLE: &'static [(Self, Self)];

    /// Convert a discriminant to a kind, returning None past the last variant.
    fn from_u8(value: u8) -> Option<Self>;

    /// Canonical (upper snake case) name.
    fn name(&self) -> &'static str;

    /// Every variant, in discriminant order.
    fn all() -> Vec<Self> {
        (0..=u8::MAX).map_while(Self::from_u8).collect()
    }

    /// The kind seen from the other endpoint. A kind absent from `TABLE`
    /// falls back to itself; [`verify`] rejects such tables.
    fn reverse(&self) -> Self {
        Self::TABLE
            .iter()
            .find(|(kind, _)| kind == self)
            .map(|(_, reverse)| *reverse)
            .unwrap_or(*self)
    }

    fn is_bidirectional(&self) -> bool {
        self.reverse() == *self
    }

    fn is_directional(&self) -> bool {
        !self.is_bidirectional()
    }

    /// Parse a kind from its name, ignoring ASCII case.
    fn from_name(name: &str) -> Option<Self> {
        Self::TABLE
            .iter()
            .map(|(kind, _)| *kind)
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
    }

    /// Like [`from_name`](Self::from_name) but fails with `InvalidRelationshipKind`.
    fn parse(name: &str) -> AtlasResult<Self> {
        Self::from_name(name).ok_or_else(|| AtlasError::InvalidRelationshipKind {
            dimension: Self::DIMENSION,
            kind: name.to_string(),
        })
    }
}

/// Check one vocabulary table against its enum.
pub fn verify<K: RelationKind>() -> AtlasResult<()> {
    let inconsistent = |kind: K, reason: &'static str| AtlasError::VocabularyInconsistent {
        dimension: K::DIMENSION,
        kind: kind.name().to_string(),
        reason,
    };

    let all = K::all();
    for &kind in &all {
        match K::TABLE.iter().filter(|(k, _)| *k == kind).count() {
            0 => return Err(inconsistent(kind, "missing from the reverse table")),
            1 => {}
            _ => return Err(inconsistent(kind, "listed more than once")),
        }
        if kind.reverse().reverse() != kind {
            return Err(inconsistent(kind, "reverse is not an involution"));
        }
    }
    for (kind, _) in K::TABLE {
        if !all.contains(kind) {
            return Err(inconsistent(*kind, "not reachable by discriminant"));
        }
    }
    Ok(())
}

/// Check all six vocabularies.
pub fn verify_all() -> AtlasResult<()> {
    verify::<TemporalKind>()?;
    verify::<StructuralKind>()?;
    verify::<ParadigmKind>()?;
    verify::<SystemKind>()?;
    verify::<UseCaseKind>()?;
    verify::<ExperienceKind>()?;
    log::debug!("All {} relationship vocabularies verified", Dimension::ALL.len());
    Ok(())
}

/// Names of every kind in a dimension, in discriminant order.
pub fn kind_names(dimension: Dimension) -> Vec<&'static str> {
    fn names<K: RelationKind>() -> Vec<&'static str> {
        K::all().iter().map(|k| k.name()).collect()
    }
    match dimension {
        Dimension::Temporal => names::<TemporalKind>(),
        Dimension::Structural => names::<StructuralKind>(),
        Dimension::Paradigm => names::<ParadigmKind>(),
        Dimension::System => names::<SystemKind>(),
        Dimension::UseCase => names::<UseCaseKind>(),
        Dimension::Experience => names::<ExperienceKind>(),
    }
}

/// A relation kind from any dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "dimension", content = "kind", rename_all = "lowercase")]
pub enum DimensionKind {
    Temporal(TemporalKind),
    Structural(StructuralKind),
    Paradigm(ParadigmKind),
    System(SystemKind),
    UseCase(UseCaseKind),
    Experience(ExperienceKind),
}

impl DimensionKind {
    /// Validate `name` against the closed vocabulary of `dimension`.
    pub fn parse(dimension: Dimension, name: &str) -> AtlasResult<Self> {
        Ok(match dimension {
            Dimension::Temporal => Self::Temporal(TemporalKind::parse(name)?),
            Dimension::Structural => Self::Structural(StructuralKind::parse(name)?),
            Dimension::Paradigm => Self::Paradigm(ParadigmKind::parse(name)?),
            Dimension::System => Self::System(SystemKind::parse(name)?),
            Dimension::UseCase => Self::UseCase(UseCaseKind::parse(name)?),
            Dimension::Experience => Self::Experience(ExperienceKind::parse(name)?),
        })
    }

    pub fn dimension(&self) -> Dimension {
        match self {
            Self::Temporal(_) => Dimension::Temporal,
            Self::Structural(_) => Dimension::Structural,
            Self::Paradigm(_) => Dimension::Paradigm,
            Self::System(_) => Dimension::System,
            Self::UseCase(_) => Dimension::UseCase,
            Self::Experience(_) => Dimension::Experience,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Temporal(k) => k.name(),
            Self::Structural(k) => k.name(),
            Self::Paradigm(k) => k.name(),
            Self::System(k) => k.name(),
            Self::UseCase(k) => k.name(),
            Self::Experience(k) => k.name(),
        }
    }

    pub fn reverse(&self) -> Self {
        match self {
            Self::Temporal(k) => Self::Temporal(k.reverse()),
            Self::Structural(k) => Self::Structural(k.reverse()),
            Self::Paradigm(k) => Self::Paradigm(k.reverse()),
            Self::System(k) => Self::System(k.reverse()),
            Self::UseCase(k) => Self::UseCase(k.reverse()),
            Self::Experience(k) => Self::Experience(k.reverse()),
        }
    }

    pub fn is_directional(&self) -> bool {
        self.reverse() != *self
    }
}

impl std::fmt::Display for DimensionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.dimension(), self.name())
    }
}

impl From<TemporalKind> for DimensionKind {
    fn from(kind: TemporalKind) -> Self {
        Self::Temporal(kind)
    }
}

impl From<StructuralKind> for DimensionKind {
    fn from(kind: StructuralKind) -> Self {
        Self::Structural(kind)
    }
}

impl From<ParadigmKind> for DimensionKind {
    fn from(kind: ParadigmKind) -> Self {
        Self::Paradigm(kind)
    }
}

impl From<SystemKind> for DimensionKind {
    fn from(kind: SystemKind) -> Self {
        Self::System(kind)
    }
}

impl From<UseCaseKind> for DimensionKind {
    fn from(kind: UseCaseKind) -> Self {
        Self::UseCase(kind)
    }
}

impl From<ExperienceKind> for DimensionKind {
    fn from(kind: ExperienceKind) -> Self {
        Self::Experience(kind)
    }
}
