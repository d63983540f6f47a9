//! Tech Atlas: multi-dimensional navigation over a catalog of technologies.
//!
//! Tech objects (languages, libraries, frameworks, applications, platforms)
//! sit on five abstraction levels and carry typed relationships in six
//! dimensions. The navigation engine moves up, down and across version trees,
//! filtering candidates by the relationships they declare.

pub mod cli;
pub mod config;
pub mod dto;
pub mod filter;
pub mod graph;
pub mod navigation;
pub mod repository;
pub mod types;
pub mod vocab;

// Re-export commonly used types at the crate root
pub use config::{AtlasConfig, CatalogConfig, NavigationConfig, SessionConfig};
pub use dto::{parse_catalog, TechObjectDto};
pub use filter::{CriterionSpec, FilterCriterion, FilterLogic, TechObjectFilter};
pub use graph::{RelationshipRecord, TechObject, TechObjectBuilder, TechVersion, ViewerDataBundle};
pub use navigation::{
    NavigationCommand, NavigationEngine, NavigationOutcome, NavigationPath, NavigationSession,
    NavigationState, RelationshipFilter,
};
pub use repository::{InMemoryRepository, TechObjectRepository};
pub use types::{
    now_micros, AbstractionLevel, AtlasError, AtlasResult, Dimension, TechObjectId, VersionNumber,
};
pub use vocab::{
    DimensionKind, ExperienceKind, ParadigmKind, RelationKind, StructuralKind, SystemKind,
    TemporalKind, UseCaseKind,
};
