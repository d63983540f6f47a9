//! Graph model: tech objects, version trees and per-dimension viewer data.

pub mod object;
pub mod relationship;
pub mod version_tree;
pub mod viewer;

pub use object::{TechObject, TechObjectBuilder};
pub use relationship::RelationshipRecord;
pub use version_tree::{find_version, validate_versions, TechVersion};
pub use viewer::{
    ExperienceFacts, ExperienceViewer, ParadigmFacts, ParadigmViewer, StructuralFacts,
    StructuralViewer, SystemFacts, SystemViewer, TemporalFacts, TemporalViewer, UseCaseFacts,
    UseCaseViewer, ViewerDataBundle, ViewerSlot,
};
