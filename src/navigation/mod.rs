//! Abstraction navigation: commands, the stateless engine, breadcrumb paths
//! and per-user sessions.

pub mod command;
pub mod engine;
pub mod path;
pub mod session;

pub use command::{
    AbstractDown, AbstractUp, NavigateHorizontal, NavigationCommand, NavigationOutcome,
    RelationshipFilter, RelationshipFilterSpec, VersionedObject,
};
pub use engine::NavigationEngine;
pub use path::{NavigationNode, NavigationPath};
pub use session::{NavigationSession, NavigationState};
