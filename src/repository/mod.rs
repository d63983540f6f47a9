//! Repository port through which the engine loads tech objects.
//!
//! Storage adapters (database, files, remote services) implement
//! [`TechObjectRepository`]; the navigation core depends only on the trait.

pub mod memory;

use async_trait::async_trait;

use crate::graph::TechObject;
use crate::types::{AtlasResult, TechObjectId};

pub use memory::InMemoryRepository;

/// Storage operations consumed by the navigation engine.
///
/// Calls are independent: two concurrent reads need not observe the same
/// snapshot. Implementations report their own I/O failures as
/// `AtlasError::Repository`, which the engine passes through unchanged.
#[async_trait]
pub trait TechObjectRepository: Send + Sync {
    /// Point lookup. `Ok(None)` when the id is absent.
    async fn find_by_id(&self, id: &TechObjectId) -> AtlasResult<Option<TechObject>>;

    /// Objects for the given ids, in repository order. Missing ids are skipped.
    async fn find_by_ids(&self, ids: &[TechObjectId]) -> AtlasResult<Vec<TechObject>>;

    /// Every object, in repository order.
    async fn find_all(&self) -> AtlasResult<Vec<TechObject>>;

    /// Insert or replace an object; returns what was stored.
    async fn save(&self, object: TechObject) -> AtlasResult<TechObject>;

    /// Remove an object. Removing an absent id is not an error.
    async fn delete(&self, id: &TechObjectId) -> AtlasResult<()>;
}
