//! In-memory repository: insertion order is repository order.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::TechObjectRepository;
use crate::dto::TechObjectDto;
use crate::graph::TechObject;
use crate::types::{AtlasResult, TechObjectId};

/// Objects in repository order plus the position of each id.
#[derive(Default)]
struct Store {
    objects: Vec<TechObject>,
    positions: HashMap<TechObjectId, usize>,
}

impl Store {
    fn get(&self, id: &TechObjectId) -> Option<&TechObject> {
        self.positions.get(id).map(|&i| &self.objects[i])
    }

    /// Replace in place when the id is known, otherwise append.
    fn upsert(&mut self, object: TechObject) {
        match self.positions.get(object.id()) {
            Some(&i) => self.objects[i] = object,
            None => {
                self.positions.insert(object.id().clone(), self.objects.len());
                self.objects.push(object);
            }
        }
    }

    fn remove(&mut self, id: &TechObjectId) {
        if let Some(i) = self.positions.remove(id) {
            self.objects.remove(i);
            for position in self.positions.values_mut() {
                if *position > i {
                    *position -= 1;
                }
            }
        }
    }
}

/// Repository backed by an ordered list behind an async lock.
///
/// Constructed and owned explicitly; share it with `Arc` when several
/// engines or sessions need the same catalog.
pub struct InMemoryRepository {
    store: RwLock<Store>,
}

impl InMemoryRepository {
    /// Create a new, empty repository.
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store::default()),
        }
    }

    /// Create from pre-built objects. Later duplicates of an id replace
    /// earlier ones in place.
    pub fn from_objects(objects: Vec<TechObject>) -> Self {
        let mut store = Store {
            objects: Vec::with_capacity(objects.len()),
            positions: HashMap::with_capacity(objects.len()),
        };
        for object in objects {
            store.upsert(object);
        }
        Self {
            store: RwLock::new(store),
        }
    }

    /// Create from flat DTOs, validating every object.
    pub fn from_dtos(dtos: Vec<TechObjectDto>) -> AtlasResult<Self> {
        let objects = dtos
            .into_iter()
            .map(TechObject::try_from)
            .collect::<AtlasResult<Vec<_>>>()?;
        log::debug!("Loaded {} tech objects into memory", objects.len());
        Ok(Self::from_objects(objects))
    }

    /// Number of stored objects.
    pub async fn len(&self) -> usize {
        self.store.read().await.objects.len()
    }

    /// Whether the repository holds no objects.
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.objects.is_empty()
    }
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TechObjectRepository for InMemoryRepository {
    async fn find_by_id(&self, id: &TechObjectId) -> AtlasResult<Option<TechObject>> {
        Ok(self.store.read().await.get(id).cloned())
    }

    async fn find_by_ids(&self, ids: &[TechObjectId]) -> AtlasResult<Vec<TechObject>> {
        let wanted: HashSet<&TechObjectId> = ids.iter().collect();
        let store = self.store.read().await;
        Ok(store
            .objects
            .iter()
            .filter(|o| wanted.contains(o.id()))
            .cloned()
            .collect())
    }

    async fn find_all(&self) -> AtlasResult<Vec<TechObject>> {
        Ok(self.store.read().await.objects.clone())
    }

    async fn save(&self, object: TechObject) -> AtlasResult<TechObject> {
        self.store.write().await.upsert(object.clone());
        Ok(object)
    }

    async fn delete(&self, id: &TechObjectId) -> AtlasResult<()> {
        self.store.write().await.remove(id);
        Ok(())
    }
}
