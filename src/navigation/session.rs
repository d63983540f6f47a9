//! Per-user navigation session: current focus, breadcrumb path and history.

use std::collections::VecDeque;
use std::sync::Arc;

use super::command::{NavigationCommand, NavigationOutcome, RelationshipFilter, VersionedObject};
use super::engine::NavigationEngine;
use super::path::NavigationPath;
use crate::config::SessionConfig;
use crate::filter::FilterLogic;
use crate::graph::TechObject;
use crate::types::{AbstractionLevel, AtlasError, AtlasResult, TechObjectId, VersionNumber};

/// Where the session's focus currently is.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum NavigationState {
    /// Nothing opened yet.
    #[default]
    Idle,
    /// A set of objects at one level, produced by abstracting up.
    AtLevel {
        level: AbstractionLevel,
        objects: Vec<TechObject>,
    },
    /// One object, optionally seen at a specific version.
    AtObject {
        object: TechObject,
        version: Option<VersionNumber>,
    },
}

impl NavigationState {
    /// The focused object, if the state has one.
    pub fn object(&self) -> Option<&TechObject> {
        match self {
            Self::AtObject { object, .. } => Some(object),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
struct Snapshot {
    state: NavigationState,
    path: NavigationPath,
}

/// Mutable wrapper around an engine for exactly one logical user.
///
/// Every successful transition pushes the previous state onto the back
/// stack and clears the forward stack. A failed transition leaves state,
/// path and history untouched.
pub struct NavigationSession {
    engine: Arc<NavigationEngine>,
    state: NavigationState,
    path: NavigationPath,
    back: VecDeque<Snapshot>,
    forward: Vec<Snapshot>,
    max_history: usize,
}

impl NavigationSession {
    /// Create an idle session.
    pub fn new(engine: Arc<NavigationEngine>, config: &SessionConfig) -> Self {
        Self {
            engine,
            state: NavigationState::Idle,
            path: NavigationPath::empty(),
            back: VecDeque::new(),
            forward: Vec::new(),
            max_history: config.max_history.max(1),
        }
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn path(&self) -> &NavigationPath {
        &self.path
    }

    pub fn current_object(&self) -> Option<&TechObject> {
        self.state.object()
    }

    pub fn current_version(&self) -> Option<&VersionNumber> {
        match &self.state {
            NavigationState::AtObject { version, .. } => version.as_ref(),
            _ => None,
        }
    }

    pub fn can_go_back(&self) -> bool {
        !self.back.is_empty()
    }

    pub fn can_go_forward(&self) -> bool {
        !self.forward.is_empty()
    }

    fn focused(&self) -> AtlasResult<&TechObject> {
        self.state.object().ok_or(AtlasError::NoCurrentObject)
    }

    fn transition(&mut self, state: NavigationState, path: NavigationPath) {
        let previous = Snapshot {
            state: std::mem::replace(&mut self.state, state),
            path: std::mem::replace(&mut self.path, path),
        };
        self.push_back(previous);
        self.forward.clear();
    }

    /// Oldest entries fall off once the back stack is full.
    fn push_back(&mut self, snapshot: Snapshot) {
        self.back.push_back(snapshot);
        while self.back.len() > self.max_history {
            self.back.pop_front();
        }
    }

    fn focus(
        &mut self,
        object: TechObject,
        version: Option<VersionNumber>,
    ) -> AtlasResult<&TechObject> {
        let path = self.path.add(&object);
        self.transition(NavigationState::AtObject { object, version }, path);
        self.focused()
    }

    /// Focus an object by id.
    pub async fn open(&mut self, id: &TechObjectId) -> AtlasResult<&TechObject> {
        let object = self.engine.fetch(id).await?;
        self.focus(object, None)
    }

    /// Abstract up from the focused object. `logic` defaults to the
    /// engine's combinator.
    pub async fn abstract_up(
        &mut self,
        filters: &[RelationshipFilter],
        logic: Option<FilterLogic>,
    ) -> AtlasResult<&[TechObject]> {
        let current = self.focused()?.clone();
        self.up_from(current, filters, logic).await
    }

    async fn up_from(
        &mut self,
        current: TechObject,
        filters: &[RelationshipFilter],
        logic: Option<FilterLogic>,
    ) -> AtlasResult<&[TechObject]> {
        let logic = logic.unwrap_or(self.engine.default_logic());
        let objects = self.engine.abstract_up(&current, filters, logic).await?;
        let level = current
            .level()
            .higher()
            .ok_or_else(|| AtlasError::NoHigherLevel {
                object_id: current.id().to_string(),
                level: current.level(),
            })?;
        let path = self.path.add(&current);
        self.transition(NavigationState::AtLevel { level, objects }, path);
        match &self.state {
            NavigationState::AtLevel { objects, .. } => Ok(objects.as_slice()),
            _ => Ok(&[]),
        }
    }

    /// Pick one object out of the current level result set.
    pub fn select(&mut self, id: &TechObjectId) -> AtlasResult<&TechObject> {
        let chosen = match &self.state {
            NavigationState::AtLevel { objects, .. } => {
                objects.iter().find(|o| o.id() == id).cloned()
            }
            _ => None,
        };
        let object = chosen.ok_or_else(|| AtlasError::NotFound(id.to_string()))?;
        self.focus(object, None)
    }

    /// Descend from the focused object to `target_id`.
    pub async fn abstract_down(&mut self, target_id: &TechObjectId) -> AtlasResult<&TechObject> {
        let current = self.focused()?.clone();
        self.down_from(current, target_id).await
    }

    async fn down_from(
        &mut self,
        current: TechObject,
        target_id: &TechObjectId,
    ) -> AtlasResult<&TechObject> {
        let target = self.engine.abstract_down(&current, target_id).await?;
        let path = self.path.add(&current).add(&target);
        self.transition(
            NavigationState::AtObject {
                object: target,
                version: None,
            },
            path,
        );
        self.focused()
    }

    /// View the focused object at another version.
    pub async fn navigate_horizontal(&mut self, target_version: &str) -> AtlasResult<&TechObject> {
        let current_id = self.focused()?.id().clone();
        self.across(&current_id, target_version).await
    }

    async fn across(
        &mut self,
        current_id: &TechObjectId,
        target_version: &str,
    ) -> AtlasResult<&TechObject> {
        let view = self
            .engine
            .navigate_horizontal(current_id, target_version)
            .await?;
        self.focus(view.object, Some(view.version))
    }

    /// Breadcrumb click: cut the path after `index` and refocus that node.
    pub async fn jump_to(&mut self, index: usize) -> AtlasResult<&TechObject> {
        let node = self
            .path
            .get(index)
            .ok_or(AtlasError::BreadcrumbOutOfRange {
                index,
                len: self.path.len(),
            })?;
        let object = self.engine.fetch(&node.id).await?;
        let path = self.path.slice(index);
        self.transition(
            NavigationState::AtObject {
                object,
                version: None,
            },
            path,
        );
        self.focused()
    }

    /// Undo the last transition.
    pub fn go_back(&mut self) -> AtlasResult<&NavigationState> {
        let snapshot = self.back.pop_back().ok_or(AtlasError::HistoryExhausted("back"))?;
        let current = Snapshot {
            state: std::mem::replace(&mut self.state, snapshot.state),
            path: std::mem::replace(&mut self.path, snapshot.path),
        };
        self.forward.push(current);
        Ok(&self.state)
    }

    /// Replay the last undone transition.
    pub fn go_forward(&mut self) -> AtlasResult<&NavigationState> {
        let snapshot = self
            .forward
            .pop()
            .ok_or(AtlasError::HistoryExhausted("forward"))?;
        let current = Snapshot {
            state: std::mem::replace(&mut self.state, snapshot.state),
            path: std::mem::replace(&mut self.path, snapshot.path),
        };
        self.push_back(current);
        Ok(&self.state)
    }

    /// Run a flat command. The command's current object is taken from the
    /// session when it is the focused one, otherwise fetched.
    pub async fn execute(&mut self, command: &NavigationCommand) -> AtlasResult<NavigationOutcome> {
        match command {
            NavigationCommand::AbstractUp(cmd) => {
                let filters = cmd.relationship_filters()?;
                let current = self.resolve_current(&cmd.current_tech_object_id).await?;
                let objects = self
                    .up_from(current, &filters, cmd.combination_logic)
                    .await?
                    .to_vec();
                let level = match &self.state {
                    NavigationState::AtLevel { level, .. } => *level,
                    _ => return Err(AtlasError::NoCurrentObject),
                };
                Ok(NavigationOutcome::Level { level, objects })
            }
            NavigationCommand::AbstractDown(cmd) => {
                let current = self.resolve_current(&cmd.current_tech_object_id).await?;
                let target_id = TechObjectId::new(cmd.target_tech_object_id.as_str())?;
                let target = self.down_from(current, &target_id).await?.clone();
                Ok(NavigationOutcome::Object(target))
            }
            NavigationCommand::NavigateHorizontal(cmd) => {
                let current_id = TechObjectId::new(cmd.current_tech_object_id.as_str())?;
                let object = self.across(&current_id, &cmd.target_version).await?.clone();
                let version = self
                    .current_version()
                    .cloned()
                    .ok_or(AtlasError::NoCurrentObject)?;
                Ok(NavigationOutcome::Version(VersionedObject {
                    object,
                    version,
                }))
            }
        }
    }

    async fn resolve_current(&self, id: &str) -> AtlasResult<TechObject> {
        let id = TechObjectId::new(id)?;
        match self.state.object() {
            Some(object) if object.id() == &id => Ok(object.clone()),
            _ => self.engine.fetch(&id).await,
        }
    }
}
