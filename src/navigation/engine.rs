//! Abstraction navigation engine: up, down and across version trees.

use std::sync::Arc;

use super::command::{
    NavigationCommand, NavigationOutcome, RelationshipFilter, VersionedObject,
};
use crate::config::NavigationConfig;
use crate::filter::{FilterLogic, TechObjectFilter};
use crate::graph::TechObject;
use crate::repository::TechObjectRepository;
use crate::types::{AbstractionLevel, AtlasError, AtlasResult, TechObjectId, VersionNumber};
use crate::vocab;

/// Stateless navigation over a repository. All level checks happen before
/// the repository is consulted wherever the levels involved are known.
#[derive(Clone)]
pub struct NavigationEngine {
    repository: Arc<dyn TechObjectRepository>,
    default_logic: FilterLogic,
}

impl NavigationEngine {
    /// Create an engine with default settings.
    pub fn new(repository: Arc<dyn TechObjectRepository>) -> AtlasResult<Self> {
        Self::with_config(repository, &NavigationConfig::default())
    }

    /// Create an engine. The relationship vocabularies are always verified
    /// first: `reverse` trusts the tables to cover every kind.
    pub fn with_config(
        repository: Arc<dyn TechObjectRepository>,
        config: &NavigationConfig,
    ) -> AtlasResult<Self> {
        vocab::verify_all()?;
        Ok(Self {
            repository,
            default_logic: config.default_logic,
        })
    }

    pub fn repository(&self) -> &Arc<dyn TechObjectRepository> {
        &self.repository
    }

    pub fn default_logic(&self) -> FilterLogic {
        self.default_logic
    }

    /// Reject a level change between non-adjacent levels.
    pub fn ensure_transition(from: AbstractionLevel, to: AbstractionLevel) -> AtlasResult<()> {
        if from.can_abstract_to(to) {
            Ok(())
        } else {
            log::warn!("Rejected navigation from {} to {}", from, to);
            Err(AtlasError::InvalidTransition { from, to })
        }
    }

    /// Point lookup that fails with `NotFound`.
    pub async fn fetch(&self, id: &TechObjectId) -> AtlasResult<TechObject> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AtlasError::NotFound(id.to_string()))
    }

    /// Objects one level above `current` that satisfy the relationship
    /// filters toward `current`, combined by `logic`, in repository order.
    ///
    /// An empty result is a normal outcome. With no filters, AND keeps every
    /// candidate and OR keeps none.
    pub async fn abstract_up(
        &self,
        current: &TechObject,
        filters: &[RelationshipFilter],
        logic: FilterLogic,
    ) -> AtlasResult<Vec<TechObject>> {
        let target_level = current
            .level()
            .higher()
            .ok_or_else(|| AtlasError::NoHigherLevel {
                object_id: current.id().to_string(),
                level: current.level(),
            })?;
        Self::ensure_transition(current.level(), target_level)?;

        let filter = TechObjectFilter::new(
            filters
                .iter()
                .map(|f| f.to_criterion(current.id()))
                .collect(),
            logic,
        );

        let candidates: Vec<TechObject> = self
            .repository
            .find_all()
            .await?
            .into_iter()
            .filter(|o| o.level() == target_level)
            .collect();
        let candidate_count = candidates.len();
        let matched = filter.retain(candidates);

        log::debug!(
            "abstract_up from '{}' to {}: {} of {} candidates matched {} filter(s) ({})",
            current.id(),
            target_level,
            matched.len(),
            candidate_count,
            filters.len(),
            logic
        );
        Ok(matched)
    }

    /// The object `target_id`, which must sit exactly one level below `current`.
    ///
    /// `NoLowerLevel` is raised before any lookup. The target's level is only
    /// known after the lookup, so a non-adjacent target fails afterwards with
    /// `InvalidTransition`.
    pub async fn abstract_down(
        &self,
        current: &TechObject,
        target_id: &TechObjectId,
    ) -> AtlasResult<TechObject> {
        let expected = current
            .level()
            .lower()
            .ok_or_else(|| AtlasError::NoLowerLevel {
                object_id: current.id().to_string(),
                level: current.level(),
            })?;

        let target = self.fetch(target_id).await?;
        if target.level() != expected {
            log::warn!(
                "Rejected abstract_down from '{}' ({}) to '{}' ({})",
                current.id(),
                current.level(),
                target.id(),
                target.level()
            );
            return Err(AtlasError::InvalidTransition {
                from: current.level(),
                to: target.level(),
            });
        }

        log::debug!("abstract_down from '{}' to '{}'", current.id(), target.id());
        Ok(target)
    }

    /// The object `current_id` seen at `target_version`.
    pub async fn navigate_horizontal(
        &self,
        current_id: &TechObjectId,
        target_version: &str,
    ) -> AtlasResult<VersionedObject> {
        let version = VersionNumber::parse(target_version)?;
        let canonical = version.to_string();
        let object = self.fetch(current_id).await?;

        let matched = object
            .find_version(&canonical)?
            .ok_or_else(|| AtlasError::VersionNotFound {
                object_id: current_id.to_string(),
                version: canonical.clone(),
            })?;

        log::debug!("navigate_horizontal on '{}' to {}", current_id, canonical);
        Ok(VersionedObject {
            object: object.at_version(matched),
            version,
        })
    }

    /// Run a flat command.
    pub async fn execute(&self, command: &NavigationCommand) -> AtlasResult<NavigationOutcome> {
        match command {
            NavigationCommand::AbstractUp(cmd) => {
                let filters = cmd.relationship_filters()?;
                let current = self
                    .fetch(&TechObjectId::new(cmd.current_tech_object_id.as_str())?)
                    .await?;
                let logic = cmd.combination_logic.unwrap_or(self.default_logic);
                let objects = self.abstract_up(&current, &filters, logic).await?;
                let level = current
                    .level()
                    .higher()
                    .ok_or(AtlasError::InvalidLevel(current.level().rank() as i64 + 1))?;
                Ok(NavigationOutcome::Level { level, objects })
            }
            NavigationCommand::AbstractDown(cmd) => {
                let current = self
                    .fetch(&TechObjectId::new(cmd.current_tech_object_id.as_str())?)
                    .await?;
                let target_id = TechObjectId::new(cmd.target_tech_object_id.as_str())?;
                Ok(NavigationOutcome::Object(
                    self.abstract_down(&current, &target_id).await?,
                ))
            }
            NavigationCommand::NavigateHorizontal(cmd) => {
                let current_id = TechObjectId::new(cmd.current_tech_object_id.as_str())?;
                Ok(NavigationOutcome::Version(
                    self.navigate_horizontal(&current_id, &cmd.target_version)
                        .await?,
                ))
            }
        }
    }
}
