//! Tech objects and their builder.

use super::version_tree::{find_version, validate_versions, TechVersion};
use super::viewer::ViewerDataBundle;
use crate::types::{AbstractionLevel, AtlasResult, TechObjectId, VersionNumber};
use crate::vocab::DimensionKind;

/// A cataloged language, library, framework, application or platform.
///
/// Read-only once built: navigation derives views of an object but never
/// mutates it.
#[derive(Debug, Clone, PartialEq)]
pub struct TechObject {
    id: TechObjectId,
    name: String,
    level: AbstractionLevel,
    versions: Vec<TechVersion>,
    viewer_data: ViewerDataBundle,
}

impl TechObject {
    /// Assemble an object from validated parts. Fails if the version trees
    /// repeat a version.
    pub fn from_parts(
        id: TechObjectId,
        name: impl Into<String>,
        level: AbstractionLevel,
        versions: Vec<TechVersion>,
        viewer_data: ViewerDataBundle,
    ) -> AtlasResult<Self> {
        validate_versions(&id, &versions)?;
        Ok(Self {
            id,
            name: name.into(),
            level,
            versions,
            viewer_data,
        })
    }

    pub fn id(&self) -> &TechObjectId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> AbstractionLevel {
        self.level
    }

    /// Roots of the object's version trees.
    pub fn versions(&self) -> &[TechVersion] {
        &self.versions
    }

    /// Object-wide viewer data.
    pub fn viewer_data(&self) -> &ViewerDataBundle {
        &self.viewer_data
    }

    /// Find a version by its string form across all version trees.
    ///
    /// The target is parsed first, so a malformed string fails with
    /// `InvalidVersionString`; a well-formed one with no match yields `None`.
    pub fn find_version(&self, target: &str) -> AtlasResult<Option<&TechVersion>> {
        let canonical = VersionNumber::parse(target)?.to_string();
        Ok(find_version(&self.versions, &canonical))
    }

    /// The highest version across all trees.
    pub fn latest_version(&self) -> Option<&TechVersion> {
        self.versions
            .iter()
            .flat_map(TechVersion::walk)
            .max_by(|a, b| a.version.cmp(&b.version))
    }

    /// Total number of versions across all trees.
    pub fn version_count(&self) -> usize {
        self.versions.iter().map(TechVersion::len).sum()
    }

    /// A view of this object seen at `version`: same identity, name, level
    /// and version trees, with the version's own viewer data.
    pub fn at_version(&self, version: &TechVersion) -> TechObject {
        TechObject {
            viewer_data: version.viewer_data.clone(),
            ..self.clone()
        }
    }
}

/// Builder for constructing TechObject instances ergonomically.
pub struct TechObjectBuilder {
    id: String,
    name: String,
    level: AbstractionLevel,
    versions: Vec<TechVersion>,
    viewer_data: ViewerDataBundle,
    relations: Vec<(DimensionKind, String, bool)>,
}

impl TechObjectBuilder {
    /// Create a new builder with the required fields.
    pub fn new(id: impl Into<String>, name: impl Into<String>, level: AbstractionLevel) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            level,
            versions: Vec::new(),
            viewer_data: ViewerDataBundle::new(),
            relations: Vec::new(),
        }
    }

    /// Add a version tree root.
    pub fn version(mut self, version: TechVersion) -> Self {
        self.versions.push(version);
        self
    }

    /// Replace the object-wide viewer data. Relationships added with
    /// [`relate`](Self::relate) are appended on top at build time.
    pub fn viewer_data(mut self, viewer_data: ViewerDataBundle) -> Self {
        self.viewer_data = viewer_data;
        self
    }

    /// Declare an active outgoing relationship to `target`.
    pub fn relate(mut self, kind: impl Into<DimensionKind>, target: impl Into<String>) -> Self {
        self.relations.push((kind.into(), target.into(), true));
        self
    }

    /// Declare a retired relationship, kept for audit only.
    pub fn relate_inactive(
        mut self,
        kind: impl Into<DimensionKind>,
        target: impl Into<String>,
    ) -> Self {
        self.relations.push((kind.into(), target.into(), false));
        self
    }

    /// Build the TechObject, validating the id, every relationship target
    /// and the version trees.
    pub fn build(self) -> AtlasResult<TechObject> {
        let id = TechObjectId::new(self.id)?;
        let mut viewer_data = self.viewer_data;
        for (kind, target, is_active) in self.relations {
            viewer_data.add_relationship(id.clone(), kind, TechObjectId::new(target)?, is_active);
        }
        TechObject::from_parts(id, self.name, self.level, self.versions, viewer_data)
    }
}
