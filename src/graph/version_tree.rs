//! Version trees: each object owns one or more trees of versions.

use std::collections::HashSet;

use super::viewer::ViewerDataBundle;
use crate::types::{AtlasError, AtlasResult, TechObjectId, VersionNumber};

/// One node of a version tree, with its own viewer data.
#[derive(Debug, Clone, PartialEq)]
pub struct TechVersion {
    pub id: TechObjectId,
    pub version: VersionNumber,
    pub children: Vec<TechVersion>,
    pub viewer_data: ViewerDataBundle,
}

impl TechVersion {
    /// A leaf version with empty viewer data.
    pub fn new(id: TechObjectId, version: VersionNumber) -> Self {
        Self {
            id,
            version,
            children: Vec::new(),
            viewer_data: ViewerDataBundle::new(),
        }
    }

    /// Append a child version.
    pub fn with_child(mut self, child: TechVersion) -> Self {
        self.children.push(child);
        self
    }

    /// Replace this version's viewer data.
    pub fn with_viewer_data(mut self, viewer_data: ViewerDataBundle) -> Self {
        self.viewer_data = viewer_data;
        self
    }

    /// All versions in this subtree, depth-first pre-order.
    pub fn walk(&self) -> Vec<&TechVersion> {
        let mut order = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            order.push(node);
            // Reverse so the first child is visited first.
            stack.extend(node.children.iter().rev());
        }
        order
    }

    /// Number of versions in this subtree, including this one.
    pub fn len(&self) -> usize {
        1 + self.children.iter().map(TechVersion::len).sum::<usize>()
    }

    /// Always false: a version tree holds at least its root.
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Depth-first search across all roots (in order) for the first version
/// whose canonical string equals `canonical`.
pub fn find_version<'a>(roots: &'a [TechVersion], canonical: &str) -> Option<&'a TechVersion> {
    roots
        .iter()
        .flat_map(TechVersion::walk)
        .find(|v| v.version.to_string() == canonical)
}

/// Reject trees that repeat a version string anywhere across an object's
/// roots. This also rules out a child equal to its parent.
pub fn validate_versions(object_id: &TechObjectId, roots: &[TechVersion]) -> AtlasResult<()> {
    let mut seen: HashSet<String> = HashSet::new();
    for version in roots.iter().flat_map(TechVersion::walk) {
        let canonical = version.version.to_string();
        if !seen.insert(canonical.clone()) {
            return Err(AtlasError::InvalidVersionTree {
                object_id: object_id.to_string(),
                version: canonical,
            });
        }
    }
    Ok(())
}
