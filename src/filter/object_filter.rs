//! Flat AND/OR filters over tech objects.

use serde::{Deserialize, Serialize};

use super::criterion::FilterCriterion;
use crate::graph::TechObject;

/// How the criteria of a filter are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FilterLogic {
    /// Every criterion must match. No criteria matches everything.
    #[default]
    #[serde(alias = "and")]
    And,
    /// At least one criterion must match. No criteria matches nothing.
    #[serde(alias = "or")]
    Or,
}

impl FilterLogic {
    pub fn name(&self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "and" | "all" => Some(Self::And),
            "or" | "any" => Some(Self::Or),
            _ => None,
        }
    }

    /// Combine per-item outcomes. Short-circuits like `all`/`any`.
    pub fn combine<I: IntoIterator<Item = bool>>(&self, outcomes: I) -> bool {
        let mut outcomes = outcomes.into_iter();
        match self {
            Self::And => outcomes.all(|m| m),
            Self::Or => outcomes.any(|m| m),
        }
    }
}

impl std::fmt::Display for FilterLogic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// An immutable list of criteria joined by a single combinator.
///
/// Merging with [`and`](Self::and) or [`or`](Self::or) concatenates the
/// criteria and replaces the combinator for the whole merged list; it does
/// not nest groups. `a.and(b).or(c)` is one flat OR over all criteria.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TechObjectFilter {
    criteria: Vec<FilterCriterion>,
    logic: FilterLogic,
}

impl TechObjectFilter {
    pub fn new(criteria: Vec<FilterCriterion>, logic: FilterLogic) -> Self {
        Self { criteria, logic }
    }

    /// AND over `criteria`.
    pub fn all(criteria: Vec<FilterCriterion>) -> Self {
        Self::new(criteria, FilterLogic::And)
    }

    /// OR over `criteria`.
    pub fn any(criteria: Vec<FilterCriterion>) -> Self {
        Self::new(criteria, FilterLogic::Or)
    }

    pub fn criteria(&self) -> &[FilterCriterion] {
        &self.criteria
    }

    pub fn logic(&self) -> FilterLogic {
        self.logic
    }

    /// Both filters' criteria, joined by AND.
    pub fn and(&self, other: &TechObjectFilter) -> TechObjectFilter {
        self.merge(other, FilterLogic::And)
    }

    /// Both filters' criteria, joined by OR.
    pub fn or(&self, other: &TechObjectFilter) -> TechObjectFilter {
        self.merge(other, FilterLogic::Or)
    }

    fn merge(&self, other: &TechObjectFilter, logic: FilterLogic) -> TechObjectFilter {
        let mut criteria = Vec::with_capacity(self.criteria.len() + other.criteria.len());
        criteria.extend_from_slice(&self.criteria);
        criteria.extend_from_slice(&other.criteria);
        Self { criteria, logic }
    }

    /// Evaluate the filter against one object.
    pub fn matches(&self, object: &TechObject) -> bool {
        let matched = self
            .logic
            .combine(self.criteria.iter().map(|c| c.matches(object)));
        log::trace!(
            "filter {} over {} criteria on '{}': {}",
            self.logic,
            self.criteria.len(),
            object.id(),
            matched
        );
        matched
    }

    /// Matching objects, in input order.
    pub fn apply<'a>(&self, objects: &'a [TechObject]) -> Vec<&'a TechObject> {
        objects.iter().filter(|o| self.matches(o)).collect()
    }

    /// Keep the matching objects of an owned list, in input order.
    pub fn retain(&self, mut objects: Vec<TechObject>) -> Vec<TechObject> {
        objects.retain(|o| self.matches(o));
        objects
    }
}
