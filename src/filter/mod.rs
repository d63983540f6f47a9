//! Filter engine: composable criteria over loaded tech objects.

pub mod criterion;
pub mod object_filter;

pub use criterion::{CriterionSpec, FilterCriterion, NumericOperator, StringOperator};
pub use object_filter::{FilterLogic, TechObjectFilter};
