//! Single filter criteria over a tech object's name, level or relationships.

use serde::{Deserialize, Serialize};

use crate::graph::TechObject;
use crate::types::{AtlasError, AtlasResult, Dimension, TechObjectId};
use crate::vocab::DimensionKind;

/// Case-sensitive string comparison against the object's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StringOperator {
    Equals,
    Contains,
    StartsWith,
}

impl StringOperator {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Equals => "equals",
            Self::Contains => "contains",
            Self::StartsWith => "startsWith",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "equals" | "eq" => Some(Self::Equals),
            "contains" => Some(Self::Contains),
            "startswith" | "starts_with" => Some(Self::StartsWith),
            _ => None,
        }
    }

    fn apply(&self, subject: &str, value: &str) -> bool {
        match self {
            Self::Equals => subject == value,
            Self::Contains => subject.contains(value),
            Self::StartsWith => subject.starts_with(value),
        }
    }
}

/// Numeric comparison against the object's level rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NumericOperator {
    Equals,
    GreaterThan,
    LessThan,
}

impl NumericOperator {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Equals => "equals",
            Self::GreaterThan => "greaterThan",
            Self::LessThan => "lessThan",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "equals" | "eq" => Some(Self::Equals),
            "greaterthan" | "greater_than" | "gt" => Some(Self::GreaterThan),
            "lessthan" | "less_than" | "lt" => Some(Self::LessThan),
            _ => None,
        }
    }

    fn apply(&self, subject: u8, value: u8) -> bool {
        match self {
            Self::Equals => subject == value,
            Self::GreaterThan => subject > value,
            Self::LessThan => subject < value,
        }
    }
}

/// One condition a tech object may satisfy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterCriterion {
    /// Compare the object's name.
    Name {
        operator: StringOperator,
        value: String,
    },
    /// Compare the object's level rank.
    Level { operator: NumericOperator, value: u8 },
    /// The object declares an active outgoing relationship of `kind`
    /// targeting `object_id`, in `kind`'s dimension.
    HasRelationship {
        kind: DimensionKind,
        object_id: TechObjectId,
    },
}

impl FilterCriterion {
    pub fn name(operator: StringOperator, value: impl Into<String>) -> Self {
        Self::Name {
            operator,
            value: value.into(),
        }
    }

    pub fn level(operator: NumericOperator, value: u8) -> Self {
        Self::Level { operator, value }
    }

    pub fn has_relationship(kind: impl Into<DimensionKind>, object_id: TechObjectId) -> Self {
        Self::HasRelationship {
            kind: kind.into(),
            object_id,
        }
    }

    /// Evaluate this criterion against one object.
    pub fn matches(&self, object: &TechObject) -> bool {
        match self {
            Self::Name { operator, value } => operator.apply(object.name(), value),
            Self::Level { operator, value } => operator.apply(object.level().rank(), *value),
            Self::HasRelationship { kind, object_id } => {
                object.viewer_data().has_active_relationship(kind, object_id)
            }
        }
    }
}

impl std::fmt::Display for FilterCriterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name { operator, value } => write!(f, "name {} {:?}", operator.name(), value),
            Self::Level { operator, value } => write!(f, "level {} {}", operator.name(), value),
            Self::HasRelationship { kind, object_id } => {
                write!(f, "{} has_relationship {} -> {}", kind.dimension(), kind.name(), object_id)
            }
        }
    }
}

/// A criterion as flat data: `{field, operator, value}`.
///
/// `field` is `name`, `level`, or a dimension name; for dimensions the
/// operator is `has_relationship` and the value is `{kind, objectId}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionSpec {
    pub field: String,
    pub operator: String,
    pub value: serde_json::Value,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RelationshipValue {
    kind: String,
    object_id: String,
}

impl TryFrom<CriterionSpec> for FilterCriterion {
    type Error = AtlasError;

    fn try_from(spec: CriterionSpec) -> AtlasResult<Self> {
        let unknown_operator = || {
            AtlasError::InvalidCriterion(format!(
                "operator '{}' is not valid for field '{}'",
                spec.operator, spec.field
            ))
        };

        match spec.field.as_str() {
            "name" => {
                let operator = StringOperator::from_name(&spec.operator).ok_or_else(unknown_operator)?;
                let value = spec.value.as_str().ok_or_else(|| {
                    AtlasError::InvalidCriterion("name criterion needs a string value".into())
                })?;
                Ok(Self::name(operator, value))
            }
            "level" => {
                let operator =
                    NumericOperator::from_name(&spec.operator).ok_or_else(unknown_operator)?;
                let value = spec
                    .value
                    .as_u64()
                    .and_then(|v| u8::try_from(v).ok())
                    .ok_or_else(|| {
                        AtlasError::InvalidCriterion("level criterion needs a small integer".into())
                    })?;
                Ok(Self::level(operator, value))
            }
            field => {
                let dimension = Dimension::from_name(field).ok_or_else(|| {
                    AtlasError::InvalidCriterion(format!("unknown field '{}'", field))
                })?;
                if spec.operator != "has_relationship" {
                    return Err(unknown_operator());
                }
                let value: RelationshipValue =
                    serde_json::from_value(spec.value.clone()).map_err(|e| {
                        AtlasError::InvalidCriterion(format!(
                            "relationship criterion needs {{kind, objectId}}: {}",
                            e
                        ))
                    })?;
                let kind = DimensionKind::parse(dimension, &value.kind)?;
                Ok(Self::has_relationship(kind, TechObjectId::new(value.object_id)?))
            }
        }
    }
}
