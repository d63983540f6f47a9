//! Validated tech object identifiers.

use serde::{Deserialize, Serialize};

use super::MAX_ID_LEN;
use crate::types::error::{AtlasError, AtlasResult};

/// Opaque identifier of a tech object (or of one node in a version tree).
///
/// Non-empty, at most [`MAX_ID_LEN`] characters, ASCII alphanumerics plus
/// `-`, `_` and `.`. Compared by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TechObjectId(String);

impl TechObjectId {
    /// Validate and wrap an identifier.
    pub fn new(value: impl Into<String>) -> AtlasResult<Self> {
        let value = value.into();
        if value.is_empty()
            || value.len() > MAX_ID_LEN
            || !value
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        {
            return Err(AtlasError::InvalidId(value));
        }
        Ok(Self(value))
    }

    /// The identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TechObjectId {
    type Error = AtlasError;

    fn try_from(value: String) -> AtlasResult<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for TechObjectId {
    type Error = AtlasError;

    fn try_from(value: &str) -> AtlasResult<Self> {
        Self::new(value)
    }
}

impl From<TechObjectId> for String {
    fn from(id: TechObjectId) -> Self {
        id.0
    }
}

impl AsRef<str> for TechObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TechObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
