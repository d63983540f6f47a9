//! Core value types for the Tech Atlas library.

pub mod dimension;
pub mod error;
pub mod id;
pub mod level;
pub mod version;

pub use dimension::Dimension;
pub use error::{AtlasError, AtlasResult};
pub use id::TechObjectId;
pub use level::AbstractionLevel;
pub use version::VersionNumber;

/// Maximum length of a tech object id.
pub const MAX_ID_LEN: usize = 128;

/// Returns the current time as Unix epoch microseconds.
pub fn now_micros() -> u64 {
    chrono::Utc::now().timestamp_micros() as u64
}
