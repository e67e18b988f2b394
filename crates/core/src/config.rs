//! Build options.
//!
//! Options are normally read from a TOML file and every key is optional.
//! By default unknown time units are read as days and a role and an
//! individual may not share a name.
//!
//! # Example
//!
//! ```toml
//! [participants]
//! collision = "last-write-wins"
//!
//! [deadlines]
//! unknown_unit = "reject"
//! ```

use serde::Deserialize;

use crate::error::BuildError;

/// Top-level build options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BuildOptions {
    pub participants: ParticipantOptions,
    pub deadlines: DeadlineOptions,
}

/// `[participants]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParticipantOptions {
    pub collision: CollisionPolicy,
}

/// `[deadlines]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DeadlineOptions {
    pub unknown_unit: UnknownUnitPolicy,
}

/// What to do when a role and an individual share a name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CollisionPolicy {
    /// Fail with [`BuildError::ParticipantCollision`].
    #[default]
    Reject,
    /// The section processed last wins; a warning is recorded.
    LastWriteWins,
}

/// What to do with a deadline whose time unit is not recognized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnknownUnitPolicy {
    /// Read the amount as days and record a warning.
    #[default]
    Warn,
    /// Fail with [`BuildError::UnsupportedTimeUnit`].
    Reject,
}

impl BuildOptions {
    pub fn from_toml_str(content: &str) -> Result<Self, BuildError> {
        toml::from_str(content)
            .map_err(|e| BuildError::Load(format!("could not parse build options: {}", e)))
    }
}
