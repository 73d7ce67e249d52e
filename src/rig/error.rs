//! Rig error type
//!
//! The rig has no recoverable runtime errors. Everything here is a broken
//! precondition (no target to follow) or a bad settings file.

use std::path::PathBuf;

use bevy::prelude::Entity;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RigError {
    /// The rig was started without a target to follow.
    #[error("camera rig has no target assigned; cannot capture the initial offset")]
    MissingTarget,

    /// The camera entity was started without a target to follow.
    #[error("camera rig on {0} has no target assigned; cannot capture the initial offset")]
    MissingTargetEntity(Entity),

    /// The target entity does not exist or has no transform.
    #[error("camera rig target {0} has no transform")]
    TargetNotFound(Entity),

    /// Offset-dependent work was requested before the offset was captured.
    #[error("camera rig has not captured its offset yet")]
    NotInitialized,

    #[error("failed to read rig settings from {path}: {source}")]
    SettingsIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid rig settings: {0}")]
    SettingsFormat(#[from] serde_json::Error),
}
