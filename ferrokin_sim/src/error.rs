// ferrokin_sim/src/error.rs

use std::path::PathBuf;

use ferrokin_core::error::KinematicsError;
use thiserror::Error;

/// Errors raised while loading and running scenarios.
#[derive(Debug, Error)]
pub enum SimError {
    /// The scenario file could not be read or does not match the expected layout.
    #[error("failed to load scenario: {0}")]
    Config(#[from] Box<figment::Error>),

    /// Walking a scenario directory failed.
    #[error("failed to scan scenario directory: {0}")]
    Scan(#[from] walkdir::Error),

    /// A scenario directory without any `.toml` file.
    #[error("no scenario files found under {0:?}")]
    NoScenarios(PathBuf),

    /// The model described by a scenario is invalid, or a kinematic query failed.
    #[error(transparent)]
    Kinematics(#[from] KinematicsError),

    /// A sampling standard deviation that is negative or not finite.
    #[error("invalid sampling distribution for {what}: {reason}")]
    Sampling { what: &'static str, reason: String },

    #[error("failed to write report to {path:?}: {source}")]
    Report {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize report: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl From<figment::Error> for SimError {
    fn from(e: figment::Error) -> Self {
        SimError::Config(Box::new(e))
    }
}
