//! Error types for the HarvestFlow front-end.

use std::path::PathBuf;
use thiserror::Error;

/// Domain errors surfaced by routing, selection and analysis.
#[derive(Error, Debug)]
pub enum HarvestError {
    /// Navigation requested to an identifier outside the section set
    #[error("Unknown section '{0}' (expected one of: home, marketplace, logistics, weather, quality, dashboard)")]
    InvalidSection(String),

    /// Selection of an identifier that is not in the option set
    #[error("'{id}' is not a valid {kind} option")]
    UnknownOption { kind: String, id: String },

    /// The selected image could not be read from disk
    #[error("Failed to read image at {path:?}: {source}")]
    ImageRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The grading collaborator reported a failure
    #[error("Analysis failed: {0}")]
    AnalysisFailed(String),

    /// An analysis operation was requested from a state that does not allow it
    #[error("Cannot {action} while analysis is {state}")]
    InvalidTransition { action: &'static str, state: &'static str },

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    Config(String),
}
