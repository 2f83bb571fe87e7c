use std::io;

use thiserror::Error;

/// Library-wide error type for nativecn operations.
///
/// A denied conflict check is not an error; it surfaces as
/// [`InstallOutcome::Skipped`](crate::domain::InstallOutcome). Every variant
/// here is fatal for the invocation that produced it, and none of them leaves
/// a partially written destination behind.
#[derive(Debug, Error)]
pub enum InstallError {
    /// Configuration rejected before resolution began.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Component identifier is invalid.
    #[error("Invalid component identifier '{0}': must be alphanumeric with hyphens")]
    InvalidComponentId(String),

    /// Component not found in the template set.
    #[error("Component '{name}' not found. Available: {available}")]
    TemplateNotFound { name: String, available: String },

    /// A transformation rule failed against a template file.
    #[error("Failed to transform '{file}': {source}")]
    Transformation {
        file: String,
        #[source]
        source: TransformError,
    },

    /// Staging or commit I/O failure; the destination is left unchanged.
    #[error("Write failed: {0}")]
    WriteFailure(#[source] io::Error),

    /// Configuration file could not be read or parsed.
    #[error("{0}")]
    ConfigFile(String),
}

impl InstallError {
    pub(crate) fn config_file<S: Into<String>>(message: S) -> Self {
        InstallError::ConfigFile(message.into())
    }
}

/// Failure raised by a transformation rule against unexpected marker state.
#[derive(Debug, Error)]
pub enum TransformError {
    /// A marker the rule set should have consumed survived the rewrite.
    #[error("marker '{0}' remained after rewrite; template marker state is malformed")]
    UnrewrittenMarker(&'static str),
}
