//! Unified error types for the express-kit scaffolder.

use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur while generating a project.
///
/// Every error is fatal to the current generation run: nothing is retried, and
/// a run that fails mid-pipeline leaves the target directory half-patched (see
/// [`crate::pipeline::run_pipeline`]).
#[derive(Error, Debug)]
pub enum ScaffoldError {
    // --- Request preconditions ---

    /// The app name is empty, whitespace-only, or contains characters that are
    /// not safe in a package name / directory name.
    #[error("invalid app name {0:?} (use ASCII letters, digits, '-' or '_')")]
    InvalidAppName(String),

    /// Attempted to generate into a directory that already exists.
    #[error("target directory already exists: {0}")]
    ProjectExists(PathBuf),

    // --- Template corruption ---

    /// A file the pipeline expects from the base template is missing.
    #[error("template file missing: {path}")]
    TemplateFileMissing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The template's package.json exists but is not valid JSON.
    #[error("failed to parse manifest at {path}")]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The template's package.json has no `dependencies` object to patch.
    #[error("manifest at {path} has no dependencies object")]
    ManifestShape { path: PathBuf },

    // --- Templates ---

    /// Handlebars rendering failed (invalid template or missing variables).
    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    // --- General ---

    /// A filesystem I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A catch-all for errors from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Alias for `Result<T, ScaffoldError>`.
pub type Result<T> = std::result::Result<T, ScaffoldError>;
