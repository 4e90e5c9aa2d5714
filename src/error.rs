//! Error type shared by every generation step.

use std::path::PathBuf;
use thiserror::Error;

/// Terminal failure of a generation call. Nothing is retried or rolled back.
#[derive(Error, Debug)]
pub enum GenError {
    /// The naming-format conversion rejected a style or a candidate name.
    #[error("naming format error for {name:?} with style {style:?}: {reason}")]
    Format {
        style: String,
        name: String,
        reason: String,
    },

    /// A template could not be read or compiled.
    #[error("failed to load template {name}: {reason}")]
    TemplateLoad { name: String, reason: String },

    /// A policy annotation holds a value the generator refuses to emit.
    #[error("invalid {key} annotation {value:?}: {reason}")]
    PolicyValidation {
        key: &'static str,
        value: String,
        reason: String,
    },

    /// Template substitution failed.
    #[error("failed to render template {name}")]
    Render {
        name: String,
        #[source]
        source: minijinja::Error,
    },

    /// The route's method has no entry in the selected flavor's method table.
    #[error("method {method:?} on {path} is not supported by the {flavor} router")]
    UnsupportedMethod {
        method: String,
        path: String,
        flavor: &'static str,
    },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GenError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GenError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, GenError>;
