//! Error types for manifest loading, rendering and output

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while rendering templates through a manifest
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("Failed to read manifest {}: {source}", path.display())]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse manifest {}: {source}", path.display())]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to read template {}: {source}", path.display())]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No templates match {0}")]
    NoTemplates(String),

    #[error("Invalid template pattern {pattern}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("Failed to render template {}: {source}", path.display())]
    TemplateRender {
        path: PathBuf,
        #[source]
        source: handlebars::RenderError,
    },

    #[error("Failed to write output {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Coarse classification of an [`AssetError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    ManifestRead,
    ManifestParse,
    TemplateRead,
    TemplateRender,
    OutputWrite,
}

impl AssetError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AssetError::ManifestRead { .. } => ErrorKind::ManifestRead,
            AssetError::ManifestParse { .. } => ErrorKind::ManifestParse,
            AssetError::TemplateRead { .. } => ErrorKind::TemplateRead,
            AssetError::NoTemplates(_) => ErrorKind::TemplateRead,
            AssetError::InvalidPattern { .. } => ErrorKind::TemplateRead,
            AssetError::TemplateRender { .. } => ErrorKind::TemplateRender,
            AssetError::OutputWrite { .. } => ErrorKind::OutputWrite,
        }
    }

    /// Check if the manifest was the cause, as opposed to a template or the output
    pub fn is_manifest_error(&self) -> bool {
        matches!(self.kind(), ErrorKind::ManifestRead | ErrorKind::ManifestParse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn io_error() -> std::io::Error {
        std::io::Error::new(std::io::ErrorKind::NotFound, "gone")
    }

    #[test]
    fn test_kind() {
        let err = AssetError::ManifestRead {
            path: PathBuf::from("manifest.json"),
            source: io_error(),
        };
        assert_eq!(err.kind(), ErrorKind::ManifestRead);
        assert!(err.is_manifest_error());

        let err = AssetError::NoTemplates("*.hbs".to_string());
        assert_eq!(err.kind(), ErrorKind::TemplateRead);
        assert!(!err.is_manifest_error());

        let err = AssetError::InvalidPattern {
            pattern: "[".to_string(),
            source: glob::Pattern::new("[").unwrap_err(),
        };
        assert_eq!(err.kind(), ErrorKind::TemplateRead);
    }

    #[test]
    fn test_display_includes_path() {
        let err = AssetError::TemplateRead {
            path: PathBuf::from("hbs/_scripts.hbs"),
            source: io_error(),
        };
        let msg = err.to_string();
        assert!(msg.contains("hbs/_scripts.hbs"));
        assert!(msg.contains("gone"));
    }
}
