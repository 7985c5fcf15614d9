//! Diagnostics and error types.
//!
//! A [`Diagnostic`] never stops URL construction: the builder falls back to a
//! default and reports it alongside the result. A [`SourceLinkError`] means
//! no URL can be produced for the source root at all.

use serde::Serialize;
use thiserror::Error;

/// Non-fatal problem found while building a SourceLink URL.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// A host item carries metadata that could not be used.
    #[error("item '{item_spec}' of item group '{item_group}' must specify metadata '{metadata_name}'")]
    ItemMustSpecifyMetadata {
        item_spec: String,
        item_group: String,
        metadata_name: String,
    },
}

/// Fatal error for a single source root.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceLinkError {
    #[error("repository URL '{url}' is not an absolute http(s) URL")]
    InvalidRepositoryUrl { url: String },

    #[error("source root '{local_path}' has no revision id")]
    MissingRevisionId { local_path: String },

    #[error("invalid host item '{item_spec}': {reason}")]
    InvalidHostSpec { item_spec: String, reason: String },
}
