//! SourceLink URL for a source root.
//!
//! A source root is a local directory tracked by a git repository. Roots that
//! are not git, have no remote, or live on a host nobody configured get the
//! `N/A` sentinel instead of a URL.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::diagnostic::{Diagnostic, SourceLinkError};
use crate::host::{self, HostItem};
use crate::provider::Provider;

/// Value used when no SourceLink URL applies to a source root.
pub const NOT_APPLICABLE: &str = "N/A";

/// Source control kind handled here.
pub const GIT_SOURCE_CONTROL: &str = "git";

/// A local source root and what the source-control layer knows about it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRoot {
    pub local_path: String,
    #[serde(default)]
    pub source_control: Option<String>,
    /// Remote URL of the repository containing the root.
    #[serde(default)]
    pub repository_url: Option<String>,
    #[serde(default)]
    pub revision_id: Option<String>,
    /// Already computed URL; kept as-is.
    #[serde(default)]
    pub source_link_url: Option<String>,
}

/// Result for one source root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceLinkUrl {
    pub value: String,
    pub diagnostics: Vec<Diagnostic>,
}

impl SourceLinkUrl {
    fn not_applicable() -> Self {
        Self {
            value: NOT_APPLICABLE.to_string(),
            diagnostics: Vec::new(),
        }
    }

    pub fn is_applicable(&self) -> bool {
        self.value != NOT_APPLICABLE
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Computes the SourceLink URL of `root` for `provider` given the configured
/// host items.
pub fn resolve_source_link_url(
    root: &SourceRoot,
    provider: Provider,
    hosts: &[HostItem],
) -> Result<SourceLinkUrl, SourceLinkError> {
    if let Some(existing) = non_empty(&root.source_link_url) {
        return Ok(SourceLinkUrl {
            value: existing.to_string(),
            diagnostics: Vec::new(),
        });
    }

    let is_git = root
        .source_control
        .as_deref()
        .is_some_and(|s| s.eq_ignore_ascii_case(GIT_SOURCE_CONTROL));
    if !is_git {
        tracing::debug!(local_path = %root.local_path, "not a git source root");
        return Ok(SourceLinkUrl::not_applicable());
    }

    let Some(raw_url) = non_empty(&root.repository_url) else {
        tracing::debug!(local_path = %root.local_path, "source root has no repository URL");
        return Ok(SourceLinkUrl::not_applicable());
    };
    let repository_url = Url::parse(raw_url)
        .ok()
        .filter(|u| matches!(u.scheme(), "http" | "https") && u.host_str().is_some())
        .ok_or_else(|| SourceLinkError::InvalidRepositoryUrl {
            url: raw_url.to_string(),
        })?;

    let revision_id =
        non_empty(&root.revision_id).ok_or_else(|| SourceLinkError::MissingRevisionId {
            local_path: root.local_path.clone(),
        })?;

    let Some(matched) = host::match_host(&repository_url, provider, hosts) else {
        tracing::debug!(
            repository_url = %repository_url,
            provider = provider.display_name(),
            "no matching host item"
        );
        return Ok(SourceLinkUrl::not_applicable());
    };

    let built = provider.build_source_link_url(
        &matched.content_url,
        &repository_url,
        &matched.relative_path,
        revision_id,
        Some(&matched.item),
    );

    let diagnostics = matched.diagnostic.into_iter().chain(built.diagnostic).collect();
    Ok(SourceLinkUrl {
        value: built.url,
        diagnostics,
    })
}
