//! GitLab SourceLink URLs.
//!
//! GitLab 13.5 moved raw file content from `<project>/raw/<rev>/<path>` to
//! `<project>/-/raw/<rev>/<path>`. Self-hosted instances older than that are
//! still around, so the server version configured on the host item picks the
//! layout. Without a usable version the newer layout is assumed.

use url::Url;

use crate::diagnostic::Diagnostic;
use crate::host::HostItem;
use crate::provider::BuildOutput;
use crate::uri;
use crate::version::{MajorMinor, ServerVersion};

/// Name of the host item group holding GitLab hosts.
pub const HOSTS_ITEM_GROUP_NAME: &str = "SourceLinkGitLabHost";

/// Human-readable provider name.
pub const PROVIDER_DISPLAY_NAME: &str = "GitLab";

/// Host item metadata carrying the server version.
pub const VERSION_METADATA_NAME: &str = "Version";

/// First GitLab version serving raw content under `-/raw/`.
pub const VERSION_WITH_NEW_URL_FORMAT: MajorMinor = MajorMinor::new(13, 5);

/// Server version resolved from a host item, with the diagnostic raised
/// while resolving it (if any).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedVersion {
    pub version: ServerVersion,
    pub diagnostic: Option<Diagnostic>,
}

/// Reads the `Version` metadata of `host_item`.
///
/// A missing item, a missing key and an empty value all yield 13.5 silently.
/// A value that is not a dotted numeric version yields 13.5 plus a
/// diagnostic, which is also logged.
pub fn resolve_version(host_item: Option<&HostItem>) -> ResolvedVersion {
    let default = || ServerVersion::from(VERSION_WITH_NEW_URL_FORMAT);

    let Some(item) = host_item else {
        return ResolvedVersion {
            version: default(),
            diagnostic: None,
        };
    };
    let raw = match item.metadata(VERSION_METADATA_NAME) {
        Some(raw) if !raw.is_empty() => raw,
        _ => {
            return ResolvedVersion {
                version: default(),
                diagnostic: None,
            }
        }
    };

    match raw.parse::<ServerVersion>() {
        Ok(version) => ResolvedVersion {
            version,
            diagnostic: None,
        },
        Err(e) => {
            let diagnostic = Diagnostic::ItemMustSpecifyMetadata {
                item_spec: item.item_spec.clone(),
                item_group: HOSTS_ITEM_GROUP_NAME.to_string(),
                metadata_name: VERSION_METADATA_NAME.to_string(),
            };
            tracing::error!(
                item_spec = %item.item_spec,
                item_group = HOSTS_ITEM_GROUP_NAME,
                metadata = VERSION_METADATA_NAME,
                "{}: {}",
                diagnostic,
                e
            );
            ResolvedVersion {
                version: default(),
                diagnostic: Some(diagnostic),
            }
        }
    }
}

/// Path appended after the project for the given server version.
///
/// The trailing `*` is literal: consumers replace it with the file path.
pub fn url_path_template(version: &ServerVersion, revision_id: &str) -> String {
    if *version >= ServerVersion::from(VERSION_WITH_NEW_URL_FORMAT) {
        format!("-/raw/{revision_id}/*")
    } else {
        format!("raw/{revision_id}/*")
    }
}

/// Builds the SourceLink URL for a GitLab repository.
///
/// `repository_url` is accepted for parity with the other providers; GitLab
/// only needs the content endpoint.
///
/// # Examples
///
/// - content `https://gitlab.com/foo/bar`, relative `""`, revision `abc123`,
///   no host item → `https://gitlab.com/foo/bar/-/raw/abc123/*`
/// - same with `Version = "12.0"` → `https://gitlab.com/foo/bar/raw/abc123/*`
pub fn build_source_link_url(
    content_url: &Url,
    _repository_url: &Url,
    relative_path: &str,
    revision_id: &str,
    host_item: Option<&HostItem>,
) -> BuildOutput {
    let ResolvedVersion {
        version,
        diagnostic,
    } = resolve_version(host_item);
    let template = url_path_template(&version, revision_id);
    let url = uri::combine(&uri::combine(content_url.as_str(), relative_path), &template);
    tracing::debug!(%url, %version, "built GitLab SourceLink URL");
    BuildOutput { url, diagnostic }
}
