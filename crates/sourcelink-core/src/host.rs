//! Host items and matching a repository URL against them.
//!
//! A host item names a git server (`gitlab.example.com`,
//! `gitlab.example.com:8443`, or `https://example.com/gitlab`) and carries
//! free-form metadata for the provider's builder. Matching normalises both
//! sides down to scheme, host, port and path prefix so every repository on
//! the same server shares one item.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::diagnostic::{Diagnostic, SourceLinkError};
use crate::provider::Provider;
use crate::uri;

/// Host item metadata overriding the default content endpoint.
pub const CONTENT_URL_METADATA_NAME: &str = "ContentUrl";

/// A configured git host and its metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostItem {
    pub item_spec: String,
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
}

impl HostItem {
    pub fn new(item_spec: impl Into<String>) -> Self {
        Self {
            item_spec: item_spec.into(),
            metadata: BTreeMap::new(),
        }
    }

    pub fn with_metadata(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(name.into(), value.into());
        self
    }

    /// Metadata value as configured; an empty string is returned as-is.
    pub fn metadata(&self, name: &str) -> Option<&str> {
        self.metadata.get(name).map(String::as_str)
    }
}

/// Parsed form of a host item spec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostPattern {
    /// Only set when the spec was a full URL.
    pub scheme: Option<String>,
    pub host: String,
    /// Only set when the spec names a non-default port.
    pub port: Option<u16>,
    /// Path below the host, without leading or trailing `/`.
    pub path_prefix: String,
}

impl HostPattern {
    pub fn parse(item_spec: &str) -> Result<Self, SourceLinkError> {
        let invalid = |reason: &str| SourceLinkError::InvalidHostSpec {
            item_spec: item_spec.to_string(),
            reason: reason.to_string(),
        };

        let spec = item_spec.trim();
        if spec.is_empty() {
            return Err(invalid("empty host"));
        }

        let has_scheme = spec.contains("://");
        if !has_scheme && spec.contains('/') {
            return Err(invalid("a path prefix requires an http(s) URL"));
        }
        let candidate = if has_scheme {
            spec.to_string()
        } else {
            format!("https://{spec}")
        };
        let parsed = Url::parse(&candidate).map_err(|e| invalid(&e.to_string()))?;

        if has_scheme && !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid("scheme must be http or https"));
        }
        if !parsed.username().is_empty() || parsed.password().is_some() {
            return Err(invalid("user info is not allowed"));
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(invalid("query and fragment are not allowed"));
        }
        let host = parsed
            .host_str()
            .ok_or_else(|| invalid("missing host"))?
            .to_string();

        Ok(Self {
            scheme: has_scheme.then(|| parsed.scheme().to_string()),
            host,
            port: parsed.port(),
            path_prefix: uri::trim_slashes(parsed.path()).to_string(),
        })
    }

    pub fn matches(&self, repository_url: &Url) -> bool {
        let Some(host) = repository_url.host_str() else {
            return false;
        };
        if !host.eq_ignore_ascii_case(&self.host) {
            return false;
        }
        if let Some(scheme) = &self.scheme {
            if repository_url.scheme() != scheme {
                return false;
            }
        }
        if let Some(port) = self.port {
            if repository_url.port_or_known_default() != Some(port) {
                return false;
            }
        }
        if self.path_prefix.is_empty() {
            return true;
        }
        let path = uri::trim_slashes(repository_url.path());
        match path.strip_prefix(self.path_prefix.as_str()) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }

    /// `scheme://host[:port]/<prefix>` taken from the repository URL.
    pub fn host_url(&self, repository_url: &Url) -> Url {
        let mut url = repository_url.clone();
        url.set_path(&self.path_prefix);
        url.set_query(None);
        url.set_fragment(None);
        // Only fails for cannot-be-a-base URLs, which never match a pattern.
        let _ = url.set_username("");
        let _ = url.set_password(None);
        url
    }

    /// Repository path below the prefix, without slashes around it and
    /// without a trailing `.git`.
    pub fn relative_path(&self, repository_url: &Url) -> String {
        let path = uri::trim_slashes(repository_url.path());
        let rest = path
            .strip_prefix(self.path_prefix.as_str())
            .unwrap_or(path);
        let rest = uri::trim_slashes(rest);
        let rest = rest.strip_suffix(".git").unwrap_or(rest);
        uri::trim_slashes(rest).to_string()
    }
}

/// Picks the host item that best matches `repository_url`.
///
/// The longest path prefix wins; on a tie the item listed first wins. Items
/// with an unparseable spec are skipped.
pub fn find_host_item<'a>(
    repository_url: &Url,
    items: &'a [HostItem],
) -> Option<(&'a HostItem, HostPattern)> {
    let mut best: Option<(&'a HostItem, HostPattern)> = None;
    for item in items {
        let pattern = match HostPattern::parse(&item.item_spec) {
            Ok(p) => p,
            Err(e) => {
                tracing::warn!("skipping host item: {}", e);
                continue;
            }
        };
        if !pattern.matches(repository_url) {
            continue;
        }
        let better = match &best {
            Some((_, current)) => pattern.path_prefix.len() > current.path_prefix.len(),
            None => true,
        };
        if better {
            best = Some((item, pattern));
        }
    }
    best
}

/// Host association for one repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostMatch {
    /// The configured item, or an implicit one for the provider's public domain.
    pub item: HostItem,
    pub implicit: bool,
    pub content_url: Url,
    pub relative_path: String,
    /// Raised when `ContentUrl` metadata was present but unusable.
    pub diagnostic: Option<Diagnostic>,
}

/// Resolves the host association of `repository_url` for `provider`.
///
/// Returns `None` when no configured item matches and the repository is not
/// on the provider's public domain.
pub fn match_host(repository_url: &Url, provider: Provider, items: &[HostItem]) -> Option<HostMatch> {
    let (item, pattern, implicit) = match find_host_item(repository_url, items) {
        Some((item, pattern)) => (item.clone(), pattern, false),
        None => {
            let domain = provider.public_domain();
            let host = repository_url.host_str()?;
            if !host.eq_ignore_ascii_case(domain) {
                return None;
            }
            let item = HostItem::new(domain);
            let pattern = HostPattern::parse(domain).ok()?;
            (item, pattern, true)
        }
    };

    let host_url = pattern.host_url(repository_url);
    let default_content_url = provider.default_content_url(&host_url);
    let (content_url, diagnostic) = match item.metadata(CONTENT_URL_METADATA_NAME) {
        Some(raw) if !raw.is_empty() => match Url::parse(raw) {
            Ok(url) if !url.cannot_be_a_base() => (url, None),
            _ => {
                let diagnostic = Diagnostic::ItemMustSpecifyMetadata {
                    item_spec: item.item_spec.clone(),
                    item_group: provider.hosts_item_group_name().to_string(),
                    metadata_name: CONTENT_URL_METADATA_NAME.to_string(),
                };
                tracing::error!(item_spec = %item.item_spec, content_url = raw, "{}", diagnostic);
                (default_content_url, Some(diagnostic))
            }
        },
        _ => (default_content_url, None),
    };

    Some(HostMatch {
        relative_path: pattern.relative_path(repository_url),
        item,
        implicit,
        content_url,
        diagnostic,
    })
}
