//! Supported git host providers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::diagnostic::Diagnostic;
use crate::gitlab;
use crate::host::HostItem;
use crate::uri;

/// URL built by a provider plus the diagnostic raised on the way, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOutput {
    pub url: String,
    pub diagnostic: Option<Diagnostic>,
}

/// Git hosting provider; selects host items and the URL layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    #[default]
    GitLab,
    GitHub,
    Bitbucket,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown provider '{0}': expected gitlab, github or bitbucket")]
pub struct ParseProviderError(pub String);

impl Provider {
    pub const ALL: [Provider; 3] = [Provider::GitLab, Provider::GitHub, Provider::Bitbucket];

    pub fn hosts_item_group_name(self) -> &'static str {
        match self {
            Provider::GitLab => gitlab::HOSTS_ITEM_GROUP_NAME,
            Provider::GitHub => "SourceLinkGitHubHost",
            Provider::Bitbucket => "SourceLinkBitbucketGitHost",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Provider::GitLab => gitlab::PROVIDER_DISPLAY_NAME,
            Provider::GitHub => "GitHub",
            Provider::Bitbucket => "Bitbucket",
        }
    }

    /// Public service domain, matched even without a configured host item.
    pub fn public_domain(self) -> &'static str {
        match self {
            Provider::GitLab => "gitlab.com",
            Provider::GitHub => "github.com",
            Provider::Bitbucket => "bitbucket.org",
        }
    }

    /// Content endpoint used when a host item has no `ContentUrl`.
    pub fn default_content_url(self, host_url: &Url) -> Url {
        match self {
            Provider::GitHub => {
                if host_url.host_str() == Some(Provider::GitHub.public_domain()) {
                    Url::parse("https://raw.githubusercontent.com").unwrap_or_else(|_| host_url.clone())
                } else {
                    let raw = uri::combine(host_url.as_str(), "raw");
                    Url::parse(&raw).unwrap_or_else(|_| host_url.clone())
                }
            }
            Provider::GitLab | Provider::Bitbucket => host_url.clone(),
        }
    }

    pub fn build_source_link_url(
        self,
        content_url: &Url,
        repository_url: &Url,
        relative_path: &str,
        revision_id: &str,
        host_item: Option<&HostItem>,
    ) -> BuildOutput {
        let suffix = match self {
            Provider::GitLab => {
                return gitlab::build_source_link_url(
                    content_url,
                    repository_url,
                    relative_path,
                    revision_id,
                    host_item,
                )
            }
            Provider::GitHub => format!("{revision_id}/*"),
            Provider::Bitbucket => format!("raw/{revision_id}/*"),
        };
        BuildOutput {
            url: uri::combine(&uri::combine(content_url.as_str(), relative_path), &suffix),
            diagnostic: None,
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Provider::GitLab => "gitlab",
            Provider::GitHub => "github",
            Provider::Bitbucket => "bitbucket",
        };
        f.write_str(s)
    }
}

impl FromStr for Provider {
    type Err = ParseProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Provider::ALL
            .into_iter()
            .find(|p| p.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseProviderError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("GitLab".parse::<Provider>().unwrap(), Provider::GitLab);
        assert_eq!("github".parse::<Provider>().unwrap(), Provider::GitHub);
        assert_eq!(" BITBUCKET ".parse::<Provider>().unwrap(), Provider::Bitbucket);
        assert!("gitea".parse::<Provider>().is_err());
    }

    #[test]
    fn gitlab_constants() {
        assert_eq!(Provider::GitLab.hosts_item_group_name(), "SourceLinkGitLabHost");
        assert_eq!(Provider::GitLab.display_name(), "GitLab");
    }

    #[test]
    fn github_default_content_url() {
        let host = url("https://github.com/");
        assert_eq!(
            Provider::GitHub.default_content_url(&host).as_str(),
            "https://raw.githubusercontent.com/"
        );
        let enterprise = url("https://github.example.com/");
        assert_eq!(
            Provider::GitHub.default_content_url(&enterprise).as_str(),
            "https://github.example.com/raw"
        );
    }

    #[test]
    fn builds_per_provider_layout() {
        let content = url("https://example.com");
        let repo = url("https://example.com/foo/bar");
        let build = |p: Provider| p.build_source_link_url(&content, &repo, "foo/bar", "abc123", None).url;
        assert_eq!(build(Provider::GitLab), "https://example.com/foo/bar/-/raw/abc123/*");
        assert_eq!(build(Provider::GitHub), "https://example.com/foo/bar/abc123/*");
        assert_eq!(build(Provider::Bitbucket), "https://example.com/foo/bar/raw/abc123/*");
    }

    #[test]
    fn gitlab_version_applies_only_to_gitlab() {
        let content = url("https://example.com/foo/bar");
        let item = HostItem::new("example.com").with_metadata("Version", "bogus");
        let gitlab = Provider::GitLab.build_source_link_url(&content, &content, "", "r", Some(&item));
        assert!(gitlab.diagnostic.is_some());
        let github = Provider::GitHub.build_source_link_url(&content, &content, "", "r", Some(&item));
        assert!(github.diagnostic.is_none());
    }
}
