//! `gitlab-sourcelink build` – run a provider's builder directly.

use anyhow::Result;
use sourcelink_core::gitlab::VERSION_METADATA_NAME;
use sourcelink_core::{BuildOutput, HostItem, Provider};
use url::Url;

#[derive(Debug, Clone)]
pub struct BuildArgs {
    pub provider: Provider,
    pub content_url: Url,
    pub repository_url: Option<Url>,
    pub relative_path: String,
    pub revision: String,
    pub version: Option<String>,
}

/// One-off host item standing in for configuration.
fn host_item(args: &BuildArgs) -> Option<HostItem> {
    let version = args.version.as_ref()?;
    let spec = args.content_url.host_str().unwrap_or_default();
    Some(HostItem::new(spec).with_metadata(VERSION_METADATA_NAME, version.as_str()))
}

pub(crate) fn build(args: &BuildArgs) -> Result<BuildOutput> {
    if args.revision.trim().is_empty() {
        anyhow::bail!("--revision must not be empty");
    }
    let repository_url = args.repository_url.as_ref().unwrap_or(&args.content_url);
    let item = host_item(args);
    Ok(args.provider.build_source_link_url(
        &args.content_url,
        repository_url,
        &args.relative_path,
        &args.revision,
        item.as_ref(),
    ))
}

pub fn run_build(args: &BuildArgs) -> Result<()> {
    let out = build(args)?;
    if let Some(d) = &out.diagnostic {
        eprintln!("warning: {d}");
    }
    println!("{}", out.url);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(version: Option<&str>) -> BuildArgs {
        BuildArgs {
            provider: Provider::GitLab,
            content_url: Url::parse("https://gitlab.example.com/foo/bar").unwrap(),
            repository_url: None,
            relative_path: String::new(),
            revision: "abc123".to_string(),
            version: version.map(str::to_string),
        }
    }

    #[test]
    fn version_flag_selects_layout() {
        assert_eq!(
            build(&args(None)).unwrap().url,
            "https://gitlab.example.com/foo/bar/-/raw/abc123/*"
        );
        assert_eq!(
            build(&args(Some("12.0"))).unwrap().url,
            "https://gitlab.example.com/foo/bar/raw/abc123/*"
        );
    }

    #[test]
    fn bad_version_flag_names_content_host() {
        let out = build(&args(Some("bogus"))).unwrap();
        assert!(out.diagnostic.unwrap().to_string().contains("gitlab.example.com"));
    }

    #[test]
    fn empty_revision_is_rejected() {
        let mut a = args(None);
        a.revision = " ".to_string();
        assert!(build(&a).is_err());
    }
}
