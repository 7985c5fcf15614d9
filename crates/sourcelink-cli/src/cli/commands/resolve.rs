//! `gitlab-sourcelink resolve` – match a repository against configured hosts.

use anyhow::{Context, Result};
use serde::Serialize;
use sourcelink_core::config::SourceLinkConfig;
use sourcelink_core::source_root::resolve_source_link_url;
use sourcelink_core::{Diagnostic, Provider, SourceLinkUrl, SourceRoot};

#[derive(Debug, Clone)]
pub struct ResolveArgs {
    pub provider: Provider,
    pub repository_url: String,
    pub revision: String,
    pub source_control: String,
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ResolveReport<'a> {
    url: &'a str,
    applicable: bool,
    provider: &'static str,
    diagnostics: &'a [Diagnostic],
}

pub(crate) fn resolve(cfg: &SourceLinkConfig, args: &ResolveArgs) -> Result<SourceLinkUrl> {
    let local_path = std::env::current_dir()
        .map(|p| p.display().to_string())
        .unwrap_or_default();
    let root = SourceRoot {
        local_path,
        source_control: Some(args.source_control.clone()),
        repository_url: Some(args.repository_url.clone()),
        revision_id: Some(args.revision.clone()),
        source_link_url: None,
    };
    let hosts = cfg.host_items(args.provider);
    resolve_source_link_url(&root, args.provider, &hosts)
        .with_context(|| format!("resolve {}", args.repository_url))
}

pub fn run_resolve(cfg: &SourceLinkConfig, args: &ResolveArgs) -> Result<()> {
    let result = resolve(cfg, args)?;
    if args.json {
        let report = ResolveReport {
            url: &result.value,
            applicable: result.is_applicable(),
            provider: args.provider.display_name(),
            diagnostics: &result.diagnostics,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for d in &result.diagnostics {
            eprintln!("warning: {d}");
        }
        println!("{}", result.value);
    }
    Ok(())
}
