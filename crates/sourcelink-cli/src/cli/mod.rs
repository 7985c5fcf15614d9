//! CLI for computing SourceLink URLs.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use sourcelink_core::config::{self, SourceLinkConfig};
use sourcelink_core::Provider;
use std::path::PathBuf;
use url::Url;

use commands::{run_build, run_hosts, run_resolve, BuildArgs, ResolveArgs};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "gitlab-sourcelink")]
#[command(about = "Compute SourceLink URLs for files in GitLab-hosted repositories", long_about = None)]
pub struct Cli {
    /// Read host configuration from this file instead of the XDG config dir.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Build a URL from a content endpoint and revision directly.
    Build {
        /// Raw-content base URL of the server or repository.
        #[arg(long, value_name = "URL")]
        content_url: Url,
        /// Commit the URL should point at.
        #[arg(long)]
        revision: String,
        /// Path appended to the content URL before the revision segment.
        #[arg(long, default_value = "")]
        relative_path: String,
        /// Repository URL (defaults to the content URL).
        #[arg(long, value_name = "URL")]
        repository_url: Option<Url>,
        /// Server version, as the `Version` metadata of a host item would carry it.
        #[arg(long)]
        version: Option<String>,
        /// gitlab, github or bitbucket (defaults to the configured provider).
        #[arg(long)]
        provider: Option<Provider>,
    },

    /// Resolve a repository against the configured hosts.
    Resolve {
        /// Remote URL of the repository.
        #[arg(long, value_name = "URL")]
        repository_url: String,
        /// Commit the URL should point at.
        #[arg(long)]
        revision: String,
        /// gitlab, github or bitbucket (defaults to the configured provider).
        #[arg(long)]
        provider: Option<Provider>,
        /// Source control kind of the root; anything but git yields N/A.
        #[arg(long, default_value = "git")]
        source_control: String,
        /// Print a JSON object instead of the bare URL.
        #[arg(long)]
        json: bool,
    },

    /// List configured host items.
    Hosts,
}

fn load_config(path: Option<&PathBuf>) -> Result<SourceLinkConfig> {
    match path {
        Some(p) => config::load_from_path(p),
        None => config::load_or_init(),
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = load_config(cli.config.as_ref())?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Build {
                content_url,
                revision,
                relative_path,
                repository_url,
                version,
                provider,
            } => run_build(&BuildArgs {
                provider: provider.unwrap_or(cfg.default_provider),
                content_url,
                repository_url,
                relative_path,
                revision,
                version,
            })?,
            CliCommand::Resolve {
                repository_url,
                revision,
                provider,
                source_control,
                json,
            } => run_resolve(
                &cfg,
                &ResolveArgs {
                    provider: provider.unwrap_or(cfg.default_provider),
                    repository_url,
                    revision,
                    source_control,
                    json,
                },
            )?,
            CliCommand::Hosts => run_hosts(&cfg),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
