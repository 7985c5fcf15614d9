//! Tests for build.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use sourcelink_core::Provider;

#[test]
fn cli_parse_build_minimal() {
    let cli = parse(&[
        "gitlab-sourcelink",
        "build",
        "--content-url",
        "https://gitlab.com/foo/bar",
        "--revision",
        "abc123",
    ]);
    assert!(cli.config.is_none());
    match cli.command {
        CliCommand::Build {
            content_url,
            revision,
            relative_path,
            repository_url,
            version,
            provider,
        } => {
            assert_eq!(content_url.as_str(), "https://gitlab.com/foo/bar");
            assert_eq!(revision, "abc123");
            assert_eq!(relative_path, "");
            assert!(repository_url.is_none());
            assert!(version.is_none());
            assert!(provider.is_none());
        }
        _ => panic!("expected Build"),
    }
}

#[test]
fn cli_parse_build_all_flags() {
    let cli = parse(&[
        "gitlab-sourcelink",
        "build",
        "--content-url",
        "https://gitlab.example.com",
        "--revision",
        "abc123",
        "--relative-path",
        "group/project",
        "--version",
        "12.10",
        "--provider",
        "GitLab",
    ]);
    match cli.command {
        CliCommand::Build {
            relative_path,
            version,
            provider,
            ..
        } => {
            assert_eq!(relative_path, "group/project");
            assert_eq!(version.as_deref(), Some("12.10"));
            assert_eq!(provider, Some(Provider::GitLab));
        }
        _ => panic!("expected Build"),
    }
}

#[test]
fn cli_parse_build_rejects_relative_content_url() {
    assert!(Cli::try_parse_from([
        "gitlab-sourcelink",
        "build",
        "--content-url",
        "foo/bar",
        "--revision",
        "abc123",
    ])
    .is_err());
}

#[test]
fn cli_parse_build_requires_revision() {
    assert!(Cli::try_parse_from([
        "gitlab-sourcelink",
        "build",
        "--content-url",
        "https://gitlab.com/foo/bar",
    ])
    .is_err());
}
