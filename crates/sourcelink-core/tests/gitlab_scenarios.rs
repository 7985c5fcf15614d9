//! End-to-end GitLab URL scenarios through the public API.

use sourcelink_core::gitlab::{self, VERSION_METADATA_NAME};
use sourcelink_core::{Diagnostic, HostItem, Provider, SourceRoot};
use url::Url;

const REV: &str = "abc123";

fn content() -> Url {
    Url::parse("https://gitlab.com/foo/bar").unwrap()
}

fn build(relative: &str, version: Option<&str>) -> sourcelink_core::BuildOutput {
    let item = version.map(|v| HostItem::new("gitlab.com").with_metadata(VERSION_METADATA_NAME, v));
    gitlab::build_source_link_url(&content(), &content(), relative, REV, item.as_ref())
}

#[test]
fn scenario_no_host_config() {
    assert_eq!(build("", None).url, "https://gitlab.com/foo/bar/-/raw/abc123/*");
}

#[test]
fn scenario_old_server() {
    assert_eq!(build("", Some("12.0")).url, "https://gitlab.com/foo/bar/raw/abc123/*");
}

#[test]
fn scenario_threshold_version_matches_absent_config() {
    let at_threshold = build("", Some("13.5"));
    assert_eq!(at_threshold.url, "https://gitlab.com/foo/bar/-/raw/abc123/*");
    assert_eq!(at_threshold, build("", None));
}

#[test]
fn scenario_bogus_version() {
    let out = build("", Some("bogus"));
    assert_eq!(out.url, build("", None).url);
    match out.diagnostic {
        Some(Diagnostic::ItemMustSpecifyMetadata {
            item_spec,
            item_group,
            metadata_name,
        }) => {
            assert_eq!(item_spec, "gitlab.com");
            assert_eq!(item_group, gitlab::HOSTS_ITEM_GROUP_NAME);
            assert_eq!(metadata_name, "Version");
        }
        None => panic!("expected a diagnostic"),
    }
}

#[test]
fn scenario_relative_path() {
    assert_eq!(
        build("src/lib", None).url,
        "https://gitlab.com/foo/bar/src/lib/-/raw/abc123/*"
    );
}

#[test]
fn source_root_against_configured_hosts() {
    let hosts = vec![
        HostItem::new("https://example.com/gitlab").with_metadata(VERSION_METADATA_NAME, "13.4"),
        HostItem::new("example.com"),
    ];
    let root = SourceRoot {
        local_path: "/build/src/".to_string(),
        source_control: Some("Git".to_string()),
        repository_url: Some("https://example.com/gitlab/group/project.git".to_string()),
        revision_id: Some("0123456789abcdef0123456789abcdef01234567".to_string()),
        source_link_url: None,
    };
    let r = sourcelink_core::source_root::resolve_source_link_url(&root, Provider::GitLab, &hosts).unwrap();
    assert_eq!(
        r.value,
        "https://example.com/gitlab/group/project/raw/0123456789abcdef0123456789abcdef01234567/*"
    );
    assert!(r.diagnostics.is_empty());
}
