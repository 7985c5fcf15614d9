//! Log subscriber setup. Kept in its own test binary because it installs the
//! process-wide subscriber.

use sourcelink_core::logging;
use sourcelink_core::HostItem;
use std::fs;
use url::Url;

#[test]
fn file_logging_then_repeated_init_is_harmless() {
    let dir = tempfile::tempdir().unwrap();
    let log_dir = dir.path().join("state");

    let path = logging::init_logging_at(&log_dir).expect("first init installs the subscriber");
    assert_eq!(path, log_dir.join("gitlab-sourcelink.log"));
    assert!(path.exists());

    // Later initializers must not panic and must not replace the subscriber.
    assert!(!logging::init_logging_stderr());
    assert!(!logging::init_logging_stderr());
    assert!(logging::init_logging_at(&log_dir).is_err());

    let content = Url::parse("https://gitlab.example.com/foo/bar").unwrap();
    let item = HostItem::new("gitlab.example.com").with_metadata("Version", "bogus");
    let out = sourcelink_core::gitlab::build_source_link_url(&content, &content, "", "abc123", Some(&item));
    assert!(out.diagnostic.is_some());

    let logged = fs::read_to_string(&path).unwrap();
    assert_eq!(logged.matches("must specify metadata 'Version'").count(), 1);
}
