//! SourceLink URLs for source files hosted on GitLab and other git servers.
//!
//! The entry points are [`gitlab::build_source_link_url`] for a single
//! content endpoint and [`source_root::resolve_source_link_url`] for a source
//! root matched against configured hosts.

pub mod config;
pub mod diagnostic;
pub mod gitlab;
pub mod host;
pub mod logging;
pub mod provider;
pub mod source_root;
pub mod uri;
pub mod version;

pub use diagnostic::{Diagnostic, SourceLinkError};
pub use host::HostItem;
pub use provider::{BuildOutput, Provider};
pub use source_root::{SourceLinkUrl, SourceRoot, NOT_APPLICABLE};
pub use version::ServerVersion;
