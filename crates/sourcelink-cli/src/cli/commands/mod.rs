//! CLI command handlers, one file per command.

mod build;
mod hosts;
mod resolve;

pub use build::{run_build, BuildArgs};
pub use hosts::run_hosts;
pub use resolve::{run_resolve, ResolveArgs};
