//! `gitlab-sourcelink hosts` – list configured host items.

use sourcelink_core::config::SourceLinkConfig;

pub fn run_hosts(cfg: &SourceLinkConfig) {
    if cfg.hosts.is_empty() {
        println!("No hosts configured.");
        return;
    }
    println!("{:<10} {:<40} {}", "PROVIDER", "HOST", "METADATA");
    for h in &cfg.hosts {
        let metadata = h
            .metadata
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join(", ");
        println!("{:<10} {:<40} {}", h.provider.to_string(), h.item_spec, metadata);
    }
}
