use crate::config::Config;
use crate::municipality::{self, Municipality};
use std::fs;
use tracing::{debug, info};

/// Shared, read-only application state. Built once at startup and handed to
/// every handler behind an `Arc`; nothing here is mutated after construction,
/// so concurrent reads need no synchronization.
pub struct AppState {
    pub municipalities: Vec<Municipality>,
    pub page_template: String,
    pub service: String,
    pub version: String,
}

impl AppState {
    pub fn from_config(cfg: &Config) -> anyhow::Result<Self> {
        let template_path = cfg.template_path();
        // Read the page template up front so a missing asset fails the process
        // at startup instead of on the first request.
        let page_template = fs::read_to_string(&template_path).map_err(|e| {
            anyhow::anyhow!("Error loading template '{}': {}", template_path, e)
        })?;
        debug!("Loaded page template from '{}'", template_path);

        let municipalities = municipality::builtin_dataset();
        info!("Loaded {} municipalities", municipalities.len());

        Ok(AppState {
            municipalities,
            page_template,
            service: cfg.service(),
            version: cfg.version(),
        })
    }
}
