//! Site configuration loaded from build-time generated JSON.

use karmatic_core::config::{ProvisionedConfig, SiteConfig};

/// Loads the generated bootstrap JSON from `OUT_DIR`.
///
/// If parsing fails, this logs a warning and returns an empty config; the site
/// still renders and the contact form reports the missing backend on submit.
pub fn load_bootstrap_config() -> ProvisionedConfig {
    parse_bootstrap_config(include_str!(concat!(
        env!("OUT_DIR"),
        "/site-bootstrap.json"
    )))
}

fn parse_bootstrap_config(raw: &str) -> ProvisionedConfig {
    serde_json::from_str(raw).unwrap_or_else(|error| {
        tracing::warn!("Failed to parse site bootstrap config: {}", error);
        ProvisionedConfig::default()
    })
}

/// Validates provisioned values, logging why the backend is unavailable.
pub fn resolve_site_config(provisioned: ProvisionedConfig) -> Option<SiteConfig> {
    match SiteConfig::from_provisioned(provisioned) {
        Ok(Some(config)) => {
            tracing::info!(
                bucket = %config.attachments_bucket,
                table = %config.submissions_table,
                "Contact form backend configured"
            );
            Some(config)
        }
        Ok(None) => {
            tracing::warn!("Supabase is not configured; contact form submissions are disabled");
            None
        }
        Err(error) => {
            tracing::error!("Invalid site configuration: {}", error);
            None
        }
    }
}
