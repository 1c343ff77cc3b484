//! Site configuration for the contact form backend.
//!
//! Values are provisioned at build time (the web crate's build script reads
//! them from the environment / `.env`) and embedded as JSON. Only public,
//! safe-to-ship values belong here: the Supabase anon key is designed to be
//! exposed to browsers, service-role keys are not.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::util::{is_http_url, normalize_text_option};

pub const ENV_SUPABASE_URL: &str = "SUPABASE_URL";
pub const ENV_SUPABASE_ANON_KEY: &str = "SUPABASE_ANON_KEY";
pub const ENV_ATTACHMENTS_BUCKET: &str = "KARMATIC_ATTACHMENTS_BUCKET";
pub const ENV_SUBMISSIONS_TABLE: &str = "KARMATIC_SUBMISSIONS_TABLE";

pub const DEFAULT_ATTACHMENTS_BUCKET: &str = "form-attachments";
pub const DEFAULT_SUBMISSIONS_TABLE: &str = "form_submissions";

/// Raw build-provisioned values, all optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ProvisionedConfig {
    #[serde(default)]
    pub supabase_url: Option<String>,
    #[serde(default)]
    pub supabase_anon_key: Option<String>,
    #[serde(default)]
    pub attachments_bucket: Option<String>,
    #[serde(default)]
    pub submissions_table: Option<String>,
}

#[cfg(test)]
impl ProvisionedConfig {
    /// Collect provisioned values through a variable lookup (environment, map).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            supabase_url: normalize_text_option(lookup(ENV_SUPABASE_URL)),
            supabase_anon_key: normalize_text_option(lookup(ENV_SUPABASE_ANON_KEY)),
            attachments_bucket: normalize_text_option(lookup(ENV_ATTACHMENTS_BUCKET)),
            submissions_table: normalize_text_option(lookup(ENV_SUBMISSIONS_TABLE)),
        }
    }
}

/// Validated backend configuration.
#[derive(Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Supabase project URL without trailing slash.
    pub supabase_url: String,
    pub supabase_anon_key: String,
    pub attachments_bucket: String,
    pub submissions_table: String,
}

impl std::fmt::Debug for SiteConfig {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("SiteConfig")
            .field("supabase_url", &self.supabase_url)
            .field("supabase_anon_key", &"[REDACTED]")
            .field("attachments_bucket", &self.attachments_bucket)
            .field("submissions_table", &self.submissions_table)
            .finish()
    }
}

impl SiteConfig {
    /// Validate provisioned values.
    ///
    /// Returns `Ok(None)` when no Supabase values were provisioned at all and
    /// an error naming the missing variables when only some were.
    pub fn from_provisioned(provisioned: ProvisionedConfig) -> Result<Option<Self>> {
        let supabase_url = normalize_text_option(provisioned.supabase_url);
        let supabase_anon_key = normalize_text_option(provisioned.supabase_anon_key);

        let (supabase_url, supabase_anon_key) = match (supabase_url, supabase_anon_key) {
            (None, None) => return Ok(None),
            (Some(url), Some(key)) => (url, key),
            (url, key) => {
                let mut missing = Vec::new();
                if url.is_none() {
                    missing.push(ENV_SUPABASE_URL);
                }
                if key.is_none() {
                    missing.push(ENV_SUPABASE_ANON_KEY);
                }
                return Err(Error::Config(format!(
                    "Supabase configuration is incomplete. Missing: {}",
                    missing.join(", ")
                )));
            }
        };

        let supabase_url = normalize_supabase_url(&supabase_url)?;
        let attachments_bucket = normalize_identifier(
            provisioned.attachments_bucket,
            DEFAULT_ATTACHMENTS_BUCKET,
            ENV_ATTACHMENTS_BUCKET,
        )?;
        let submissions_table = normalize_identifier(
            provisioned.submissions_table,
            DEFAULT_SUBMISSIONS_TABLE,
            ENV_SUBMISSIONS_TABLE,
        )?;

        Ok(Some(Self {
            supabase_url,
            supabase_anon_key,
            attachments_bucket,
            submissions_table,
        }))
    }
}

/// Trim and validate a Supabase project URL.
pub fn normalize_supabase_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(Error::Config("Supabase URL must not be empty".to_string()));
    }
    if !is_http_url(trimmed) {
        return Err(Error::Config(format!(
            "{ENV_SUPABASE_URL} must start with http:// or https://"
        )));
    }
    Ok(trimmed.to_string())
}

fn normalize_identifier(value: Option<String>, default: &str, name: &str) -> Result<String> {
    let Some(value) = normalize_text_option(value) else {
        return Ok(default.to_string());
    };

    let valid = value
        .chars()
        .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_');
    if !valid {
        return Err(Error::Config(format!(
            "{name} may only contain letters, digits, '-' and '_'"
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn from_map(map: &HashMap<&str, &str>) -> Result<Option<SiteConfig>> {
        SiteConfig::from_provisioned(ProvisionedConfig::from_lookup(|key| {
            map.get(key).map(|value| (*value).to_string())
        }))
    }

    #[test]
    fn no_values_means_not_configured() {
        assert!(from_map(&HashMap::new()).unwrap().is_none());
    }

    #[test]
    fn blank_values_count_as_missing() {
        let mut map = HashMap::new();
        map.insert(ENV_SUPABASE_URL, "   ");
        map.insert(ENV_SUPABASE_ANON_KEY, "");
        assert!(from_map(&map).unwrap().is_none());
    }

    #[test]
    fn partial_config_names_missing_variable() {
        let mut map = HashMap::new();
        map.insert(ENV_SUPABASE_URL, "https://demo.supabase.co");

        match from_map(&map).unwrap_err() {
            Error::Config(message) => assert!(message.contains(ENV_SUPABASE_ANON_KEY)),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn applies_defaults_and_trims_url() {
        let mut map = HashMap::new();
        map.insert(ENV_SUPABASE_URL, " https://demo.supabase.co/ ");
        map.insert(ENV_SUPABASE_ANON_KEY, "anon-key");

        let config = from_map(&map).unwrap().unwrap();
        assert_eq!(config.supabase_url, "https://demo.supabase.co");
        assert_eq!(config.attachments_bucket, DEFAULT_ATTACHMENTS_BUCKET);
        assert_eq!(config.submissions_table, DEFAULT_SUBMISSIONS_TABLE);
    }

    #[test]
    fn custom_bucket_and_table_are_validated() {
        let mut map = HashMap::new();
        map.insert(ENV_SUPABASE_URL, "https://demo.supabase.co");
        map.insert(ENV_SUPABASE_ANON_KEY, "anon-key");
        map.insert(ENV_ATTACHMENTS_BUCKET, "quote-files");
        map.insert(ENV_SUBMISSIONS_TABLE, "leads");

        let config = from_map(&map).unwrap().unwrap();
        assert_eq!(config.attachments_bucket, "quote-files");
        assert_eq!(config.submissions_table, "leads");

        map.insert(ENV_SUBMISSIONS_TABLE, "leads; drop table");
        assert!(from_map(&map).is_err());
    }

    #[test]
    fn rejects_url_without_scheme() {
        let mut map = HashMap::new();
        map.insert(ENV_SUPABASE_URL, "demo.supabase.co");
        map.insert(ENV_SUPABASE_ANON_KEY, "anon-key");

        match from_map(&map).unwrap_err() {
            Error::Config(message) => assert!(message.contains(ENV_SUPABASE_URL)),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn debug_redacts_anon_key() {
        let config = SiteConfig {
            supabase_url: "https://demo.supabase.co".to_string(),
            supabase_anon_key: "secret-anon".to_string(),
            attachments_bucket: DEFAULT_ATTACHMENTS_BUCKET.to_string(),
            submissions_table: DEFAULT_SUBMISSIONS_TABLE.to_string(),
        };
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("secret-anon"));
        assert!(rendered.contains("[REDACTED]"));
    }

    #[test]
    fn provisioned_json_rejects_unknown_fields() {
        let parsed = serde_json::from_str::<ProvisionedConfig>(r#"{"service_role_key":"x"}"#);
        assert!(parsed.is_err());
    }
}
