use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::env::{EnvConfig, ENV_AUDIT_EVENT_ID, ENV_CALL_TIMEOUT_MS, ENV_EPS_BASE_URL};
use crate::eps::{EpsEndpoint, CANCEL_RATE_SWITCH_AUDIT_EVENT_ID};
use crate::error::{RateSwitchError, Result};

pub const DEFAULT_CALL_TIMEOUT_MS: u64 = 30_000;

/// 旅程配置
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct JourneyConfig {
    #[serde(default)]
    pub eps: EpsConfig,
    #[serde(default = "default_audit_event_id")]
    pub audit_event_id: String,
}

/// EPS 访问配置
///
/// `endpoints` 以端点标识为键（如 `AUDIT_EVENTS`），值为相对 `base_url` 的路径。
/// `call_timeout_ms` 为 0 时不限时。
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EpsConfig {
    #[serde(default)]
    pub base_url: String,
    #[serde(default = "default_endpoint_paths")]
    pub endpoints: HashMap<String, String>,
    #[serde(default = "default_call_timeout_ms")]
    pub call_timeout_ms: u64,
}

impl Default for JourneyConfig {
    fn default() -> Self {
        Self {
            eps: EpsConfig::default(),
            audit_event_id: default_audit_event_id(),
        }
    }
}

impl Default for EpsConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            endpoints: default_endpoint_paths(),
            call_timeout_ms: default_call_timeout_ms(),
        }
    }
}

impl JourneyConfig {
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let config: JourneyConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| {
            RateSwitchError::Config(format!("failed to read `{}`: {e}", path.display()))
        })?;
        Self::from_json_str(&raw)
    }

    /// 以默认值为基础，用环境变量覆盖
    pub fn from_env() -> Result<Self> {
        let mut config = JourneyConfig::default();
        if let Some(base_url) = EnvConfig::get_env_optional(ENV_EPS_BASE_URL) {
            config.eps.base_url = base_url;
        }
        if let Some(timeout_ms) = EnvConfig::get_env_parsed::<u64>(ENV_CALL_TIMEOUT_MS)? {
            config.eps.call_timeout_ms = timeout_ms;
        }
        if let Some(audit_event_id) = EnvConfig::get_env_optional(ENV_AUDIT_EVENT_ID) {
            config.audit_event_id = audit_event_id;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.audit_event_id.trim().is_empty() {
            return Err(RateSwitchError::Config(
                "audit_event_id must not be empty".to_string(),
            ));
        }
        self.eps.validate()
    }

    pub fn call_timeout(&self) -> Option<Duration> {
        self.eps.call_timeout()
    }
}

impl EpsConfig {
    pub fn validate(&self) -> Result<()> {
        for (key, path) in &self.endpoints {
            key.parse::<EpsEndpoint>()
                .map_err(|e| RateSwitchError::Config(e.to_string()))?;
            if !path.starts_with('/') {
                return Err(RateSwitchError::Config(format!(
                    "path for `{key}` must start with `/`, got `{path}`"
                )));
            }
        }
        if !self.base_url.is_empty()
            && !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://"))
        {
            return Err(RateSwitchError::Config(format!(
                "base_url must be an http(s) url, got `{}`",
                self.base_url
            )));
        }
        Ok(())
    }

    pub fn call_timeout(&self) -> Option<Duration> {
        (self.call_timeout_ms > 0).then(|| Duration::from_millis(self.call_timeout_ms))
    }

    pub fn path_for(&self, endpoint: EpsEndpoint) -> String {
        self.endpoints
            .get(endpoint.as_str())
            .cloned()
            .unwrap_or_else(|| default_path(endpoint))
    }

    pub fn url_for(&self, endpoint: EpsEndpoint) -> Result<String> {
        if self.base_url.is_empty() {
            return Err(RateSwitchError::Config(
                "eps.base_url is not configured".to_string(),
            ));
        }
        Ok(format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            self.path_for(endpoint)
        ))
    }
}

fn default_audit_event_id() -> String {
    CANCEL_RATE_SWITCH_AUDIT_EVENT_ID.to_string()
}

fn default_call_timeout_ms() -> u64 {
    DEFAULT_CALL_TIMEOUT_MS
}

fn default_path(endpoint: EpsEndpoint) -> String {
    format!("/{}", endpoint.as_str().to_lowercase().replace('_', "-"))
}

fn default_endpoint_paths() -> HashMap<String, String> {
    EpsEndpoint::ALL
        .into_iter()
        .map(|endpoint| (endpoint.as_str().to_string(), default_path(endpoint)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_carry_backend_constants() {
        let config = JourneyConfig::default();
        assert_eq!(config.audit_event_id, "823856");
        assert_eq!(config.call_timeout(), Some(Duration::from_secs(30)));
        assert_eq!(config.eps.path_for(EpsEndpoint::SendAlert), "/send-alert");
    }

    #[test]
    fn json_overrides_and_zero_timeout_disables_limit() {
        let config = JourneyConfig::from_json_str(
            r#"{
                "eps": {
                    "base_url": "https://eps.example.test/",
                    "endpoints": { "AUDIT_EVENTS": "/v2/audit" },
                    "call_timeout_ms": 0
                }
            }"#,
        )
        .unwrap();
        assert_eq!(config.call_timeout(), None);
        assert_eq!(
            config.eps.url_for(EpsEndpoint::AuditEvents).unwrap(),
            "https://eps.example.test/v2/audit"
        );
        // 未列出的端点回退到默认路径
        assert_eq!(
            config.eps.url_for(EpsEndpoint::GetAccountDetails).unwrap(),
            "https://eps.example.test/get-account-details"
        );
    }

    #[test]
    fn rejects_unknown_endpoint_keys() {
        let err = JourneyConfig::from_json_str(r#"{"eps": {"endpoints": {"YES_CANCEL_RATE": "/x"}}}"#)
            .unwrap_err();
        assert!(matches!(err, RateSwitchError::Config(_)));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"audit_event_id": "900001"}}"#).unwrap();
        let config = JourneyConfig::from_file(file.path()).unwrap();
        assert_eq!(config.audit_event_id, "900001");
    }

    #[test]
    fn url_requires_base_url() {
        assert!(EpsConfig::default().url_for(EpsEndpoint::SendAlert).is_err());
    }
}
