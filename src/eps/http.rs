use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::instrument;

use super::endpoint::EpsEndpoint;
use super::transport::{EpsService, TransportResponse};
use crate::config::EpsConfig;
use crate::error::{RateSwitchError, Result};

/// 基于 reqwest 的 EPS 服务
///
/// 所有端点统一以 JSON POST 调用；非 2xx 状态照常返回，由上层归一化。
#[derive(Clone)]
pub struct HttpEpsService {
    client: reqwest::Client,
    config: EpsConfig,
}

impl HttpEpsService {
    pub fn new(config: EpsConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .pool_max_idle_per_host(4)
            .pool_idle_timeout(Duration::from_secs(90))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| RateSwitchError::Config(format!("failed to build http client: {e}")))?;
        Ok(Self { client, config })
    }

    fn url_for(&self, endpoint: EpsEndpoint) -> Result<String> {
        self.config.url_for(endpoint)
    }
}

#[async_trait]
impl EpsService for HttpEpsService {
    #[instrument(skip_all, fields(endpoint = %endpoint))]
    async fn call(&self, endpoint: EpsEndpoint, body: Option<Value>) -> Result<TransportResponse> {
        let url = self.url_for(endpoint)?;
        let mut request = self
            .client
            .post(&url)
            .header("Content-Type", "application/json");
        if let Some(body) = &body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| RateSwitchError::transport(endpoint.as_str(), e.to_string()))?;
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| RateSwitchError::transport(endpoint.as_str(), e.to_string()))?;

        let data = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).unwrap_or(Value::String(text))
        };

        Ok(TransportResponse::new(status, data))
    }
}
