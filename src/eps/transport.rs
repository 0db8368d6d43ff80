use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::endpoint::EpsEndpoint;
use crate::error::Result;

/// 传输层返回的原始响应
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransportResponse {
    pub status: u16,
    #[serde(default)]
    pub data: Value,
}

impl TransportResponse {
    pub fn new(status: u16, data: Value) -> Self {
        Self { status, data }
    }

    pub fn ok(data: Value) -> Self {
        Self::new(200, data)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// EPS 服务 trait
///
/// 实现方只负责把请求送达后端；状态码的成败判断由 `fetch_from_eps` 统一处理。
#[async_trait]
pub trait EpsService: Send + Sync {
    async fn call(&self, endpoint: EpsEndpoint, body: Option<Value>) -> Result<TransportResponse>;
}

pub type DynEpsService = Arc<dyn EpsService>;
