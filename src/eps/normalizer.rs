use std::panic::AssertUnwindSafe;
use std::time::Duration;

use futures::FutureExt;
use serde_json::Value;
use tokio::time::timeout;
use tracing::{debug, instrument, warn};

use super::endpoint::EpsEndpoint;
use super::transport::TransportResponse;
use crate::api::JourneyApi;
use crate::error::RateSwitchError;
use crate::host::LoadManager;

/// 调用结果负载：后端响应体，或捕获到的错误
#[derive(Debug)]
pub enum CallPayload {
    Response(Value),
    Exception(RateSwitchError),
}

/// 统一的调用结果
///
/// `is_error` 仅在状态码不在 2xx 范围或传输失败时为 true。
#[derive(Debug)]
pub struct CallResult {
    pub is_error: bool,
    pub payload: CallPayload,
}

impl CallResult {
    pub fn success(data: Value) -> Self {
        Self {
            is_error: false,
            payload: CallPayload::Response(data),
        }
    }

    pub fn failure(data: Value) -> Self {
        Self {
            is_error: true,
            payload: CallPayload::Response(data),
        }
    }

    pub fn exception(error: RateSwitchError) -> Self {
        Self {
            is_error: true,
            payload: CallPayload::Exception(error),
        }
    }

    pub fn response(&self) -> Option<&Value> {
        match &self.payload {
            CallPayload::Response(data) => Some(data),
            CallPayload::Exception(_) => None,
        }
    }

    pub fn exception_ref(&self) -> Option<&RateSwitchError> {
        match &self.payload {
            CallPayload::Response(_) => None,
            CallPayload::Exception(error) => Some(error),
        }
    }

    pub fn into_response(self) -> Option<Value> {
        match self.payload {
            CallPayload::Response(data) => Some(data),
            CallPayload::Exception(_) => None,
        }
    }
}

impl From<TransportResponse> for CallResult {
    fn from(response: TransportResponse) -> Self {
        if response.is_success() {
            CallResult::success(response.data)
        } else {
            CallResult::failure(response.data)
        }
    }
}

/// 调用结束时关闭全局加载状态，覆盖所有退出路径（包括 future 被丢弃）
struct ClearOnSettle<'a>(&'a dyn LoadManager);

impl Drop for ClearOnSettle<'_> {
    fn drop(&mut self) {
        self.0.loading(false);
    }
}

/// 调用一次 EPS 端点并归一化为 `CallResult`
///
/// 传输错误、超时和 panic 都在这里被吸收，调用方永远拿到一个结果。
#[instrument(skip_all, fields(endpoint = %endpoint))]
pub async fn fetch_from_eps(
    endpoint: EpsEndpoint,
    api: &JourneyApi,
    body: Option<Value>,
) -> CallResult {
    let _settle = ClearOnSettle(api.load_manager.as_ref());

    let call = AssertUnwindSafe(api.service.call(endpoint, body)).catch_unwind();
    let outcome = match api.call_timeout {
        Some(limit) => match timeout(limit, call).await {
            Ok(outcome) => outcome,
            Err(_) => {
                warn!(timeout_ms = as_millis(limit), "eps call timed out");
                return CallResult::exception(RateSwitchError::Timeout {
                    endpoint: endpoint.as_str().to_string(),
                    elapsed_ms: as_millis(limit),
                });
            }
        },
        None => call.await,
    };

    match outcome {
        Ok(Ok(response)) => {
            let status = response.status;
            let result = CallResult::from(response);
            if result.is_error {
                warn!(status, "eps call returned non-success status");
            } else {
                debug!(status, "eps call succeeded");
            }
            result
        }
        Ok(Err(error)) => {
            warn!(error = %error, "eps call failed");
            CallResult::exception(error)
        }
        Err(_) => {
            warn!("eps transport panicked");
            CallResult::exception(RateSwitchError::Panicked(endpoint.as_str().to_string()))
        }
    }
}

/// 打开全局加载状态后调用 `fetch_from_eps`，开关次数始终成对
pub async fn load_from_eps(
    endpoint: EpsEndpoint,
    api: &JourneyApi,
    body: Option<Value>,
) -> CallResult {
    api.load_manager.loading(true);
    fetch_from_eps(endpoint, api, body).await
}

fn as_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
