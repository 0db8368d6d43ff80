//! EPS 后端访问模块
//!
//! - `EpsEndpoint`: 与后端约定的端点标识
//! - `EpsService`: 传输层 trait，可替换为 HTTP 或脚本化实现
//! - `fetch_from_eps`: 把任意一次调用归一化为 `CallResult`

pub mod endpoint;
#[cfg(feature = "http-transport")]
pub mod http;
pub mod normalizer;
pub mod scripted;
pub mod transport;

pub use endpoint::{audit_event_body, EpsEndpoint, CANCEL_RATE_SWITCH_AUDIT_EVENT_ID};
#[cfg(feature = "http-transport")]
pub use http::HttpEpsService;
pub use normalizer::{fetch_from_eps, load_from_eps, CallPayload, CallResult};
pub use scripted::{RecordedCall, ScriptedEpsService, ScriptedReply};
pub use transport::{DynEpsService, EpsService, TransportResponse};
