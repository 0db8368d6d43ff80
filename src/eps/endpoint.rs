use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::RateSwitchError;

/// 审计事件 ID，后端按此值识别“取消利率切换”事件
pub const CANCEL_RATE_SWITCH_AUDIT_EVENT_ID: &str = "823856";

/// EPS 端点标识
///
/// 标识字符串与后端约定一致，不能修改。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EpsEndpoint {
    #[serde(rename = "AUDIT_EVENTS")]
    AuditEvents,
    #[serde(rename = "SEND_ALERT")]
    SendAlert,
    #[serde(rename = "GET_ACCOUNT_DETAILS")]
    GetAccountDetails,
}

impl EpsEndpoint {
    pub const ALL: [EpsEndpoint; 3] = [
        EpsEndpoint::AuditEvents,
        EpsEndpoint::SendAlert,
        EpsEndpoint::GetAccountDetails,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EpsEndpoint::AuditEvents => "AUDIT_EVENTS",
            EpsEndpoint::SendAlert => "SEND_ALERT",
            EpsEndpoint::GetAccountDetails => "GET_ACCOUNT_DETAILS",
        }
    }
}

impl fmt::Display for EpsEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EpsEndpoint {
    type Err = RateSwitchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EpsEndpoint::ALL
            .into_iter()
            .find(|endpoint| endpoint.as_str() == s)
            .ok_or_else(|| RateSwitchError::UnknownEndpoint(s.to_string()))
    }
}

/// 构造审计事件请求体：`{ data: { attributes: [{ auditEventId }] } }`
pub fn audit_event_body(audit_event_id: &str) -> Value {
    json!({
        "data": {
            "attributes": [
                { "auditEventId": audit_event_id }
            ]
        }
    })
}
