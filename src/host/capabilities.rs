use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 全局加载指示（fire-and-forget）
pub trait LoadManager: Send + Sync {
    fn loading(&self, on: bool);
}

/// 埋点发送
pub trait Tagger: Send + Sync {
    fn tag(&self, event: &str, metadata: Option<Value>);
}

/// 旅程内的页面
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Destination {
    Summary,
    Success,
    Error,
}

impl Destination {
    pub fn path(&self) -> &'static str {
        match self {
            Destination::Summary => "/",
            Destination::Success => "/successPage",
            Destination::Error => "/errorPage",
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// 页面导航
pub trait Navigator: Send + Sync {
    fn navigate(&self, destination: Destination, state: Option<Value>);
    /// 返回历史上一页
    fn back(&self);
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallbackUrls {
    #[serde(default)]
    pub close_url: String,
}

/// 宿主应用通信通道
pub trait HostChannel: Send + Sync {
    fn callback_urls(&self) -> CallbackUrls;
    fn send_to_host(&self, event: Value);
}
