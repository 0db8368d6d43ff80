use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

use super::capabilities::HostChannel;

pub const IOS_EXIT_HANDLER: &str = "BMBiOSHandler";
pub const ANDROID_EXIT_EVENT: &str = "exitMca2Journey";
pub const SUCCESS_PAGE_EVENT: &str = "successPage";

/// 宿主设备信息，由调用方显式传入而不是读取全局对象
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceInfo {
    #[serde(default)]
    pub user_agent: String,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub max_touch_points: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    Ios,
    Android,
    Web,
}

impl Platform {
    pub fn detect(device: &DeviceInfo) -> Self {
        let ios_platform = ["iPad", "iPhone", "iPod"]
            .iter()
            .any(|name| device.platform.contains(name));
        // iPadOS 以桌面 Mac 身份上报
        let touch_mac = device.platform == "MacIntel" && device.max_touch_points > 1;

        if ios_platform || touch_mac {
            Platform::Ios
        } else if device.user_agent.contains("Android") {
            Platform::Android
        } else {
            Platform::Web
        }
    }
}

/// 发给原生壳的退出消息
#[derive(Clone, Debug, PartialEq)]
pub enum ExitMessage {
    Ios { handler: &'static str, payload: Value },
    Android { event: &'static str, payload: String },
}

impl ExitMessage {
    pub fn for_platform(platform: Platform) -> Option<Self> {
        match platform {
            Platform::Ios => Some(ExitMessage::Ios {
                handler: IOS_EXIT_HANDLER,
                payload: json!({ "name": "back", "shouldRefresh": false }),
            }),
            Platform::Android => Some(ExitMessage::Android {
                event: ANDROID_EXIT_EVENT,
                payload: json!({ "shouldRefresh": false }).to_string(),
            }),
            Platform::Web => None,
        }
    }
}

/// 原生退出桥
pub trait ExitBridge: Send + Sync {
    fn post(&self, message: ExitMessage);
}

/// 退出旅程；Web 平台没有原生壳，直接忽略
pub fn exit_application(platform: Platform, bridge: &dyn ExitBridge) {
    match ExitMessage::for_platform(platform) {
        Some(message) => bridge.post(message),
        None => debug!(?platform, "no native shell to exit to"),
    }
}

/// 向宿主发送成功页关闭事件
pub fn create_close_event(channel: &dyn HostChannel) {
    let urls = channel.callback_urls();
    channel.send_to_host(json!({
        "event": SUCCESS_PAGE_EVENT,
        "url": urls.close_url,
    }));
}
