use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::host::Tagger;

/// 埋点页面名，取值与分析后端约定一致
pub mod page_names {
    pub const YES_CANCEL_RATE_SWITCH: &str = "yesCancelRateSwitch";
    pub const GO_BACK: &str = "goBack";
    pub const NAVIGATE: &str = "navigate";
    pub const TRY_AGAIN: &str = "tryAgain";
    pub const FINISH: &str = "finish";
}

pub const SUMMARY_PAGE_NAME: &str = "Summary";
pub const NAV_URL_COMPLETE: &str = "Complete";
pub const NAV_URL_ERROR: &str = "Error";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavMetadata {
    pub page_name: String,
    pub nav_url: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsEvent {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

impl AnalyticsEvent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            metadata: None,
        }
    }

    pub fn navigate(page_name: &str, nav_url: &str) -> Self {
        let metadata = NavMetadata {
            page_name: page_name.to_string(),
            nav_url: nav_url.to_string(),
        };
        Self {
            name: page_names::NAVIGATE.to_string(),
            metadata: serde_json::to_value(metadata).ok(),
        }
    }

    pub fn emit(&self, tagger: &dyn Tagger) {
        tagger.tag(&self.name, self.metadata.clone());
    }
}
