use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::analytics::{
    page_names, AnalyticsEvent, NAV_URL_COMPLETE, NAV_URL_ERROR, SUMMARY_PAGE_NAME,
};
use crate::host::{Destination, Navigator, Tagger};

pub const TRY_AGAIN_KEY: &str = "tryAgain";

/// 错误页“重试”时应重新进入的流程
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TryAgain {
    Confirmation,
    AccountSummary,
}

impl TryAgain {
    pub fn as_str(&self) -> &'static str {
        match self {
            TryAgain::Confirmation => "confirmation",
            TryAgain::AccountSummary => "accountSummary",
        }
    }

    /// 错误页导航携带的状态：`{ tryAgain: ... }`
    pub fn state(&self) -> Value {
        json!({ TRY_AGAIN_KEY: self.as_str() })
    }

    pub fn from_state(state: &Value) -> Option<Self> {
        state
            .get(TRY_AGAIN_KEY)
            .cloned()
            .and_then(|value| serde_json::from_value(value).ok())
    }
}

/// 取消流程的终态
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CancellationStage {
    AuditFailed,
    AlertFailed,
    AllSucceeded,
}

impl CancellationStage {
    pub fn is_success(&self) -> bool {
        matches!(self, CancellationStage::AllSucceeded)
    }
}

/// 一次流程的最终结果，生成后不再修改
#[derive(Clone, Debug, PartialEq)]
pub struct WorkflowOutcome {
    destination: Destination,
    state: Option<Value>,
    events: Vec<AnalyticsEvent>,
}

impl WorkflowOutcome {
    pub fn success(events: Vec<AnalyticsEvent>) -> Self {
        Self {
            destination: Destination::Success,
            state: None,
            events,
        }
    }

    pub fn error(try_again: TryAgain, events: Vec<AnalyticsEvent>) -> Self {
        Self {
            destination: Destination::Error,
            state: Some(try_again.state()),
            events,
        }
    }

    pub fn for_stage(stage: CancellationStage) -> Self {
        match stage {
            CancellationStage::AllSucceeded => Self::success(vec![
                AnalyticsEvent::new(page_names::YES_CANCEL_RATE_SWITCH),
                AnalyticsEvent::navigate(SUMMARY_PAGE_NAME, NAV_URL_COMPLETE),
            ]),
            CancellationStage::AuditFailed | CancellationStage::AlertFailed => Self::error(
                TryAgain::Confirmation,
                vec![AnalyticsEvent::navigate(SUMMARY_PAGE_NAME, NAV_URL_ERROR)],
            ),
        }
    }

    pub fn destination(&self) -> Destination {
        self.destination
    }

    pub fn state(&self) -> Option<&Value> {
        self.state.as_ref()
    }

    pub fn events(&self) -> &[AnalyticsEvent] {
        &self.events
    }

    /// 先发送埋点，再导航
    pub fn emit(&self, navigator: &dyn Navigator, tagger: &dyn Tagger) {
        for event in &self.events {
            event.emit(tagger);
        }
        navigator.navigate(self.destination, self.state.clone());
    }
}
