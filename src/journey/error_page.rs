use std::sync::Arc;

use serde_json::Value;
use tracing::info;

use super::analytics::{page_names, AnalyticsEvent};
use super::cancellation::CancellationWorkflow;
use super::outcome::{TryAgain, WorkflowOutcome};
use crate::host::{Destination, Navigator};

pub const ERROR_ROUTE: &str = "error";

/// 错误页：根据 `tryAgain` 决定重试哪个流程
pub struct ErrorPage {
    workflow: Arc<CancellationWorkflow>,
    navigator: Arc<dyn Navigator>,
}

impl ErrorPage {
    pub fn new(workflow: Arc<CancellationWorkflow>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            workflow,
            navigator,
        }
    }

    pub fn mount(&self) {
        self.workflow.api().route_tracker.set(ERROR_ROUTE);
    }

    /// “重试”：确认流程直接重跑，其余回到账户概览重新加载
    pub async fn try_again(&self, state: Option<&Value>) -> Option<WorkflowOutcome> {
        AnalyticsEvent::new(page_names::TRY_AGAIN).emit(self.workflow.api().tagger.as_ref());

        match state.and_then(TryAgain::from_state) {
            Some(TryAgain::Confirmation) => {
                info!("retrying cancellation from error page");
                Some(self.workflow.confirm().await)
            }
            Some(TryAgain::AccountSummary) | None => {
                self.navigator.navigate(Destination::Summary, None);
                None
            }
        }
    }

    pub fn go_back(&self) {
        AnalyticsEvent::new(page_names::GO_BACK).emit(self.workflow.api().tagger.as_ref());
        self.navigator.back();
    }
}
