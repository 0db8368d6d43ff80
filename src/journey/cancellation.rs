use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{info, instrument, warn};

use super::analytics::{page_names, AnalyticsEvent};
use super::outcome::{CancellationStage, WorkflowOutcome};
use crate::api::JourneyApi;
use crate::eps::{audit_event_body, load_from_eps, EpsEndpoint};
use crate::host::{DynModalObserver, LoaderGuard, Navigator};

/// 取消利率切换流程控制器
///
/// 确认后依次调用审计事件与发送提醒两个端点：
/// - 审计失败时不再发送提醒
/// - 任一步失败都导航到错误页，并携带 `tryAgain: "confirmation"`
/// - 加载层由作用域守卫持有，在发出结果前关闭
///
/// 同一控制器上的多次确认串行执行，加载层同一时间只属于一次调用。
pub struct CancellationWorkflow {
    api: JourneyApi,
    navigator: Arc<dyn Navigator>,
    loader: DynModalObserver,
    in_flight: Mutex<()>,
}

impl CancellationWorkflow {
    pub fn new(api: JourneyApi, navigator: Arc<dyn Navigator>, loader: DynModalObserver) -> Self {
        Self {
            api,
            navigator,
            loader,
            in_flight: Mutex::new(()),
        }
    }

    /// 覆盖 `JourneyApi` 上配置的审计事件 ID
    pub fn with_audit_event_id(mut self, audit_event_id: impl Into<String>) -> Self {
        self.api.audit_event_id = audit_event_id.into();
        self
    }

    pub fn api(&self) -> &JourneyApi {
        &self.api
    }

    /// 用户确认取消
    #[instrument(skip(self))]
    pub async fn confirm(&self) -> WorkflowOutcome {
        let _exclusive = self.in_flight.lock().await;

        let stage = {
            let _loader = LoaderGuard::acquire(Arc::clone(&self.loader));
            self.run_calls().await
        };

        info!(?stage, "cancellation workflow settled");
        let outcome = WorkflowOutcome::for_stage(stage);
        outcome.emit(self.navigator.as_ref(), self.api.tagger.as_ref());
        outcome
    }

    /// 用户放弃取消：只发送 `goBack` 埋点并关闭弹窗，不发起任何调用
    pub fn decline<F>(&self, on_close: F)
    where
        F: FnOnce(),
    {
        AnalyticsEvent::new(page_names::GO_BACK).emit(self.api.tagger.as_ref());
        on_close();
    }

    async fn run_calls(&self) -> CancellationStage {
        let audit = load_from_eps(
            EpsEndpoint::AuditEvents,
            &self.api,
            Some(audit_event_body(&self.api.audit_event_id)),
        )
        .await;
        if audit.is_error {
            warn!("audit event rejected, alert not sent");
            return CancellationStage::AuditFailed;
        }

        let alert = load_from_eps(EpsEndpoint::SendAlert, &self.api, None).await;
        if alert.is_error {
            warn!("send alert failed");
            return CancellationStage::AlertFailed;
        }

        CancellationStage::AllSucceeded
    }
}
