use std::sync::Arc;
use std::time::Duration;

use crate::config::{JourneyConfig, DEFAULT_CALL_TIMEOUT_MS};
use crate::eps::{DynEpsService, CANCEL_RATE_SWITCH_AUDIT_EVENT_ID};
use crate::host::{LoadManager, RouteTracker, Tagger};

/// 旅程共享的后端与宿主能力集合
#[derive(Clone)]
pub struct JourneyApi {
    pub service: DynEpsService,
    pub load_manager: Arc<dyn LoadManager>,
    pub tagger: Arc<dyn Tagger>,
    pub route_tracker: RouteTracker,
    /// 单次调用上限；`None` 表示不限时
    pub call_timeout: Option<Duration>,
    /// 审计事件请求体中的 `auditEventId`
    pub audit_event_id: String,
}

impl JourneyApi {
    pub fn new(
        service: DynEpsService,
        load_manager: Arc<dyn LoadManager>,
        tagger: Arc<dyn Tagger>,
    ) -> Self {
        Self {
            service,
            load_manager,
            tagger,
            route_tracker: RouteTracker::new(),
            call_timeout: Some(Duration::from_millis(DEFAULT_CALL_TIMEOUT_MS)),
            audit_event_id: CANCEL_RATE_SWITCH_AUDIT_EVENT_ID.to_string(),
        }
    }

    pub fn from_config(
        config: &JourneyConfig,
        service: DynEpsService,
        load_manager: Arc<dyn LoadManager>,
        tagger: Arc<dyn Tagger>,
    ) -> Self {
        Self::new(service, load_manager, tagger)
            .with_call_timeout(config.call_timeout())
            .with_audit_event_id(config.audit_event_id.clone())
    }

    pub fn with_call_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.call_timeout = timeout;
        self
    }

    pub fn with_audit_event_id(mut self, audit_event_id: impl Into<String>) -> Self {
        self.audit_event_id = audit_event_id.into();
        self
    }

    pub fn with_route_tracker(mut self, tracker: RouteTracker) -> Self {
        self.route_tracker = tracker;
        self
    }
}
