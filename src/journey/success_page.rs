use std::sync::Arc;

use super::analytics::{page_names, AnalyticsEvent};
use crate::api::JourneyApi;
use crate::host::{create_close_event, HostChannel};

pub const COMPLETE_ROUTE: &str = "complete";

pub struct SuccessPage {
    api: JourneyApi,
    channel: Arc<dyn HostChannel>,
}

impl SuccessPage {
    pub fn new(api: JourneyApi, channel: Arc<dyn HostChannel>) -> Self {
        Self { api, channel }
    }

    pub fn mount(&self) {
        self.api.route_tracker.set(COMPLETE_ROUTE);
    }

    /// “完成”：通知宿主关闭旅程
    pub fn finish(&self) {
        AnalyticsEvent::new(page_names::FINISH).emit(self.api.tagger.as_ref());
        create_close_event(self.channel.as_ref());
    }
}
