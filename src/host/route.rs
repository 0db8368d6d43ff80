use std::sync::Arc;

use parking_lot::RwLock;

/// 当前路由标记，宿主据此判断用户所在页面
#[derive(Clone, Default)]
pub struct RouteTracker {
    route: Arc<RwLock<String>>,
}

impl RouteTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, route: impl Into<String>) {
        *self.route.write() = route.into();
    }

    pub fn route(&self) -> String {
        self.route.read().clone()
    }
}

impl std::fmt::Debug for RouteTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteTracker")
            .field("route", &*self.route.read())
            .finish()
    }
}
