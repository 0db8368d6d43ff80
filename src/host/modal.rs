use std::sync::Arc;

/// 弹窗 / 加载层的显式状态
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    pub is_open: bool,
}

impl ModalState {
    pub fn closed() -> Self {
        Self { is_open: false }
    }

    pub fn open(self) -> Self {
        Self { is_open: true }
    }

    pub fn close(self) -> Self {
        Self { is_open: false }
    }
}

/// 由父组件持有，接收状态变化
pub trait ModalObserver: Send + Sync {
    fn on_change(&self, state: ModalState);
}

pub type DynModalObserver = Arc<dyn ModalObserver>;

/// 加载层作用域守卫
///
/// 创建时打开，drop 时关闭；每次获取恰好对应一次打开和一次关闭。
pub struct LoaderGuard {
    observer: DynModalObserver,
    state: ModalState,
}

impl LoaderGuard {
    pub fn acquire(observer: DynModalObserver) -> Self {
        let state = ModalState::closed().open();
        observer.on_change(state);
        Self { observer, state }
    }

    pub fn state(&self) -> ModalState {
        self.state
    }
}

impl Drop for LoaderGuard {
    fn drop(&mut self) {
        self.state = self.state.close();
        self.observer.on_change(self.state);
    }
}
