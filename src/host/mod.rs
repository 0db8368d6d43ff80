// 宿主能力模块：导航、埋点、加载层、退出桥

mod capabilities;
mod exit;
mod modal;
mod recording;
mod route;

pub use capabilities::{CallbackUrls, Destination, HostChannel, LoadManager, Navigator, Tagger};
pub use exit::{
    create_close_event, exit_application, DeviceInfo, ExitBridge, ExitMessage, Platform,
    ANDROID_EXIT_EVENT, IOS_EXIT_HANDLER, SUCCESS_PAGE_EVENT,
};
pub use modal::{DynModalObserver, LoaderGuard, ModalObserver, ModalState};
pub use recording::{HostEvent, RecordingHost};
pub use route::RouteTracker;
