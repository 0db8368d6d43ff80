use parking_lot::Mutex;
use serde_json::Value;

use super::capabilities::{CallbackUrls, Destination, HostChannel, LoadManager, Navigator, Tagger};
use super::exit::{ExitBridge, ExitMessage};
use super::modal::{ModalObserver, ModalState};

/// 宿主侧发生的一次交互
#[derive(Clone, Debug, PartialEq)]
pub enum HostEvent {
    Loading(bool),
    Loader(bool),
    Tag {
        name: String,
        metadata: Option<Value>,
    },
    Navigate {
        destination: Destination,
        state: Option<Value>,
    },
    Back,
    Exit(ExitMessage),
    SentToHost(Value),
}

/// 记录所有宿主交互的内存实现
///
/// 按发生顺序保存事件，便于断言顺序；CLI 模拟器也用它输出过程。
#[derive(Default)]
pub struct RecordingHost {
    events: Mutex<Vec<HostEvent>>,
    close_url: String,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_close_url(mut self, url: impl Into<String>) -> Self {
        self.close_url = url.into();
        self
    }

    pub fn events(&self) -> Vec<HostEvent> {
        self.events.lock().clone()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }

    pub fn tags(&self) -> Vec<(String, Option<Value>)> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                HostEvent::Tag { name, metadata } => Some((name.clone(), metadata.clone())),
                _ => None,
            })
            .collect()
    }

    pub fn tag_names(&self) -> Vec<String> {
        self.tags().into_iter().map(|(name, _)| name).collect()
    }

    pub fn navigations(&self) -> Vec<(Destination, Option<Value>)> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                HostEvent::Navigate { destination, state } => Some((*destination, state.clone())),
                _ => None,
            })
            .collect()
    }

    pub fn loader_transitions(&self) -> Vec<bool> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                HostEvent::Loader(open) => Some(*open),
                _ => None,
            })
            .collect()
    }

    pub fn loading_calls(&self) -> Vec<bool> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                HostEvent::Loading(on) => Some(*on),
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: HostEvent) {
        self.events.lock().push(event);
    }
}

impl LoadManager for RecordingHost {
    fn loading(&self, on: bool) {
        self.push(HostEvent::Loading(on));
    }
}

impl Tagger for RecordingHost {
    fn tag(&self, event: &str, metadata: Option<Value>) {
        self.push(HostEvent::Tag {
            name: event.to_string(),
            metadata,
        });
    }
}

impl Navigator for RecordingHost {
    fn navigate(&self, destination: Destination, state: Option<Value>) {
        self.push(HostEvent::Navigate { destination, state });
    }

    fn back(&self) {
        self.push(HostEvent::Back);
    }
}

impl ModalObserver for RecordingHost {
    fn on_change(&self, state: ModalState) {
        self.push(HostEvent::Loader(state.is_open));
    }
}

impl ExitBridge for RecordingHost {
    fn post(&self, message: ExitMessage) {
        self.push(HostEvent::Exit(message));
    }
}

impl HostChannel for RecordingHost {
    fn callback_urls(&self) -> CallbackUrls {
        CallbackUrls {
            close_url: self.close_url.clone(),
        }
    }

    fn send_to_host(&self, event: Value) {
        self.push(HostEvent::SentToHost(event));
    }
}
