use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;

use super::endpoint::EpsEndpoint;
use super::transport::{EpsService, TransportResponse};
use crate::error::{RateSwitchError, Result};

/// 预设的一次应答
#[derive(Clone, Debug)]
pub enum ScriptedReply {
    Respond(TransportResponse),
    Fail(String),
    /// 永不返回，用于验证超时
    Hang,
    Panic(String),
}

impl ScriptedReply {
    pub fn status(status: u16, data: Value) -> Self {
        ScriptedReply::Respond(TransportResponse::new(status, data))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RecordedCall {
    pub endpoint: EpsEndpoint,
    pub body: Option<Value>,
}

/// 内存脚本化 EPS 服务
///
/// 每个端点按入队顺序回放应答；队列耗尽后使用默认应答，没有默认应答则返回传输错误。
#[derive(Default)]
pub struct ScriptedEpsService {
    replies: Mutex<HashMap<EpsEndpoint, VecDeque<ScriptedReply>>>,
    defaults: Mutex<HashMap<EpsEndpoint, ScriptedReply>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedEpsService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&self, endpoint: EpsEndpoint, reply: ScriptedReply) -> &Self {
        self.replies
            .lock()
            .entry(endpoint)
            .or_default()
            .push_back(reply);
        self
    }

    pub fn with_reply(self, endpoint: EpsEndpoint, reply: ScriptedReply) -> Self {
        self.enqueue(endpoint, reply);
        self
    }

    pub fn with_default(self, endpoint: EpsEndpoint, reply: ScriptedReply) -> Self {
        self.defaults.lock().insert(endpoint, reply);
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self, endpoint: EpsEndpoint) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| call.endpoint == endpoint)
            .count()
    }

    fn next_reply(&self, endpoint: EpsEndpoint) -> Option<ScriptedReply> {
        let queued = self
            .replies
            .lock()
            .get_mut(&endpoint)
            .and_then(|queue| queue.pop_front());
        queued.or_else(|| self.defaults.lock().get(&endpoint).cloned())
    }
}

#[async_trait]
impl EpsService for ScriptedEpsService {
    async fn call(&self, endpoint: EpsEndpoint, body: Option<Value>) -> Result<TransportResponse> {
        self.calls.lock().push(RecordedCall { endpoint, body });

        match self.next_reply(endpoint) {
            Some(ScriptedReply::Respond(response)) => Ok(response),
            Some(ScriptedReply::Fail(message)) => {
                Err(RateSwitchError::transport(endpoint.as_str(), message))
            }
            Some(ScriptedReply::Hang) => futures::future::pending().await,
            Some(ScriptedReply::Panic(message)) => panic!("{message}"),
            None => Err(RateSwitchError::transport(
                endpoint.as_str(),
                "no scripted reply",
            )),
        }
    }
}
