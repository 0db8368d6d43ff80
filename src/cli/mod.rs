use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use serde_json::{json, Value};

use crate::api::JourneyApi;
use crate::eps::{EpsEndpoint, RecordedCall, ScriptedEpsService, ScriptedReply};
use crate::error::RateSwitchError;
use crate::host::{HostEvent, Platform, RecordingHost};
use crate::journey::{AccountSummary, CancellationWorkflow, SummaryView, WorkflowOutcome};

/// 模拟中某个端点的应答
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepScript {
    Status(u16),
    NetworkError,
}

impl StepScript {
    fn reply(self, data: Value) -> ScriptedReply {
        match self {
            StepScript::Status(status) => ScriptedReply::status(status, data),
            StepScript::NetworkError => ScriptedReply::Fail("connection reset".to_string()),
        }
    }
}

impl FromStr for StepScript {
    type Err = RateSwitchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "network" | "network-error" => Ok(StepScript::NetworkError),
            raw => raw.parse::<u16>().map(StepScript::Status).map_err(|_| {
                RateSwitchError::Config(format!(
                    "expected an http status or `network`, got `{raw}`"
                ))
            }),
        }
    }
}

#[derive(Clone, Debug)]
pub struct SimulationScript {
    pub account: StepScript,
    pub audit: StepScript,
    pub alert: StepScript,
    pub call_timeout: Option<Duration>,
}

impl Default for SimulationScript {
    fn default() -> Self {
        Self {
            account: StepScript::Status(200),
            audit: StepScript::Status(200),
            alert: StepScript::Status(200),
            call_timeout: Some(Duration::from_secs(5)),
        }
    }
}

#[derive(Clone, Debug)]
pub struct SimulationReport {
    pub summary: SummaryView,
    pub outcome: Option<WorkflowOutcome>,
    pub events: Vec<HostEvent>,
    pub calls: Vec<RecordedCall>,
}

pub fn sample_account_response() -> Value {
    json!({
        "data": {
            "directDebitSortCode": "123456",
            "directDebitAccountNumber": "12345678",
            "totalLoanBalance": 100000,
            "product": "Fixed Rate Mortgage",
            "newInterestRate": 2.5,
            "newStartDate": "2024-10-01"
        }
    })
}

/// 用脚本化传输跑一遍“概览 → 确认取消”
pub async fn simulate_journey(script: &SimulationScript) -> SimulationReport {
    let service = Arc::new(
        ScriptedEpsService::new()
            .with_reply(
                EpsEndpoint::GetAccountDetails,
                script.account.reply(sample_account_response()),
            )
            .with_reply(EpsEndpoint::AuditEvents, script.audit.reply(json!({})))
            .with_reply(EpsEndpoint::SendAlert, script.alert.reply(json!({}))),
    );
    let host = Arc::new(RecordingHost::new());

    let api = JourneyApi::new(service.clone(), host.clone(), host.clone())
        .with_call_timeout(script.call_timeout);
    let workflow = CancellationWorkflow::new(api.clone(), host.clone(), host.clone());
    let mut summary = AccountSummary::new(api, host.clone(), host.clone(), Platform::Web);

    summary.mount().await;
    let outcome = if summary.account().is_some() {
        summary.open_confirmation();
        Some(workflow.confirm().await)
    } else {
        None
    };

    SimulationReport {
        summary: summary.view().clone(),
        outcome,
        events: host.events(),
        calls: service.calls(),
    }
}
