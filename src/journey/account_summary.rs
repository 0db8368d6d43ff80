use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{instrument, warn};

use super::analytics::{page_names, AnalyticsEvent};
use super::cancellation::CancellationWorkflow;
use super::outcome::TryAgain;
use crate::api::JourneyApi;
use crate::eps::{load_from_eps, EpsEndpoint};
use crate::format::{currency_converter, formatted_sort_code};
use crate::host::{exit_application, Destination, ExitBridge, ModalState, Navigator, Platform};

/// 账户详情，字段按后端返回原样保存（字符串或数字均可）
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDetails {
    #[serde(default)]
    pub direct_debit_sort_code: Option<Value>,
    #[serde(default)]
    pub direct_debit_account_number: Option<Value>,
    #[serde(default)]
    pub total_loan_balance: Option<Value>,
    #[serde(default)]
    pub product: Option<Value>,
    #[serde(default)]
    pub new_interest_rate: Option<Value>,
    #[serde(default)]
    pub new_start_date: Option<Value>,
}

impl AccountDetails {
    /// 从响应体 `{ data: {...} }` 中解析；缺少 `data` 或不是对象时得到空详情
    pub fn from_response(body: &Value) -> Self {
        match body.get("data") {
            Some(data @ Value::Object(_)) => {
                serde_json::from_value(data.clone()).unwrap_or_default()
            }
            Some(other) => {
                warn!(data = %other, "account details `data` is not an object");
                Self::default()
            }
            None => Self::default(),
        }
    }

    pub fn account_number(&self) -> String {
        as_text(&self.direct_debit_account_number)
    }

    pub fn product_name(&self) -> String {
        as_text(&self.product)
    }

    pub fn start_date(&self) -> String {
        as_text(&self.new_start_date)
    }

    /// 数值余额格式化为金额，已格式化的文本原样返回
    pub fn display_balance(&self) -> String {
        match &self.total_loan_balance {
            Some(Value::Number(number)) => currency_converter(number.as_f64()),
            other => as_text(other),
        }
    }

    pub fn display_sort_code(&self) -> String {
        let code = as_text(&self.direct_debit_sort_code);
        if !code.is_empty() && code.chars().all(|ch| ch.is_ascii_digit()) {
            formatted_sort_code(&code, " ")
        } else {
            code
        }
    }

    pub fn display_interest_rate(&self) -> String {
        match &self.new_interest_rate {
            Some(Value::Number(number)) => format!("{number}%"),
            other => as_text(other),
        }
    }
}

fn as_text(field: &Option<Value>) -> String {
    match field {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SummaryView {
    Loading,
    Loaded(AccountDetails),
    /// 已跳转到错误页
    Redirected,
}

/// 账户概览页
pub struct AccountSummary {
    api: JourneyApi,
    navigator: Arc<dyn Navigator>,
    exit_bridge: Arc<dyn ExitBridge>,
    platform: Platform,
    view: SummaryView,
    confirmation: ModalState,
}

impl AccountSummary {
    pub fn new(
        api: JourneyApi,
        navigator: Arc<dyn Navigator>,
        exit_bridge: Arc<dyn ExitBridge>,
        platform: Platform,
    ) -> Self {
        Self {
            api,
            navigator,
            exit_bridge,
            platform,
            view: SummaryView::Loading,
            confirmation: ModalState::closed(),
        }
    }

    /// 挂载时拉取一次账户详情；失败直接跳转错误页，不自动重试
    #[instrument(skip(self))]
    pub async fn mount(&mut self) -> &SummaryView {
        let result = load_from_eps(EpsEndpoint::GetAccountDetails, &self.api, None).await;

        self.view = if result.is_error {
            self.navigator
                .navigate(Destination::Error, Some(TryAgain::AccountSummary.state()));
            SummaryView::Redirected
        } else {
            let details = result
                .response()
                .map(AccountDetails::from_response)
                .unwrap_or_default();
            SummaryView::Loaded(details)
        };
        &self.view
    }

    pub fn view(&self) -> &SummaryView {
        &self.view
    }

    pub fn account(&self) -> Option<&AccountDetails> {
        match &self.view {
            SummaryView::Loaded(details) => Some(details),
            _ => None,
        }
    }

    pub fn confirmation(&self) -> ModalState {
        self.confirmation
    }

    /// “取消利率切换”按钮
    pub fn open_confirmation(&mut self) -> ModalState {
        self.confirmation = self.confirmation.open();
        self.confirmation
    }

    pub fn close_confirmation(&mut self) -> ModalState {
        self.confirmation = self.confirmation.close();
        self.confirmation
    }

    /// 在确认弹窗中选择返回
    pub fn decline_cancellation(&mut self, workflow: &CancellationWorkflow) -> ModalState {
        workflow.decline(|| self.confirmation = self.confirmation.close());
        self.confirmation
    }

    /// 页面上的“返回”：退出整个旅程
    pub fn go_back(&self) {
        AnalyticsEvent::new(page_names::GO_BACK).emit(self.api.tagger.as_ref());
        exit_application(self.platform, self.exit_bridge.as_ref());
    }
}
