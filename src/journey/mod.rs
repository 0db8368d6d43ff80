//! 取消利率切换旅程
//!
//! - `AccountSummary`: 拉取账户详情，失败跳转错误页
//! - `CancellationWorkflow`: 审计 → 提醒两步调用与结果判定
//! - `ErrorPage` / `SuccessPage`: 结果页上的重试、返回与完成

pub mod account_summary;
pub mod analytics;
pub mod cancellation;
pub mod error_page;
pub mod outcome;
pub mod success_page;

pub use account_summary::{AccountDetails, AccountSummary, SummaryView};
pub use analytics::{page_names, AnalyticsEvent, NavMetadata};
pub use cancellation::CancellationWorkflow;
pub use error_page::{ErrorPage, ERROR_ROUTE};
pub use outcome::{CancellationStage, TryAgain, WorkflowOutcome};
pub use success_page::{SuccessPage, COMPLETE_ROUTE};
