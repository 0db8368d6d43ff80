pub mod api;
pub mod cli;
pub mod config;
pub mod eps;
pub mod error;
pub mod format;
pub mod host;
pub mod journey;
pub mod utils;

pub use api::JourneyApi;
pub use cli::{simulate_journey, SimulationReport, SimulationScript, StepScript};
pub use config::{EnvConfig, EpsConfig, JourneyConfig};
#[cfg(feature = "http-transport")]
pub use eps::HttpEpsService;
pub use eps::{
    fetch_from_eps, load_from_eps, CallPayload, CallResult, DynEpsService, EpsEndpoint,
    EpsService, ScriptedEpsService, ScriptedReply, TransportResponse,
};
pub use error::{RateSwitchError, Result};
pub use format::{currency_converter, formatted_sort_code};
pub use host::{
    Destination, DeviceInfo, ExitBridge, HostChannel, HostEvent, LoadManager, LoaderGuard,
    ModalObserver, ModalState, Navigator, Platform, RecordingHost, RouteTracker, Tagger,
};
pub use journey::{
    AccountDetails, AccountSummary, AnalyticsEvent, CancellationStage, CancellationWorkflow,
    ErrorPage, SuccessPage, SummaryView, TryAgain, WorkflowOutcome,
};
pub use utils::logging;
