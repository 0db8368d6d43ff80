pub mod env;
pub mod journey;

pub use env::EnvConfig;
pub use journey::{EpsConfig, JourneyConfig, DEFAULT_CALL_TIMEOUT_MS};
