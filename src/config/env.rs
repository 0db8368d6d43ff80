use std::env;
use std::str::FromStr;

use crate::error::{RateSwitchError, Result};

pub const ENV_EPS_BASE_URL: &str = "RATESWITCH_EPS_BASE_URL";
pub const ENV_CALL_TIMEOUT_MS: &str = "RATESWITCH_CALL_TIMEOUT_MS";
pub const ENV_AUDIT_EVENT_ID: &str = "RATESWITCH_AUDIT_EVENT_ID";
pub const ENV_DEBUG: &str = "RATESWITCH_DEBUG";

/// 环境变量配置管理
pub struct EnvConfig;

impl EnvConfig {
    /// 获取可选的环境变量，空字符串视为未设置
    pub fn get_env_optional(key: &str) -> Option<String> {
        env::var(key).ok().filter(|value| !value.trim().is_empty())
    }

    /// 获取并解析可选的环境变量
    pub fn get_env_parsed<T>(key: &str) -> Result<Option<T>>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match Self::get_env_optional(key) {
            Some(raw) => raw.trim().parse::<T>().map(Some).map_err(|e| {
                RateSwitchError::Config(format!("invalid value `{raw}` for `{key}`: {e}"))
            }),
            None => Ok(None),
        }
    }

    /// 检查是否启用调试模式
    pub fn is_debug_mode() -> bool {
        env::var(ENV_DEBUG).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_env_parsed() {
        env::set_var("RATESWITCH_TEST_PARSED", "1500");
        let value: Option<u64> = EnvConfig::get_env_parsed("RATESWITCH_TEST_PARSED").unwrap();
        assert_eq!(value, Some(1500));

        env::set_var("RATESWITCH_TEST_PARSED", "soon");
        assert!(EnvConfig::get_env_parsed::<u64>("RATESWITCH_TEST_PARSED").is_err());
        env::remove_var("RATESWITCH_TEST_PARSED");
    }

    #[test]
    fn test_missing_env() {
        env::remove_var("RATESWITCH_TEST_MISSING");
        assert_eq!(EnvConfig::get_env_optional("RATESWITCH_TEST_MISSING"), None);
        assert_eq!(EnvConfig::get_env_parsed::<u64>("RATESWITCH_TEST_MISSING").unwrap(), None);

        env::set_var("RATESWITCH_TEST_MISSING", "  ");
        assert_eq!(EnvConfig::get_env_optional("RATESWITCH_TEST_MISSING"), None);
        env::remove_var("RATESWITCH_TEST_MISSING");
    }
}
