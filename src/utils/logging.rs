use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::EnvConfig;

/// 日志配置
pub struct LoggingConfig;

impl LoggingConfig {
    /// 初始化日志系统
    ///
    /// 支持通过环境变量配置：
    /// - RUST_LOG: 设置日志级别（error, warn, info, debug, trace）
    /// - RATESWITCH_DEBUG: 启用详细调试输出
    ///
    /// 使用示例：
    /// ```no_run
    /// use rateswitch::utils::LoggingConfig;
    ///
    /// fn main() {
    ///     LoggingConfig::init();
    /// }
    /// ```
    pub fn init() {
        let is_debug = Self::is_debug();

        let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            if is_debug {
                EnvFilter::new("rateswitch=debug,info")
            } else {
                EnvFilter::new("rateswitch=info,warn")
            }
        });

        let fmt_layer = fmt::layer()
            .with_target(is_debug)
            .with_file(is_debug)
            .with_line_number(is_debug)
            .with_thread_ids(is_debug);

        // 重复初始化（例如测试中）时保留已有订阅者
        let _ = tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init();

        if is_debug {
            tracing::debug!("debug logging enabled");
        }
    }

    /// 检查是否启用调试模式
    pub fn is_debug() -> bool {
        EnvConfig::is_debug_mode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_is_debug() {
        env::remove_var("RATESWITCH_DEBUG");
        assert!(!LoggingConfig::is_debug());

        env::set_var("RATESWITCH_DEBUG", "1");
        assert!(LoggingConfig::is_debug());

        env::remove_var("RATESWITCH_DEBUG");
    }
}
