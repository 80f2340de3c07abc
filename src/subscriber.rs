use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;
use crate::error::{LogsmithError, Result};

/// 安装全局 fmt subscriber；已存在时返回 `SubscriberInstalled`。
/// `RUST_LOG` 可解析时覆盖 `cfg.filter`。
pub fn try_init(cfg: &LogConfig) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(f) => f,
        Err(_) => cfg.build_filter()?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(cfg.ansi)
        .with_target(cfg.with_target)
        .try_init()
        .map_err(|_| LogsmithError::SubscriberInstalled)
}

/// 与 `try_init` 相同，但已有 subscriber 时仅告警并沿用现有的。
pub fn init(cfg: &LogConfig) -> Result<()> {
    match try_init(cfg) {
        Err(LogsmithError::SubscriberInstalled) => {
            tracing::warn!(filter = %cfg.filter, "subscriber already installed; keeping the existing one");
            Ok(())
        }
        other => other,
    }
}
