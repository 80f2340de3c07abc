use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::error::{LogsmithError, Result};

pub const DEFAULT_FILTER: &str = "info";

/// 订阅端配置：仅影响 `init` 安装的 fmt subscriber，与生成代码无关。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// EnvFilter 指令，例如 `warn,logsmith=debug`；生成代码的事件 target 均为 `logsmith::logger`，
    /// 需按 subsystem / category 区分时读取事件字段。`RUST_LOG` 优先
    pub filter: String,
    pub ansi: bool,
    pub with_target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            ansi: true,
            with_target: true,
        }
    }
}

impl LogConfig {
    /// 从 JSON 文本读取；缺失字段取默认值。
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| LogsmithError::InvalidConfig(e.to_string()))
    }

    pub fn build_filter(&self) -> Result<EnvFilter> {
        EnvFilter::try_new(&self.filter).map_err(|e| LogsmithError::InvalidFilter(e.to_string()))
    }
}
