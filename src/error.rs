//! logsmith 运行期错误：最小化枚举，手写 Display，不引入第三方错误栈。
use std::{error::Error as StdError, fmt};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogsmithError {
    InvalidFilter(String), // 过滤指令无法解析
    InvalidConfig(String), // 配置文本无法反序列化
    SubscriberInstalled,   // 全局 subscriber 已存在
}

impl fmt::Display for LogsmithError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogsmithError::InvalidFilter(e) => write!(f, "invalid log filter: {e}"),
            LogsmithError::InvalidConfig(e) => write!(f, "invalid log config: {e}"),
            LogsmithError::SubscriberInstalled => {
                write!(f, "a global tracing subscriber is already installed")
            }
        }
    }
}
impl StdError for LogsmithError {}

pub type Result<T = ()> = std::result::Result<T, LogsmithError>;
