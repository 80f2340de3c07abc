pub mod config;
pub mod error;
pub mod logger;
pub mod subscriber;

// 允许在本 crate 内通过 `::logsmith::...` 自引用（供 proc-macro 展开使用）
extern crate self as logsmith;

pub mod prelude {
    pub use crate::config::LogConfig;
    pub use crate::error::{LogsmithError, Result};
    pub use crate::loggable;
    pub use crate::logger::{Level, Logger};
}

pub use config::LogConfig;
pub use logger::{Level, Logger, UNKNOWN_APP_IDENTIFIER};
pub use logsmith_macros::*;
pub use subscriber::{init, try_init};
