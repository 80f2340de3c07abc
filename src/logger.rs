//! 日志门面：#[loggable] 生成的代码只依赖这里的 `Logger` / `Level`。
//! 后端固定为 `tracing`，subsystem 与 category 作为结构化字段随事件输出。
use std::borrow::Cow;
use std::fmt;
use std::panic::Location;

/// 宿主应用标识不可用时的兜底 subsystem
pub const UNKNOWN_APP_IDENTIFIER: &str = "com.unknown.app";

/// 后端分级（default 与 fault 分别落到 tracing 的 INFO / ERROR）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Debug,
    Info,
    Default,
    Error,
    Fault,
}

impl Level {
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Default => "default",
            Level::Error => "error",
            Level::Fault => "fault",
        }
    }

    pub const fn as_tracing(self) -> tracing::Level {
        match self {
            Level::Debug => tracing::Level::DEBUG,
            Level::Info | Level::Default => tracing::Level::INFO,
            Level::Error | Level::Fault => tracing::Level::ERROR,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 按 (subsystem, category) 区分的分级日志器
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Logger {
    subsystem: Cow<'static, str>,
    category: Cow<'static, str>,
}

impl Logger {
    pub fn new(
        subsystem: impl Into<Cow<'static, str>>,
        category: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            subsystem: subsystem.into(),
            category: category.into(),
        }
    }

    pub fn subsystem(&self) -> &str {
        &self.subsystem
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// 当前 subscriber 是否会记录该级别
    pub fn enabled(&self, level: Level) -> bool {
        match level {
            Level::Debug => tracing::enabled!(tracing::Level::DEBUG),
            Level::Info | Level::Default => tracing::enabled!(tracing::Level::INFO),
            Level::Error | Level::Fault => tracing::enabled!(tracing::Level::ERROR),
        }
    }

    #[track_caller]
    pub fn debug(&self, message: impl fmt::Display) {
        self.emit(Level::Debug, message)
    }

    #[track_caller]
    pub fn info(&self, message: impl fmt::Display) {
        self.emit(Level::Info, message)
    }

    #[track_caller]
    pub fn log(&self, message: impl fmt::Display) {
        self.emit(Level::Default, message)
    }

    #[track_caller]
    pub fn error(&self, message: impl fmt::Display) {
        self.emit(Level::Error, message)
    }

    #[track_caller]
    pub fn fault(&self, message: impl fmt::Display) {
        self.emit(Level::Fault, message)
    }

    /// 记录一条事件；file/line 取自调用方（经 #[track_caller] 逐层透传）
    #[track_caller]
    pub fn emit(&self, level: Level, message: impl fmt::Display) {
        let caller = Location::caller();
        let subsystem: &str = &self.subsystem;
        let category: &str = &self.category;
        let severity = level.as_str();
        // tracing 的级别必须是常量，逐级展开
        match level {
            Level::Debug => tracing::event!(
                tracing::Level::DEBUG,
                subsystem,
                category,
                severity,
                file = caller.file(),
                line = caller.line(),
                "{}",
                message
            ),
            Level::Info | Level::Default => tracing::event!(
                tracing::Level::INFO,
                subsystem,
                category,
                severity,
                file = caller.file(),
                line = caller.line(),
                "{}",
                message
            ),
            Level::Error | Level::Fault => tracing::event!(
                tracing::Level::ERROR,
                subsystem,
                category,
                severity,
                file = caller.file(),
                line = caller.line(),
                "{}",
                message
            ),
        }
    }
}
