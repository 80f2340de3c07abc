use syn::Ident;

use super::resolve::{Expression, ResolvedConfig};

/// 后端分级：与 `logsmith::Level` 一一对应
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackendLevel {
    Debug,
    Info,
    Default,
    Error,
    Fault,
}

impl BackendLevel {
    /// `logsmith::Logger` 上对应的方法名
    pub fn call(self) -> &'static str {
        match self {
            BackendLevel::Debug => "debug",
            BackendLevel::Info => "info",
            BackendLevel::Default => "log",
            BackendLevel::Error => "error",
            BackendLevel::Fault => "fault",
        }
    }

    /// `logsmith::Level` 的变体名
    pub fn variant(self) -> &'static str {
        match self {
            BackendLevel::Debug => "Debug",
            BackendLevel::Info => "Info",
            BackendLevel::Default => "Default",
            BackendLevel::Error => "Error",
            BackendLevel::Fault => "Fault",
        }
    }
}

pub struct HelperSpec {
    pub method: &'static str,
    pub level: BackendLevel,
    pub marker: &'static str,
}

// 固定顺序；verbose 复用 debug，warning 复用 error
pub static HELPERS: [HelperSpec; 7] = [
    HelperSpec { method: "log_debug", level: BackendLevel::Debug, marker: "📝" },
    HelperSpec { method: "log_info", level: BackendLevel::Info, marker: "ℹ️" },
    HelperSpec { method: "log_error", level: BackendLevel::Error, marker: "❌" },
    HelperSpec { method: "log", level: BackendLevel::Default, marker: "📜" },
    HelperSpec { method: "log_verbose", level: BackendLevel::Debug, marker: "💬" },
    HelperSpec { method: "log_warning", level: BackendLevel::Error, marker: "⚠️" },
    HelperSpec { method: "log_critical", level: BackendLevel::Fault, marker: "💣" },
];

/// 结构化的生成片段；具体语法在 emit_tokens 中落地
pub enum GeneratedMember {
    StaticSingleton {
        name: Ident,
        subsystem: Expression,
        category: Expression,
    },
    InstanceAccessor {
        name: Ident,
    },
    LeveledHelper {
        helper: &'static HelperSpec,
        accessor: Ident,
    },
}

pub fn synthesize(config: ResolvedConfig) -> Vec<GeneratedMember> {
    let ResolvedConfig {
        category,
        subsystem,
        accessor_name,
        static_only,
    } = config;
    let mut members = Vec::with_capacity(2 + HELPERS.len());
    members.push(GeneratedMember::StaticSingleton {
        name: accessor_name.clone(),
        subsystem,
        category,
    });
    if static_only {
        return members;
    }
    members.push(GeneratedMember::InstanceAccessor {
        name: accessor_name.clone(),
    });
    for helper in HELPERS.iter() {
        members.push(GeneratedMember::LeveledHelper {
            helper,
            accessor: accessor_name.clone(),
        });
    }
    members
}
