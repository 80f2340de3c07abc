use proc_macro2::Span;

use super::msgs::ERR_LOGGABLE_TARGET;

// 诊断分类：目前只有一种硬错误；所有选项都有默认值，不存在“缺少必填项”。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiagnosticKind {
    UnsupportedTargetKind,
}

impl DiagnosticKind {
    pub fn message(self) -> &'static str {
        match self {
            DiagnosticKind::UnsupportedTargetKind => ERR_LOGGABLE_TARGET,
        }
    }
}

/// 在属性所在位置生成单条错误；调用方决定是否继续输出原始条目。
pub fn report(kind: DiagnosticKind, span: Span) -> syn::Error {
    syn::Error::new(span, kind.message())
}
