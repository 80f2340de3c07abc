use proc_macro2::TokenStream;
use syn::ext::IdentExt;
use syn::{Ident, LitStr};

use super::emit::HELPERS;
use super::parse::{classify, ArgValue, AttributeInvocation};

pub const DEFAULT_ACCESSOR: &str = "logger";

/// 嵌入生成代码的值表达式
pub enum Expression {
    /// 重新加引号的规范字符串字面量
    Quoted(LitStr),
    /// 非字面量参数，原样透传
    Raw(TokenStream),
    /// 宿主应用标识，不可用时退回固定常量
    AppIdentifier,
}

/// 每次展开解析一次，只读
pub struct ResolvedConfig {
    pub category: Expression,
    pub subsystem: Expression,
    pub accessor_name: Ident,
    pub static_only: bool,
}

pub fn resolve(attr: &AttributeInvocation, target_name: &Ident) -> ResolvedConfig {
    let category = resolve_expression(classify(attr.find("category"))).unwrap_or_else(|| {
        Expression::Quoted(LitStr::new(
            &target_name.unraw().to_string(),
            target_name.span(),
        ))
    });
    let subsystem = resolve_expression(classify(attr.find("subsystem")))
        .unwrap_or(Expression::AppIdentifier);
    ResolvedConfig {
        category,
        subsystem,
        accessor_name: resolve_accessor_name(classify(attr.find("name"))),
        static_only: resolve_static_only(classify(attr.find("static_only"))),
    }
}

// category / subsystem：字面量重新加引号；其他形态原样透传；缺省返回 None
fn resolve_expression(value: ArgValue) -> Option<Expression> {
    match value {
        ArgValue::Absent => None,
        ArgValue::Literal(text, span) => Some(Expression::Quoted(LitStr::new(&text, span))),
        ArgValue::BoolLiteral(b) => Some(Expression::Raw(quote::quote!(#b))),
        ArgValue::RawExpression(tokens) => Some(Expression::Raw(tokens)),
    }
}

// name 只接受合法标识符的字符串字面量，且不得与辅助方法同名；否则静默使用默认值
fn resolve_accessor_name(value: ArgValue) -> Ident {
    if let ArgValue::Literal(text, span) = value {
        if let Ok(mut ident) = syn::parse_str::<Ident>(&text) {
            let plain = ident.unraw();
            if !HELPERS.iter().any(|h| plain == h.method) {
                ident.set_span(span);
                return ident;
            }
        }
    }
    Ident::new(DEFAULT_ACCESSOR, proc_macro2::Span::call_site())
}

// static_only 只接受布尔字面量，否则静默为 false
fn resolve_static_only(value: ArgValue) -> bool {
    match value {
        ArgValue::BoolLiteral(b) => b.value,
        _ => false,
    }
}
