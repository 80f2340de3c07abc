use proc_macro2::{Span, TokenStream};
use quote::ToTokens;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{Expr, ExprLit, Ident, Lit, LitBool, Token};

// 低层解析：属性参数只做语法切分，不做任何语义判断

/// `[label =] expression`
pub struct AttrArg {
    pub label: Option<Ident>,
    pub expr: Expr,
}

impl Parse for AttrArg {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let label = if input.peek(Ident) && input.peek2(Token![=]) && !input.peek2(Token![==]) {
            let label: Ident = input.parse()?;
            input.parse::<Token![=]>()?;
            Some(label)
        } else {
            None
        };
        let expr: Expr = input.parse()?;
        Ok(Self { label, expr })
    }
}

/// 属性的原始参数列表（保持书写顺序）
pub struct AttributeInvocation {
    pub args: Vec<AttrArg>,
}

impl Parse for AttributeInvocation {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let list = Punctuated::<AttrArg, Token![,]>::parse_terminated(input)?;
        Ok(Self {
            args: list.into_iter().collect(),
        })
    }
}

impl AttributeInvocation {
    /// 按标签精确匹配，首个命中者生效；无标签参数永远不会命中。
    pub fn find(&self, label: &str) -> Option<&Expr> {
        self.args
            .iter()
            .find(|a| a.label.as_ref().is_some_and(|l| l == label))
            .map(|a| &a.expr)
    }
}

/// 单个选项值的分类结果
pub enum ArgValue {
    Absent,
    Literal(String, Span),
    BoolLiteral(LitBool),
    RawExpression(TokenStream),
}

pub fn classify(expr: Option<&Expr>) -> ArgValue {
    let Some(expr) = expr else {
        return ArgValue::Absent;
    };
    if let Some(text) = string_literal_value(expr) {
        return ArgValue::Literal(text, expr.span());
    }
    if let Expr::Lit(ExprLit {
        lit: Lit::Bool(b), ..
    }) = expr
    {
        return ArgValue::BoolLiteral(b.clone());
    }
    ArgValue::RawExpression(expr.to_token_stream())
}

// 字符串字面量（含全部为字面量片段的 concat!）拼接为纯文本；其他形态返回 None
fn string_literal_value(expr: &Expr) -> Option<String> {
    match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Str(s), ..
        }) => Some(s.value()),
        // macro_rules 传入的 $e:expr 会带一层不可见分组
        Expr::Group(g) => string_literal_value(&g.expr),
        Expr::Macro(m) if m.mac.path.segments.last().is_some_and(|s| s.ident == "concat") => {
            let parts = m
                .mac
                .parse_body_with(Punctuated::<Expr, Token![,]>::parse_terminated)
                .ok()?;
            parts
                .iter()
                .map(|p| match p {
                    Expr::Lit(ExprLit {
                        lit: Lit::Str(s), ..
                    }) => Some(s.value()),
                    _ => None,
                })
                .collect::<Option<Vec<_>>>()
                .map(|segments| segments.concat())
        }
        _ => None,
    }
}
