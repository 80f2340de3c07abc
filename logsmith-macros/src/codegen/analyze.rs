use proc_macro2::Span;
use syn::{parse_quote, Generics, Ident, Item, Type, Visibility};

use super::diag::{report, DiagnosticKind};

// 目标判别：封闭集合，逐一匹配；其余一律拒绝

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TargetKind {
    Struct,
    Enum,
    Union,
    /// 具名类型上的固有 impl 块
    Impl,
}

/// 通过校验的目标：后续阶段只读使用
pub struct TargetDecl {
    pub kind: TargetKind,
    pub ident: Ident,
    pub vis: Visibility,
    pub generics: Generics,
    pub self_ty: Type,
}

impl TargetDecl {
    fn nominal(kind: TargetKind, ident: &Ident, vis: &Visibility, generics: &Generics) -> Self {
        let (_, ty_generics, _) = generics.split_for_impl();
        let self_ty: Type = parse_quote!(#ident #ty_generics);
        Self {
            kind,
            ident: ident.clone(),
            vis: vis.clone(),
            generics: generics.clone(),
            self_ty,
        }
    }

    /// 伴生 trait 的可见性；impl 块看不到类型本身的可见性，一律 pub
    pub fn accessor_vis(&self) -> Visibility {
        match self.kind {
            TargetKind::Impl => parse_quote!(pub),
            TargetKind::Struct | TargetKind::Enum | TargetKind::Union => self.vis.clone(),
        }
    }
}

pub fn validate(item: &Item) -> syn::Result<TargetDecl> {
    match item {
        Item::Struct(s) => Ok(TargetDecl::nominal(
            TargetKind::Struct,
            &s.ident,
            &s.vis,
            &s.generics,
        )),
        Item::Enum(e) => Ok(TargetDecl::nominal(
            TargetKind::Enum,
            &e.ident,
            &e.vis,
            &e.generics,
        )),
        Item::Union(u) => Ok(TargetDecl::nominal(
            TargetKind::Union,
            &u.ident,
            &u.vis,
            &u.generics,
        )),
        // trait impl 不是类型本身的扩展；self 类型必须能解析出名字
        Item::Impl(i) if i.trait_.is_none() => match named_self_type(&i.self_ty) {
            Some(ident) => Ok(TargetDecl {
                kind: TargetKind::Impl,
                ident,
                vis: Visibility::Inherited,
                generics: i.generics.clone(),
                self_ty: (*i.self_ty).clone(),
            }),
            None => Err(report(DiagnosticKind::UnsupportedTargetKind, Span::call_site())),
        },
        _ => Err(report(DiagnosticKind::UnsupportedTargetKind, Span::call_site())),
    }
}

fn named_self_type(ty: &Type) -> Option<Ident> {
    match ty {
        Type::Path(tp) if tp.qself.is_none() => tp.path.segments.last().map(|s| s.ident.clone()),
        Type::Group(g) => named_self_type(&g.elem),
        Type::Paren(p) => named_self_type(&p.elem),
        _ => None,
    }
}
