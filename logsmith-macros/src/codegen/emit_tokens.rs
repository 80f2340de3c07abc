use proc_macro2::{Span, TokenStream};
use quote::{format_ident, quote};
use syn::Ident;

use super::analyze::TargetDecl;
use super::emit::{GeneratedMember, HelperSpec};
use super::msgs::{DOC_INSTANCE_ACCESSOR, DOC_STATIC_LOGGER};
use super::resolve::Expression;

// 边界层：结构化片段 -> 目标语法。固有项合并进一个 impl，实例访问器落在伴生 trait 上

pub fn render_expression(expr: &Expression) -> TokenStream {
    match expr {
        Expression::Quoted(lit) => quote! { #lit },
        Expression::Raw(tokens) => tokens.clone(),
        Expression::AppIdentifier => quote! {
            ::core::option_env!("CARGO_PKG_NAME").unwrap_or(::logsmith::UNKNOWN_APP_IDENTIFIER)
        },
    }
}

fn render_static(name: &Ident, subsystem: &Expression, category: &Expression) -> TokenStream {
    let subsystem = render_expression(subsystem);
    let category = render_expression(category);
    quote! {
        #[doc = #DOC_STATIC_LOGGER]
        #[allow(non_snake_case)]
        pub fn #name() -> &'static ::logsmith::Logger {
            static __LOGSMITH_SHARED: ::std::sync::OnceLock<::logsmith::Logger> =
                ::std::sync::OnceLock::new();
            __LOGSMITH_SHARED.get_or_init(|| ::logsmith::Logger::new(#subsystem, #category))
        }
    }
}

fn render_helper(helper: &HelperSpec, accessor: &Ident) -> TokenStream {
    let method = Ident::new(helper.method, Span::call_site());
    let call = Ident::new(helper.level.call(), Span::call_site());
    let variant = Ident::new(helper.level.variant(), Span::call_site());
    let marker = helper.marker;
    let doc = format!(
        "Logs at `{}` level with the `{}` marker; `message` runs only if that level is enabled.",
        helper.level.call(),
        marker
    );
    // 泛型参数名需避开目标类型自身的泛型
    quote! {
        #[doc = #doc]
        #[track_caller]
        pub fn #method<__LogsmithMessage: ::core::fmt::Display>(
            &self,
            message: impl ::core::ops::FnOnce() -> __LogsmithMessage,
        ) {
            let shared = Self::#accessor();
            if shared.enabled(::logsmith::Level::#variant) {
                shared.#call(::core::format_args!("{} {}", #marker, message()));
            }
        }
    }
}

pub fn accessor_trait_ident(target: &TargetDecl, name: &Ident) -> Ident {
    format_ident!("__{}_{}Access", target.ident, name)
}

fn render_accessor(target: &TargetDecl, name: &Ident) -> TokenStream {
    let (impl_generics, _, where_clause) = target.generics.split_for_impl();
    let self_ty = &target.self_ty;
    let vis = target.accessor_vis();
    let trait_ident = accessor_trait_ident(target, name);
    quote! {
        #[doc = #DOC_INSTANCE_ACCESSOR]
        #[doc(hidden)]
        #[allow(non_camel_case_types, non_snake_case)]
        #vis trait #trait_ident {
            fn #name(&self) -> &'static ::logsmith::Logger;
        }
        #[allow(non_snake_case)]
        impl #impl_generics #trait_ident for #self_ty #where_clause {
            #[inline]
            fn #name(&self) -> &'static ::logsmith::Logger {
                <#self_ty>::#name()
            }
        }
    }
}

pub fn render(target: &TargetDecl, members: &[GeneratedMember]) -> TokenStream {
    let (impl_generics, _, where_clause) = target.generics.split_for_impl();
    let self_ty = &target.self_ty;
    let mut inherent = Vec::new();
    let mut companions = Vec::new();
    for member in members {
        match member {
            GeneratedMember::StaticSingleton {
                name,
                subsystem,
                category,
            } => inherent.push(render_static(name, subsystem, category)),
            GeneratedMember::InstanceAccessor { name } => {
                companions.push(render_accessor(target, name))
            }
            GeneratedMember::LeveledHelper { helper, accessor } => {
                inherent.push(render_helper(helper, accessor))
            }
        }
    }
    quote! {
        impl #impl_generics #self_ty #where_clause {
            #( #inherent )*
        }
        #( #companions )*
    }
}
