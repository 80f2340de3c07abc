mod analyze;
mod diag;
mod emit;
mod emit_tokens;
mod msgs;
mod parse;
mod resolve;

use proc_macro::TokenStream;
use quote::quote;
use syn::Item;

use analyze::validate;
use emit::synthesize;
use emit_tokens::render;
use parse::AttributeInvocation;
use resolve::resolve;

pub fn entrypoint(args: TokenStream, input: TokenStream) -> TokenStream {
    expand(args.into(), input.into()).into()
}

// 单次展开：校验 -> 解析参数 -> 合成成员 -> 渲染；无共享状态，相同输入得到相同输出
pub(crate) fn expand(
    args: proc_macro2::TokenStream,
    input: proc_macro2::TokenStream,
) -> proc_macro2::TokenStream {
    let item: Item = match syn::parse2(input) {
        Ok(item) => item,
        Err(e) => return e.to_compile_error(),
    };
    // 校验失败时原样保留条目，只追加一条错误，避免连带报错
    let target = match validate(&item) {
        Ok(target) => target,
        Err(e) => {
            let err = e.to_compile_error();
            return quote! { #item #err };
        }
    };
    let invocation: AttributeInvocation = match syn::parse2(args) {
        Ok(invocation) => invocation,
        Err(e) => {
            let err = e.to_compile_error();
            return quote! { #item #err };
        }
    };
    let config = resolve(&invocation, &target.ident);
    let members = synthesize(config);
    let generated = render(&target, &members);
    quote! {
        #item
        #generated
    }
}
