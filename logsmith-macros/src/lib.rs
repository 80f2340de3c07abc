use proc_macro::TokenStream;

mod codegen;

/// 为具名类型挂载共享 logger 与分级日志辅助方法。
///
/// 可用于 struct / enum / union，以及具名类型上的固有 `impl` 块。
///
/// ```ignore
/// #[logsmith::loggable]
/// struct Widget;
///
/// #[logsmith::loggable(category = "UI", subsystem = "com.example.ui", name = "ui_logger")]
/// struct ViewController;
///
/// #[logsmith::loggable(static_only = true)]
/// enum Mode { On, Off }
/// ```
///
/// Options (all optional):
/// - `category`: string literal or any expression; defaults to the type name.
/// - `subsystem`: string literal or any expression; defaults to the annotated crate's
///   package name, or `logsmith::UNKNOWN_APP_IDENTIFIER`.
/// - `name`: string literal with the accessor identifier; defaults to `"logger"`.
/// - `static_only`: bool literal; when `true` only `Type::<name>()` is generated.
///
/// Generated: `Type::<name>() -> &'static Logger` (built once), an instance `<name>(&self)`
/// on a hidden companion trait, and `log_debug`, `log_info`, `log_error`, `log`,
/// `log_verbose`, `log_warning`, `log_critical`.
#[proc_macro_attribute]
pub fn loggable(args: TokenStream, input: TokenStream) -> TokenStream {
    codegen::entrypoint(args, input)
}
