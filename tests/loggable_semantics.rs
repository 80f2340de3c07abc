mod common;

use common::capture;
use logsmith::{Logger, UNKNOWN_APP_IDENTIFIER};

mod consts {
    pub const CATEGORY: &str = "payments";
    pub fn subsystem() -> String {
        format!("com.example.{}", "billing")
    }
}

#[logsmith::loggable]
#[derive(Default)]
struct Widget {
    id: u32,
}

impl Widget {
    fn touch(&self) {
        self.log_info(|| format!("touched {}", self.id));
    }
}

#[logsmith::loggable(category = "UI", subsystem = "com.example.ui", name = "ui_logger", static_only = false)]
struct ViewController;

#[logsmith::loggable(static_only = true)]
#[derive(Debug, Clone, Copy)]
enum Mode {
    On,
    Off,
}

#[logsmith::loggable(category = consts::CATEGORY, subsystem = consts::subsystem())]
struct Payments;

#[logsmith::loggable(category = concat!("net", ".", "socket"))]
#[allow(dead_code)]
union Bits {
    i: u32,
    f: f32,
}

#[allow(dead_code)]
enum Either<L, R> {
    Left(L),
    Right(R),
}

#[logsmith::loggable(subsystem = "engine.core")]
impl<L: Clone, R> Either<L, R> {
    fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }
}

#[test]
fn defaults_use_type_name_and_package_identifier() {
    let l = Widget::logger();
    assert_eq!(l.category(), "Widget");
    assert_eq!(l.subsystem(), env!("CARGO_PKG_NAME"));
    assert_ne!(l.subsystem(), UNKNOWN_APP_IDENTIFIER);
}

#[test]
fn static_singleton_is_shared_by_every_instance() {
    let a = Widget { id: 1 };
    let b = Widget { id: 2 };
    assert!(std::ptr::eq(a.logger(), b.logger()));
    assert!(std::ptr::eq(a.logger(), Widget::logger()));
    assert!(std::ptr::eq(Widget::logger(), Widget::logger()));
}

#[test]
fn explicit_options_rename_and_configure() {
    let l: &'static Logger = ViewController::ui_logger();
    assert_eq!(l.category(), "UI");
    assert_eq!(l.subsystem(), "com.example.ui");
    assert!(std::ptr::eq(ViewController.ui_logger(), l));

    let records = capture(|| ViewController.log_error(|| "boom"));
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].category, "UI");
    assert_eq!(records[0].subsystem, "com.example.ui");
}

#[test]
fn static_only_enum_has_just_the_shared_logger() {
    let l = Mode::logger();
    assert_eq!(l.category(), "Mode");
    let records = capture(|| Mode::logger().info(format_args!("mode {:?}", Mode::On)));
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].message, "mode On");
    let _ = Mode::Off;
}

#[test]
fn expressions_are_evaluated_not_quoted() {
    let l = Payments::logger();
    assert_eq!(l.category(), "payments");
    assert_eq!(l.subsystem(), "com.example.billing");
}

#[test]
fn union_and_generic_impl_targets() {
    assert_eq!(Bits::logger().category(), "net.socket");
    let bits = Bits { i: 7 };
    let records = capture(|| bits.log_verbose(|| "bits"));
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].level, tracing::Level::DEBUG);

    let l = Either::<u8, ()>::logger();
    assert_eq!(l.category(), "Either");
    assert_eq!(l.subsystem(), "engine.core");
    let e: Either<u8, ()> = Either::Left(1);
    assert!(e.is_left());
    // 所有单态化共享同一个实例
    assert!(std::ptr::eq(e.logger(), Either::<String, u64>::logger()));
}

#[test]
fn helpers_map_levels_and_markers() {
    let w = Widget::default();
    let records = capture(|| {
        w.log_debug(|| "d");
        w.log_info(|| "i");
        w.log_error(|| "e");
        w.log(|| "l");
        w.log_verbose(|| "v");
        w.log_warning(|| "w");
        w.log_critical(|| "c");
    });
    let got: Vec<(tracing::Level, &str, &str)> = records
        .iter()
        .map(|r| (r.level, r.severity.as_str(), r.message.as_str()))
        .collect();
    assert_eq!(
        got,
        vec![
            (tracing::Level::DEBUG, "debug", "📝 d"),
            (tracing::Level::INFO, "info", "ℹ️ i"),
            (tracing::Level::ERROR, "error", "❌ e"),
            (tracing::Level::INFO, "default", "📜 l"),
            (tracing::Level::DEBUG, "debug", "💬 v"),
            (tracing::Level::ERROR, "error", "⚠️ w"),
            (tracing::Level::ERROR, "fault", "💣 c"),
        ]
    );
    assert!(records.iter().all(|r| r.category == "Widget"));
}

#[test]
fn helpers_report_the_callers_location() {
    let w = Widget::default();
    let mut line = 0;
    let records = capture(|| {
        line = line!();
        w.log_info(|| "here");
    });
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].file, file!());
    assert_eq!(records[0].line, u64::from(line + 1));
}

#[test]
fn methods_on_the_type_use_the_generated_helpers() {
    let records = capture(|| Widget { id: 9 }.touch());
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].message, "ℹ️ touched 9");
}
