//! 测试用 tracing 采集层：记录每个事件的级别与 logsmith 字段。
#![allow(dead_code)]

use std::fmt;
use std::sync::{Arc, Mutex};

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Debug)]
pub struct Record {
    pub level: tracing::Level,
    pub message: String,
    pub subsystem: String,
    pub category: String,
    pub severity: String,
    pub file: String,
    pub line: u64,
}

#[derive(Default)]
struct FieldVisitor {
    message: String,
    subsystem: String,
    category: String,
    severity: String,
    file: String,
    line: u64,
}

impl FieldVisitor {
    fn set(&mut self, name: &str, value: String) {
        match name {
            "message" => self.message = value,
            "subsystem" => self.subsystem = value,
            "category" => self.category = value,
            "severity" => self.severity = value,
            "file" => self.file = value,
            _ => {}
        }
    }
}

impl Visit for FieldVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.set(field.name(), value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        if field.name() == "line" {
            self.line = value;
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.set(field.name(), format!("{value:?}"));
    }
}

#[derive(Clone, Default)]
struct CaptureLayer {
    records: Arc<Mutex<Vec<Record>>>,
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut v = FieldVisitor::default();
        event.record(&mut v);
        self.records.lock().unwrap().push(Record {
            level: *event.metadata().level(),
            message: v.message,
            subsystem: v.subsystem,
            category: v.category,
            severity: v.severity,
            file: v.file,
            line: v.line,
        });
    }
}

/// 在线程局部 subscriber 下运行 `f`，返回期间产生的全部事件
pub fn capture<F: FnOnce()>(f: F) -> Vec<Record> {
    capture_at(LevelFilter::TRACE, f)
}

pub fn capture_at<F: FnOnce()>(max: LevelFilter, f: F) -> Vec<Record> {
    let layer = CaptureLayer::default();
    let records = layer.records.clone();
    let subscriber = tracing_subscriber::registry().with(max).with(layer);
    tracing::subscriber::with_default(subscriber, f);
    let out = records.lock().unwrap().clone();
    out
}

/// 与 `capture_at` 相同，但按 EnvFilter 指令过滤
pub fn capture_filtered<F: FnOnce()>(filter: EnvFilter, f: F) -> Vec<Record> {
    let layer = CaptureLayer::default();
    let records = layer.records.clone();
    let subscriber = tracing_subscriber::registry().with(filter).with(layer);
    tracing::subscriber::with_default(subscriber, f);
    let out = records.lock().unwrap().clone();
    out
}
