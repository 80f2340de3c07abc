#![allow(dead_code)]

struct Widget;

#[logsmith::loggable(category = "widgets")]
impl Clone for Widget {
    fn clone(&self) -> Self {
        Widget
    }
}

fn main() {}
