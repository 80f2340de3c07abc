#![allow(dead_code)]

#[logsmith::loggable]
pub trait Greeter {}

fn main() {}
