//! 单文件示例：默认选项、显式选项、static_only 三种用法 + 从 JSON 读取日志配置

use logsmith::prelude::*;

#[loggable]
struct Example {
    name: &'static str,
}

impl Example {
    fn greet(&self) {
        self.log_info(|| format!("hello, {}", self.name));
        self.log_verbose(|| "greeting sent");
    }
}

#[loggable(category = "Checkout", subsystem = "com.example.shop", name = "audit")]
struct Cart {
    items: Vec<u32>,
}

impl Cart {
    fn total(&self) -> u32 {
        let total: u32 = self.items.iter().sum();
        if self.items.is_empty() {
            self.log_warning(|| "empty cart");
        }
        self.log(|| format!("total = {total}"));
        total
    }
}

#[loggable(static_only = true)]
enum Phase {
    Boot,
    Ready,
}

fn main() -> anyhow::Result<()> {
    let cfg = LogConfig::from_json(r#"{ "filter": "debug", "with_target": false }"#)?;
    logsmith::init(&cfg)?;

    Phase::logger().log(format_args!("phase {}", Phase::Boot as u8));

    Example { name: "world" }.greet();

    let cart = Cart { items: vec![3, 4] };
    let total = cart.total();
    Cart::audit().info(format_args!("checked out {} items", cart.items.len()));
    Cart { items: Vec::new() }.total();

    Phase::logger().log(format_args!("phase {}", Phase::Ready as u8));
    println!("total: {total}");
    Ok(())
}
