#[logsmith::loggable(category = "UI", name = "ui_logger")]
struct ViewController;

#[logsmith::loggable(static_only = true)]
enum Mode {
    On,
}

impl ViewController {
    fn appear(&self) {
        self.log_info(|| "appeared");
        self.ui_logger().debug("direct");
    }
}

fn main() {
    ViewController.appear();
    let _ = ViewController::ui_logger();
    let _ = Mode::On;
    Mode::logger().log("static only");
}
