#[logsmith::loggable]
struct Wrapper<M> {
    m: M,
}

#[logsmith::loggable(name = "log")]
struct Widget;

impl<M: std::fmt::Debug> Wrapper<M> {
    fn show(&self) {
        self.log_info(|| format!("{:?}", self.m));
    }
}

fn main() {
    let w = Wrapper { m: 3u8 };
    w.log_info(|| "x");
    w.show();
    let _ = Wrapper::<String>::logger();

    Widget.log(|| "plain");
    let _ = Widget::logger();
    let _ = Widget.logger();
}
