use dioxus::logger::tracing::Level;

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("logging unavailable: {err}");
    }
    dioxus::launch(ui::App);
}
