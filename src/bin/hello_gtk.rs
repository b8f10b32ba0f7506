use hellowin::{app::run_greeter, core::{logging, Resources}, ui::gtk::GtkShell};

fn main() {
    let resources = Resources::default();
    if let Err(e) = logging::init(&resources) {
        eprintln!("Error: {}", e);
    }

    log::warn!("Starting GTK Hello World");
    let status = run_greeter(GtkShell::new());
    log::warn!("Exiting GTK Hello World ({})", status);
    std::process::exit(status);
}
