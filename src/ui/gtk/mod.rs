use gtk4 as gtk;
use gtk::{gio, prelude::*};

use crate::app::greeter::{ActivateFn, Shell};

/// GTK 4 application with no id and default flags.
#[derive(Default)]
pub struct GtkShell;

impl GtkShell {
    pub fn new() -> Self {
        GtkShell
    }
}

fn application() -> gtk::Application {
    gtk::Application::new(None::<&str>, gio::ApplicationFlags::default())
}

impl Shell for GtkShell {
    fn run(self, activate: ActivateFn) -> i32 {
        let app = application();

        app.connect_activate(move |app| {
            let blueprint = activate();
            log::info!("Activated, building window '{}'", blueprint.title);

            let label = gtk::Label::new(Some(&blueprint.label));
            let window = gtk::ApplicationWindow::builder()
                .application(app)
                .title(blueprint.title.as_str())
                .default_width(blueprint.default_width)
                .default_height(blueprint.default_height)
                .child(&label)
                .build();

            if blueprint.visible {
                window.present();
            }
        });

        // Process arguments are accepted and ignored.
        let status = app.run_with_args::<&str>(&[]);
        i32::from(status.value())
    }
}
