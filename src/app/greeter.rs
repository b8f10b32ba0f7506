//! The toolkit-managed example. The framework owns the event loop; the program
//! only describes the window to build once the application becomes active.

pub const GREETER_TITLE: &str = "Welcome to GNOME";
pub const GREETER_LABEL: &str = "Hello GNOME!";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WindowBlueprint {
    pub title: String,
    pub default_width: i32,
    pub default_height: i32,
    pub label: String,
    pub visible: bool,
}

pub type ActivateFn = fn() -> WindowBlueprint;

/// An application framework that runs its own event loop.
pub trait Shell {
    /// Calls `activate` when the application is ready, realizes the returned
    /// window and returns the framework's exit status.
    fn run(self, activate: ActivateFn) -> i32;
}

pub fn on_activate() -> WindowBlueprint {
    WindowBlueprint {
        title: GREETER_TITLE.to_string(),
        default_width: 400,
        default_height: 200,
        label: GREETER_LABEL.to_string(),
        visible: true,
    }
}

pub fn run_greeter<S: Shell>(shell: S) -> i32 {
    log::info!("Starting toolkit-managed application");
    let status = shell.run(on_activate);
    log::info!("Application finished with status {}", status);
    status
}
