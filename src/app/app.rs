use crate::{
    app::hello::HelloWindow,
    error::Result,
    framework::{run_message_loop, Toolkit, WindowClass, WindowId, WindowSpec},
    ui::shared::layout::Rect,
};

pub const CLASS_NAME: &str = "Sample Window Class";
pub const WINDOW_TITLE: &str = "Win32 Hello World";

/// The native example: one class, one window, one message loop.
pub struct Application {
    class: WindowClass,
    spec: WindowSpec,
}

impl Application {

    pub fn create() -> Self {
        Self {
            class: WindowClass::new(CLASS_NAME),
            spec: WindowSpec {
                class: CLASS_NAME.to_string(),
                title: WINDOW_TITLE.to_string(),
                bounds: Rect::at(400, 400, 400, 400),
            },
        }
    }

    pub fn spec(&self) -> &WindowSpec {
        &self.spec
    }

    /// Runs until the window is destroyed and returns the quit code.
    ///
    /// Registration or creation failures are returned before the loop starts,
    /// so the loop never runs against a window that does not exist.
    pub fn run<T: Toolkit>(&self, toolkit: &mut T) -> Result<i32> {
        let window = self.open(toolkit)?;
        log::info!("Window {:?} shown, entering message loop", window);
        Ok(run_message_loop(toolkit))
    }

    fn open<T: Toolkit>(&self, toolkit: &mut T) -> Result<WindowId> {
        toolkit.register_class::<HelloWindow>(&self.class).map_err(|e| {
            log::error!("Failed to register class '{}': {}", self.class.name, e);
            e
        })?;

        let window = toolkit.create_window(&self.spec).map_err(|e| {
            log::error!("Failed to create window '{}': {}", self.spec.title, e);
            e
        })?;

        toolkit.show_window(window);
        Ok(window)
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::create()
    }
}
