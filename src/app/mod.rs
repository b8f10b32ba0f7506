mod app;
pub mod greeter;
pub mod hello;

pub use app::{Application, CLASS_NAME, WINDOW_TITLE};
pub use greeter::{on_activate, run_greeter, Shell, WindowBlueprint};
pub use hello::{HelloWindow, HELLO_TEXT};
