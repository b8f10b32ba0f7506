//! Hello World windows: a hand-written Win32 message loop and a GTK
//! application whose loop belongs to the toolkit.

pub mod app;
pub mod core;
pub mod error;
pub mod framework;
pub mod ui;

pub use error::{Error, Result};
