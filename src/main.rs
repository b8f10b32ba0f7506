#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use hellowin::{core::{logging, Resources}, Result};

#[cfg(windows)]
fn run_native() -> Result<i32> {
    use hellowin::{app::Application, ui::windows::Win32Toolkit};

    let mut toolkit = Win32Toolkit::new()?;
    Application::create().run(&mut toolkit)
}

#[cfg(not(windows))]
fn run_native() -> Result<i32> {
    Err(hellowin::Error::Unsupported("Win32"))
}

fn run() -> Result<i32> {
    let resources = Resources::default();
    if let Err(e) = logging::init(&resources) {
        eprintln!("Error: {}", e);
    }

    log::warn!("Starting Win32 Hello World");
    let code = run_native()?;
    log::warn!("Exiting Win32 Hello World ({})", code);
    Ok(code)
}

fn main() {
    match run() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
