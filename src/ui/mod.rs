pub mod shared;

#[cfg(windows)]
pub mod windows;

#[cfg(feature = "gtk")]
pub mod gtk;
