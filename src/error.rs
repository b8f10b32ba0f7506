use std::fmt::{self, Display, Formatter};

#[derive(Debug)]
pub enum Error {
    /// A toolkit call reported failure. `code` is the last-error or HRESULT value.
    Toolkit {
        function: &'static str,
        code: u32,
    },
    WindowCreation(String),
    Logging(String),
    /// The binary was started on a platform that lacks the named toolkit.
    Unsupported(&'static str),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::Toolkit { function, code } => write!(f, "{function} failed (error {code:#010x})"),
            Error::WindowCreation(reason) => write!(f, "Window creation failed: {reason}"),
            Error::Logging(reason) => write!(f, "Logging setup failed: {reason}"),
            Error::Unsupported(toolkit) => write!(f, "{toolkit} is not available on this platform"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(windows)]
impl From<windows::core::Error> for Error {
    fn from(e: windows::core::Error) -> Self {
        // HRESULT bits reinterpreted for display, Win32 errors show as 0x8007xxxx
        Error::Toolkit {
            function: "windows",
            code: e.code().0 as u32,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
