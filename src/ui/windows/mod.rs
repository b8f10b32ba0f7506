mod procedure;
mod surface;
mod toolkit;

pub use procedure::wnd_proc_router;
pub use toolkit::Win32Toolkit;
