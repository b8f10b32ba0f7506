use std::ffi::c_void;

use windows::{
    core::{HSTRING, PCWSTR},
    Win32::{
        Foundation::{GetLastError, HINSTANCE, HWND, LPARAM, WPARAM},
        System::LibraryLoader::GetModuleHandleW,
        UI::WindowsAndMessaging::{
            CreateWindowExW, DispatchMessageW, GetMessageW, LoadCursorW, RegisterClassW, ShowWindow,
            TranslateMessage, IDC_ARROW, MSG, SW_SHOWDEFAULT, WINDOW_EX_STYLE, WNDCLASSW, WS_OVERLAPPEDWINDOW,
        },
    },
};

use crate::{
    error::{Error, Result},
    framework::{Message, Retrieved, Toolkit, WindowClass, WindowId, WindowProcedure, WindowSpec},
};

use super::{procedure::wnd_proc_router, surface::window_brush};

/// The calling thread's Win32 windowing state.
pub struct Win32Toolkit {
    hinstance: HINSTANCE,
    // RegisterClassW keeps pointing at these names
    class_names: Vec<HSTRING>,
    current: MSG,
}

impl Win32Toolkit {

    pub fn new() -> Result<Self> {
        // SAFETY: None asks for the handle of the running executable, valid for the process lifetime.
        let hmodule = unsafe { GetModuleHandleW(None)? };
        Ok(Self {
            hinstance: hmodule.into(),
            class_names: Vec::new(),
            current: MSG::default(),
        })
    }

    // Rebuilds the native record, keeping time and cursor position of the last retrieval.
    fn native(&self, message: &Message) -> MSG {
        MSG {
            hwnd: to_hwnd(message.window),
            message: message.kind.raw(),
            wParam: WPARAM(message.wparam),
            lParam: LPARAM(message.lparam),
            ..self.current
        }
    }
}

impl Toolkit for Win32Toolkit {
    fn register_class<P>(&mut self, class: &WindowClass) -> Result<()>
    where
        P: WindowProcedure + Default + 'static,
    {
        let name = HSTRING::from(class.name.as_str());
        let cursor = unsafe { LoadCursorW(None, IDC_ARROW)? };

        let wndclass = WNDCLASSW {
            hInstance: self.hinstance,
            lpszClassName: PCWSTR(name.as_ptr()),
            lpfnWndProc: Some(wnd_proc_router::<P>),
            hCursor: cursor,
            hbrBackground: window_brush(),
            ..Default::default()
        };

        // SAFETY: wndclass is fully initialised and `name` outlives the call.
        let atom = unsafe { RegisterClassW(&wndclass) };
        if atom == 0 {
            return Err(last_error("RegisterClassW"));
        }

        log::debug!("Registered class '{}' (atom {})", class.name, atom);
        self.class_names.push(name);
        Ok(())
    }

    fn create_window(&mut self, spec: &WindowSpec) -> Result<WindowId> {
        let bounds = spec.bounds;
        // SAFETY: the class was registered with this module instance; no creation data is passed.
        let hwnd = unsafe {
            CreateWindowExW(
                WINDOW_EX_STYLE(0),
                &HSTRING::from(spec.class.as_str()),
                &HSTRING::from(spec.title.as_str()),
                WS_OVERLAPPEDWINDOW,
                bounds.left,
                bounds.top,
                bounds.width(),
                bounds.height(),
                None,
                None,
                Some(self.hinstance),
                None,
            )
        }
        .map_err(|e| Error::WindowCreation(format!("'{}': {}", spec.title, e)))?;

        log::debug!("Created window '{}' {:?} at {:?}", spec.title, hwnd, bounds);
        Ok(WindowId(hwnd.0 as isize))
    }

    fn show_window(&mut self, window: WindowId) {
        // Return value is the previous visibility, not an error.
        unsafe {
            let _ = ShowWindow(to_hwnd(window), SW_SHOWDEFAULT);
        }
    }

    fn get_message(&mut self) -> Retrieved {
        let mut msg = MSG::default();
        // SAFETY: msg is a valid out pointer; None and 0,0 accept every message of this thread.
        let ret = unsafe { GetMessageW(&mut msg, None, 0, 0) };

        match ret.0 {
            -1 => Retrieved::Failed(last_error("GetMessageW")),
            0 => Retrieved::Quit(msg.wParam.0 as i32),
            _ => {
                self.current = msg;
                Retrieved::Message(Message::new(
                    WindowId(msg.hwnd.0 as isize),
                    msg.message,
                    msg.wParam.0,
                    msg.lParam.0,
                ))
            }
        }
    }

    fn translate_message(&mut self, message: &Message) {
        let msg = self.native(message);
        // Return value only says whether a character message was generated.
        unsafe {
            let _ = TranslateMessage(&msg);
        }
    }

    fn dispatch_message(&mut self, message: &Message) -> isize {
        let msg = self.native(message);
        // SAFETY: msg came from GetMessageW on this thread; the class procedure runs synchronously.
        unsafe { DispatchMessageW(&msg) }.0
    }
}

fn to_hwnd(window: WindowId) -> HWND {
    HWND(window.0 as *mut c_void)
}

/// Wrap the thread's last-error code. Call right after the failing function.
fn last_error(function: &'static str) -> Error {
    let code = unsafe { GetLastError() };
    Error::Toolkit { function, code: code.0 }
}
