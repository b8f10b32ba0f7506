use std::ffi::c_void;

use windows::Win32::{
    Foundation::{HWND, LPARAM, WPARAM},
    Graphics::Gdi::{BeginPaint, DrawTextW, EndPaint, FillRect, COLOR_WINDOW, DRAW_TEXT_FORMAT, DT_LEFT, HBRUSH, HDC, PAINTSTRUCT},
    UI::WindowsAndMessaging::{DefWindowProcW, PostQuitMessage},
};

use crate::{
    error::{Error, Result},
    framework::{DrawOp, Message, Surface, TextAlign, WindowId},
};

/// System window colour, encoded the way class brushes expect (`COLOR_WINDOW + 1`).
pub(crate) fn window_brush() -> HBRUSH {
    HBRUSH((COLOR_WINDOW.0 + 1) as usize as *mut c_void)
}

fn text_format(align: TextAlign) -> DRAW_TEXT_FORMAT {
    match align {
        TextAlign::Left => DT_LEFT,
    }
}

/// Effects of one dispatched message, applied to its window.
pub(crate) struct NativeSurface {
    hwnd: HWND,
}

impl NativeSurface {
    pub(crate) fn new(hwnd: HWND) -> Self {
        Self { hwnd }
    }
}

impl Surface for NativeSurface {
    fn post_quit(&mut self, exit_code: i32) {
        unsafe { PostQuitMessage(exit_code) };
    }

    fn paint(&mut self, _window: WindowId, ops: &[DrawOp]) -> Result<()> {
        let session = PaintSession::begin(self.hwnd)?;
        for op in ops {
            session.draw(op);
        }
        Ok(())
    }

    fn default_proc(&mut self, message: &Message) -> isize {
        unsafe {
            DefWindowProcW(self.hwnd, message.kind.raw(), WPARAM(message.wparam), LPARAM(message.lparam)).0
        }
    }
}

/// BeginPaint/EndPaint pair. The session ends when the guard drops.
struct PaintSession {
    hwnd: HWND,
    hdc: HDC,
    ps: PAINTSTRUCT,
}

impl PaintSession {
    fn begin(hwnd: HWND) -> Result<Self> {
        let mut ps = PAINTSTRUCT::default();
        // SAFETY: hwnd is the window whose WM_PAINT is being handled.
        let hdc = unsafe { BeginPaint(hwnd, &mut ps) };
        if hdc.is_invalid() {
            return Err(Error::Toolkit { function: "BeginPaint", code: 0 });
        }
        Ok(Self { hwnd, hdc, ps })
    }

    fn draw(&self, op: &DrawOp) {
        let mut rect = self.ps.rcPaint;
        unsafe {
            match op {
                DrawOp::FillBackground => {
                    let _ = FillRect(self.hdc, &rect, window_brush());
                }
                DrawOp::Text { text, align } => {
                    let mut wide: Vec<u16> = text.encode_utf16().collect();
                    let _ = DrawTextW(self.hdc, &mut wide, &mut rect, text_format(*align));
                }
            }
        }
    }
}

impl Drop for PaintSession {
    fn drop(&mut self) {
        unsafe {
            let _ = EndPaint(self.hwnd, &self.ps);
        }
    }
}
