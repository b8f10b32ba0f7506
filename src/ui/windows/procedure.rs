use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, WPARAM};

use crate::framework::{route, Message, WindowId, WindowProcedure};

use super::surface::NativeSurface;

/// Class procedure for `P`. Procedures are stateless, so each call gets a fresh `P`.
pub unsafe extern "system" fn wnd_proc_router<P: WindowProcedure + Default>(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    let message = Message::new(WindowId(hwnd.0 as isize), msg, wparam.0, lparam.0);
    let mut surface = NativeSurface::new(hwnd);
    LRESULT(route(&P::default(), &message, &mut surface))
}
