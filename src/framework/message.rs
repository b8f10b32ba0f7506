use crate::error::Error;

pub const WM_DESTROY: u32 = 0x0002;
pub const WM_PAINT: u32 = 0x000F;
pub const WM_QUIT: u32 = 0x0012;

/// Opaque window handle, owned by the windowing subsystem.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct WindowId(pub isize);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Destroy,
    Paint,
    Quit,
    Other(u32),
}

impl MessageKind {
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            WM_DESTROY => MessageKind::Destroy,
            WM_PAINT => MessageKind::Paint,
            WM_QUIT => MessageKind::Quit,
            other => MessageKind::Other(other),
        }
    }

    pub fn raw(&self) -> u32 {
        match *self {
            MessageKind::Destroy => WM_DESTROY,
            MessageKind::Paint => WM_PAINT,
            MessageKind::Quit => WM_QUIT,
            MessageKind::Other(raw) => raw,
        }
    }

    pub fn name(&self) -> &'static str {
        msg_name(self.raw())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Message {
    pub window: WindowId,
    pub kind: MessageKind,
    pub wparam: usize,
    pub lparam: isize,
}

impl Message {
    pub fn new(window: WindowId, raw: u32, wparam: usize, lparam: isize) -> Self {
        Self { window, kind: MessageKind::from_raw(raw), wparam, lparam }
    }

    pub fn of_kind(window: WindowId, kind: MessageKind) -> Self {
        Self { window, kind, wparam: 0, lparam: 0 }
    }
}

/// Outcome of one retrieval from the thread's message queue.
#[derive(Debug)]
pub enum Retrieved {
    Message(Message),
    Quit(i32),
    Failed(Error),
}

fn msg_name(msg: u32) -> &'static str {
    match msg {
        0x0000 => "WM_NULL",
        0x0001 => "WM_CREATE",
        0x0002 => "WM_DESTROY",
        0x0003 => "WM_MOVE",
        0x0005 => "WM_SIZE",
        0x0006 => "WM_ACTIVATE",
        0x0007 => "WM_SETFOCUS",
        0x0008 => "WM_KILLFOCUS",
        0x000C => "WM_SETTEXT",
        0x000D => "WM_GETTEXT",
        0x000F => "WM_PAINT",
        0x0010 => "WM_CLOSE",
        0x0012 => "WM_QUIT",
        0x0014 => "WM_ERASEBKGND",
        0x0018 => "WM_SHOWWINDOW",
        0x001C => "WM_ACTIVATEAPP",
        0x0020 => "WM_SETCURSOR",
        0x0024 => "WM_GETMINMAXINFO",
        0x0046 => "WM_WINDOWPOSCHANGING",
        0x0047 => "WM_WINDOWPOSCHANGED",
        0x0081 => "WM_NCCREATE",
        0x0082 => "WM_NCDESTROY",
        0x0083 => "WM_NCCALCSIZE",
        0x0084 => "WM_NCHITTEST",
        0x0085 => "WM_NCPAINT",
        0x0086 => "WM_NCACTIVATE",
        0x00A0 => "WM_NCMOUSEMOVE",
        0x0100 => "WM_KEYDOWN",
        0x0101 => "WM_KEYUP",
        0x0102 => "WM_CHAR",
        0x0104 => "WM_SYSKEYDOWN",
        0x0105 => "WM_SYSKEYUP",
        0x0112 => "WM_SYSCOMMAND",
        0x0113 => "WM_TIMER",
        0x0200 => "WM_MOUSEMOVE",
        0x0201 => "WM_LBUTTONDOWN",
        0x0202 => "WM_LBUTTONUP",
        0x0204 => "WM_RBUTTONDOWN",
        0x0205 => "WM_RBUTTONUP",
        0x0231 => "WM_ENTERSIZEMOVE",
        0x0232 => "WM_EXITSIZEMOVE",
        _ => "WM_?",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_raw() {
        assert_eq!(MessageKind::from_raw(0x0002), MessageKind::Destroy);
        assert_eq!(MessageKind::from_raw(0x000F), MessageKind::Paint);
        assert_eq!(MessageKind::from_raw(0x0012), MessageKind::Quit);
        assert_eq!(MessageKind::from_raw(0x0100), MessageKind::Other(0x0100));
    }

    #[test]
    fn test_kind_keeps_raw_code() {
        assert_eq!(MessageKind::Other(0x0201).raw(), 0x0201);
        assert_eq!(MessageKind::Paint.raw(), WM_PAINT);
    }

    #[test]
    fn test_kind_name() {
        assert_eq!(MessageKind::Destroy.name(), "WM_DESTROY");
        assert_eq!(MessageKind::Other(0x0102).name(), "WM_CHAR");
        assert_eq!(MessageKind::Other(0x7FFF).name(), "WM_?");
    }

    #[test]
    fn test_message_new() {
        let m = Message::new(WindowId(7), 0x000F, 1, -1);
        assert_eq!(m.window, WindowId(7));
        assert_eq!(m.kind, MessageKind::Paint);
        assert_eq!(m.wparam, 1);
        assert_eq!(m.lparam, -1);
    }
}
