use crate::{
    error::Result,
    ui::shared::layout::Rect,
};

use super::message::{Message, Retrieved, WindowId};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Left,
}

/// One drawing step inside a paint session. Targets the invalidated region.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawOp {
    /// Fill with the class background brush.
    FillBackground,
    Text { text: String, align: TextAlign },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    PostQuit(i32),
    Repaint(Vec<DrawOp>),
}

/// What a window procedure decided for one message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Response {
    /// Handled, result 0, effects applied in order.
    Handled(Vec<Effect>),
    /// Let the toolkit's default handler produce the result.
    Default,
}

pub trait WindowProcedure {
    fn handle(&self, message: &Message) -> Response;
}

/// Side-effect sink for a dispatched message.
pub trait Surface {
    fn post_quit(&mut self, exit_code: i32);
    /// Runs `ops` inside one begin/end drawing session.
    fn paint(&mut self, window: WindowId, ops: &[DrawOp]) -> Result<()>;
    fn default_proc(&mut self, message: &Message) -> isize;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WindowClass {
    pub name: String,
}

impl WindowClass {
    pub fn new(name: &str) -> Self {
        Self { name: name.to_string() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WindowSpec {
    pub class: String,
    pub title: String,
    pub bounds: Rect,
}

/// The windowing subsystem as seen by the message loop.
pub trait Toolkit {
    fn register_class<P>(&mut self, class: &WindowClass) -> Result<()>
    where
        P: WindowProcedure + Default + 'static;
    fn create_window(&mut self, spec: &WindowSpec) -> Result<WindowId>;
    fn show_window(&mut self, window: WindowId);
    /// Blocks until a message or the quit signal is available.
    fn get_message(&mut self) -> Retrieved;
    fn translate_message(&mut self, message: &Message);
    fn dispatch_message(&mut self, message: &Message) -> isize;
}
