use crate::framework::{DrawOp, Effect, Message, MessageKind, Response, TextAlign, WindowProcedure};

pub const HELLO_TEXT: &str = "Hello World";

/// Window procedure of the native example. Quits on destroy, paints the greeting.
#[derive(Clone, Copy, Debug, Default)]
pub struct HelloWindow;

impl HelloWindow {
    fn on_destroy(&self) -> Response {
        Response::Handled(vec![Effect::PostQuit(0)])
    }

    fn on_paint(&self) -> Response {
        Response::Handled(vec![Effect::Repaint(vec![
            DrawOp::FillBackground,
            DrawOp::Text { text: HELLO_TEXT.to_string(), align: TextAlign::Left },
        ])])
    }
}

impl WindowProcedure for HelloWindow {
    fn handle(&self, message: &Message) -> Response {
        match message.kind {
            MessageKind::Destroy => self.on_destroy(),
            MessageKind::Paint => self.on_paint(),
            _ => Response::Default,
        }
    }
}
