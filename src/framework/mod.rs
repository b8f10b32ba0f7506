mod message;
mod message_loop;
mod router;
mod traits;

#[cfg(test)]
pub(crate) mod testing;

// Re-export public interface
pub use message::{Message, MessageKind, Retrieved, WindowId, WM_DESTROY, WM_PAINT, WM_QUIT};
pub use message_loop::run_message_loop;
pub use router::route;
pub use traits::{DrawOp, Effect, Response, Surface, TextAlign, Toolkit, WindowClass, WindowProcedure, WindowSpec};
