use super::{message::Retrieved, traits::Toolkit};

/// Retrieve, translate and dispatch until the quit signal arrives.
///
/// Returns the exit code carried by the quit signal. Retrieval failures are
/// logged and the loop keeps going.
pub fn run_message_loop<T: Toolkit>(toolkit: &mut T) -> i32 {
    let mut dispatched: u64 = 0;
    loop {
        match toolkit.get_message() {
            Retrieved::Message(message) => {
                toolkit.translate_message(&message);
                toolkit.dispatch_message(&message);
                dispatched += 1;
            }
            Retrieved::Quit(code) => {
                log::info!("Quit received after {} messages, exit code {}", dispatched, code);
                return code;
            }
            Retrieved::Failed(e) => {
                log::warn!("Message retrieval failed, continuing: {}", e);
            }
        }
    }
}
