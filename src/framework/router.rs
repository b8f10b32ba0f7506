use super::{
    message::Message,
    traits::{Effect, Response, Surface, WindowProcedure},
};

/// Runs `procedure` for one message and applies its effects to `surface`.
pub fn route<P, S>(procedure: &P, message: &Message, surface: &mut S) -> isize
where
    P: WindowProcedure + ?Sized,
    S: Surface + ?Sized,
{
    if should_log_message(message) {
        log_message(message);
    }

    let result = match procedure.handle(message) {
        Response::Handled(effects) => {
            for effect in effects {
                apply(effect, message, surface);
            }
            0
        }
        Response::Default => surface.default_proc(message),
    };

    if should_log_message(message) {
        log_response(message, result);
    }

    result
}

fn apply<S: Surface + ?Sized>(effect: Effect, message: &Message, surface: &mut S) {
    match effect {
        Effect::PostQuit(code) => {
            log::info!("Posting quit ({}) for {:?}", code, message.window);
            surface.post_quit(code);
        }
        Effect::Repaint(ops) => {
            // still reported as handled, the OS revalidates on the next paint
            if let Err(e) = surface.paint(message.window, &ops) {
                log::error!("Paint failed for {:?}: {}", message.window, e);
            }
        }
    }
}

fn should_log_message(_message: &Message) -> bool {
    log::log_enabled!(log::Level::Trace)
}

fn log_message(message: &Message) {
    log::trace!("Got Message ({:#06x})({:?}): {} wp {:#x} lp {:#x}",
        message.kind.raw(), message.window, message.kind.name(), message.wparam, message.lparam);
}

fn log_response(message: &Message, result: isize) {
    log::trace!("Got Response ({:#06x}): {} @ {:?}", message.kind.raw(), result, message.window);
}
