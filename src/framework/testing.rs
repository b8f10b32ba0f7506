//! In-memory toolkit for exercising the message loop and window procedures.

use std::collections::{HashMap, VecDeque};

use crate::{
    error::{Error, Result},
    ui::shared::layout::Rect,
};

use super::{
    message::{Message, MessageKind, Retrieved, WindowId},
    router::route,
    traits::{DrawOp, Response, Surface, TextAlign, Toolkit, WindowClass, WindowProcedure, WindowSpec},
};

const ERROR_CANNOT_FIND_WND_CLASS: u32 = 1407;
const ERROR_CLASS_ALREADY_EXISTS: u32 = 1410;
const ERROR_INVALID_PARAMETER: u32 = 87;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Register(String),
    Create(WindowId, String),
    Show(WindowId),
    Translate(WindowId, MessageKind),
    Dispatch(WindowId, MessageKind),
    BeginPaint(WindowId, Rect),
    FillBackground(Rect),
    DrawText(String, TextAlign, Rect),
    EndPaint(WindowId),
    PostQuit(i32),
    DefaultProc(WindowId, MessageKind),
    /// Message addressed to a window that does not exist (anymore).
    Dropped(WindowId, MessageKind),
}

enum Queued {
    Message(Message),
    Quit(i32),
}

#[derive(Debug)]
pub struct FakeWindow {
    pub id: WindowId,
    pub spec: WindowSpec,
    pub visible: bool,
    pub destroyed: bool,
}

#[derive(Default)]
struct FakeState {
    queue: VecDeque<Queued>,
    events: Vec<Event>,
    fail_next_get: bool,
}

/// Passes every message to the default handler.
#[derive(Default)]
pub struct PassThrough;

impl WindowProcedure for PassThrough {
    fn handle(&self, _message: &Message) -> Response {
        Response::Default
    }
}

#[derive(Default)]
pub struct FakeToolkit {
    classes: HashMap<String, Box<dyn WindowProcedure>>,
    windows: Vec<FakeWindow>,
    state: FakeState,
    next_id: isize,
    fail_create: bool,
}

impl FakeToolkit {
    pub fn new() -> Self {
        Self { next_id: 0x100, ..Default::default() }
    }

    /// Registers a pass-through class on first use and creates a window of it.
    pub fn open_window(&mut self) -> WindowId {
        const CLASS: &str = "Test Class";
        if !self.classes.contains_key(CLASS) {
            self.register_class::<PassThrough>(&WindowClass::new(CLASS)).unwrap();
        }
        self.create_window(&WindowSpec {
            class: CLASS.to_string(),
            title: "test".to_string(),
            bounds: Rect::at(0, 0, 100, 50),
        }).unwrap()
    }

    pub fn post(&mut self, message: Message) {
        self.state.queue.push_back(Queued::Message(message));
    }

    pub fn post_quit(&mut self, code: i32) {
        self.state.queue.push_back(Queued::Quit(code));
    }

    pub fn fail_next_get(&mut self) {
        self.state.fail_next_get = true;
    }

    pub fn fail_create(&mut self) {
        self.fail_create = true;
    }

    pub fn events(&self) -> &[Event] {
        &self.state.events
    }

    pub fn count<F: Fn(&Event) -> bool>(&self, predicate: F) -> usize {
        self.state.events.iter().filter(|e| predicate(e)).count()
    }

    pub fn pending(&self) -> usize {
        self.state.queue.len()
    }

    pub fn windows(&self) -> &[FakeWindow] {
        &self.windows
    }
}

impl Toolkit for FakeToolkit {
    fn register_class<P>(&mut self, class: &WindowClass) -> Result<()>
    where
        P: WindowProcedure + Default + 'static,
    {
        if self.classes.contains_key(&class.name) {
            return Err(Error::Toolkit { function: "RegisterClassW", code: ERROR_CLASS_ALREADY_EXISTS });
        }
        self.classes.insert(class.name.clone(), Box::new(P::default()));
        self.state.events.push(Event::Register(class.name.clone()));
        Ok(())
    }

    fn create_window(&mut self, spec: &WindowSpec) -> Result<WindowId> {
        if self.fail_create {
            return Err(Error::WindowCreation(format!("refused to create '{}'", spec.title)));
        }
        if !self.classes.contains_key(&spec.class) {
            return Err(Error::Toolkit { function: "CreateWindowExW", code: ERROR_CANNOT_FIND_WND_CLASS });
        }
        let id = WindowId(self.next_id);
        self.next_id += 1;
        self.windows.push(FakeWindow { id, spec: spec.clone(), visible: false, destroyed: false });
        self.state.events.push(Event::Create(id, spec.title.clone()));
        Ok(id)
    }

    fn show_window(&mut self, window: WindowId) {
        if let Some(w) = self.windows.iter_mut().find(|w| w.id == window) {
            w.visible = true;
            self.state.events.push(Event::Show(window));
        }
    }

    fn get_message(&mut self) -> Retrieved {
        if self.state.fail_next_get {
            self.state.fail_next_get = false;
            return Retrieved::Failed(Error::Toolkit { function: "GetMessageW", code: ERROR_INVALID_PARAMETER });
        }
        match self.state.queue.pop_front() {
            Some(Queued::Message(message)) => Retrieved::Message(message),
            Some(Queued::Quit(code)) => Retrieved::Quit(code),
            None => panic!("message queue drained without a quit signal"),
        }
    }

    fn translate_message(&mut self, message: &Message) {
        self.state.events.push(Event::Translate(message.window, message.kind));
    }

    fn dispatch_message(&mut self, message: &Message) -> isize {
        self.state.events.push(Event::Dispatch(message.window, message.kind));

        let window = self.windows.iter_mut().find(|w| w.id == message.window && !w.destroyed);
        let Some(window) = window else {
            self.state.events.push(Event::Dropped(message.window, message.kind));
            return 0;
        };
        let Some(procedure) = self.classes.get(&window.spec.class) else {
            self.state.events.push(Event::Dropped(message.window, message.kind));
            return 0;
        };

        let mut surface = FakeSurface { state: &mut self.state, bounds: window.spec.bounds };
        let result = route(procedure.as_ref(), message, &mut surface);

        if message.kind == MessageKind::Destroy {
            window.destroyed = true;
        }
        result
    }
}

struct FakeSurface<'a> {
    state: &'a mut FakeState,
    bounds: Rect,
}

impl Surface for FakeSurface<'_> {
    fn post_quit(&mut self, exit_code: i32) {
        self.state.events.push(Event::PostQuit(exit_code));
        self.state.queue.push_back(Queued::Quit(exit_code));
    }

    fn paint(&mut self, window: WindowId, ops: &[DrawOp]) -> Result<()> {
        // whole client area is invalid
        let invalid = Rect::at(0, 0, self.bounds.width(), self.bounds.height());
        self.state.events.push(Event::BeginPaint(window, invalid));
        for op in ops {
            let event = match op {
                DrawOp::FillBackground => Event::FillBackground(invalid),
                DrawOp::Text { text, align } => Event::DrawText(text.clone(), *align, invalid),
            };
            self.state.events.push(event);
        }
        self.state.events.push(Event::EndPaint(window));
        Ok(())
    }

    fn default_proc(&mut self, message: &Message) -> isize {
        self.state.events.push(Event::DefaultProc(message.window, message.kind));
        0
    }
}
