//! Display surface abstraction
//!
//! The timer never draws pixels itself. It creates text and rectangle
//! elements on a surface once, then keeps issuing fire-and-forget commands
//! against them. Commands carry no acknowledgement and are safe to repeat.

pub mod command;
pub mod json;
pub mod recording;

pub use command::{Color, ElementId, Font, SurfaceCommand};
pub use json::JsonLinesSurface;
pub use recording::RecordingSurface;

/// Sink for drawing commands
///
/// Implementors only provide id allocation and command delivery; the element
/// operations are built on top of those two.
pub trait DisplaySurface {
    /// Reserve an id for a new element
    fn allocate(&mut self) -> ElementId;

    /// Deliver a command; must not block or fail loudly
    fn submit(&mut self, command: SurfaceCommand);

    /// Create a text element
    fn create_text(&mut self) -> ElementId {
        let id = self.allocate();
        self.submit(SurfaceCommand::CreateText { id });
        id
    }

    /// Create a rectangle element
    fn create_rectangle(&mut self) -> ElementId {
        let id = self.allocate();
        self.submit(SurfaceCommand::CreateRectangle { id });
        id
    }

    fn set_font(&mut self, id: ElementId, font: Font) {
        self.submit(SurfaceCommand::SetFont { id, font });
    }

    fn set_text(&mut self, id: ElementId, text: &str) {
        self.submit(SurfaceCommand::SetText { id, text: text.to_string() });
    }

    fn set_color(&mut self, id: ElementId, color: Color) {
        self.submit(SurfaceCommand::SetColor { id, color });
    }

    fn set_size(&mut self, id: ElementId, width: u32, height: u32) {
        self.submit(SurfaceCommand::SetSize { id, width, height });
    }

    fn move_to(&mut self, id: ElementId, x: i32, y: i32) {
        self.submit(SurfaceCommand::MoveTo { id, x, y });
    }

    /// Start a tween towards `(x, y)` that the surface runs on its own
    fn animate_to(&mut self, id: ElementId, x: i32, y: i32, duration_ms: u32) {
        self.submit(SurfaceCommand::AnimateTo { id, x, y, duration_ms });
    }

    /// Mark the end of one poll's worth of commands
    fn flush(&mut self) {}
}

impl<T: DisplaySurface + ?Sized> DisplaySurface for &mut T {
    fn allocate(&mut self) -> ElementId {
        (**self).allocate()
    }

    fn submit(&mut self, command: SurfaceCommand) {
        (**self).submit(command)
    }

    fn flush(&mut self) {
        (**self).flush()
    }
}

impl<T: DisplaySurface + ?Sized> DisplaySurface for Box<T> {
    fn allocate(&mut self) -> ElementId {
        (**self).allocate()
    }

    fn submit(&mut self, command: SurfaceCommand) {
        (**self).submit(command)
    }

    fn flush(&mut self) {
        (**self).flush()
    }
}
