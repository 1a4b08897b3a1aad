use crate::Pixel;
use crate::ScreenSize;
use crate::camera::Camera;

pub enum Event {
    PointerEvent(PointerEvent),
    AppEvent(AppEvent),
}

/// Positions are terminal glyphs
pub enum PointerEvent {
    Moved { col: ScreenSize, row: ScreenSize },

    /// The primary button went down. Held buttons don't repeat this.
    Pressed { col: ScreenSize, row: ScreenSize },
}

pub enum AppEvent {
    Resize { cols: ScreenSize, rows: ScreenSize },

    /// Exit the application
    Exit,
}

/// Everything the simulation needs to know about the pointer for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    /// Last known pointer position, in layout pixels
    pub pointer: (Pixel, Pixel),

    /// Whether the primary button went down during this frame
    pub primary_pressed: bool,
}

impl FrameInput {
    pub fn new(pointer: (Pixel, Pixel), primary_pressed: bool) -> Self {
        Self {
            pointer,
            primary_pressed,
        }
    }

    /// Input for the frame after this one: the pointer stays where it was, the press is spent.
    pub fn next_frame(&self) -> Self {
        Self::new(self.pointer, false)
    }

    /// Fold a pointer event into this frame
    pub fn apply(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Moved { col, row } => {
                self.pointer = Camera::pointer_at(col, row);
            }
            PointerEvent::Pressed { col, row } => {
                self.pointer = Camera::pointer_at(col, row);
                self.primary_pressed = true;
            }
        }
    }
}
