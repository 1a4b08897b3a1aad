use crate::Pixel;
use crate::layout::Rect;
use crate::render::Color;

/// Frames the transient latch keeps showing "pressed" after the click that fired it. At 60
/// frames per second this is roughly half a second.
pub const FLASH_FRAMES: u32 = 31;

/// How a button responds to clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatchKind {
    /// Every click flips the button between off and on, and it stays put otherwise.
    Toggle,

    /// A click fires the action for exactly one frame, then the button keeps looking pressed
    /// for `flash_frames` more frames. Clicks are ignored until it looks released again.
    TransientFlash { flash_frames: u32 },
}

impl LatchKind {
    pub const fn flash() -> Self {
        LatchKind::TransientFlash {
            flash_frames: FLASH_FRAMES,
        }
    }
}

/// What a button shows in one state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Face {
    pub label: String,
    pub color: Color,
}

impl Face {
    pub fn new(label: impl Into<String>, color: Color) -> Self {
        Self {
            label: label.into(),
            color,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Button {
    rect: Rect,
    kind: LatchKind,

    unpressed: Face,
    pressed_face: Face,

    /// What the owner acts on
    pressed: bool,

    /// What gets drawn
    show_pressed: bool,

    /// Frames spent flashing, transient latches only
    pressed_timer: u32,
}

impl Button {
    pub fn new(rect: Rect, kind: LatchKind, unpressed: Face, pressed: Face) -> Self {
        Self {
            rect,
            kind,
            unpressed,
            pressed_face: pressed,
            pressed: false,
            show_pressed: false,
            pressed_timer: 0,
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn kind(&self) -> LatchKind {
        self.kind
    }

    pub fn pressed(&self) -> bool {
        self.pressed
    }

    pub fn show_pressed(&self) -> bool {
        self.show_pressed
    }

    /// The face to draw this frame
    pub fn face(&self) -> &Face {
        if self.show_pressed {
            &self.pressed_face
        } else {
            &self.unpressed
        }
    }

    pub fn contains(&self, pointer: (Pixel, Pixel)) -> bool {
        self.rect.contains(pointer)
    }

    /// Advance the button by one frame. `clicked` is whether the primary button went down
    /// inside this button during the frame.
    pub fn update(&mut self, clicked: bool) {
        match self.kind {
            LatchKind::Toggle => self.update_toggle(clicked),
            LatchKind::TransientFlash { flash_frames } => self.update_flash(clicked, flash_frames),
        }
    }

    fn update_toggle(&mut self, clicked: bool) {
        if clicked {
            self.pressed = !self.pressed;
            self.show_pressed = self.pressed;
        }
    }

    fn update_flash(&mut self, clicked: bool, flash_frames: u32) {
        if !self.show_pressed && clicked {
            self.pressed = true;
            self.show_pressed = true;
            self.pressed_timer = 0;
            return;
        }

        self.pressed = false;

        if !self.show_pressed {
            return;
        }

        if self.pressed_timer >= flash_frames {
            self.show_pressed = false;
            self.pressed_timer = 0;
            return;
        }

        self.pressed_timer += 1;
    }
}
