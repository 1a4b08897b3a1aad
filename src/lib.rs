pub mod app;
pub mod button;
pub mod camera;
pub mod cell;
pub mod events;
pub mod grid;
pub mod input;
pub mod io;
pub mod layout;
pub mod render;
pub mod rules;
pub mod world;

/// Terminal dimensions, in glyphs
pub type ScreenSize = u16;

/// Layout coordinates. Window space, with the origin at the top left corner.
pub type Pixel = i32;
