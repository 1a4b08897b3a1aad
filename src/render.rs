use crate::Pixel;
use crate::button::Button;
use crate::layout::Layout;
use crate::layout::Rect;
use crate::world::World;

/// Font size of button labels and the banner text
pub const TEXT_SIZE: Pixel = 20;

/// Label offset from a button's top left corner
const TEXT_PADDING: Pixel = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    White,
    Gray,
    Red,
    Green,
}

/// Something we can draw on. All coordinates are layout pixels.
pub trait Canvas {
    /// Fill the whole canvas
    fn clear(&mut self, color: Color);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draw `text` with its top left corner at `(x, y)`
    fn draw_text(&mut self, text: &str, x: Pixel, y: Pixel, size: Pixel, color: Color);
}

/// Black background with the gray control banner on top
pub fn draw_background<C: Canvas>(canvas: &mut C, layout: &Layout) {
    canvas.clear(Color::Black);
    canvas.fill_rect(
        Rect::new(0, 0, layout.width(), layout.banner()),
        Color::Gray,
    );
}

pub fn draw_button<C: Canvas>(canvas: &mut C, button: &Button) {
    let rect = button.rect();
    let face = button.face();

    canvas.fill_rect(rect, face.color);
    canvas.draw_text(
        &face.label,
        rect.x + TEXT_PADDING,
        rect.y + TEXT_PADDING,
        TEXT_SIZE,
        Color::Black,
    );
}

/// Generation counter, centered in the banner
pub fn draw_status<C: Canvas>(canvas: &mut C, world: &World, layout: &Layout) {
    let text = format!("generation {}", world.generation());

    // Glyphs are roughly half as wide as they are tall
    let w = text.len() as Pixel * TEXT_SIZE / 2;
    let x = (layout.width() - w) / 2;
    let y = (layout.banner() - TEXT_SIZE) / 2;

    canvas.draw_text(&text, x, y, TEXT_SIZE, Color::Black);
}

/// Every cell of the grid, white when alive and black when dead
pub fn draw_cells<C: Canvas>(canvas: &mut C, world: &World, layout: &Layout) {
    for cell in world.grid().cells() {
        let color = if cell.is_alive() {
            Color::White
        } else {
            Color::Black
        };

        canvas.fill_rect(layout.cell_rect(cell.col(), cell.row()), color);
    }
}
