use crate::Pixel;
use crate::layout::Layout;

/// Turns window positions into grid coordinates.
#[derive(Debug, Clone, Copy)]
pub struct InputMapper {
    layout: Layout,
}

impl InputMapper {
    pub fn new(layout: Layout) -> Self {
        Self { layout }
    }

    /// Grid coordinates under `(x, y)`, which may be off the grid in either direction.
    ///
    /// Each axis is scaled independently from the playable area into grid indices and floored,
    /// so positions above the banner's bottom edge give negative rows. This is
    /// `floor(position / area * cells)`, kept in integers so cell boundaries land exactly.
    pub fn coords(&self, (x, y): (Pixel, Pixel)) -> (i64, i64) {
        let layout = &self.layout;

        let x = x as i64;
        let y = (y - layout.banner()) as i64;

        let col = (x * layout.cols() as i64).div_euclid(layout.width() as i64);
        let row = (y * layout.rows() as i64).div_euclid(layout.playable_height() as i64);

        (col, row)
    }

    /// The cell under `(x, y)`, if any
    pub fn cell_at(&self, pointer: (Pixel, Pixel)) -> Option<(usize, usize)> {
        let (col, row) = self.coords(pointer);

        let valid = (0..self.layout.cols() as i64).contains(&col)
            && (0..self.layout.rows() as i64).contains(&row);

        valid.then_some((col as usize, row as usize))
    }

    /// The cell to toggle this frame: a click that landed on the grid.
    pub fn toggle_target(&self, pointer: (Pixel, Pixel), pressed: bool) -> Option<(usize, usize)> {
        if !pressed {
            return None;
        }

        self.cell_at(pointer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapper() -> InputMapper {
        InputMapper::new(Layout::DEFAULT)
    }

    #[test]
    fn first_and_last_cells() {
        let m = mapper();

        assert_eq!(m.cell_at((0, 100)), Some((0, 0)));
        assert_eq!(m.cell_at((19, 119)), Some((0, 0)));
        assert_eq!(m.cell_at((20, 120)), Some((1, 1)));
        assert_eq!(m.cell_at((1780, 980)), Some((89, 44)));
        assert_eq!(m.cell_at((1799, 999)), Some((89, 44)));
    }

    #[test]
    fn one_past_either_end_is_rejected() {
        let m = mapper();

        assert_eq!(m.coords((-1, 100)), (-1, 0));
        assert_eq!(m.cell_at((-1, 100)), None);

        assert_eq!(m.coords((1800, 100)), (90, 0));
        assert_eq!(m.cell_at((1800, 100)), None);

        assert_eq!(m.coords((0, 99)), (0, -1));
        assert_eq!(m.cell_at((0, 99)), None);

        assert_eq!(m.coords((0, 1000)), (0, 45));
        assert_eq!(m.cell_at((0, 1000)), None);
    }

    #[test]
    fn banner_is_never_a_cell() {
        let m = mapper();

        for y in [0, 20, 50, 99] {
            assert_eq!(m.cell_at((500, y)), None);
        }
    }

    #[test]
    fn toggle_needs_a_press() {
        let m = mapper();

        assert_eq!(m.toggle_target((45, 145), false), None);
        assert_eq!(m.toggle_target((45, 145), true), Some((2, 2)));
        assert_eq!(m.toggle_target((45, 45), true), None);
    }
}
