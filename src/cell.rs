/// Bit holding the current generation. This is the only bit neighbor counting ever reads.
pub const ALIVE: u8 = 0b01;

/// Scratch bit holding the next generation while it is being computed.
///
/// It is only ever set between the two passes of [`World::next`](crate::world::World::next).
pub const ALIVE_NEXT: u8 = 0b10;

/// A single square of the grid.
///
/// Two generations are multiplexed into `state` while the world advances:
/// ```notrust
/// 0000_0000
///        ||
///        |+- alive now
///        +-- alive next generation
/// ```
///
/// Between generations only [`ALIVE`] may be set.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Cell {
    col: usize,
    row: usize,
    state: u8,
}

impl Cell {
    /// A dead cell at the given grid position
    pub const fn dead(col: usize, row: usize) -> Self {
        Self { col, row, state: 0 }
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn row(&self) -> usize {
        self.row
    }

    /// The raw state word, both bits included
    pub fn state(&self) -> u8 {
        self.state
    }

    /// Effective state of the cell: whether it is alive in the current generation.
    pub fn is_alive(&self) -> bool {
        self.state & ALIVE == ALIVE
    }

    /// Flips the current generation bit
    pub fn toggle(&mut self) {
        self.state ^= ALIVE;
    }

    /// Records that this cell is alive in the next generation. The current bit is left alone so
    /// that neighbors computed after this one still see the previous generation.
    pub(crate) fn mark_next(&mut self) {
        self.state |= ALIVE_NEXT;
    }

    /// Shifts the next generation into place, discarding the current one.
    pub(crate) fn promote(&mut self) {
        self.state >>= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_dead() {
        let cell = Cell::dead(3, 4);

        assert!(!cell.is_alive());
        assert_eq!(cell.state(), 0);
        assert_eq!((cell.col(), cell.row()), (3, 4));
    }

    #[test]
    fn toggle_flips_current_bit_only() {
        let mut cell = Cell::dead(0, 0);

        cell.toggle();
        assert!(cell.is_alive());

        cell.toggle();
        assert!(!cell.is_alive());
        assert_eq!(cell.state(), 0);
    }

    #[test]
    fn next_bit_is_invisible_until_promoted() {
        let mut cell = Cell::dead(0, 0);

        cell.mark_next();
        assert!(!cell.is_alive());
        assert_eq!(cell.state(), ALIVE_NEXT);

        cell.promote();
        assert!(cell.is_alive());
        assert_eq!(cell.state(), ALIVE);
    }

    #[test]
    fn promote_discards_current_generation() {
        let mut cell = Cell::dead(0, 0);
        cell.toggle();

        cell.promote();

        assert!(!cell.is_alive());
        assert_eq!(cell.state(), 0);
    }
}
