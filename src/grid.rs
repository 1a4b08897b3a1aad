use crate::cell::Cell;

/// A fixed size, bounded (non-wrapping) rectangle of cells stored row by row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,

    /// Number of columns
    w: usize,

    /// Number of rows
    h: usize,
}

impl Grid {
    /// Create a `w` by `h` grid where every cell is dead
    pub fn new(w: usize, h: usize) -> Self {
        let cells = (0..h)
            .flat_map(|row| (0..w).map(move |col| Cell::dead(col, row)))
            .collect();

        Self { cells, w, h }
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn height(&self) -> usize {
        self.h
    }

    pub fn cell(&self, x: usize, y: usize) -> &Cell {
        &self.cells[self.xy_from(x, y)]
    }

    pub(crate) fn cell_mut(&mut self, x: usize, y: usize) -> &mut Cell {
        let i = self.xy_from(x, y);
        &mut self.cells[i]
    }

    /// Whether the cell at `(x, y)` is alive in the current generation
    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.cell(x, y).is_alive()
    }

    /// Flips the cell at `(x, y)` between dead and alive.
    ///
    /// The caller is responsible for `(x, y)` being on the grid.
    pub fn toggle(&mut self, x: usize, y: usize) {
        self.cell_mut(x, y).toggle();
    }

    /// All cells, row by row
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub(crate) fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.cells.iter_mut()
    }

    /// Number of live cells in the Moore neighborhood of `(x, y)`.
    ///
    /// Neighbors past the edges of the grid don't exist and are never counted. Only the current
    /// generation bit is read.
    pub fn count_neighbors(&self, x: usize, y: usize) -> u8 {
        let (x0, x1) = (x.saturating_sub(1), (x + 1).min(self.w - 1));
        let (y0, y1) = (y.saturating_sub(1), (y + 1).min(self.h - 1));

        let mut n = 0;

        for ny in y0..=y1 {
            for nx in x0..=x1 {
                if (nx, ny) != (x, y) && self.is_alive(nx, ny) {
                    n += 1;
                }
            }
        }

        n
    }

    /// Number of live cells on the whole grid
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    fn xy_from(&self, x: usize, y: usize) -> usize {
        assert!(x < self.w, "x is out of bounds");
        assert!(y < self.h, "y is out of bounds");

        y * self.w + x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_dead_with_precomputed_positions() {
        let grid = Grid::new(4, 3);

        assert_eq!(grid.cells().count(), 12);
        assert_eq!(grid.population(), 0);

        for (i, cell) in grid.cells().enumerate() {
            assert_eq!((cell.col(), cell.row()), (i % 4, i / 4));
        }
    }

    #[test]
    fn toggle_targets_one_cell() {
        let mut grid = Grid::new(4, 3);

        grid.toggle(3, 1);

        assert!(grid.is_alive(3, 1));
        assert_eq!(grid.population(), 1);

        grid.toggle(3, 1);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn center_counts_each_neighbor() {
        let neighbors = [(0, 0), (1, 0), (2, 0), (0, 1), (2, 1), (0, 2), (1, 2), (2, 2)];
        let mut grid = Grid::new(3, 3);

        for (n, &(x, y)) in neighbors.iter().enumerate() {
            assert_eq!(grid.count_neighbors(1, 1), n as u8);
            grid.toggle(x, y);
        }

        assert_eq!(grid.count_neighbors(1, 1), 8);
    }

    #[test]
    fn center_cell_is_not_its_own_neighbor() {
        let mut grid = Grid::new(3, 3);
        grid.toggle(1, 1);

        assert_eq!(grid.count_neighbors(1, 1), 0);
    }

    #[test]
    fn corners_and_edges_do_not_wrap() {
        let mut grid = Grid::new(3, 3);
        for y in 0..3 {
            for x in 0..3 {
                grid.toggle(x, y);
            }
        }

        assert_eq!(grid.count_neighbors(0, 0), 3);
        assert_eq!(grid.count_neighbors(2, 0), 3);
        assert_eq!(grid.count_neighbors(0, 2), 3);
        assert_eq!(grid.count_neighbors(2, 2), 3);

        assert_eq!(grid.count_neighbors(1, 0), 5);
        assert_eq!(grid.count_neighbors(0, 1), 5);
    }

    #[test]
    fn opposite_edge_is_not_a_neighbor() {
        let mut grid = Grid::new(5, 5);
        grid.toggle(4, 4);
        grid.toggle(4, 0);
        grid.toggle(0, 4);

        assert_eq!(grid.count_neighbors(0, 0), 0);
    }

    #[test]
    fn single_cell_grid_has_no_neighbors() {
        let mut grid = Grid::new(1, 1);
        grid.toggle(0, 0);

        assert_eq!(grid.count_neighbors(0, 0), 0);
    }
}
