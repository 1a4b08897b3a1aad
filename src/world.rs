use tracing::info;
use tracing::trace;

use crate::grid::Grid;
use crate::rules::RuleSet;

pub struct World {
    /// The cells, including the scratch bit used while advancing
    grid: Grid,

    /// Life rules
    rules: RuleSet,

    /// Number of generations since the grid was created or last cleared
    generation: u64,
}

impl World {
    /// Create an empty `w` by `h` world playing Conway's rules
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            grid: Grid::new(w, h),
            rules: RuleSet::default(),
            generation: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    /// Advance the world by one generation, in place.
    ///
    /// Rather than writing into a second grid, the next generation is stored in the scratch bit
    /// of every cell. The first pass only ever sets that bit, so every neighbor count sees the
    /// previous generation no matter the order cells are visited in. The second pass shifts the
    /// scratch bit down over the old one.
    ///
    /// This only saves memory: a second grid swapped in after each generation would be clearer,
    /// and is worth switching to wherever the extra allocation doesn't matter.
    pub fn next(&mut self) {
        let (w, h) = (self.grid.width(), self.grid.height());

        for y in 0..h {
            for x in 0..w {
                let neighbors = self.grid.count_neighbors(x, y);
                let alive = self.grid.is_alive(x, y);

                if self.rules.next(alive, neighbors) {
                    self.grid.cell_mut(x, y).mark_next();
                }
            }
        }

        for cell in self.grid.cells_mut() {
            cell.promote();
        }

        self.generation += 1;

        trace!(generation = self.generation, "advanced");
    }

    /// Throw the grid away and start over from an empty one of the same size
    pub fn clear(&mut self) {
        self.grid = Grid::new(self.grid.width(), self.grid.height());
        self.generation = 0;

        info!("grid cleared");
    }
}
