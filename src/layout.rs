use thiserror::Error;
use tracing::debug;

use crate::Pixel;

pub const SCREEN_WIDTH: Pixel = 1800;
pub const SCREEN_HEIGHT: Pixel = 1000;

/// Height of the control banner at the top of the window
pub const LAYOUT_TOP: Pixel = 100;

/// Side length of a cell
pub const SQUARE_SIZE: Pixel = 20;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Cell size must be positive, got {0}")]
    CellSize(Pixel),

    #[error("Banner height {banner} leaves no room in a window {height} high")]
    Banner { banner: Pixel, height: Pixel },

    #[error("A {width}x{height} area holds no {cell}x{cell} cell")]
    EmptyGrid {
        width: Pixel,
        height: Pixel,
        cell: Pixel,
    },
}

/// An axis aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: Pixel,
    pub y: Pixel,
    pub w: Pixel,
    pub h: Pixel,
}

impl Rect {
    pub const fn new(x: Pixel, y: Pixel, w: Pixel, h: Pixel) -> Self {
        Self { x, y, w, h }
    }

    /// Left and top edges are inside, right and bottom edges are not
    pub fn contains(&self, (x, y): (Pixel, Pixel)) -> bool {
        x >= self.x && y >= self.y && x < self.x + self.w && y < self.y + self.h
    }
}

/// Window geometry. The window is a banner of height `banner` stacked on top of the playable
/// area, which is tiled with square cells of side `cell`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    width: Pixel,
    height: Pixel,
    banner: Pixel,
    cell: Pixel,
}

impl Default for Layout {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Layout {
    pub const DEFAULT: Layout = Layout {
        width: SCREEN_WIDTH,
        height: SCREEN_HEIGHT,
        banner: LAYOUT_TOP,
        cell: SQUARE_SIZE,
    };

    pub fn new(
        width: Pixel,
        height: Pixel,
        banner: Pixel,
        cell: Pixel,
    ) -> Result<Self, LayoutError> {
        if cell <= 0 {
            return Err(LayoutError::CellSize(cell));
        }

        if banner < 0 || banner >= height {
            return Err(LayoutError::Banner { banner, height });
        }

        let layout = Self {
            width,
            height,
            banner,
            cell,
        };

        if layout.cols() == 0 || layout.rows() == 0 {
            return Err(LayoutError::EmptyGrid {
                width,
                height: height - banner,
                cell,
            });
        }

        debug!(cols = layout.cols(), rows = layout.rows(), "layout");

        Ok(layout)
    }

    pub fn width(&self) -> Pixel {
        self.width
    }

    pub fn height(&self) -> Pixel {
        self.height
    }

    pub fn banner(&self) -> Pixel {
        self.banner
    }

    /// Height of the area below the banner
    pub fn playable_height(&self) -> Pixel {
        self.height - self.banner
    }

    /// Number of grid columns
    pub fn cols(&self) -> usize {
        (self.width.max(0) / self.cell) as usize
    }

    /// Number of grid rows
    pub fn rows(&self) -> usize {
        (self.playable_height().max(0) / self.cell) as usize
    }

    /// Screen rectangle covered by the cell at `(x, y)`
    pub fn cell_rect(&self, x: usize, y: usize) -> Rect {
        Rect::new(
            x as Pixel * self.cell,
            y as Pixel * self.cell + self.banner,
            self.cell,
            self.cell,
        )
    }
}
