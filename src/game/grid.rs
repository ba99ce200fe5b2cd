use ratatui::layout::{Position, Positions, Rect, Size};

/// The rectangular playing field, addressed by cells from `(0, 0)` at the
/// top-left to `(width - 1, height - 1)` at the bottom-right
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Grid {
    pub(crate) width: u16,
    pub(crate) height: u16,
}

impl Grid {
    pub(crate) const fn new(width: u16, height: u16) -> Grid {
        Grid { width, height }
    }

    pub(crate) fn size(self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    /// Returns `true` if `pos` lies within the grid
    pub(crate) fn contains(self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// The number of cells in the grid
    pub(crate) fn area(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    /// The cell in the middle of the grid, rounding towards the bottom-right
    pub(crate) fn center(self) -> Position {
        Position::new(self.width / 2, self.height / 2)
    }

    /// Iterate over every cell in the grid in row-major order
    pub(crate) fn positions(self) -> Positions {
        Rect::from((Position::ORIGIN, self.size())).positions()
    }
}

impl From<Size> for Grid {
    fn from(size: Size) -> Grid {
        Grid::new(size.width, size.height)
    }
}
