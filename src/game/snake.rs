use super::direction::Direction;
use super::grid::Grid;
use ratatui::layout::Position;
use std::collections::VecDeque;

/// Snake state.  Snate.
///
/// All positions are relative to the top-left corner of the grid.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    /// The cells occupied by the snake, head first.  Never empty.
    pub(super) body: VecDeque<Position>,

    /// The direction in which the snake last moved
    pub(super) heading: Direction,

    /// The direction the snake will move in on the next call to
    /// [`Snake::advance()`]
    pub(super) pending: Direction,

    /// Whether the next move should keep the tail in place
    pub(super) growing: bool,
}

impl Snake {
    /// Create a new one-cell snake at `head` facing in `heading`
    pub(crate) fn new(head: Position, heading: Direction) -> Snake {
        Snake {
            body: VecDeque::from([head]),
            heading,
            pending: heading,
            growing: false,
        }
    }

    /// Return the position of the snake's head
    pub(crate) fn head(&self) -> Position {
        // `body` is never empty; the fallback is unreachable.
        self.body.front().copied().unwrap_or_default()
    }

    /// Return the cells occupied by the snake, head first
    pub(crate) fn body(&self) -> &VecDeque<Position> {
        &self.body
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.body.len()
    }

    #[cfg(test)]
    pub(crate) fn heading(&self) -> Direction {
        self.heading
    }

    /// Request that the snake move in `direction` from the next call to
    /// [`Snake::advance()`] onwards.  Requests to turn back on the current
    /// heading are ignored.  If called several times between moves, only the
    /// last accepted request takes effect.
    pub(crate) fn turn(&mut self, direction: Direction) {
        if direction != self.heading.reverse() {
            self.pending = direction;
        }
    }

    /// Make the next call to [`Snake::advance()`] lengthen the snake by one
    /// cell
    pub(crate) fn grow(&mut self) {
        self.growing = true;
    }

    /// Return the cell that the head would move to on the next call to
    /// [`Snake::advance()`], or `None` if that would leave `grid`
    pub(crate) fn next_head(&self, grid: Grid) -> Option<Position> {
        self.pending.advance(self.head(), grid)
    }

    /// Move the snake forwards one cell within `grid`.
    ///
    /// Returns `false`, leaving the snake as it was, if the move would take
    /// the head outside of `grid` or into any part of the body other than a
    /// tail cell that is being vacated by this same move.
    pub(crate) fn advance(&mut self, grid: Grid) -> bool {
        let Some(pos) = self.next_head(grid) else {
            return false;
        };
        let solid = if self.growing {
            self.body.len()
        } else {
            self.body.len() - 1
        };
        if self.body.iter().take(solid).any(|&p| p == pos) {
            return false;
        }
        self.heading = self.pending;
        self.body.push_front(pos);
        if self.growing {
            self.growing = false;
        } else {
            let _ = self.body.pop_back();
        }
        true
    }
}
