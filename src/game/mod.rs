mod direction;
mod fruit;
mod grid;
mod snake;
pub(crate) use self::direction::Direction;
use self::fruit::Fruit;
use self::grid::Grid;
use self::snake::Snake;
use crate::consts;
use crate::util::{center_rect, get_display_area};
use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Position, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Widget},
};
use std::collections::HashSet;

/// A single round of play, from the snake's spawn to its collision
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game {
    grid: Grid,
    snake: Snake,
    /// `None` once the snake has filled the board
    fruit: Option<Fruit>,
    score: u32,
    /// The high score as of the start of the round
    best: u32,
    /// Remaining ticks for which the board border should flash
    flash: u8,
}

impl Game {
    pub(crate) fn new<R: Rng + ?Sized>(rng: &mut R, best: u32) -> Game {
        Game::with_grid(rng, Grid::from(consts::GRID_SIZE), best)
    }

    fn with_grid<R: Rng + ?Sized>(rng: &mut R, grid: Grid, best: u32) -> Game {
        let snake = Snake::new(grid.center(), Direction::East);
        let fruit = Fruit::spawn(rng, grid, &HashSet::from([snake.head()]));
        Game {
            grid,
            snake,
            fruit,
            score: 0,
            best,
            flash: 0,
        }
    }

    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn turn(&mut self, direction: Direction) {
        self.snake.turn(direction);
    }

    /// Advance the round by one step
    pub(crate) fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Tick {
        self.flash = self.flash.saturating_sub(1);
        let fruit_ahead = self
            .fruit
            .zip(self.snake.next_head(self.grid))
            .is_some_and(|(fruit, next)| fruit.position() == next);
        if fruit_ahead {
            // Keep the tail on this move so that the snake is one cell longer
            // as soon as it has eaten.
            self.snake.grow();
        }
        if !self.snake.advance(self.grid) {
            return Tick::Crashed;
        }
        if !fruit_ahead {
            return Tick::Moved;
        }
        self.score += 1;
        self.flash = consts::FLASH_FRAMES;
        let occupied = self.snake.body().iter().copied().collect::<HashSet<_>>();
        let grid = self.grid;
        match self
            .fruit
            .as_mut()
            .and_then(|fruit| fruit.relocate(rng, grid, &occupied))
        {
            Some(_) => Tick::Ate,
            None => {
                self.fruit = None;
                Tick::Filled
            }
        }
    }

    fn flashing(&self) -> bool {
        self.flash > 0
    }

    #[cfg(test)]
    pub(crate) fn place_fruit(&mut self, pos: Position) {
        self.fruit = Some(Fruit::at(pos));
    }

    #[cfg(test)]
    pub(crate) fn snake_head(&self) -> Position {
        self.snake.head()
    }
}

/// The outcome of a call to [`Game::tick()`]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Tick {
    /// The snake moved onto an empty cell
    Moved,
    /// The snake ate the fruit, and a new one was placed
    Ate,
    /// The snake hit a wall or itself; the round is over
    Crashed,
    /// The snake ate the fruit and now fills the whole board; the round is
    /// over
    Filled,
}

impl Widget for &Game {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [score_area, board_area, hint_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(display);
        Line::styled(
            format!(
                " Score: {}    Best: {}",
                self.score,
                self.best.max(self.score)
            ),
            consts::SCORE_BAR_STYLE,
        )
        .render(score_area, buf);

        let board_size = Size {
            width: self
                .grid
                .width
                .saturating_mul(consts::CELL_WIDTH)
                .saturating_add(2),
            height: self.grid.height.saturating_add(2),
        };
        let board_area = center_rect(board_area, board_size);
        let border_style = if self.flashing() {
            consts::FLASH_STYLE
        } else {
            Style::new()
        };
        Block::bordered()
            .border_style(border_style)
            .render(board_area, buf);

        let mut canvas = Canvas {
            area: board_area.inner(Margin::new(1, 1)),
            buf,
        };
        if let Some(fruit) = self.fruit {
            canvas.draw_cell(fruit.position(), consts::FRUIT_SYMBOL, consts::FRUIT_STYLE);
        }
        for &p in self.snake.body().iter().skip(1) {
            canvas.draw_cell(p, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
        }
        canvas.draw_cell(
            self.snake.head(),
            consts::SNAKE_HEAD_SYMBOL,
            consts::SNAKE_HEAD_STYLE,
        );

        Line::from_iter([
            Span::raw(" Move: "),
            Span::styled("← ↓ ↑ →", consts::KEY_STYLE),
            Span::raw(" / "),
            Span::styled("wasd", consts::KEY_STYLE),
            Span::raw(" / "),
            Span::styled("hjkl", consts::KEY_STYLE),
            Span::raw("    Quit: "),
            Span::styled("q", consts::KEY_STYLE),
        ])
        .render(hint_area, buf);
    }
}

/// A view of the board's interior in which each grid cell spans
/// [`CELL_WIDTH`][consts::CELL_WIDTH] terminal columns
#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_cell(&mut self, pos: Position, symbol: char, style: Style) {
        let Some(x0) = pos
            .x
            .checked_mul(consts::CELL_WIDTH)
            .and_then(|x| x.checked_add(self.area.x))
        else {
            return;
        };
        let Some(y) = self.area.y.checked_add(pos.y) else {
            return;
        };
        for x in (x0..).take(usize::from(consts::CELL_WIDTH)) {
            if let Some(cell) = self.buf.cell_mut((x, y)) {
                cell.set_char(symbol);
                cell.set_style(Style::reset().patch(style));
            }
        }
    }
}
