//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};
use std::time::Duration;

/// Time between movements of the snake
pub(crate) const TICK_PERIOD: Duration = Duration::from_millis(100);

/// Time between toggles of the blinking "press any key" prompts
pub(crate) const BLINK_PERIOD: Duration = Duration::from_millis(500);

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 80,
    height: 24,
};

/// Dimensions of the playing field, in cells
pub(crate) const GRID_SIZE: Size = Size {
    width: 20,
    height: 20,
};

/// Number of terminal columns used to draw a single grid cell.  Terminal
/// cells are about twice as tall as they are wide, so this keeps the board
/// square.
pub(crate) const CELL_WIDTH: u16 = 2;

/// Number of ticks for which the board border flashes after the snake eats a
/// fruit
pub(crate) const FLASH_FRAMES: u8 = 5;

/// Glyph for the snake's head
pub(crate) const SNAKE_HEAD_SYMBOL: char = '█';

/// Glyph for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: char = '▓';

/// Glyph for the fruit
pub(crate) const FRUIT_SYMBOL: char = '●';

/// Style for the snake's head
pub(crate) const SNAKE_HEAD_STYLE: Style = Style::new()
    .fg(Color::LightGreen)
    .add_modifier(Modifier::BOLD);

/// Style for the snake's body
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Green);

/// Style for the fruit
pub(crate) const FRUIT_STYLE: Style = Style::new().fg(Color::LightRed);

/// Style for the board border while it is flashing
pub(crate) const FLASH_STYLE: Style = Style::new()
    .fg(Color::Yellow)
    .add_modifier(Modifier::BOLD);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Style for the "GAME OVER" banner
pub(crate) const GAME_OVER_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::BOLD);

/// Style for the announcement of a new high score
pub(crate) const NEW_RECORD_STYLE: Style = Style::new()
    .fg(Color::Yellow)
    .add_modifier(Modifier::BOLD);
