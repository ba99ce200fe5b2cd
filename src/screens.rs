//! The passive screens shown before the first round and after each round.
//! Both wait for any key, showing a prompt that blinks on every tick.
use crate::consts;
use crate::util::get_display_area;
use crate::widgets::{Instructions, Logo};
use ratatui::{
    buffer::Buffer,
    layout::{Flex, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};
use std::borrow::Cow;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct StartScreen {
    best: u32,
    prompt: Blink,
}

impl StartScreen {
    pub(crate) fn new(best: u32) -> StartScreen {
        StartScreen {
            best,
            prompt: Blink::default(),
        }
    }

    pub(crate) fn tick(&mut self) {
        self.prompt.toggle();
    }
}

impl Widget for &StartScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [logo_area] = Layout::horizontal([Logo::WIDTH])
            .flex(Flex::Center)
            .areas(rows(display, 1, Logo::HEIGHT));
        Logo.render(logo_area, buf);
        let [instructions_area] = Layout::horizontal([Instructions::WIDTH])
            .flex(Flex::Center)
            .areas(rows(display, 9, Instructions::HEIGHT));
        Instructions.render(instructions_area, buf);
        centered(format!("High Score: {}", self.best), Style::new())
            .render(row(display, 16), buf);
        if self.prompt.visible {
            centered("Press any key to start", Style::new())
                .render(row(display, 18), buf);
        }
        quit_hint().render(row(display, 20), buf);
    }
}

/// The summary shown when a round ends
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct GameOver {
    score: u32,
    best: u32,
    new_record: bool,
    /// Whether the screen has been up for at least one tick.  Until then,
    /// keys do not start a new round.
    ready: bool,
    prompt: Blink,
}

impl GameOver {
    pub(crate) fn new(score: u32, best: u32, new_record: bool) -> GameOver {
        GameOver {
            score,
            best,
            new_record,
            ready: false,
            prompt: Blink::default(),
        }
    }

    #[cfg(test)]
    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    #[cfg(test)]
    pub(crate) fn best(&self) -> u32 {
        self.best
    }

    #[cfg(test)]
    pub(crate) fn new_record(&self) -> bool {
        self.new_record
    }

    /// Returns `true` once a key press should start a new round
    pub(crate) fn ready(&self) -> bool {
        self.ready
    }

    pub(crate) fn tick(&mut self) {
        self.ready = true;
        self.prompt.toggle();
    }
}

impl Widget for &GameOver {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let mid = display.height / 2;
        centered("GAME OVER", consts::GAME_OVER_STYLE)
            .render(row(display, mid.saturating_sub(3)), buf);
        centered(format!("Final Score: {}", self.score), Style::new())
            .render(row(display, mid.saturating_sub(1)), buf);
        centered(format!("High Score: {}", self.best), Style::new())
            .render(row(display, mid), buf);
        if self.new_record {
            centered("New high score!", consts::NEW_RECORD_STYLE)
                .render(row(display, mid + 1), buf);
        }
        if self.prompt.visible {
            centered("Press any key to play again", Style::new())
                .render(row(display, mid + 3), buf);
        }
        quit_hint().render(row(display, mid + 5), buf);
    }
}

/// A prompt that alternates between shown and hidden
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Blink {
    visible: bool,
}

impl Blink {
    fn toggle(&mut self) {
        self.visible = !self.visible;
    }
}

impl Default for Blink {
    fn default() -> Blink {
        Blink { visible: true }
    }
}

fn centered<'a, S: Into<Cow<'a, str>>>(text: S, style: Style) -> Line<'a> {
    Line::from(Span::styled(text, style)).centered()
}

fn quit_hint() -> Line<'static> {
    Line::from_iter([
        Span::raw("Quit ("),
        Span::styled("q", consts::KEY_STYLE),
        Span::raw(")"),
    ])
    .centered()
}

/// The rows of `display` from `offset` down, `height` rows tall
fn rows(display: Rect, offset: u16, height: u16) -> Rect {
    Rect {
        y: display.y.saturating_add(offset),
        height,
        ..display
    }
    .intersection(display)
}

fn row(display: Rect, offset: u16) -> Rect {
    rows(display, offset, 1)
}
