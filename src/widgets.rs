use crate::consts;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    text::{Line, Span, Text},
    widgets::Widget,
};

/// The game's title, drawn above a little snake chasing a fruit
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Logo;

impl Logo {
    const TEXT_WIDTH: u16 = 28;
    const TEXT_HEIGHT: u16 = 5;
    const SNAKE_BODY_LENGTH: u16 = 10;
    const SNAKE_FRUIT_GUTTER: u16 = 2;
    pub(crate) const HEIGHT: u16 = Self::TEXT_HEIGHT + 2;
    pub(crate) const WIDTH: u16 = Self::TEXT_WIDTH;

    #[rustfmt::skip]
    const TEXT: [&'static str; Self::TEXT_HEIGHT as usize] = [
         " ____              _        ",
         "/ ___| _ __   __ _| | _____ ",
        r"\___ \| '_ \ / _` | |/ / _ \",
         " ___) | | | | (_| |   <  __/",
        r"|____/|_| |_|\__,_|_|\_\___|",
    ];
}

impl Widget for Logo {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [area] = Layout::horizontal([Self::WIDTH])
            .flex(Flex::Start)
            .areas(area);
        let [words_area, diagram_area] = Layout::vertical([Self::TEXT_HEIGHT, 1])
            .flex(Flex::Start)
            .spacing(1)
            .areas(area);
        Text::from_iter(Self::TEXT)
            .style(consts::SNAKE_STYLE)
            .render(words_area, buf);
        let [body_area, head_area, _, fruit_area] = Layout::horizontal([
            Constraint::Length(Self::SNAKE_BODY_LENGTH),
            Constraint::Length(1),
            Constraint::Length(Self::SNAKE_FRUIT_GUTTER),
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .areas(diagram_area);
        for (cells, symbol, style) in [
            (body_area, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE),
            (head_area, consts::SNAKE_HEAD_SYMBOL, consts::SNAKE_HEAD_STYLE),
            (fruit_area, consts::FRUIT_SYMBOL, consts::FRUIT_STYLE),
        ] {
            for p in cells.positions() {
                if let Some(cell) = buf.cell_mut(p) {
                    cell.set_char(symbol);
                    cell.set_style(style);
                }
            }
        }
    }
}

/// How-to-play text for the start screen
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Instructions;

impl Instructions {
    pub(crate) const HEIGHT: u16 = 6;
    pub(crate) const WIDTH: u16 = 20;
}

impl Widget for Instructions {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = Text::from_iter([
            Line::from("Move the snake with:"),
            keys_line("       ", ["←", "↓", "↑", "→"]),
            keys_line("   or: ", ["a", "s", "w", "d"]),
            keys_line("   or: ", ["h", "j", "k", "l"]),
            Line::from("Eat the fruit, but"),
            Line::from("don't hit anything!"),
        ]);
        debug_assert_eq!(
            text.height(),
            usize::from(Self::HEIGHT),
            "Instructions::HEIGHT is wrong"
        );
        debug_assert_eq!(
            text.width(),
            usize::from(Self::WIDTH),
            "Instructions::WIDTH is wrong"
        );
        text.render(area, buf);
    }
}

fn keys_line(lead: &'static str, keys: [&'static str; 4]) -> Line<'static> {
    let mut line = Line::from(lead);
    for (i, key) in keys.into_iter().enumerate() {
        if i > 0 {
            line.push_span(" ");
        }
        line.push_span(Span::styled(key, consts::KEY_STYLE));
    }
    line
}
