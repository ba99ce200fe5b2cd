use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// An abstract input command, decoupled from the key that produced it
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Quit,
    Up,
    Down,
    Left,
    Right,
    /// Any other key.  Used to dismiss the start & game-over screens.
    Other,
}

impl Command {
    pub(crate) fn from_key_event(ev: KeyEvent) -> Command {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Command::Quit,
            (_, KeyCode::Esc) => Command::Quit,
            (_, KeyCode::Up) => Command::Up,
            (_, KeyCode::Down) => Command::Down,
            (_, KeyCode::Left) => Command::Left,
            (_, KeyCode::Right) => Command::Right,
            (m, KeyCode::Char(c)) if normal_modifiers.contains(m) => {
                match c.to_ascii_lowercase() {
                    'q' => Command::Quit,
                    'w' | 'k' => Command::Up,
                    's' | 'j' => Command::Down,
                    'a' | 'h' => Command::Left,
                    'd' | 'l' => Command::Right,
                    _ => Command::Other,
                }
            }
            _ => Command::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(KeyCode::Char('c').into(), Command::Other)]
    #[case(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), Command::Quit)]
    #[case(KeyCode::Esc.into(), Command::Quit)]
    #[case(KeyCode::Char('q').into(), Command::Quit)]
    #[case(KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::SHIFT), Command::Quit)]
    #[case(KeyCode::Up.into(), Command::Up)]
    #[case(KeyCode::Char('w').into(), Command::Up)]
    #[case(KeyCode::Char('k').into(), Command::Up)]
    #[case(KeyCode::Down.into(), Command::Down)]
    #[case(KeyCode::Char('s').into(), Command::Down)]
    #[case(KeyCode::Char('j').into(), Command::Down)]
    #[case(KeyCode::Left.into(), Command::Left)]
    #[case(KeyCode::Char('a').into(), Command::Left)]
    #[case(KeyCode::Char('h').into(), Command::Left)]
    #[case(KeyCode::Right.into(), Command::Right)]
    #[case(KeyEvent::new(KeyCode::Char('D'), KeyModifiers::SHIFT), Command::Right)]
    #[case(KeyCode::Char('l').into(), Command::Right)]
    #[case(KeyCode::Enter.into(), Command::Other)]
    #[case(KeyCode::Char(' ').into(), Command::Other)]
    #[case(KeyEvent::new(KeyCode::Char('w'), KeyModifiers::ALT), Command::Other)]
    fn test_from_key_event(#[case] ev: KeyEvent, #[case] cmd: Command) {
        assert_eq!(Command::from_key_event(ev), cmd);
    }
}
