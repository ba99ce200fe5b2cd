use crate::audio::{AudioSink, Sound};
use crate::command::Command;
use crate::consts;
use crate::game::{Direction, Game, Tick};
use crate::highscore::{HighScore, HighScoreStore};
use crate::screens::{GameOver, StartScreen};
use crossterm::event::{poll, read, Event};
use rand::Rng;
use ratatui::{backend::Backend, buffer::Buffer, layout::Rect, widgets::Widget, Frame, Terminal};
use std::io;
use std::time::{Duration, Instant};

/// The whole application: the current screen plus everything that outlives a
/// single round
#[derive(Debug)]
pub(crate) struct App<R = rand::rngs::ThreadRng> {
    screen: Screen,
    rng: R,
    high_score: HighScore,
    store: Box<dyn HighScoreStore>,
    audio: Box<dyn AudioSink>,
    /// When the current screen should next be ticked
    next_tick: Option<Instant>,
}

impl<R: Rng> App<R> {
    pub(crate) fn new(rng: R, store: Box<dyn HighScoreStore>, audio: Box<dyn AudioSink>) -> App<R> {
        let high_score = HighScore::load(store.as_ref());
        tracing::info!(high_score = high_score.get(), "Loaded high score");
        App {
            screen: Screen::Start(StartScreen::new(high_score.get())),
            rng,
            high_score,
            store,
            audio,
            next_tick: None,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting() {
            terminal.draw(|frame| self.draw(frame))?;
            self.process_input()?;
        }
        Ok(())
    }

    /// Wait for either an input event or the current screen's next tick,
    /// whichever comes first, and handle it
    fn process_input(&mut self) -> io::Result<()> {
        let when = *self
            .next_tick
            .get_or_insert_with(|| Instant::now() + self.screen.period());
        let wait = when.saturating_duration_since(Instant::now());
        if wait.is_zero() || !poll(wait)? {
            self.next_tick = None;
            self.tick();
        } else {
            self.handle_event(read()?);
        }
        Ok(())
    }

    fn tick(&mut self) {
        let finished = match self.screen {
            Screen::Start(ref mut start) => {
                start.tick();
                None
            }
            Screen::GameOver(ref mut over) => {
                over.tick();
                None
            }
            Screen::Playing(ref mut game) => match game.tick(&mut self.rng) {
                Tick::Moved => None,
                Tick::Ate => {
                    self.audio.play(Sound::Eat);
                    None
                }
                Tick::Crashed => {
                    self.audio.play(Sound::Collide);
                    Some(game.score())
                }
                Tick::Filled => {
                    self.audio.play(Sound::Eat);
                    Some(game.score())
                }
            },
            Screen::Quit => None,
        };
        if let Some(score) = finished {
            let over = self.end_round(score);
            self.screen = Screen::GameOver(over);
        }
    }

    fn handle_event(&mut self, event: Event) {
        let Some(ev) = event.as_key_press_event() else {
            return;
        };
        let cmd = Command::from_key_event(ev);
        if cmd == Command::Quit {
            tracing::info!("Quitting");
            self.screen = Screen::Quit;
            return;
        }
        match self.screen {
            Screen::GameOver(ref over) if !over.ready() => (),
            Screen::Start(_) | Screen::GameOver(_) => self.new_round(),
            Screen::Playing(ref mut game) => match cmd {
                Command::Up => game.turn(Direction::North),
                Command::Down => game.turn(Direction::South),
                Command::Left => game.turn(Direction::West),
                Command::Right => game.turn(Direction::East),
                Command::Quit | Command::Other => (),
            },
            Screen::Quit => (),
        }
    }

    fn new_round(&mut self) {
        tracing::debug!(high_score = self.high_score.get(), "Starting new round");
        self.screen = Screen::Playing(Game::new(&mut self.rng, self.high_score.get()));
        self.next_tick = None;
    }

    /// Record the final score of a round, saving it if it is a new high
    /// score, and return the game-over screen summarizing the round
    fn end_round(&mut self, score: u32) -> GameOver {
        let new_record = self.high_score.record(score);
        tracing::info!(score, new_record, "Round over");
        if new_record {
            if let Err(e) = self.store.save(score) {
                tracing::warn!(error = ?e, "Could not save high score");
            }
        }
        GameOver::new(score, self.high_score.get(), new_record)
    }
}

impl<R> App<R> {
    fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    fn quitting(&self) -> bool {
        matches!(self.screen, Screen::Quit)
    }
}

impl<R> Widget for &App<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.screen {
            Screen::Start(ref start) => start.render(area, buf),
            Screen::Playing(ref game) => game.render(area, buf),
            Screen::GameOver(ref over) => over.render(area, buf),
            Screen::Quit => (),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
enum Screen {
    Start(StartScreen),
    Playing(Game),
    GameOver(GameOver),
    Quit,
}

impl Screen {
    /// Time between ticks of this screen
    fn period(&self) -> Duration {
        match self {
            Screen::Playing(_) => consts::TICK_PERIOD,
            Screen::Start(_) | Screen::GameOver(_) | Screen::Quit => consts::BLINK_PERIOD,
        }
    }
}
