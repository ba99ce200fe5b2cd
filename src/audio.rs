//! Sound effects.  The game only ever asks for one of two fixed sounds, and
//! never waits for or inspects the result of playing one.
use std::fmt;
use std::io::{self, Write};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Sound {
    /// The snake ate a fruit
    Eat,
    /// The snake hit a wall or itself
    Collide,
}

impl Sound {
    /// Number of terminal bell characters used to render the sound
    fn bells(self) -> usize {
        match self {
            Sound::Eat => 1,
            Sound::Collide => 2,
        }
    }
}

pub(crate) trait AudioSink: fmt::Debug {
    fn play(&mut self, sound: Sound);
}

/// Plays sounds by ringing the terminal bell
#[derive(Debug)]
pub(crate) struct Bell<W> {
    out: W,
}

impl Bell<io::Stdout> {
    pub(crate) fn stdout() -> Self {
        Bell { out: io::stdout() }
    }
}

impl<W: Write> Bell<W> {
    fn ring(&mut self, sound: Sound) -> io::Result<()> {
        self.out.write_all(&b"\x07".repeat(sound.bells()))?;
        self.out.flush()
    }
}

impl<W: Write + fmt::Debug> AudioSink for Bell<W> {
    fn play(&mut self, sound: Sound) {
        if let Err(e) = self.ring(sound) {
            tracing::debug!(?sound, error = %e, "Failed to ring terminal bell");
        }
    }
}

/// Discards all sounds
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Mute;

impl AudioSink for Mute {
    fn play(&mut self, sound: Sound) {
        tracing::trace!(?sound, "Sound muted");
    }
}
