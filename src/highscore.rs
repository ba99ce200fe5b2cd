use std::fmt;
use std::io;
use std::num::ParseIntError;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The best score achieved so far.  Only ever goes up.
#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub(crate) struct HighScore(u32);

impl HighScore {
    /// Read the high score from `store`, treating a missing, unreadable, or
    /// malformed record as zero
    pub(crate) fn load(store: &dyn HighScoreStore) -> HighScore {
        match store.load() {
            Ok(score) => HighScore(score),
            Err(e) => {
                tracing::warn!(error = ?e, "Could not read high score; starting from zero");
                HighScore::default()
            }
        }
    }

    pub(crate) fn get(self) -> u32 {
        self.0
    }

    /// Record the final score of a round.  Returns `true` if `score` beat the
    /// previous high score, in which case it becomes the new high score.
    pub(crate) fn record(&mut self, score: u32) -> bool {
        if score > self.0 {
            self.0 = score;
            true
        } else {
            false
        }
    }
}

/// Persistent storage for a single high score
pub(crate) trait HighScoreStore: fmt::Debug {
    /// Return the stored high score.  A store that has never been written to
    /// holds zero.
    fn load(&self) -> Result<u32, LoadError>;

    fn save(&self, score: u32) -> Result<(), SaveError>;
}

/// A [`HighScoreStore`] backed by a text file containing the score as a
/// decimal integer
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub(crate) fn new(path: PathBuf) -> FileStore {
        FileStore { path }
    }

    /// Return the default high score file path
    pub(crate) fn default_path() -> Option<PathBuf> {
        dirs::data_local_dir().map(|p| p.join("gridsnake").join("highscore.txt"))
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }
}

impl HighScoreStore for FileStore {
    fn load(&self) -> Result<u32, LoadError> {
        let src = match fs_err::read_to_string(&self.path) {
            Ok(src) => src,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(LoadError::read(e)),
        };
        src.trim().parse::<u32>().map_err(LoadError::parse)
    }

    fn save(&self, score: u32) -> Result<(), SaveError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs_err::create_dir_all(parent).map_err(SaveError::mkdir)?;
        }
        fs_err::write(&self.path, format!("{score}\n")).map_err(SaveError::write)?;
        Ok(())
    }
}

#[derive(Debug, Error)]
#[error("Failed to save high score to disk")]
pub(crate) struct SaveError(#[source] SaveErrorSource);

impl SaveError {
    fn mkdir(e: io::Error) -> Self {
        SaveError(SaveErrorSource::Mkdir(e))
    }

    fn write(e: io::Error) -> Self {
        SaveError(SaveErrorSource::Write(e))
    }
}

#[derive(Debug, Error)]
enum SaveErrorSource {
    #[error("failed to create parent directories")]
    Mkdir(#[source] io::Error),
    #[error("failed to write high score file")]
    Write(#[source] io::Error),
}

#[derive(Debug, Error)]
#[error("Failed to read high score from disk")]
pub(crate) struct LoadError(#[source] LoadErrorSource);

impl LoadError {
    fn read(e: io::Error) -> Self {
        LoadError(LoadErrorSource::Read(e))
    }

    fn parse(e: ParseIntError) -> Self {
        LoadError(LoadErrorSource::Parse(e))
    }
}

#[derive(Debug, Error)]
enum LoadErrorSource {
    #[error("failed to read high score file")]
    Read(#[source] io::Error),
    #[error("high score file does not contain a valid score")]
    Parse(#[source] ParseIntError),
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// An in-memory [`HighScoreStore`] that remembers every save.  Clones
    /// share the same storage.
    #[derive(Clone, Debug, Default)]
    pub(crate) struct MemoryStore {
        pub(crate) saved: Rc<RefCell<Vec<u32>>>,
        pub(crate) initial: u32,
    }

    impl MemoryStore {
        pub(crate) fn with_score(initial: u32) -> MemoryStore {
            MemoryStore {
                initial,
                ..MemoryStore::default()
            }
        }

        pub(crate) fn saves(&self) -> Vec<u32> {
            self.saved.borrow().clone()
        }
    }

    impl HighScoreStore for MemoryStore {
        fn load(&self) -> Result<u32, LoadError> {
            Ok(self.saved.borrow().last().copied().unwrap_or(self.initial))
        }

        fn save(&self, score: u32) -> Result<(), SaveError> {
            self.saved.borrow_mut().push(score);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn record_only_increases() {
        let mut hs = HighScore::default();
        assert!(!hs.record(0));
        assert!(hs.record(3));
        assert_eq!(hs.get(), 3);
        assert!(!hs.record(3));
        assert!(!hs.record(1));
        assert_eq!(hs.get(), 3);
        assert!(hs.record(4));
        assert_eq!(hs.get(), 4);
    }

    #[test]
    fn missing_file_is_zero() {
        let tmp = tempdir().expect("create temp dir");
        let store = FileStore::new(tmp.path().join("nope.txt"));
        assert_eq!(store.load().expect("missing file is not an error"), 0);
        assert_eq!(HighScore::load(&store).get(), 0);
    }

    #[test]
    fn malformed_file_is_zero() {
        let tmp = tempdir().expect("create temp dir");
        let path = tmp.path().join("highscore.txt");
        fs_err::write(&path, "lots\n").expect("write file");
        let store = FileStore::new(path);
        assert!(store.load().is_err());
        assert_eq!(HighScore::load(&store).get(), 0);
    }

    #[test]
    fn negative_score_is_malformed() {
        let tmp = tempdir().expect("create temp dir");
        let path = tmp.path().join("highscore.txt");
        fs_err::write(&path, "-5").expect("write file");
        assert_eq!(HighScore::load(&FileStore::new(path)).get(), 0);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let tmp = tempdir().expect("create temp dir");
        let path = tmp.path().join("highscore.txt");
        fs_err::write(&path, "  42 \r\n").expect("write file");
        assert_eq!(FileStore::new(path).load().expect("valid score"), 42);
    }

    #[test]
    fn save_and_load() {
        let tmp = tempdir().expect("create temp dir");
        let path = tmp.path().join("data").join("gridsnake").join("highscore.txt");
        let store = FileStore::new(path.clone());
        store.save(17).expect("save score");
        assert_eq!(
            fs_err::read_to_string(&path).expect("read back file"),
            "17\n"
        );
        assert_eq!(store.load().expect("valid score"), 17);
        store.save(23).expect("save score");
        assert_eq!(HighScore::load(&store).get(), 23);
    }

    #[test]
    fn save_into_file_path_fails() {
        let tmp = tempdir().expect("create temp dir");
        let blocker = tmp.path().join("blocker");
        fs_err::write(&blocker, "").expect("write file");
        let store = FileStore::new(blocker.join("highscore.txt"));
        let e = store.save(1).expect_err("parent is a regular file");
        assert_eq!(e.to_string(), "Failed to save high score to disk");
    }
}
