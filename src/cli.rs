use lexopt::{Arg, Parser};
use std::path::PathBuf;

/// What the program was asked to do on the command line
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Run {
        /// Configuration file given with `--config`; the default file is used
        /// if this is `None`
        config: Option<PathBuf>,
    },
    Help,
    Version,
}

impl Command {
    pub(crate) fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut config = None;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run { config })
    }
}

pub(crate) const USAGE: &str = concat!(
    "Usage: gridsnake [-c|--config <path>]\n",
    "\n",
    "Play Snake in the terminal\n",
    "\n",
    "Options:\n",
    "  -c, --config <path>  Read configuration from the given file\n",
    "  -h, --help           Display this help message and exit\n",
    "  -V, --version        Show the program version and exit\n",
);

pub(crate) fn version() -> String {
    format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
