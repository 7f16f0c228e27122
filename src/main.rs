mod app;
mod command;
mod config;
mod consts;
mod game;
mod util;
use crate::app::App;
use crate::config::Config;
use anyhow::Context;
use lexopt::{Arg, Parser};
use std::io::{self, ErrorKind};
use std::path::PathBuf;
use std::process::ExitCode;

static USAGE: &str = "\
Usage: torusnake [options]

Snake on a torus: steer with the arrow keys (or WASD, or hjkl), eat the
apples, and don't run into yourself.  The board has no walls; whatever
leaves one edge re-enters from the opposite one.

Options:
  -c <file>, --config <file>    Read configuration from <file>

  -h, --help                    Display this help message and exit

  -V, --version                 Show the program version and exit
";

#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct Args {
    /// Path given with `--config`, if any
    config: Option<PathBuf>,
}

impl Args {
    /// Parse the command line.  Returns `None` if the program should exit
    /// without playing anything.
    fn parse() -> Result<Option<Args>, lexopt::Error> {
        Args::parse_from(Parser::from_env())
    }

    fn parse_from(mut parser: Parser) -> Result<Option<Args>, lexopt::Error> {
        let mut args = Args::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('h') | Arg::Long("help") => {
                    print!("{USAGE}");
                    return Ok(None);
                }
                Arg::Short('V') | Arg::Long("version") => {
                    println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                    return Ok(None);
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Some(args))
    }

    /// Read the configuration file named on the command line, or the file at
    /// the default path if none was.  A missing file is only an error when it
    /// was asked for explicitly.
    fn load_config(&self) -> anyhow::Result<Config> {
        if let Some(ref path) = self.config {
            Config::load(path, false)
                .with_context(|| format!("failed to load configuration from {}", path.display()))
        } else {
            let path = Config::default_path().context("failed to locate the configuration file")?;
            Config::load(&path, true)
                .with_context(|| format!("failed to load configuration from {}", path.display()))
        }
    }
}

fn main() -> ExitCode {
    let args = match Args::parse() {
        Ok(Some(args)) => args,
        Ok(None) => return ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("torusnake: {e}");
            eprint!("{USAGE}");
            return ExitCode::from(2);
        }
    };
    let config = match args.load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("torusnake: {e:#}");
            return ExitCode::from(2);
        }
    };
    let terminal = ratatui::init();
    let r = App::new(config).run(terminal);
    ratatui::restore();
    io_exit(r)
}

fn io_exit(r: io::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(2)
        }
    }
}
