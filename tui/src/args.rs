//! Parsing command-line arguments.

use clap::{
    crate_description, crate_name, crate_version, value_parser, Arg, ArgAction, ArgMatches,
    Command, Error,
};
use log::LevelFilter;
use rlifeboard_lib::{Config, Format};
use std::{path::PathBuf, time::Duration};

/// How to start a new game in headless mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct NewGame {
    pub(crate) template: String,
    pub(crate) height: Option<usize>,
    pub(crate) width: Option<usize>,
    pub(crate) x: usize,
    pub(crate) y: usize,
}

/// What to do after start-up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Mode {
    /// The interactive menu.
    #[cfg(feature = "tui")]
    Menu,
    /// Runs the simulation without the menu.
    Headless {
        /// Number of turns to run. `None` runs until interrupted.
        turns: Option<u64>,
        /// Starts a new game instead of resuming the saved one.
        new_game: Option<NewGame>,
    },
}

/// A struct to store the parse results.
pub(crate) struct Args {
    pub(crate) config: Config,
    pub(crate) log_level: LevelFilter,
    pub(crate) mode: Mode,
}

fn command() -> Command {
    Command::new(crate_name!())
        .version(crate_version!())
        .about(crate_description!())
        .long_about(
            "Conway's Game of Life on a bounded board\n\
             \n\
             Create templates, place one on a new board, and watch it evolve \
             one generation per turn. The game is saved when you stop it, \
             and can be resumed later.\n\
             \n\
             Living cells are shown as `O`, dead cells as `.`.",
        )
        .arg(
            Arg::new("CONFIG")
                .help("Configuration file (JSON, YAML or TOML)")
                .short('c')
                .long("config")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("TEMPLATES")
                .help("Directory holding the templates")
                .long("templates")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("FORMAT")
                .help("Format used when saving templates")
                .long("format")
                .value_parser(["json", "yaml", "toml"]),
        )
        .arg(
            Arg::new("SAVE")
                .help("File holding the saved game")
                .long("save")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("INTERVAL")
                .help("Milliseconds between generations")
                .short('i')
                .long("interval")
                .value_parser(value_parser!(u64).range(1..)),
        )
        .arg(
            Arg::new("VERBOSE")
                .help("Logs more; repeat for even more")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("QUIET")
                .help("Only logs errors")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .conflicts_with("VERBOSE"),
        )
        .subcommand(
            Command::new("run")
                .about("Runs the simulation without entering the menu")
                .long_about(
                    "Runs the simulation without entering the menu\n\
                     Resumes the saved game, or starts a new one when a template is given. \
                     Every generation is printed, and the game is saved at the end.",
                )
                .arg(
                    Arg::new("TURNS")
                        .help("Number of turns to run, 0 runs until interrupted")
                        .short('n')
                        .long("turns")
                        .default_value("0")
                        .value_parser(value_parser!(u64)),
                )
                .arg(
                    Arg::new("TEMPLATE")
                        .help("Starts a new game with this template")
                        .short('t')
                        .long("template"),
                )
                .arg(
                    Arg::new("HEIGHT")
                        .help("Height of the new board")
                        .long("height")
                        .requires("TEMPLATE")
                        .value_parser(value_parser!(usize)),
                )
                .arg(
                    Arg::new("WIDTH")
                        .help("Width of the new board")
                        .long("width")
                        .requires("TEMPLATE")
                        .value_parser(value_parser!(usize)),
                )
                .arg(
                    Arg::new("X")
                        .help("Column of the template's top left corner")
                        .short('x')
                        .requires("TEMPLATE")
                        .value_parser(value_parser!(usize)),
                )
                .arg(
                    Arg::new("Y")
                        .help("Row of the template's top left corner")
                        .short('y')
                        .requires("TEMPLATE")
                        .value_parser(value_parser!(usize)),
                ),
        )
}

impl Args {
    /// Parses the command-line arguments.
    pub(crate) fn parse() -> Result<Self, Error> {
        Self::parse_from(std::env::args_os())
    }

    pub(crate) fn parse_from<I, T>(args: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let mut command = command();
        let matches = command.try_get_matches_from_mut(args)?;

        let mut config = match matches.get_one::<PathBuf>("CONFIG") {
            Some(path) => Config::from_path(path).map_err(|e| {
                command.error(
                    clap::error::ErrorKind::InvalidValue,
                    format!("cannot read {}: {}", path.display(), e),
                )
            })?,
            None => Config::default(),
        };
        if let Some(dir) = matches.get_one::<PathBuf>("TEMPLATES") {
            config = config.set_template_dir(dir);
        }
        if let Some(format) = matches.get_one::<String>("FORMAT") {
            let format: Format = format
                .parse()
                .map_err(|e| command.error(clap::error::ErrorKind::InvalidValue, e))?;
            config = config.set_template_format(format);
        }
        if let Some(file) = matches.get_one::<PathBuf>("SAVE") {
            config = config.set_game_file(file);
        }
        if let Some(&ms) = matches.get_one::<u64>("INTERVAL") {
            config = config.set_turn_interval(Duration::from_millis(ms));
        }

        let log_level = if matches.get_flag("QUIET") {
            LevelFilter::Error
        } else {
            match matches.get_count("VERBOSE") {
                0 => LevelFilter::Warn,
                1 => LevelFilter::Info,
                2 => LevelFilter::Debug,
                _ => LevelFilter::Trace,
            }
        };

        let mode = match matches.subcommand() {
            Some(("run", run)) => headless(run),
            #[cfg(feature = "tui")]
            _ => Mode::Menu,
            #[cfg(not(feature = "tui"))]
            _ => Mode::Headless {
                turns: None,
                new_game: None,
            },
        };

        Ok(Args {
            config,
            log_level,
            mode,
        })
    }
}

fn headless(matches: &ArgMatches) -> Mode {
    let turns = matches
        .get_one::<u64>("TURNS")
        .copied()
        .filter(|&turns| turns > 0);
    let new_game = matches
        .get_one::<String>("TEMPLATE")
        .map(|template| NewGame {
            template: template.clone(),
            height: matches.get_one::<usize>("HEIGHT").copied(),
            width: matches.get_one::<usize>("WIDTH").copied(),
            x: matches.get_one::<usize>("X").copied().unwrap_or(0),
            y: matches.get_one::<usize>("Y").copied().unwrap_or(0),
        });
    Mode::Headless { turns, new_game }
}
