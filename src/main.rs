use std::path::{absolute, PathBuf};

use clap::{ArgAction, Parser, Subcommand};
use env_logger::Env;
use rand::{rngs::StdRng, SeedableRng};

use gameroll::{
    app_dirs,
    error::GameRollError,
    games::AddMode,
    launcher::OsLauncher,
    scanner::Scanner,
    store::Store,
    ui, Session,
};

#[derive(Parser)]
#[command(version, about = "Keep a list of games and let chance pick what to play")]
struct CliArg {
    /// Game list file, default to games.json in the user's application data
    #[arg(long, env = "GAMEROLL_STORE", global = true)]
    store: Option<PathBuf>,
    /// Directory to scan for shortcuts, default to the desktop(s)
    #[arg(long = "dir", value_name = "DIR", global = true)]
    dirs: Vec<PathBuf>,
    /// URL scheme accepted in .url files, default to steam://
    #[arg(long = "url-scheme", value_name = "SCHEME", global = true)]
    url_schemes: Vec<String>,
    /// Seed for the random pick
    #[arg(long, global = true)]
    seed: Option<u64>,
    /// More log output, repeat for more
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Show the game list
    List {
        /// Only games whose name or path contains this text
        #[arg(short, long)]
        search: Option<String>,
        /// Only games taking part in the roll
        #[arg(long)]
        included: bool,
    },
    /// Look for new shortcuts in the scan directories
    Rescan,
    /// Add shortcuts or executables
    Add {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        /// Skip files that are missing or do not look like games
        #[arg(long)]
        drop: bool,
    },
    /// Remove the game at a listed position
    Remove { position: usize },
    /// Remove games whose file no longer exists
    RemoveMissing,
    /// Include or exclude the game at a listed position
    Toggle { position: usize },
    /// Include every game
    SelectAll,
    /// Exclude every game
    SelectNone,
    /// Pick a game without launching it
    Roll,
    /// Pick a game and launch it
    Run,
    /// Print the location of the game list
    Where,
}

fn to_index(position: usize) -> gameroll::Result<usize> {
    position
        .checked_sub(1)
        .ok_or(GameRollError::InvalidIndex(position))
}

/// Reports a bad index in the 1-based numbering `list` prints.
fn at_position<T>(position: usize, result: gameroll::Result<T>) -> gameroll::Result<T> {
    result.map_err(|err| match err {
        GameRollError::InvalidIndex(_) => GameRollError::InvalidIndex(position),
        other => other,
    })
}

fn main() -> anyhow::Result<()> {
    let args: CliArg = CliArg::parse();
    let level = match args.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    let store = match args.store {
        Some(path) => Store::new(absolute(path)?),
        None => Store::open_default()?,
    };
    if matches!(args.command, Some(Command::Where)) {
        println!("{}", store.path().display());
        return Ok(());
    }
    let scan_dirs = if args.dirs.is_empty() {
        app_dirs::desktop_dirs()
    } else {
        args.dirs
    };
    let scanner = if args.url_schemes.is_empty() {
        Scanner::default()
    } else {
        Scanner::with_url_schemes(args.url_schemes)
    };
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut session = Session::open(store, scanner, scan_dirs, rng, OsLauncher)?;

    match args.command.unwrap_or(Command::List {
        search: None,
        included: false,
    }) {
        Command::List { search, included } => {
            let query = search.unwrap_or_default();
            let listing = ui::entries_to_str(session.games().filter(&query, included));
            if !listing.is_empty() {
                println!("{listing}");
            }
        }
        Command::Rescan => println!("{}", ui::rescan_status(session.rescan()?)),
        Command::Add { paths, drop } => {
            let paths = paths
                .into_iter()
                .map(absolute)
                .collect::<std::io::Result<Vec<_>>>()?;
            let mode = if drop { AddMode::Dropped } else { AddMode::Picked };
            println!("{}", ui::add_status(session.add_paths(&paths, mode)?, drop));
        }
        Command::Remove { position } => {
            let removed = at_position(position, session.remove(to_index(position)?))?;
            println!("Removed: {}", removed.name);
        }
        Command::RemoveMissing => {
            let missing = session.remove_missing()?;
            println!("{}", ui::remove_missing_status(missing.len()));
        }
        Command::Toggle { position } => {
            let index = to_index(position)?;
            let included = at_position(position, session.toggle(index))?;
            let name = &session.games().entries()[index].name;
            println!("{} {}", if included { "Included:" } else { "Excluded:" }, name);
        }
        Command::SelectAll => session.set_all_included(true)?,
        Command::SelectNone => session.set_all_included(false)?,
        Command::Roll => match session.roll() {
            Some(entry) => println!("{}", ui::rolled_status(entry)),
            None => println!("{}", ui::NOTHING_INCLUDED),
        },
        Command::Run => match session.roll_and_run()? {
            Some(entry) => {
                println!("{}", ui::rolled_status(&entry));
                println!("{}", ui::launching_status(&entry));
            }
            None => println!("{}", ui::NOTHING_INCLUDED),
        },
        // printed before the session opens
        Command::Where => {}
    }

    session.close()?;
    Ok(())
}
