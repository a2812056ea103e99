use crate::debug_log;
use crate::dictionary::DictionarySource;
use crate::error::GhostError;
use crate::game_state::{DEFAULT_MIN_WORD_LENGTH, GameConfig, GameInterface, GameResult};
use clap::Parser;
use clap::error::ErrorKind;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::ffi::OsString;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

const BANNER: &str = r"_______           _______  _______ _________
(  ____ \|\     /|(  ___  )(  ____ \\__   __/
| (    \/| )   ( || (   ) || (    \/   ) (
| |      | (___) || |   | || (_____    | |
| | ____ |  ___  || |   | |(_____  )   | |
| | \_  )| (   ) || |   | |      ) |   | |
| (___) || )   ( || (___) |/\____) |   | |
(_______)|/     \|(_______)\_______)   )_(";

/// Ghost: take turns adding letters, and don't be the one to finish a word.
#[derive(Parser, Debug)]
#[command(name = "ghost", author, version, about, long_about = None)]
pub struct Cli {
    /// Number of players (must be >= 2)
    #[arg(value_name = "N", allow_negative_numbers = true)]
    pub players: String,

    /// Path to a newline-delimited dictionary file
    #[arg(short = 'd', long = "dictionary")]
    pub dictionary: Option<PathBuf>,

    /// Use the built-in word list instead of looking for words.txt
    #[arg(long, conflicts_with = "dictionary")]
    pub embedded: bool,

    /// Words of this many letters or fewer do not end the game
    #[arg(long = "min-length", default_value_t = DEFAULT_MIN_WORD_LENGTH)]
    pub min_length: usize,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Validates the player count and thresholds.
    pub fn game_config(&self) -> Result<GameConfig, GhostError> {
        let players = self
            .players
            .trim()
            .parse::<usize>()
            .map_err(|_| GhostError::InvalidPlayerCount(self.players.clone()))?;
        GameConfig::new(players, self.min_length)
    }

    #[must_use]
    pub fn dictionary_source(&self) -> DictionarySource {
        DictionarySource::resolve(self.dictionary.as_deref(), self.embedded)
    }
}

/// Parses process arguments. `--help` and `--version` print and exit here.
pub fn parse_cli() -> Result<Cli, GhostError> {
    parse_cli_from(std::env::args_os())
}

pub fn parse_cli_from<I, T>(args: I) -> Result<Cli, GhostError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args).map_err(|err| match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
        ErrorKind::InvalidValue | ErrorKind::ValueValidation => {
            GhostError::InvalidArgument(err.to_string())
        }
        _ => GhostError::Usage(err.to_string()),
    })
}

// UI Input/Output functions

/// Clears the terminal (when there is one) and prints the banner.
pub fn display_greeting() {
    let mut stdout = io::stdout();
    if stdout.is_terminal()
        && let Err(e) = execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))
    {
        debug_log!("Could not clear screen: {}", e);
    }
    println!("{BANNER}");
}

/// First non-blank character of `line`, lowercased, if it is a letter.
fn parse_letter(line: &str) -> Option<char> {
    line.trim_start()
        .chars()
        .next()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
}

/// Prompts `player` until a line starting with a letter arrives.
///
/// Returns `None` at end of input.
pub fn read_letter<R: BufRead>(reader: &mut R, player: usize) -> Option<char> {
    loop {
        print!("Player {player} says letter: ");
        if let Err(e) = io::stdout().flush() {
            debug_log!("Could not flush prompt: {}", e);
        }

        let mut input = String::new();
        match reader.read_line(&mut input) {
            Ok(0) => return None,
            Ok(_) => {}
            Err(e) => {
                log::warn!("Failed to read player input: {e}");
                return None;
            }
        }

        if let Some(letter) = parse_letter(&input) {
            return Some(letter);
        }
        debug_log!("Discarding non-alphabetic input {:?}", input);
    }
}

/// Writes a fatal error to `out` as a single line.
pub fn report_error<W: Write>(out: &mut W, err: &GhostError) {
    debug_log!("Exiting with status {}: {:?}", err.exit_code(), err);
    if let Err(e) = writeln!(out, "{err}") {
        debug_log!("Could not report error: {}", e);
    }
}

pub fn display_fragment(fragment: &str) {
    println!("\nCurrent word fragment: {fragment}");
}

pub fn display_invalid_prefix(attempted: &str) {
    println!("There's no word that begins with \"{attempted}\".");
    println!("Try again.");
}

pub fn display_game_over(result: &GameResult) {
    println!("\nPlayer {} loses!", result.loser);
    println!("They spelled the word \"{}\".", result.word);
    println!("Thanks for playing!\n");
}

pub fn display_input_closed() {
    println!("\nInput closed. Nobody loses this time.");
}

/// Console implementation of [`GameInterface`] over any line reader.
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn display_fragment(&mut self, fragment: &str) {
        display_fragment(fragment);
    }

    fn read_letter(&mut self, player: usize) -> Option<char> {
        read_letter(&mut self.reader, player)
    }

    fn display_invalid_prefix(&mut self, attempted: &str) {
        display_invalid_prefix(attempted);
    }

    fn display_game_over(&mut self, result: &GameResult) {
        display_game_over(result);
    }

    fn display_input_closed(&mut self) {
        display_input_closed();
    }
}
