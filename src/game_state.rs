use crate::error::GhostError;
use crate::info_log;
use crate::trie::{Cursor, MAX_WORD_LENGTH, Trie};

/// Words of this length or shorter never end the game.
pub const DEFAULT_MIN_WORD_LENGTH: usize = 3;

pub const MIN_PLAYERS: usize = 2;

/// Validated game settings. Only constructible through [`GameConfig::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    players: usize,
    min_word_length: usize,
    max_fragment_length: usize,
}

impl GameConfig {
    pub fn new(players: usize, min_word_length: usize) -> Result<Self, GhostError> {
        Self::with_limits(players, min_word_length, MAX_WORD_LENGTH)
    }

    pub(crate) fn with_limits(
        players: usize,
        min_word_length: usize,
        max_fragment_length: usize,
    ) -> Result<Self, GhostError> {
        if players < MIN_PLAYERS {
            return Err(GhostError::InvalidPlayerCount(players.to_string()));
        }
        if min_word_length == 0 || min_word_length >= max_fragment_length {
            return Err(GhostError::InvalidMinLength {
                min: min_word_length,
                max: max_fragment_length,
            });
        }
        Ok(Self {
            players,
            min_word_length,
            max_fragment_length,
        })
    }

    #[must_use]
    pub fn players(&self) -> usize {
        self.players
    }

    #[must_use]
    pub fn min_word_length(&self) -> usize {
        self.min_word_length
    }

    #[must_use]
    pub fn max_fragment_length(&self) -> usize {
        self.max_fragment_length
    }
}

/// Result of playing one letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Letter accepted; `next_player` is up.
    Continue { next_player: usize },
    /// No dictionary word starts with fragment + letter. Nothing changed.
    InvalidPrefix { attempted: String },
    /// The fragment became a word longer than the minimum.
    GameOver(GameResult),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    pub loser: usize,
    pub word: String,
}

/// Turn state of a single game. Holds a cursor into the trie, not the trie.
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    current_player: usize,
    fragment: String,
    cursor: Cursor,
}

impl GameState {
    #[must_use]
    pub fn new(config: GameConfig, trie: &Trie) -> Self {
        Self {
            config,
            current_player: 1,
            fragment: String::new(),
            cursor: trie.root(),
        }
    }

    #[must_use]
    pub fn current_player(&self) -> usize {
        self.current_player
    }

    #[must_use]
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    /// Applies `letter` for the current player.
    ///
    /// An unknown prefix leaves the state untouched. Going past the fragment
    /// bound is fatal.
    pub fn play_letter(&mut self, trie: &Trie, letter: char) -> Result<TurnOutcome, GhostError> {
        let letter = letter.to_ascii_lowercase();
        let Some(next) = trie.advance(self.cursor, letter) else {
            return Ok(TurnOutcome::InvalidPrefix {
                attempted: format!("{}{}", self.fragment, letter),
            });
        };

        if self.fragment.len() >= self.config.max_fragment_length {
            return Err(GhostError::FragmentOverflow {
                max: self.config.max_fragment_length,
            });
        }
        self.fragment.push(letter);
        self.cursor = next;

        if trie.is_complete_word(next) && self.fragment.len() > self.config.min_word_length {
            return Ok(TurnOutcome::GameOver(GameResult {
                loser: self.current_player,
                word: self.fragment.clone(),
            }));
        }

        self.current_player = (self.current_player % self.config.players) + 1;
        Ok(TurnOutcome::Continue {
            next_player: self.current_player,
        })
    }
}

/// I/O seam between the game loop and whoever is playing.
pub trait GameInterface {
    fn display_fragment(&mut self, fragment: &str);
    /// Next letter from `player`, or `None` once input is exhausted.
    fn read_letter(&mut self, player: usize) -> Option<char>;
    fn display_invalid_prefix(&mut self, attempted: &str);
    fn display_game_over(&mut self, result: &GameResult);
    fn display_input_closed(&mut self);
}

/// Plays one game to completion.
///
/// Returns `Ok(None)` if the input runs out before anyone loses.
pub fn game_loop<I: GameInterface>(
    trie: &Trie,
    config: &GameConfig,
    interface: &mut I,
) -> Result<Option<GameResult>, GhostError> {
    let mut state = GameState::new(*config, trie);
    info_log!("Starting game with {} players", config.players);

    loop {
        interface.display_fragment(state.fragment());
        let Some(letter) = interface.read_letter(state.current_player()) else {
            interface.display_input_closed();
            return Ok(None);
        };

        match state.play_letter(trie, letter)? {
            TurnOutcome::Continue { .. } => {}
            TurnOutcome::InvalidPrefix { attempted } => {
                interface.display_invalid_prefix(&attempted);
            }
            TurnOutcome::GameOver(result) => {
                info_log!("Player {} loses on '{}'", result.loser, result.word);
                interface.display_game_over(&result);
                return Ok(Some(result));
            }
        }
    }
}
