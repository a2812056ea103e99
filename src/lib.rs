// Library interface for ghost
// This allows integration tests to access internal modules

pub mod cli;
pub mod dictionary;
pub mod error;
pub mod game_state;
pub mod logging;
pub mod trie;

// Re-export commonly used items for easier testing
pub use dictionary::{
    DictionarySource, EMBEDDED_DICTIONARY, load_dictionary_from_file, load_dictionary_from_str,
    load_trie,
};
pub use error::GhostError;
pub use game_state::{
    GameConfig, GameInterface, GameResult, GameState, TurnOutcome, game_loop,
};
pub use trie::{Cursor, MAX_WORD_LENGTH, Trie};
