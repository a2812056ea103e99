//! Prefix tree over the 26-letter lowercase alphabet.
//!
//! Nodes live in a single arena owned by [`Trie`] and refer to their children
//! by [`Cursor`] handles. A cursor borrows nothing, so the game loop can hold
//! one across turns while the trie stays read-only. Dropping the trie (or
//! calling [`Trie::teardown`]) releases every node at once.

use crate::error::GhostError;
use crate::{debug_log, info_log};

pub const ALPHABET_SIZE: usize = 26;

/// Longest word accepted into the dictionary.
pub const MAX_WORD_LENGTH: usize = 45;

const ROOT: Cursor = Cursor(0);

/// Position in a [`Trie`], reached by following letters from the root.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cursor(usize);

#[derive(Debug, Default, Clone)]
struct TrieNode {
    children: [Option<Cursor>; ALPHABET_SIZE],
    is_word: bool,
}

#[derive(Debug)]
pub struct Trie {
    nodes: Vec<TrieNode>,
    word_count: usize,
}

/// Child slot for `letter`, or `None` outside a-z (either case).
fn letter_index(letter: char) -> Option<usize> {
    letter
        .is_ascii_alphabetic()
        .then(|| (letter.to_ascii_lowercase() as u8 - b'a') as usize)
}

fn is_valid_word(word: &str) -> bool {
    !word.is_empty()
        && word.len() <= MAX_WORD_LENGTH
        && word.chars().all(|c| c.is_ascii_lowercase())
}

impl Trie {
    /// Creates a trie holding only the root node.
    pub fn new() -> Result<Self, GhostError> {
        let mut trie = Self {
            nodes: Vec::new(),
            word_count: 0,
        };
        trie.alloc_node()?;
        Ok(trie)
    }

    /// Builds a trie from a sequence of words.
    ///
    /// Words are trimmed and folded to lowercase. Tokens that are empty,
    /// longer than [`MAX_WORD_LENGTH`] or contain anything but letters are
    /// skipped. Fails only if node storage cannot grow, in which case the
    /// partially built trie is dropped.
    pub fn build<I, S>(words: I) -> Result<Self, GhostError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new()?;
        let mut skipped = 0usize;
        for word in words {
            if !trie.insert(word.as_ref())? {
                skipped += 1;
            }
        }
        info_log!(
            "Trie built: {} words, {} nodes, {} tokens skipped",
            trie.word_count,
            trie.nodes.len(),
            skipped
        );
        Ok(trie)
    }

    /// Inserts one word, returning `false` if the token was rejected.
    pub fn insert(&mut self, word: &str) -> Result<bool, GhostError> {
        let word = word.trim().to_ascii_lowercase();
        if !is_valid_word(&word) {
            debug_log!("Skipping dictionary token {:?}", word);
            return Ok(false);
        }

        let mut current = ROOT;
        for letter in word.chars() {
            let Some(slot) = letter_index(letter) else {
                return Ok(false);
            };
            current = match self.nodes[current.0].children[slot] {
                Some(child) => child,
                None => {
                    let child = self.alloc_node()?;
                    self.nodes[current.0].children[slot] = Some(child);
                    child
                }
            };
        }

        let node = &mut self.nodes[current.0];
        if !node.is_word {
            node.is_word = true;
            self.word_count += 1;
        }
        Ok(true)
    }

    fn alloc_node(&mut self) -> Result<Cursor, GhostError> {
        self.nodes
            .try_reserve(1)
            .map_err(|_| GhostError::AllocationFailure)?;
        self.nodes.push(TrieNode::default());
        Ok(Cursor(self.nodes.len() - 1))
    }

    #[must_use]
    pub fn root(&self) -> Cursor {
        ROOT
    }

    /// Follows `letter` from `cursor`.
    ///
    /// Returns `None` when no dictionary word continues this way, including
    /// for non-alphabetic letters.
    #[must_use]
    pub fn advance(&self, cursor: Cursor, letter: char) -> Option<Cursor> {
        let slot = letter_index(letter)?;
        self.nodes.get(cursor.0)?.children[slot]
    }

    #[must_use]
    pub fn is_complete_word(&self, cursor: Cursor) -> bool {
        self.nodes.get(cursor.0).is_some_and(|node| node.is_word)
    }

    /// Follows every letter of `prefix` from the root.
    #[must_use]
    pub fn walk(&self, prefix: &str) -> Option<Cursor> {
        prefix
            .chars()
            .try_fold(self.root(), |cursor, letter| self.advance(cursor, letter))
    }

    #[must_use]
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.walk(prefix).is_some()
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.walk(word)
            .is_some_and(|cursor| self.is_complete_word(cursor))
    }

    /// Number of distinct words stored.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Number of nodes, root included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Releases every node and returns how many were freed.
    pub fn teardown(self) -> usize {
        let freed = self.nodes.len();
        drop(self);
        info_log!("Trie torn down: {} nodes released", freed);
        freed
    }
}
