use crate::error::GhostError;
use crate::info_log;
use crate::trie::Trie;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

pub const EMBEDDED_DICTIONARY: &str = include_str!("resources/words.txt");

/// File name looked up in the working directory and the user data directory.
pub const DICTIONARY_FILE_NAME: &str = "words.txt";

/// Where the word list comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionarySource {
    File(PathBuf),
    Embedded,
}

impl DictionarySource {
    /// Picks the dictionary to load.
    ///
    /// An explicit path always wins, even if it turns out to be unreadable.
    /// Otherwise `./words.txt` and then `<data dir>/ghost/words.txt` are
    /// tried before falling back to the embedded list.
    #[must_use]
    pub fn resolve(explicit: Option<&Path>, embedded: bool) -> Self {
        if let Some(path) = explicit {
            return Self::File(path.to_path_buf());
        }
        if embedded {
            return Self::Embedded;
        }
        default_dictionary_paths()
            .into_iter()
            .find(|path| path.is_file())
            .map_or(Self::Embedded, Self::File)
    }
}

/// Candidate dictionary locations, in lookup order.
#[must_use]
pub fn default_dictionary_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(".").join(DICTIONARY_FILE_NAME)];
    if let Some(data_dir) = dirs::data_dir() {
        paths.push(data_dir.join("ghost").join(DICTIONARY_FILE_NAME));
    }
    paths
}

fn normalize_line(line: &str) -> Option<String> {
    let word = line.trim();
    (!word.is_empty()).then(|| word.to_ascii_lowercase())
}

pub fn load_dictionary_from_str(data: &str) -> Vec<String> {
    data.lines().filter_map(normalize_line).collect()
}

pub fn load_dictionary_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, GhostError> {
    let path = path.as_ref();
    let unreadable = |source| GhostError::DictionaryUnreadable {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(unreadable)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        if let Some(word) = normalize_line(&line.map_err(unreadable)?) {
            words.push(word);
        }
    }
    Ok(words)
}

/// Reads the word list from `source` and builds the trie from it.
pub fn load_trie(source: &DictionarySource) -> Result<Trie, GhostError> {
    let words = match source {
        DictionarySource::File(path) => {
            info_log!("Loading dictionary from {}", path.display());
            load_dictionary_from_file(path)?
        }
        DictionarySource::Embedded => {
            info_log!("Loading embedded dictionary");
            load_dictionary_from_str(EMBEDDED_DICTIONARY)
        }
    };
    Trie::build(words)
}
