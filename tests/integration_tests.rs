// Integration tests for the ghost game
// These tests drive the dictionary, trie and game loop together

use ghost::cli::{CliInterface, parse_cli_from};
use ghost::*;
use std::io::Cursor;
use std::path::PathBuf;

fn config(players: usize) -> GameConfig {
    GameConfig::new(players, 3).unwrap()
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("{name}_{}.txt", std::process::id()))
}

fn play(words: &str, players: usize, input: &str) -> Option<GameResult> {
    let trie = Trie::build(load_dictionary_from_str(words)).unwrap();
    let mut interface = CliInterface::new(Cursor::new(input.to_string()));
    let result = game_loop(&trie, &config(players), &mut interface).unwrap();
    trie.teardown();
    result
}

#[test]
fn test_fourth_player_loses_on_cats() {
    // "cat" is exactly the minimum length and does not end the game
    let result = play("cat\ncats\ncar\n", 4, "c\na\nt\ns\n");
    assert_eq!(
        result,
        Some(GameResult {
            loser: 4,
            word: "cats".to_string(),
        })
    );
}

#[test]
fn test_invalid_prefix_then_retry() {
    // Player 1 tries 'z' after "do", is rejected, then completes "dog"
    // which is too short to lose on. Input then runs out.
    let trie = Trie::build(["dog"]).unwrap();
    let mut state = GameState::new(config(2), &trie);
    state.play_letter(&trie, 'd').unwrap();
    state.play_letter(&trie, 'o').unwrap();

    let outcome = state.play_letter(&trie, 'z').unwrap();
    assert!(matches!(outcome, TurnOutcome::InvalidPrefix { .. }));
    assert_eq!(state.fragment(), "do");
    assert_eq!(state.current_player(), 1);

    let result = play("dog\n", 2, "d\no\nz\ng\n");
    assert_eq!(result, None);
}

#[test]
fn test_two_letter_word_never_ends_game() {
    let trie = Trie::build(["it"]).unwrap();
    let mut state = GameState::new(config(2), &trie);
    state.play_letter(&trie, 'i').unwrap();
    let outcome = state.play_letter(&trie, 't').unwrap();
    assert_eq!(outcome, TurnOutcome::Continue { next_player: 1 });

    // Nothing follows "it", so every further letter is rejected
    for letter in 'a'..='z' {
        assert!(matches!(
            state.play_letter(&trie, letter).unwrap(),
            TurnOutcome::InvalidPrefix { .. }
        ));
    }
    assert_eq!(state.fragment(), "it");
}

#[test]
fn test_turn_order_three_players() {
    let trie = Trie::build(["abcdefghij"]).unwrap();
    let mut state = GameState::new(config(3), &trie);
    let mut players = Vec::new();
    for letter in "abcde".chars() {
        players.push(state.current_player());
        state.play_letter(&trie, letter).unwrap();
    }
    assert_eq!(players, vec![1, 2, 3, 1, 2]);
}

#[test]
fn test_console_input_noise_is_ignored() {
    // Digits, punctuation and blank lines re-prompt the same player,
    // and only the first letter of each line counts.
    let result = play("ghost\nghoul\n", 2, "1\n\nGx\n!\nhello\no\nu\nl\n");
    assert_eq!(
        result,
        Some(GameResult {
            loser: 1,
            word: "ghoul".to_string(),
        })
    );
}

#[test]
fn test_custom_dictionary_file_to_game() {
    use std::fs::File;
    use std::io::Write;

    let path = temp_path("ghost_integration_dictionary");
    {
        let mut file = File::create(&path).unwrap();
        writeln!(file, "Apple").unwrap();
        writeln!(file, "apply").unwrap();
        writeln!(file, "ape").unwrap();
    }

    let trie = load_trie(&DictionarySource::File(path.clone())).unwrap();
    assert_eq!(trie.word_count(), 3);
    assert!(trie.contains("apple"));

    let mut interface = CliInterface::new(Cursor::new("a\np\nx\np\nl\ny\n"));
    let result = game_loop(&trie, &config(3), &mut interface).unwrap();
    // Player 3 is rejected on "apx" and retries with 'p'
    assert_eq!(
        result,
        Some(GameResult {
            loser: 2,
            word: "apply".to_string(),
        })
    );

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_unreadable_dictionary_exit_code() {
    let path = temp_path("ghost_integration_missing");
    let _ = std::fs::remove_file(&path);

    let err = load_trie(&DictionarySource::File(path)).unwrap_err();
    assert!(matches!(err, GhostError::DictionaryUnreadable { .. }));
    assert_eq!(err.exit_code(), 3);
}

#[test]
fn test_cli_to_config_pipeline() {
    let cli = parse_cli_from(["ghost", "--embedded", "5"]).unwrap();
    let config = cli.game_config().unwrap();
    assert_eq!(config.players(), 5);
    assert_eq!(cli.dictionary_source(), DictionarySource::Embedded);

    let trie = load_trie(&cli.dictionary_source()).unwrap();
    assert!(!trie.is_empty());
    assert!(!trie.is_complete_word(trie.root()));

    let bad = parse_cli_from(["ghost", "1"]).unwrap().game_config().unwrap_err();
    assert_eq!(bad.exit_code(), 2);
}

#[test]
fn test_embedded_dictionary_game() {
    // "ghos" is not a word, "ghost" is
    let trie = Trie::build(load_dictionary_from_str(EMBEDDED_DICTIONARY)).unwrap();
    let mut interface = CliInterface::new(Cursor::new("g\nh\no\ns\nt\n"));
    let result = game_loop(&trie, &config(2), &mut interface).unwrap();
    assert_eq!(
        result,
        Some(GameResult {
            loser: 1,
            word: "ghost".to_string(),
        })
    );
}

#[test]
fn test_rebuilt_dictionary_answers_identically() {
    let first = Trie::build(load_dictionary_from_str(EMBEDDED_DICTIONARY)).unwrap();
    let second = Trie::build(load_dictionary_from_str(EMBEDDED_DICTIONARY)).unwrap();

    for word in load_dictionary_from_str(EMBEDDED_DICTIONARY) {
        assert!(first.contains(&word));
        assert!(second.contains(&word));
        for end in 1..word.len() {
            let prefix = &word[..end];
            assert_eq!(first.contains(prefix), second.contains(prefix));
        }
    }
    for probe in ["qz", "xyz", "ghostly", "zz"] {
        assert_eq!(first.has_prefix(probe), second.has_prefix(probe));
    }
    assert_eq!(first.word_count(), second.word_count());
}
