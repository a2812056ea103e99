use ghost::cli::{CliInterface, display_greeting, parse_cli, report_error};
use ghost::{GhostError, debug_log, game_loop, info_log, load_trie, logging};
use std::io;
use std::process::ExitCode;

fn run() -> Result<(), GhostError> {
    display_greeting();

    let cli = parse_cli()?;
    logging::init(cli.verbose);
    let config = cli.game_config()?;

    let source = cli.dictionary_source();
    let trie = load_trie(&source)?;
    info_log!(
        "Dictionary ready: {} words in {} nodes",
        trie.word_count(),
        trie.node_count()
    );

    let mut interface = CliInterface::new(io::stdin().lock());
    let result = game_loop(&trie, &config, &mut interface);

    let freed = trie.teardown();
    debug_log!("Released {} dictionary nodes", freed);

    result.map(|_| ())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&mut io::stderr(), &e);
            ExitCode::from(e.exit_code())
        }
    }
}
