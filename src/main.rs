//! Self-play driver: two random movers play one game and the result is
//! printed. An optional first argument seeds the game, an optional second
//! one caps the number of plies.

use std::process::ExitCode;

use chess_rules::config::GameConfig;
use chess_rules::orchestrator::Session;
use log::error;

fn parse_arg<T: std::str::FromStr>(arg: Option<String>, what: &str) -> Result<Option<T>, String> {
    arg.map(|s| s.parse().map_err(|_| format!("invalid {what}: {s}")))
        .transpose()
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let seed = match parse_arg::<u64>(args.next(), "seed") {
        Ok(seed) => seed,
        Err(msg) => {
            error!("{msg}");
            return ExitCode::FAILURE;
        }
    };
    let max_plies = match parse_arg::<u32>(args.next(), "ply limit") {
        Ok(max_plies) => max_plies,
        Err(msg) => {
            error!("{msg}");
            return ExitCode::FAILURE;
        }
    };

    let mut config = GameConfig::aivai(seed);
    config.max_plies = max_plies;

    let mut session = Session::new(config, None);
    match session.run() {
        Ok(outcome) => {
            println!("{}", session.position().board);
            print!("{}", session.pgn());
            println!("{outcome:?}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("game aborted: {e}");
            ExitCode::FAILURE
        }
    }
}
