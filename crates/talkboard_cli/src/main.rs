//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `talkboard_core` wiring by loading the bundled seed.
//! - Keep output deterministic apart from generated ids.

use std::process::ExitCode;
use talkboard_core::{
    core_version, default_boards, init_logging, BoardRepository, BoardService,
    InMemoryBoardStore, LoggingConfig,
};

/// Optional absolute directory for rolling logs.
const LOG_DIR_ENV: &str = "TALKBOARD_LOG_DIR";

fn main() -> ExitCode {
    println!("talkboard_core version={}", core_version());

    if let Ok(log_dir) = std::env::var(LOG_DIR_ENV) {
        if let Err(err) = init_logging(&LoggingConfig::new(log_dir)) {
            eprintln!("logging disabled: {err}");
        }
    }

    let store = match InMemoryBoardStore::from_boards(default_boards()) {
        Ok(store) => store,
        Err(err) => {
            eprintln!("seed rejected: {err}");
            return ExitCode::FAILURE;
        }
    };
    let mut service = BoardService::new(store);

    let Some(first_id) = service.boards().first().map(|board| board.id) else {
        println!("no boards");
        return ExitCode::SUCCESS;
    };
    let board = match service.activate(first_id) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("activate failed: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!("board name={:?} talks={}", board.name, board.talk_count());
    for track in &board.tracks {
        println!("track name={:?} talks={}", track.name, track.talks.len());
    }
    log::debug!(
        "event=cli_smoke module=cli status=ok boards={}",
        service.repo().boards().len()
    );
    ExitCode::SUCCESS
}
