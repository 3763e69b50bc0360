//! Strictly Minimax - command-line front end
//!
//! Reads boards from the command line, asks the search engine for the
//! optimal move, and prints the answer.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use serde::Serialize;
use strictly_tictactoe::{
    Action, Board, Outcome, Player, Position, Search, SearchConfig, outcome, player, result,
    terminal, validate,
};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => SearchConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => SearchConfig::default(),
    };

    match cli.command {
        Command::Best { board, json } => run_best(board, config, json),
        Command::Play {
            from,
            opening,
            json,
        } => run_play(from.unwrap_or_default(), opening, config, json),
    }
}

/// Answer for a single board.
#[derive(Debug, Serialize)]
struct BestReport {
    board: String,
    mover: Player,
    outcome: Outcome,
    action: Option<Action>,
    position: Option<Position>,
    value: i32,
    nodes: u64,
}

/// One move of a self-played game.
#[derive(Debug, Serialize)]
struct PlayedMove {
    player: Player,
    action: Action,
    board: String,
}

/// Record of a self-played game.
#[derive(Debug, Serialize)]
struct PlayReport {
    start: String,
    moves: Vec<PlayedMove>,
    outcome: Outcome,
}

/// Print the optimal move for `board`.
#[instrument(skip(board, config))]
fn run_best(board: Board, config: SearchConfig, json: bool) -> Result<()> {
    validate(&board).context("board cannot occur in a legal game")?;

    let mut search = Search::new(config);
    let evaluation = search.evaluate(&board);
    let action = *evaluation.action();
    let report = BestReport {
        board: board.to_string().replace('\n', "/"),
        mover: player(&board),
        outcome: outcome(&board),
        action,
        position: action.and_then(|a| a.position()),
        value: *evaluation.value(),
        nodes: *search.stats().nodes(),
    };
    info!(action = ?report.action, value = report.value, "Best move computed");

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}\n", board);
    match (report.action, report.position) {
        (Some(action), Some(position)) => {
            println!("{} to move: play {} {}", report.mover, action, position);
            println!("value: {}", describe_value(report.value));
        }
        _ => println!("game over: {}", describe_outcome(report.outcome)),
    }
    Ok(())
}

/// Play `start` out with minimax on both sides.
///
/// When `opening` is given, the side to move plays it before the search
/// takes over.
#[instrument(skip(start, config))]
fn run_play(
    start: Board,
    opening: Option<Position>,
    config: SearchConfig,
    json: bool,
) -> Result<()> {
    validate(&start).context("board cannot occur in a legal game")?;
    if opening.is_some() && terminal(&start) {
        anyhow::bail!("cannot play an opening on a finished game");
    }

    let mut search = Search::new(config);
    let mut board = start;
    let mut moves = Vec::new();

    if !json {
        println!("{}\n", board);
    }
    let mut forced = opening.map(Action::from);
    while let Some(action) = forced.take().or_else(|| search.best_action(&board)) {
        let mover = player(&board);
        board = result(&board, action)?;
        debug!(%mover, %action, "Move played");

        if !json {
            println!("{} plays {}\n{}\n", mover, action, board);
        }
        moves.push(PlayedMove {
            player: mover,
            action,
            board: board.to_string().replace('\n', "/"),
        });
    }

    let report = PlayReport {
        start: start.to_string().replace('\n', "/"),
        moves,
        outcome: outcome(&board),
    };
    info!(
        moves = report.moves.len(),
        nodes = *search.stats().nodes(),
        "Game finished"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("result: {}", describe_outcome(report.outcome));
    }
    Ok(())
}

fn describe_value(value: i32) -> &'static str {
    match value.signum() {
        1 => "X wins with best play",
        -1 => "O wins with best play",
        _ => "draw with best play",
    }
}

fn describe_outcome(outcome: Outcome) -> String {
    match outcome {
        Outcome::Winner(player) => format!("{} wins", player),
        Outcome::Draw => "draw".to_string(),
        Outcome::InProgress => "in progress".to_string(),
    }
}
