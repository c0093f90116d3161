use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::Serialize;
use settle_core::{Board, BoardError, Piece, Placement};
use settle_engine::{bag::entropy_seed, Bag};
use settle_search::{Planner, SearchConfig, SearchOutcome, Session, SessionEvent, SessionSummary};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read board file {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid board")]
    Board(#[from] BoardError),
    #[error("failed to write JSON output")]
    Json(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct SolveReport<'a> {
    config: SearchConfig,
    board: &'a Board,
    spawn: Placement,
    /// Moves oldest first, one character each.
    moves: String,
    #[serde(flatten)]
    outcome: SearchOutcome,
}

fn read_board(path: &Path) -> Result<Board, CliError> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(text.parse()?)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn solve(board: Option<&Path>, piece: Piece, config: SearchConfig) -> Result<(), CliError> {
    let board = match board {
        Some(path) => read_board(path)?,
        None => Board::new(),
    };
    let spawn = Placement::spawn(piece, board.width());
    let outcome = Planner::new(config).search(&board, spawn);
    if outcome.best.is_none() {
        log::warn!("{} does not fit at spawn, nothing to place", piece);
    }
    print_json(&SolveReport {
        config,
        board: &board,
        spawn,
        moves: outcome.solution.to_string(),
        outcome,
    })
}

pub fn play(
    config: SearchConfig,
    seed: Option<u64>,
    pieces: u32,
    width: usize,
    height: usize,
) -> Result<(), CliError> {
    let board = Board::with_size(width, height)?;
    let seed = seed.unwrap_or_else(entropy_seed);
    log::info!("playing {} with seed {}", config, seed);

    let mut session = Session::new(config, board, Bag::random(seed)).with_piece_limit(pieces);
    loop {
        match session.tick() {
            SessionEvent::Spawned {
                piece,
                fits,
                moves,
                score,
            } => {
                if fits {
                    log::info!(
                        "#{} {}: {} moves, score {}",
                        session.state().pieces_placed + 1,
                        piece,
                        moves,
                        score
                    );
                } else {
                    log::info!("#{} {}: spawn blocked", session.state().pieces_placed + 1, piece);
                }
            }
            SessionEvent::Locked {
                placement,
                rows_cleared,
            } if rows_cleared > 0 => {
                log::info!("{:?} cleared {} rows", placement.piece, rows_cleared);
            }
            SessionEvent::GameOver | SessionEvent::Stopped => break,
            _ => {}
        }
    }
    log::debug!("final board:\n{}", session.state().board);
    print_json(&session.summary())
}

/// Totals for one configuration across every seed.
#[derive(Default)]
struct Tally {
    games: u32,
    game_overs: u32,
    pieces: u64,
    lines: u64,
    expanded: u64,
}

impl Tally {
    fn add(&mut self, summary: &SessionSummary) {
        self.games += 1;
        self.game_overs += summary.game_over as u32;
        self.pieces += summary.pieces_placed as u64;
        self.lines += summary.lines_cleared as u64;
        self.expanded += summary.nodes_expanded as u64;
    }

    fn mean(total: u64, games: u32) -> f64 {
        total as f64 / games.max(1) as f64
    }
}

pub fn compare(seeds: u64, pieces: u32) -> Result<(), CliError> {
    let jobs: Vec<(SearchConfig, u64)> = SearchConfig::all()
        .flat_map(|config| (0..seeds).map(move |seed| (config, seed)))
        .collect();
    log::info!("running {} games on {} threads", jobs.len(), rayon::current_num_threads());

    let results: Vec<SessionSummary> = jobs
        .par_iter()
        .map(|&(config, seed)| {
            Session::new(config, Board::new(), Bag::random(seed))
                .with_piece_limit(pieces)
                .run()
        })
        .collect();

    for config in SearchConfig::all() {
        let mut tally = Tally::default();
        for summary in results.iter().filter(|s| s.config == config) {
            tally.add(summary);
        }
        println!(
            "{:<24} pieces {:>7.1}  lines {:>6.1}  game overs {:>3}/{:<3}  nodes/piece {:>7.1}",
            config.to_string(),
            Tally::mean(tally.pieces, tally.games),
            Tally::mean(tally.lines, tally.games),
            tally.game_overs,
            tally.games,
            tally.expanded as f64 / tally.pieces.max(1) as f64,
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser as _;

    #[test]
    fn test_unknown_config_fails_at_parse() {
        let err = crate::Cli::try_parse_from([
            "settle",
            "solve",
            "--piece",
            "T",
            "--config",
            "astar/height",
        ])
        .unwrap_err();
        assert!(err.to_string().contains("astar"));
    }

    #[test]
    fn test_parse_play_defaults() {
        let cli = crate::Cli::try_parse_from(["settle", "-vv", "play", "--seed", "3"]).unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            crate::Command::Play {
                config,
                seed,
                pieces,
                width,
                height,
            } => {
                assert_eq!(config, SearchConfig::default());
                assert_eq!(seed, Some(3));
                assert_eq!((pieces, width, height), (100, 10, 20));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_missing_board_file_is_io_error() {
        let err = read_board(Path::new("/nonexistent/board.txt")).unwrap_err();
        assert!(matches!(err, CliError::Io { .. }));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_tally_means() {
        let mut tally = Tally::default();
        let summary = SessionSummary {
            config: SearchConfig::default(),
            pieces_placed: 10,
            lines_cleared: 2,
            game_over: true,
            tower_height: 5,
            nodes_expanded: 400,
        };
        tally.add(&summary);
        tally.add(&SessionSummary {
            game_over: false,
            lines_cleared: 4,
            ..summary.clone()
        });
        assert_eq!(tally.games, 2);
        assert_eq!(tally.game_overs, 1);
        assert_eq!(Tally::mean(tally.lines, tally.games), 3.0);
        assert_eq!(Tally::mean(0, 0), 0.0);
    }
}
