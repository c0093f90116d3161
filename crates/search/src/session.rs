//! Host loop: spawn a piece, plan it, replay the plan one tick at a time.

use serde::Serialize;
use settle_core::{Board, GameState, Move, Piece, Placement};
use settle_engine::{game, Bag, SolutionPlayer, StopSignal, Tick};

use crate::config::SearchConfig;
use crate::traversal::Planner;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    /// A new piece entered play and was planned.
    Spawned {
        piece: Piece,
        fits: bool,
        moves: usize,
        score: i32,
    },
    Moved {
        mv: Move,
        applied: bool,
    },
    Locked {
        placement: Placement,
        rows_cleared: u8,
    },
    /// A piece spawned into filled cells and was locked there.
    GameOver,
    /// Stop signal raised or piece limit reached.
    Stopped,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub config: SearchConfig,
    pub pieces_placed: u32,
    pub lines_cleared: u32,
    pub game_over: bool,
    pub tower_height: usize,
    pub nodes_expanded: usize,
}

pub struct Session {
    planner: Planner,
    state: GameState,
    bag: Bag,
    player: Option<SolutionPlayer>,
    stop: StopSignal,
    spawn_blocked: bool,
    piece_limit: Option<u32>,
    nodes_expanded: usize,
}

impl Session {
    pub fn new(config: SearchConfig, board: Board, bag: Bag) -> Self {
        Self {
            planner: Planner::new(config),
            state: GameState::with_board(board),
            bag,
            player: None,
            stop: StopSignal::new(),
            spawn_blocked: false,
            piece_limit: None,
            nodes_expanded: 0,
        }
    }

    /// Stop once `limit` pieces have been locked.
    pub fn with_piece_limit(mut self, limit: u32) -> Self {
        self.piece_limit = Some(limit);
        self
    }

    /// Handle that stops the session from outside the loop.
    pub fn stop_signal(&self) -> StopSignal {
        self.stop.clone()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Advance the game by one step.
    pub fn tick(&mut self) -> SessionEvent {
        if self.stop.is_stopped() {
            return SessionEvent::Stopped;
        }
        if self.state.game_over {
            return SessionEvent::GameOver;
        }
        let tick = match self.player.as_mut() {
            Some(player) => player.tick(&mut self.state),
            None => return self.spawn_next(),
        };
        match tick {
            Tick::Moved { mv, applied } => SessionEvent::Moved { mv, applied },
            Tick::Locked {
                placement,
                rows_cleared,
            } => {
                self.player = None;
                if self.spawn_blocked {
                    self.state.game_over = true;
                    log::info!(
                        "spawn blocked, game over after {} pieces",
                        self.state.pieces_placed
                    );
                }
                SessionEvent::Locked {
                    placement,
                    rows_cleared,
                }
            }
            Tick::Stopped => SessionEvent::Stopped,
            Tick::Idle => {
                self.player = None;
                self.spawn_next()
            }
        }
    }

    fn spawn_next(&mut self) -> SessionEvent {
        if let Some(limit) = self.piece_limit {
            if self.state.pieces_placed >= limit {
                self.stop.stop();
                return SessionEvent::Stopped;
            }
        }

        let piece = self.bag.next_piece();
        let fits = game::spawn(&mut self.state, piece);
        self.spawn_blocked = !fits;
        let spawn = Placement::spawn(piece, self.state.board.width());

        let outcome = self.planner.search(&self.state.board, spawn);
        self.nodes_expanded += outcome.stats.expanded;
        let event = SessionEvent::Spawned {
            piece,
            fits,
            moves: outcome.solution.len(),
            score: outcome.score(),
        };
        self.player =
            Some(SolutionPlayer::play(outcome.solution).with_stop_signal(self.stop.clone()));
        event
    }

    /// Tick until game over, the stop signal, or the piece limit.
    pub fn run(&mut self) -> SessionSummary {
        loop {
            match self.tick() {
                SessionEvent::GameOver | SessionEvent::Stopped => break,
                SessionEvent::Locked { placement, rows_cleared } => log::trace!(
                    "locked {:?} at x={} y={}, {} rows",
                    placement.piece,
                    placement.x,
                    placement.y,
                    rows_cleared
                ),
                _ => {}
            }
        }
        self.summary()
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            config: self.planner.config(),
            pieces_placed: self.state.pieces_placed,
            lines_cleared: self.state.lines_cleared,
            game_over: self.state.game_over,
            tower_height: self.state.board.tower_height(),
            nodes_expanded: self.nodes_expanded,
        }
    }
}
