//! Staged replay of a solution against the live game, one move per host tick.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use crate::game;
use settle_core::{GameState, Move, Placement, Solution};

/// Cooperative stop flag. Clones share the same flag.
#[derive(Clone, Debug, Default)]
pub struct StopSignal(Arc<AtomicBool>);

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// What a single tick did to the live game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// A move was taken off the replay stack. `applied` is false when the live
    /// piece could not make it.
    Moved { mv: Move, applied: bool },
    /// The replay stack ran out and the piece was locked.
    Locked {
        placement: Placement,
        rows_cleared: u8,
    },
    /// The stop signal was raised; nothing was touched.
    Stopped,
    /// Already locked, or no piece in play.
    Idle,
}

pub struct SolutionPlayer {
    stack: Vec<Move>,
    stop: StopSignal,
    done: bool,
}

impl SolutionPlayer {
    /// Prepare to replay `solution` against whatever piece is current.
    pub fn play(solution: Solution) -> Self {
        Self {
            stack: solution.into_replay_stack(),
            stop: StopSignal::new(),
            done: false,
        }
    }

    pub fn with_stop_signal(mut self, stop: StopSignal) -> Self {
        self.stop = stop;
        self
    }

    pub fn remaining(&self) -> usize {
        self.stack.len()
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Advance by one step: apply the move at the end of the replay stack, or
    /// lock the piece once the stack is empty.
    pub fn tick(&mut self, state: &mut GameState) -> Tick {
        if self.stop.is_stopped() {
            return Tick::Stopped;
        }
        if self.done {
            return Tick::Idle;
        }
        match self.stack.pop() {
            Some(mv) => {
                let applied = game::apply_move(state, mv);
                if !applied {
                    log::warn!(
                        "replayed {:?} does not fit the live piece at {:?}; skipping",
                        mv,
                        state.current
                    );
                }
                Tick::Moved { mv, applied }
            }
            None => {
                self.done = true;
                match game::lock(state) {
                    Some((placement, rows_cleared)) => Tick::Locked {
                        placement,
                        rows_cleared,
                    },
                    None => Tick::Idle,
                }
            }
        }
    }

    /// Tick until the piece locks or the stop signal is raised.
    pub fn run_to_end(&mut self, state: &mut GameState) -> Tick {
        loop {
            match self.tick(state) {
                Tick::Moved { .. } => continue,
                other => return other,
            }
        }
    }
}
