//! settle-engine - board/piece oracle, live game mutations and solution replay.
//!
//! Provides collision checks, single-step movement, copy-on-write piece
//! writing, the piece bag and the staged solution player.

pub mod apply;
pub mod bag;
pub mod collision;
pub mod game;
pub mod movement;
pub mod player;

pub use apply::{lock_piece, write_piece, write_piece_mut};
pub use bag::Bag;
pub use collision::{collides, hard_drop_y, is_resting, piece_fits};
pub use movement::{try_apply, try_rotate, try_shift, try_step_down};
pub use player::{SolutionPlayer, StopSignal, Tick};
