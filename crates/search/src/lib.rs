//! settle search crate - breadth/depth-first placement search and the host loop.
//!
//! A search starts from the spawn placement of one piece and walks the move
//! graph (shift left, shift right, step down, rotate) until the frontier is
//! empty. Every placement is expanded at most once. The best resting node
//! under the configured heuristic supplies the solution.

mod config;
mod movegen;
mod node;
mod session;
mod space;
mod traversal;

pub use config::{ConfigError, SearchConfig, Strategy};
pub use movegen::{expand, Children};
pub use node::Node;
pub use session::{Session, SessionEvent, SessionSummary};
pub use space::{Best, SearchSpace, SearchStats};
pub use traversal::{find_solution, Planner, Resting, SearchOutcome};
