//! Exhaustive traversal of the move graph from a spawn placement.

use serde::Serialize;
use settle_core::{Board, Placement, Solution};
use settle_eval::{Scorer, SENTINEL};

use crate::config::SearchConfig;
use crate::movegen::expand;
use crate::node::Node;
use crate::space::{SearchSpace, SearchStats};

/// The placement a solution ends on, with its score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Resting {
    pub placement: Placement,
    pub score: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
    /// Empty when nothing resting was reachable.
    pub solution: Solution,
    pub best: Option<Resting>,
    pub stats: SearchStats,
}

impl SearchOutcome {
    /// Score of the best placement, or [`SENTINEL`] if there was none.
    pub fn score(&self) -> i32 {
        self.best.map_or(SENTINEL, |best| best.score)
    }
}

/// Searches the reachable placements of one piece and picks the best resting
/// one under the configured heuristic.
#[derive(Clone, Copy, Debug)]
pub struct Planner {
    config: SearchConfig,
    scorer: Scorer,
}

impl Planner {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            scorer: config.heuristic.scorer(),
        }
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    pub fn search(&self, board: &Board, spawn: Placement) -> SearchOutcome {
        let mut space = SearchSpace::new(self.config.strategy, Node::root(board, spawn));

        while let Some(node) = space.pop() {
            let Some(key) = node.key() else {
                break;
            };
            if !space.mark_visited(key) {
                continue;
            }
            let children = expand(&node, space.visited());
            space.offer(node, self.scorer);
            space.push_children(children);
        }

        let (best, stats) = space.into_parts();
        let (solution, best) = match best {
            Some(best) => {
                let resting = best.node.placement().map(|placement| Resting {
                    placement,
                    score: best.score,
                });
                (best.node.into_solution(), resting)
            }
            None => (Solution::new(), None),
        };

        log::debug!(
            "{} {:?}: expanded {}, generated {}, duplicates {}, peak frontier {}, promotions {}",
            self.config,
            spawn.piece,
            stats.expanded,
            stats.generated,
            stats.duplicates,
            stats.peak_frontier,
            stats.promotions
        );
        match &best {
            Some(r) => log::debug!(
                "best {:?} x={} y={} score={} in {} moves",
                r.placement.rotation,
                r.placement.x,
                r.placement.y,
                r.score,
                solution.len()
            ),
            None => log::debug!("no resting placement reachable"),
        }

        SearchOutcome {
            solution,
            best,
            stats,
        }
    }

    pub fn find_solution(&self, board: &Board, spawn: Placement) -> Solution {
        self.search(board, spawn).solution
    }
}

/// Moves from `spawn` to the best resting placement under `config`.
pub fn find_solution(config: SearchConfig, board: &Board, spawn: Placement) -> Solution {
    Planner::new(config).find_solution(board, spawn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Strategy;
    use settle_core::{Move, Piece, Rotation};
    use settle_eval::Heuristic;

    fn cfg(strategy: Strategy, heuristic: Heuristic) -> SearchConfig {
        SearchConfig::new(strategy, heuristic)
    }

    #[test]
    fn test_o_piece_settles_on_floor() {
        let board = Board::new();
        for config in SearchConfig::all() {
            let outcome = Planner::new(config).search(&board, Placement::spawn(Piece::O, 10));
            let best = outcome.best.expect("resting placement");
            assert_eq!(best.placement.y, 18, "{config}");
            assert!(!outcome.solution.is_empty(), "{config}");
        }
    }

    #[test]
    fn test_bfs_height_picks_first_flat_landing() {
        // every flat O landing scores 2; the first one found is a straight drop
        let board = Board::new();
        let outcome = Planner::new(cfg(Strategy::BreadthFirst, Heuristic::Height))
            .search(&board, Placement::spawn(Piece::O, 10));
        assert_eq!(outcome.score(), 2);
        assert_eq!(outcome.solution.len(), 18);
        assert!(outcome.solution.moves().iter().all(|&mv| mv == Move::StepDown));
    }

    #[test]
    fn test_blocked_spawn_yields_empty_solution() {
        let mut board = Board::new();
        board.fill_row(1);
        for config in SearchConfig::all() {
            let outcome = Planner::new(config).search(&board, Placement::spawn(Piece::T, 10));
            assert!(outcome.solution.is_empty());
            assert_eq!(outcome.best, None);
            assert_eq!(outcome.score(), SENTINEL);
            assert_eq!(outcome.stats.expanded, 0);
        }
    }

    #[test]
    fn test_i_piece_completes_row() {
        let mut board = Board::new();
        for x in 0..6 {
            board.set(x, 19, true);
        }
        let outcome = Planner::new(cfg(Strategy::BreadthFirst, Heuristic::ClearLines))
            .search(&board, Placement::spawn(Piece::I, 10));
        assert_eq!(
            outcome.best.map(|b| b.placement),
            Some(Placement::new(Piece::I, Rotation::North, 6, 19))
        );
        assert_eq!(outcome.score(), SENTINEL - 1);
    }

    #[test]
    fn test_free_fn_matches_planner() {
        let board = Board::new();
        let spawn = Placement::spawn(Piece::L, 10);
        let config = cfg(Strategy::DepthFirst, Heuristic::FillWells);
        assert_eq!(
            find_solution(config, &board, spawn),
            Planner::new(config).find_solution(&board, spawn)
        );
    }
}
