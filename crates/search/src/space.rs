//! Frontier, visited set and best-so-far bookkeeping for one search.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use settle_core::Placement;
use settle_eval::{locked_score, Scorer};

use crate::config::Strategy;
use crate::movegen::Children;
use crate::node::Node;

type PopFn<'b> = fn(&mut VecDeque<Node<'b>>) -> Option<Node<'b>>;

/// Counters collected while searching.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes popped and expanded.
    pub expanded: usize,
    /// Children pushed onto the frontier.
    pub generated: usize,
    /// Pops skipped because the placement had already been expanded.
    pub duplicates: usize,
    /// Times the best node was replaced.
    pub promotions: usize,
    pub peak_frontier: usize,
}

/// Best resting node seen so far and its score.
#[derive(Clone, Debug)]
pub struct Best<'b> {
    pub node: Node<'b>,
    pub score: i32,
}

pub struct SearchSpace<'b> {
    frontier: VecDeque<Node<'b>>,
    pop: PopFn<'b>,
    visited: FxHashSet<Placement>,
    best: Option<Best<'b>>,
    stats: SearchStats,
}

impl<'b> SearchSpace<'b> {
    /// Frontier seeded with `root`, drained in the order `strategy` asks for.
    pub fn new(strategy: Strategy, root: Node<'b>) -> Self {
        let pop: PopFn<'b> = match strategy {
            Strategy::BreadthFirst => VecDeque::<Node<'b>>::pop_front,
            Strategy::DepthFirst => VecDeque::<Node<'b>>::pop_back,
        };
        let mut frontier = VecDeque::with_capacity(64);
        frontier.push_back(root);
        Self {
            frontier,
            pop,
            visited: FxHashSet::default(),
            best: None,
            stats: SearchStats {
                peak_frontier: 1,
                ..SearchStats::default()
            },
        }
    }

    pub fn pop(&mut self) -> Option<Node<'b>> {
        (self.pop)(&mut self.frontier)
    }

    /// Record `key` as expanded. Returns `false` if it already was.
    pub fn mark_visited(&mut self, key: Placement) -> bool {
        if self.visited.insert(key) {
            self.stats.expanded += 1;
            true
        } else {
            self.stats.duplicates += 1;
            false
        }
    }

    pub fn visited(&self) -> &FxHashSet<Placement> {
        &self.visited
    }

    pub fn push_children(&mut self, children: Children<'b>) {
        self.stats.generated += children.len();
        self.frontier.extend(children);
        self.stats.peak_frontier = self.stats.peak_frontier.max(self.frontier.len());
    }

    /// Consider `node` for best. Only resting nodes qualify, and an existing
    /// best is only replaced by a strictly lower score, so ties keep the
    /// earliest node found. Returns whether `node` was promoted.
    pub fn offer(&mut self, node: Node<'b>, scorer: Scorer) -> bool {
        let Some(placement) = node.placement() else {
            return false;
        };
        if !node.is_resting() {
            return false;
        }
        let score = locked_score(scorer, node.board(), &placement);
        if let Some(best) = &self.best {
            if score >= best.score {
                return false;
            }
        }
        log::trace!(
            "promote {:?} r={:?} x={} y={} score={} after {} moves",
            placement.piece,
            placement.rotation,
            placement.x,
            placement.y,
            score,
            node.solution().len()
        );
        self.best = Some(Best { node, score });
        self.stats.promotions += 1;
        debug_assert!(self.best.as_ref().map_or(false, |b| b.node.is_resting()));
        true
    }

    pub fn best(&self) -> Option<&Best<'b>> {
        self.best.as_ref()
    }

    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    pub fn into_parts(self) -> (Option<Best<'b>>, SearchStats) {
        (self.best, self.stats)
    }
}
