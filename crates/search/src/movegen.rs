//! Successor generation for search nodes.

use rustc_hash::FxHashSet;
use settle_core::{Move, Placement};
use smallvec::SmallVec;

use crate::node::Node;

/// At most one child per move.
pub type Children<'b> = SmallVec<[Node<'b>; 4]>;

/// Children of `node` worth queueing, in [`Move::ALL`] order.
///
/// Locked and invalid children are dropped, as are children whose placement
/// has already been expanded.
pub fn expand<'b>(node: &Node<'b>, visited: &FxHashSet<Placement>) -> Children<'b> {
    if !node.is_valid() || node.is_locked() {
        return Children::new();
    }
    Move::ALL
        .iter()
        .map(|&mv| node.step(mv))
        .filter(|child| !child.is_locked())
        .filter(|child| match child.key() {
            Some(key) => !visited.contains(&key),
            None => false,
        })
        .collect()
}
