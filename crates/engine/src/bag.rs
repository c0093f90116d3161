//! Piece sources for the host loop.

use rand::{Rng as _, RngCore as _, SeedableRng as _};
use settle_core::Piece;

/// Deterministic PRNG
pub type Prng = rand_pcg::Pcg64Mcg;

/// Fresh seed from an entropy based RNG, for runs that don't pin one.
pub fn entropy_seed() -> u64 {
    rand::thread_rng().next_u64()
}

enum Source {
    Random(Prng),
    Fixed,
}

/// Seven-bag randomizer, or a fixed sequence that repeats.
pub struct Bag {
    source: Source,
    pieces: Vec<Piece>,
    index: usize,
}

impl Bag {
    /// Every piece once per bag, shuffled by a PRNG seeded with `seed`.
    pub fn random(seed: u64) -> Self {
        Self {
            source: Source::Random(Prng::seed_from_u64(seed)),
            pieces: Piece::ALL.to_vec(),
            index: 0,
        }
    }

    /// Cycles through `pieces` in order. Empty input falls back to all seven.
    pub fn fixed(pieces: &[Piece]) -> Self {
        let pieces = if pieces.is_empty() {
            Piece::ALL.to_vec()
        } else {
            pieces.to_vec()
        };
        Self {
            source: Source::Fixed,
            pieces,
            index: 0,
        }
    }

    pub fn next_piece(&mut self) -> Piece {
        if let Source::Random(prng) = &mut self.source {
            // partial Fisher-Yates: draw from the not-yet-dealt tail
            let idx = prng.gen_range(self.index..self.pieces.len());
            self.pieces.swap(self.index, idx);
        }
        let piece = self.pieces[self.index];
        self.index = (self.index + 1) % self.pieces.len();
        piece
    }
}
