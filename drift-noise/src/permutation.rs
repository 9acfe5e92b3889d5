//! Seeded permutation table and the corner table derived from it.
//!
//! The permutation is a bijection over `0..256` that decorrelates lattice
//! corner hashes. The corner table precomputes the four second-level hashes
//! of every 2D lattice cell so the cached sampler resolves them with one
//! lookup instead of a chained walk.

use std::fmt;
use std::ops::Index;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::{TABLE_MASK, TABLE_SIZE};

/// How the permutation is drawn from the random source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermutationStrategy {
    /// Fisher-Yates shuffle of the identity table. Linear time.
    #[default]
    Shuffle,
    /// Legacy construction: each value draws random slots until it finds an
    /// empty one. Expected `n * H(n)` draws.
    Rejection,
}

/// A bijection over `0..256`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PermutationTable {
    values: [u8; TABLE_SIZE],
}

impl PermutationTable {
    /// Build a table from a seed.
    ///
    /// The seed is expanded with `ChaCha8`, so the mapping from seed to table
    /// is stable across platforms.
    #[must_use]
    pub fn build(seed: u64, strategy: PermutationStrategy) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::from_rng(&mut rng, strategy)
    }

    /// Build a table by drawing from an arbitrary random source.
    pub fn from_rng<R: Rng>(rng: &mut R, strategy: PermutationStrategy) -> Self {
        let values = match strategy {
            PermutationStrategy::Shuffle => shuffled(rng),
            PermutationStrategy::Rejection => rejection_sampled(rng),
        };
        Self { values }
    }

    /// The hash of a (possibly unwrapped) lattice index.
    #[inline]
    #[must_use]
    pub const fn hash(&self, index: usize) -> usize {
        self.values[index & TABLE_MASK] as usize
    }

    /// The raw table values.
    #[must_use]
    pub const fn values(&self) -> &[u8; TABLE_SIZE] {
        &self.values
    }
}

impl Index<usize> for PermutationTable {
    type Output = u8;

    #[inline]
    fn index(&self, index: usize) -> &u8 {
        &self.values[index & TABLE_MASK]
    }
}

impl fmt::Debug for PermutationTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PermutationTable")
            .field("head", &&self.values[..8])
            .finish_non_exhaustive()
    }
}

fn shuffled<R: Rng>(rng: &mut R) -> [u8; TABLE_SIZE] {
    let mut values = [0u8; TABLE_SIZE];
    for (i, val) in values.iter_mut().enumerate() {
        *val = i as u8;
    }
    values.shuffle(rng);
    values
}

fn rejection_sampled<R: Rng>(rng: &mut R) -> [u8; TABLE_SIZE] {
    let mut values = [0u8; TABLE_SIZE];
    let mut filled = [false; TABLE_SIZE];

    for value in 0..TABLE_SIZE {
        loop {
            let slot = usize::from(rng.random::<u8>());
            if !filled[slot] {
                values[slot] = value as u8;
                filled[slot] = true;
                break;
            }
        }
    }

    values
}

/// Hashes of the four corners of one 2D lattice cell.
///
/// Field order matches the RGBA channel order external consumers expect:
/// `aa` is the `(x, y)` corner, `ab` is `(x, y + 1)`, `ba` is `(x + 1, y)`
/// and `bb` is `(x + 1, y + 1)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[repr(C)]
pub struct CornerHashes {
    /// Corner `(x, y)`.
    pub aa: u8,
    /// Corner `(x, y + 1)`.
    pub ab: u8,
    /// Corner `(x + 1, y)`.
    pub ba: u8,
    /// Corner `(x + 1, y + 1)`.
    pub bb: u8,
}

impl CornerHashes {
    /// The four hashes in `aa, ab, ba, bb` order.
    #[must_use]
    pub const fn to_array(self) -> [u8; 4] {
        [self.aa, self.ab, self.ba, self.bb]
    }
}

/// 256x256 table of [`CornerHashes`], row-major with `y` as the row.
#[derive(Clone, PartialEq, Eq)]
pub struct CornerTable {
    cells: Box<[CornerHashes]>,
}

impl CornerTable {
    /// Derive the corner table from a permutation.
    #[must_use]
    pub fn derive(perm: &PermutationTable) -> Self {
        let mut cells = vec![CornerHashes::default(); TABLE_SIZE * TABLE_SIZE].into_boxed_slice();

        for py in 0..TABLE_SIZE {
            let row = &mut cells[py * TABLE_SIZE..(py + 1) * TABLE_SIZE];
            for (px, cell) in row.iter_mut().enumerate() {
                let a = perm.hash(px) + py;
                let b = perm.hash(px + 1) + py;
                *cell = CornerHashes {
                    aa: perm[a],
                    ab: perm[a + 1],
                    ba: perm[b],
                    bb: perm[b + 1],
                };
            }
        }

        Self { cells }
    }

    /// Corner hashes of the cell at `(x, y)`. Both indices wrap.
    #[inline]
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> CornerHashes {
        self.cells[(y & TABLE_MASK) * TABLE_SIZE + (x & TABLE_MASK)]
    }

    /// All cells, row-major with `y` as the row.
    #[must_use]
    pub fn cells(&self) -> &[CornerHashes] {
        &self.cells
    }
}

impl fmt::Debug for CornerTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CornerTable")
            .field("len", &self.cells.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_bijection(table: &PermutationTable) {
        let mut seen = [false; TABLE_SIZE];
        for &value in table.values() {
            assert!(!seen[usize::from(value)], "value {value} appears twice");
            seen[usize::from(value)] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn shuffle_is_bijection() {
        for seed in [0, 1, 42, 1337, u64::MAX] {
            assert_bijection(&PermutationTable::build(seed, PermutationStrategy::Shuffle));
        }
    }

    #[test]
    fn rejection_is_bijection() {
        for seed in [0, 1, 42, 1337, u64::MAX] {
            assert_bijection(&PermutationTable::build(seed, PermutationStrategy::Rejection));
        }
    }

    #[test]
    fn same_seed_same_table() {
        for strategy in [PermutationStrategy::Shuffle, PermutationStrategy::Rejection] {
            let a = PermutationTable::build(42, strategy);
            let b = PermutationTable::build(42, strategy);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_seeds_differ() {
        let a = PermutationTable::build(1, PermutationStrategy::Shuffle);
        let b = PermutationTable::build(2, PermutationStrategy::Shuffle);
        assert_ne!(a, b);
    }

    #[test]
    fn index_wraps() {
        let table = PermutationTable::build(7, PermutationStrategy::Shuffle);
        assert_eq!(table[256], table[0]);
        assert_eq!(table.hash(511), table.hash(255));
    }

    #[test]
    fn corner_table_matches_definition() {
        let perm = PermutationTable::build(42, PermutationStrategy::Shuffle);
        let corners = CornerTable::derive(&perm);
        assert_eq!(corners.cells().len(), TABLE_SIZE * TABLE_SIZE);

        for (px, py) in [(0, 0), (255, 0), (0, 255), (255, 255), (17, 200), (128, 64)] {
            let a = (perm.hash(px) + py) & TABLE_MASK;
            let b = (perm.hash((px + 1) & TABLE_MASK) + py) & TABLE_MASK;
            let expected = CornerHashes {
                aa: perm.values()[a],
                ab: perm.values()[(a + 1) & TABLE_MASK],
                ba: perm.values()[b],
                bb: perm.values()[(b + 1) & TABLE_MASK],
            };
            assert_eq!(corners.get(px, py), expected, "cell ({px}, {py})");
        }
    }

    #[test]
    fn corner_table_get_wraps() {
        let corners = CornerTable::derive(&PermutationTable::build(3, PermutationStrategy::Shuffle));
        assert_eq!(corners.get(256 + 5, 512 + 9), corners.get(5, 9));
    }
}
