use crate::evaluator::Evaluator;
use crate::expander::Expander;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::convert::Infallible;

const EXPAND_SALT: u64 = 0x9e37_79b9_7f4a_7c15;
const SCORE_SALT: u64 = 0xc2b2_ae3d_27d4_eb4f;

/// A pseudo-random search space that is still a pure function of its states.
///
/// States are `u64` identifiers. The children of a state and its score are drawn from a
/// `StdRng` seeded with `seed` and the state itself, so the same space always yields the
/// same tree. Actions are the child's index among its siblings.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct SyntheticSpace {
    /// Seed shared by every state of the space.
    pub seed: u64,
    /// Upper bound (inclusive) on the number of children of a state. A state may have none.
    pub max_branching: usize,
    /// When non-zero, scores are whole numbers in `0..score_levels`, which makes ties
    /// common. When zero, scores are uniform in `[0, 1)`.
    pub score_levels: u32,
}

impl SyntheticSpace {
    pub fn new(seed: u64, max_branching: usize) -> Self {
        Self {
            seed,
            max_branching,
            score_levels: 0,
        }
    }

    /// Quantizes scores into `levels` distinct values.
    pub fn with_score_levels(mut self, levels: u32) -> Self {
        self.score_levels = levels;
        self
    }

    fn rng_for(&self, state: u64, salt: u64) -> StdRng {
        StdRng::seed_from_u64(self.seed ^ state.rotate_left(17) ^ salt)
    }
}

impl Default for SyntheticSpace {
    fn default() -> Self {
        SyntheticSpace::new(3819201, 4)
    }
}

impl Expander<u64, usize, Infallible> for SyntheticSpace {
    fn expand(&self, state: &u64) -> Result<Vec<(u64, usize)>, Infallible> {
        let mut rng = self.rng_for(*state, EXPAND_SALT);
        let count = rng.random_range(0..=self.max_branching);
        Ok((0..count).map(|index| (rng.random::<u64>(), index)).collect())
    }
}

impl Evaluator<u64, Infallible> for SyntheticSpace {
    fn evaluate(&self, state: &u64) -> Result<f64, Infallible> {
        let mut rng = self.rng_for(*state, SCORE_SALT);
        let score = if self.score_levels == 0 {
            rng.random::<f64>()
        } else {
            f64::from(rng.random_range(0..self.score_levels))
        };
        Ok(score)
    }
}
