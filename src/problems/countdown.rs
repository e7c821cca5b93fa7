use crate::evaluator::Evaluator;
use crate::expander::Expander;
use std::convert::Infallible;

/// A move in the [`Countdown`] puzzle.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Move {
    /// Adds one.
    Increment,
    /// Adds the puzzle's step.
    Add(i64),
    /// Multiplies by two.
    Double,
}

/// Reach `target` from a starting integer.
///
/// Each state can move by `+1`, `+step` or `×2`. The score of a value is the negated
/// distance to the target, so the target itself scores `0.0` and is terminal: once it
/// is reached there is nothing left to expand.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct Countdown {
    pub target: i64,
    pub step: i64,
}

impl Countdown {
    pub fn new(target: i64, step: i64) -> Self {
        Self { target, step }
    }

    /// Returns `true` if `value` is the target.
    pub fn is_solved(&self, value: i64) -> bool {
        value == self.target
    }

    /// Applies a move to a value.
    pub fn apply(&self, value: i64, mv: Move) -> i64 {
        match mv {
            Move::Increment => value.saturating_add(1),
            Move::Add(step) => value.saturating_add(step),
            Move::Double => value.saturating_mul(2),
        }
    }

    fn moves(&self) -> [Move; 3] {
        [Move::Increment, Move::Add(self.step), Move::Double]
    }
}

impl Default for Countdown {
    /// Creates the puzzle `1 -> 100` with a step of 5.
    fn default() -> Self {
        Countdown::new(100, 5)
    }
}

impl Expander<i64, Move, Infallible> for Countdown {
    fn expand(&self, value: &i64) -> Result<Vec<(i64, Move)>, Infallible> {
        if self.is_solved(*value) {
            return Ok(Vec::new());
        }

        Ok(self
            .moves()
            .into_iter()
            .map(|mv| (self.apply(*value, mv), mv))
            .collect())
    }
}

impl Evaluator<i64, Infallible> for Countdown {
    fn evaluate(&self, value: &i64) -> Result<f64, Infallible> {
        Ok(-(self.target.abs_diff(*value) as f64))
    }
}

#[cfg(test)]
mod tests {
    use super::{Countdown, Move};
    use crate::evaluator::Evaluator;
    use crate::expander::Expander;
    use crate::tree_of_thought::TreeOfThought;

    #[test]
    fn target_is_terminal() {
        let puzzle = Countdown::new(10, 3);

        assert!(puzzle.expand(&10).unwrap().is_empty());
        assert_eq!(puzzle.evaluate(&10).unwrap(), 0.0);
        assert_eq!(puzzle.evaluate(&4).unwrap(), -6.0);
        assert_eq!(puzzle.evaluate(&13).unwrap(), -3.0);
    }

    #[test]
    fn expansion_lists_every_move() {
        let puzzle = Countdown::new(50, 7);

        let children = puzzle.expand(&3).unwrap();

        assert_eq!(
            children,
            vec![(4, Move::Increment), (10, Move::Add(7)), (6, Move::Double)]
        );
    }

    #[test]
    fn beam_search_reaches_target() {
        // arrange
        let puzzle = Countdown::new(21, 5);
        // the beam wanders past the target (22, 23, 19) before settling on 20 -> 21
        let tot = TreeOfThought::builder(puzzle, puzzle)
            .with_max_depth(7)
            .with_beam_width(3)
            .build()
            .unwrap();

        // act
        let tree = tot.search(1).unwrap();

        // assert
        let best = tree.best();
        assert_eq!(*best.state(), 21);
        assert_eq!(best.score(), 0.0);
        let mut value = 1;
        for thought in tree.best_path().iter().skip(1) {
            value = puzzle.apply(value, *thought.action().unwrap());
            assert_eq!(value, *thought.state());
        }
    }
}
