//! Contains ready-made search spaces that implement both [`crate::expander::Expander`] and
//! [`crate::evaluator::Evaluator`].

/// Reach a target integer with a handful of arithmetic moves.
pub mod countdown;
/// Placeholder capabilities: nothing expands, everything scores zero.
pub mod stub;
/// A deterministic pseudo-random tree for exercising the search at scale.
pub mod synthetic;
