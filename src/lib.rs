//! A small and simple library for Tree-of-Thought beam search.
//!
//! This library provides a generic beam-search explorer over caller-defined state spaces.
//! Starting from an initial state, it expands every frontier node level by level, scores
//! the children, and keeps only the best `beam_width` of them per level until `max_depth`
//! levels have been explored. States and actions are opaque to the search: it only hands
//! them to the caller's expansion and evaluation functions.
//!
//! # Example
//!
//! ```rust
//! use std::convert::Infallible;
//! use tot_lib::tree_of_thought::TreeOfThought;
//!
//! fn expand(state: &&'static str) -> Result<Vec<(&'static str, &'static str)>, Infallible> {
//!     Ok(match *state {
//!         "A" => vec![("B", "go-b"), ("C", "go-c")],
//!         _ => vec![],
//!     })
//! }
//!
//! fn evaluate(state: &&'static str) -> Result<f64, Infallible> {
//!     Ok(match *state {
//!         "A" => 1.0,
//!         "B" => 5.0,
//!         _ => 2.0,
//!     })
//! }
//!
//! // Create and configure the search using the builder
//! let tot = TreeOfThought::builder(expand, evaluate)
//!     .with_max_depth(1)
//!     .with_beam_width(1)
//!     .build()
//!     .unwrap();
//!
//! // Run the search and walk back from the best node
//! let tree = tot.search("A").unwrap();
//! let path: Vec<_> = tree.best_path().iter().map(|t| *t.state()).collect();
//!
//! assert_eq!(path, vec!["A", "B"]);
//! assert_eq!(tree.best().score(), 5.0);
//! ```

/// Error types for configuration and search failures.
pub mod error;
/// Contains the `Evaluator` trait, the scoring capability consumed by the search.
pub mod evaluator;
/// Contains the `Expander` trait, the successor capability consumed by the search.
pub mod expander;
/// Per-level observation hook.
pub mod observer;
/// Contains pre-made search spaces.
pub mod problems;
pub mod score;
/// Contains the `ThoughtNode` struct, the payload of a node in the search tree.
pub mod thought_node;
/// The arena holding a finished search and handles for walking it.
pub mod thought_tree;
/// The core module of the library, containing the `TreeOfThought` controller.
pub mod tree_of_thought;

pub use error::{ConfigError, SearchError};
pub use evaluator::Evaluator;
pub use expander::Expander;
pub use observer::{LevelReport, NoopObserver, SearchObserver};
pub use thought_node::ThoughtNode;
pub use thought_tree::{SearchStats, Thought, ThoughtTree};
pub use tree_of_thought::{SearchConfig, TreeOfThought, TreeOfThoughtBuilder};
