use thiserror::Error;

/// An invalid search configuration, reported before any search starts.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A beam width of zero would discard every candidate.
    #[error("beam width must be at least 1")]
    ZeroBeamWidth,
}

/// A failure raised by one of the caller-supplied capabilities during a search.
///
/// `E` is the error type shared by the expander and the evaluator. The level that
/// failed is dropped as a whole; no partial frontier is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError<E> {
    /// The expander failed on a node at `depth`.
    #[error("expansion failed at depth {depth}: {source}")]
    Expansion {
        /// Depth of the node that was being expanded.
        depth: usize,
        /// The expander's error.
        source: E,
    },
    /// The evaluator failed on a state that would have been placed at `depth`.
    #[error("evaluation failed at depth {depth}: {source}")]
    Evaluation {
        /// Depth the evaluated node would have had.
        depth: usize,
        /// The evaluator's error.
        source: E,
    },
}

impl<E> SearchError<E> {
    /// Returns the depth at which the search failed.
    pub fn depth(&self) -> usize {
        match self {
            SearchError::Expansion { depth, .. } | SearchError::Evaluation { depth, .. } => *depth,
        }
    }

    /// Unwraps the capability error, discarding the depth.
    pub fn into_source(self) -> E {
        match self {
            SearchError::Expansion { source, .. } | SearchError::Evaluation { source, .. } => {
                source
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, SearchError};

    #[test]
    fn messages_name_the_failing_depth() {
        let err: SearchError<String> = SearchError::Expansion {
            depth: 2,
            source: "model timed out".to_string(),
        };
        assert_eq!(err.to_string(), "expansion failed at depth 2: model timed out");
        assert_eq!(err.depth(), 2);
        assert_eq!(err.into_source(), "model timed out");

        assert_eq!(ConfigError::ZeroBeamWidth.to_string(), "beam width must be at least 1");
    }
}
