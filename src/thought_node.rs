/// Represents a single node in the thought tree.
///
/// A node is immutable once created. It stores the state reached, the score the evaluator
/// gave that state, and the action that led here from the parent. The parent link itself
/// belongs to the tree that owns the node; see [`crate::thought_tree::Thought::parent`].
#[derive(Debug, Clone, PartialEq)]
pub struct ThoughtNode<S, A> {
    /// The evaluator's score for `state`.
    pub score: f64,
    /// The caller-defined point in the search space.
    pub state: S,
    /// The action that produced this node from its parent. `None` for the root node.
    pub action: Option<A>,
    /// The depth of the node in the tree, `0` for the root.
    pub depth: usize,
}

impl<S, A> ThoughtNode<S, A> {
    /// Creates the root node of a search.
    pub fn root(state: S, score: f64) -> Self {
        ThoughtNode {
            score,
            state,
            action: None,
            depth: 0,
        }
    }

    /// Creates a node one level below a parent at `parent_depth`.
    pub fn child(state: S, action: A, score: f64, parent_depth: usize) -> Self {
        ThoughtNode {
            score,
            state,
            action: Some(action),
            depth: parent_depth + 1,
        }
    }

    /// Returns `true` for the node a search started from.
    pub fn is_root(&self) -> bool {
        self.depth == 0
    }
}
