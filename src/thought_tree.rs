use crate::score::best_index;
use crate::thought_node::ThoughtNode;
use ego_tree::{NodeId, NodeRef, Tree};
use std::fmt;

/// Counters collected while a search runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Number of levels that produced at least one candidate.
    pub levels_explored: usize,
    /// Number of child candidates that were generated and scored. The root is not counted.
    pub nodes_generated: usize,
    /// Number of nodes kept in the tree, the root included.
    pub nodes_retained: usize,
    /// Size of the largest frontier the search held.
    pub max_frontier: usize,
    /// `true` when every frontier node was terminal before `max_depth` was reached.
    pub terminated_early: bool,
}

/// The result of a search: every node that made it into a beam, linked to its parent.
///
/// Nodes are stored in an arena and refer to their parent by index, so a node can never
/// outlive the tree that owns it. Candidates pruned from a beam are never stored.
pub struct ThoughtTree<S, A> {
    tree: Tree<ThoughtNode<S, A>>,
    frontier: Vec<NodeId>,
    best: NodeId,
    stats: SearchStats,
}

impl<S, A> ThoughtTree<S, A> {
    pub(crate) fn with_root(root: ThoughtNode<S, A>) -> Self {
        let tree = Tree::new(root);
        let root_id = tree.root().id();
        Self {
            tree,
            frontier: vec![root_id],
            best: root_id,
            stats: SearchStats {
                nodes_retained: 1,
                max_frontier: 1,
                ..SearchStats::default()
            },
        }
    }

    /// Inserts `node` below `parent` and returns the new node's id.
    pub(crate) fn attach(&mut self, parent: NodeId, node: ThoughtNode<S, A>) -> NodeId {
        let mut parent = self
            .tree
            .get_mut(parent)
            .expect("parent id was issued by this tree");
        let id = parent.append(node).id();
        self.stats.nodes_retained += 1;
        id
    }

    pub(crate) fn value(&self, id: NodeId) -> &ThoughtNode<S, A> {
        self.thought(id).node()
    }

    pub(crate) fn frontier_ids(&self) -> &[NodeId] {
        &self.frontier
    }

    pub(crate) fn stats_mut(&mut self) -> &mut SearchStats {
        &mut self.stats
    }

    /// Replaces the frontier with the nodes of a completed level.
    pub(crate) fn advance(&mut self, frontier: Vec<NodeId>) {
        self.stats.levels_explored += 1;
        self.stats.max_frontier = self.stats.max_frontier.max(frontier.len());
        self.frontier = frontier;
    }

    /// Picks the best node of the final frontier.
    pub(crate) fn finish(mut self) -> Self {
        let index = best_index(&self.frontier, |id| self.value(*id).score).unwrap_or(0);
        if let Some(id) = self.frontier.get(index) {
            self.best = *id;
        }
        self
    }

    fn thought(&self, id: NodeId) -> Thought<'_, S, A> {
        self.get(id).expect("node id was issued by this tree")
    }

    /// Returns the node the search started from.
    pub fn root(&self) -> Thought<'_, S, A> {
        Thought {
            node: self.tree.root(),
        }
    }

    /// Returns the highest-scoring node of the final frontier.
    pub fn best(&self) -> Thought<'_, S, A> {
        self.thought(self.best)
    }

    /// Returns the nodes from the root down to [`ThoughtTree::best`].
    pub fn best_path(&self) -> Vec<Thought<'_, S, A>> {
        self.best().path()
    }

    /// Returns the final frontier, best first.
    pub fn frontier(&self) -> impl Iterator<Item = Thought<'_, S, A>> + '_ {
        self.frontier.iter().map(|id| self.thought(*id))
    }

    /// Looks up a node by id.
    pub fn get(&self, id: NodeId) -> Option<Thought<'_, S, A>> {
        self.tree.get(id).map(|node| Thought { node })
    }

    /// Iterates over every stored node in insertion order.
    pub fn thoughts(&self) -> impl Iterator<Item = Thought<'_, S, A>> + '_ {
        self.tree.nodes().map(|node| Thought { node })
    }

    /// Returns the number of stored nodes, the root included.
    pub fn node_count(&self) -> usize {
        self.stats.nodes_retained
    }

    /// Returns the counters collected during the search.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }
}

impl<S: fmt::Debug, A: fmt::Debug> fmt::Debug for ThoughtTree<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThoughtTree")
            .field("best", &self.best())
            .field("frontier", &self.frontier)
            .field("stats", &self.stats)
            .finish()
    }
}

/// A borrowed handle onto one node of a [`ThoughtTree`].
///
/// Gives access to the node's payload and to its provenance through the parent chain.
pub struct Thought<'a, S, A> {
    node: NodeRef<'a, ThoughtNode<S, A>>,
}

impl<S, A> Clone for Thought<'_, S, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S, A> Copy for Thought<'_, S, A> {}

impl<S, A> PartialEq for Thought<'_, S, A> {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node
    }
}

impl<S, A> Eq for Thought<'_, S, A> {}

impl<S: fmt::Debug, A: fmt::Debug> fmt::Debug for Thought<'_, S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Thought")
            .field("id", &self.id())
            .field("node", self.node())
            .finish()
    }
}

impl<'a, S, A> Thought<'a, S, A> {
    /// Returns the arena id of this node.
    pub fn id(&self) -> NodeId {
        self.node.id()
    }

    /// Returns the stored node.
    pub fn node(&self) -> &'a ThoughtNode<S, A> {
        self.node.value()
    }

    pub fn score(&self) -> f64 {
        self.node().score
    }

    pub fn state(&self) -> &'a S {
        &self.node().state
    }

    pub fn action(&self) -> Option<&'a A> {
        self.node().action.as_ref()
    }

    pub fn depth(&self) -> usize {
        self.node().depth
    }

    /// Returns the node this one was expanded from, or `None` for the root.
    pub fn parent(&self) -> Option<Self> {
        self.node.parent().map(|node| Thought { node })
    }

    /// Iterates from the parent up to the root.
    pub fn ancestors(&self) -> impl Iterator<Item = Thought<'a, S, A>> + use<'a, S, A> {
        self.node.ancestors().map(|node| Thought { node })
    }

    /// Returns the nodes from the root down to this one.
    ///
    /// The chain always terminates: every step up decreases the depth by exactly one and
    /// the root sits at depth 0.
    pub fn path(&self) -> Vec<Self> {
        let mut path = Vec::with_capacity(self.depth() + 1);
        let mut current = Some(*self);
        while let Some(thought) = current {
            path.push(thought);
            current = thought.parent();
        }
        path.reverse();
        path
    }
}
