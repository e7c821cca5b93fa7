use crate::error::{ConfigError, SearchError};
use crate::evaluator::Evaluator;
use crate::expander::Expander;
use crate::observer::{LevelReport, NoopObserver, SearchObserver};
use crate::score::select_top_k;
use crate::thought_node::ThoughtNode;
use crate::thought_tree::ThoughtTree;
use ego_tree::NodeId;
use std::marker::PhantomData;
use tracing::{debug, info, warn};

/// Default number of expansion rounds.
pub const DEFAULT_MAX_DEPTH: usize = 5;
/// Default number of nodes kept per level.
pub const DEFAULT_BEAM_WIDTH: usize = 3;

/// Bounds of a beam search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Maximum number of expansion rounds. `0` returns the root without expanding it.
    pub max_depth: usize,
    /// Maximum frontier size after each pruning step. Must be at least 1.
    pub beam_width: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            beam_width: DEFAULT_BEAM_WIDTH,
        }
    }
}

impl SearchConfig {
    /// Checks that the configuration can drive a search.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.beam_width == 0 {
            return Err(ConfigError::ZeroBeamWidth);
        }
        Ok(())
    }
}

/// The beam-search controller.
///
/// Starting from a root state, every level expands all frontier nodes with the expander,
/// scores each child with the evaluator, pools the children of the whole level and keeps
/// the `beam_width` best of them as the next frontier. The search stops after `max_depth`
/// levels, or earlier when no frontier node has a successor.
///
/// `S` is the state type, `A` the action type and `E` the error type shared by the
/// expander `X` and the evaluator `V`.
pub struct TreeOfThought<S, A, E, X, V> {
    expander: X,
    evaluator: V,
    config: SearchConfig,
    _marker: PhantomData<fn(&S) -> (A, E)>,
}

/// A builder for creating instances of `TreeOfThought`.
///
/// This provides a convenient way to configure the search bounds before the configuration
/// is validated.
pub struct TreeOfThoughtBuilder<S, A, E, X, V> {
    expander: X,
    evaluator: V,
    config: SearchConfig,
    _marker: PhantomData<fn(&S) -> (A, E)>,
}

impl<S, A, E, X, V> TreeOfThoughtBuilder<S, A, E, X, V>
where
    X: Expander<S, A, E>,
    V: Evaluator<S, E>,
{
    /// Creates a new builder with the default search bounds.
    pub fn new(expander: X, evaluator: V) -> Self {
        Self {
            expander,
            evaluator,
            config: SearchConfig::default(),
            _marker: PhantomData,
        }
    }

    /// Sets the maximum number of expansion rounds.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.config.max_depth = max_depth;
        self
    }

    /// Sets the number of nodes kept per level.
    pub fn with_beam_width(mut self, beam_width: usize) -> Self {
        self.config.beam_width = beam_width;
        self
    }

    /// Replaces both bounds at once.
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Validates the configuration and builds the controller.
    pub fn build(self) -> Result<TreeOfThought<S, A, E, X, V>, ConfigError> {
        TreeOfThought::new(self.expander, self.evaluator, self.config)
    }
}

/// A scored successor waiting for the level's pruning step.
struct Candidate<S, A> {
    parent: NodeId,
    parent_depth: usize,
    state: S,
    action: A,
    score: f64,
}

impl<S, A, E, X, V> TreeOfThought<S, A, E, X, V>
where
    X: Expander<S, A, E>,
    V: Evaluator<S, E>,
{
    /// Returns a new builder for `TreeOfThought`.
    pub fn builder(expander: X, evaluator: V) -> TreeOfThoughtBuilder<S, A, E, X, V> {
        TreeOfThoughtBuilder::new(expander, evaluator)
    }

    /// Creates a controller, failing fast on an invalid configuration.
    pub fn new(expander: X, evaluator: V, config: SearchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            expander,
            evaluator,
            config,
            _marker: PhantomData,
        })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Runs the beam search from `initial_state`.
    ///
    /// The returned tree's [`ThoughtTree::best`] is the highest-scoring node of the final
    /// frontier; walk [`crate::thought_tree::Thought::path`] from it for the reasoning
    /// chain. Any expander or evaluator failure aborts the whole search.
    pub fn search(&self, initial_state: S) -> Result<ThoughtTree<S, A>, SearchError<E>> {
        self.search_with_observer(initial_state, &mut NoopObserver)
    }

    /// Runs the beam search, reporting every level to `observer`.
    pub fn search_with_observer<O: SearchObserver>(
        &self,
        initial_state: S,
        observer: &mut O,
    ) -> Result<ThoughtTree<S, A>, SearchError<E>> {
        self.run(initial_state, observer, |tree| self.expand_level(tree))
    }

    fn run<O, L>(
        &self,
        initial_state: S,
        observer: &mut O,
        expand_level: L,
    ) -> Result<ThoughtTree<S, A>, SearchError<E>>
    where
        O: SearchObserver,
        L: Fn(&ThoughtTree<S, A>) -> Result<Vec<Candidate<S, A>>, SearchError<E>>,
    {
        let root_score = self.score(&initial_state, 0)?;
        let mut tree = ThoughtTree::with_root(ThoughtNode::root(initial_state, root_score));

        for depth in 0..self.config.max_depth {
            let expanded = tree.frontier_ids().len();
            debug!(depth, frontier = expanded, "exploring frontier");

            let candidates = expand_level(&tree)?;
            let generated = candidates.len();
            tree.stats_mut().nodes_generated += generated;

            let selected = select_top_k(candidates, self.config.beam_width, |c| c.score);
            observer.on_level(&LevelReport {
                depth,
                expanded,
                generated,
                retained: selected.len(),
                best_score: selected.first().map(|c| c.score),
            });

            if selected.is_empty() {
                debug!(depth, "frontier has no successors, stopping early");
                tree.stats_mut().terminated_early = true;
                break;
            }

            let frontier: Vec<NodeId> = selected
                .into_iter()
                .map(|c| {
                    let node = ThoughtNode::child(c.state, c.action, c.score, c.parent_depth);
                    tree.attach(c.parent, node)
                })
                .collect();
            tree.advance(frontier);
        }

        let tree = tree.finish();
        let best = tree.best();
        info!(
            best_score = best.score(),
            depth = best.depth(),
            nodes = tree.node_count(),
            "search finished"
        );
        Ok(tree)
    }

    /// Expands the frontier in order, producing the level's candidates in insertion order.
    fn expand_level(
        &self,
        tree: &ThoughtTree<S, A>,
    ) -> Result<Vec<Candidate<S, A>>, SearchError<E>> {
        let mut candidates = Vec::new();
        for &id in tree.frontier_ids() {
            candidates.extend(self.expand_node(id, tree.value(id))?);
        }
        Ok(candidates)
    }

    fn expand_node(
        &self,
        id: NodeId,
        node: &ThoughtNode<S, A>,
    ) -> Result<Vec<Candidate<S, A>>, SearchError<E>> {
        let children = self
            .expander
            .expand(&node.state)
            .map_err(|source| SearchError::Expansion {
                depth: node.depth,
                source,
            })?;

        let mut candidates = Vec::with_capacity(children.len());
        for (state, action) in children {
            let score = self.score(&state, node.depth + 1)?;
            candidates.push(Candidate {
                parent: id,
                parent_depth: node.depth,
                state,
                action,
                score,
            });
        }
        Ok(candidates)
    }

    fn score(&self, state: &S, depth: usize) -> Result<f64, SearchError<E>> {
        let score = self
            .evaluator
            .evaluate(state)
            .map_err(|source| SearchError::Evaluation { depth, source })?;
        if score.is_nan() {
            warn!(depth, "evaluator returned NaN, ranking it last");
        }
        Ok(score)
    }
}

#[cfg(feature = "parallel")]
impl<S, A, E, X, V> TreeOfThought<S, A, E, X, V>
where
    X: Expander<S, A, E> + Sync,
    V: Evaluator<S, E> + Sync,
    S: Send + Sync,
    A: Send + Sync,
    E: Send,
{
    /// Runs the same search as [`TreeOfThought::search`], expanding and scoring the
    /// frontier nodes of each level on the rayon thread pool.
    ///
    /// Candidates are gathered back in frontier order before pruning, so deterministic
    /// capabilities give exactly the tree `search` gives. If several nodes fail, which
    /// error is returned is unspecified.
    pub fn search_parallel(&self, initial_state: S) -> Result<ThoughtTree<S, A>, SearchError<E>> {
        self.search_parallel_with_observer(initial_state, &mut NoopObserver)
    }

    pub fn search_parallel_with_observer<O: SearchObserver>(
        &self,
        initial_state: S,
        observer: &mut O,
    ) -> Result<ThoughtTree<S, A>, SearchError<E>> {
        self.run(initial_state, observer, |tree| self.expand_level_parallel(tree))
    }

    fn expand_level_parallel(
        &self,
        tree: &ThoughtTree<S, A>,
    ) -> Result<Vec<Candidate<S, A>>, SearchError<E>> {
        use rayon::prelude::*;

        let per_node: Vec<Vec<Candidate<S, A>>> = tree
            .frontier_ids()
            .par_iter()
            .map(|&id| self.expand_node(id, tree.value(id)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(per_node.into_iter().flatten().collect())
    }
}
