/// Produces the successors of a state.
///
/// This is the expansion capability the search consumes. Each returned pair is a new
/// state together with the action that leads to it; an empty vector marks the state as
/// terminal. Implementations should be pure functions of the state: the search calls
/// them once per retained node and relies on the returned order for tie-breaking.
///
/// Any `Fn(&S) -> Result<Vec<(S, A)>, E>` is an expander, so closures and plain
/// functions can be passed directly.
pub trait Expander<S, A, E> {
    /// Returns the `(state, action)` pairs reachable from `state` in one step.
    fn expand(&self, state: &S) -> Result<Vec<(S, A)>, E>;
}

impl<S, A, E, F> Expander<S, A, E> for F
where
    F: Fn(&S) -> Result<Vec<(S, A)>, E>,
{
    fn expand(&self, state: &S) -> Result<Vec<(S, A)>, E> {
        self(state)
    }
}
