/// Scores a state; higher is better.
///
/// This is the evaluation capability the search consumes. It must be deterministic for
/// a deterministic state, since the score alone decides which candidates stay in the
/// beam. NaN is accepted but always ranks last (see [`crate::score`]).
///
/// Any `Fn(&S) -> Result<f64, E>` is an evaluator.
pub trait Evaluator<S, E> {
    /// Returns the score of `state`.
    fn evaluate(&self, state: &S) -> Result<f64, E>;
}

impl<S, E, F> Evaluator<S, E> for F
where
    F: Fn(&S) -> Result<f64, E>,
{
    fn evaluate(&self, state: &S) -> Result<f64, E> {
        self(state)
    }
}
