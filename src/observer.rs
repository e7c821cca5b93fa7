/// What happened during one level of a search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelReport {
    /// Depth of the nodes that were expanded.
    pub depth: usize,
    /// Number of frontier nodes expanded at this level.
    pub expanded: usize,
    /// Number of child candidates produced and scored.
    pub generated: usize,
    /// Number of candidates kept for the next frontier.
    pub retained: usize,
    /// Best score among the retained candidates, `None` when nothing was retained.
    pub best_score: Option<f64>,
}

/// Receives a [`LevelReport`] after every level of a search.
///
/// Any `FnMut(&LevelReport)` is an observer.
pub trait SearchObserver {
    fn on_level(&mut self, report: &LevelReport);
}

impl<F> SearchObserver for F
where
    F: FnMut(&LevelReport),
{
    fn on_level(&mut self, report: &LevelReport) {
        self(report)
    }
}

/// An observer that ignores every report.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {
    fn on_level(&mut self, _report: &LevelReport) {}
}
