use std::convert::Infallible;
use thiserror::Error;
use tot_lib::problems::countdown::{Countdown, Move};
use tot_lib::{Evaluator, Expander, SearchConfig, SearchError, TreeOfThought};

/// A reasoning chain: each state is the list of steps taken so far.
#[derive(Debug, Clone, PartialEq)]
struct Chain(Vec<&'static str>);

#[derive(Debug, Error, PartialEq)]
enum ModelError {
    #[error("prompt rejected: {0}")]
    Rejected(&'static str),
}

/// Proposes follow-up steps, refusing to continue after a "guess".
struct StepProposer;

impl Expander<Chain, &'static str, ModelError> for StepProposer {
    fn expand(&self, chain: &Chain) -> Result<Vec<(Chain, &'static str)>, ModelError> {
        if chain.0.last() == Some(&"guess") {
            return Err(ModelError::Rejected("guess"));
        }
        Ok(["restate", "decompose", "guess"]
            .into_iter()
            .map(|step| {
                let mut next = chain.clone();
                next.0.push(step);
                (next, step)
            })
            .collect())
    }
}

/// Rewards decomposition, punishes guessing.
struct StepJudge;

impl Evaluator<Chain, ModelError> for StepJudge {
    fn evaluate(&self, chain: &Chain) -> Result<f64, ModelError> {
        Ok(chain
            .0
            .iter()
            .map(|step| match *step {
                "decompose" => 2.0,
                "restate" => 1.0,
                _ => -10.0,
            })
            .sum())
    }
}

#[test]
fn chain_of_steps_prefers_decomposition() {
    // arrange
    let tot = TreeOfThought::builder(StepProposer, StepJudge)
        .with_max_depth(3)
        .with_beam_width(2)
        .build()
        .unwrap();

    // act
    let tree = tot.search(Chain(vec![])).unwrap();

    // assert
    let best = tree.best();
    assert_eq!(best.state(), &Chain(vec!["decompose", "decompose", "decompose"]));
    assert_eq!(best.score(), 6.0);
    let actions: Vec<_> = tree
        .best_path()
        .iter()
        .filter_map(|t| t.action().copied())
        .collect();
    assert_eq!(actions, vec!["decompose", "decompose", "decompose"]);
}

#[test]
fn expanding_a_pruned_branch_never_happens() {
    // "guess" children would make the expander fail, but they never survive the beam
    let tot = TreeOfThought::builder(StepProposer, StepJudge)
        .with_max_depth(4)
        .with_beam_width(2)
        .build()
        .unwrap();

    assert!(tot.search(Chain(vec![])).is_ok());
}

#[test]
fn expanding_a_kept_failure_aborts() {
    let tot = TreeOfThought::builder(StepProposer, StepJudge)
        .with_max_depth(2)
        .with_beam_width(3)
        .build()
        .unwrap();

    let err = tot.search(Chain(vec![])).unwrap_err();

    assert_eq!(err.depth(), 1);
    assert_eq!(err.to_string(), "expansion failed at depth 1: prompt rejected: guess");
    assert!(matches!(err, SearchError::Expansion { source: ModelError::Rejected("guess"), .. }));
}

#[test]
fn tie_is_won_by_child_of_earlier_frontier_node() {
    // both parents produce a child scoring 7; frontier order decides which one leads
    let expand = |state: &u8| -> Result<Vec<(u8, &'static str)>, Infallible> {
        Ok(match *state {
            0 => vec![(1, "left"), (2, "right")],
            1 => vec![(11, "left-child")],
            2 => vec![(21, "right-child")],
            _ => vec![],
        })
    };
    let evaluate = |state: &u8| -> Result<f64, Infallible> {
        Ok(match *state {
            1 => 1.0,
            2 => 2.0,
            _ => 7.0,
        })
    };
    let tot = TreeOfThought::new(
        expand,
        evaluate,
        SearchConfig {
            max_depth: 2,
            beam_width: 1,
        },
    )
    .unwrap();

    let tree = tot.search(0).unwrap();

    // level 1 keeps only "right" (score 2), so its child is the only candidate
    assert_eq!(tree.best().action(), Some(&"right-child"));

    let wide = TreeOfThought::builder(expand, evaluate)
        .with_max_depth(2)
        .with_beam_width(2)
        .build()
        .unwrap();
    let tree = wide.search(0).unwrap();

    // the level-1 frontier is [2, 1], so 2's child is produced first
    let frontier: Vec<_> = tree.frontier().map(|t| *t.state()).collect();
    assert_eq!(frontier, vec![21, 11]);
    assert_eq!(tree.best().action(), Some(&"right-child"));
}

#[test]
fn countdown_best_path_replays() {
    let puzzle = Countdown::default();
    let tot = TreeOfThought::builder(puzzle, puzzle)
        .with_config(SearchConfig {
            max_depth: 8,
            beam_width: 4,
        })
        .build()
        .unwrap();

    let tree = tot.search(1).unwrap();

    let path = tree.best_path();
    let replayed = path
        .iter()
        .skip(1)
        .fold(1, |value, thought| puzzle.apply(value, *thought.action().unwrap()));
    assert_eq!(replayed, *tree.best().state());
    assert!(path.len() <= 9);
    assert!(path.iter().skip(1).all(|t| matches!(
        t.action(),
        Some(Move::Increment | Move::Add(5) | Move::Double)
    )));
}
