extern crate tot_lib;

use tot_lib::problems::countdown::Countdown;
use tot_lib::problems::stub::{dead_end, neutral};
use tot_lib::{LevelReport, TreeOfThought};

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // A search whose root has no successors ends at the root
    let stub = TreeOfThought::builder(dead_end::<&str>, neutral::<&str>)
        .with_max_depth(3)
        .with_beam_width(2)
        .build()
        .expect("beam width is non-zero");
    let tree = stub.search("START").expect("stub capabilities never fail");
    let path: Vec<_> = tree.best_path().iter().map(|t| *t.state()).collect();
    println!("Best path: {:?}", path);

    // Count from 1 up to 100 with +1, +5 and x2
    let puzzle = Countdown::default();
    let tot = TreeOfThought::builder(puzzle, puzzle)
        .with_max_depth(10)
        .with_beam_width(4)
        .build()
        .expect("beam width is non-zero");

    let tree = tot
        .search_with_observer(1, &mut |report: &LevelReport| {
            println!(
                "Depth {}: expanded {} node(s), kept {} of {} candidate(s), best {:?}",
                report.depth, report.expanded, report.retained, report.generated, report.best_score
            );
        })
        .expect("countdown capabilities never fail");

    for thought in tree.best_path() {
        println!(
            "  {:>4}  {:<10}  score {:.1}",
            thought.state(),
            thought.action().map(|mv| format!("{mv:?}")).unwrap_or_default(),
            thought.score()
        );
    }

    let best = tree.best();
    println!("The best value is {} after {} step(s)", best.state(), best.depth());
    assert!(best.depth() <= 10);
}
