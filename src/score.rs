//! Ordering of scores and the beam's top-K selection.
//!
//! Scores are plain `f64`s supplied by the evaluator, so the ordering has to be made
//! total here: every NaN ranks below every number (including negative infinity), NaNs
//! tie with each other, and `-0.0` ties with `0.0`. Ties are always resolved by
//! position, the earlier item ranking first.

use std::cmp::Ordering;

/// Compares two scores in ascending order under the NaN-lowest total order.
pub fn compare_scores(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

/// Keeps the `k` highest-scoring items, best first.
///
/// The sort is stable, so among equal scores the item that came earlier in `items`
/// survives a truncation and stays ahead in the result.
pub fn select_top_k<T, F>(mut items: Vec<T>, k: usize, score: F) -> Vec<T>
where
    F: Fn(&T) -> f64,
{
    items.sort_by(|a, b| compare_scores(score(b), score(a)));
    items.truncate(k);
    items
}

/// Returns the position of the highest-scoring item; the first one wins ties.
pub fn best_index<T, F>(items: &[T], score: F) -> Option<usize>
where
    F: Fn(&T) -> f64,
{
    let mut best: Option<(usize, f64)> = None;
    for (index, item) in items.iter().enumerate() {
        let value = score(item);
        match best {
            Some((_, best_value)) if compare_scores(value, best_value) != Ordering::Greater => {}
            _ => best = Some((index, value)),
        }
    }
    best.map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::{best_index, compare_scores, select_top_k};
    use std::cmp::Ordering;

    #[test]
    fn nan_ranks_below_everything() {
        assert_eq!(compare_scores(f64::NAN, f64::NEG_INFINITY), Ordering::Less);
        assert_eq!(compare_scores(1.0, f64::NAN), Ordering::Greater);
        assert_eq!(compare_scores(f64::NAN, f64::NAN), Ordering::Equal);
        assert_eq!(compare_scores(-0.0, 0.0), Ordering::Equal);
        assert_eq!(compare_scores(2.0, 3.0), Ordering::Less);
    }

    #[test]
    fn top_k_is_stable_on_ties() {
        let items = vec![("a", 1.0), ("b", 3.0), ("c", 3.0), ("d", 2.0), ("e", 3.0)];

        let top = select_top_k(items, 2, |item| item.1);

        assert_eq!(top, vec![("b", 3.0), ("c", 3.0)]);
    }

    #[test]
    fn top_k_pushes_nan_to_the_back() {
        let items = vec![("nan", f64::NAN), ("low", -5.0), ("high", 4.0)];

        let top = select_top_k(items, 3, |item| item.1);

        let names: Vec<_> = top.iter().map(|item| item.0).collect();
        assert_eq!(names, vec!["high", "low", "nan"]);
    }

    #[test]
    fn top_k_larger_than_input_keeps_everything() {
        let top = select_top_k(vec![1.0, 2.0], 10, |x| *x);
        assert_eq!(top, vec![2.0, 1.0]);
    }

    #[test]
    fn best_index_prefers_first_of_equals() {
        assert_eq!(best_index(&[1.0, 7.0, 7.0, 2.0], |x| *x), Some(1));
        assert_eq!(best_index(&[f64::NAN, 0.5], |x| *x), Some(1));
        assert_eq!(best_index(&[f64::NAN, f64::NAN], |x| *x), Some(0));
        assert_eq!(best_index::<f64, _>(&[], |x| *x), None);
    }
}
