//! Final ordering of scored candidates.

use crate::domain::quote::Recommendation;
use std::cmp::Ordering;

/// Sort descending by score and keep the first `top_n`.
///
/// The sort is stable, so equal scores keep their feed order; that is the
/// only tie-break. Fewer than `top_n` candidates are returned as-is, never
/// padded.
pub fn rank(mut picks: Vec<Recommendation>, top_n: usize) -> Vec<Recommendation> {
    picks.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    picks.truncate(top_n);
    picks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::quote::QuoteRecord;
    use proptest::prelude::*;

    fn pick(symbol: &str, score: f64) -> Recommendation {
        Recommendation {
            quote: QuoteRecord {
                symbol: symbol.to_string(),
                name: symbol.to_string(),
                price: 10.0,
                change_percent: 10.0,
                turnover_amount: 0.0,
                turnover_rate: 0.0,
                volume_ratio: 0.0,
                float_market_cap: 0.0,
                pe_ratio: None,
            },
            streak_days: 1,
            score,
            rationale: "composite score".to_string(),
        }
    }

    #[test]
    fn sorts_descending_by_score() {
        let ranked = rank(vec![pick("a", 60.0), pick("b", 90.0), pick("c", 75.0)], 10);
        let order: Vec<_> = ranked.iter().map(|p| p.quote.symbol.as_str()).collect();
        assert_eq!(order, vec!["b", "c", "a"]);
    }

    #[test]
    fn ties_keep_input_order() {
        let ranked = rank(
            vec![pick("first", 80.0), pick("second", 80.0), pick("third", 80.0)],
            10,
        );
        let order: Vec<_> = ranked.iter().map(|p| p.quote.symbol.as_str()).collect();
        assert_eq!(order, vec!["first", "second", "third"]);
    }

    #[test]
    fn truncates_to_top_n() {
        let picks: Vec<_> = (0..25).map(|i| pick(&format!("s{i}"), i as f64)).collect();
        let ranked = rank(picks, 10);
        assert_eq!(ranked.len(), 10);
        assert_eq!(ranked[0].quote.symbol, "s24");
    }

    #[test]
    fn fewer_candidates_than_top_n_returns_all() {
        let ranked = rank(vec![pick("a", 1.0), pick("b", 2.0)], 10);
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn empty_input_stays_empty() {
        assert!(rank(Vec::new(), 10).is_empty());
    }

    proptest! {
        #[test]
        fn returns_min_len_top_n_and_is_a_prefix_of_the_full_sort(
            scores in proptest::collection::vec(0.0f64..200.0, 0..30),
            top_n in 0usize..15,
        ) {
            let picks: Vec<_> = scores
                .iter()
                .enumerate()
                .map(|(i, s)| pick(&format!("s{i}"), *s))
                .collect();

            let full = rank(picks.clone(), usize::MAX);
            let ranked = rank(picks.clone(), top_n);

            prop_assert_eq!(ranked.len(), picks.len().min(top_n));
            for (got, expected) in ranked.iter().zip(full.iter()) {
                prop_assert_eq!(&got.quote.symbol, &expected.quote.symbol);
            }
            for pair in ranked.windows(2) {
                prop_assert!(pair[0].score >= pair[1].score);
            }
        }
    }
}
