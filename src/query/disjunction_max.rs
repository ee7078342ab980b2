use crate::query::score_combiner::DisjunctionMaxCombiner;
use crate::query::union::Union;
use crate::query::{EmptyScorer, Scorer};
use crate::Score;

/// Returns the union of the given scorers, scored as the best single
/// matching child plus `tie_breaker` times the contributions of the
/// others.
///
/// Positioning is exactly a union's; only the scoring differs. With a
/// `tie_breaker` of 0 the score is the best child's alone; with 1 it
/// degenerates into the plain union sum. Zero scorers yield an
/// [`EmptyScorer`]; a single scorer is returned as-is.
pub fn dis_max_scorers(tie_breaker: Score, mut scorers: Vec<Box<dyn Scorer>>) -> Box<dyn Scorer> {
    match scorers.len() {
        0 => Box::new(EmptyScorer::new()),
        1 => scorers.pop().unwrap(),
        _ => Box::new(Union::new(
            scorers,
            DisjunctionMaxCombiner::with_tie_breaker(tie_breaker),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::dis_max_scorers;
    use crate::docset::{DocSet, TERMINATED};
    use crate::query::{Scorer, TermScorer};
    use crate::{DocId, Score};

    fn drive(scorer: &mut dyn Scorer) -> Vec<(DocId, Score)> {
        let mut emitted = Vec::new();
        scorer.for_each(&mut |doc, score| emitted.push((doc, score)));
        emitted
    }

    fn two_terms_on_doc_4(tie_breaker: Score) -> Box<dyn Scorer> {
        let a = TermScorer::new(10, "a", vec![4]);
        let b = TermScorer::new(10, "b", vec![4, 7]);
        dis_max_scorers(
            tie_breaker,
            vec![
                Box::new(a) as Box<dyn Scorer>,
                Box::new(b) as Box<dyn Scorer>,
            ],
        )
    }

    #[test]
    fn test_dis_max_zero_tie_breaker_keeps_best_child() {
        let idf_a = (1f32 + 10f32).ln();
        let mut scorer = two_terms_on_doc_4(0f32);
        let emitted = drive(&mut *scorer);
        assert_eq!(emitted.len(), 2);
        assert_eq!(emitted[0].0, 4);
        assert!((emitted[0].1 - idf_a).abs() < 1e-6);
    }

    #[test]
    fn test_dis_max_full_tie_breaker_sums_like_a_union() {
        let idf_a = (1f32 + 10f32).ln();
        let idf_b = (1f32 + 10f32 / 2f32).ln();
        let mut scorer = two_terms_on_doc_4(1f32);
        let emitted = drive(&mut *scorer);
        assert_eq!(emitted[0].0, 4);
        assert!((emitted[0].1 - (idf_a + idf_b)).abs() < 1e-6);
    }

    #[test]
    fn test_dis_max_interpolates_between_max_and_sum() {
        let idf_a = (1f32 + 10f32).ln();
        let idf_b = (1f32 + 10f32 / 2f32).ln();
        let max = idf_a.max(idf_b);
        let sum = idf_a + idf_b;
        let mut scorer = two_terms_on_doc_4(0.5);
        let emitted = drive(&mut *scorer);
        assert!((emitted[0].1 - (max + 0.5 * (sum - max))).abs() < 1e-6);
    }

    #[test]
    fn test_dis_max_positions_like_a_union() {
        let a = TermScorer::new(10, "a", vec![4, 5]);
        let b = TermScorer::new(10, "b", vec![4, 100]);
        let mut scorer = dis_max_scorers(
            0f32,
            vec![
                Box::new(a) as Box<dyn Scorer>,
                Box::new(b) as Box<dyn Scorer>,
            ],
        );
        let docs: Vec<DocId> = drive(&mut *scorer).into_iter().map(|(doc, _)| doc).collect();
        assert_eq!(docs, vec![4, 5, 100]);
    }

    #[test]
    fn test_dis_max_edge_cases() {
        let mut empty = dis_max_scorers(0.5, vec![]);
        assert_eq!(empty.advance(), TERMINATED);

        let single = TermScorer::new(10, "a", vec![3]);
        let mut single = dis_max_scorers(0.5, vec![Box::new(single)]);
        assert_eq!(single.advance(), 3);
        assert_eq!(single.advance(), TERMINATED);
    }
}
