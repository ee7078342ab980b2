use crate::docset::DocSet;
use crate::query::Scorer;
use crate::{DocId, Score};

/// Wraps a `DocSet` and returns a constant score for every doc.
///
/// The set of docs matched is strictly the wrapped set; whatever score the
/// wrapped set may carry is ignored. `ConstScorer` is also useful to give
/// a plain `DocSet` a score where a scorer is needed.
pub struct ConstScorer<TDocSet: DocSet> {
    docset: TDocSet,
    score: Score,
    boost: Score,
}

impl<TDocSet: DocSet> ConstScorer<TDocSet> {
    /// Creates a new `ConstScorer` emitting `score` for every doc.
    pub fn new(docset: TDocSet, score: Score) -> ConstScorer<TDocSet> {
        ConstScorer {
            docset,
            score,
            boost: 1f32,
        }
    }
}

impl<TDocSet: DocSet> From<TDocSet> for ConstScorer<TDocSet> {
    fn from(docset: TDocSet) -> Self {
        ConstScorer::new(docset, 1f32)
    }
}

impl<TDocSet: DocSet> DocSet for ConstScorer<TDocSet> {
    fn advance(&mut self) -> DocId {
        self.docset.advance()
    }

    fn seek(&mut self, target: DocId) -> DocId {
        self.docset.seek(target)
    }

    fn doc(&self) -> DocId {
        self.docset.doc()
    }

    fn size_hint(&self) -> u32 {
        self.docset.size_hint()
    }
}

impl<TDocSet: DocSet> Scorer for ConstScorer<TDocSet> {
    fn score(&mut self) -> Score {
        self.score * self.boost
    }

    fn set_boost(&mut self, boost: Score) {
        self.boost = boost;
    }
}

#[cfg(test)]
mod tests {
    use super::ConstScorer;
    use crate::docset::{DocSet, TERMINATED};
    use crate::query::{union_scorers, Scorer, TermScorer, VecDocSet};

    #[test]
    fn test_const_scorer() {
        let mut scorer = ConstScorer::new(VecDocSet::from(vec![1, 5, 9]), 2f32);
        assert_eq!(scorer.advance(), 1);
        assert_eq!(scorer.score(), 2f32);
        assert_eq!(scorer.seek(6), 9);
        assert_eq!(scorer.score(), 2f32);
        assert_eq!(scorer.advance(), TERMINATED);
    }

    #[test]
    fn test_const_scorer_boost() {
        let mut scorer = ConstScorer::new(VecDocSet::from(vec![1]), 2f32);
        scorer.set_boost(1.5);
        scorer.advance();
        assert_eq!(scorer.score(), 3f32);
    }

    #[test]
    fn test_const_scorer_pins_the_score_of_a_whole_tree() {
        let a = TermScorer::new(10, "a", vec![1, 2]);
        let b = TermScorer::new(10, "b", vec![2, 3]);
        let union = union_scorers(vec![
            Box::new(a) as Box<dyn Scorer>,
            Box::new(b) as Box<dyn Scorer>,
        ]);
        let mut scorer = ConstScorer::new(union, 3.5);
        let mut emitted = Vec::new();
        scorer.for_each(&mut |doc, score| emitted.push((doc, score)));
        assert_eq!(emitted, vec![(1, 3.5), (2, 3.5), (3, 3.5)]);
    }
}
