use crate::docset::{DocSet, NOT_STARTED, TERMINATED};
use crate::query::{EmptyScorer, Scorer};
use crate::{DocId, Score};

/// Returns the intersection of the given scorers as a single scorer.
///
/// Zero scorers yield an [`EmptyScorer`]; a single scorer is returned
/// as-is.
pub fn intersect_scorers(mut scorers: Vec<Box<dyn Scorer>>) -> Box<dyn Scorer> {
    match scorers.len() {
        0 => Box::new(EmptyScorer::new()),
        1 => scorers.pop().unwrap(),
        _ => Box::new(Intersection::new(scorers)),
    }
}

/// Iterates through the docs present in every one of its children.
///
/// Children are reordered by ascending cost once at construction; the
/// cheapest one drives the leapfrog.
pub struct Intersection<TScorer: Scorer> {
    scorers: Vec<TScorer>,
    doc: DocId,
    boost: Score,
}

impl<TScorer: Scorer> Intersection<TScorer> {
    pub(crate) fn new(mut scorers: Vec<TScorer>) -> Intersection<TScorer> {
        assert!(scorers.len() >= 2);
        scorers.sort_by_key(|scorer| scorer.size_hint());
        Intersection {
            scorers,
            doc: NOT_STARTED,
            boost: 1f32,
        }
    }

    /// Aligns every child on `candidate`.
    ///
    /// Whenever a child lands past the candidate, the lead is pushed to
    /// the child's position and the scan restarts. A single pass would be
    /// incorrect when a later child skips ahead.
    fn align(&mut self, mut candidate: DocId) -> DocId {
        'outer: while candidate != TERMINATED {
            for ord in 1..self.scorers.len() {
                let doc = self.scorers[ord].seek(candidate);
                if doc > candidate {
                    candidate = self.scorers[0].seek(doc);
                    continue 'outer;
                }
            }
            break;
        }
        self.doc = candidate;
        candidate
    }
}

impl<TScorer: Scorer> DocSet for Intersection<TScorer> {
    fn advance(&mut self) -> DocId {
        if self.doc == TERMINATED {
            return TERMINATED;
        }
        let candidate = self.scorers[0].advance();
        self.align(candidate)
    }

    fn seek(&mut self, target: DocId) -> DocId {
        if self.doc >= target {
            return self.doc;
        }
        let candidate = self.scorers[0].seek(target);
        self.align(candidate)
    }

    fn doc(&self) -> DocId {
        self.doc
    }

    fn size_hint(&self) -> u32 {
        self.scorers[0].size_hint()
    }
}

impl<TScorer: Scorer> Scorer for Intersection<TScorer> {
    fn score(&mut self) -> Score {
        self.scorers.iter_mut().map(Scorer::score).sum::<Score>() * self.boost
    }

    fn set_boost(&mut self, boost: Score) {
        self.boost = boost;
    }
}
