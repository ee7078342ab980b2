use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::docset::{DocSet, NOT_STARTED, TERMINATED};
use crate::query::score_combiner::{ScoreCombiner, SumCombiner};
use crate::query::{EmptyScorer, Scorer};
use crate::{DocId, Score};

/// Returns the union of the given scorers as a single scorer.
///
/// The score of an emitted doc is the sum of the scores of the children
/// positioned on it. Zero scorers yield an [`EmptyScorer`]; a single
/// scorer is returned as-is.
pub fn union_scorers(mut scorers: Vec<Box<dyn Scorer>>) -> Box<dyn Scorer> {
    match scorers.len() {
        0 => Box::new(EmptyScorer::new()),
        1 => scorers.pop().unwrap(),
        _ => Box::new(Union::new(scorers, SumCombiner::default())),
    }
}

/// Entry of the disjunction heap.
///
/// `Ord` is reversed so that `BinaryHeap` pops the child with the lowest
/// current doc first.
struct HeapItem {
    doc: DocId,
    ord: u32,
}

impl PartialEq for HeapItem {
    fn eq(&self, other: &Self) -> bool {
        self.doc == other.doc
    }
}

impl Eq for HeapItem {}

impl PartialOrd for HeapItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapItem {
    fn cmp(&self, other: &Self) -> Ordering {
        self.doc.cmp(&other.doc).reverse()
    }
}

/// Iterates through the docs present in at least one of its children.
///
/// A binary min-heap keyed by the children's current doc picks every next
/// emission. Scoring walks the children in declaration order, not heap
/// order, so float summation stays reproducible.
pub struct Union<TScorer, TScoreCombiner = SumCombiner> {
    scorers: Vec<TScorer>,
    heap: BinaryHeap<HeapItem>,
    combiner: TScoreCombiner,
    doc: DocId,
    boost: Score,
}

impl<TScorer: Scorer, TScoreCombiner: ScoreCombiner> Union<TScorer, TScoreCombiner> {
    pub(crate) fn new(
        mut scorers: Vec<TScorer>,
        combiner: TScoreCombiner,
    ) -> Union<TScorer, TScoreCombiner> {
        let mut heap = BinaryHeap::with_capacity(scorers.len());
        for (ord, scorer) in scorers.iter_mut().enumerate() {
            let doc = scorer.advance();
            if doc != TERMINATED {
                heap.push(HeapItem {
                    doc,
                    ord: ord as u32,
                });
            }
        }
        Union {
            scorers,
            heap,
            combiner,
            doc: NOT_STARTED,
            boost: 1f32,
        }
    }
}

impl<TScorer: Scorer, TScoreCombiner: ScoreCombiner> DocSet for Union<TScorer, TScoreCombiner> {
    fn advance(&mut self) -> DocId {
        if self.doc == TERMINATED {
            return TERMINATED;
        }
        while let Some(head) = self.heap.pop() {
            if head.doc > self.doc {
                self.doc = head.doc;
                self.heap.push(head);
                return self.doc;
            }
            let doc = self.scorers[head.ord as usize].advance();
            if doc != TERMINATED {
                self.heap.push(HeapItem { doc, ord: head.ord });
            }
        }
        self.doc = TERMINATED;
        TERMINATED
    }

    fn seek(&mut self, target: DocId) -> DocId {
        if self.doc >= target {
            return self.doc;
        }
        while let Some(head) = self.heap.pop() {
            if head.doc >= target {
                self.doc = head.doc;
                self.heap.push(head);
                return self.doc;
            }
            let doc = self.scorers[head.ord as usize].seek(target);
            if doc != TERMINATED {
                self.heap.push(HeapItem { doc, ord: head.ord });
            }
        }
        self.doc = TERMINATED;
        TERMINATED
    }

    fn doc(&self) -> DocId {
        self.doc
    }

    fn size_hint(&self) -> u32 {
        self.scorers
            .iter()
            .map(DocSet::size_hint)
            .fold(0u32, u32::saturating_add)
    }
}

impl<TScorer: Scorer, TScoreCombiner: ScoreCombiner> Scorer for Union<TScorer, TScoreCombiner> {
    fn score(&mut self) -> Score {
        self.combiner.clear();
        let doc = self.doc;
        for scorer in &mut self.scorers {
            if scorer.doc() == doc {
                self.combiner.update(scorer);
            }
        }
        self.combiner.score() * self.boost
    }

    fn set_boost(&mut self, boost: Score) {
        self.boost = boost;
    }
}
