use std::borrow::BorrowMut;

use crate::docset::{DocSet, TERMINATED};
use crate::{DocId, Score};

/// Scored [`DocSet`].
///
/// The score is only defined right after a successful `advance`/`seek`:
/// never before the first advance, never after termination.
pub trait Scorer: DocSet {
    /// Returns the score at the current doc.
    fn score(&mut self) -> Score;

    /// Replaces the node's multiplicative boost factor (default `1.0`).
    ///
    /// Meant to be called while assembling the tree, before driving
    /// begins.
    fn set_boost(&mut self, boost: Score);

    /// Drives this scorer to exhaustion, handing every `(doc, score)`
    /// pair to `callback` in strictly ascending doc order.
    ///
    /// This is the one legitimate way to consume a query tree.
    fn for_each(&mut self, callback: &mut dyn FnMut(DocId, Score)) {
        loop {
            let doc = self.advance();
            if doc == TERMINATED {
                break;
            }
            let score = self.score();
            callback(doc, score);
        }
    }
}

impl<TScorer: Scorer + ?Sized> Scorer for Box<TScorer> {
    fn score(&mut self) -> Score {
        let unboxed: &mut TScorer = self.borrow_mut();
        unboxed.score()
    }

    fn set_boost(&mut self, boost: Score) {
        let unboxed: &mut TScorer = self.borrow_mut();
        unboxed.set_boost(boost)
    }

    fn for_each(&mut self, callback: &mut dyn FnMut(DocId, Score)) {
        let unboxed: &mut TScorer = self.borrow_mut();
        unboxed.for_each(callback)
    }
}
