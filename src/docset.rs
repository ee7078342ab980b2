use std::borrow::{Borrow, BorrowMut};

use crate::DocId;

/// Sentinel doc of a docset that was built but never advanced.
pub const NOT_STARTED: DocId = -1;

/// Sentinel doc of an exhausted docset.
///
/// A terminated docset compares greater than any real doc, so combinators
/// can compare children uniformly without special-casing exhaustion.
pub const TERMINATED: DocId = i32::MAX;

/// Represents an iterable set of sorted doc ids.
pub trait DocSet {
    /// Goes to the lowest doc strictly greater than the current one.
    ///
    /// A freshly built docset is positioned on `NOT_STARTED`; the first
    /// call to `.advance()` positions it on its first doc. Once
    /// `TERMINATED` has been returned, every further call returns
    /// `TERMINATED` without touching any child state.
    fn advance(&mut self) -> DocId;

    /// Advances to the lowest doc greater than or equal to `target`.
    ///
    /// If the docset is already positioned on a doc `>= target`, it stays
    /// where it is and returns its current doc. Combinators rely on this
    /// idempotence.
    fn seek(&mut self, target: DocId) -> DocId {
        while self.doc() < target {
            self.advance();
        }
        self.doc()
    }

    /// Returns the doc this set is positioned on: `NOT_STARTED` before the
    /// first advance, `TERMINATED` after exhaustion.
    fn doc(&self) -> DocId;

    /// Returns an upper bound on the number of docs this set can emit.
    ///
    /// Used to order intersection children, never for correctness.
    fn size_hint(&self) -> u32;
}

impl<TDocSet: DocSet + ?Sized> DocSet for Box<TDocSet> {
    fn advance(&mut self) -> DocId {
        let unboxed: &mut TDocSet = self.borrow_mut();
        unboxed.advance()
    }

    fn seek(&mut self, target: DocId) -> DocId {
        let unboxed: &mut TDocSet = self.borrow_mut();
        unboxed.seek(target)
    }

    fn doc(&self) -> DocId {
        let unboxed: &TDocSet = self.borrow();
        unboxed.doc()
    }

    fn size_hint(&self) -> u32 {
        let unboxed: &TDocSet = self.borrow();
        unboxed.size_hint()
    }
}
