use crate::docset::{DocSet, TERMINATED};
use crate::query::Scorer;
use crate::{DocId, Score};

/// Filters a `DocSet` by removing the docs present in any of the
/// excluding docsets.
///
/// The excluding docsets have no impact on scoring.
pub struct Exclude<TDocSet, TDocSetExclude> {
    underlying_docset: TDocSet,
    excluding_docsets: Vec<TDocSetExclude>,
    boost: Score,
}

impl<TDocSet, TDocSetExclude> Exclude<TDocSet, TDocSetExclude>
where
    TDocSet: DocSet,
    TDocSetExclude: DocSet,
{
    /// Creates a new `Exclude` scorer.
    pub fn new(
        underlying_docset: TDocSet,
        excluding_docsets: Vec<TDocSetExclude>,
    ) -> Exclude<TDocSet, TDocSetExclude> {
        Exclude {
            underlying_docset,
            excluding_docsets,
            boost: 1f32,
        }
    }

    /// Returns true iff the current doc is not removed.
    ///
    /// A terminated excluding docset compares greater than any real doc
    /// and can never remove anything again.
    fn accept(&mut self) -> bool {
        let doc = self.underlying_docset.doc();
        self.excluding_docsets
            .iter_mut()
            .all(|excluding| excluding.seek(doc) != doc)
    }
}

impl<TDocSet, TDocSetExclude> DocSet for Exclude<TDocSet, TDocSetExclude>
where
    TDocSet: DocSet,
    TDocSetExclude: DocSet,
{
    fn advance(&mut self) -> DocId {
        loop {
            let doc = self.underlying_docset.advance();
            if doc == TERMINATED || self.accept() {
                return doc;
            }
        }
    }

    fn seek(&mut self, target: DocId) -> DocId {
        let doc = self.underlying_docset.seek(target);
        if doc == TERMINATED || self.accept() {
            return doc;
        }
        self.advance()
    }

    fn doc(&self) -> DocId {
        self.underlying_docset.doc()
    }

    /// The upper bound is the underlying docset's: exclusion can only
    /// remove docs.
    fn size_hint(&self) -> u32 {
        self.underlying_docset.size_hint()
    }
}

impl<TScorer, TDocSetExclude> Scorer for Exclude<TScorer, TDocSetExclude>
where
    TScorer: Scorer,
    TDocSetExclude: DocSet,
{
    fn score(&mut self) -> Score {
        self.underlying_docset.score() * self.boost
    }

    fn set_boost(&mut self, boost: Score) {
        self.boost = boost;
    }
}
