use std::fmt;

use crate::docset::{DocSet, NOT_STARTED, TERMINATED};
use crate::query::Scorer;
use crate::{DocId, Score};

/// Leaf scorer walking a sorted, duplicate-free posting list.
///
/// Every emitted doc scores the term's idf, computed once at construction
/// as `ln(1 + num_docs / df)`, times the boost.
pub struct TermScorer {
    term: String,
    postings: Vec<DocId>,
    cursor: usize,
    doc: DocId,
    idf: Score,
    boost: Score,
}

impl TermScorer {
    /// Builds a term scorer over `postings`, which must be strictly
    /// ascending and duplicate free.
    ///
    /// `num_docs` is the total number of documents in the corpus; `term`
    /// identifies the scorer in debug output.
    pub fn new<T: Into<String>>(num_docs: u32, term: T, postings: Vec<DocId>) -> TermScorer {
        let doc_freq = postings.len().max(1);
        let idf = (1f32 + num_docs as f32 / doc_freq as f32).ln();
        TermScorer {
            term: term.into(),
            postings,
            cursor: 0,
            doc: NOT_STARTED,
            idf,
            boost: 1f32,
        }
    }

    /// The idf weight of this term, before boost.
    pub fn idf(&self) -> Score {
        self.idf
    }
}

impl DocSet for TermScorer {
    fn advance(&mut self) -> DocId {
        if self.cursor < self.postings.len() {
            self.doc = self.postings[self.cursor];
            self.cursor += 1;
        } else {
            self.doc = TERMINATED;
        }
        self.doc
    }

    fn seek(&mut self, target: DocId) -> DocId {
        if self.doc >= target {
            return self.doc;
        }
        let unread = &self.postings[self.cursor..];
        self.cursor += unread.partition_point(|&doc| doc < target);
        self.advance()
    }

    fn doc(&self) -> DocId {
        self.doc
    }

    fn size_hint(&self) -> u32 {
        self.postings.len() as u32
    }
}

impl Scorer for TermScorer {
    fn score(&mut self) -> Score {
        self.idf * self.boost
    }

    fn set_boost(&mut self, boost: Score) {
        self.boost = boost;
    }
}

impl fmt::Debug for TermScorer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TermScorer({}/{})", self.term, self.postings.len())
    }
}
