use crate::docset::{DocSet, NOT_STARTED, TERMINATED};
use crate::DocId;

/// Simulates a posting list from a plain vector of doc ids.
/// `VecDocSet` only exists for testing purposes.
pub struct VecDocSet {
    doc_ids: Vec<DocId>,
    cursor: usize,
    doc: DocId,
}

impl From<Vec<DocId>> for VecDocSet {
    fn from(doc_ids: Vec<DocId>) -> VecDocSet {
        VecDocSet {
            doc_ids,
            cursor: 0,
            doc: NOT_STARTED,
        }
    }
}

impl DocSet for VecDocSet {
    fn advance(&mut self) -> DocId {
        if self.cursor < self.doc_ids.len() {
            self.doc = self.doc_ids[self.cursor];
            self.cursor += 1;
        } else {
            self.doc = TERMINATED;
        }
        self.doc
    }

    fn doc(&self) -> DocId {
        self.doc
    }

    fn size_hint(&self) -> u32 {
        self.doc_ids.len() as u32
    }
}
