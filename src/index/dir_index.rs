//! A flat-file posting store: one file of packed little-endian 32-bit
//! doc ids per term, laid out under `root/field/<last char of term>/term`.

use std::fs;
use std::fs::File;
use std::io::{Seek, SeekFrom};
use std::path::{Path, PathBuf};

use byteorder::{ByteOrder, LittleEndian, WriteBytesExt};
use log::{debug, warn};

use crate::index::FdCache;
use crate::query::{Scorer, TermScorer};
use crate::{DocId, QuiverError};

/// Replaces every non-alphanumeric character with `_`, so field and term
/// strings are safe to use as path components.
fn sanitize(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect()
}

/// A document that can be fed to [`DirIndex::index`].
///
/// Values arrive pre-tokenized: each value string is indexed as a single
/// term. Text analysis belongs to the caller.
pub trait Indexable {
    /// The id appended to every posting list this document lands in.
    fn document_id(&self) -> DocId;

    /// The `(field, values)` pairs to index.
    fn indexable_fields(&self) -> Vec<(&str, Vec<&str>)>;
}

/// Posting-list persistence over a directory tree.
///
/// Appends are cheap and unordered; [`DirIndex::term_query`] restores the
/// strictly-ascending-unique shape the scorers require when it loads a
/// list back.
pub struct DirIndex {
    root: PathBuf,
    fd_cache: FdCache,
    /// Total number of documents in the corpus, used as the idf numerator
    /// of every term scorer built by this index.
    pub total_docs: u32,
}

impl DirIndex {
    /// Opens an index rooted at `root`. `fd_cache` bounds the number of
    /// write descriptors kept open across [`DirIndex::index`] calls.
    pub fn new(root: impl Into<PathBuf>, fd_cache: FdCache) -> DirIndex {
        DirIndex {
            root: root.into(),
            fd_cache,
            total_docs: 1,
        }
    }

    fn posting_path(&self, field: &str, term: &str) -> Option<PathBuf> {
        let last_char = term.chars().last()?;
        Some(
            self.root
                .join(field)
                .join(last_char.to_string())
                .join(term),
        )
    }

    /// Indexes `docs`, appending each document's id to the posting file
    /// of every `(field, value)` pair it carries.
    ///
    /// Fields or values that sanitize down to nothing are skipped.
    pub fn index<TDoc: Indexable>(&self, docs: &[TDoc]) -> crate::Result<()> {
        for doc in docs {
            let doc_id = doc.document_id();
            for (field, values) in doc.indexable_fields() {
                let field = sanitize(field);
                if field.is_empty() {
                    continue;
                }
                for value in values {
                    let term = sanitize(value);
                    if term.is_empty() {
                        continue;
                    }
                    if let Some(path) = self.posting_path(&field, &term) {
                        self.append(&path, doc_id)?;
                    }
                }
            }
        }
        Ok(())
    }

    /// Appends one doc id to the posting file at `path`.
    ///
    /// The write lands on the highest multiple of 4 bytes at or below
    /// EOF, so a torn previous write cannot shift the rest of the stream.
    fn append(&self, path: &Path, doc_id: DocId) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|io_error| QuiverError::io_with_path(parent.to_path_buf(), io_error))?;
        }
        let file = self.fd_cache.compute_if_absent(path, |path| {
            debug!("creating posting file {path:?}");
            fs::OpenOptions::new().create(true).write(true).open(path)
        })?;
        let mut file: &File = &file;
        let end = file
            .seek(SeekFrom::End(0))
            .map_err(|io_error| QuiverError::io_with_path(path.to_path_buf(), io_error))?;
        file.seek(SeekFrom::Start(end / 4 * 4))
            .map_err(|io_error| QuiverError::io_with_path(path.to_path_buf(), io_error))?;
        file.write_i32::<LittleEndian>(doc_id)
            .map_err(|io_error| QuiverError::io_with_path(path.to_path_buf(), io_error))?;
        Ok(())
    }

    /// Builds a term scorer from the posting file for `(field, term)`.
    ///
    /// A missing file is an empty term, not an error. A list that is not
    /// strictly ascending is sorted and deduplicated on load.
    pub fn term_query(&self, field: &str, term: &str) -> TermScorer {
        let field = sanitize(field);
        let term = sanitize(term);
        let path = if field.is_empty() {
            None
        } else {
            self.posting_path(&field, &term)
        };
        let path = match path {
            Some(path) => path,
            None => {
                return TermScorer::new(
                    self.total_docs,
                    format!("broken({field}:{term})"),
                    Vec::new(),
                )
            }
        };
        let data = match fs::read(&path) {
            Ok(data) => data,
            Err(_) => {
                debug!("no posting file for {path:?}");
                return TermScorer::new(self.total_docs, path.to_string_lossy(), Vec::new());
            }
        };
        let mut postings: Vec<DocId> = data.chunks_exact(4).map(LittleEndian::read_i32).collect();
        if !postings.windows(2).all(|pair| pair[0] < pair[1]) {
            warn!("unsorted or duplicated postings in {path:?}, fixing on load");
            postings.sort_unstable();
            postings.dedup();
        }
        TermScorer::new(self.total_docs, path.to_string_lossy(), postings)
    }

    /// Translates a JSON query description into a scorer tree whose term
    /// leaves read from this index.
    pub fn parse_query(&self, query_json: &serde_json::Value) -> crate::Result<Box<dyn Scorer>> {
        crate::query::parse_query(query_json, &|field, value| {
            Box::new(self.term_query(field, value))
        })
    }
}
