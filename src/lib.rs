//! quiver is a small inverted-index query engine.
//!
//! A query is a tree of [`Scorer`]s. Leaves are [`TermScorer`]s backed by
//! an immutable sorted posting list; interior nodes coordinate their
//! children: [`intersect_scorers`] leapfrogs across them,
//! [`union_scorers`] merges them through a min-heap, [`Exclude`] removes
//! the docs of its excluding children, [`dis_max_scorers`] keeps the best
//! child's score, [`ConstScorer`] pins the score of a whole subtree.
//! Whatever its shape, the root is a single scorer that yields every
//! matching doc exactly once, in ascending doc order, along with an
//! idf-based score.
//!
//! ```
//! use quiver::{union_scorers, Scorer, TermScorer};
//!
//! let john = TermScorer::new(10, "name:john", vec![4, 5]);
//! let johnny = TermScorer::new(10, "name:johnny", vec![4, 100]);
//! let mut query = union_scorers(vec![
//!     Box::new(john) as Box<dyn Scorer>,
//!     Box::new(johnny) as Box<dyn Scorer>,
//! ]);
//! query.for_each(&mut |doc, score| {
//!     println!("{doc} scored {score}");
//! });
//! ```
//!
//! Posting lists can live in memory, or under a directory tree managed by
//! [`index::DirIndex`], which also translates JSON query descriptions
//! (see [`parse_query`]) into scorer trees.

#![warn(missing_docs)]

mod docset;
mod error;
pub mod index;
pub mod query;

pub use self::docset::{DocSet, NOT_STARTED, TERMINATED};
pub use self::error::QuiverError;
pub use self::index::{DirIndex, FdCache, Indexable};
pub use self::query::{
    dis_max_scorers, intersect_scorers, parse_query, union_scorers, ConstScorer, EmptyScorer,
    Exclude, Scorer, TermScorer,
};

/// A doc id is a signed 32-bit integer. Real ids lie in
/// `[0, TERMINATED)`; negative values are reserved for sentinels.
pub type DocId = i32;

/// A f32 that represents the score of a document.
pub type Score = f32;

/// The crate's result type.
pub type Result<T> = std::result::Result<T, error::QuiverError>;
