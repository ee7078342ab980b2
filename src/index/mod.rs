//! Flat-file posting-list persistence.

mod dir_index;
mod fd_cache;

pub use self::dir_index::{DirIndex, Indexable};
pub use self::fd_cache::FdCache;
