//! Word concordance over a fixed batch of plain-text documents.
//!
//! Content flows through the [`tokenizer`] (flat word sequence per document)
//! and the [`lines`] indexer (per-line word lists), is folded into a
//! [`Concordance`] by [`ConcordanceBuilder`], and summarised by [`aggregate`].
//! [`report`] turns the results into text rows and [`persist`] writes them.

pub mod aggregate;
pub mod grammar;
pub mod index;
pub mod lines;
pub mod order;
pub mod persist;
pub mod report;
pub mod tokenizer;

pub use grammar::Grammar;
pub use index::{Concordance, ConcordanceBuilder, Corpus, DocId, Document, Occurrence};
pub use order::OrderingKey;
