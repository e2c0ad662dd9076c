mod document;


pub use document::{Corpus, Document};

/// Position of a document in its corpus
pub type DocId = u32;
