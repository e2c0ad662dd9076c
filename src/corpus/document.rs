use crate::corpus::DocId;
use crate::preprocess::Normalizer;
use std::collections::BTreeSet;

/// A normalized text together with its token set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Normalized text as produced by the normalizer
    text: String,
    /// Whitespace-separated tokens, duplicates collapsed
    tokens: BTreeSet<String>,
}

impl Document {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let tokens = text.split_whitespace().map(str::to_string).collect();
        Self { text, tokens }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &BTreeSet<String> {
        &self.tokens
    }

    /// A document with no tokens at all
    pub fn is_degenerate(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Ordered, read-only collection of documents for one clustering run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    documents: Vec<Document>,
}

impl Corpus {
    pub fn new(documents: Vec<Document>) -> Self {
        Self { documents }
    }

    /// Build a corpus from already normalized texts
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        texts.into_iter().map(Document::new).collect()
    }

    /// Normalize every line of `raw` and keep the non-empty results
    pub fn from_raw(raw: &str, normalizer: &dyn Normalizer) -> Self {
        raw.lines()
            .filter_map(|line| normalizer.normalize(line))
            .map(Document::new)
            .collect()
    }

    pub fn get(&self, id: DocId) -> Option<&Document> {
        self.documents.get(id as usize)
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.documents.iter()
    }
}

impl FromIterator<Document> for Corpus {
    fn from_iter<T: IntoIterator<Item = Document>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
