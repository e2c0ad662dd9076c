mod tweet;

#[cfg(test)]
mod tests;

pub use tweet::{TweetNormalizer, preprocess_tweet};

/// Turns one raw input line into a normalized document text
pub trait Normalizer: Send + Sync {
    /// Normalize a single line
    ///
    /// # Returns
    /// The cleaned text, or `None` when nothing is left after cleaning
    fn normalize(&self, line: &str) -> Option<String>;
}
