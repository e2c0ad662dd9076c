use super::Normalizer;
use regex::Regex;
use std::sync::LazyLock;

/// `<id>\t<yyyy-mm-dd hh:mm:ss>\t` record prefix
static RECORD_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+\t\d+-\d+-\d+\s\d+:\d+:\d+\t").expect("valid prefix regex")
});

static MENTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@\w+").expect("valid mention regex"));

static URL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"http\S+").expect("valid url regex"));

/// Clean a single tweet record.
///
/// Strips the record prefix, `@mentions`, URLs and `#` characters, then
/// lowercases and trims. The result may be empty.
pub fn preprocess_tweet(line: &str) -> String {
    let text = RECORD_PREFIX.replace(line, "");
    let text = MENTION.replace_all(&text, "");
    let text = URL.replace_all(&text, "");
    let text = text.replace('#', "");
    text.to_lowercase().trim().to_string()
}

/// Normalizer for tab-separated tweet dumps
#[derive(Debug, Clone, Copy, Default)]
pub struct TweetNormalizer;

impl Normalizer for TweetNormalizer {
    fn normalize(&self, line: &str) -> Option<String> {
        let cleaned = preprocess_tweet(line);
        if cleaned.is_empty() {
            None
        } else {
            Some(cleaned)
        }
    }
}
