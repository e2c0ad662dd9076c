use super::*;

#[test]
fn test_strips_record_prefix() {
    let line = "585978391360221184\t2015-04-09 01:31:50\tBreast cancer risk test devised";
    assert_eq!(preprocess_tweet(line), "breast cancer risk test devised");
}

#[test]
fn test_prefix_only_stripped_at_start() {
    let line = "see 12\t2015-04-09 01:31:50\tthis";
    assert_eq!(preprocess_tweet(line), "see 12\t2015-04-09 01:31:50\tthis");
}

#[test]
fn test_removes_mentions_urls_and_hashes() {
    let line = "RT @nytimes: #Ebola vaccine trial http://nyti.ms/1abc https://t.co/xyz";
    assert_eq!(preprocess_tweet(line), "rt : ebola vaccine trial");
}

#[test]
fn test_lowercases_and_trims() {
    assert_eq!(preprocess_tweet("   Flu SEASON  "), "flu season");
}

#[test]
fn test_normalizer_drops_empty() {
    let normalizer = TweetNormalizer;

    assert_eq!(normalizer.normalize(""), None);
    assert_eq!(normalizer.normalize("@cnn http://cnn.it/x #"), None);
    assert_eq!(
        normalizer.normalize("Healthy #Diet"),
        Some("healthy diet".to_string())
    );
}

#[test]
fn test_normalizer_as_trait_object() {
    let normalizer: Box<dyn Normalizer> = Box::new(TweetNormalizer);
    assert_eq!(normalizer.normalize("A B"), Some("a b".to_string()));
}
