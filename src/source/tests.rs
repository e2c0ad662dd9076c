use super::*;
use crate::preprocess::TweetNormalizer;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_parse_url_source() {
    assert_eq!(
        CorpusSource::parse("https://example.com/tweets.txt"),
        CorpusSource::Url("https://example.com/tweets.txt".to_string())
    );
    assert_eq!(
        CorpusSource::parse(" http://example.com/a "),
        CorpusSource::Url("http://example.com/a".to_string())
    );
}

#[test]
fn test_parse_file_source() {
    assert_eq!(
        CorpusSource::parse("data/usnewshealth.txt"),
        CorpusSource::File(PathBuf::from("data/usnewshealth.txt"))
    );
}

#[test]
fn test_default_source_is_health_dump() {
    assert_eq!(CorpusSource::default().to_string(), DEFAULT_SOURCE_URL);
}

#[test]
fn test_fetch_local_file() {
    let file = write_temp("line one\nline two\n");
    let source = CorpusSource::File(file.path().to_path_buf());

    let text = SourceFetcher::new().fetch(&source).unwrap();
    assert_eq!(text, "line one\nline two\n");
}

#[test]
fn test_fetch_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let source = CorpusSource::File(dir.path().join("missing.txt"));

    let err = SourceFetcher::new().fetch(&source).unwrap_err();
    assert!(matches!(err, FetchError::Io { .. }));
    assert!(!err.is_transient());
    assert!(err.to_string().contains("missing.txt"));
}

#[test]
fn test_load_corpus_normalizes_lines() {
    let file = write_temp(
        "1\t2015-04-09 01:31:50\tFlu shots #health http://t.co/a\n\
         2\t2015-04-09 01:32:00\t@who\n\
         3\t2015-04-09 01:33:10\tEbola Update\n",
    );
    let source = CorpusSource::File(file.path().to_path_buf());

    let corpus = SourceFetcher::new()
        .retries(0)
        .load_corpus(&source, &TweetNormalizer)
        .unwrap();

    assert_eq!(corpus.len(), 2);
    assert_eq!(corpus.get(0).unwrap().text(), "flu shots health");
    assert_eq!(corpus.get(1).unwrap().text(), "ebola update");
}

#[test]
fn test_transient_classification() {
    let server_error = FetchError::BadStatus {
        status: 503,
        reason: "Service Unavailable".to_string(),
    };
    let not_found = FetchError::BadStatus {
        status: 404,
        reason: "Not Found".to_string(),
    };

    assert!(server_error.is_transient());
    assert!(!not_found.is_transient());
    assert!(FetchError::RequestFailed("reset".to_string()).is_transient());
    assert_eq!(not_found.to_string(), "HTTP 404: Not Found");
}

#[test]
fn test_unreachable_url_fails_after_retries() {
    let source = CorpusSource::Url("http://127.0.0.1:9/tweets.txt".to_string());
    let fetcher = SourceFetcher::new()
        .retries(1)
        .backoff(Duration::from_millis(1));

    let err = fetcher.fetch(&source).unwrap_err();
    assert!(matches!(err, FetchError::RequestFailed(_)));
}

// Integration test - requires network access
#[test]
#[ignore]
fn test_fetch_default_source() {
    let corpus = SourceFetcher::new()
        .load_corpus(&CorpusSource::default(), &TweetNormalizer)
        .unwrap();

    assert!(corpus.len() > 100);
}

#[test]
fn test_transient_failure_then_success() {
    let source = CorpusSource::default();
    let fetcher = SourceFetcher::new()
        .retries(2)
        .backoff(Duration::from_millis(1));
    let mut calls = 0;

    let text = fetcher
        .with_retries(&source, || {
            calls += 1;
            if calls == 1 {
                Err(FetchError::BadStatus {
                    status: 503,
                    reason: "Service Unavailable".to_string(),
                })
            } else {
                Ok("flu season\n".to_string())
            }
        })
        .unwrap();

    assert_eq!(text, "flu season\n");
    assert_eq!(calls, 2);
}

#[test]
fn test_permanent_failure_not_retried() {
    let source = CorpusSource::default();
    let fetcher = SourceFetcher::new()
        .retries(3)
        .backoff(Duration::from_millis(1));
    let mut calls = 0;

    let err = fetcher
        .with_retries(&source, || {
            calls += 1;
            Err(FetchError::BadStatus {
                status: 404,
                reason: "Not Found".to_string(),
            })
        })
        .unwrap_err();

    assert!(matches!(err, FetchError::BadStatus { status: 404, .. }));
    assert_eq!(calls, 1);
}

#[test]
fn test_retries_exhausted() {
    let source = CorpusSource::default();
    let fetcher = SourceFetcher::new()
        .retries(2)
        .backoff(Duration::from_millis(1));
    let mut calls = 0;

    let err = fetcher
        .with_retries(&source, || {
            calls += 1;
            Err(FetchError::RequestFailed("connection reset".to_string()))
        })
        .unwrap_err();

    assert!(matches!(err, FetchError::RequestFailed(_)));
    assert_eq!(calls, 3);
}

#[test]
fn test_backoff_doubles_and_is_capped() {
    let fetcher = SourceFetcher::new().backoff(Duration::from_millis(500));

    assert_eq!(fetcher.delay_for(0), Duration::from_millis(500));
    assert_eq!(fetcher.delay_for(1), Duration::from_millis(1000));
    assert_eq!(fetcher.delay_for(3), Duration::from_millis(4000));
    assert_eq!(fetcher.delay_for(40), MAX_BACKOFF);

    let huge = SourceFetcher::new().backoff(Duration::from_millis(u64::MAX));
    assert_eq!(huge.delay_for(0), MAX_BACKOFF);
    assert_eq!(huge.delay_for(5), MAX_BACKOFF);
}
