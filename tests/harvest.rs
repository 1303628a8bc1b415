//! Harvesting replies end to end through the XRPC client and thread cache.

mod common;

use common::*;
use flagpacks::geo::Continent;
use flagpacks::harvest::harvest;
use flagpacks::xrpc::{CachedReader, ThreadCache, XrpcError};

const POST_A: &str = "at://did:plc:owner/app.bsky.feed.post/a";
const POST_B: &str = "at://did:plc:owner/app.bsky.feed.post/b";

#[tokio::test]
async fn replies_are_grouped_by_country() {
    let mock = MockXrpc::start().await;
    mock.enqueue(MockResponse::value(thread_json(&[
        ("did:plc:ch1", "I live in 🇨🇭 building cool stuff"),
        ("did:plc:eu", "Based in 🇪🇺"),
        ("did:plc:none", "Hello from somewhere"),
    ])))
    .await;
    mock.enqueue(MockResponse::value(thread_json(&[
        ("did:plc:ch2", "Zurich 🇨🇭"),
        ("did:plc:sct", "Living in 🏴\u{E0067}\u{E0062}\u{E0073}\u{E0063}\u{E0074}\u{E007F}"),
    ])))
    .await;

    let client = write_client(&mock);
    let result = harvest(&client, &[POST_A.to_string(), POST_B.to_string()])
        .await
        .unwrap();

    assert_eq!(result.replies_seen, 5);
    assert_eq!(result.attributed(), 3);
    assert_eq!(
        result.by_country.get(&code("CH")).unwrap(),
        &vec!["did:plc:ch1".to_string(), "did:plc:ch2".to_string()]
    );
    assert_eq!(result.by_country.get(&code("GB")).unwrap(), &vec!["did:plc:sct".to_string()]);
    assert_eq!(result.continents.get(&Continent::Europe), 3);
    assert!(result.by_country.get(&code("EU")).is_none());

    let calls = mock.calls().await;
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].param("uri"), Some(POST_A));
    assert_eq!(calls[1].param("uri"), Some(POST_B));
}

#[tokio::test]
async fn fetch_failure_aborts_the_run() {
    let mock = MockXrpc::start().await;
    mock.enqueue(MockResponse::error(400, "NotFound", "Post not found")).await;

    let client = write_client(&mock);
    let err = harvest(&client, &[POST_A.to_string(), POST_B.to_string()])
        .await
        .unwrap_err();

    assert!(matches!(err, XrpcError::Status { status: 400, .. }));
    assert_eq!(mock.calls().await.len(), 1);
}

#[tokio::test]
async fn cached_threads_are_not_refetched() {
    let mock = MockXrpc::start().await;
    mock.enqueue(MockResponse::value(thread_json(&[("did:plc:a", "in 🇩🇪")])))
        .await;

    let dir = tempfile::tempdir().unwrap();
    let posts = vec![POST_A.to_string()];

    let first = harvest(
        &CachedReader::new(write_client(&mock), ThreadCache::new(dir.path())),
        &posts,
    )
    .await
    .unwrap();
    let second = harvest(
        &CachedReader::new(write_client(&mock), ThreadCache::new(dir.path())),
        &posts,
    )
    .await
    .unwrap();

    assert_eq!(first.by_country, second.by_country);
    assert_eq!(second.countries.get(&code("DE")), 1);
    assert_eq!(mock.calls().await.len(), 1);
}

#[tokio::test]
async fn qualifying_respects_min_members() {
    let mock = MockXrpc::start().await;
    let mut replies: Vec<(String, &str)> = (0..7).map(|i| (format!("did:plc:ch{}", i), "in 🇨🇭")).collect();
    replies.extend((0..6).map(|i| (format!("did:plc:at{}", i), "in 🇦🇹")));
    let borrowed: Vec<(&str, &str)> = replies.iter().map(|(d, t)| (d.as_str(), *t)).collect();
    mock.enqueue(MockResponse::value(thread_json(&borrowed))).await;

    let client = write_client(&mock);
    let result = harvest(&client, &[POST_A.to_string()]).await.unwrap();

    let groups: Vec<_> = result.qualifying(7).map(|(country, members)| (country, members.len())).collect();
    assert_eq!(groups, vec![(code("CH"), 7)]);
}
