//! Tests for snapshot assembly, compression round-trips and the archive
//! store.

use std::io::Read;
use std::time::Duration;

use chrono::{TimeZone, Utc};
use flate2::read::GzDecoder;
use serde_json::{Map, Value, json};
use spotivault::management::ArchiveManager;
use spotivault::snapshot;
use spotivault::spotify::{RetryPolicy, SpotifyClient};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn canned_document() -> Map<String, Value> {
    let mut document = Map::new();
    document.insert("playlists".to_string(), json!([{"id": "p1"}]));
    document.insert("devices".to_string(), json!({"devices": []}));
    document.insert(
        "saved_tracks".to_string(),
        json!({"items": [{"track": {"id": "t1"}}], "next": null}),
    );
    document
}

#[test]
fn test_snapshot_gzip_round_trip() {
    let document = canned_document();
    let encoded = serde_json::to_vec(&Value::Object(document.clone())).unwrap();

    let compressed = snapshot::compress(&encoded).unwrap();
    assert!(compressed.len() < encoded.len() + 64);

    let mut decoder = GzDecoder::new(compressed.as_slice());
    let mut decompressed = Vec::new();
    decoder.read_to_end(&mut decompressed).unwrap();

    let decoded: Value = serde_json::from_slice(&decompressed).unwrap();
    assert_eq!(decoded, Value::Object(document));
}

#[test]
fn test_object_key_format() {
    let ts = Utc.with_ymd_and_hms(2024, 3, 5, 7, 9, 11).unwrap();
    assert_eq!(snapshot::object_key(ts), "2024-03-05_070911_UTC.json.gz");
}

#[tokio::test]
async fn test_archive_put_writes_blob_under_bucket() {
    let tmp = tempfile::tempdir().unwrap();
    let archive = ArchiveManager::with_root("spotivault-test".to_string(), tmp.path().into());

    let key = "2024-03-05_070911_UTC.json.gz";
    let written = archive.put(key, b"blob-bytes").await.unwrap();

    assert_eq!(written, tmp.path().join("spotivault-test").join(key));
    let bytes = std::fs::read(&written).unwrap();
    assert_eq!(bytes, b"blob-bytes");
}

#[tokio::test]
async fn test_snapshot_document_has_fixed_exhaustive_keys() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/me/playlists"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"items": [], "next": null})),
        )
        .mount(&mock_server)
        .await;

    // Every non-paginated endpoint answers with a simple marker payload.
    for endpoint in [
        "/me/player/recently-played",
        "/me/player/devices",
        "/me/top/artists",
        "/me/top/tracks",
        "/me/following",
        "/me/albums",
        "/me/tracks",
    ] {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
            .mount(&mock_server)
            .await;
    }

    let client = SpotifyClient::new(
        mock_server.uri(),
        "test-token".to_string(),
        RetryPolicy {
            fixed_delay: Duration::from_millis(10),
            max_attempts: 2,
        },
    );

    let document = snapshot::build(&client).await.unwrap();

    // serde_json::Map iterates keys in sorted order.
    let keys: Vec<&String> = document.keys().collect();
    assert_eq!(
        keys,
        vec![
            "devices",
            "followed_artists",
            "playlists",
            "recently_played",
            "saved_albums",
            "saved_tracks",
            "top_artists_long",
            "top_artists_medium",
            "top_artists_short",
            "top_tracks_long",
            "top_tracks_medium",
            "top_tracks_short",
        ]
    );
}
