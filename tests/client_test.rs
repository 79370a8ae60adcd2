//! Integration tests for the Spotify client's request, retry and
//! pagination behavior, against a local mock server.

use std::time::{Duration, Instant};

use serde_json::json;
use spotivault::spotify::{ApiError, RetryPolicy, SpotifyClient};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fast_policy() -> RetryPolicy {
    RetryPolicy {
        fixed_delay: Duration::from_millis(10),
        max_attempts: 3,
    }
}

fn test_client(server: &MockServer) -> SpotifyClient {
    SpotifyClient::new(server.uri(), "test-token".to_string(), fast_policy())
}

#[tokio::test]
async fn test_get_sends_bearer_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/me/player/devices"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"devices": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let body = client.get_devices().await.unwrap();

    assert_eq!(body["devices"], json!([]));
}

#[tokio::test]
async fn test_two_page_playlist_list_drains_in_order() {
    let mock_server = MockServer::start().await;

    // Page 1: 2 items plus a next URL, page 2: 1 item, no next.
    let next_url = format!("{}/me/playlists?page=2", mock_server.uri());
    Mock::given(method("GET"))
        .and(path("/me/playlists"))
        .and(query_param("limit", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"id": "p1"}, {"id": "p2"}],
            "next": next_url,
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/me/playlists"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"id": "p3"}],
            "next": null,
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let items = client.get_playlists_short().await.unwrap();

    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["id"], "p1");
    assert_eq!(items[1]["id"], "p2");
    assert_eq!(items[2]["id"], "p3");
    // The .expect(1) mounts verify exactly 2 GET calls were made.
}

#[tokio::test]
async fn test_rate_limit_waits_retry_after_then_resends() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/me/player/devices"))
        .respond_with(
            ResponseTemplate::new(429).insert_header("Retry-After", "1"),
        )
        .up_to_n_times(1)
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/me/player/devices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"devices": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let start = Instant::now();
    let body = client.get_devices().await.unwrap();

    assert!(start.elapsed() >= Duration::from_secs(1));
    assert_eq!(body["devices"], json!([]));
}

#[tokio::test]
async fn test_success_does_not_sleep() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/me/player/devices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"devices": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let start = Instant::now();
    client.get_devices().await.unwrap();

    assert!(start.elapsed() < Duration::from_millis(500));
}

#[tokio::test]
async fn test_forbidden_is_fatal_without_retry() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/me/player/devices"))
        .respond_with(ResponseTemplate::new(403).set_body_string("insufficient scope"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client.get_devices().await.unwrap_err();

    match err {
        ApiError::Fatal { status, body } => {
            assert_eq!(status.as_u16(), 403);
            assert_eq!(body, "insufficient scope");
        }
        other => panic!("expected fatal error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_transient_error_retried_then_succeeds() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/me/player/devices"))
        .respond_with(ResponseTemplate::new(502))
        .up_to_n_times(1)
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/me/player/devices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"devices": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let body = client.get_devices().await.unwrap();

    assert_eq!(body["devices"], json!([]));
}

#[tokio::test]
async fn test_persistent_server_error_exhausts_retry_budget() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/me/player/devices"))
        .respond_with(ResponseTemplate::new(500))
        .expect(3)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client.get_devices().await.unwrap_err();

    match err {
        ApiError::RetriesExhausted { status, attempts } => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(attempts, 3);
        }
        other => panic!("expected exhausted retries, got {:?}", other),
    }
}

#[tokio::test]
async fn test_full_playlists_unwrap_nested_track_pagination() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/me/playlists"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{
                "id": "p1",
                "name": "Chill",
                "uri": "spotify:playlist:p1",
                "owner": {"id": "user1"},
            }],
            "next": null,
        })))
        .mount(&mock_server)
        .await;

    let tracks_next = format!("{}/playlists/p1/tracks?offset=1", mock_server.uri());
    Mock::given(method("GET"))
        .and(path("/users/user1/playlists/p1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "p1",
            "name": "Chill",
            "tracks": {
                "items": [{"uri": "spotify:track:t1"}],
                "next": tracks_next,
            },
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/playlists/p1/tracks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"uri": "spotify:track:t2"}],
            "next": null,
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let playlists = client.get_playlists().await.unwrap();

    assert_eq!(playlists.len(), 1);
    // The embedded paging object is replaced by the flat track array.
    let tracks = playlists[0]["tracks"].as_array().unwrap();
    assert_eq!(tracks.len(), 2);
    assert_eq!(tracks[0]["uri"], "spotify:track:t1");
    assert_eq!(tracks[1]["uri"], "spotify:track:t2");
}
