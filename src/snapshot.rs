//! Snapshot assembly, compression and upload.
//!
//! One snapshot run pulls a fixed, exhaustive set of endpoints in sequence,
//! merges the fully-paginated results into a single JSON document, gzips it
//! and hands the blob to the archive store under a UTC-timestamp key. There
//! is no partial-snapshot recovery: any client error aborts the run.

use std::io::Write;

use chrono::{DateTime, Utc};
use flate2::{Compression, write::GzEncoder};
use serde_json::{Map, Value};

use crate::{
    Res, config, info,
    management::ArchiveManager,
    spotify::{ApiError, SpotifyClient, TimeRange, TopKind},
    success,
};

/// Assembles the snapshot document from the fixed endpoint set.
///
/// Keys are fixed and exhaustive per run; values are the fully-drained
/// JSON results, in the order the endpoints are pulled. The document is
/// immutable after assembly.
pub async fn build(client: &SpotifyClient) -> Result<Map<String, Value>, ApiError> {
    let mut document = Map::new();

    document.insert(
        "playlists".to_string(),
        Value::Array(client.get_playlists().await?),
    );
    document.insert(
        "recently_played".to_string(),
        client.get_recently_played().await?,
    );
    document.insert("devices".to_string(), client.get_devices().await?);
    document.insert(
        "top_artists_short".to_string(),
        client.get_top(TopKind::Artists, TimeRange::Short).await?,
    );
    document.insert(
        "top_artists_medium".to_string(),
        client.get_top(TopKind::Artists, TimeRange::Medium).await?,
    );
    document.insert(
        "top_artists_long".to_string(),
        client.get_top(TopKind::Artists, TimeRange::Long).await?,
    );
    document.insert(
        "top_tracks_short".to_string(),
        client.get_top(TopKind::Tracks, TimeRange::Short).await?,
    );
    document.insert(
        "top_tracks_medium".to_string(),
        client.get_top(TopKind::Tracks, TimeRange::Medium).await?,
    );
    document.insert(
        "top_tracks_long".to_string(),
        client.get_top(TopKind::Tracks, TimeRange::Long).await?,
    );
    document.insert(
        "followed_artists".to_string(),
        client.get_followed_artists().await?,
    );
    document.insert("saved_albums".to_string(), client.get_saved_albums().await?);
    document.insert("saved_tracks".to_string(), client.get_saved_tracks().await?);

    Ok(document)
}

/// Gzip-compresses a serialized snapshot.
pub fn compress(bytes: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(bytes)?;
    encoder.finish()
}

/// Derives the archive object key from a UTC timestamp.
///
/// Format: `YYYY-MM-DD_HHMMSS_UTC.json.gz`.
pub fn object_key(now: DateTime<Utc>) -> String {
    now.format("%Y-%m-%d_%H%M%S_UTC.json.gz").to_string()
}

/// Derives the archive bucket name from the deployment stage.
pub fn bucket_name() -> String {
    format!("spotivault-{}", config::stage())
}

/// Performs one full snapshot-and-upload cycle.
pub async fn run(client: &SpotifyClient) -> Res<()> {
    let document = build(client).await?;

    let encoded = serde_json::to_vec(&Value::Object(document))?;
    let compressed = compress(&encoded)?;

    let bucket = bucket_name();
    let key = object_key(Utc::now());
    info!("Uploading to {} : {}", bucket, key);

    let archive = ArchiveManager::new(bucket);
    archive.put(&key, &compressed).await?;

    success!("Snapshot uploaded ({} bytes compressed)", compressed.len());
    Ok(())
}
