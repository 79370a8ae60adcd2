use crate::{error, info, snapshot, spotify::SpotifyClient, success};

/// Runs one snapshot-and-upload cycle.
///
/// Exchanges the refresh token, pulls the full endpoint set sequentially,
/// compresses the assembled document and stores it in the archive bucket.
/// Any failure along the way is fatal; there is no partial-snapshot
/// recovery, the next scheduled run simply starts over.
pub async fn pull() {
    info!("Refreshing access token...");
    let client = match SpotifyClient::connect().await {
        Ok(client) => client,
        Err(e) => error!("Failed to authenticate with Spotify: {}", e),
    };

    if let Err(e) = snapshot::run(&client).await {
        error!("Snapshot run failed: {}", e);
    }

    success!("Snapshot cycle complete.");
}
