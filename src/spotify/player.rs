use serde_json::Value;

use crate::{
    info,
    spotify::{ApiError, SpotifyClient},
    types::{AddTracksRequest, CurrentlyPlaying, RemoveTracksRequest, TrackUri},
};

impl SpotifyClient {
    /// Gets the currently playing track and its playback context.
    ///
    /// The API answers 204 No Content when nothing is playing; that case
    /// is mapped to an empty [`CurrentlyPlaying`] instead of an error.
    pub async fn get_current_track(&self) -> Result<CurrentlyPlaying, ApiError> {
        let api_url = format!(
            "{uri}/me/player/currently-playing",
            uri = self.api_url()
        );
        info!("Fetching current playback");

        let body = self.get(&api_url).await?;
        if body.is_null() {
            return Ok(CurrentlyPlaying {
                item: None,
                context: None,
            });
        }

        serde_json::from_value(body).map_err(ApiError::Decode)
    }

    /// Adds a track to a playlist and returns the raw response body.
    pub async fn add_track(&self, playlist_id: &str, track_uri: &str) -> Result<Value, ApiError> {
        let api_url = format!(
            "{uri}/playlists/{playlist_id}/tracks",
            uri = self.api_url()
        );
        info!("Adding {} to playlist {}", track_uri, playlist_id);

        let payload = serde_json::to_value(AddTracksRequest {
            uris: vec![track_uri.to_string()],
        })
        .map_err(ApiError::Decode)?;
        self.post(&api_url, &payload).await
    }

    /// Removes a track from a playlist and returns the raw response body.
    pub async fn remove_track(
        &self,
        playlist_id: &str,
        track_uri: &str,
    ) -> Result<Value, ApiError> {
        let api_url = format!(
            "{uri}/playlists/{playlist_id}/tracks",
            uri = self.api_url()
        );
        info!("Removing {} from playlist {}", track_uri, playlist_id);

        let payload = serde_json::to_value(RemoveTracksRequest {
            tracks: vec![TrackUri {
                uri: track_uri.to_string(),
            }],
        })
        .map_err(ApiError::Decode)?;
        self.delete(&api_url, &payload).await
    }
}
