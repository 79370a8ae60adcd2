use std::fmt;

use serde_json::Value;

use crate::{
    info,
    spotify::{ApiError, SpotifyClient},
    types::{Page, PlaylistRef},
};

/// Which ranking endpoint to query under `/me/top`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopKind {
    Artists,
    Tracks,
}

impl fmt::Display for TopKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TopKind::Artists => write!(f, "artists"),
            TopKind::Tracks => write!(f, "tracks"),
        }
    }
}

/// Time window for top artists/tracks, as the API spells it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeRange {
    Short,
    Medium,
    Long,
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeRange::Short => write!(f, "short_term"),
            TimeRange::Medium => write!(f, "medium_term"),
            TimeRange::Long => write!(f, "long_term"),
        }
    }
}

impl SpotifyClient {
    /// Gets the user's list of playlists without their tracks.
    ///
    /// Drains the full paging object, so the result covers every playlist
    /// the account can see, in server-delivered order.
    pub async fn get_playlists_short(&self) -> Result<Vec<Value>, ApiError> {
        let api_url = format!("{uri}/me/playlists?limit=50", uri = self.api_url());
        info!("Fetching list of playlists");
        self.get_all_items(&api_url).await
    }

    /// Gets the user's playlists with fully materialized track lists.
    ///
    /// Replaces each short playlist entry with the full playlist object,
    /// and replaces that object's embedded `tracks` paging wrapper with the
    /// flat, fully-drained track array. The result carries no pagination
    /// wrappers at any level.
    pub async fn get_playlists(&self) -> Result<Vec<Value>, ApiError> {
        let short = self.get_playlists_short().await?;

        let mut full = Vec::with_capacity(short.len());
        for playlist in short {
            let reference: PlaylistRef =
                serde_json::from_value(playlist).map_err(ApiError::Decode)?;
            full.push(self.get_full_playlist(&reference.owner.id, &reference.id).await?);
        }

        Ok(full)
    }

    /// Fetches one playlist and unwraps its nested track pagination.
    async fn get_full_playlist(
        &self,
        user_id: &str,
        playlist_id: &str,
    ) -> Result<Value, ApiError> {
        let api_url = format!(
            "{uri}/users/{user_id}/playlists/{playlist_id}",
            uri = self.api_url()
        );
        info!("Fetching playlist {}", playlist_id);

        let mut playlist = self.get(&api_url).await?;
        let tracks_page: Page =
            serde_json::from_value(playlist["tracks"].take()).map_err(ApiError::Decode)?;
        let tracks = self.drain_pages(tracks_page).await?;
        playlist["tracks"] = Value::Array(tracks);

        Ok(playlist)
    }

    /// Gets the user's playlists decoded to typed references.
    ///
    /// Used for name resolution on the control path and for the `playlists`
    /// table; extra fields in the API payload are ignored.
    pub async fn get_playlist_refs(&self) -> Result<Vec<PlaylistRef>, ApiError> {
        let items = self.get_playlists_short().await?;
        items
            .into_iter()
            .map(|item| serde_json::from_value(item).map_err(ApiError::Decode))
            .collect()
    }

    /// Gets the top artists or tracks for one time range.
    pub async fn get_top(&self, kind: TopKind, range: TimeRange) -> Result<Value, ApiError> {
        let api_url = format!(
            "{uri}/me/top/{kind}?limit=50&time_range={range}",
            uri = self.api_url()
        );
        info!("Fetching top {} ({})", kind, range);
        self.get(&api_url).await
    }

    /// Gets the account's available playback devices.
    pub async fn get_devices(&self) -> Result<Value, ApiError> {
        info!("Fetching devices");
        let api_url = format!("{uri}/me/player/devices", uri = self.api_url());
        self.get(&api_url).await
    }

    /// Gets the most recently played tracks.
    pub async fn get_recently_played(&self) -> Result<Value, ApiError> {
        self.get_simple_endpoint("me/player/recently-played").await
    }

    /// Gets the artists the user follows.
    pub async fn get_followed_artists(&self) -> Result<Value, ApiError> {
        self.get_simple_endpoint("me/following?type=artist").await
    }

    /// Gets the user's saved albums.
    pub async fn get_saved_albums(&self) -> Result<Value, ApiError> {
        self.get_simple_endpoint("me/albums").await
    }

    /// Gets the user's saved tracks.
    pub async fn get_saved_tracks(&self) -> Result<Value, ApiError> {
        self.get_simple_endpoint("me/tracks").await
    }

    async fn get_simple_endpoint(&self, endpoint: &str) -> Result<Value, ApiError> {
        let separator = if endpoint.contains('?') { '&' } else { '?' };
        let api_url = format!(
            "{uri}/{endpoint}{separator}limit=50",
            uri = self.api_url()
        );
        info!("Fetching {}", endpoint);
        self.get(&api_url).await
    }
}
