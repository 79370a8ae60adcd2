//! Move/add/delete actions on the currently playing track.
//!
//! Implements the three control actions against whatever is playing right
//! now. Target playlists are resolved by case-insensitive exact name match;
//! the source playlist comes from the playback context and only exists when
//! the user is actually listening to a playlist.

use std::fmt;

use crate::{
    spotify::{ApiError, SpotifyClient},
    types::PlaylistRef,
};

/// The three control actions exposed over HTTP.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackAction {
    /// Add to the target playlist and remove from the source playlist.
    Move,
    /// Add to the target playlist, leave the source untouched.
    Add,
    /// Remove from the source playlist.
    Delete,
}

/// Rejections of a control action. API failures are wrapped; everything
/// else is a validation outcome that becomes a 403 response, never a crash.
#[derive(Debug)]
pub enum PlaybackError {
    Api(ApiError),
    /// `move`/`add` called without a target playlist name.
    MissingTarget,
    /// Zero or multiple playlists matched the requested name.
    NoSuchPlaylist(String),
    /// Playback has no playlist context to remove the track from.
    NoSourcePlaylist,
}

impl fmt::Display for PlaybackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaybackError::Api(e) => write!(f, "{}", e),
            PlaybackError::MissingTarget => write!(f, "No target_playlist"),
            PlaybackError::NoSuchPlaylist(name) => write!(f, "No such playlist '{}'", name),
            PlaybackError::NoSourcePlaylist => {
                write!(f, "Current track is not playing from a playlist")
            }
        }
    }
}

impl std::error::Error for PlaybackError {}

impl From<ApiError> for PlaybackError {
    fn from(err: ApiError) -> Self {
        PlaybackError::Api(err)
    }
}

/// Applies one control action to the currently playing track.
///
/// Returns the human-readable outcome message on success. "Nothing is
/// playing" is a normal outcome, not an error, and short-circuits before
/// any mutation is issued.
///
/// For `move` and `delete` the source playlist is resolved before any
/// mutation happens, so a missing playlist context never leaves the track
/// half-moved.
pub async fn apply_action(
    client: &SpotifyClient,
    action: TrackAction,
    target_playlist: Option<String>,
) -> Result<String, PlaybackError> {
    let playing = client.get_current_track().await?;

    let Some(track) = playing.item else {
        return Ok("Nothing is playing".to_string());
    };

    let source_id = playing
        .context
        .filter(|c| c.context_type == "playlist")
        .map(|c| uri_to_id(&c.uri).to_string());

    match action {
        TrackAction::Delete => {
            let source = source_id.ok_or(PlaybackError::NoSourcePlaylist)?;
            client.remove_track(&source, &track.uri).await?;
            Ok(format!("\"{}\" deleted from current playlist", track.name))
        }
        TrackAction::Add | TrackAction::Move => {
            let target_name = target_playlist.ok_or(PlaybackError::MissingTarget)?;

            // Resolve the source up front so a move never adds without
            // being able to remove.
            let source_id = if action == TrackAction::Move {
                Some(source_id.ok_or(PlaybackError::NoSourcePlaylist)?)
            } else {
                None
            };

            let playlists = client.get_playlist_refs().await?;
            let target = find_unique_playlist(&playlists, &target_name)
                .ok_or_else(|| PlaybackError::NoSuchPlaylist(target_name.clone()))?;

            client
                .add_track(uri_to_id(&target.uri), &track.uri)
                .await?;

            match source_id {
                Some(source) => {
                    client.remove_track(&source, &track.uri).await?;
                    Ok(format!("\"{}\" moved to \"{}\"", track.name, target.name))
                }
                None => Ok(format!("\"{}\" added to \"{}\"", track.name, target.name)),
            }
        }
    }
}

/// Extracts the bare id from a Spotify URI like `spotify:playlist:abc123`.
pub fn uri_to_id(uri: &str) -> &str {
    uri.rsplit(':').next().unwrap_or(uri)
}

/// Finds the playlist whose name matches case-insensitively.
///
/// Returns `None` when zero or more than one playlist matches; an ambiguous
/// name must never pick a winner silently.
pub fn find_unique_playlist<'a>(
    playlists: &'a [PlaylistRef],
    name: &str,
) -> Option<&'a PlaylistRef> {
    let wanted = name.to_lowercase();
    let mut matches = playlists
        .iter()
        .filter(|p| p.name.to_lowercase() == wanted);

    let first = matches.next()?;
    if matches.next().is_some() {
        return None;
    }
    Some(first)
}
