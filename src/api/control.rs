use axum::http::StatusCode;

use crate::{
    config, info,
    playback::{self, PlaybackError, TrackAction},
    spotify::SpotifyClient,
    types::ControlRequest,
};

pub async fn move_route(body: String) -> (StatusCode, String) {
    handle(TrackAction::Move, body).await
}

pub async fn add_route(body: String) -> (StatusCode, String) {
    handle(TrackAction::Add, body).await
}

pub async fn del_route(body: String) -> (StatusCode, String) {
    handle(TrackAction::Delete, body).await
}

/// Shared handler behind the three control routes.
///
/// Validation failures become `(message, 403)` responses; only an API
/// failure mid-action yields a 500. The body is decoded by hand so that a
/// missing or malformed JSON body gets the same 403 as a bad key instead
/// of the framework's default rejection.
async fn handle(action: TrackAction, raw_body: String) -> (StatusCode, String) {
    let Ok(request) = serde_json::from_str::<ControlRequest>(&raw_body) else {
        let error = "Invalid api_key (no JSON body)".to_string();
        info!("{}", error);
        return (StatusCode::FORBIDDEN, error);
    };

    if request.api_key != config::control_api_key() {
        let error = "Invalid api_key".to_string();
        info!("{}", error);
        return (StatusCode::FORBIDDEN, error);
    }

    if action != TrackAction::Delete && request.target_playlist.is_none() {
        let error = "No target_playlist".to_string();
        info!("{}", error);
        return (StatusCode::FORBIDDEN, error);
    }

    let client = match SpotifyClient::connect().await {
        Ok(client) => client,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Spotify client unavailable: {}", e),
            );
        }
    };

    match playback::apply_action(&client, action, request.target_playlist).await {
        Ok(message) => {
            info!("{}", message);
            (StatusCode::OK, message)
        }
        Err(PlaybackError::Api(e)) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        Err(rejection) => {
            let message = rejection.to_string();
            info!("{}", message);
            (StatusCode::FORBIDDEN, message)
        }
    }
}
