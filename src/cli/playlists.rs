use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    error,
    spotify::SpotifyClient,
    types::PlaylistTableRow,
    warning,
};

/// Lists the account's playlists as a table, optionally filtered by name.
pub async fn playlists(search: Option<String>) {
    let client = match SpotifyClient::connect().await {
        Ok(client) => client,
        Err(e) => error!("Failed to authenticate with Spotify: {}", e),
    };

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching playlists...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let refs = client.get_playlist_refs().await;
    pb.finish_and_clear();

    match refs {
        Ok(mut playlists) => {
            playlists.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));

            if let Some(term) = search {
                let term = term.to_lowercase();
                playlists.retain(|p| p.name.to_lowercase().contains(&term));
            }

            let table_rows: Vec<PlaylistTableRow> = playlists
                .into_iter()
                .map(|p| PlaylistTableRow {
                    name: p.name,
                    id: p.id,
                    owner: p.owner.id,
                })
                .collect();

            let table = Table::new(table_rows);
            println!("{}", table);
        }
        Err(e) => warning!("Failed to load playlists. Err: {}", e),
    }
}
