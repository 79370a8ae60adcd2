//! # API Module
//!
//! This module provides the HTTP endpoints for the control server. It
//! implements the playlist control routes and a health check endpoint.
//!
//! ## Endpoints
//!
//! ### Control
//!
//! - [`move_route`] - `POST /move` moves the currently playing track into
//!   the named target playlist (add to target, remove from source)
//! - [`add_route`] - `POST /add` adds the currently playing track to the
//!   named target playlist, leaving the source untouched
//! - [`del_route`] - `POST /del` removes the currently playing track from
//!   its source playlist
//!
//! Each control route expects a JSON body of the shape
//! `{"api_key": "...", "target_playlist": "..."}` where `target_playlist`
//! may be absent for `/del`. Successful actions answer `(message, 200)`,
//! validation failures `(message, 403)`; only a Spotify API failure while
//! executing an already-validated action produces a 500.
//!
//! ### Monitoring
//!
//! - [`health`] - `GET /health` returns application status and version for
//!   monitoring systems.
//!
//! ## Security Considerations
//!
//! The control routes are guarded by a pre-shared key supplied through
//! configuration, never embedded in source. A missing, malformed or
//! mismatched key is rejected before any Spotify call is issued, so an
//! unauthenticated caller can never trigger playback mutations.
//!
//! ## Architecture
//!
//! The module is built using the [Axum](https://docs.rs/axum) web
//! framework. Request bodies are decoded by hand so that malformed JSON is
//! answered with the same fixed 403 message as an invalid key.
//!
//! ## Related Modules
//!
//! - [`crate::playback`] - The move/add/delete action implementations
//! - [`crate::spotify`] - Spotify API integration
//! - [`crate::server`] - Router wiring and listener setup

mod control;
mod health;

pub use control::add_route;
pub use control::del_route;
pub use control::move_route;
pub use health::health;
