//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API used by the
//! archiver and the control surface. It handles authentication, data
//! retrieval, playlist mutation, error handling, and rate limiting, and is
//! the only place in the crate that talks HTTP to Spotify.
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (CLI, Snapshot, Control)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (refresh-token grant)
//!     ├── Client (retry protocol, pagination drain)
//!     ├── Library (playlists, top items, saved items, devices)
//!     └── Player (current track, add/remove on playlists)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Core Modules
//!
//! [`auth`] - Token acquisition via the OAuth 2.0 refresh-token grant. The
//! long-lived refresh token comes from configuration; the exchange happens
//! once per process and the resulting access token lives only in memory.
//!
//! [`client`] - The request/retry/pagination engine. A [`SpotifyClient`]
//! holds the bearer token and a [`RetryPolicy`] and funnels every request
//! through one retry loop:
//!
//! - **429 Too Many Requests**: sleep for the server's `Retry-After` and
//!   resend the identical request, without bound
//! - **200/201**: success, body parsed as JSON
//! - **400/403**: fatal, surfaced as [`ApiError::Fatal`] with the body text
//! - **any other status**: fixed-delay retry with an explicit, configurable
//!   attempt ceiling
//!
//! Pagination follows the standard `{items, next}` shape: `next` cursors
//! are drained to exhaustion before an endpoint's result is considered
//! complete, preserving server delivery order.
//!
//! [`library`] - Read endpoints feeding the snapshot document: playlists
//! (with nested track pagination fully materialized), recently played,
//! devices, top artists/tracks across three time ranges, followed artists,
//! saved albums and saved tracks. Payloads are passed through unexamined as
//! `serde_json::Value`; only playlist references get a typed decode.
//!
//! [`player`] - Playback inspection and the two playlist mutations (add and
//! remove a track) used by the control routes.
//!
//! ## Error Types
//!
//! All fallible operations return [`ApiError`]:
//! - transport failures wrap `reqwest::Error`
//! - fatal API statuses carry the status and response body
//! - an exhausted retry budget reports the last status and attempt count
//! - decode failures wrap `serde_json::Error`
//!
//! ## Thread Safety
//!
//! The client is designed for sequential, single-task use: requests are
//! issued one at a time and the only suspension points are the explicit
//! rate-limit sleeps.

pub mod auth;
pub mod client;
pub mod library;
pub mod player;

pub use client::{ApiError, RetryPolicy, SpotifyClient};
pub use library::{TimeRange, TopKind};
