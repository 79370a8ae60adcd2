//! # CLI Module
//!
//! This module provides the command-line interface layer for spotivault. It
//! implements all user-facing commands and coordinates between the Spotify
//! client, the snapshot pipeline and the control server.
//!
//! ## Commands
//!
//! ### Archival
//!
//! - [`pull`] - Performs one full snapshot-and-upload cycle. Parameterless
//!   and suitable for periodic external scheduling (cron, systemd timers).
//!
//! ### Control Server
//!
//! - [`serve`] - Runs the HTTP control server exposing `/move`, `/add`,
//!   `/del` and `/health` on the configured address.
//!
//! ### Queries
//!
//! - [`playlists`] - Lists the account's playlists as a table, resolving
//!   them through the same paginated listing the control path uses.
//!
//! ## Data Flow
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Snapshot / Playback Layer
//!     ↓
//! Spotify Client (retry, pagination)
//!     ↓
//! Network Layer (HTTP Requests)
//! ```
//!
//! ## Error Handling Philosophy
//!
//! CLI commands present failures with the crate's output macros: fatal
//! conditions (missing credentials, a rejected token exchange, a fatal API
//! status) terminate via `error!`, everything recoverable is reported via
//! `warning!` and the command carries on where it can.
//!
//! ## Dependencies
//!
//! This module depends on several core application components:
//! - [`crate::spotify`] - Spotify API integration and authentication
//! - [`crate::snapshot`] - Snapshot assembly and upload
//! - [`crate::server`] - Control server wiring
//! - [`crate::types`] - Data structures and type definitions

mod playlists;
mod pull;
mod serve;

pub use playlists::playlists;
pub use pull::pull;
pub use serve::serve;
