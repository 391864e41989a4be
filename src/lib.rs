// Library root
// -----------
// The binary (`main.rs`) parses flags and hands them to `ui::run`.
//
// Module responsibilities:
// - `api`: blocking client for the creator registry (CSRF dance, CRUD calls).
// - `channel`: reads a channel's latest uploads through yt-dlp and renders them.
// - `cli`: command-line flag definitions.
// - `config`: registry and yt-dlp settings, read from the environment.
// - `error`: error kinds callers can match on.
// - `models`: creator and video records.
// - `ui`: runs the requested operations in a fixed order.
pub mod api;
pub mod channel;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod ui;
