//! Remote answering service client.
//!
//! Issues `GET <base-url>/chat?query=<percent-encoded>` and expects a JSON
//! object with a string `answer` field. One attempt per query.

mod api;
mod client;
mod config;


pub use client::RemoteResolver;
pub use config::RemoteConfig;
