//! Cached-response medical language API for Nigerian languages.
//!
//! Matches free-text complaints against a pre-generated corpus of annotated
//! cases (Yoruba, Igbo, Hausa, English) and serves the results over HTTP.

pub mod analysis;
pub mod api;
pub mod config;
pub mod corpus;
pub mod models;
