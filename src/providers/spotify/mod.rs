//! Spotify Web API integration
//!
//! Primary provider: issues the bearer token, runs the track search and
//! supplies recommendations for the top result.
//!
//! API docs: https://developer.spotify.com/documentation/web-api

pub mod dto;
mod adapter;
mod client;

pub use client::{DEFAULT_ACCOUNTS_URL, DEFAULT_API_URL, SpotifyClient};
