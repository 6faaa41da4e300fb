//! YouTube Data API integration
//!
//! Secondary provider: finds the music video for a track and its view count.

pub mod dto;
mod adapter;
mod client;

pub use client::{DEFAULT_API_URL, YouTubeClient};
