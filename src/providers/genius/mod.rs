//! Genius API integration
//!
//! Tertiary provider: supplies a short text excerpt for the top result.

pub mod dto;
mod adapter;
mod client;

pub use client::{DEFAULT_API_URL, GeniusClient};
