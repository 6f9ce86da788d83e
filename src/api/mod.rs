//! API Access
//!
//! HTTP client for the bot control panel backend.

pub mod client;

pub use client::fetch_indicator_frames;
