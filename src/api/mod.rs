//! API Client
//!
//! HTTP communication with the EcoTrack backend.

pub mod client;

pub use client::{create_record, fetch_records, fetch_summary, get_api_base};
