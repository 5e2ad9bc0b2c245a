//! State Management
//!
//! Global application state and shared domain types.

pub mod global;

pub use global::{provide_app_state, AppState, Category, EnvironmentalRecord, RecordForm, SummaryEntry, Tab};
