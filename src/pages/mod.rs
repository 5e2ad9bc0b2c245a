//! Pages
//!
//! Top-level components for each display tab.

pub mod add_data;
pub mod dashboard;
pub mod history;

pub use add_data::AddData;
pub use dashboard::Dashboard;
pub use history::History;
