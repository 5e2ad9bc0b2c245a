//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod category_card;
pub mod charts;
pub mod entry_form;

pub use category_card::CategoryCard;
pub use charts::{BarChart, PieChart};
pub use entry_form::EntryForm;
