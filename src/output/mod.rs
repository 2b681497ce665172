//! Rendering of reports: exact terminal lines and JSON.

pub mod json;
pub mod terminal;
