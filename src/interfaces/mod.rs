//! Boundary formats: the JSON listing API and CSV seed files.

pub mod api;
pub mod csv;
