//! User interface module
//!
//! Terminal rendering with ratatui.

mod app;

pub use app::{shade, App, STATUS_HEIGHT};
