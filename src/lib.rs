//! Multilingual landing page for online travel booking.
//!
//! The `i18n` module resolves a language into a complete [`i18n::DisplayRecord`];
//! `render` lays it out as HTML and `server` exposes it over HTTP.

pub mod config;
pub mod i18n;
pub mod render;
pub mod server;
