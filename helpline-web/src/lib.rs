//! Helpline Web - ticket intake and dashboard server
//!
//! Serves the intake form and dashboard pages plus the JSON ticket API.
//! Pages are server-rendered from the component helpers in `components`.

pub mod components;
pub mod handlers;
pub mod pages;
pub mod server;

// Re-export main types
pub use server::{AppState, router, run_server};
