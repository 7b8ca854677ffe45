//! ColorChef backend service.
//!
//! Serves the ColorChef API behind host validation, CORS and
//! trailing-slash handling driven by [`config::Settings`].

pub mod config;
pub mod cors;
pub mod error;
pub mod hosts;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;
