//! HTTP server module.
//!
//! An axum-based REST surface over the coordinate pipeline and its
//! collaborators: the static catalog, the telescope-state singleton, and the
//! weather proxy. Handlers parse and validate requests, delegate to the
//! library modules, and serialize responses; no computation lives here.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
