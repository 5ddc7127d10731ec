//! lunchly-server: restaurant reservation manager
//!
//! Server-rendered pages for listing, searching and editing customers,
//! booking their reservations, and ranking the busiest regulars.

pub mod db;
pub mod error;
pub mod http;
pub mod models;

pub use db::{MemoryStore, PgStore, Store};
pub use error::{Error, Result};
pub use http::{build_router, run_server, AppState, ServerConfig};
