//! HTTP API server for lattice.
//!
//! This crate exposes the dependency graph engine over a small REST
//! surface, consumed by the planning tool's web UI and desktop shell:
//!
//! - `GET /health` - liveness check
//! - `GET /api/dependencies` - the full dependency graph (nodes, edges,
//!   cycle verdict, critical path)
//! - `GET /api/dependencies/{filename}` - the dependency summary for one
//!   plan (`400` for a malformed filename, `404` for an unknown plan)
//!
//! The graph is recomputed from the plans directory on every request, so a
//! response always reflects the on-disk state at the moment it was served.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod handlers;
pub mod routes;

pub use error::ApiError;
pub use handlers::{ServerState, SharedState};
pub use routes::create_router;
