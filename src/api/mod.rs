//! HTTP API module for the roster scheduler.
//!
//! This module provides the REST API endpoints for generating schedules,
//! cycling a single day's assignment, and exporting a schedule as a
//! calendar document.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CycleRequest, ExportRequest, GenerateRequest, PersonRequest};
pub use response::ApiError;
pub use state::AppState;
