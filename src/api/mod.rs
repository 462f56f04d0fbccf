//! HTTP API module for the compliance engine.
//!
//! This module exposes the validation engine over HTTP: `POST /check` takes
//! the global and month documents of a timesheet and returns the verdict
//! with every violation, rendered in the requested language.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CheckRequest, EntryRequest, GlobalDocument, MonthDocument};
pub use response::{ApiError, ApiErrorResponse, CheckResponse, ViolationResponse};
pub use state::AppState;
