//! Black-box contract suite for the reqres.in REST API.
//!
//! The crate has three layers:
//! - [`models`]: request and response bodies.
//! - [`RequestSpec`] / [`ResponseSpec`]: per-client defaults and the status
//!   and timing checks applied to every response.
//! - [`scenarios`]: the catalog, one independent call per scenario.
//!
//! Scenarios run offline against a fake backend in unit tests and against
//! the real API in `tests/live_catalog.rs` (feature `live-tests`).
#![deny(unsafe_code)]

mod client;
mod config;
mod error;
mod http;

pub mod assertions;
pub mod logging;
pub mod models;
pub mod scenarios;
pub mod spec;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::{AuthOutcome, DefaultReqresClient, ReqresClient};

// Configuration
pub use config::{EnvProvider, ReqresClientConfig, SystemEnv};

// Errors
pub use error::{ApiError, ApiResult};

// Transport
pub use http::{ApiRequest, ApiResponse, HttpBackend, HttpRequest, ReqwestBackend};

// Specifications
pub use spec::{LogDetail, RequestSpec, ResponseSpec};
