//! Assessment portal HTTP client
//!
//! Typed reqwest clients for the report service API, shared by the
//! browser frontend and native tooling/tests.

pub mod client;
pub mod types;

pub use client::{
    AuthenticatedPortalClient, TypedClientBuilder, error::ClientError,
};
pub use types::{ErrorBody, GeneratedReport, GenerateReportResponse, ReportRef};
