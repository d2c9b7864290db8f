//! Fuzzy-inference credit eligibility scoring.
//!
//! The inference core under [`workflows::eligibility`] is pure and synchronous; the
//! service, router and telemetry modules wrap it for the HTTP service and CLI.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
