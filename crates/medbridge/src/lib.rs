//! MedBridge connects internationally trained physicians with Canadian
//! hospitals. The crate carries two deterministic engines — credential
//! mapping onto the Canadian licensing pathway and requirement-overlap job
//! matching — plus the intake, persistence, and HTTP plumbing that the API
//! service composes around them.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
