//! Guided intake wizard and submission log for an invitation-only event.
//!
//! The [`intake`] module holds the client-facing pieces: the fixed step
//! registry, the validation engine, the wizard state machine, and the HTTP
//! submission client the wizard drives on its terminal step. The
//! [`submission`] module holds the server boundary: the shared-document
//! submission log and the blob-store gateway it writes through.

pub mod config;
pub mod error;
pub mod intake;
pub mod submission;
pub mod telemetry;
