//! Base components for StepWizard
//!
//! Holds the pieces shared by every other crate: the index validation error
//! and the macro used to generate opaque IDs.

mod errors;
pub use errors::IndexError;

pub mod id;
