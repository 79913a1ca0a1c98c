//! Step callbacks for StepWizard
//!
//! The step currently on screen can leave a one-shot [`StepHandler`] in the
//! [`StepCallbackRegistry`]. It runs when navigation moves forward past that step.

mod error;
pub use error::HandlerError;

mod handler;
pub use handler::StepHandler;

mod registry;
pub use registry::StepCallbackRegistry;
