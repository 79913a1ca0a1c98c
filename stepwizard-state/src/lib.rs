//! Step state for StepWizard
//!
//! Tracks which of a fixed number of steps is active and how navigation moves
//! between them. See [`WizardState`].

mod state;
pub use state::WizardState;

mod transition;
pub use transition::Transition;
