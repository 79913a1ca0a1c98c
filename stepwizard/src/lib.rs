//! Keep track of the active step of a multi-step wizard.
//!
//! Build a [`WizardProvider`] from your steps (or a bare [`Wizard`] from a
//! step count), then navigate with [`Wizard::next_step`],
//! [`Wizard::previous_step`] and [`Wizard::go_to_step`]. The step on screen
//! can register a one-shot handler with [`Wizard::handle_step`] that runs
//! when the user moves forward past it.

// include commonly used types
pub mod prelude {
  pub use stepwizard_session::{Wizard, WizardConfig, WizardProvider};
  pub use stepwizard_state::Transition;
  pub use stepwizard_callback::HandlerError;
}

pub mod state {
  pub use stepwizard_state::{WizardState, Transition};
  pub use stepwizard_base::IndexError;
}

pub mod callback {
  pub use stepwizard_callback::{StepCallbackRegistry, StepHandler, HandlerError};
}

pub use stepwizard_session::{Wizard, WizardId, WizardConfig, WizardProvider, WizardSnapshot};
pub use stepwizard_session::Error;
