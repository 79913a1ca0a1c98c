//! Primary layer for driving a wizard in StepWizard
//!
//! [`Wizard`] is the accessor handed to consumers. [`WizardProvider`] owns the
//! steps themselves and builds the `Wizard` from them.

mod wizard;
pub use wizard::{Wizard, WizardId, WizardSnapshot};

mod config;
pub use config::WizardConfig;

mod provider;
pub use provider::WizardProvider;

mod errors;
pub use errors::Error;
