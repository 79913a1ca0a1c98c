use std::sync::atomic::{AtomicU32, Ordering};
use tracing::{event, Level};
use stepwizard_base::generate_id_type;
use stepwizard_state::{Transition, WizardState};
use stepwizard_callback::{HandlerError, StepCallbackRegistry, StepHandler};
use crate::{Error, WizardConfig};

generate_id_type!(WizardId);

impl WizardId {
  fn next() -> Self {
    static NEXT_ID: AtomicU32 = AtomicU32::new(0);
    WizardId::new(NEXT_ID.fetch_add(1, Ordering::SeqCst))
  }
}

type StepChangeFn = dyn FnMut(&Transition) + Send;

/// Accessor for a single wizard instance.
///
///  A wizard is made of two parts that live and die together:
///  1. The [`WizardState`] that knows which step is active
///  2. The [`StepCallbackRegistry`] where the active step leaves its handler
///
/// Forward navigation runs the pending handler before the active step changes.
/// If the handler fails, nothing moves and the handler stays pending.
///
/// # Examples
/// ```
/// # use std::sync::Arc;
/// # use std::sync::atomic::{AtomicBool, Ordering};
/// # use stepwizard_session::Wizard;
/// let mut wizard = Wizard::new(3).unwrap();
///
/// // the step on screen asks to be told when the user moves on
/// let saved = Arc::new(AtomicBool::new(false));
/// let saved_flag = saved.clone();
/// wizard.handle_step(move || saved_flag.store(true, Ordering::SeqCst));
///
/// wizard.next_step(None).unwrap();
/// assert!(saved.load(Ordering::SeqCst));
/// assert_eq!(wizard.active_step(), 1);
/// ```
pub struct Wizard {
  id: WizardId,
  state: WizardState,
  handlers: StepCallbackRegistry,
  on_step_change: Option<Box<StepChangeFn>>,
}

impl std::fmt::Debug for Wizard {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Wizard")
      .field("id", &self.id)
      .field("state", &self.state)
      .field("handlers", &self.handlers)
      .finish()
  }
}

/// Read-only view of a [`Wizard`] at one point in time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize))]
pub struct WizardSnapshot {
  pub active_step: usize,
  pub step_count: usize,
  pub is_first_step: bool,
  pub is_last_step: bool,
  pub has_pending_handler: bool,
}

impl Wizard {
  /// Create a `Wizard` for `step_count` steps starting at the first one
  pub fn new(step_count: usize) -> Result<Self, Error> {
    Self::with_config(step_count, &WizardConfig::default())
  }

  pub fn with_config(step_count: usize, config: &WizardConfig) -> Result<Self, Error> {
    Self::with_id(WizardId::next(), step_count, config)
  }

  pub fn with_id(id: WizardId, step_count: usize, config: &WizardConfig) -> Result<Self, Error> {
    let state = WizardState::new(step_count, config.start_index)?;
    event!(Level::DEBUG, wizard_id = %id, step_count, active_step = state.active_step(), "wizard created");
    Ok(Wizard {
      id,
      state,
      handlers: StepCallbackRegistry::new(),
      on_step_change: None,
    })
  }

  pub fn id(&self) -> &WizardId {
    &self.id
  }

  pub fn active_step(&self) -> usize {
    self.state.active_step()
  }

  pub fn step_count(&self) -> usize {
    self.state.step_count()
  }

  pub fn is_first_step(&self) -> bool {
    self.state.is_first_step()
  }

  pub fn is_last_step(&self) -> bool {
    self.state.is_last_step()
  }

  pub fn has_pending_handler(&self) -> bool {
    self.handlers.is_pending()
  }

  pub fn snapshot(&self) -> WizardSnapshot {
    WizardSnapshot {
      active_step: self.active_step(),
      step_count: self.step_count(),
      is_first_step: self.is_first_step(),
      is_last_step: self.is_last_step(),
      has_pending_handler: self.has_pending_handler(),
    }
  }

  /// Register the handler for the active step. Replaces any unfired handler.
  pub fn handle_step<F>(&mut self, cb: F)
      where F: FnMut() + Send + 'static
  {
    self.handlers.register(StepHandler::new(cb));
  }

  /// Like [`handle_step`](Wizard::handle_step) but the handler can block the advance
  pub fn try_handle_step<F>(&mut self, cb: F)
      where F: FnMut() -> Result<(), HandlerError> + Send + 'static
  {
    self.handlers.register(StepHandler::fallible(cb));
  }

  /// Called after every navigation that changed the active step.
  ///
  /// Only one observer is kept; setting a new one drops the old one.
  pub fn on_step_change<F>(&mut self, cb: F)
      where F: FnMut(&Transition) + Send + 'static
  {
    self.on_step_change = Some(Box::new(cb));
  }

  /// Advance one step, or jump to `step_index` when given.
  ///
  /// The pending handler runs only when this moves strictly forward. Jumping
  /// to the active step or behind it leaves the handler pending.
  pub fn next_step(&mut self, step_index: Option<usize>) -> Result<Transition, Error> {
    let transition = self.state.plan_next(step_index)?;
    self.commit(transition, transition.is_forward())
  }

  /// Go back one step, or jump to `step_index` when given. Never runs the handler.
  pub fn previous_step(&mut self, step_index: Option<usize>) -> Result<Transition, Error> {
    let transition = self.state.plan_previous(step_index)?;
    self.commit(transition, false)
  }

  /// Jump to `step_index`, running the pending handler if that is forward
  pub fn go_to_step(&mut self, step_index: usize) -> Result<Transition, Error> {
    let transition = self.state.plan_go_to(step_index)?;
    self.commit(transition, transition.is_forward())
  }

  fn commit(&mut self, transition: Transition, fire_handler: bool) -> Result<Transition, Error> {
    // the handler has to see the step it was registered on
    let handler_fired = self.handlers.consume_if_forward(fire_handler)?;
    self.state.apply(&transition)?;

    event!(Level::DEBUG,
      wizard_id = %self.id,
      from = transition.from,
      to = transition.to,
      handler_fired);

    if !transition.is_noop() {
      if let Some(cb) = self.on_step_change.as_mut() {
        cb(&transition);
      }
    }
    Ok(transition)
  }
}
