use stepwizard_base::IndexError;
use crate::Transition;

/// Active step of a wizard with a fixed number of steps
///
/// `active_step` always stays within `[0, step_count)`. Every navigation call
/// returns the [`Transition`] it made, including no-op moves at either end.
///
/// Navigation is split in two so the caller can run work between deciding
/// where to go and actually going there: the `plan_*` functions validate and
/// compute a [`Transition`], [`apply`](WizardState::apply) commits it.
///
/// # Examples
/// ```
/// # use stepwizard_state::WizardState;
/// let mut state = WizardState::new(3, 0).unwrap();
/// assert!(state.is_first_step());
///
/// state.next_step(None).unwrap();
/// assert_eq!(state.active_step(), 1);
///
/// // jump straight to the end
/// state.next_step(Some(2)).unwrap();
/// assert!(state.is_last_step());
///
/// // already at the end so this does nothing
/// let transition = state.next_step(None).unwrap();
/// assert!(transition.is_noop());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardState {
  active_step: usize,
  step_count: usize,
}

impl WizardState {
  /// Create the state for `step_count` steps.
  ///
  /// `start_index` is clamped into the valid range. Fails with
  /// [`IndexError::NoSteps`] when `step_count` is zero.
  pub fn new(step_count: usize, start_index: usize) -> Result<Self, IndexError> {
    if step_count == 0 {
      return Err(IndexError::NoSteps);
    }
    Ok(WizardState {
      active_step: start_index.min(step_count - 1),
      step_count,
    })
  }

  pub fn active_step(&self) -> usize {
    self.active_step
  }

  pub fn step_count(&self) -> usize {
    self.step_count
  }

  pub fn is_first_step(&self) -> bool {
    self.active_step == 0
  }

  pub fn is_last_step(&self) -> bool {
    self.active_step == self.step_count - 1
  }

  fn check_index(&self, step_index: usize) -> Result<usize, IndexError> {
    if step_index >= self.step_count {
      return Err(IndexError::OutOfRange { index: step_index, step_count: self.step_count });
    }
    Ok(step_index)
  }

  /// Where [`next_step`](WizardState::next_step) would go
  pub fn plan_next(&self, step_index: Option<usize>) -> Result<Transition, IndexError> {
    let to = match step_index {
      Some(index) => self.check_index(index)?,
      None if self.is_last_step() => self.active_step,
      None => self.active_step + 1,
    };
    Ok(Transition::new(self.active_step, to))
  }

  /// Where [`previous_step`](WizardState::previous_step) would go
  pub fn plan_previous(&self, step_index: Option<usize>) -> Result<Transition, IndexError> {
    let to = match step_index {
      Some(index) => self.check_index(index)?,
      None if self.is_first_step() => self.active_step,
      None => self.active_step - 1,
    };
    Ok(Transition::new(self.active_step, to))
  }

  /// Where [`go_to_step`](WizardState::go_to_step) would go
  pub fn plan_go_to(&self, step_index: usize) -> Result<Transition, IndexError> {
    let to = self.check_index(step_index)?;
    Ok(Transition::new(self.active_step, to))
  }

  /// Commit a transition produced by one of the `plan_*` functions.
  ///
  /// The transition must start from the current step and land inside the
  /// valid range, otherwise it is rejected and the state is left alone.
  pub fn apply(&mut self, transition: &Transition) -> Result<(), IndexError> {
    self.check_index(transition.from)?;
    self.check_index(transition.to)?;
    if transition.from != self.active_step {
      return Err(IndexError::StaleTransition { from: transition.from, active_step: self.active_step });
    }
    self.active_step = transition.to;
    Ok(())
  }

  /// Advance one step, or jump to `step_index` when given.
  ///
  /// Without an index this is a no-op on the last step. With an index the
  /// jump happens from anywhere, in either direction.
  pub fn next_step(&mut self, step_index: Option<usize>) -> Result<Transition, IndexError> {
    let transition = self.plan_next(step_index)?;
    self.apply(&transition)?;
    Ok(transition)
  }

  /// Go back one step, or jump to `step_index` when given.
  ///
  /// Without an index this is a no-op on the first step.
  pub fn previous_step(&mut self, step_index: Option<usize>) -> Result<Transition, IndexError> {
    let transition = self.plan_previous(step_index)?;
    self.apply(&transition)?;
    Ok(transition)
  }

  pub fn go_to_step(&mut self, step_index: usize) -> Result<Transition, IndexError> {
    let transition = self.plan_go_to(step_index)?;
    self.apply(&transition)?;
    Ok(transition)
  }
}
