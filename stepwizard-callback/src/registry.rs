use tracing::{event, Level};
use crate::{HandlerError, StepHandler};

/// Holds at most one pending [`StepHandler`]
///
/// Registering replaces whatever was pending, fired or not. The handler is
/// only consumed by forward motion; backward and no-op moves leave it in place.
///
/// # Examples
/// ```
/// # use stepwizard_callback::{StepCallbackRegistry, StepHandler};
/// let mut registry = StepCallbackRegistry::new();
/// registry.register(StepHandler::new(|| println!("leaving step")));
///
/// // going back keeps the handler around
/// assert_eq!(registry.consume_if_forward(false), Ok(false));
/// assert!(registry.is_pending());
///
/// // going forward runs it once
/// assert_eq!(registry.consume_if_forward(true), Ok(true));
/// assert!(!registry.is_pending());
/// ```
#[derive(Debug, Default)]
pub struct StepCallbackRegistry {
  pending: Option<StepHandler>,
}

impl StepCallbackRegistry {
  pub fn new() -> Self {
    Self::default()
  }

  /// Store `handler`, discarding any handler that never fired
  pub fn register(&mut self, handler: StepHandler) {
    let replaced = self.pending.replace(handler).is_some();
    event!(Level::TRACE, replaced, "step handler registered");
  }

  pub fn is_pending(&self) -> bool {
    self.pending.is_some()
  }

  pub fn clear(&mut self) {
    self.pending = None;
  }

  /// Run and clear the pending handler when `is_forward` is set.
  ///
  /// Returns whether a handler ran. A handler that fails stays pending and
  /// its error is returned.
  pub fn consume_if_forward(&mut self, is_forward: bool) -> Result<bool, HandlerError> {
    if !is_forward {
      return Ok(false);
    }
    let handler = match self.pending.as_mut() {
      Some(handler) => handler,
      None => return Ok(false),
    };
    if let Err(err) = handler.call() {
      event!(Level::WARN, error = %err, "step handler failed, keeping it pending");
      return Err(err);
    }
    self.pending = None;
    Ok(true)
  }
}
