use crate::HandlerError;

type HandlerFn = dyn FnMut() -> Result<(), HandlerError> + Send;

/// Closure run when the user advances past the step that registered it.
pub struct StepHandler {
  cb: Box<HandlerFn>,
}

impl std::fmt::Debug for StepHandler {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "StepHandler")
  }
}

impl StepHandler {
  /// Wrap a closure that cannot fail
  pub fn new<F>(mut cb: F) -> Self
      where F: FnMut() + Send + 'static
  {
    StepHandler {
      cb: Box::new(move || {
        cb();
        Ok(())
      }),
    }
  }

  /// Wrap a closure that can block navigation by returning an error
  pub fn fallible<F>(cb: F) -> Self
      where F: FnMut() -> Result<(), HandlerError> + Send + 'static
  {
    StepHandler { cb: Box::new(cb) }
  }

  pub fn call(&mut self) -> Result<(), HandlerError> {
    (self.cb)()
  }
}

#[cfg(test)]
mod tests {
  use stepwizard_test_util::CallCounter;
  use crate::HandlerError;
  use super::StepHandler;

  #[test]
  fn basic_callback() {
    let counter = CallCounter::new();
    let hits = counter.clone();
    let mut handler = StepHandler::new(move || hits.hit());

    assert_eq!(handler.call(), Ok(()));
    assert_eq!(handler.call(), Ok(()));
    assert_eq!(counter.count(), 2);
  }

  #[test]
  fn fallible_callback() {
    let mut handler = StepHandler::fallible(|| Err(HandlerError::Rejected("missing name".to_owned())));
    assert_eq!(handler.call(), Err(HandlerError::Rejected("missing name".to_owned())));
  }
}
