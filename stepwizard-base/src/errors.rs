/// Errors raised while validating a step index against the number of steps
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize))]
pub enum IndexError {
  /// An explicit step index was outside `[0, step_count)`
  OutOfRange { index: usize, step_count: usize },

  /// A planned move no longer starts from the active step
  StaleTransition { from: usize, active_step: usize },

  /// A wizard needs at least one step
  NoSteps,
}

impl std::error::Error for IndexError {}

impl std::fmt::Display for IndexError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      IndexError::OutOfRange { index, step_count } => {
        write!(f, "step index {} is out of range for {} steps", index, step_count)
      }
      IndexError::StaleTransition { from, active_step } => {
        write!(f, "transition from step {} is stale, active step is {}", from, active_step)
      }
      IndexError::NoSteps => write!(f, "a wizard needs at least one step"),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::IndexError;

  #[test]
  fn display() {
    let err = IndexError::OutOfRange { index: 5, step_count: 3 };
    assert_eq!(err.to_string(), "step index 5 is out of range for 3 steps");
    let err = IndexError::StaleTransition { from: 0, active_step: 1 };
    assert_eq!(err.to_string(), "transition from step 0 is stale, active step is 1");
    assert_eq!(IndexError::NoSteps.to_string(), "a wizard needs at least one step");
  }
}
