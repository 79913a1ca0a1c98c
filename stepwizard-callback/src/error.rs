/// Returned by a fallible [`StepHandler`](crate::StepHandler) to stop navigation
#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize))]
pub enum HandlerError {
  Rejected(String),
  Other,
}

impl std::error::Error for HandlerError {}

impl std::fmt::Display for HandlerError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      HandlerError::Rejected(reason) => write!(f, "step handler rejected: {}", reason),
      HandlerError::Other => write!(f, "step handler failed"),
    }
  }
}
