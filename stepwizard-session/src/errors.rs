use stepwizard_base::IndexError;
use stepwizard_callback::HandlerError;

#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize))]
pub enum Error {
  // navigation errors
  Index(IndexError),

  // the pending step handler refused to let the wizard advance
  Handler(HandlerError),
}

impl std::error::Error for Error {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Error::Index(err) => Some(err),
      Error::Handler(err) => Some(err),
    }
  }
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Error::Index(err) => write!(f, "{}", err),
      Error::Handler(err) => write!(f, "{}", err),
    }
  }
}

macro_rules! from_error {
  ($variant:ident, $error_type:ident) => {
    impl From<$error_type> for Error {
      fn from(err: $error_type) -> Self {
        Error::$variant(err)
      }
    }
  };
}

from_error!(Index, IndexError);
from_error!(Handler, HandlerError);
