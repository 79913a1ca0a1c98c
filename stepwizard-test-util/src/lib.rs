use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

pub fn test_id_val() -> u32 {
  static COUNT: AtomicU32 = AtomicU32::new(0);

  // add extra bits to make it easy to identiy test IDs
  (u16::MAX as u32) << 16 | COUNT.fetch_add(1, Ordering::SeqCst)
}

#[macro_export]
macro_rules! test_id {
  ($id_type:ident) => {
    $id_type::new(stepwizard_test_util::test_id_val())
  }
}

/// Counts how many times a handler ran. Clones share the same count so one
/// can be moved into the handler while the test keeps the other.
#[derive(Debug, Clone, Default)]
pub struct CallCounter(Arc<AtomicU32>);

impl CallCounter {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn hit(&self) {
    self.0.fetch_add(1, Ordering::SeqCst);
  }

  pub fn count(&self) -> u32 {
    self.0.load(Ordering::SeqCst)
  }
}

#[cfg(test)]
mod tests {
  use super::CallCounter;

  #[test]
  fn shared_count() {
    let counter = CallCounter::new();
    let moved = counter.clone();
    moved.hit();
    moved.hit();
    assert_eq!(counter.count(), 2);
  }
}
