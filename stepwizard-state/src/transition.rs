/// The move made by a single navigation call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize))]
pub struct Transition {
  pub from: usize,
  pub to: usize,
}

impl Transition {
  pub fn new(from: usize, to: usize) -> Self {
    Transition { from, to }
  }

  /// Only a strictly increasing index counts as forward motion
  pub fn is_forward(&self) -> bool {
    self.to > self.from
  }

  pub fn is_backward(&self) -> bool {
    self.to < self.from
  }

  pub fn is_noop(&self) -> bool {
    self.to == self.from
  }
}

#[cfg(test)]
mod tests {
  use super::Transition;

  #[test]
  fn direction() {
    assert!(Transition::new(0, 1).is_forward());
    assert!(Transition::new(0, 2).is_forward());
    assert!(Transition::new(2, 0).is_backward());

    let same = Transition::new(1, 1);
    assert!(same.is_noop());
    assert!(!same.is_forward());
    assert!(!same.is_backward());
  }
}
