/// Construction options for a [`Wizard`](crate::Wizard)
///
/// With the `serde-support` feature missing fields fall back to their defaults,
/// so `{}` is a valid config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct WizardConfig {
  /// Step shown first. Clamped to the last step when too large.
  pub start_index: usize,
}

impl WizardConfig {
  pub fn with_start_index(mut self, start_index: usize) -> Self {
    self.start_index = start_index;
    self
  }
}
