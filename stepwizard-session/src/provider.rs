use crate::{Error, Wizard, WizardConfig};

/// Owns the steps of a wizard and the [`Wizard`] that navigates them.
///
/// The number of steps is taken from `children` once, when the provider is
/// built, and never changes afterwards. Rendering is left to the caller, who
/// asks for [`active_child`](WizardProvider::active_child) whenever the
/// active step changes.
///
/// # Examples
/// ```
/// # use stepwizard_session::{WizardProvider, WizardConfig};
/// let mut provider = WizardProvider::new(vec!["name", "email", "done"], &WizardConfig::default()).unwrap();
/// assert_eq!(*provider.active_child(), "name");
///
/// provider.wizard_mut().next_step(None).unwrap();
/// assert_eq!(*provider.active_child(), "email");
/// ```
#[derive(Debug)]
pub struct WizardProvider<T> {
  children: Vec<T>,
  wizard: Wizard,
}

impl<T> WizardProvider<T> {
  pub fn new(children: Vec<T>, config: &WizardConfig) -> Result<Self, Error> {
    let wizard = Wizard::with_config(children.len(), config)?;
    Ok(WizardProvider { children, wizard })
  }

  /// Build a provider with the default config from anything iterable
  pub fn from_children<I>(children: I) -> Result<Self, Error>
      where I: IntoIterator<Item = T>
  {
    Self::new(children.into_iter().collect(), &WizardConfig::default())
  }

  pub fn wizard(&self) -> &Wizard {
    &self.wizard
  }

  pub fn wizard_mut(&mut self) -> &mut Wizard {
    &mut self.wizard
  }

  /// The step to render for the current active index
  pub fn active_child(&self) -> &T {
    // the wizard was sized from `children` so the index is always valid
    &self.children[self.wizard.active_step()]
  }

  pub fn child(&self, index: usize) -> Option<&T> {
    self.children.get(index)
  }

  pub fn children(&self) -> &[T] {
    &self.children
  }

  pub fn into_children(self) -> Vec<T> {
    self.children
  }
}

#[cfg(test)]
mod tests {
  use stepwizard_base::IndexError;
  use crate::{Error, WizardConfig};
  use super::WizardProvider;

  #[test]
  fn step_count_from_children() {
    let provider = WizardProvider::from_children(vec!['a', 'b', 'c']).unwrap();
    assert_eq!(provider.wizard().step_count(), 3);
    assert_eq!(provider.children(), &['a', 'b', 'c']);
    assert_eq!(provider.child(3), None);
  }

  #[test]
  fn no_children() {
    let result = WizardProvider::<u8>::from_children(vec![]);
    assert_eq!(result.unwrap_err(), Error::Index(IndexError::NoSteps));
  }

  #[test]
  fn start_index() {
    let config = WizardConfig::default().with_start_index(1);
    let provider = WizardProvider::new(vec!["one", "two"], &config).unwrap();
    assert_eq!(*provider.active_child(), "two");
    assert!(provider.wizard().is_last_step());
  }

  #[test]
  fn active_child_follows_navigation() {
    let mut provider = WizardProvider::from_children(1..=3).unwrap();
    provider.wizard_mut().next_step(Some(2)).unwrap();
    assert_eq!(*provider.active_child(), 3);
    provider.wizard_mut().previous_step(None).unwrap();
    assert_eq!(*provider.active_child(), 2);
    assert_eq!(provider.into_children(), vec![1, 2, 3]);
  }
}
