#![cfg(feature = "serde-support")]

use serde_json::json;
use stepwizard::{Wizard, WizardConfig, WizardProvider};

#[test]
fn config_from_json() {
  let config: WizardConfig = serde_json::from_value(json!({ "start_index": 1 })).unwrap();
  assert_eq!(config, WizardConfig::default().with_start_index(1));

  // missing fields use the defaults
  let config: WizardConfig = serde_json::from_str("{}").unwrap();
  assert_eq!(config, WizardConfig::default());

  let provider = WizardProvider::new(vec!["intro", "details"], &config.with_start_index(1)).unwrap();
  assert_eq!(*provider.active_child(), "details");
}

#[test]
fn snapshot_to_json() {
  let mut wizard = Wizard::new(3).unwrap();
  wizard.next_step(None).unwrap();
  wizard.handle_step(|| ());

  let value = serde_json::to_value(wizard.snapshot()).unwrap();
  assert_eq!(value, json!({
    "active_step": 1,
    "step_count": 3,
    "is_first_step": false,
    "is_last_step": false,
    "has_pending_handler": true,
  }));
}

#[test]
fn error_to_json() {
  let mut wizard = Wizard::new(2).unwrap();
  let err = wizard.go_to_step(4).unwrap_err();
  let value = serde_json::to_value(&err).unwrap();
  assert_eq!(value, json!({ "Index": { "OutOfRange": { "index": 4, "step_count": 2 } } }));
}
