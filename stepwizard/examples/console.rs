// StepWizard example that walks through the following steps on the terminal:
// 1 - name
// 2 - email
// 3 - confirm
//
// Commands: `n` next, `p` previous, `g <index>` go to step, `q` quit.
// Run with RUST_LOG=debug to see the navigation events.

use std::io::{self, BufRead, Write};
use std::sync::{Arc, Mutex};
use tracing::{event, Level};

use stepwizard::prelude::*;
use stepwizard::Error;

struct Panel {
  title: &'static str,
  prompt: &'static str,
}

static PANELS: [Panel; 3] = [
  Panel { title: "name", prompt: "Type your name, then `n`" },
  Panel { title: "email", prompt: "Type your email, then `n`" },
  Panel { title: "confirm", prompt: "All done, `q` to quit" },
];

// the last free-text line typed, shared with the step handlers
type Draft = Arc<Mutex<Option<String>>>;

fn register_handler(provider: &mut WizardProvider<&'static Panel>, draft: &Draft) {
  let panel = *provider.active_child();
  if panel.title == "confirm" {
    return;
  }

  let draft = draft.clone();
  provider.wizard_mut().try_handle_step(move || {
    let mut draft = draft.lock().map_err(|_e| HandlerError::Other)?;
    match draft.take() {
      Some(value) => {
        println!("saved {} = {}", panel.title, value);
        Ok(())
      }
      None => Err(HandlerError::Rejected(format!("{} is required", panel.title))),
    }
  });
}

fn show(provider: &WizardProvider<&'static Panel>) {
  let wizard = provider.wizard();
  let panel = provider.active_child();
  println!("[{}/{}] {}: {}", wizard.active_step() + 1, wizard.step_count(), panel.title, panel.prompt);
}

enum Outcome {
  Moved(Transition),
  Input,
  Usage(&'static str),
}

fn run_command(provider: &mut WizardProvider<&'static Panel>, line: &str) -> Result<Outcome, Error> {
  let mut parts = line.split_whitespace();
  let transition = match (parts.next(), parts.next(), parts.next()) {
    (Some("n"), None, _) => provider.wizard_mut().next_step(None)?,
    (Some("p"), None, _) => provider.wizard_mut().previous_step(None)?,
    (Some("g"), index, None) => match index.map(str::parse::<usize>) {
      Some(Ok(index)) => provider.wizard_mut().go_to_step(index)?,
      _ => return Ok(Outcome::Usage("usage: g <index>, e.g. `g 0`")),
    },
    _ => return Ok(Outcome::Input),
  };
  Ok(Outcome::Moved(transition))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
  tracing_subscriber::fmt::init();

  let mut provider = WizardProvider::new(PANELS.iter().collect(), &WizardConfig::default())?;
  provider.wizard_mut().on_step_change(|transition| {
    event!(Level::INFO, from = transition.from, to = transition.to, "step changed");
  });

  let draft: Draft = Arc::new(Mutex::new(None));
  register_handler(&mut provider, &draft);
  show(&provider);

  let stdin = io::stdin();
  for line in stdin.lock().lines() {
    let line = line?;
    let line = line.trim();
    if line == "q" {
      break;
    }

    match run_command(&mut provider, line) {
      Ok(Outcome::Moved(transition)) => {
        if !transition.is_noop() {
          register_handler(&mut provider, &draft);
        }
      }
      Ok(Outcome::Usage(hint)) => println!("{}", hint),
      Ok(Outcome::Input) => {
        // anything that isn't a command is input for the current step
        *draft.lock().map_err(|_e| "draft lock poisoned")? = Some(line.to_owned());
      }
      Err(err) => println!("cannot move: {}", err),
    }
    show(&provider);
    io::stdout().flush()?;
  }

  Ok(())
}

#[cfg(test)]
mod tests {
  use stepwizard::prelude::*;
  use super::{run_command, Outcome, PANELS};

  fn provider() -> WizardProvider<&'static super::Panel> {
    WizardProvider::new(PANELS.iter().collect(), &WizardConfig::default()).unwrap()
  }

  #[test]
  fn malformed_go_to_is_not_input() {
    let mut provider = provider();
    for line in &["g abc", "g", "g -1"] {
      assert!(matches!(run_command(&mut provider, line), Ok(Outcome::Usage(_))), "{}", line);
    }
    assert_eq!(provider.wizard().active_step(), 0);
  }

  #[test]
  fn go_to_and_free_text() {
    let mut provider = provider();
    assert!(matches!(run_command(&mut provider, "g 2"), Ok(Outcome::Moved(_))));
    assert_eq!(provider.active_child().title, "confirm");
    assert!(matches!(run_command(&mut provider, "ada lovelace"), Ok(Outcome::Input)));
  }
}
