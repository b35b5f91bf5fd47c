//! Application driver
//!
//! One run of the tool: load settings, overlay the command line, pick an
//! action (asking if needed), then either run setup and persist the result,
//! or run the ingest with the settings as they stand for this run.

use crate::config::{keys, Action, Settings, SettingsStore};
use crate::error::Result;
use crate::ingest::{IngestReport, Ingester};
use crate::prompt::Prompter;
use crate::setup::run_setup;
use tracing::{info, warn};

/// Display name of the tool
pub const TOOL_NAME: &str = "Video Tools: The Video Workflow Helper";

/// Project home page
pub const PROJECT_URL: &str = "https://github.com/quicksurf/video-tools";

/// How a run ended
#[derive(Debug)]
pub enum RunOutcome {
    /// Setup ran and the new settings were written
    SetupSaved(Settings),
    /// An ingest ran, or was declined before it started
    Ingested(IngestReport),
    /// The action is not one the tool knows
    UnknownAction(String),
}

/// Print the startup banner
pub fn print_banner(out: &mut dyn Prompter) {
    out.say(TOOL_NAME);
    out.say(&format!("VERSION: {}", crate::VERSION));
    out.say(PROJECT_URL);
    out.say("Distributed Under The GPL Version 2.0 License.");
}

/// Run the tool once with the given command-line tokens
pub fn run<S: AsRef<str>>(
    tokens: &[S],
    store: &SettingsStore,
    prompter: &mut dyn Prompter,
) -> Result<RunOutcome> {
    print_banner(prompter);

    let mut settings = store.load()?;
    settings.apply_args(tokens);

    if settings.check_version() {
        info!("Settings version differs from {}, forcing setup", crate::VERSION);
        prompter.say("Setup file versions don't match!");
    }

    let action = match settings.action() {
        Some(action) => action,
        None => {
            let answer = prompter
                .prompt("Please supply an action (setup/ingest): ")?
                .to_lowercase();
            settings.set(keys::ACTION, answer.as_str());
            Action::parse(&answer)
        }
    };

    let unknown = match action {
        Action::Setup => return setup(&settings, store, prompter),
        Action::Ingest => None,
        Action::Other(name) => Some(name),
    };

    if settings.project().is_none() {
        let project = prompter.prompt("Please supply a project name: ")?;
        settings.set(keys::PROJECT, project);
    }

    prompter.say(&format!("\"context\": {}", settings.to_pretty_json()?));

    let outcome = match unknown {
        None => {
            for key in settings.missing_managed_keys() {
                warn!("Setting '{}' is missing, using the default", key);
                prompter.say(&format!(
                    "Setting '{}' is not configured, using the built-in default (run setup to set it)...",
                    key
                ));
            }
            let config = settings.ingest_config()?;
            let report = Ingester::new(config, prompter).run()?;
            if !report.declined {
                report.print_summary(prompter);
            }
            RunOutcome::Ingested(report)
        }
        Some(name) => {
            warn!("Unknown action '{}'", name);
            prompter.say(&format!("Unknown action '{}', nothing to do.", name));
            RunOutcome::UnknownAction(name)
        }
    };

    prompter.say("DONE!");
    Ok(outcome)
}

fn setup(
    previous: &Settings,
    store: &SettingsStore,
    prompter: &mut dyn Prompter,
) -> Result<RunOutcome> {
    prompter.say("Entering Setup...");

    let settings = run_setup(previous, prompter)?;

    prompter.say(&format!("New Settings: \n{}", settings.to_pretty_json()?));
    prompter.say(&format!("Writing to {}", store.path().display()));
    store.save(&settings)?;
    prompter.say("DONE!");

    Ok(RunOutcome::SetupSaved(settings))
}
