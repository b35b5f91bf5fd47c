//! Interactive setup
//!
//! Each managed setting is shown with its existing (or built-in default)
//! value and the user may keep it or type a new one. The result contains
//! only the tool version and the managed settings; anything else the old
//! settings carried is dropped.

use crate::config::{
    default_extensions, default_source_volumes, keys, OsType, Settings, DEFAULT_OS,
    DEFAULT_VOLUMES_BASE, DEFAULT_WORK_VOLUME,
};
use crate::error::Result;
use crate::prompt::{is_yes, Prompter};
use tracing::debug;

/// A list-valued setting the wizard manages
struct ListStep {
    key: &'static str,
    heading: &'static str,
    add_more: &'static str,
    entry: &'static str,
    defaults: fn() -> Vec<String>,
}

const SOURCE_VOLUMES_STEP: ListStep = ListStep {
    key: keys::SOURCE_VOLUMES,
    heading: "Setting up source paths...",
    add_more: "Do you want to add more source paths? (yes/no)",
    entry: "Enter new source path (enter = done):",
    defaults: default_source_volumes,
};

const EXTENSIONS_STEP: ListStep = ListStep {
    key: keys::EXTENSIONS,
    heading: "Setting up extensions...",
    add_more: "Do you want to add more extensions? (yes/no)",
    entry: "Enter new extension (enter = done):",
    defaults: default_extensions,
};

/// Interactive setup over the previous settings
pub struct SetupWizard<'a> {
    previous: &'a Settings,
    prompter: &'a mut dyn Prompter,
}

impl<'a> SetupWizard<'a> {
    /// Create a wizard that offers values from `previous` as defaults
    pub fn new(previous: &'a Settings, prompter: &'a mut dyn Prompter) -> Self {
        Self { previous, prompter }
    }

    /// Ask for every managed setting and build the new settings
    pub fn run(mut self) -> Result<Settings> {
        let mut settings = Settings::new();
        settings.set(keys::VERSION, crate::VERSION);

        let os = self.ask_os()?;
        settings.set(keys::OS, os.as_str());

        let volumes_base = self.ask_text(
            keys::VOLUMES_BASE,
            "Setting up volumes base path...",
            DEFAULT_VOLUMES_BASE,
        )?;
        settings.set(keys::VOLUMES_BASE, volumes_base);

        let work_volume = self.ask_text(
            keys::WORK_VOLUME,
            "Setting up working path...",
            DEFAULT_WORK_VOLUME,
        )?;
        settings.set(keys::WORK_VOLUME, work_volume);

        for step in [&SOURCE_VOLUMES_STEP, &EXTENSIONS_STEP] {
            let list = self.ask_list(step)?;
            settings.set(step.key, list);
        }

        debug!("Setup produced {} settings", settings.len());
        Ok(settings)
    }

    fn ask_os(&mut self) -> Result<OsType> {
        let existing_text = self.previous.get_text(keys::OS);
        let existing = existing_text.and_then(|s| s.parse::<OsType>().ok());

        self.prompter.say("");
        self.prompter.say("Setting up operating system type...");
        self.prompter.say(&format!(
            "Existing/Default: {}",
            existing_text.unwrap_or(DEFAULT_OS.as_str())
        ));

        let answer = self.prompter.prompt("Enter OS type (win/mac/linux):")?.to_lowercase();
        if answer.is_empty() {
            self.prompter.say("Using existing/default value...");
            return Ok(existing.unwrap_or(DEFAULT_OS));
        }

        match answer.parse() {
            Ok(os) => Ok(os),
            Err(_) => {
                self.prompter
                    .say("Input not recognized, setting to existing/default value...");
                Ok(existing.unwrap_or(DEFAULT_OS))
            }
        }
    }

    fn ask_text(&mut self, key: &str, heading: &str, default: &str) -> Result<String> {
        let existing = self
            .previous
            .get_text(key)
            .filter(|s| !s.is_empty())
            .unwrap_or(default)
            .to_string();

        self.prompter.say("");
        self.prompter.say(heading);
        self.prompter.say(&format!("Existing/Default: {}", existing));

        let answer = self
            .prompter
            .prompt("Please enter a value (enter = existing/default): ")?;
        if answer.is_empty() {
            self.prompter.say("Using existing/default...");
            return Ok(existing);
        }
        Ok(answer)
    }

    fn ask_list(&mut self, step: &ListStep) -> Result<Vec<String>> {
        let existing = self
            .previous
            .get_list(step.key)
            .filter(|list| !list.is_empty())
            .unwrap_or_else(step.defaults);

        self.prompter.say("");
        self.prompter.say(step.heading);
        self.prompter.say(&format!("Existing/Default: {:?}", existing));

        let keep = self
            .prompter
            .prompt("Do you want to use existing/default? (yes/no)")?;

        let mut list = if keep.is_empty() || is_yes(&keep) {
            let mut list = existing;
            if is_yes(&self.prompter.prompt(step.add_more)?) {
                list.extend(collect_entries(self.prompter, step.entry, str::is_empty)?);
            }
            list
        } else {
            collect_entries(self.prompter, step.entry, str::is_empty)?
        };

        if list.is_empty() {
            self.prompter.say("Nothing entered, using the built-in defaults...");
            list = (step.defaults)();
        }
        Ok(list)
    }
}

/// Run the setup wizard over `previous`
pub fn run_setup(previous: &Settings, prompter: &mut dyn Prompter) -> Result<Settings> {
    SetupWizard::new(previous, prompter).run()
}

/// Read entries one line at a time until `stop` accepts a line.
///
/// The stopping line is not included.
pub fn collect_entries(
    prompter: &mut dyn Prompter,
    message: &str,
    stop: impl Fn(&str) -> bool,
) -> Result<Vec<String>> {
    let mut entries = Vec::new();
    loop {
        let entry = prompter.prompt(message)?;
        if stop(&entry) {
            return Ok(entries);
        }
        entries.push(entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SettingValue;
    use crate::prompt::ScriptedPrompter;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_all_defaults_on_empty_answers() {
        let mut prompter = ScriptedPrompter::default();
        let settings = run_setup(&Settings::fresh(), &mut prompter).unwrap();

        assert_eq!(settings.get_text(keys::VERSION), Some(crate::VERSION));
        assert_eq!(settings.get_text(keys::OS), Some("mac"));
        assert_eq!(settings.get_text(keys::VOLUMES_BASE), Some("/Volumes"));
        assert_eq!(settings.get_text(keys::WORK_VOLUME), Some("video-disk"));
        assert_eq!(settings.get_list(keys::SOURCE_VOLUMES), Some(default_source_volumes()));
        assert_eq!(settings.get_list(keys::EXTENSIONS), Some(default_extensions()));
        assert_eq!(settings.len(), 6);
    }

    #[test]
    fn test_existing_values_offered_as_defaults() {
        let mut previous = Settings::fresh();
        previous.set(keys::OS, "linux");
        previous.set(keys::VOLUMES_BASE, "/media/editor");
        previous.set(keys::SOURCE_VOLUMES, strings(&["SONY"]));

        let mut prompter = ScriptedPrompter::default();
        let settings = run_setup(&previous, &mut prompter).unwrap();

        assert_eq!(settings.get_text(keys::OS), Some("linux"));
        assert_eq!(settings.get_text(keys::VOLUMES_BASE), Some("/media/editor"));
        assert_eq!(settings.get_list(keys::SOURCE_VOLUMES), Some(strings(&["SONY"])));
        assert!(prompter.said("Existing/Default: /media/editor"));
    }

    #[test]
    fn test_typed_os_is_kept() {
        let mut prompter = ScriptedPrompter::new(["Linux"]);
        let settings = run_setup(&Settings::fresh(), &mut prompter).unwrap();
        assert_eq!(settings.get_text(keys::OS), Some("linux"));
    }

    #[test]
    fn test_unrecognized_os_falls_back() {
        let mut prompter = ScriptedPrompter::new(["bsd"]);
        let settings = run_setup(&Settings::fresh(), &mut prompter).unwrap();
        assert_eq!(settings.get_text(keys::OS), Some("mac"));
        assert!(prompter.said("Input not recognized"));

        let mut previous = Settings::fresh();
        previous.set(keys::OS, "win");
        let mut prompter = ScriptedPrompter::new(["amiga"]);
        let settings = run_setup(&previous, &mut prompter).unwrap();
        assert_eq!(settings.get_text(keys::OS), Some("win"));
    }

    #[test]
    fn test_typed_text_values() {
        let mut prompter = ScriptedPrompter::new(["", "/mnt", "RAID"]);
        let settings = run_setup(&Settings::fresh(), &mut prompter).unwrap();
        assert_eq!(settings.get_text(keys::VOLUMES_BASE), Some("/mnt"));
        assert_eq!(settings.get_text(keys::WORK_VOLUME), Some("RAID"));
    }

    #[test]
    fn test_unrelated_keys_dropped() {
        let mut previous = Settings::fresh();
        previous.set(keys::PROJECT, "wedding");
        previous.set(keys::QUIET, true);
        previous.set("color", "blue");

        let mut prompter = ScriptedPrompter::default();
        let settings = run_setup(&previous, &mut prompter).unwrap();

        assert!(!settings.contains(keys::PROJECT));
        assert!(!settings.contains(keys::ACTION));
        assert!(!settings.contains("color"));
        assert!(!settings.contains(keys::QUIET));
    }

    #[test]
    fn test_keep_and_add_more() {
        let mut prompter = ScriptedPrompter::new([
            "", "", "", // os, volumes-base, work-volume
            "yes", "y", "GOPRO", "SONY", "", // source volumes
            "", "no", // extensions
        ]);
        let settings = run_setup(&Settings::fresh(), &mut prompter).unwrap();

        let mut expected = default_source_volumes();
        expected.extend(strings(&["GOPRO", "SONY"]));
        assert_eq!(settings.get_list(keys::SOURCE_VOLUMES), Some(expected));
        assert_eq!(settings.get_list(keys::EXTENSIONS), Some(default_extensions()));
        assert_eq!(prompter.remaining(), 0);
    }

    #[test]
    fn test_decline_defaults_replaces_list() {
        let mut prompter = ScriptedPrompter::new([
            "", "", "", // os, volumes-base, work-volume
            "", "", // keep source volumes, no more
            "no", "MXF", "braw", "", // extensions replaced
        ]);
        let settings = run_setup(&Settings::fresh(), &mut prompter).unwrap();

        assert_eq!(settings.get_list(keys::EXTENSIONS), Some(strings(&["MXF", "braw"])));
        assert_eq!(
            settings.get(keys::EXTENSIONS),
            Some(&SettingValue::List(strings(&["MXF", "braw"])))
        );
    }

    #[test]
    fn test_decline_defaults_with_no_entries_uses_defaults() {
        let mut prompter = ScriptedPrompter::new(["", "", "", "n", "", "n", ""]);
        let settings = run_setup(&Settings::fresh(), &mut prompter).unwrap();

        assert_eq!(settings.get_list(keys::SOURCE_VOLUMES), Some(default_source_volumes()));
        assert_eq!(settings.get_list(keys::EXTENSIONS), Some(default_extensions()));
        assert!(prompter.said("built-in defaults"));
    }

    #[test]
    fn test_collect_entries_stops_on_condition() {
        let mut prompter = ScriptedPrompter::new(["a", "b", "done", "c"]);
        let entries = collect_entries(&mut prompter, "Entry:", |s| s == "done").unwrap();
        assert_eq!(entries, strings(&["a", "b"]));
        assert_eq!(prompter.remaining(), 1);
        assert_eq!(prompter.prompts().len(), 3);
    }

    #[test]
    fn test_collect_entries_stops_at_end_of_input() {
        let mut prompter = ScriptedPrompter::new(["MXF"]);
        let entries = collect_entries(&mut prompter, "Entry:", str::is_empty).unwrap();
        assert_eq!(entries, strings(&["MXF"]));
    }
}
