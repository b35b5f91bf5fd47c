//! The ingest loop
//!
//! For each source volume (sorted) and each extension (as configured), every
//! matching file is hashed and copied to its content-addressed destination.
//! An existing destination is only replaced after the user agrees. Any I/O
//! failure ends the run; nothing is retried or rolled back.

use super::{
    source_order, ContentAddress, IngestEntry, IngestOutcome, IngestRecord, IngestReport,
    ProjectLayout,
};
use crate::config::{IngestConfig, OsType};
use crate::error::Result;
use crate::fs::{ensure_dir, find_with_extension, is_same_file, FileCopier};
use crate::hash::hash_file;
use crate::progress::ProgressReporter;
use crate::prompt::{is_no, is_yes, Prompter};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Runs one ingest for a project
pub struct Ingester<'a> {
    config: IngestConfig,
    layout: ProjectLayout,
    copier: FileCopier,
    progress: ProgressReporter,
    prompter: &'a mut dyn Prompter,
}

impl<'a> Ingester<'a> {
    /// Create an ingester talking to the user through `prompter`
    pub fn new(config: IngestConfig, prompter: &'a mut dyn Prompter) -> Self {
        let progress = if config.quiet {
            ProgressReporter::disabled()
        } else {
            ProgressReporter::new()
        };

        Self {
            layout: ProjectLayout::from_config(&config),
            config,
            copier: FileCopier::default(),
            progress,
            prompter,
        }
    }

    /// Execute the ingest
    pub fn run(mut self) -> Result<IngestReport> {
        let start_time = Instant::now();

        if self.config.os == OsType::Win && !self.confirm_windows()? {
            info!("Ingest declined on Windows warning");
            self.progress.finish_success("Ingest cancelled");
            return Ok(IngestReport::declined());
        }

        let mut report = IngestReport::default();
        match self.ingest_all(&mut report) {
            Ok(()) => {
                report.duration = start_time.elapsed();
                self.progress.finish_success(&format!(
                    "Ingested {} files",
                    report.files_written()
                ));
                info!(
                    files = report.entries.len(),
                    bytes = report.bytes_copied,
                    "Ingest complete"
                );
                Ok(report)
            }
            Err(e) => {
                self.progress.finish_error(&e.to_string());
                Err(e)
            }
        }
    }

    fn confirm_windows(&mut self) -> Result<bool> {
        self.say("WARNING!!! - Windows isn't completely supported just yet, please use at your own risk!");
        let answer = self.ask("Continue? (yes/no)")?;
        Ok(is_yes(&answer))
    }

    fn ingest_all(&mut self, report: &mut IngestReport) -> Result<()> {
        let originals = self.layout.originals_dir();
        if !originals.is_dir() {
            self.say("Creating project directory structure...");
        }
        ensure_dir(&originals)?;

        self.say("Looking for sources to ingest...");

        let volumes = self.config.source_volumes.clone();
        for volume in source_order(&volumes) {
            let root = self.layout.source_root(volume);

            if !root.is_dir() {
                debug!("Source {:?} not present, skipping", root);
                report.missing_roots.push(root);
                continue;
            }

            self.say(&format!("Found {}, ingesting now...", root.display()));
            self.progress.set_status(&format!("Scanning {}", volume));
            report.scanned_roots.push(root.clone());

            for extension in self.config.extensions.clone() {
                for file in find_with_extension(&root, &extension)? {
                    let (entry, bytes) = self.ingest_file(&file, &extension, &originals)?;
                    report.bytes_copied += bytes;
                    report.entries.push(entry);
                }
            }
        }

        if report.scanned_roots.is_empty() {
            warn!("None of the configured source volumes are present");
        }

        Ok(())
    }

    fn ingest_file(
        &mut self,
        file: &Path,
        extension: &str,
        originals: &Path,
    ) -> Result<(IngestEntry, u64)> {
        let display = file.display().to_string();
        self.say(&format!("Found \"{}\"", display));

        self.say("Generating checksum...");
        self.progress.set_current_file("Hashing", &display);
        let digest = hash_file(file)?;

        let address = ContentAddress::new(&digest, extension);
        let record = IngestRecord {
            source: file.to_path_buf(),
            extension: extension.to_string(),
            digest: digest.hex.clone(),
            destination: address.path_in(originals),
        };

        self.say(&format!("Copying file to {}...", record.destination.display()));

        let mut outcome = IngestOutcome::Copied;
        if record.destination.exists() {
            if is_same_file(file, &record.destination) {
                debug!("{:?} is already its own destination", record.source);
                self.say("Source is already in place, skipping...");
                return Ok((skipped(record), 0));
            }

            let answer = self.ask("Destination already exists! Overwrite? (y/n)")?;
            if answer.is_empty() || is_no(&answer) {
                debug!("Kept existing {:?}", record.destination);
                return Ok((skipped(record), 0));
            }
            self.say("Overwriting now...");
            outcome = IngestOutcome::Overwritten;
        }

        self.progress.set_current_file("Copying", &display);
        let bytes = self.copier.copy(file, &record.destination)?;
        debug!(
            "Copied {:?} -> {:?} ({} bytes)",
            record.source, record.destination, bytes
        );

        self.say("Copied...");
        Ok((IngestEntry { record, outcome }, bytes))
    }

    fn say(&mut self, message: &str) {
        let prompter = &mut self.prompter;
        self.progress.suspend(|| prompter.say(message));
    }

    fn ask(&mut self, message: &str) -> Result<String> {
        let prompter = &mut self.prompter;
        self.progress.suspend(|| prompter.prompt(message))
    }
}

fn skipped(record: IngestRecord) -> IngestEntry {
    IngestEntry {
        record,
        outcome: IngestOutcome::Skipped,
    }
}
