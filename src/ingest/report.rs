//! Results of an ingest run

use crate::prompt::Prompter;
use std::path::PathBuf;
use std::time::Duration;

/// One matched source file and where its content belongs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestRecord {
    /// File found on the source volume
    pub source: PathBuf,
    /// Extension it matched, as configured
    pub extension: String,
    /// SHA-256 hex of its content
    pub digest: String,
    /// Content-addressed destination
    pub destination: PathBuf,
}

/// What happened to a matched file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestOutcome {
    /// Copied to a new destination
    Copied,
    /// Replaced an existing destination after confirmation
    Overwritten,
    /// Existing destination kept
    Skipped,
}

/// A record with its outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestEntry {
    /// The file
    pub record: IngestRecord,
    /// What was done with it
    pub outcome: IngestOutcome,
}

/// Ingest operation result
#[derive(Debug, Default)]
pub struct IngestReport {
    /// Every matched file, in processing order
    pub entries: Vec<IngestEntry>,
    /// Source roots that existed and were scanned, in processing order
    pub scanned_roots: Vec<PathBuf>,
    /// Source roots that did not exist
    pub missing_roots: Vec<PathBuf>,
    /// Total bytes copied
    pub bytes_copied: u64,
    /// Total duration
    pub duration: Duration,
    /// The user declined to continue before anything was done
    pub declined: bool,
}

impl IngestReport {
    /// Report for a run the user declined at the start
    pub fn declined() -> Self {
        Self {
            declined: true,
            ..Default::default()
        }
    }

    /// Number of entries with the given outcome
    pub fn count(&self, outcome: IngestOutcome) -> usize {
        self.entries.iter().filter(|e| e.outcome == outcome).count()
    }

    /// Files written (new or overwritten)
    pub fn files_written(&self) -> usize {
        self.count(IngestOutcome::Copied) + self.count(IngestOutcome::Overwritten)
    }

    /// Average throughput in bytes/second
    pub fn throughput(&self) -> f64 {
        let secs = self.duration.as_secs_f64();
        if secs > 0.0 {
            self.bytes_copied as f64 / secs
        } else {
            0.0
        }
    }

    /// Write a human summary
    pub fn print_summary(&self, out: &mut dyn Prompter) {
        out.say("");
        out.say("=== Ingest Summary ===");
        out.say(&format!("Sources scanned: {}", self.scanned_roots.len()));
        out.say(&format!("Files found:     {}", self.entries.len()));
        out.say(&format!("Copied:          {}", self.count(IngestOutcome::Copied)));
        out.say(&format!("Overwritten:     {}", self.count(IngestOutcome::Overwritten)));
        out.say(&format!("Skipped:         {}", self.count(IngestOutcome::Skipped)));
        out.say(&format!(
            "Bytes copied:    {}",
            humansize::format_size(self.bytes_copied, humansize::BINARY)
        ));
        out.say(&format!("Duration:        {:.2?}", self.duration));
        out.say(&format!(
            "Throughput:      {}/s",
            humansize::format_size(self.throughput() as u64, humansize::BINARY)
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::ScriptedPrompter;

    fn entry(name: &str, outcome: IngestOutcome) -> IngestEntry {
        IngestEntry {
            record: IngestRecord {
                source: PathBuf::from(format!("/Volumes/CANON/{}", name)),
                extension: "MOV".to_string(),
                digest: "00".repeat(32),
                destination: PathBuf::from("/dest"),
            },
            outcome,
        }
    }

    #[test]
    fn test_counts() {
        let report = IngestReport {
            entries: vec![
                entry("a.MOV", IngestOutcome::Copied),
                entry("b.MOV", IngestOutcome::Skipped),
                entry("c.MOV", IngestOutcome::Overwritten),
                entry("d.MOV", IngestOutcome::Copied),
            ],
            ..Default::default()
        };

        assert_eq!(report.count(IngestOutcome::Copied), 2);
        assert_eq!(report.count(IngestOutcome::Skipped), 1);
        assert_eq!(report.files_written(), 3);
        assert!(!report.declined);
    }

    #[test]
    fn test_summary_output() {
        let report = IngestReport {
            entries: vec![entry("a.MOV", IngestOutcome::Copied)],
            bytes_copied: 2048,
            ..Default::default()
        };

        let mut out = ScriptedPrompter::default();
        report.print_summary(&mut out);

        assert!(out.said("Files found:     1"));
        assert!(out.said("2 KiB"));
    }
}
