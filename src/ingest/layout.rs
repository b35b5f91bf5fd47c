//! Where ingest reads from and writes to

use crate::config::IngestConfig;
use std::path::PathBuf;

/// Directories under the project that hold the ingested originals
pub const ORIGINALS_SUBDIR: [&str; 2] = ["media", "originals"];

/// Filesystem layout of one project and its source volumes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    volumes_base: PathBuf,
    work_volume: String,
    project: String,
}

impl ProjectLayout {
    /// Layout from explicit parts
    pub fn new(
        volumes_base: impl Into<PathBuf>,
        work_volume: impl Into<String>,
        project: impl Into<String>,
    ) -> Self {
        Self {
            volumes_base: volumes_base.into(),
            work_volume: work_volume.into(),
            project: project.into(),
        }
    }

    /// Layout for an ingest configuration
    pub fn from_config(config: &IngestConfig) -> Self {
        Self::new(&config.volumes_base, &config.work_volume, &config.project)
    }

    /// `{volumes-base}/{work-volume}/{project}`
    pub fn project_dir(&self) -> PathBuf {
        self.volumes_base.join(&self.work_volume).join(&self.project)
    }

    /// `{volumes-base}/{work-volume}/{project}/media/originals`
    pub fn originals_dir(&self) -> PathBuf {
        ORIGINALS_SUBDIR
            .iter()
            .fold(self.project_dir(), |dir, part| dir.join(part))
    }

    /// `{volumes-base}/{source-volume}`
    pub fn source_root(&self, volume: &str) -> PathBuf {
        self.volumes_base.join(volume)
    }
}

/// Source volumes in the order they are ingested: ascending, byte-wise, case-sensitive
pub fn source_order(volumes: &[String]) -> Vec<&str> {
    let mut ordered: Vec<&str> = volumes.iter().map(String::as_str).collect();
    ordered.sort();
    ordered
}
