//! File-based replay source.
//!
//! Polls a JSON snapshot file by modification time. Useful for demoing the
//! dashboard against a canned station state instead of the live simulator.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use super::{StationSnapshot, TelemetrySource};

/// A source that re-reads a snapshot file whenever it changes.
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
    description: String,
    last_error: Option<String>,
    last_modified: Option<SystemTime>,
}

impl FileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let description = format!("replay: {}", path.display());
        Self {
            path,
            description,
            last_error: None,
            last_modified: None,
        }
    }

    /// Returns the path being watched.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn modified_time(&self) -> Option<SystemTime> {
        fs::metadata(&self.path).ok()?.modified().ok()
    }

    fn read_file(&mut self) -> Option<StationSnapshot> {
        match fs::read_to_string(&self.path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(snapshot) => {
                    self.last_error = None;
                    Some(snapshot)
                }
                Err(e) => {
                    self.last_error = Some(format!("Parse error: {}", e));
                    None
                }
            },
            Err(e) => {
                self.last_error = Some(format!("Read error: {}", e));
                None
            }
        }
    }
}

impl TelemetrySource for FileSource {
    fn poll(&mut self) -> Option<StationSnapshot> {
        let current_modified = self.modified_time();

        let file_changed = match (&self.last_modified, &current_modified) {
            (None, _) => true,        // first poll, always read
            (Some(_), None) => false, // file disappeared, keep last state
            (Some(last), Some(current)) => current > last,
        };

        if file_changed {
            if let Some(snapshot) = self.read_file() {
                self.last_modified = current_modified;
                return Some(snapshot);
            }
        }

        None
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn sample_json() -> &'static str {
        r#"{
            "readings": {
                "gas_concentration": 48.5,
                "suction_pressure": 42.1
            }
        }"#
    }

    #[test]
    fn test_file_source_new() {
        let source = FileSource::new("/tmp/station.json");
        assert_eq!(source.path(), Path::new("/tmp/station.json"));
        assert_eq!(source.description(), "replay: /tmp/station.json");
        assert!(source.error().is_none());
    }

    #[test]
    fn test_file_source_poll_reads_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", sample_json()).unwrap();

        let mut source = FileSource::new(file.path());

        let snapshot = source.poll().unwrap();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(
            snapshot.get(crate::data::metric::MetricId::GasConcentration),
            Some(48.5)
        );

        // No change since the first read.
        assert!(source.poll().is_none());
    }

    #[test]
    fn test_file_source_missing_file() {
        let mut source = FileSource::new("/nonexistent/path/station.json");

        assert!(source.poll().is_none());
        assert!(source.error().unwrap().contains("Read error"));
    }

    #[test]
    fn test_file_source_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not valid json").unwrap();

        let mut source = FileSource::new(file.path());

        assert!(source.poll().is_none());
        assert!(source.error().unwrap().contains("Parse error"));
    }
}
