//! Append emitted lines to a file.

use std::fs::{File, OpenOptions};
use std::io::{self, LineWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use crate::event::{EventKind, LogEvent};
use crate::logger::ChannelLogger;
use crate::observer::ObserverId;

/// On-disk representation of each event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileFormat {
    /// The console line, verbatim.
    #[default]
    Text,
    /// One JSON object per line.
    JsonLines,
}

/// Observer that appends every event it receives to a file.
#[derive(Debug)]
pub struct FileObserver {
    path: PathBuf,
    format: FileFormat,
    writer: Mutex<LineWriter<File>>,
}

impl FileObserver {
    /// Open (or create) `path` for appending.
    pub fn open(path: impl AsRef<Path>, format: FileFormat) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self {
            path,
            format,
            writer: Mutex::new(LineWriter::new(file)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write one event. Failures are logged, not returned.
    pub fn write_event(&self, event: &LogEvent) {
        let mut writer = match self.writer.lock() {
            Ok(w) => w,
            Err(poisoned) => poisoned.into_inner(),
        };

        let result = match self.format {
            FileFormat::Text => writer.write_all(event.message.as_bytes()),
            FileFormat::JsonLines => serde_json::to_writer(&mut *writer, event)
                .map_err(io::Error::from)
                .and_then(|_| writer.write_all(b"\n")),
        };

        if let Err(e) = result {
            tracing::warn!(path = ?self.path, error = %e, "Failed to write log event to file");
        }
    }

    /// Subscribe this file to each of `kinds` on `logger`.
    pub fn attach(self, logger: &ChannelLogger, kinds: &[EventKind]) -> Vec<ObserverId> {
        let this = Arc::new(self);
        kinds
            .iter()
            .map(|kind| {
                let observer = this.clone();
                logger.subscribe(*kind, move |event| observer.write_event(event))
            })
            .collect()
    }
}
