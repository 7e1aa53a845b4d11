//! JSONL file writer for audit events.
//!
//! Each [`AuditEvent`] is serialized as a single JSON line carrying a
//! per-logger `seq`, a `timestamp` and the event `type`, followed by the
//! event's own fields:
//!
//! ```json
//! {"seq":2,"timestamp":"2026-01-05T10:00:00.120Z","type":"execution_result","file":"/c/a.bin",...}
//! ```
//!
//! Existing logs are appended to, never truncated.

use launcher_application::ports::audit_log::{AuditEvent, AuditLogger};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::warn;

/// JSONL audit logger that writes one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes on `Drop`.
pub struct JsonlAuditLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
    next_seq: AtomicU64,
}

impl JsonlAuditLogger {
    /// Open (or create) the log at the given path.
    ///
    /// Creates parent directories if they don't exist.
    /// Returns `None` if the file cannot be opened.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create audit log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open audit log {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
            next_seq: AtomicU64::new(0),
        })
    }

    /// Get the path to the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// One line of the audit log. `seq` follows write order within one logger.
#[derive(Serialize)]
struct AuditRecord<'a> {
    seq: u64,
    timestamp: String,
    #[serde(rename = "type")]
    event_type: &'static str,
    #[serde(flatten)]
    body: RecordBody<'a>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum RecordBody<'a> {
    /// Object payloads contribute their fields at the top level
    Fields(&'a Map<String, Value>),
    /// Anything else is nested under `data`
    Data { data: &'a Value },
}

impl AuditLogger for JsonlAuditLogger {
    fn log(&self, event: AuditEvent) {
        let body = match &event.payload {
            Value::Object(map) => RecordBody::Fields(map),
            other => RecordBody::Data { data: other },
        };

        let Ok(mut writer) = self.writer.lock() else {
            return;
        };
        let record = AuditRecord {
            seq: self.next_seq.fetch_add(1, Ordering::Relaxed),
            timestamp: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            event_type: event.event_type,
            body,
        };

        match serde_json::to_string(&record) {
            Ok(line) => {
                let _ = writeln!(writer, "{}", line);
                let _ = writer.flush();
            }
            Err(e) => warn!("Dropped audit event '{}': {}", event.event_type, e),
        }
    }
}

impl Drop for JsonlAuditLogger {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}
