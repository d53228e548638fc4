use serde::{Deserialize, Serialize};

use crate::game::{MoveRecord, Seat};

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Complete record of one tracked match: the user's seat, every move in
/// order, and the outcome. Serialized to JSONL, one match per line.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Seat the human occupied for this match
    pub user_seat: Seat,
    /// Chronological move history
    pub moves: Vec<MoveRecord>,
    /// Seat that emptied its hand first, if the match ran to completion
    pub winner: Option<Seat>,
    /// Timestamp when the record was written (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

/// Appends [`MatchRecord`]s to a JSONL file, creating parent directories as
/// needed and stamping records that lack a timestamp.
pub struct MatchLogger {
    writer: BufWriter<File>,
}

impl MatchLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                let _ = create_dir_all(parent);
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(f),
        })
    }

    pub fn write(&mut self, record: &MatchRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}
