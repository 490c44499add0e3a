//! Effect log - one JSON line per attempted move
//!
//! Appends to the file named by `MATCH3_LOG_PATH` (or `--log`). Write failures
//! disable the log instead of failing the move.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::protocol::EffectWire;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    pub seq: u64,
    pub accepted: bool,
    pub passes: u32,
    pub score: u32,
    pub effects: Vec<EffectWire>,
}

#[derive(Debug)]
pub struct EffectLog {
    out: Option<BufWriter<File>>,
    written: u64,
}

impl EffectLog {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open effect log {}", path.display()))?;
        Ok(Self {
            out: Some(BufWriter::new(file)),
            written: 0,
        })
    }

    pub fn is_active(&self) -> bool {
        self.out.is_some()
    }

    /// Records successfully written so far
    pub fn written(&self) -> u64 {
        self.written
    }

    pub fn append(&mut self, record: &LogRecord) {
        let Some(out) = self.out.as_mut() else {
            return;
        };
        let result = write_record(out, record);
        match result {
            Ok(()) => self.written += 1,
            Err(e) => {
                eprintln!("[match3] effect log disabled after write error: {}", e);
                self.out = None;
            }
        }
    }
}

fn write_record(out: &mut BufWriter<File>, record: &LogRecord) -> Result<()> {
    serde_json::to_writer(&mut *out, record)?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}
