use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::game::Phase;
use crate::player::PlayerAction;

/// Records a single betting action during a round.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub seat: usize,
    /// `PreDraw` or `PostDraw`
    pub street: Phase,
    pub action: PlayerAction,
}

/// Cards a seat threw away in the draw and what replaced them.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct DrawRecord {
    pub seat: usize,
    pub discarded: Vec<Card>,
    pub received: Vec<Card>,
}

/// Information about the showdown when hands are revealed.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ShowdownInfo {
    pub winners: Vec<usize>,
    /// Winning category name, e.g. "Full House"
    #[serde(default)]
    pub notes: Option<String>,
}

/// Complete record of one round, serialized to JSONL for history storage.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Default)]
pub struct RoundRecord {
    /// Assigned by [`RoundLogger::write`] when missing (format: YYYYMMDD-NNNNNN)
    #[serde(default)]
    pub round_id: Option<String>,
    pub round: u32,
    pub seed: Option<u64>,
    pub dealer: usize,
    pub ante: u32,
    /// Balance of every seat before antes were posted
    pub starting_balances: Vec<u32>,
    pub actions: Vec<ActionRecord>,
    pub draws: Vec<DrawRecord>,
    /// Final hand of every seat, empty for seats that sat out
    pub hands: Vec<Vec<Card>>,
    pub pot: u32,
    /// Hand result summary ("seat 2 wins 140")
    pub result: Option<String>,
    /// Timestamp when the round was written (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
    #[serde(default)]
    pub showdown: Option<ShowdownInfo>,
}

pub fn format_round_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct RoundLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl RoundLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_round_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &RoundRecord) -> std::io::Result<()> {
        let mut rec = record.clone();
        if rec.round_id.is_none() {
            rec.round_id = Some(self.next_id());
        }
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
