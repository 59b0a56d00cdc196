//! High-score persistence module.
//!
//! Keeps the top-3 leaderboard in a plain text file, one record per line in
//! `name,score` form. The file is touched only at session boundaries: loaded
//! once at start, rewritten at game end when the session score qualifies.
//!
//! Loading never fails: an unreadable or missing file yields an empty
//! leaderboard, and individual lines that do not parse (missing comma,
//! non-integer score) are discarded rather than poisoning the rest.
//!
//! Names are stored unescaped. A name containing a newline will corrupt its
//! record; a name containing commas survives because parsing splits on the
//! last comma. Known limitation of the format.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use tui_2048_types::MAX_LEADERBOARD_ENTRIES;

/// One persisted high-score entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighScoreRecord {
    pub name: String,
    pub score: u32,
}

/// The top-3 leaderboard, sorted by score descending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Leaderboard {
    records: Vec<HighScoreRecord>,
}

impl Leaderboard {
    /// Create an empty leaderboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the leaderboard from a file.
    ///
    /// A missing or unreadable file yields an empty leaderboard; corrupt
    /// lines are skipped.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(text) => Self::parse(&text),
            Err(_) => Self::new(),
        }
    }

    /// Parse leaderboard text, discarding unparseable lines.
    pub fn parse(text: &str) -> Self {
        let mut board = Self {
            records: text.lines().filter_map(parse_record).collect(),
        };
        board.normalize();
        board
    }

    /// Records in rank order (best first, at most 3).
    pub fn records(&self) -> &[HighScoreRecord] {
        &self.records
    }

    /// The current best entry, if any.
    pub fn best(&self) -> Option<&HighScoreRecord> {
        self.records.first()
    }

    /// Whether a score would enter the leaderboard.
    pub fn qualifies(&self, score: u32) -> bool {
        if self.records.len() < MAX_LEADERBOARD_ENTRIES {
            return true;
        }
        self.records.last().is_some_and(|worst| score > worst.score)
    }

    /// Merge one entry in, keeping the sort and truncation invariant.
    pub fn submit(&mut self, name: &str, score: u32) {
        self.records.push(HighScoreRecord {
            name: name.to_string(),
            score,
        });
        self.normalize();
    }

    /// Rewrite the whole leaderboard file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut text = String::new();
        for record in &self.records {
            text.push_str(&record.name);
            text.push(',');
            text.push_str(&record.score.to_string());
            text.push('\n');
        }
        fs::write(path, text)
            .with_context(|| format!("failed to write high scores to {}", path.display()))
    }

    /// Sort descending by score (stable, so earlier entries win ties) and
    /// truncate to the maximum size.
    fn normalize(&mut self) {
        self.records.sort_by(|a, b| b.score.cmp(&a.score));
        self.records.truncate(MAX_LEADERBOARD_ENTRIES);
    }
}

/// Parse one `name,score` line. Splits on the last comma so names that
/// contain commas keep their score.
fn parse_record(line: &str) -> Option<HighScoreRecord> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let (name, score) = line.rsplit_once(',')?;
    let score = score.trim().parse::<u32>().ok()?;
    Some(HighScoreRecord {
        name: name.to_string(),
        score,
    })
}
