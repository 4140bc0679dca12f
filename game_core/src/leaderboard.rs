//! Bounded top-N leaderboard of the fastest finished matches.
//!
//! Entries are kept sorted ascending by match duration; once the board is
//! full a new entry only gets in by beating the slowest one. Persistence is
//! a plain text file, one `seconds;winner;initials` line per entry, read
//! and written in a single call with no held file handles.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Maximum number of persisted entries.
pub const MAX_ENTRIES: usize = 10;

/// File name inside the data directory.
pub const LEADERBOARD_FILE: &str = "leaderboard.txt";

/// Who won the recorded match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    Player,
    Ai,
}

impl Winner {
    pub fn as_char(self) -> char {
        match self {
            Winner::Player => 'P',
            Winner::Ai => 'A',
        }
    }

    /// 'A' is the AI; any other character normalises to the player.
    pub fn from_char(c: char) -> Self {
        if c == 'A' {
            Winner::Ai
        } else {
            Winner::Player
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardEntry {
    /// Exactly 3 characters, uppercase, space-padded.
    pub initials: String,
    pub winner: Winner,
    /// Time to win, in seconds.
    pub seconds: f32,
}

#[derive(Debug, Clone, Default)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record a finished match.
    ///
    /// Below capacity the entry is appended; at capacity it replaces the
    /// single slowest entry, and only when strictly faster. The board is
    /// re-sorted afterwards.
    pub fn add(&mut self, initials: &str, winner: Winner, seconds: f32) {
        let entry = LeaderboardEntry {
            initials: normalize_initials(initials),
            winner,
            seconds,
        };

        if self.entries.len() < MAX_ENTRIES {
            self.entries.push(entry);
        } else {
            let slowest = self
                .entries
                .iter()
                .enumerate()
                .max_by(|(_, a), (_, b)| a.seconds.total_cmp(&b.seconds))
                .map(|(i, _)| i);
            match slowest {
                Some(i) if entry.seconds < self.entries[i].seconds => self.entries[i] = entry,
                _ => return,
            }
        }
        self.sort();
    }

    /// Replace the in-memory board with the persisted one.
    ///
    /// A missing file leaves the board empty and is not an error. Malformed
    /// lines are skipped; at most [`MAX_ENTRIES`] lines are consumed.
    pub fn load(&mut self, dir: &Path) -> io::Result<()> {
        self.entries.clear();
        let text = match fs::read_to_string(dir.join(LEADERBOARD_FILE)) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(e),
        };

        for line in text.lines() {
            if self.entries.len() >= MAX_ENTRIES {
                break;
            }
            if let Some(entry) = parse_line(line) {
                self.entries.push(entry);
            }
        }
        self.sort();
        Ok(())
    }

    /// Write every entry to `dir/leaderboard.txt`, creating the directory
    /// (owner-only on unix) if needed.
    pub fn save(&self, dir: &Path) -> io::Result<()> {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            let mut builder = fs::DirBuilder::new();
            builder.recursive(true);
            #[cfg(unix)]
            {
                use std::os::unix::fs::DirBuilderExt;
                builder.mode(0o700);
            }
            builder.create(dir)?;
        }

        let mut text = String::new();
        for entry in &self.entries {
            text.push_str(&format!(
                "{:.3};{};{}\n",
                entry.seconds,
                entry.winner.as_char(),
                entry.initials
            ));
        }
        fs::write(dir.join(LEADERBOARD_FILE), text)
    }

    fn sort(&mut self) {
        self.entries.sort_by(|a, b| a.seconds.total_cmp(&b.seconds));
    }
}

/// Normalise raw initials to a 3-character uppercase field, space-padded.
pub fn normalize_initials(input: &str) -> String {
    let mut chars: Vec<char> = input
        .chars()
        .take(3)
        .map(|c| c.to_ascii_uppercase())
        .collect();
    while chars.len() < 3 {
        chars.push(' ');
    }
    chars.into_iter().collect()
}

/// Parse one `seconds;winner;initials` line. Returns None on any mismatch.
fn parse_line(line: &str) -> Option<LeaderboardEntry> {
    let mut fields = line.trim_end().splitn(3, ';');
    let seconds: f32 = fields.next()?.trim().parse().ok()?;
    let winner = Winner::from_char(fields.next()?.chars().next()?);
    let initials = normalize_initials(fields.next()?);
    Some(LeaderboardEntry {
        initials,
        winner,
        seconds,
    })
}

/// Default persistence directory: `$HOME/.purple` when HOME is set and
/// non-empty, otherwise the current directory.
pub fn default_data_dir() -> PathBuf {
    match std::env::var("HOME") {
        Ok(home) if !home.is_empty() => Path::new(&home).join(".purple"),
        _ => PathBuf::from("."),
    }
}
