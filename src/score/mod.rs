//! Persistent high-score list: a JSON array of integers, best first,
//! capped at five entries.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Maximum number of scores kept.
pub const MAX_ENTRIES: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighScores {
    entries: Vec<u32>,
}

impl HighScores {
    /// Read scores from `path`. A missing or malformed file is an empty
    /// list, never an error.
    pub fn load(path: &Path) -> Self {
        let entries = fs::read_to_string(path)
            .ok()
            .and_then(|text| serde_json::from_str::<Vec<u32>>(&text).ok())
            .unwrap_or_default();

        let mut scores = Self { entries };
        scores.normalize();
        scores
    }

    /// Insert a finished session's score, keeping descending order and the
    /// entry cap. Returns true if the score made the list.
    pub fn record(&mut self, score: u32) -> bool {
        let idx = self
            .entries
            .iter()
            .position(|&s| s < score)
            .unwrap_or(self.entries.len());
        if idx >= MAX_ENTRIES {
            return false;
        }
        self.entries.insert(idx, score);
        self.entries.truncate(MAX_ENTRIES);
        true
    }

    /// Rewrite the whole file. Callers that do not care (game-over path)
    /// drop the error; tests assert on it.
    pub fn save(&self, path: &Path) -> Result<()> {
        let text = serde_json::to_string(&self.entries)?;
        fs::write(path, text).with_context(|| format!("failed to write scores to {}", path.display()))
    }

    pub fn entries(&self) -> &[u32] {
        &self.entries
    }

    pub fn best(&self) -> Option<u32> {
        self.entries.first().copied()
    }

    fn normalize(&mut self) {
        self.entries.sort_unstable_by(|a, b| b.cmp(a));
        self.entries.truncate(MAX_ENTRIES);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_entries(entries: &[u32]) -> HighScores {
        let mut scores = HighScores::default();
        for &s in entries {
            scores.record(s);
        }
        scores
    }

    #[test]
    fn test_record_keeps_descending_order() {
        let mut scores = with_entries(&[100, 80, 50]);
        assert!(scores.record(90));
        assert_eq!(scores.entries(), &[100, 90, 80, 50]);
    }

    #[test]
    fn test_record_caps_at_five() {
        let mut scores = with_entries(&[100, 90, 80, 70, 60]);
        assert!(scores.record(75));
        assert_eq!(scores.entries(), &[100, 90, 80, 75, 70]);
    }

    #[test]
    fn test_record_below_full_list_is_dropped() {
        let mut scores = with_entries(&[100, 90, 80, 70, 60]);
        assert!(!scores.record(10));
        assert_eq!(scores.entries(), &[100, 90, 80, 70, 60]);
    }

    #[test]
    fn test_best() {
        assert_eq!(HighScores::default().best(), None);
        assert_eq!(with_entries(&[40, 90]).best(), Some(90));
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let scores = HighScores::load(&dir.path().join("nope.json"));
        assert!(scores.entries().is_empty());
    }

    #[test]
    fn test_load_malformed_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.json");
        fs::write(&path, "not json at all").unwrap();
        assert!(HighScores::load(&path).entries().is_empty());
    }

    #[test]
    fn test_load_sorts_and_caps() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.json");
        fs::write(&path, "[10, 90, 40, 70, 20, 60]").unwrap();
        assert_eq!(HighScores::load(&path).entries(), &[90, 70, 60, 40, 20]);
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.json");

        let scores = with_entries(&[100, 80, 50]);
        scores.save(&path).unwrap();

        assert_eq!(HighScores::load(&path), scores);
    }

    #[test]
    fn test_save_to_unwritable_path_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("scores.json");
        assert!(with_entries(&[1]).save(&path).is_err());
    }
}
