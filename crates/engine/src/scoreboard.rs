//! Flat high-score list: one integer per line, highest first.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use harold_core::types::HIGH_SCORE_ROWS;

#[derive(Debug, Error)]
pub enum ScoreboardError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: not a score: {value:?}")]
    Parse { line: usize, value: String },
}

pub type Result<T> = std::result::Result<T, ScoreboardError>;

/// Parse a scoreboard file body. Blank lines are skipped.
pub fn parse_scores(body: &str) -> Result<Vec<i32>> {
    let mut scores = Vec::new();
    for (index, raw) in body.lines().enumerate() {
        let value = raw.trim();
        if value.is_empty() {
            continue;
        }
        let score = value.parse().map_err(|_| ScoreboardError::Parse {
            line: index + 1,
            value: value.to_string(),
        })?;
        scores.push(score);
    }
    Ok(scores)
}

/// Read a scoreboard file. A missing file is an empty list.
pub fn load_scores(path: &Path) -> Result<Vec<i32>> {
    match fs::read_to_string(path) {
        Ok(body) => parse_scores(&body),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
        Err(err) => Err(err.into()),
    }
}

/// High scores, optionally persisted to a file.
#[derive(Debug, Clone, Default)]
pub struct Scoreboard {
    path: Option<PathBuf>,
    scores: Vec<i32>,
}

impl Scoreboard {
    pub fn in_memory() -> Self {
        Self::default()
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            scores: Vec::new(),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// All known scores, highest first.
    pub fn scores(&self) -> &[i32] {
        &self.scores
    }

    /// The rows shown on the game-over screen.
    pub fn top(&self) -> &[i32] {
        &self.scores[..self.scores.len().min(HIGH_SCORE_ROWS)]
    }

    /// Numbered rows: `1) 120`, `2) 90`, ...
    pub fn rows(&self) -> Vec<String> {
        self.top()
            .iter()
            .enumerate()
            .map(|(i, score)| format!("{}) {}", i + 1, score))
            .collect()
    }

    /// Add a finished game's score.
    ///
    /// The file is re-read first so scores written by other runs are kept.
    /// The in-memory list is updated even when the file cannot be read or
    /// written; the error is returned for the caller to report.
    pub fn record(&mut self, score: i32) -> Result<()> {
        let mut outcome = Ok(());

        if let Some(path) = &self.path {
            match load_scores(path) {
                Ok(existing) => self.scores = existing,
                Err(err) => outcome = Err(err),
            }
        }

        self.scores.push(score);
        self.scores.sort_unstable_by(|a, b| b.cmp(a));

        if outcome.is_ok() {
            if let Some(path) = &self.path {
                outcome = fs::write(path, self.render_file()).map_err(ScoreboardError::from);
            }
        }
        outcome
    }

    fn render_file(&self) -> String {
        let mut body = String::new();
        for score in &self.scores {
            body.push_str(&score.to_string());
            body.push('\n');
        }
        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_skips_blanks_and_reports_bad_lines() {
        assert_eq!(parse_scores("30\n\n-10\n 5 \n").unwrap(), vec![30, -10, 5]);

        let err = parse_scores("10\nten\n").unwrap_err();
        match err {
            ScoreboardError::Parse { line, value } => {
                assert_eq!(line, 2);
                assert_eq!(value, "ten");
            }
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn record_sorts_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.txt");
        fs::write(&path, "20\n50\n").unwrap();

        let mut board = Scoreboard::with_path(&path);
        board.record(30).unwrap();
        assert_eq!(board.scores(), &[50, 30, 20]);
        assert_eq!(fs::read_to_string(&path).unwrap(), "50\n30\n20\n");
        assert_eq!(board.rows(), vec!["1) 50", "2) 30", "3) 20"]);
    }

    #[test]
    fn missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fresh.txt");
        let mut board = Scoreboard::with_path(&path);
        board.record(-10).unwrap();
        assert_eq!(load_scores(&path).unwrap(), vec![-10]);
    }

    #[test]
    fn corrupt_file_is_reported_but_score_kept() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.txt");
        fs::write(&path, "12\noops\n").unwrap();

        let mut board = Scoreboard::with_path(&path);
        assert!(matches!(
            board.record(40),
            Err(ScoreboardError::Parse { line: 2, .. })
        ));
        assert_eq!(board.scores(), &[40]);
        // The unreadable file is left alone.
        assert_eq!(fs::read_to_string(&path).unwrap(), "12\noops\n");
    }

    #[test]
    fn only_top_rows_are_shown() {
        let mut board = Scoreboard::in_memory();
        for score in 0..15 {
            board.record(score * 10).unwrap();
        }
        assert_eq!(board.scores().len(), 15);
        assert_eq!(board.top().len(), HIGH_SCORE_ROWS);
        assert_eq!(board.top()[0], 140);
        assert!(board.path().is_none());
    }
}
