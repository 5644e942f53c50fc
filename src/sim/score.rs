//! Score and in-memory high score

/// Outcome of closing out a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Score the run ended with
    pub score: u32,
    /// High score after reconciliation
    pub high_score: u32,
    /// Whether this run set a new high score
    pub new_high_score: bool,
}

/// Current score plus the best score seen this process.
///
/// The high score never decreases and is not persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreBoard {
    score: u32,
    high_score: u32,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// One obstacle cleared
    pub fn increment(&mut self) -> u32 {
        self.score = self.score.saturating_add(1);
        self.score
    }

    /// Fold the current score into the high score and start over at zero
    pub fn close_run(&mut self) -> RunSummary {
        let score = self.score;
        let new_high_score = score > self.high_score;
        if new_high_score {
            self.high_score = score;
        }
        self.score = 0;
        RunSummary {
            score,
            high_score: self.high_score,
            new_high_score,
        }
    }
}
