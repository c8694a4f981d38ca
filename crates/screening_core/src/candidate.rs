use serde::{Deserialize, Serialize};

pub type BatchId = u64;

/// One parsed resume as produced by a batch processor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateResult {
    /// Position of the source file within its batch.
    pub id: usize,
    pub filename: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub experience: String,
    pub skills: Vec<String>,
    pub software: Vec<String>,
    pub domain: String,
    /// Match score, 0..=100.
    pub score: u8,
}

impl CandidateResult {
    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_score(self.score)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            90.. => ScoreBand::Excellent,
            80..=89 => ScoreBand::Good,
            70..=79 => ScoreBand::Fair,
            _ => ScoreBand::Poor,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoreBand::Excellent => "excellent",
            ScoreBand::Good => "good",
            ScoreBand::Fair => "fair",
            ScoreBand::Poor => "poor",
        }
    }
}
