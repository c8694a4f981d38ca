use std::collections::VecDeque;
use std::sync::{mpsc, Mutex};
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use screening_core::{BatchId, CandidateResult, Stage, UploadedFile};
use screening_logging::screen_debug;

use crate::{BatchProgress, EngineEvent, ProcessError};

pub const SIMULATED_SKILLS: [&str; 5] = ["JavaScript", "React", "Node.js", "Python", "SQL"];
pub const SIMULATED_SOFTWARE: [&str; 4] = ["VS Code", "Git", "Docker", "AWS"];
pub const SIMULATED_DOMAIN: &str = "Full Stack Development";

const MIN_SCORE: u8 = 70;
const MAX_SCORE: u8 = 99;

pub trait ProgressSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelProgressSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelProgressSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl ProgressSink for ChannelProgressSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

/// Turns an accepted file set into one candidate record per file.
///
/// The simulator and a real parsing service share this contract, so the
/// presentation layer does not care which one is wired in.
#[async_trait::async_trait]
pub trait BatchProcessor: Send + Sync {
    async fn process(
        &self,
        batch_id: BatchId,
        files: &[UploadedFile],
        sink: &dyn ProgressSink,
    ) -> Result<Vec<CandidateResult>, ProcessError>;
}

/// Source of match scores for simulated candidates.
pub trait ScoreSource: Send + Sync {
    fn next_score(&self) -> u8;
}

/// Uniform scores in 70..=99.
pub struct RandomScores {
    rng: Mutex<StdRng>,
}

impl RandomScores {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomScores {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreSource for RandomScores {
    fn next_score(&self) -> u8 {
        match self.rng.lock() {
            Ok(mut rng) => rng.gen_range(MIN_SCORE..=MAX_SCORE),
            Err(poisoned) => poisoned.into_inner().gen_range(MIN_SCORE..=MAX_SCORE),
        }
    }
}

/// Replays a fixed list of scores, then repeats the last one.
pub struct FixedScores {
    scores: Mutex<VecDeque<u8>>,
    last: u8,
}

impl FixedScores {
    pub fn new(scores: impl IntoIterator<Item = u8>) -> Self {
        let scores: VecDeque<u8> = scores.into_iter().collect();
        let last = scores.back().copied().unwrap_or(MIN_SCORE);
        Self {
            scores: Mutex::new(scores),
            last,
        }
    }
}

impl ScoreSource for FixedScores {
    fn next_score(&self) -> u8 {
        self.scores
            .lock()
            .ok()
            .and_then(|mut scores| scores.pop_front())
            .unwrap_or(self.last)
    }
}

#[derive(Debug, Clone)]
pub struct SimulatorSettings {
    /// Artificial latency for a whole batch.
    pub delay: Duration,
}

impl Default for SimulatorSettings {
    fn default() -> Self {
        Self {
            delay: Duration::from_secs(3),
        }
    }
}

/// Stand-in for the resume parsing backend: waits, then fabricates records.
pub struct SimulatedProcessor {
    settings: SimulatorSettings,
    scores: Box<dyn ScoreSource>,
}

impl SimulatedProcessor {
    pub fn new(settings: SimulatorSettings) -> Self {
        Self::with_scores(settings, RandomScores::new())
    }

    pub fn with_scores(settings: SimulatorSettings, scores: impl ScoreSource + 'static) -> Self {
        Self {
            settings,
            scores: Box::new(scores),
        }
    }
}

#[async_trait::async_trait]
impl BatchProcessor for SimulatedProcessor {
    async fn process(
        &self,
        batch_id: BatchId,
        files: &[UploadedFile],
        sink: &dyn ProgressSink,
    ) -> Result<Vec<CandidateResult>, ProcessError> {
        if files.is_empty() {
            return Err(ProcessError::EmptyBatch);
        }

        let emit = |stage| sink.emit(EngineEvent::Progress(BatchProgress { batch_id, stage }));

        // The delay is split across the two visible stages.
        let half = self.settings.delay / 2;
        emit(Stage::Extracting);
        tokio::time::sleep(half).await;
        emit(Stage::Analyzing);
        tokio::time::sleep(self.settings.delay - half).await;

        let results: Vec<_> = files
            .iter()
            .enumerate()
            .map(|(index, file)| simulated_candidate(index, &file.name, self.scores.next_score()))
            .collect();
        screen_debug!("batch {} simulated {} candidates", batch_id, results.len());
        emit(Stage::Done);
        Ok(results)
    }
}

/// The record fabricated for the file at `index` within its batch.
pub fn simulated_candidate(index: usize, filename: &str, score: u8) -> CandidateResult {
    let ordinal = index + 1;
    CandidateResult {
        id: index,
        filename: filename.to_string(),
        name: format!("Candidate {ordinal}"),
        email: format!("candidate{ordinal}@email.com"),
        phone: format!("+1234567890{index}"),
        experience: format!("{} years", 2 + index),
        skills: SIMULATED_SKILLS.iter().map(|s| s.to_string()).collect(),
        software: SIMULATED_SOFTWARE.iter().map(|s| s.to_string()).collect(),
        domain: SIMULATED_DOMAIN.to_string(),
        score,
    }
}
