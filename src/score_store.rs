/// High-score persistence: a single integer, loaded at startup and saved at
/// teardown.

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::ScoreStoreError;

const SCORE_FILE: &str = "high_score";

pub trait ScoreStore {
    fn load(&self) -> Result<u32, ScoreStoreError>;
    fn save(&mut self, score: u32) -> Result<(), ScoreStoreError>;

    /// Load, treating any failure as "no high score yet".
    fn load_or_zero(&self) -> u32 {
        self.load().unwrap_or_else(|err| {
            warn!(%err, "could not load high score, starting from 0");
            0
        })
    }
}

/// Plain-text file holding the score.
#[derive(Clone, Debug)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `high_score` inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(SCORE_FILE))
    }

    /// Platform data directory (`~/.local/share/dino_runner` on Linux).
    pub fn default_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("dino_runner")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for FileScoreStore {
    /// A missing file is a fresh install and loads as 0.
    fn load(&self) -> Result<u32, ScoreStoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(s) => s.trim().parse().map_err(ScoreStoreError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(0),
            Err(err) => Err(ScoreStoreError::Read(err)),
        }
    }

    fn save(&mut self, score: u32) -> Result<(), ScoreStoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(ScoreStoreError::Write)?;
        }
        std::fs::write(&self.path, score.to_string()).map_err(ScoreStoreError::Write)
    }
}

/// In-memory store for headless runs and tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryScoreStore {
    score: u32,
    saves: usize,
}

impl MemoryScoreStore {
    pub fn new(score: u32) -> Self {
        Self { score, saves: 0 }
    }

    /// How many times `save` was called.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&self) -> Result<u32, ScoreStoreError> {
        Ok(self.score)
    }

    fn save(&mut self, score: u32) -> Result<(), ScoreStoreError> {
        self.score = score;
        self.saves += 1;
        Ok(())
    }
}
