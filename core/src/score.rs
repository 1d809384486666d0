use crate::AttemptCount;

/// Persistence for the best score across page loads or process runs.
pub trait BestScoreStore {
    type Error: core::fmt::Debug;

    fn load_best(&self) -> Result<Option<AttemptCount>, Self::Error>;

    fn save_best(&mut self, attempts: AttemptCount) -> Result<(), Self::Error>;
}

/// Store that only lives as long as the value itself.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryScoreStore {
    best: Option<AttemptCount>,
}

impl MemoryScoreStore {
    pub const fn new(best: Option<AttemptCount>) -> Self {
        Self { best }
    }

    pub const fn best(&self) -> Option<AttemptCount> {
        self.best
    }
}

impl BestScoreStore for MemoryScoreStore {
    type Error = core::convert::Infallible;

    fn load_best(&self) -> Result<Option<AttemptCount>, Self::Error> {
        Ok(self.best)
    }

    fn save_best(&mut self, attempts: AttemptCount) -> Result<(), Self::Error> {
        self.best = Some(attempts);
        Ok(())
    }
}

/// Best score after a game won in `attempts`; no previous best is not the same as a best of 0.
pub const fn best_of(previous: Option<AttemptCount>, attempts: AttemptCount) -> AttemptCount {
    match previous {
        Some(best) if best < attempts => best,
        _ => attempts,
    }
}
