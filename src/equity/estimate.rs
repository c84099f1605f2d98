use crate::Probability;
use serde::Deserialize;
use serde::Serialize;

/// Tally of winning trials over all trials run for one estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Estimate {
    wins: usize,
    trials: usize,
}

impl Estimate {
    pub fn wins(&self) -> usize {
        self.wins
    }
    pub fn trials(&self) -> usize {
        self.trials
    }
    /// wins over trials, in [0, 1]. display rounding is the caller's job.
    pub fn probability(&self) -> Probability {
        self.wins as Probability / self.trials as Probability
    }
}

impl From<(usize, usize)> for Estimate {
    fn from((wins, trials): (usize, usize)) -> Self {
        assert!(trials > 0);
        assert!(wins <= trials);
        Self { wins, trials }
    }
}

impl std::fmt::Display for Estimate {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.wins, self.trials)
    }
}
