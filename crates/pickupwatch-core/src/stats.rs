use chrono::{DateTime, Local, TimeDelta};

use crate::probe::ProbeResult;

/// Counters accumulated over the life of one watch run.
///
/// Owned by the run loop and threaded through each round by value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunStats {
    /// Rounds fully resolved so far.
    pub rounds: u64,
    /// Rounds in which at least one variant was available.
    pub rounds_with_hits: u64,
    /// Individual (variant, round) availability hits.
    pub hits: u64,
    pub started_at: DateTime<Local>,
}

impl RunStats {
    #[must_use]
    pub fn new(started_at: DateTime<Local>) -> Self {
        Self {
            rounds: 0,
            rounds_with_hits: 0,
            hits: 0,
            started_at,
        }
    }

    /// Folds one completed round into the counters.
    #[must_use]
    pub fn record_round(mut self, results: &[ProbeResult]) -> Self {
        let round_hits = results.iter().filter(|r| r.available()).count() as u64;
        self.rounds += 1;
        self.hits += round_hits;
        if round_hits > 0 {
            self.rounds_with_hits += 1;
        }
        self
    }

    #[must_use]
    pub fn elapsed(&self, now: DateTime<Local>) -> TimeDelta {
        now - self.started_at
    }

    /// Elapsed time as `H:MM:SS`, truncated to whole seconds.
    #[must_use]
    pub fn format_elapsed(&self, now: DateTime<Local>) -> String {
        let total = self.elapsed(now).num_seconds().max(0);
        let hours = total / 3600;
        let minutes = (total % 3600) / 60;
        let seconds = total % 60;
        format!("{hours}:{minutes:02}:{seconds:02}")
    }
}
