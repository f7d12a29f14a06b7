//! In-memory session statistics
//!
//! Nothing here is persisted; stats live for one practice session and the
//! host reads snapshots to render score and star displays.

use std::time::Instant;

use parking_lot::RwLock;

use crate::types::Verdict;

/// Points needed per star in the score display
const POINTS_PER_STAR: u32 = 50;

/// Running statistics for one practice session
#[derive(Debug, Clone, Default)]
pub struct SessionStats {
    pub attempts: u64,
    pub correct: u64,
    pub close: u64,
    pub incorrect: u64,
    pub points: u32,
    pub session_start: Option<Instant>,
}

impl SessionStats {
    pub fn new() -> Self {
        Self {
            session_start: Some(Instant::now()),
            ..Default::default()
        }
    }

    /// Get session duration in seconds
    pub fn session_duration_secs(&self) -> u64 {
        self.session_start
            .map(|s| s.elapsed().as_secs())
            .unwrap_or(0)
    }

    /// One star per 50 points
    pub fn stars(&self) -> u32 {
        self.points / POINTS_PER_STAR
    }

    /// Share of attempts judged correct, 0.0 when no attempts yet
    pub fn accuracy(&self) -> f64 {
        if self.attempts == 0 {
            0.0
        } else {
            self.correct as f64 / self.attempts as f64
        }
    }
}

/// Thread-safe recorder the session writes attempts into
#[derive(Debug)]
pub struct StatsRecorder {
    stats: RwLock<SessionStats>,
}

impl StatsRecorder {
    pub fn new() -> Self {
        Self {
            stats: RwLock::new(SessionStats::new()),
        }
    }

    /// Record one graded attempt
    pub fn record(&self, verdict: Verdict, points: u32) {
        let mut stats = self.stats.write();
        stats.attempts += 1;
        stats.points += points;
        match verdict {
            Verdict::Correct => stats.correct += 1,
            Verdict::Close => stats.close += 1,
            Verdict::Incorrect => stats.incorrect += 1,
        }
    }

    /// Get a copy of the current stats
    pub fn snapshot(&self) -> SessionStats {
        self.stats.read().clone()
    }
}

impl Default for StatsRecorder {
    fn default() -> Self {
        Self::new()
    }
}
