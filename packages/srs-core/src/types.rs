use serde::{Deserialize, Serialize};

// ==================== Constants ====================

/// Milliseconds in one day (24 * 60 * 60 * 1000)
pub const DAY_MS: i64 = 86_400_000;

/// Ease assigned to a never-reviewed item
pub const DEFAULT_EASE: f64 = 2.5;
pub const MIN_EASE: f64 = 1.3;
pub const MAX_EASE: f64 = 2.9;

/// Answers slower than this count as slow
pub const SLOW_RESPONSE_MS: i64 = 4000;
/// Ease lost (or not gained) on a slow answer
pub const SLOW_PENALTY: f64 = 0.05;
/// Ease gained on a correct answer before the slow penalty
pub const CORRECT_EASE_BONUS: f64 = 0.06;
/// Ease lost on an incorrect answer before the slow penalty
pub const LAPSE_EASE_PENALTY: f64 = 0.20;

/// Interval after the first correct review in a streak
pub const FIRST_INTERVAL_DAYS: u32 = 1;
/// Interval after the second correct review in a streak
pub const SECOND_INTERVAL_DAYS: u32 = 3;
/// Interval after an incorrect review
pub const LAPSE_INTERVAL_DAYS: u32 = 1;

/// Fraction of a day of overdueness credited per historical lapse
pub const LAPSE_BONUS_DAYS: f64 = 0.25;
/// `LAPSE_BONUS_DAYS` expressed in whole milliseconds
pub const LAPSE_BONUS_MS: i64 = DAY_MS / 4;

// ==================== Records ====================

/// Per-item memory state, owned by the host and replaced wholesale after
/// every review.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryState {
    pub item_id: String,
    /// Difficulty factor in [MIN_EASE, MAX_EASE]
    #[serde(default = "default_ease")]
    pub ease: f64,
    /// Days until the next review; 0 only before the first successful review
    #[serde(default)]
    pub interval_days: u32,
    /// Consecutive correct reviews since the last lapse
    #[serde(default)]
    pub repetitions: u32,
    /// Total incorrect reviews ever
    #[serde(default)]
    pub lapses: u32,
    /// Next scheduled review (ms since epoch)
    #[serde(default)]
    pub due_at_ms: i64,
}

fn default_ease() -> f64 {
    DEFAULT_EASE
}

impl MemoryState {
    /// State for an item scheduled for the first time.
    pub fn new(item_id: impl Into<String>) -> Self {
        Self {
            item_id: item_id.into(),
            ease: DEFAULT_EASE,
            interval_days: 0,
            repetitions: 0,
            lapses: 0,
            due_at_ms: 0,
        }
    }

    /// True until the item has been answered correctly at least once.
    pub fn is_new(&self) -> bool {
        self.interval_days == 0
    }

    pub fn candidate(&self) -> DueCandidate {
        DueCandidate {
            item_id: self.item_id.clone(),
            due_at_ms: self.due_at_ms,
            lapses: self.lapses,
        }
    }
}

/// Outcome of a single review
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub is_correct: bool,
    /// Review time (ms since epoch)
    pub now_ms: i64,
    /// How long the learner took to answer
    pub response_ms: i64,
}

impl Review {
    pub fn correct(now_ms: i64, response_ms: i64) -> Self {
        Self {
            is_correct: true,
            now_ms,
            response_ms,
        }
    }

    pub fn incorrect(now_ms: i64, response_ms: i64) -> Self {
        Self {
            is_correct: false,
            now_ms,
            response_ms,
        }
    }
}

/// Due metadata for one item, the only input the selector needs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DueCandidate {
    pub item_id: String,
    #[serde(default)]
    pub due_at_ms: i64,
    #[serde(default)]
    pub lapses: u32,
}

impl DueCandidate {
    pub fn new(item_id: impl Into<String>, due_at_ms: i64, lapses: u32) -> Self {
        Self {
            item_id: item_id.into(),
            due_at_ms,
            lapses,
        }
    }
}

impl From<&MemoryState> for DueCandidate {
    fn from(state: &MemoryState) -> Self {
        state.candidate()
    }
}
