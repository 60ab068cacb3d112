//! Due-Item Selector
//!
//! Urgency score per candidate:
//!   score = max(0, now - dueAt) + lapses * DAY_MS / 4
//!
//! Overdue time dominates; every historical lapse adds a quarter-day of
//! virtual overdueness so chronically failed items surface before they are
//! strictly due. Scores are whole milliseconds, so the quarter-day bonus is
//! exact and ranking never depends on float comparison.
//!
//! Candidates are ordered by descending score with a stable sort: equal
//! scores keep their input order.

use serde::{Deserialize, Serialize};

use crate::types::{DueCandidate, LAPSE_BONUS_MS};

/// A candidate with its computed urgency
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredCandidate {
    pub item_id: String,
    pub score: i64,
    /// Time past due (0 if not yet due)
    pub overdue_ms: i64,
    pub lapses: u32,
}

/// Urgency of one candidate at `now_ms`. Saturates instead of overflowing.
pub fn urgency_score(candidate: &DueCandidate, now_ms: i64) -> i64 {
    overdue_ms(candidate, now_ms).saturating_add(lapse_bonus(candidate.lapses))
}

fn overdue_ms(candidate: &DueCandidate, now_ms: i64) -> i64 {
    now_ms.saturating_sub(candidate.due_at_ms).max(0)
}

fn lapse_bonus(lapses: u32) -> i64 {
    (lapses as i64).saturating_mul(LAPSE_BONUS_MS)
}

/// Full ranking, most urgent first.
pub fn rank_due(items: &[DueCandidate], now_ms: i64) -> Vec<ScoredCandidate> {
    let mut scored: Vec<ScoredCandidate> = items
        .iter()
        .map(|candidate| ScoredCandidate {
            item_id: candidate.item_id.clone(),
            score: urgency_score(candidate, now_ms),
            overdue_ms: overdue_ms(candidate, now_ms),
            lapses: candidate.lapses,
        })
        .collect();

    // sort_by is stable: ties keep input order
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored
}

/// Ids of the `limit` most urgent candidates.
///
/// Returns everything (ranked) when `limit` exceeds the number of items and
/// nothing when `limit` is 0. A negative limit from an untyped caller is
/// rejected by [`crate::sanitize::validate_limit`] before reaching here.
pub fn pick_due(items: &[DueCandidate], now_ms: i64, limit: usize) -> Vec<String> {
    if limit == 0 || items.is_empty() {
        return Vec::new();
    }

    rank_due(items, now_ms)
        .into_iter()
        .take(limit)
        .map(|scored| scored.item_id)
        .collect()
}
