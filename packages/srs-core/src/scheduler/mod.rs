//! Review State Updater
//!
//! Core rules:
//! - A slow answer (> 4 s) costs 0.05 ease on either branch
//! - Correct: repetitions + 1, ease + (0.06 - penalty), interval tiered by the
//!   new repetition count (1 day, 3 days, then interval * ease)
//! - Incorrect: lapses + 1, repetitions reset, ease - (0.20 + penalty),
//!   interval back to 1 day
//! - Due time is always now + interval days
//!
//! Ease is clamped to [1.3, 2.9] and the interval floored at one day by the
//! shared helpers in [`crate::sanitize`], so the update is total: there is no
//! error path for a well-formed state.
//!
//! Rounding of `interval * ease` is half away from zero (`f64::round`).

use rayon::prelude::*;
use tracing::trace;

use crate::sanitize::{clamp_ease, due_at, floor_interval};
use crate::types::{
    MemoryState, Review, CORRECT_EASE_BONUS, FIRST_INTERVAL_DAYS, LAPSE_EASE_PENALTY,
    LAPSE_INTERVAL_DAYS, SECOND_INTERVAL_DAYS, SLOW_PENALTY, SLOW_RESPONSE_MS,
};

fn slow_penalty(response_ms: i64) -> f64 {
    if response_ms > SLOW_RESPONSE_MS {
        SLOW_PENALTY
    } else {
        0.0
    }
}

/// Compute the next memory state after one review.
///
/// The input is left untouched; `item_id` is carried over unchanged.
pub fn update(
    state: &MemoryState,
    is_correct: bool,
    now_ms: i64,
    response_ms: i64,
) -> MemoryState {
    let penalty = slow_penalty(response_ms);
    let mut next = state.clone();

    if is_correct {
        next.repetitions = state.repetitions.saturating_add(1);
        next.ease = clamp_ease(state.ease + (CORRECT_EASE_BONUS - penalty));
        next.interval_days = match next.repetitions {
            1 => FIRST_INTERVAL_DAYS,
            2 => SECOND_INTERVAL_DAYS,
            _ => floor_interval(state.interval_days as f64 * next.ease),
        };
    } else {
        next.lapses = state.lapses.saturating_add(1);
        next.repetitions = 0;
        next.ease = clamp_ease(state.ease - (LAPSE_EASE_PENALTY + penalty));
        next.interval_days = LAPSE_INTERVAL_DAYS;
    }

    next.due_at_ms = due_at(now_ms, next.interval_days);

    trace!(
        item_id = %next.item_id,
        is_correct,
        ease = next.ease,
        interval_days = next.interval_days,
        "review applied"
    );

    next
}

/// [`update`] driven by a [`Review`] record.
pub fn apply(state: &MemoryState, review: &Review) -> MemoryState {
    update(state, review.is_correct, review.now_ms, review.response_ms)
}

/// Fold a review history, oldest first, into a final state.
pub fn replay(initial: MemoryState, reviews: &[Review]) -> MemoryState {
    reviews
        .iter()
        .fold(initial, |state, review| apply(&state, review))
}

/// Update many independent items in parallel. Output order matches input.
pub fn update_batch(inputs: &[(MemoryState, Review)]) -> Vec<MemoryState> {
    inputs
        .par_iter()
        .map(|(state, review)| apply(state, review))
        .collect()
}
