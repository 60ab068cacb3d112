//! JSON entry points for host bindings.
//!
//! Hosts that hold records as JSON strings (mobile bridges, scripting
//! sidecars, the `srs` binary) call these instead of building the typed
//! records themselves. Decoding problems come back as [`SrsError::Decode`];
//! well-formed input that breaks a precondition comes back as
//! [`SrsError::InvalidArgument`].

use serde::Serialize;
use tracing::debug;

use crate::error::{Result, SrsError};
use crate::sanitize::{
    validate_candidates, validate_limit, validate_now, validate_review, validate_state,
};
use crate::scheduler::update;
use crate::selector::pick_due;
use crate::types::{DueCandidate, MemoryState};

fn encode<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(|e| SrsError::Encode(e.to_string()))
}

/// Decode a state, apply one review and encode the result.
///
/// Missing optional fields take the defaults of [`MemoryState::new`];
/// `itemId` is required.
pub fn update_state_json(
    state_json: &str,
    is_correct: bool,
    now_ms: i64,
    response_ms: i64,
) -> Result<String> {
    let state: MemoryState = serde_json::from_str(state_json)?;
    validate_state(&state)?;
    validate_review(now_ms, response_ms)?;

    let next = update(&state, is_correct, now_ms, response_ms);
    debug!(
        item_id = %next.item_id,
        is_correct,
        interval_days = next.interval_days,
        due_at_ms = next.due_at_ms,
        "state updated"
    );

    encode(&next)
}

/// Decode a candidate list and return the ids of the most urgent ones as a
/// JSON array.
pub fn pick_due_items_json(items_json: &str, now_ms: i64, limit: i64) -> Result<String> {
    let limit = validate_limit(limit)?;
    validate_now(now_ms)?;
    let items: Vec<DueCandidate> = serde_json::from_str(items_json)?;
    validate_candidates(&items)?;

    let picked = pick_due(&items, now_ms, limit);
    debug!(
        candidates = items.len(),
        picked = picked.len(),
        "due items selected"
    );

    encode(&picked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DAY_MS;
    use serde_json::Value;

    #[test]
    fn test_update_state_json_first_review() {
        let input = r#"{"itemId":"kana-a","ease":2.5,"intervalDays":0,
            "repetitions":0,"lapses":0,"dueAtMs":0}"#;
        let output = update_state_json(input, true, 1000, 1000).unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["itemId"], "kana-a");
        assert_eq!(value["repetitions"], 1);
        assert_eq!(value["intervalDays"], 1);
        assert_eq!(value["lapses"], 0);
        assert_eq!(value["dueAtMs"], 1000 + DAY_MS);
        assert!((value["ease"].as_f64().unwrap() - 2.56).abs() < 1e-9);
    }

    #[test]
    fn test_update_state_json_defaults_missing_fields() {
        let output = update_state_json(r#"{"itemId":"x"}"#, false, 0, 0).unwrap();
        let state: MemoryState = serde_json::from_str(&output).unwrap();

        assert_eq!(state.lapses, 1);
        assert!((state.ease - 2.3).abs() < 1e-9);
        assert_eq!(state.due_at_ms, DAY_MS);
    }

    #[test]
    fn test_update_state_json_output_has_every_field() {
        let output = update_state_json(r#"{"itemId":"x"}"#, true, 0, 0).unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();
        let obj = value.as_object().unwrap();

        for key in ["itemId", "ease", "intervalDays", "repetitions", "lapses", "dueAtMs"] {
            assert!(obj.contains_key(key), "missing {key}");
        }
        assert_eq!(obj.len(), 6);
    }

    #[test]
    fn test_update_state_json_decode_errors() {
        assert!(matches!(
            update_state_json("not json", true, 0, 0),
            Err(SrsError::Decode(_))
        ));
        assert!(matches!(
            update_state_json(r#"{"ease":2.5}"#, true, 0, 0),
            Err(SrsError::Decode(_))
        ));
        assert!(matches!(
            update_state_json(r#"{"itemId":"x","lapses":-2}"#, true, 0, 0),
            Err(SrsError::Decode(_))
        ));
    }

    #[test]
    fn test_update_state_json_invalid_arguments() {
        assert!(update_state_json(r#"{"itemId":""}"#, true, 0, 0)
            .unwrap_err()
            .is_invalid_argument());
        assert!(update_state_json(r#"{"itemId":"x"}"#, true, -1, 0)
            .unwrap_err()
            .is_invalid_argument());
        assert!(update_state_json(r#"{"itemId":"x"}"#, true, 0, -5)
            .unwrap_err()
            .is_invalid_argument());
    }

    #[test]
    fn test_pick_due_items_json() {
        let items = r#"[{"itemId":"a","dueAtMs":0,"lapses":0},
            {"itemId":"b","dueAtMs":0,"lapses":3}]"#;
        assert_eq!(pick_due_items_json(items, 1000, 1).unwrap(), r#"["b"]"#);
        assert_eq!(pick_due_items_json(items, 1000, 5).unwrap(), r#"["b","a"]"#);
        assert_eq!(pick_due_items_json(items, 1000, 0).unwrap(), "[]");
    }

    #[test]
    fn test_pick_due_items_json_defaults_and_extra_fields() {
        // lapses and dueAtMs default to 0; unrelated fields are ignored
        let items = r#"[{"itemId":"a","ease":2.1},{"itemId":"b","lapses":1,"repetitions":4}]"#;
        assert_eq!(pick_due_items_json(items, 1000, 2).unwrap(), r#"["b","a"]"#);
    }

    #[test]
    fn test_pick_due_items_json_negative_limit() {
        let err = pick_due_items_json("[]", 0, -1).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_pick_due_items_json_negative_now() {
        let err = pick_due_items_json(r#"[{"itemId":"a","dueAtMs":0}]"#, -5, 1).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_pick_due_items_json_blank_item_id() {
        let err = pick_due_items_json(r#"[{"itemId":""}]"#, 0, 1).unwrap_err();
        assert!(err.is_invalid_argument());

        let err = pick_due_items_json(r#"[{"itemId":"a"},{"itemId":"  "}]"#, 0, 1).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_pick_due_items_json_not_an_array() {
        assert!(matches!(
            pick_due_items_json(r#"{"itemId":"a"}"#, 0, 1),
            Err(SrsError::Decode(_))
        ));
    }
}
