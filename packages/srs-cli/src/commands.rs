use std::io::Read;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing::info;

use srs_core::sanitize::{validate_candidates, validate_now, validate_state};
use srs_core::{
    pick_due_items_json, rank_due, update_state_json, DueCandidate, MemoryState, SrsError,
};

#[derive(Parser, Debug)]
#[command(name = "srs", about = "Spaced-repetition scheduler over JSON records", version)]
pub struct Cli {
    /// Indent JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the initial state for a never-reviewed item
    New {
        /// Item identifier
        item_id: String,
    },

    /// Apply one review to a memory state
    Update {
        /// The answer was correct
        #[arg(long, conflicts_with = "incorrect", required_unless_present = "incorrect")]
        correct: bool,
        /// The answer was wrong
        #[arg(long)]
        incorrect: bool,
        /// Review time in ms since epoch (default: now)
        #[arg(long, allow_negative_numbers = true)]
        now_ms: Option<i64>,
        /// Time the learner took to answer, in ms
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        response_ms: i64,
        /// State JSON (default: read from stdin)
        #[arg(long)]
        state: Option<String>,
    },

    /// Print the ids of the most urgent items
    PickDue {
        /// Maximum number of ids to return
        #[arg(long, allow_negative_numbers = true)]
        limit: i64,
        /// Selection time in ms since epoch (default: now)
        #[arg(long, allow_negative_numbers = true)]
        now_ms: Option<i64>,
        /// JSON array of {itemId, dueAtMs, lapses} (default: read from stdin)
        #[arg(long)]
        items: Option<String>,
    },

    /// Print every item with its urgency score, most urgent first
    Rank {
        /// Selection time in ms since epoch (default: now)
        #[arg(long, allow_negative_numbers = true)]
        now_ms: Option<i64>,
        /// JSON array of {itemId, dueAtMs, lapses} (default: read from stdin)
        #[arg(long)]
        items: Option<String>,
    },
}

fn wall_clock_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

fn inline_or_read<R: Read>(inline: &Option<String>, mut input: R) -> Result<String> {
    match inline {
        Some(json) => Ok(json.clone()),
        None => {
            let mut buf = String::new();
            input
                .read_to_string(&mut buf)
                .context("failed to read JSON from stdin")?;
            Ok(buf)
        }
    }
}

fn render(json: String, pretty: bool) -> Result<String> {
    if !pretty {
        return Ok(json);
    }
    let value: Value = serde_json::from_str(&json)?;
    Ok(serde_json::to_string_pretty(&value)?)
}

/// Execute one command and return what should be written to stdout.
pub fn run<R: Read>(cli: &Cli, input: R) -> Result<String> {
    let json = match &cli.command {
        Command::New { item_id } => {
            let state = MemoryState::new(item_id.as_str());
            validate_state(&state)?;
            serde_json::to_string(&state)?
        }
        Command::Update {
            correct,
            incorrect: _,
            now_ms,
            response_ms,
            state,
        } => {
            let state_json = inline_or_read(state, input)?;
            let now_ms = now_ms.unwrap_or_else(wall_clock_ms);
            info!(is_correct = *correct, now_ms, response_ms, "applying review");
            update_state_json(&state_json, *correct, now_ms, *response_ms)
                .context("failed to update state")?
        }
        Command::PickDue {
            limit,
            now_ms,
            items,
        } => {
            let items_json = inline_or_read(items, input)?;
            let now_ms = now_ms.unwrap_or_else(wall_clock_ms);
            pick_due_items_json(&items_json, now_ms, *limit).context("failed to pick due items")?
        }
        Command::Rank { now_ms, items } => {
            let items_json = inline_or_read(items, input)?;
            let now_ms = now_ms.unwrap_or_else(wall_clock_ms);
            validate_now(now_ms)?;
            let candidates: Vec<DueCandidate> = serde_json::from_str(&items_json)
                .map_err(SrsError::from)
                .context("failed to decode items")?;
            validate_candidates(&candidates)?;
            serde_json::to_string(&rank_due(&candidates, now_ms))?
        }
    };

    render(json, cli.pretty)
}

/// 2 for caller mistakes (bad arguments), 1 for everything else.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    let invalid = err
        .chain()
        .filter_map(|cause| cause.downcast_ref::<SrsError>())
        .any(SrsError::is_invalid_argument);
    if invalid {
        2
    } else {
        1
    }
}
