//! Document finalization.
//!
//! Stamps document-level metadata: the total duration (the sum of the
//! narration track's segment durations), a fresh document identifier,
//! wall-clock create/update timestamps, and the canvas configuration from
//! the static preset table.

use chrono::Utc;
use storyreel_core::{Id, Micros};
use storyreel_draft::Draft;
use tracing::debug;

use crate::config::BuildConfig;

/// Finalize the document and return its total duration.
///
/// The total is derived purely from the narration track, so re-running
/// finalization on an unchanged document yields the same duration. The
/// identifier and timestamps are freshness metadata for the consuming
/// application and change on every call.
pub fn finalize(draft: &mut Draft, config: &BuildConfig, narration_track: &Id) -> Micros {
    let total = draft
        .track(narration_track)
        .map(|t| t.duration_sum())
        .unwrap_or(Micros::ZERO);

    draft.duration = total;
    draft.draft_name = config.draft_name.clone();
    draft.canvas_config = config.canvas.config();
    draft.id = Id::generate();

    let now = Utc::now().timestamp_micros();
    draft.create_time = now;
    draft.update_time = now;

    debug!("finalized draft {:?}: total {total}", draft.draft_name);
    total
}
