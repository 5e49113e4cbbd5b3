//! Audio duration probing from container metadata.
//!
//! A single metadata read is attempted per file. An unreadable file is a
//! recoverable condition: the resolver falls back to a fixed default and
//! logs a warning, so one corrupt narration clip never aborts a batch.

use lofty::config::ParseOptions;
use lofty::prelude::AudioFile;
use lofty::probe::Probe;
use std::path::Path;
use storyreel_core::Micros;
use tracing::{debug, warn};

/// Duration assumed for audio whose metadata cannot be read.
pub const FALLBACK_DURATION: Micros = Micros::from_secs(3);

/// Outcome of a duration probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedDuration {
    /// Playable duration, exact or fallback.
    pub duration: Micros,
    /// True when metadata was unreadable and [`FALLBACK_DURATION`] was used.
    pub from_fallback: bool,
}

/// Read the playable duration of an audio file, in microseconds.
///
/// Fractional microseconds are truncated. On any read failure the fixed
/// [`FALLBACK_DURATION`] is returned with `from_fallback` set; callers can
/// proceed without checking for errors.
pub fn resolve_duration(path: &Path) -> ResolvedDuration {
    match read_duration(path) {
        Ok(duration) => {
            debug!("probed {}: {}", path.display(), duration);
            ResolvedDuration {
                duration,
                from_fallback: false,
            }
        }
        Err(err) => {
            warn!(
                "could not read audio duration from {}: {err}; using {}",
                path.display(),
                FALLBACK_DURATION
            );
            ResolvedDuration {
                duration: FALLBACK_DURATION,
                from_fallback: true,
            }
        }
    }
}

fn read_duration(path: &Path) -> Result<Micros, lofty::error::LoftyError> {
    let tagged = Probe::open(path)?
        .options(ParseOptions::new().read_properties(true))
        .read()?;
    let secs = tagged.properties().duration().as_secs_f64();
    Ok(Micros::from_secs_f64(secs))
}
