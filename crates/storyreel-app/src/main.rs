//! StoryReel - batch draft generator
//!
//! Turns a folder of narration audio and still images into an editor draft
//! document, cloned from a template and written with a `.bak` sibling.

use anyhow::{bail, Context, Result};
use std::path::PathBuf;
use storyreel_engine::{synthesize, BuildConfig};
use storyreel_media::MediaFolder;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut args = std::env::args().skip(1);
    let (Some(template), Some(source), Some(output)) = (args.next(), args.next(), args.next())
    else {
        bail!("usage: storyreel <template.json> <media-folder> <output-folder> [draft-name]");
    };
    let template = PathBuf::from(template);
    let source = PathBuf::from(source);
    let output = PathBuf::from(output);

    let draft_name = args.next().unwrap_or_else(|| {
        source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "untitled draft".to_string())
    });

    info!("StoryReel starting: {draft_name}");

    let media = MediaFolder::scan(&source)
        .with_context(|| format!("scanning {}", source.display()))?;
    info!(
        "found {} audio clip(s), {} image(s)",
        media.audio.len(),
        media.images.len()
    );

    let config = BuildConfig::new(&draft_name);
    let (draft, report) = synthesize(&template, &media, &config)
        .with_context(|| format!("synthesizing draft {draft_name}"))?;

    let draft_dir = output.join(&draft_name);
    let written = draft
        .save_with_backup(&draft_dir)
        .with_context(|| format!("writing draft to {}", draft_dir.display()))?;

    println!("{report}");
    println!("draft written to {}", written.display());
    Ok(())
}
