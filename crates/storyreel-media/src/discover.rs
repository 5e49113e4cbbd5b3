//! Source folder scanning.
//!
//! Enumerates the audio and image files of one source folder, sorted by a
//! natural (numeric-aware) filename comparison so that `clip-2` sorts before
//! `clip-10`. Asset order is the narrative order: the whole allocation
//! pipeline depends on this ordering being stable.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use storyreel_core::{Result, StoryReelError};
use tracing::debug;
use walkdir::WalkDir;

/// Recognized audio container extensions.
const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav", "m4a", "aac"];

/// Recognized image extensions.
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp"];

/// Kind of a discovered asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetKind {
    Audio,
    Image,
}

/// A media file discovered on disk. Immutable once discovered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    /// Absolute or folder-relative path as found on disk.
    pub path: PathBuf,
    /// Audio or image.
    pub kind: AssetKind,
}

impl Asset {
    /// The bare file name, used as the material display name.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// The ordered contents of one source folder.
#[derive(Debug, Clone, Default)]
pub struct MediaFolder {
    /// The folder that was scanned.
    pub folder: PathBuf,
    /// Audio clips in natural filename order.
    pub audio: Vec<Asset>,
    /// Images in natural filename order.
    pub images: Vec<Asset>,
}

impl MediaFolder {
    /// Scan a folder for audio and image files.
    ///
    /// Only the folder itself is searched (no recursion); hidden files are
    /// ignored. Both lists come back in natural filename order.
    pub fn scan(folder: &Path) -> Result<Self> {
        if !folder.is_dir() {
            return Err(StoryReelError::InvalidParameter(format!(
                "not a directory: {}",
                folder.display()
            )));
        }

        let mut audio = Vec::new();
        let mut images = Vec::new();

        for entry in WalkDir::new(folder)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !entry.file_type().is_file() || is_hidden(path) {
                continue;
            }
            match classify(path) {
                Some(AssetKind::Audio) => audio.push(Asset {
                    path: path.to_path_buf(),
                    kind: AssetKind::Audio,
                }),
                Some(AssetKind::Image) => images.push(Asset {
                    path: path.to_path_buf(),
                    kind: AssetKind::Image,
                }),
                None => {}
            }
        }

        audio.sort_by(|a, b| natural_cmp(&a.file_name(), &b.file_name()));
        images.sort_by(|a, b| natural_cmp(&a.file_name(), &b.file_name()));

        debug!(
            "scanned {}: {} audio, {} images",
            folder.display(),
            audio.len(),
            images.len()
        );

        Ok(Self {
            folder: folder.to_path_buf(),
            audio,
            images,
        })
    }
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .map(|n| n.to_string_lossy().starts_with('.'))
        .unwrap_or(false)
}

fn classify(path: &Path) -> Option<AssetKind> {
    let ext = path.extension()?.to_string_lossy().to_lowercase();
    if AUDIO_EXTENSIONS.contains(&ext.as_str()) {
        Some(AssetKind::Audio)
    } else if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        Some(AssetKind::Image)
    } else {
        None
    }
}

/// Natural (numeric-aware) string comparison.
///
/// Digit runs compare as numbers, everything else compares as lowercased
/// text, so `scene-2.png` sorts before `scene-10.png`.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut ta = tokens(a);
    let mut tb = tokens(b);
    loop {
        match (ta.next(), tb.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                let ord = match (&x, &y) {
                    (Token::Number(n), Token::Number(m)) => n.cmp(m),
                    (Token::Number(_), Token::Text(_)) => Ordering::Less,
                    (Token::Text(_), Token::Number(_)) => Ordering::Greater,
                    (Token::Text(s), Token::Text(t)) => s.cmp(t),
                };
                if ord != Ordering::Equal {
                    return ord;
                }
            }
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Token {
    Number(u64),
    Text(String),
}

fn tokens(s: &str) -> impl Iterator<Item = Token> + '_ {
    let mut chars = s.chars().peekable();
    std::iter::from_fn(move || {
        let first = *chars.peek()?;
        if first.is_ascii_digit() {
            let mut value: u64 = 0;
            while let Some(c) = chars.peek().copied().filter(|c| c.is_ascii_digit()) {
                value = value.saturating_mul(10).saturating_add(c as u64 - '0' as u64);
                chars.next();
            }
            Some(Token::Number(value))
        } else {
            let mut text = String::new();
            while let Some(c) = chars.peek().copied().filter(|c| !c.is_ascii_digit()) {
                text.extend(c.to_lowercase());
                chars.next();
            }
            Some(Token::Text(text))
        }
    })
}
