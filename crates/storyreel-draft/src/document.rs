//! The top-level draft document: materials catalog, tracks, canvas,
//! timestamps, and file persistence.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::path::{Path, PathBuf};
use storyreel_core::{Id, Micros, Result, StoryReelError};
use tracing::{debug, info};

use crate::material::{AnimationMaterial, AudioMaterial, EffectMaterial, VisualMaterial};
use crate::sidecar::{
    CanvasColor, Loudness, MaterialColor, PlaceholderInfo, SoundChannelMapping, Speed,
    VocalSeparation,
};
use crate::track::{Track, TrackKind};

/// Primary document file name inside a draft directory.
pub const DRAFT_FILE_NAME: &str = "draft_content.json";

/// Backup sibling written next to the primary file.
pub const DRAFT_BACKUP_FILE_NAME: &str = "draft_content.json.bak";

/// Canvas geometry stamped into the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasConfig {
    pub height: u32,
    pub ratio: String,
    pub width: u32,
}

/// Static canvas configuration table. No computation: each preset is a
/// fixed width/height/ratio triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CanvasPreset {
    /// 1920x1080, "16:9"
    Landscape1080p,
    /// 1080x1920, "9:16"
    Portrait1080p,
    /// 1080x1080, "1:1"
    Square1080,
}

impl CanvasPreset {
    /// The fixed configuration for this preset.
    pub fn config(self) -> CanvasConfig {
        let (width, height, ratio) = match self {
            Self::Landscape1080p => (1920, 1080, "16:9"),
            Self::Portrait1080p => (1080, 1920, "9:16"),
            Self::Square1080 => (1080, 1080, "1:1"),
        };
        CanvasConfig {
            height,
            ratio: ratio.to_string(),
            width,
        }
    }
}

/// The materials catalog, keyed by kind. Array names are the downstream
/// object keys; `texts` is carried opaquely so template text boilerplate
/// survives a rebuild untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MaterialCatalog {
    #[serde(default)]
    pub audios: Vec<AudioMaterial>,
    #[serde(default)]
    pub canvases: Vec<CanvasColor>,
    #[serde(default)]
    pub loudnesses: Vec<Loudness>,
    #[serde(default)]
    pub material_animations: Vec<AnimationMaterial>,
    #[serde(default)]
    pub material_colors: Vec<MaterialColor>,
    #[serde(default)]
    pub placeholders: Vec<PlaceholderInfo>,
    #[serde(default)]
    pub sound_channel_mappings: Vec<SoundChannelMapping>,
    #[serde(default)]
    pub speeds: Vec<Speed>,
    #[serde(default)]
    pub texts: Vec<serde_json::Value>,
    #[serde(default)]
    pub video_effects: Vec<EffectMaterial>,
    #[serde(default)]
    pub videos: Vec<VisualMaterial>,
    #[serde(default)]
    pub vocal_separations: Vec<VocalSeparation>,
}

impl MaterialCatalog {
    /// Iterate over every identifier in the catalog.
    pub fn all_ids(&self) -> impl Iterator<Item = &Id> {
        self.audios
            .iter()
            .map(|m| &m.id)
            .chain(self.videos.iter().map(|m| &m.id))
            .chain(self.video_effects.iter().map(|m| &m.id))
            .chain(self.material_animations.iter().map(|m| &m.id))
            .chain(self.speeds.iter().map(|m| &m.id))
            .chain(self.placeholders.iter().map(|m| &m.id))
            .chain(self.canvases.iter().map(|m| &m.id))
            .chain(self.material_colors.iter().map(|m| &m.id))
            .chain(self.loudnesses.iter().map(|m| &m.id))
            .chain(self.sound_channel_mappings.iter().map(|m| &m.id))
            .chain(self.vocal_separations.iter().map(|m| &m.id))
    }

    /// Whether any catalog entry carries this identifier.
    pub fn contains(&self, id: &Id) -> bool {
        self.all_ids().any(|existing| existing == id)
    }

    /// Instantiate the full default sidecar set for one video segment and
    /// return the references in attachment order: speed, placeholder,
    /// canvas color, material color, loudness, sound channel mapping,
    /// vocal separation. The order is positional downstream.
    pub fn new_video_sidecar_refs(&mut self) -> SmallVec<[Id; 8]> {
        let speed = Speed::unit();
        let placeholder = PlaceholderInfo::empty();
        let canvas = CanvasColor::none();
        let color = MaterialColor::disabled();
        let loudness = Loudness::neutral();
        let mapping = SoundChannelMapping::default_mapping();
        let separation = VocalSeparation::off();

        let refs = SmallVec::from_vec(vec![
            speed.id.clone(),
            placeholder.id.clone(),
            canvas.id.clone(),
            color.id.clone(),
            loudness.id.clone(),
            mapping.id.clone(),
            separation.id.clone(),
        ]);

        self.speeds.push(speed);
        self.placeholders.push(placeholder);
        self.canvases.push(canvas);
        self.material_colors.push(color);
        self.loudnesses.push(loudness);
        self.sound_channel_mappings.push(mapping);
        self.vocal_separations.push(separation);
        refs
    }

    /// Instantiate the default sidecar set for one audio segment and return
    /// the references in attachment order: speed, loudness, sound channel
    /// mapping, vocal separation.
    pub fn new_audio_sidecar_refs(&mut self) -> SmallVec<[Id; 8]> {
        let speed = Speed::unit();
        let loudness = Loudness::neutral();
        let mapping = SoundChannelMapping::default_mapping();
        let separation = VocalSeparation::off();

        let refs = SmallVec::from_vec(vec![
            speed.id.clone(),
            loudness.id.clone(),
            mapping.id.clone(),
            separation.id.clone(),
        ]);

        self.speeds.push(speed);
        self.loudnesses.push(loudness);
        self.sound_channel_mappings.push(mapping);
        self.vocal_separations.push(separation);
        refs
    }
}

/// The top-level draft document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Draft {
    /// Canvas geometry. Required in templates: a template without canvas
    /// defaults cannot produce a usable document.
    pub canvas_config: CanvasConfig,
    #[serde(default)]
    pub create_time: i64,
    #[serde(default)]
    pub draft_name: String,
    #[serde(default)]
    pub duration: Micros,
    #[serde(default = "Id::generate")]
    pub id: Id,
    #[serde(default)]
    pub materials: MaterialCatalog,
    #[serde(default)]
    pub tracks: Vec<Track>,
    #[serde(default)]
    pub update_time: i64,
}

impl Draft {
    /// Load a template document.
    ///
    /// A missing or malformed template is fatal: nothing can be produced
    /// without the structural boilerplate, so the pipeline aborts before
    /// any output is written.
    pub fn load_template(path: &Path) -> Result<Self> {
        let data = std::fs::read(path).map_err(|e| {
            StoryReelError::Template(format!("cannot read template {}: {e}", path.display()))
        })?;
        let draft: Self = serde_json::from_slice(&data).map_err(|e| {
            StoryReelError::Template(format!("malformed template {}: {e}", path.display()))
        })?;
        debug!(
            "loaded template {}: {} tracks, {} audio / {} visual materials",
            path.display(),
            draft.tracks.len(),
            draft.materials.audios.len(),
            draft.materials.videos.len()
        );
        Ok(draft)
    }

    /// The primary video track: the first video track with flag 0, created
    /// at the front of the track list if the template carried none.
    pub fn primary_video_track_mut(&mut self) -> &mut Track {
        let pos = self
            .tracks
            .iter()
            .position(|t| t.kind == TrackKind::Video && t.flag == 0);
        let index = match pos {
            Some(i) => i,
            None => {
                self.tracks.insert(0, Track::new(TrackKind::Video));
                0
            }
        };
        &mut self.tracks[index]
    }

    /// Find a track by identifier.
    pub fn track(&self, id: &Id) -> Option<&Track> {
        self.tracks.iter().find(|t| &t.id == id)
    }

    /// Find a track mutably by identifier.
    pub fn track_mut(&mut self, id: &Id) -> Option<&mut Track> {
        self.tracks.iter_mut().find(|t| &t.id == id)
    }

    /// Serialize to pretty JSON bytes.
    pub fn to_json(&self) -> Result<Vec<u8>> {
        serde_json::to_vec_pretty(self)
            .map_err(|e| StoryReelError::Serialization(format!("failed to serialize draft: {e}")))
    }

    /// Write the document into `dir` as `draft_content.json` plus an
    /// identical `draft_content.json.bak` sibling.
    ///
    /// The primary is written to a temp file in the same directory and
    /// renamed into place, so a crash mid-write never leaves a partial
    /// primary behind. Returns the primary path.
    pub fn save_with_backup(&self, dir: &Path) -> Result<PathBuf> {
        let data = self.to_json()?;
        std::fs::create_dir_all(dir)?;

        let primary = dir.join(DRAFT_FILE_NAME);
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        std::io::Write::write_all(&mut tmp, &data)?;
        tmp.persist(&primary)
            .map_err(|e| StoryReelError::Io(e.error))?;

        let backup = dir.join(DRAFT_BACKUP_FILE_NAME);
        std::fs::write(&backup, &data)?;

        info!("wrote draft {} ({} bytes)", primary.display(), data.len());
        Ok(primary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_template() -> &'static str {
        r#"{
            "canvas_config": {"height": 1080, "ratio": "16:9", "width": 1920},
            "draft_name": "template"
        }"#
    }

    #[test]
    fn test_canvas_presets() {
        let c = CanvasPreset::Landscape1080p.config();
        assert_eq!((c.width, c.height, c.ratio.as_str()), (1920, 1080, "16:9"));
        let c = CanvasPreset::Portrait1080p.config();
        assert_eq!((c.width, c.height, c.ratio.as_str()), (1080, 1920, "9:16"));
    }

    #[test]
    fn test_template_parses_with_defaults() {
        let draft: Draft = serde_json::from_str(minimal_template()).unwrap();
        assert!(draft.tracks.is_empty());
        assert!(draft.materials.audios.is_empty());
        assert_eq!(draft.duration, Micros::ZERO);
    }

    #[test]
    fn test_load_template_missing_is_fatal() {
        let err = Draft::load_template(Path::new("/no/such/template.json")).unwrap_err();
        assert!(matches!(err, StoryReelError::Template(_)));
    }

    #[test]
    fn test_load_template_malformed_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, b"{not json").unwrap();
        let err = Draft::load_template(&path).unwrap_err();
        assert!(matches!(err, StoryReelError::Template(_)));
    }

    #[test]
    fn test_primary_video_track_created_at_front() {
        let mut draft: Draft = serde_json::from_str(minimal_template()).unwrap();
        draft.tracks.push(Track::new(TrackKind::Audio));

        let id = draft.primary_video_track_mut().id.clone();
        assert_eq!(draft.tracks[0].id, id);
        assert_eq!(draft.tracks[0].kind, TrackKind::Video);

        // Idempotent: a second call finds the same track.
        assert_eq!(draft.primary_video_track_mut().id, id);
    }

    #[test]
    fn test_video_sidecar_refs_order_and_cardinality() {
        let mut catalog = MaterialCatalog::default();
        let refs = catalog.new_video_sidecar_refs();

        assert_eq!(refs.len(), 7);
        assert_eq!(refs[0], catalog.speeds[0].id);
        assert_eq!(refs[1], catalog.placeholders[0].id);
        assert_eq!(refs[2], catalog.canvases[0].id);
        assert_eq!(refs[3], catalog.material_colors[0].id);
        assert_eq!(refs[4], catalog.loudnesses[0].id);
        assert_eq!(refs[5], catalog.sound_channel_mappings[0].id);
        assert_eq!(refs[6], catalog.vocal_separations[0].id);
    }

    #[test]
    fn test_audio_sidecar_refs_order_and_cardinality() {
        let mut catalog = MaterialCatalog::default();
        let refs = catalog.new_audio_sidecar_refs();

        assert_eq!(refs.len(), 4);
        assert_eq!(refs[0], catalog.speeds[0].id);
        assert_eq!(refs[1], catalog.loudnesses[0].id);
        assert_eq!(refs[2], catalog.sound_channel_mappings[0].id);
        assert_eq!(refs[3], catalog.vocal_separations[0].id);
    }

    #[test]
    fn test_save_writes_primary_and_backup() {
        let dir = tempfile::tempdir().unwrap();
        let draft: Draft = serde_json::from_str(minimal_template()).unwrap();

        let primary = draft.save_with_backup(dir.path()).unwrap();
        let backup = dir.path().join(DRAFT_BACKUP_FILE_NAME);

        assert!(primary.exists());
        assert!(backup.exists());
        assert_eq!(
            std::fs::read(&primary).unwrap(),
            std::fs::read(&backup).unwrap()
        );

        // No stray temp files left in the directory.
        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names.len(), 2, "unexpected files: {names:?}");
    }
}
