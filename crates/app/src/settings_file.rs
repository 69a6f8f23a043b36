//! Persistent front-end files: settings (auto-play pacing, UI scale) and the
//! journal of the last session.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::APP_NAME;

pub const SETTINGS_FORMAT_VERSION: u32 = 1;
pub const DEFAULT_AUTO_STEP_FRAMES: u32 = 10;
pub const MIN_AUTO_STEP_FRAMES: u32 = 1;
pub const MAX_AUTO_STEP_FRAMES: u32 = 120;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppSettingsFile {
    pub format_version: u32,
    pub auto_step_frames: u32,
    pub ui_scale: Option<f32>,
}

impl Default for AppSettingsFile {
    fn default() -> Self {
        Self {
            format_version: SETTINGS_FORMAT_VERSION,
            auto_step_frames: DEFAULT_AUTO_STEP_FRAMES,
            ui_scale: None,
        }
    }
}

impl AppSettingsFile {
    pub fn get_default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", APP_NAME).map(|proj_dirs| {
            let mut path = proj_dirs.data_dir().to_path_buf();
            path.push("settings.json");
            path
        })
    }

    /// Loads the file at `path`, or defaults when it is missing or unreadable.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        path.and_then(|path| Self::load(path).ok()).unwrap_or_default()
    }

    pub fn auto_step_frames(&self) -> u32 {
        self.auto_step_frames.clamp(MIN_AUTO_STEP_FRAMES, MAX_AUTO_STEP_FRAMES)
    }

    pub fn write_atomic(&self, path: &Path) -> io::Result<()> {
        write_json_atomic(self, path)
    }

    pub fn load(path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&content)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(settings)
    }
}

/// Where the app leaves the input journal of the last session for the replay tool.
pub fn session_journal_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", APP_NAME).map(|proj_dirs| {
        let mut path = proj_dirs.data_dir().to_path_buf();
        path.push("last_session.json");
        path
    })
}

/// Pretty JSON written to a sibling `.json.tmp` file, then renamed over `path`.
pub fn write_json_atomic<T: Serialize>(value: &T, path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let tmp_path = path.with_extension("json.tmp");
    let json = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}
