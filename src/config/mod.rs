/**
 * MIT License
 *
 * termtv - Copyright (c) 2021 Larry Hao
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */
mod key;

pub use key::{BindingForEvent, Keys};

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::fs::{self, read_to_string};
use std::path::{Path, PathBuf};

const LAST_PLAYLIST_FILE: &str = "playlist_path.log";

/// Credentials of the optional remote channel api. When `url` is empty the
/// remote source is considered not configured.
#[derive(Clone, Default, Deserialize, Serialize)]
pub struct RemoteApi {
    pub url: String,
    pub username: String,
    pub password: String,
}

#[derive(Clone, Deserialize, Serialize)]
pub struct Settings {
    pub playlist_path: String,
    pub volume: i32,
    pub seek_step: i64,
    pub remember_last_playlist: bool,
    pub remote: RemoteApi,
    pub keys: Keys,
    #[serde(skip)]
    pub playlist_from_cli: Option<PathBuf>,
    #[serde(skip)]
    pub play_from_cli: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            playlist_path: String::new(),
            volume: 70,
            seek_step: 5,
            remember_last_playlist: true,
            remote: RemoteApi::default(),
            keys: Keys::default(),
            playlist_from_cli: None,
            play_from_cli: None,
        }
    }
}

impl Settings {
    pub fn save(&self) -> Result<()> {
        let mut path = get_app_config_path()?;
        path.push("config.toml");

        let string = toml::to_string(self)?;

        fs::write(path.to_string_lossy().as_ref(), string)?;

        Ok(())
    }

    pub fn load(&mut self) -> Result<()> {
        let mut path = get_app_config_path()?;
        path.push("config.toml");
        if !path.exists() {
            let config = Self::default();
            config.save()?;
        }

        let string = read_to_string(path.to_string_lossy().as_ref())?;
        let config: Self = toml::from_str(&string)?;
        *self = config;
        Ok(())
    }

    /// The playlist to open at startup: cli argument first, then the
    /// remembered last-opened path, then the configured default.
    pub fn startup_playlist(&self) -> Option<PathBuf> {
        if let Some(path) = &self.playlist_from_cli {
            return Some(path.clone());
        }
        if self.remember_last_playlist {
            if let Some(path) = load_last_playlist() {
                return Some(path);
            }
        }
        if self.playlist_path.is_empty() {
            return None;
        }
        Some(PathBuf::from(
            shellexpand::tilde(&self.playlist_path).to_string(),
        ))
    }
}

pub fn get_app_config_path() -> Result<PathBuf> {
    let mut path = dirs::config_dir().ok_or_else(|| anyhow!("failed to find os config dir."))?;
    path.push("termtv");

    if !path.exists() {
        fs::create_dir_all(&path)?;
    }
    Ok(path)
}

/// Remember the last opened playlist. A single line file in the config dir,
/// overwritten on every successful load.
pub fn save_last_playlist(playlist: &Path) -> Result<()> {
    let mut path = get_app_config_path()?;
    path.push(LAST_PLAYLIST_FILE);
    fs::write(path, format!("{}\n", playlist.display()))?;
    Ok(())
}

pub fn load_last_playlist() -> Option<PathBuf> {
    let mut path = get_app_config_path().ok()?;
    path.push(LAST_PLAYLIST_FILE);
    let content = read_to_string(path).ok()?;
    let line = content.lines().next()?.trim();
    if line.is_empty() {
        return None;
    }
    Some(PathBuf::from(line))
}
