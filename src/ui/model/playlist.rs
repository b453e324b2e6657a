use crate::config;
use crate::playlist::Playlist;
use crate::remote::Api;
use crate::ui::model::Model;
use crate::ui::Id;
use crate::utils::is_playlist;
use std::path::{Path, PathBuf};

impl Model {
    /// Load the startup playlist and optionally start a named channel, both
    /// coming from the command line or the config.
    pub fn playlist_init(&mut self) {
        if let Some(path) = self.config.startup_playlist() {
            self.playlist_load(&path);
        }
        if let Some(name) = self.config.play_from_cli.take() {
            self.channel_play_by_name(&name);
        }
    }

    /// Replace the whole channel list from a m3u file. On error the previous
    /// list stays untouched.
    pub fn playlist_load(&mut self, path: &Path) {
        match Playlist::load(path) {
            Ok(playlist) => {
                info!("loaded {} channels from {}", playlist.len(), path.display());
                self.playlist = playlist;
                self.playlist_source = Some(path.to_path_buf());
                self.selected_group = 0;
                if self.config.remember_last_playlist {
                    if let Err(e) = config::save_last_playlist(path) {
                        warn!("could not remember last playlist: {e}");
                    }
                }
                self.groups_sync();
                self.channels_sync();
            }
            Err(e) => {
                error!("load playlist error: {e:?}");
                self.mount_error_popup(format!("Load playlist error: {e}").as_str());
            }
        }
    }

    /// Path typed into the open popup.
    pub fn playlist_open(&mut self, path: &str) {
        let path = PathBuf::from(shellexpand::tilde(path).to_string());
        if !is_playlist(&path.to_string_lossy()) {
            self.mount_error_popup(format!("Not a m3u playlist: {}", path.display()).as_str());
            return;
        }
        self.playlist_load(&path);
    }

    /// Re-fetch from the remote api when one is configured, otherwise reload
    /// the current file.
    pub fn playlist_refresh(&mut self) {
        if !self.config.remote.url.is_empty() {
            let api = Api::new(&self.config.remote);
            match api.fetch() {
                Ok(playlist) => {
                    info!("fetched {} channels from remote api", playlist.len());
                    self.playlist = playlist;
                    self.playlist_source = None;
                    self.selected_group = 0;
                    self.groups_sync();
                    self.channels_sync();
                }
                Err(e) => {
                    error!("remote fetch error: {e:?}");
                    self.mount_error_popup(format!("Remote api error: {e}").as_str());
                }
            }
            return;
        }
        if let Some(path) = self.playlist_source.clone() {
            self.playlist_load(&path);
        }
    }

    pub fn group_select(&mut self, index: usize) {
        if self.playlist.group(index).is_some() {
            self.selected_group = index;
            self.channels_sync();
            self.app.active(&Id::ChannelTable).ok();
        }
    }

    /// The ui reports a row index inside the current group; resolve it to
    /// the stable channel id before touching the player.
    pub fn channel_play_selected(&mut self, index: usize) {
        let id = self
            .playlist
            .group(self.selected_group)
            .and_then(|g| g.channels.get(index))
            .map(|c| c.id);
        match id {
            Some(id) => self.player_play_channel(id),
            None => warn!("selected row {index} does not exist anymore"),
        }
    }

    /// Display-name lookup backing `--play`. With duplicate names the first
    /// match over all groups wins.
    pub fn channel_play_by_name(&mut self, name: &str) {
        match self.playlist.find_channel(name).map(|c| c.id) {
            Some(id) => self.player_play_channel(id),
            None => {
                error!("channel not found: {name}");
                self.mount_error_popup(format!("Channel not found: {name}").as_str());
            }
        }
    }
}
