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
mod playback;
mod playlist;
mod update;
mod view;

use crate::config::Settings;
use crate::player::GeneralPlayer;
use crate::playlist::{ChannelId, Playlist};
use crate::ui::{Id, Msg, Status};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tuirealm::event::NoUserEvent;
use tuirealm::terminal::TerminalBridge;
use tuirealm::Application;

/// All mutable state of the app in one place, owned by the ui loop. The
/// channel list, the player and the config only ever change through the
/// update handlers in this module.
pub struct Model {
    /// Indicates that the application must quit
    pub quit: bool,
    /// Tells whether to redraw interface
    pub redraw: bool,
    last_redraw: Instant,
    pub app: Application<Id, Msg, NoUserEvent>,
    /// Used to draw to terminal
    pub terminal: TerminalBridge,
    pub config: Settings,
    pub playlist: Playlist,
    /// File behind the current playlist. None after a remote fetch.
    pub playlist_source: Option<PathBuf>,
    pub player: GeneralPlayer,
    pub status: Status,
    pub current_channel: Option<ChannelId>,
    pub selected_group: usize,
    pub time_pos: i64,
    pub duration: i64,
}

impl Model {
    pub fn new(config: &Settings) -> Self {
        Self {
            app: Self::init_app(config),
            quit: false,
            redraw: true,
            last_redraw: Instant::now(),
            terminal: TerminalBridge::new().expect("Could not initialize terminal"),
            config: config.clone(),
            playlist: Playlist::default(),
            playlist_source: None,
            player: GeneralPlayer::new(config),
            status: Status::Stopped,
            current_channel: None,
            selected_group: 0,
            time_pos: 0,
            duration: 0,
        }
    }

    /// Initialize terminal
    pub fn init_terminal(&mut self) {
        let _ = self.terminal.enable_raw_mode();
        let _ = self.terminal.enter_alternate_screen();
        let _ = self.terminal.clear_screen();
    }

    /// Finalize terminal
    pub fn finalize_terminal(&mut self) {
        let _ = self.terminal.disable_raw_mode();
        let _ = self.terminal.leave_alternate_screen();
        let _ = self.terminal.clear_screen();
    }

    /// Returns elapsed time since last redraw
    pub fn since_last_redraw(&self) -> Duration {
        self.last_redraw.elapsed()
    }

    pub fn force_redraw(&mut self) {
        self.redraw = true;
    }
}
