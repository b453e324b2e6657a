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
#[cfg(feature = "mpv")]
mod mpv_backend;
#[cfg(not(feature = "mpv"))]
mod vlc_backend;

use crate::config::Settings;
use anyhow::Result;
#[cfg(feature = "mpv")]
use mpv_backend::MpvBackend;
#[cfg(not(feature = "mpv"))]
use vlc_backend::VlcBackend;

/// The embedded media engine. It owns demuxing, decoding, rendering and
/// network retry; this trait is only the pass-through surface the ui needs.
pub trait PlayerTrait {
    fn add_and_play(&mut self, url: &str);
    fn volume(&self) -> i32;
    fn volume_up(&mut self);
    fn volume_down(&mut self);
    fn set_volume(&mut self, volume: i32);
    fn pause(&mut self);
    fn resume(&mut self);
    fn is_paused(&self) -> bool;
    fn stop(&mut self);
    /// Relative seek in seconds, negative seeks backward.
    fn seek(&mut self, secs: i64) -> Result<()>;
    /// (percent 0-100, position secs, duration secs). Live streams usually
    /// report a zero duration.
    fn get_progress(&self) -> Result<(f64, i64, i64)>;
}

pub struct GeneralPlayer {
    #[cfg(not(feature = "mpv"))]
    player: VlcBackend,
    #[cfg(feature = "mpv")]
    player: MpvBackend,
}

impl GeneralPlayer {
    pub fn new(config: &Settings) -> Self {
        #[cfg(not(feature = "mpv"))]
        let player = VlcBackend::new(config);
        #[cfg(feature = "mpv")]
        let player = MpvBackend::new(config);
        Self { player }
    }
}

impl PlayerTrait for GeneralPlayer {
    fn add_and_play(&mut self, url: &str) {
        self.player.add_and_play(url);
    }
    fn volume(&self) -> i32 {
        self.player.volume()
    }
    fn volume_up(&mut self) {
        self.player.volume_up();
    }
    fn volume_down(&mut self) {
        self.player.volume_down();
    }
    fn set_volume(&mut self, volume: i32) {
        self.player.set_volume(volume);
    }
    fn pause(&mut self) {
        self.player.pause();
    }
    fn resume(&mut self) {
        self.player.resume();
    }
    fn is_paused(&self) -> bool {
        self.player.is_paused()
    }
    fn stop(&mut self) {
        self.player.stop();
    }
    fn seek(&mut self, secs: i64) -> Result<()> {
        self.player.seek(secs)
    }
    fn get_progress(&self) -> Result<(f64, i64, i64)> {
        self.player.get_progress()
    }
}
