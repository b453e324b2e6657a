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
use super::PlayerTrait;
use crate::config::Settings;
use anyhow::Result;
use vlc::MediaPlayerAudioEx;
use vlc::{Instance, Media, MediaPlayer};

pub struct VlcBackend {
    instance: Instance,
    player: MediaPlayer,
    volume: i32,
}

impl VlcBackend {
    pub fn new(config: &Settings) -> Self {
        let instance = Instance::new().expect("Couldn't initialize libvlc instance");
        let player =
            MediaPlayer::new(&instance).expect("Couldn't initialize libvlc media player");
        let mut backend = Self {
            instance,
            player,
            volume: 0,
        };
        backend.set_volume(config.volume);
        backend
    }
}

impl PlayerTrait for VlcBackend {
    fn add_and_play(&mut self, url: &str) {
        // new_location accepts every mrl the local vlc build understands,
        // http/hls/udp included. No validation on our side.
        match Media::new_location(&self.instance, url) {
            Some(md) => {
                self.player.set_media(&md);
                if self.player.play().is_err() {
                    error!("libvlc refused to play {url}");
                }
                let _ = self.player.set_volume(self.volume);
            }
            None => {
                error!("libvlc could not open location {url}");
            }
        }
    }

    fn volume(&self) -> i32 {
        self.volume
    }

    fn volume_up(&mut self) {
        self.set_volume(self.volume + 5);
    }

    fn volume_down(&mut self) {
        self.set_volume(self.volume - 5);
    }

    fn set_volume(&mut self, volume: i32) {
        self.volume = volume.clamp(0, 100);
        let _ = self.player.set_volume(self.volume);
    }

    fn pause(&mut self) {
        self.player.pause();
    }

    fn resume(&mut self) {
        let _ = self.player.play();
    }

    fn is_paused(&self) -> bool {
        !self.player.is_playing()
    }

    fn stop(&mut self) {
        self.player.stop();
    }

    fn seek(&mut self, secs: i64) -> Result<()> {
        let time_pos = self.player.get_time().unwrap_or(0);
        let duration = self
            .player
            .get_media()
            .and_then(|md| md.duration())
            .unwrap_or(0);
        let mut new_pos = time_pos + secs * 1000;
        new_pos = new_pos.max(0);
        if duration > 0 {
            new_pos = new_pos.min(duration);
        }
        self.player.set_time(new_pos);
        Ok(())
    }

    fn get_progress(&self) -> Result<(f64, i64, i64)> {
        let percent = f64::from(self.player.get_position().unwrap_or(0.0)) * 100.0;
        let time_pos = self.player.get_time().unwrap_or(0) / 1000;
        let duration = self
            .player
            .get_media()
            .and_then(|md| md.duration())
            .unwrap_or(0)
            / 1000;
        Ok((percent, time_pos, duration))
    }
}
