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
use anyhow::{anyhow, Result};
use libmpv::Mpv;

pub struct MpvBackend {
    mpv: Mpv,
    volume: i32,
}

impl MpvBackend {
    pub fn new(config: &Settings) -> Self {
        let mpv = Mpv::new().expect("Couldn't initialize mpv handle");
        // video stays on, mpv opens its own window for the stream
        mpv.set_property("volume", i64::from(config.volume))
            .expect("Error setting volume");

        Self {
            mpv,
            volume: config.volume,
        }
    }
}

impl PlayerTrait for MpvBackend {
    fn add_and_play(&mut self, url: &str) {
        if let Err(e) = self
            .mpv
            .command("loadfile", &[&format!("\"{url}\""), "replace"])
        {
            error!("error loading stream in mpv: {e}");
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
        let _ = self.mpv.set_property("volume", i64::from(self.volume));
    }

    fn pause(&mut self) {
        let _ = self.mpv.set_property("pause", true);
    }

    fn resume(&mut self) {
        let _ = self.mpv.set_property("pause", false);
    }

    fn is_paused(&self) -> bool {
        self.mpv.get_property("pause").unwrap_or(false)
    }

    fn stop(&mut self) {
        let _ = self.mpv.command("stop", &[""]);
    }

    fn seek(&mut self, secs: i64) -> Result<()> {
        self.mpv
            .command("seek", &[&format!("\"{secs}\""), "relative"])
            .map_err(|e| anyhow!("Error in mpv: {e}"))
    }

    fn get_progress(&self) -> Result<(f64, i64, i64)> {
        let percent = self.mpv.get_property::<f64>("percent-pos").unwrap_or(0.0);
        let time_pos = self.mpv.get_property::<i64>("time-pos").unwrap_or(0);
        let duration = self.mpv.get_property::<i64>("duration").unwrap_or(0);
        Ok((percent, time_pos, duration))
    }
}
