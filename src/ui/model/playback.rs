use crate::player::PlayerTrait;
use crate::playlist::ChannelId;
use crate::ui::model::Model;
use crate::ui::{Id, Status};
use tuirealm::props::{Alignment, AttrValue, Attribute, PropPayload, PropValue};

impl Model {
    pub fn player_play_channel(&mut self, id: ChannelId) {
        let channel = match self.playlist.get(id) {
            Some(c) => (c.name.clone(), c.url.clone()),
            None => {
                warn!("channel id {} is gone after reload", id.0);
                return;
            }
        };
        info!("start playing {} ({})", channel.0, channel.1);
        self.player.add_and_play(&channel.1);
        self.current_channel = Some(id);
        self.status = Status::Running;
        self.time_pos = 0;
        self.duration = 0;
        self.progress_update_title();
        self.progress_set(0.0, 0, 0);
    }

    pub fn player_stop(&mut self) {
        self.player.stop();
        self.status = Status::Stopped;
        self.current_channel = None;
        self.time_pos = 0;
        self.duration = 0;
        self.progress_update_title();
        self.progress_set(0.0, 0, 0);
    }

    pub fn player_toggle_pause(&mut self) {
        match self.status {
            Status::Running => {
                self.player.pause();
                self.status = Status::Paused;
            }
            Status::Paused => {
                self.player.resume();
                self.status = Status::Running;
            }
            Status::Stopped => {}
        }
        self.progress_update_title();
    }

    pub fn player_volume_up(&mut self) {
        self.player.volume_up();
        self.config.volume = self.player.volume();
        self.progress_update_title();
    }

    pub fn player_volume_down(&mut self) {
        self.player.volume_down();
        self.config.volume = self.player.volume();
        self.progress_update_title();
    }

    /// Relative seek, `direction` is +1/-1 from the key binding.
    pub fn player_seek(&mut self, direction: i64) {
        let step = self.config.seek_step.max(1);
        if let Err(e) = self.player.seek(direction * step) {
            error!("seek error: {e}");
        }
        self.progress_update();
    }

    /// Refresh the playback position display. Polled by the ui tick while a
    /// channel is running, silent otherwise.
    pub fn progress_update(&mut self) {
        if self.status != Status::Running {
            return;
        }
        if let Ok((percent, time_pos, duration)) = self.player.get_progress() {
            self.time_pos = time_pos;
            self.duration = duration;
            let new_prog = Self::progress_safeguard(percent);
            self.progress_set(new_prog, time_pos, duration);
            self.redraw = true;
        }
    }

    fn progress_safeguard(percent: f64) -> f64 {
        (percent / 100.0).clamp(0.0, 1.0)
    }

    pub fn progress_update_title(&mut self) {
        let channel = self
            .current_channel
            .and_then(|id| self.playlist.get(id))
            .map_or("No channel", |c| c.name.as_str())
            .to_string();
        let progress_title = format!(
            "Status: {} | Volume: {} | {} ",
            self.status,
            self.player.volume(),
            channel,
        );
        self.app
            .attr(
                &Id::Progress,
                Attribute::Title,
                AttrValue::Title((progress_title, Alignment::Center)),
            )
            .ok();
    }

    fn progress_set(&mut self, progress: f64, time_pos: i64, duration: i64) {
        self.app
            .attr(
                &Id::Progress,
                Attribute::Value,
                AttrValue::Payload(PropPayload::One(PropValue::F64(progress))),
            )
            .ok();

        // Live streams report no duration
        let text = if duration > 0 {
            format!(
                "{}    -    {}",
                Self::format_time(time_pos),
                Self::format_time(duration)
            )
        } else {
            format!("{}    -    live", Self::format_time(time_pos))
        };
        self.app
            .attr(&Id::Progress, Attribute::Text, AttrValue::String(text))
            .ok();
    }

    fn format_time(secs: i64) -> String {
        let secs = secs.max(0);
        let hours = secs / 3600;
        let minutes = (secs % 3600) / 60;
        let seconds = secs % 60;
        if hours > 0 {
            format!("{hours}:{minutes:02}:{seconds:02}")
        } else {
            format!("{minutes:02}:{seconds:02}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn time_formatting() {
        assert_eq!(Model::format_time(0), "00:00");
        assert_eq!(Model::format_time(75), "01:15");
        assert_eq!(Model::format_time(3725), "1:02:05");
        assert_eq!(Model::format_time(-3), "00:00");
    }
}
