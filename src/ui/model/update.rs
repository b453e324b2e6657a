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
use crate::ui::{Id, Model, Msg};
use tuirealm::Update;

impl Update<Msg> for Model {
    fn update(&mut self, msg: Option<Msg>) -> Option<Msg> {
        if let Some(msg) = msg {
            // Set redraw
            self.redraw = true;
            // Match message
            match msg {
                Msg::ChannelTableBlur => {
                    self.app.active(&Id::GroupList).ok();
                    None
                }
                Msg::ChannelPlaySelected(index) => {
                    self.channel_play_selected(index);
                    None
                }
                Msg::ErrorPopupClose => {
                    if self.app.mounted(&Id::ErrorPopup) {
                        self.app.umount(&Id::ErrorPopup).ok();
                        self.app.unlock_subs();
                    }
                    None
                }
                Msg::GroupListBlur => {
                    self.app.active(&Id::ChannelTable).ok();
                    None
                }
                Msg::GroupSelected(index) => {
                    self.group_select(index);
                    None
                }
                Msg::HelpPopupShow => {
                    self.mount_help_popup();
                    None
                }
                Msg::HelpPopupClose => {
                    let _ = self.app.umount(&Id::HelpPopup);
                    self.app.unlock_subs();
                    None
                }
                Msg::OpenPlaylistPopupShow => {
                    self.mount_open_playlist_popup();
                    None
                }
                Msg::OpenPlaylistPopupCloseCancel => {
                    let _ = self.app.umount(&Id::OpenPlaylistPopup);
                    self.app.unlock_subs();
                    None
                }
                Msg::OpenPlaylistPopupCloseOk(path) => {
                    let _ = self.app.umount(&Id::OpenPlaylistPopup);
                    self.app.unlock_subs();
                    self.playlist_open(&path);
                    None
                }
                Msg::PlaylistRefresh => {
                    self.playlist_refresh();
                    None
                }
                Msg::PlayerTogglePause => {
                    self.player_toggle_pause();
                    None
                }
                Msg::PlayerStop => {
                    self.player_stop();
                    None
                }
                Msg::PlayerVolumeUp => {
                    self.player_volume_up();
                    None
                }
                Msg::PlayerVolumeDown => {
                    self.player_volume_down();
                    None
                }
                Msg::PlayerSeek(offset) => {
                    self.player_seek(offset as i64);
                    None
                }
                Msg::QuitPopupShow => {
                    self.mount_quit_popup();
                    None
                }
                Msg::QuitPopupCloseCancel => {
                    let _ = self.app.umount(&Id::QuitPopup);
                    self.app.unlock_subs();
                    None
                }
                Msg::QuitPopupCloseOk => {
                    self.quit = true;
                    None
                }
                Msg::None => None,
            }
        } else {
            None
        }
    }
}
