use crate::config::{Keys, Settings};
use crate::ui::{Id, Model, Msg};
use crate::utils::truncate_display;

use tui_realm_stdlib::Table;
use tuirealm::command::{Cmd, CmdResult, Direction, Position};
use tuirealm::event::{Key, KeyEvent, NoUserEvent};
use tuirealm::props::{Alignment, BorderType, Borders, Color, TableBuilder, TextSpan};
use tuirealm::{AttrValue, Attribute, Component, Event, MockComponent, State, StateValue};

#[derive(MockComponent)]
pub struct ChannelTable {
    component: Table,
    keys: Keys,
}

impl ChannelTable {
    pub fn new(config: &Settings) -> Self {
        Self {
            component: Table::default()
                .borders(
                    Borders::default()
                        .modifiers(BorderType::Thick)
                        .color(Color::Blue),
                )
                .background(Color::Reset)
                .title("Channels", Alignment::Left)
                .scroll(true)
                .highlighted_color(Color::LightBlue)
                .highlighted_str("\u{1f4fa}")
                .rewind(true)
                .step(4)
                .row_height(1)
                .headers(&["#", "Name", "Url"])
                .column_spacing(3)
                .widths(&[6, 44, 50])
                .table(
                    TableBuilder::default()
                        .add_col(TextSpan::from("Empty"))
                        .add_col(TextSpan::from("Empty channel list"))
                        .add_col(TextSpan::from("Empty"))
                        .build(),
                ),
            keys: config.keys.clone(),
        }
    }
}

impl Component<Msg, NoUserEvent> for ChannelTable {
    fn on(&mut self, ev: Event<NoUserEvent>) -> Option<Msg> {
        let _cmd_result = match ev {
            Event::Keyboard(KeyEvent {
                code: Key::Down, ..
            }) => self.perform(Cmd::Move(Direction::Down)),
            Event::Keyboard(KeyEvent { code: Key::Up, .. }) => {
                self.perform(Cmd::Move(Direction::Up))
            }
            Event::Keyboard(key) if key == self.keys.global_down.key_event() => {
                self.perform(Cmd::Move(Direction::Down))
            }
            Event::Keyboard(key) if key == self.keys.global_up.key_event() => {
                self.perform(Cmd::Move(Direction::Up))
            }
            Event::Keyboard(KeyEvent {
                code: Key::PageDown,
                ..
            }) => self.perform(Cmd::Scroll(Direction::Down)),
            Event::Keyboard(KeyEvent {
                code: Key::PageUp, ..
            }) => self.perform(Cmd::Scroll(Direction::Up)),
            Event::Keyboard(key) if key == self.keys.global_goto_top.key_event() => {
                self.perform(Cmd::GoTo(Position::Begin))
            }
            Event::Keyboard(key) if key == self.keys.global_goto_bottom.key_event() => {
                self.perform(Cmd::GoTo(Position::End))
            }
            Event::Keyboard(KeyEvent {
                code: Key::Home, ..
            }) => self.perform(Cmd::GoTo(Position::Begin)),
            Event::Keyboard(KeyEvent { code: Key::End, .. }) => {
                self.perform(Cmd::GoTo(Position::End))
            }
            Event::Keyboard(KeyEvent { code: Key::Tab, .. }) => {
                return Some(Msg::ChannelTableBlur)
            }
            Event::Keyboard(KeyEvent {
                code: Key::Enter, ..
            }) => {
                if let State::One(StateValue::Usize(index)) = self.state() {
                    return Some(Msg::ChannelPlaySelected(index));
                }
                CmdResult::None
            }
            Event::Keyboard(key) if key == self.keys.channel_play_selected.key_event() => {
                if let State::One(StateValue::Usize(index)) = self.state() {
                    return Some(Msg::ChannelPlaySelected(index));
                }
                CmdResult::None
            }
            _ => CmdResult::None,
        };
        Some(Msg::None)
    }
}

impl Model {
    /// Rebuild the channel pane for the selected group.
    pub fn channels_sync(&mut self) {
        let mut table: TableBuilder = TableBuilder::default();

        let (group_title, channel_count) = match self.playlist.group(self.selected_group) {
            Some(group) => {
                for (idx, channel) in group.channels.iter().enumerate() {
                    if idx > 0 {
                        table.add_row();
                    }
                    table
                        .add_col(TextSpan::from(format!("{:>4}", idx + 1)))
                        .add_col(TextSpan::new(truncate_display(&channel.name, 42)).bold())
                        .add_col(
                            TextSpan::new(truncate_display(&channel.url, 48))
                                .fg(tuirealm::tui::style::Color::LightYellow),
                        );
                }
                let title = if group.title.is_empty() {
                    "<no group>"
                } else {
                    group.title.as_str()
                };
                (title.to_string(), group.channels.len())
            }
            None => (String::from("-"), 0),
        };
        if channel_count == 0 {
            table.add_col(TextSpan::from("0"));
            table.add_col(TextSpan::from("empty channel list"));
            table.add_col(TextSpan::from(""));
        }

        let table = table.build();
        self.app
            .attr(
                &Id::ChannelTable,
                Attribute::Content,
                AttrValue::Table(table),
            )
            .ok();

        let title = format!(
            "\u{2500} Channels \u{2500}\u{2500}\u{2524} {group_title} | {channel_count} channels \u{251c}\u{2500}",
        );
        self.app
            .attr(
                &Id::ChannelTable,
                Attribute::Title,
                AttrValue::Title((title, Alignment::Left)),
            )
            .ok();
    }
}
