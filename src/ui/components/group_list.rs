use crate::config::{Keys, Settings};
use crate::ui::{Id, Model, Msg};

use tui_realm_stdlib::List;
use tuirealm::command::{Cmd, CmdResult, Direction, Position};
use tuirealm::event::{Key, KeyEvent, NoUserEvent};
use tuirealm::props::{Alignment, BorderType, Borders, Color, TableBuilder, TextSpan};
use tuirealm::{AttrValue, Attribute, Component, Event, MockComponent, State, StateValue};

#[derive(MockComponent)]
pub struct GroupList {
    component: List,
    keys: Keys,
}

impl GroupList {
    pub fn new(config: &Settings) -> Self {
        Self {
            component: List::default()
                .borders(
                    Borders::default()
                        .modifiers(BorderType::Rounded)
                        .color(Color::Blue),
                )
                .background(Color::Reset)
                .foreground(Color::Yellow)
                .title("Groups", Alignment::Left)
                .scroll(true)
                .highlighted_color(Color::LightBlue)
                .highlighted_str("\u{1f4c2}")
                .rewind(false)
                .step(4)
                .rows(
                    TableBuilder::default()
                        .add_col(TextSpan::from("Empty"))
                        .build(),
                ),
            keys: config.keys.clone(),
        }
    }
}

impl Component<Msg, NoUserEvent> for GroupList {
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
                return Some(Msg::GroupListBlur)
            }
            Event::Keyboard(KeyEvent {
                code: Key::Enter, ..
            }) => {
                if let State::One(StateValue::Usize(index)) = self.state() {
                    return Some(Msg::GroupSelected(index));
                }
                CmdResult::None
            }
            Event::Keyboard(key) if key == self.keys.global_right.key_event() => {
                if let State::One(StateValue::Usize(index)) = self.state() {
                    return Some(Msg::GroupSelected(index));
                }
                CmdResult::None
            }
            _ => CmdResult::None,
        };
        Some(Msg::None)
    }
}

impl Model {
    /// Rebuild the group pane from the current playlist.
    pub fn groups_sync(&mut self) {
        let mut table: TableBuilder = TableBuilder::default();

        for (idx, group) in self.playlist.groups().iter().enumerate() {
            if idx > 0 {
                table.add_row();
            }
            let title = if group.title.is_empty() {
                "<no group>"
            } else {
                group.title.as_str()
            };
            table.add_col(TextSpan::from(title));
        }
        if self.playlist.is_empty() {
            table.add_col(TextSpan::from("Empty"));
        }

        let table = table.build();
        self.app
            .attr(&Id::GroupList, Attribute::Content, AttrValue::Table(table))
            .ok();

        let title = format!(
            "\u{2500} Groups \u{2500}\u{2500}\u{2524} {} groups | {} channels \u{251c}\u{2500}",
            self.playlist.groups().len(),
            self.playlist.len(),
        );
        self.app
            .attr(
                &Id::GroupList,
                Attribute::Title,
                AttrValue::Title((title, Alignment::Left)),
            )
            .ok();
    }
}
