use crate::config::Settings;
use crate::ui::components::{
    ChannelTable, ErrorPopup, GlobalListener, GroupList, HelpPopup, LabelGeneric,
    OpenPlaylistPopup, Progress, QuitPopup,
};
use crate::ui::model::Model;
use crate::ui::{Id, Msg};
use crate::utils::draw_area_in;
use crate::VERSION;
use std::time::{Duration, Instant};
use tuirealm::event::NoUserEvent;
use tuirealm::tui::layout::{Constraint, Direction, Layout};
use tuirealm::tui::widgets::Clear;
use tuirealm::{Application, EventListenerCfg};

impl Model {
    pub fn init_app(config: &Settings) -> Application<Id, Msg, NoUserEvent> {
        // Setup application
        // NOTE: the event listener is configured to use the default crossterm
        // input listener and to raise a Tick event every 500ms, which drives
        // the playback position refresh while a channel is running
        let mut app: Application<Id, Msg, NoUserEvent> = Application::init(
            EventListenerCfg::default()
                .default_input_listener(Duration::from_millis(30))
                .poll_timeout(Duration::from_millis(500))
                .tick_interval(Duration::from_millis(500)),
        );
        assert!(app
            .mount(Id::GroupList, Box::new(GroupList::new(config)), vec![])
            .is_ok());
        assert!(app
            .mount(
                Id::ChannelTable,
                Box::new(ChannelTable::new(config)),
                vec![]
            )
            .is_ok());
        assert!(app
            .mount(Id::Progress, Box::new(Progress::new(config)), vec![])
            .is_ok());
        assert!(app
            .mount(
                Id::Label,
                Box::new(LabelGeneric::new(format!(
                    "Press <CTRL+H> for help. Version: {VERSION}",
                ))),
                Vec::default(),
            )
            .is_ok());
        assert!(app
            .mount(
                Id::GlobalListener,
                Box::new(GlobalListener::new(&config.keys)),
                Self::subscribe(&config.keys),
            )
            .is_ok());
        // Give focus to the group pane
        assert!(app.active(&Id::GroupList).is_ok());
        app
    }

    pub fn view(&mut self) {
        if self.redraw {
            self.redraw = false;
            self.last_redraw = Instant::now();
            assert!(self
                .terminal
                .raw_mut()
                .draw(|f| {
                    let chunks_main = Layout::default()
                        .direction(Direction::Vertical)
                        .margin(0)
                        .constraints([Constraint::Min(2), Constraint::Length(1)].as_ref())
                        .split(f.size());
                    let chunks_panes = Layout::default()
                        .direction(Direction::Horizontal)
                        .margin(0)
                        .constraints([Constraint::Ratio(1, 3), Constraint::Ratio(2, 3)].as_ref())
                        .split(chunks_main[0]);
                    let chunks_right = Layout::default()
                        .direction(Direction::Vertical)
                        .margin(0)
                        .constraints([Constraint::Min(2), Constraint::Length(3)].as_ref())
                        .split(chunks_panes[1]);

                    self.app.view(&Id::GroupList, f, chunks_panes[0]);
                    self.app.view(&Id::ChannelTable, f, chunks_right[0]);
                    self.app.view(&Id::Progress, f, chunks_right[1]);
                    self.app.view(&Id::Label, f, chunks_main[1]);
                    // -- popups
                    if self.app.mounted(&Id::QuitPopup) {
                        let popup = draw_area_in(f.size(), 30, 10);
                        f.render_widget(Clear, popup);
                        self.app.view(&Id::QuitPopup, f, popup);
                    } else if self.app.mounted(&Id::ErrorPopup) {
                        let popup = draw_area_in(f.size(), 50, 15);
                        f.render_widget(Clear, popup);
                        self.app.view(&Id::ErrorPopup, f, popup);
                    } else if self.app.mounted(&Id::HelpPopup) {
                        let popup = draw_area_in(f.size(), 60, 90);
                        f.render_widget(Clear, popup);
                        self.app.view(&Id::HelpPopup, f, popup);
                    } else if self.app.mounted(&Id::OpenPlaylistPopup) {
                        let popup = draw_area_in(f.size(), 60, 10);
                        f.render_widget(Clear, popup);
                        self.app.view(&Id::OpenPlaylistPopup, f, popup);
                    }
                })
                .is_ok());
        }
    }

    // Mount error and give focus to it
    pub fn mount_error_popup(&mut self, err: &str) {
        assert!(self
            .app
            .remount(
                Id::ErrorPopup,
                Box::new(ErrorPopup::new(err.to_string())),
                vec![]
            )
            .is_ok());
        assert!(self.app.active(&Id::ErrorPopup).is_ok());
        self.app.lock_subs();
    }

    /// Mount quit popup
    pub fn mount_quit_popup(&mut self) {
        assert!(self
            .app
            .remount(
                Id::QuitPopup,
                Box::new(QuitPopup::new(&self.config)),
                vec![]
            )
            .is_ok());
        assert!(self.app.active(&Id::QuitPopup).is_ok());
        self.app.lock_subs();
    }

    /// Mount help popup
    pub fn mount_help_popup(&mut self) {
        assert!(self
            .app
            .remount(
                Id::HelpPopup,
                Box::new(HelpPopup::new(&self.config)),
                vec![]
            )
            .is_ok());
        assert!(self.app.active(&Id::HelpPopup).is_ok());
        self.app.lock_subs();
    }

    pub fn mount_open_playlist_popup(&mut self) {
        assert!(self
            .app
            .remount(
                Id::OpenPlaylistPopup,
                Box::new(OpenPlaylistPopup::new(&self.config)),
                vec![]
            )
            .is_ok());
        assert!(self.app.active(&Id::OpenPlaylistPopup).is_ok());
        self.app.lock_subs();
    }
}
