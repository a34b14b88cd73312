use std::{io, time::Instant};

use album_browser_controls::{
    PlaybackReceiver, Result, ViewStateReceiver,
    navigation::{Navigator, Screen},
};
use album_browser_models::Album;
use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind};
use futures::StreamExt;
use ratatui::DefaultTerminal;
use tokio::{
    sync::watch,
    time::{self, Duration},
};

use crate::{catalog::CatalogView, detail::DetailView};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Error(String),
    Info(String),
}

#[derive(Default)]
pub struct NotificationList {
    notifications: Vec<(Notification, Instant)>,
}

impl NotificationList {
    pub fn push(&mut self, notification: Notification) {
        self.notifications.push((notification, Instant::now()));
    }

    pub fn tick(&mut self) -> bool {
        let notifications_before_clean = self.notifications.len();
        self.notifications
            .retain(|notification| notification.1.elapsed() < Duration::from_secs(5));
        let notifications_after_clean = self.notifications.len();

        notifications_before_clean != notifications_after_clean
    }

    pub fn notifications(&self) -> Vec<&Notification> {
        self.notifications.iter().map(|x| &x.0).collect()
    }
}

/// Change signal of whichever screen is mounted.
pub enum ScreenWatch {
    Catalog(ViewStateReceiver<Vec<Album>>),
    Detail(ViewStateReceiver<Album>),
}

impl ScreenWatch {
    fn new(screen: &Screen) -> Self {
        match screen {
            Screen::Catalog(catalog) => Self::Catalog(catalog.subscribe()),
            Screen::Detail(detail) => Self::Detail(detail.subscribe()),
        }
    }

    async fn changed(&mut self) -> std::result::Result<(), watch::error::RecvError> {
        match self {
            Self::Catalog(receiver) => receiver.changed().await,
            Self::Detail(receiver) => receiver.changed().await,
        }
    }
}

pub struct App {
    pub navigator: Navigator,
    pub playback: PlaybackReceiver,
    pub screen_watch: ScreenWatch,
    pub catalog: CatalogView,
    pub detail: DetailView,
    pub notifications: NotificationList,
    pub show_help: bool,
    pub exit: bool,
    pub should_draw: bool,
}

pub enum Output {
    Consumed,
    NotConsumed,
    SelectAlbum(Album),
    Back,
}

impl App {
    pub fn new(navigator: Navigator) -> Self {
        let playback = navigator.now_playing().subscribe();
        let screen_watch = ScreenWatch::new(navigator.screen());

        Self {
            navigator,
            playback,
            screen_watch,
            catalog: Default::default(),
            detail: Default::default(),
            notifications: Default::default(),
            show_help: false,
            exit: false,
            should_draw: true,
        }
    }

    pub async fn run(&mut self, terminal: &mut DefaultTerminal) -> io::Result<()> {
        let mut tick_interval = time::interval(Duration::from_millis(100));
        let mut event_stream = EventStream::new();

        while !self.exit {
            tokio::select! {
                biased;

                Some(event_result) = event_stream.next() => {
                    if let Ok(event) = event_result {
                        self.handle_event(event);
                    }
                }

                Ok(_) = self.playback.changed() => {
                    self.should_draw = true;
                }

                Ok(_) = self.screen_watch.changed() => {
                    self.should_draw = true;
                }

                _ = tick_interval.tick() => {}
            }

            if self.notifications.tick() {
                self.should_draw = true;
            };

            if self.should_draw {
                terminal.draw(|frame| self.render(frame))?;
                self.should_draw = false;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                if self.show_help {
                    self.show_help = false;
                    self.should_draw = true;
                    return;
                }

                let output = match self.navigator.screen() {
                    Screen::Catalog(screen) => self.catalog.handle_events(key_event.code, screen),
                    Screen::Detail(screen) => self.detail.handle_events(key_event.code, screen),
                };

                self.handle_output(key_event.code, output);
            }

            Event::Resize(_, _) => self.should_draw = true,
            _ => {}
        }
    }

    fn handle_output(&mut self, key_code: KeyCode, output: Output) {
        match output {
            Output::Consumed => {
                self.should_draw = true;
            }
            Output::SelectAlbum(album) => {
                let result = self.navigator.select_album(&album);
                self.after_navigation(result);
            }
            Output::Back => {
                let result = self.navigator.back();
                self.after_navigation(result);
            }
            Output::NotConsumed => match key_code {
                KeyCode::Char('?') => {
                    self.show_help = true;
                    self.should_draw = true;
                }
                KeyCode::Char('q') => {
                    self.should_draw = true;
                    self.exit()
                }
                KeyCode::Char('p') => {
                    if !self.navigator.now_playing().toggle_current() {
                        self.notifications
                            .push(Notification::Info("Nothing selected to play".to_string()));
                    }
                    self.should_draw = true;
                }
                _ => {}
            },
        }
    }

    fn after_navigation(&mut self, result: Result<()>) {
        if let Err(err) = result {
            self.notifications.push(Notification::Error(err.to_string()));
            self.should_draw = true;
            return;
        }

        match self.navigator.screen() {
            Screen::Catalog(_) => self.catalog = Default::default(),
            Screen::Detail(_) => self.detail = Default::default(),
        }
        self.screen_watch = ScreenWatch::new(self.navigator.screen());
        self.should_draw = true;
    }

    fn exit(&mut self) {
        self.exit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notifications_expire() {
        let mut list = NotificationList::default();
        list.push(Notification::Info("hello".to_string()));

        assert!(!list.tick());
        assert_eq!(
            list.notifications(),
            vec![&Notification::Info("hello".to_string())]
        );

        list.notifications[0].1 = Instant::now() - Duration::from_secs(6);

        assert!(list.tick());
        assert!(list.notifications().is_empty());
    }
}
