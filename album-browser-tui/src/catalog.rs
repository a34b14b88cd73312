use album_browser_controls::{
    catalog::{CatalogScreen, featured_albums},
    playback::PlaybackState,
    view_state::ViewState,
};
use album_browser_models::Album;
use ratatui::{crossterm::event::KeyCode, prelude::*};

use crate::{
    app::Output,
    ui::{block, render_message},
    widgets::album_list::{AlbumList, AlbumListEvent},
};

#[derive(Default)]
pub struct CatalogView {
    albums: AlbumList,
}

impl CatalogView {
    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        screen: &CatalogScreen,
        playback: &PlaybackState,
    ) {
        screen.with_state(|state| match state {
            ViewState::Loading => {
                render_message(frame, area, vec![Line::from("Loading albums…")]);
            }
            ViewState::Error(message) => render_message(
                frame,
                area,
                vec![
                    Line::from("Error loading albums").red().bold(),
                    Line::from(message.clone()),
                ],
            ),
            ViewState::Ready(albums) => self.render_ready(frame, area, albums, playback),
        });
    }

    fn render_ready(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        albums: &[Album],
        playback: &PlaybackState,
    ) {
        if albums.is_empty() {
            render_message(frame, area, vec![Line::from("The catalog is empty")]);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(1)])
            .split(area);

        let selected = self.albums.selected_index();
        let mut spans = Vec::new();
        for (index, album) in featured_albums(albums).iter().enumerate() {
            if index > 0 {
                spans.push(Span::raw(" │ "));
            }
            let span = Span::raw(album.title.clone());
            spans.push(match selected == Some(index) {
                true => span.bg(Color::Blue),
                false => span,
            });
        }
        let featured = ratatui::widgets::Paragraph::new(Line::from(spans))
            .block(block(Some("Albums")));
        frame.render_widget(featured, chunks[0]);

        let list_block = block(Some("Recently Played"));
        let list_area = list_block.inner(chunks[1]);
        frame.render_widget(list_block, chunks[1]);
        self.albums
            .render(list_area, frame.buffer_mut(), albums, playback);
    }

    pub fn handle_events(&mut self, event: KeyCode, screen: &CatalogScreen) -> Output {
        let list_event = screen.with_state(|state| {
            state
                .ready()
                .and_then(|albums| self.albums.handle_events(event, albums))
        });

        match list_event {
            Some(AlbumListEvent::Select(album)) => Output::SelectAlbum(album),
            Some(AlbumListEvent::TogglePlay(album)) => {
                screen.toggle_play(&album);
                Output::Consumed
            }
            None if is_list_key(event) => Output::Consumed,
            None => Output::NotConsumed,
        }
    }
}

fn is_list_key(event: KeyCode) -> bool {
    matches!(
        event,
        KeyCode::Up
            | KeyCode::Down
            | KeyCode::Char('j')
            | KeyCode::Char('k')
            | KeyCode::Enter
            | KeyCode::Char(' ')
    )
}
