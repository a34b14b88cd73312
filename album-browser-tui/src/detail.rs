use album_browser_controls::{
    detail::DetailScreen, playback::PlaybackState, view_state::ViewState,
};
use album_browser_models::{Album, Track};
use ratatui::{crossterm::event::KeyCode, prelude::*, widgets::*};

use crate::{
    app::Output,
    ui::{block, render_message},
    widgets::track_list::TrackList,
};

const DESCRIPTION_FALLBACK: &str = "No description is available for this album yet.";

#[derive(Default)]
pub struct DetailView {
    tracks: TrackList,
}

impl DetailView {
    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        screen: &DetailScreen,
        playback: &PlaybackState,
    ) {
        match screen.state() {
            ViewState::Loading => render_message(frame, area, vec![Line::from("Loading album…")]),
            ViewState::Error(message) => render_message(
                frame,
                area,
                vec![
                    Line::from(format!("Error: {message}")).red().bold(),
                    Line::from("Esc: back to albums").add_modifier(Modifier::DIM),
                ],
            ),
            ViewState::Ready(album) => {
                let tracks = screen.tracks().unwrap_or_default();
                self.render_ready(frame, area, &album, &tracks, playback);
            }
        }
    }

    fn render_ready(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        album: &Album,
        tracks: &[Track],
        playback: &PlaybackState,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(8), Constraint::Min(1)])
            .split(area);

        let play_label = match playback.is_playing_album(album) {
            true => "⏸ Pause",
            false => "⏵ Play",
        };

        let description = album.description.as_deref().unwrap_or(DESCRIPTION_FALLBACK);

        let lines = vec![
            Line::from(album.artist.clone()),
            Line::from(vec![
                Span::raw(play_label).bold(),
                Span::raw("  (space)").add_modifier(Modifier::DIM),
            ]),
            Line::default(),
            Line::from("About this album").bold(),
            Line::from(description.to_string()),
            Line::from(format!("Artist: {}", album.artist)).add_modifier(Modifier::DIM),
        ];

        let header = Paragraph::new(lines)
            .block(block(Some(album.title.as_str())))
            .wrap(Wrap { trim: true });
        frame.render_widget(header, chunks[0]);

        let track_block = block(Some("Tracks"));
        let track_area = track_block.inner(chunks[1]);
        frame.render_widget(track_block, chunks[1]);
        self.tracks.render(track_area, frame.buffer_mut(), tracks);
    }

    pub fn handle_events(&mut self, event: KeyCode, screen: &DetailScreen) -> Output {
        match event {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h') => Output::Back,

            KeyCode::Char(' ') => {
                screen.toggle_play();
                Output::Consumed
            }

            _ => {
                let count = screen.tracks().map(|tracks| tracks.len()).unwrap_or_default();
                match self.tracks.handle_events(event, count) {
                    true => Output::Consumed,
                    false => Output::NotConsumed,
                }
            }
        }
    }
}
