use album_browser_controls::playback::PlaybackState;
use album_browser_models::Album;
use ratatui::{
    buffer::Buffer,
    crossterm::event::KeyCode,
    layout::{Constraint, Rect},
    style::{Modifier, Stylize},
    text::Line,
    widgets::{Row, StatefulWidget, Table, TableState},
};

use crate::ui::{COLUMN_SPACING, ROW_HIGHLIGHT_STYLE, playback_marker};

pub enum AlbumListEvent {
    Select(Album),
    TogglePlay(Album),
}

/// Selection over the albums of a ready catalog. The albums themselves stay in the
/// screen's view state and are passed in on every call.
#[derive(Default)]
pub struct AlbumList {
    state: TableState,
}

impl AlbumList {
    pub fn selected_index(&self) -> Option<usize> {
        self.state.selected()
    }

    pub fn select_first(&mut self) {
        self.state.select(Some(0));
    }

    pub fn selected<'a>(&self, albums: &'a [Album]) -> Option<&'a Album> {
        self.state.selected().and_then(|index| albums.get(index))
    }

    pub fn render(
        &mut self,
        area: Rect,
        buf: &mut Buffer,
        albums: &[Album],
        playback: &PlaybackState,
    ) {
        if self.state.selected().is_none() && !albums.is_empty() {
            self.select_first();
        }
        let table = album_table(albums, playback);
        table.render(area, buf, &mut self.state);
    }

    pub fn handle_events(&mut self, event: KeyCode, albums: &[Album]) -> Option<AlbumListEvent> {
        match event {
            KeyCode::Down | KeyCode::Char('j') => {
                if let Some(index) = self.state.selected()
                    && index + 1 >= albums.len()
                {
                    return None;
                }
                self.state.select_next();
                None
            }

            KeyCode::Up | KeyCode::Char('k') => {
                self.state.select_previous();
                None
            }

            KeyCode::Enter => self.selected(albums).cloned().map(AlbumListEvent::Select),

            KeyCode::Char(' ') => self
                .selected(albums)
                .cloned()
                .map(AlbumListEvent::TogglePlay),

            _ => None,
        }
    }
}

fn album_table<'a>(albums: &[Album], playback: &PlaybackState) -> Table<'a> {
    let body_rows: Vec<Row<'a>> = albums
        .iter()
        .map(|album| {
            Row::new(vec![
                Line::from(playback_marker(playback, album)),
                Line::from(album.title.clone()),
                Line::from(album.artist.clone()),
            ])
        })
        .collect();

    let is_empty = body_rows.is_empty();

    let constraints = [
        Constraint::Length(2),
        Constraint::Ratio(2, 3),
        Constraint::Ratio(1, 3),
    ];

    let mut table = Table::new(body_rows, constraints)
        .row_highlight_style(ROW_HIGHLIGHT_STYLE)
        .column_spacing(COLUMN_SPACING);

    if !is_empty {
        table = table.header(Row::new(["", "Title", "Artist"]).add_modifier(Modifier::BOLD));
    }

    table
}
