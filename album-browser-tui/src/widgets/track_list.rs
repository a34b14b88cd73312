use album_browser_models::Track;
use ratatui::{
    buffer::Buffer,
    crossterm::event::KeyCode,
    layout::{Constraint, Rect},
    style::{Modifier, Stylize},
    text::Line,
    widgets::{Row, StatefulWidget, Table, TableState},
};

use crate::ui::{COLUMN_SPACING, ROW_HIGHLIGHT_STYLE};

#[derive(Default)]
pub struct TrackList {
    state: TableState,
}

impl TrackList {
    pub fn render(&mut self, area: Rect, buf: &mut Buffer, tracks: &[Track]) {
        let table = track_table(tracks);
        table.render(area, buf, &mut self.state);
    }

    /// Returns true when the key moved the selection.
    pub fn handle_events(&mut self, event: KeyCode, track_count: usize) -> bool {
        match event {
            KeyCode::Down | KeyCode::Char('j') => {
                match self.state.selected() {
                    Some(index) if index + 1 >= track_count => {}
                    _ => self.state.select_next(),
                }
                true
            }

            KeyCode::Up | KeyCode::Char('k') => {
                self.state.select_previous();
                true
            }

            _ => false,
        }
    }
}

fn track_table<'a>(tracks: &[Track]) -> Table<'a> {
    let body_rows: Vec<Row<'a>> = tracks
        .iter()
        .map(|track| {
            Row::new(vec![
                Line::from(track.id.to_string()),
                Line::from(track.title.clone()),
                Line::from(track.artist.clone()),
            ])
        })
        .collect();

    let is_empty = body_rows.is_empty();

    let constraints = [
        Constraint::Length(3),
        Constraint::Ratio(2, 3),
        Constraint::Ratio(1, 3),
    ];

    let mut table = Table::new(body_rows, constraints)
        .row_highlight_style(ROW_HIGHLIGHT_STYLE)
        .column_spacing(COLUMN_SPACING);

    if !is_empty {
        table = table.header(Row::new(["#", "Title", "Artist"]).add_modifier(Modifier::BOLD));
    }

    table
}
