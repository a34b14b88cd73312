use album_browser_controls::playback::PlaybackState;
use ratatui::{prelude::*, widgets::*};

use crate::ui::{block, status_label};

pub fn render(frame: &mut Frame, area: Rect, state: &PlaybackState) {
    let Some(album) = state.current_album() else {
        return;
    };

    let title = status_label(state.is_playing());
    let block = block(Some(title));

    let lines = vec![
        Line::from(album.title.clone()).style(Style::new().bold()),
        Line::from(album.artist.clone()),
    ];

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
