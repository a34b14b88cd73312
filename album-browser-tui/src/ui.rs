use album_browser_controls::{navigation::Screen, playback::PlaybackState};
use album_browser_models::Album;
use ratatui::{layout::Flex, prelude::*, widgets::*};

use crate::{
    app::{App, Notification},
    now_playing,
};

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        self.render_inner(frame);

        if self.show_help {
            render_help(frame);
        }

        self.render_notifications(frame, area);
    }

    fn render_inner(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let playback = self.playback.borrow().clone();
        let show_player = playback.current_album().is_some();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(1),
                Constraint::Length(if show_player { 4 } else { 0 }),
            ])
            .split(area);

        let title = Paragraph::new(Line::from(vec![
            Span::raw(self.navigator.route().title()).bold(),
            Span::raw("  ?: help").add_modifier(Modifier::DIM),
        ]))
        .block(block(None));
        frame.render_widget(title, chunks[0]);

        match self.navigator.screen() {
            Screen::Catalog(screen) => self.catalog.render(frame, chunks[1], screen, &playback),
            Screen::Detail(screen) => self.detail.render(frame, chunks[1], screen, &playback),
        }

        if show_player {
            now_playing::render(frame, chunks[2], &playback);
        }
    }

    fn render_notifications(&self, frame: &mut Frame, area: Rect) {
        let notifications: Vec<_> = self.notifications.notifications();

        if notifications.is_empty() {
            return;
        }

        let messages = notifications
            .into_iter()
            .map(|notification| match notification {
                Notification::Error(msg) => ("Error", msg, Color::Red),
                Notification::Info(msg) => ("Info", msg, Color::Blue),
            });

        let inner_width = 60.min(area.width);
        let x = area.x + area.width.saturating_sub(inner_width);
        let mut y = area.y;

        for msg in messages.rev() {
            let lines = (msg.1.len() as u16).div_ceil(inner_width.max(1));
            let box_height = lines + 2;

            if y + box_height > area.y + area.height {
                break;
            }

            let rect = Rect {
                x,
                y,
                width: inner_width,
                height: box_height,
            };

            let paragraph = Paragraph::new(msg.1.as_str())
                .block(
                    Block::new()
                        .borders(Borders::ALL)
                        .border_style(msg.2)
                        .border_type(BorderType::Rounded)
                        .title(msg.0)
                        .title_alignment(Alignment::Center)
                        .title_style(msg.2),
                )
                .wrap(Wrap { trim: true });

            frame.render_widget(Clear, rect);
            frame.render_widget(paragraph, rect);

            y += box_height;
        }
    }
}

pub fn center(area: Rect, horizontal: Constraint, vertical: Constraint) -> Rect {
    let [area] = Layout::horizontal([horizontal])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([vertical]).flex(Flex::Center).areas(area);
    area
}

fn render_help(frame: &mut Frame) {
    let rows = [
        ["Select in list", "Up/Down"],
        ["Open album", "Enter"],
        ["Play/pause highlighted album", "Space"],
        ["Play/pause current album", "p"],
        ["Back to albums", "Esc"],
        ["Exit", "q"],
    ];

    let max_left = rows.iter().map(|x| x[0].len()).max().unwrap_or_default();
    let max_right = rows.iter().map(|x| x[1].len()).max().unwrap_or_default();
    let max = std::cmp::max(max_left, max_right);
    let max = max + max;

    let rows: Vec<_> = rows.into_iter().map(Row::new).collect();

    let area = center(
        frame.area(),
        Constraint::Length(max as u16 + 2 + 1),
        Constraint::Length(rows.len() as u16 + 2),
    );

    let block = block(Some("Help"));

    let table = Table::default().rows(rows).block(block);

    frame.render_widget(Clear, area);
    frame.render_widget(table, area);
}

/// A centered one-line message, used for the loading and error states.
pub fn render_message(frame: &mut Frame, area: Rect, lines: Vec<Line<'static>>) {
    let height = lines.len() as u16;
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    let area = center(area, Constraint::Percentage(80), Constraint::Length(height));
    frame.render_widget(paragraph, area);
}

pub const ROW_HIGHLIGHT_STYLE: Style = Style::new().bg(Color::Blue);
pub const COLUMN_SPACING: u16 = 2;

pub fn block(title: Option<&str>) -> Block<'_> {
    let mut block = Block::bordered()
        .title_alignment(Alignment::Center)
        .border_type(BorderType::Rounded);

    if let Some(title) = title {
        block = block.title(format!(" {title} "));
    }

    block
}

pub fn status_label(is_playing: bool) -> &'static str {
    match is_playing {
        true => "Playing ⏵",
        false => "Paused ⏸",
    }
}

/// Marker for an album row: playing, paused on this album, or nothing.
pub fn playback_marker(playback: &PlaybackState, album: &Album) -> &'static str {
    if playback.is_playing_album(album) {
        "⏵"
    } else if playback.is_current(album) {
        "⏸"
    } else {
        ""
    }
}
