use std::{io, sync::Arc};

use album_browser_controls::{CatalogApi, navigation::Navigator, playback::NowPlaying};
use app::App;
use ratatui::{DefaultTerminal, prelude::*, widgets::*};
use ui::center;

mod app;
mod catalog;
mod detail;
mod now_playing;
mod ui;
mod widgets;

/// Run the browser until the user quits. The terminal is restored on every exit path.
pub async fn init(client: Arc<dyn CatalogApi>, now_playing: NowPlaying) -> io::Result<()> {
    let mut terminal = ratatui::init();

    let result = match draw_loading_screen(&mut terminal) {
        Ok(()) => {
            let mut app = App::new(Navigator::new(client, now_playing));
            app.run(&mut terminal).await
        }
        Err(err) => Err(err),
    };

    ratatui::restore();
    result
}

fn draw_loading_screen(terminal: &mut DefaultTerminal) -> io::Result<()> {
    let banner = r#"
       _ _
  __ _| | |__  _   _ _ __ ___  ___
 / _` | | '_ \| | | | '_ ` _ \/ __|
| (_| | | |_) | |_| | | | | | \__ \
 \__,_|_|_.__/ \__,_|_| |_| |_|___/
"#;

    terminal
        .draw(|f| {
            let area = center(f.area(), Constraint::Length(40), Constraint::Length(6));
            let paragraph = Paragraph::new(banner)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: false });
            f.render_widget(paragraph, area);
        })
        .map(|_| ())
}
