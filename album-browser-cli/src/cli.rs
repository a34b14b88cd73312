use std::{
    fs::File,
    io,
    path::PathBuf,
    sync::{Arc, Mutex},
    time::Duration,
};

use album_browser_client::{Client, DEFAULT_BASE_URL};
use album_browser_controls::{
    CatalogApi, catalog::CatalogScreen, detail::DetailScreen, playback::NowPlaying,
    view_state::ViewState,
};
use album_browser_models::AlbumId;
use clap::{Parser, Subcommand};
use snafu::prelude::*;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[clap(short, long)]
    /// Log level
    verbosity: Option<tracing::Level>,

    #[clap(long)]
    /// Write logs to this file instead of stderr
    log_file: Option<PathBuf>,

    #[clap(short, long, env = "ALBUM_BROWSER_BASE_URL", default_value = DEFAULT_BASE_URL)]
    /// Base address of the catalog service
    base_url: String,

    #[clap(long, env = "ALBUM_BROWSER_TIMEOUT_SECS")]
    /// Request timeout in seconds [default: none]
    timeout_secs: Option<u64>,

    #[clap(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Default. Starts the interactive browser
    Open,
    /// Print every album in the catalog
    Albums,
    /// Print one album and its tracks
    Album {
        /// Album identifier
        id: AlbumId,
    },
}

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("{source}"))]
    ClientError {
        source: album_browser_client::Error,
    },
    #[snafu(display("{message}"))]
    LoadError { message: String },
    #[snafu(display("Unable to open log file {}: {source}", path.display()))]
    LogFileError { path: PathBuf, source: io::Error },
    #[snafu(display("{error}"))]
    TerminalError { error: String },
}

impl From<album_browser_client::Error> for Error {
    fn from(source: album_browser_client::Error) -> Self {
        Error::ClientError { source }
    }
}

pub async fn run() -> Result<(), Error> {
    let cli = Cli::parse();

    init_logging(cli.verbosity, cli.log_file.as_ref())?;

    let timeout = cli.timeout_secs.map(Duration::from_secs);
    let client: Arc<dyn CatalogApi> = Arc::new(Client::new(&cli.base_url, timeout)?);
    let now_playing = NowPlaying::new();

    match cli.command.unwrap_or(Commands::Open) {
        Commands::Open => {
            tracing::info!("Opening catalog at {}", cli.base_url);
            album_browser_tui::init(client, now_playing)
                .await
                .map_err(|error| Error::TerminalError {
                    error: error.to_string(),
                })
        }
        Commands::Albums => {
            let screen = CatalogScreen::enter(client, now_playing);
            let albums = settled_or_fail(screen.settled().await)?;

            for album in &albums {
                println!("{}\t{}\t{}", album.id, album.title, album.artist);
            }
            Ok(())
        }
        Commands::Album { id } => {
            let screen = DetailScreen::enter(id, client, now_playing);
            let album = settled_or_fail(screen.settled().await)?;

            println!("{} by {}", album.title, album.artist);
            if let Some(description) = &album.description {
                println!("{description}");
            }
            println!();
            for track in album.placeholder_tracks() {
                println!("{:>2}. {}", track.id, track.title);
            }
            Ok(())
        }
    }
}

fn settled_or_fail<T>(state: ViewState<T>) -> Result<T, Error> {
    match state {
        ViewState::Ready(value) => Ok(value),
        ViewState::Error(message) => LoadSnafu { message }.fail(),
        ViewState::Loading => LoadSnafu {
            message: "Request was cancelled",
        }
        .fail(),
    }
}

fn init_logging(verbosity: Option<tracing::Level>, log_file: Option<&PathBuf>) -> Result<(), Error> {
    let (writer, ansi) = match log_file {
        Some(path) => {
            let file = File::create(path).context(LogFileSnafu { path: path.clone() })?;
            (BoxMakeWriter::new(Mutex::new(file)), false)
        }
        None => (BoxMakeWriter::new(io::stderr), true),
    };

    tracing_subscriber::fmt()
        .with_max_level(verbosity)
        .with_target(false)
        .with_ansi(ansi)
        .with_writer(writer)
        .compact()
        .init();

    Ok(())
}

pub fn error_exit(error: Error) {
    eprintln!("{error}");
    std::process::exit(1);
}
