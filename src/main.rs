// Pixelfolio: retro-game portfolio in the terminal

use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use pixelfolio::config::Config;
use pixelfolio::content::Content;
use pixelfolio::links::SystemOpener;
use pixelfolio::ui::App;
use pixelfolio::view::loading::RandomSteps;
use pixelfolio::view::{Controller, ViewSettings};

#[derive(Debug, Parser)]
#[command(name = "pixelfolio", version, about = "Retro-game portfolio in the terminal")]
struct Args {
    /// Config file (defaults to <config_dir>/pixelfolio/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Content document replacing the built-in portfolio
    #[arg(long)]
    content: Option<PathBuf>,

    /// Seed for the loading bar increments
    #[arg(long)]
    seed: Option<u64>,
}

fn init_tracing(log_path: Option<PathBuf>) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let file = log_path.and_then(|path| {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).ok()?;
        }
        let file = OpenOptions::new().create(true).append(true).open(&path).ok()?;
        Some((path, file))
    });

    match file {
        Some((path, file)) => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .with(env_filter)
                .init();
            tracing::info!(path = %path.display(), "logging initialized");
        }
        // Never log to stdout/stderr while the TUI owns the terminal
        None => tracing_subscriber::registry().with(env_filter).init(),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::load(args.config.as_deref()).context("loading configuration")?;
    init_tracing(config.log_file.clone().or_else(Config::default_log_path));

    let content = match args.content.as_ref().or(config.content.as_ref()) {
        Some(path) => Content::load(path)
            .with_context(|| format!("loading content from {}", path.display()))?,
        None => Content::builtin().context("parsing built-in content")?,
    };

    let max_step = config.timing.max_step;
    let source = match args.seed {
        Some(seed) => RandomSteps::seeded(max_step, seed),
        None => RandomSteps::new(max_step),
    };
    let controller = Controller::new(content, ViewSettings::from_config(&config), Box::new(source));

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(controller, SystemOpener, config.layout.clone(), config.timing.frame());
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "event loop failed");
        eprintln!("Error: {err}");
    }

    Ok(())
}
