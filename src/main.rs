use std::fs::File;
use std::io::stdout;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{error, info};
use ratatui::{Terminal, backend::CrosstermBackend};
use simplelog::{Config, LevelFilter, WriteLogger};

use pagepick::event_source::TerminalEventSource;
use pagepick::page::{Page, probe_image_size};
use pagepick::{App, panic_handler, run_app_with_event_source, settings};

/// Drag a rectangle over a page's word boxes to select words
#[derive(Debug, Parser)]
#[command(name = "pagepick", version, about)]
struct Args {
    /// Page layout JSON with the word boxes
    page: PathBuf,

    /// Background image whose pixel size defines the coordinate space
    #[arg(long)]
    image: Option<PathBuf>,

    /// Settings file (defaults to <config dir>/pagepick/config.yaml)
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, default_value = "pagepick.log")]
    log_file: PathBuf,

    #[arg(long, default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,

    /// Print the final selection as JSON after exiting
    #[arg(long)]
    emit: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    WriteLogger::init(
        args.log_level,
        Config::default(),
        File::create(&args.log_file)
            .with_context(|| format!("cannot create log file {:?}", args.log_file))?,
    )?;

    info!("Starting pagepick on {:?}", args.page);

    let settings = settings::load_settings(args.config.as_deref());
    let mut page = Page::load(&args.page)?;
    if let Some(image) = &args.image {
        page = page.with_image_size(probe_image_size(image)?);
    }
    let mut app = App::new(page, &settings);

    panic_handler::initialize_panic_handler();

    // Terminal initialization
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app_with_event_source(&mut terminal, &mut app, &mut TerminalEventSource);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!("Application error: {err:?}");
        return Err(err);
    }

    if args.emit {
        println!("{}", serde_json::to_string_pretty(&app.selection_report())?);
    }

    info!("Shutting down pagepick");
    Ok(())
}
