mod app;
mod cli;
mod constants;
mod countdown;
mod error;
mod types;
mod ui;

use app::AppState;
use clap::Parser;
use cli::Cli;
use constants::{FRAME_DURATION_MS, MIN_TERMINAL_HEIGHT, MIN_TERMINAL_WIDTH, TICK_INTERVAL_MS};
use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
    },
};
use error::{AppError, Result};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};
use types::Orientation;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Validate CLI arguments
    cli.validate().map_err(AppError::Other)?;

    // Initialize logging if requested
    if let Some(log_file) = &cli.log_file {
        init_logging(log_file)?;
        log::info!("=== Countdown clock starting ===");
        log::info!("Log file: {}", log_file);
    }

    // Check terminal size
    let (width, height) = crossterm::terminal::size()?;
    if width < MIN_TERMINAL_WIDTH || height < MIN_TERMINAL_HEIGHT {
        log::error!(
            "Terminal too small: {}x{} (minimum: {}x{})",
            width,
            height,
            MIN_TERMINAL_WIDTH,
            MIN_TERMINAL_HEIGHT
        );
        return Err(AppError::TerminalTooSmall);
    }
    log::debug!("Terminal size: {}x{}", width, height);

    // Setup terminal
    setup_terminal()?;
    log::debug!("Terminal setup completed");

    // Setup Ctrl-C handler
    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();
    ctrlc::set_handler(move || {
        log::info!("Ctrl-C received, shutting down");
        r.store(false, Ordering::SeqCst);
    })
    .map_err(|e| AppError::Other(format!("Failed to set Ctrl-C handler: {}", e)))?;

    // Run the application
    let result = run_app(cli, running).await;

    // Cleanup terminal
    cleanup_terminal()?;
    log::debug!("Terminal cleanup completed");

    result
}

fn setup_terminal() -> Result<()> {
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen, Hide)?;

    // Set panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = cleanup_terminal();
        original_hook(panic_info);
    }));

    Ok(())
}

fn cleanup_terminal() -> Result<()> {
    execute!(io::stdout(), Show, LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
}

fn init_logging(log_file: &str) -> Result<()> {
    use std::fs::OpenOptions;
    use std::io::Write;

    // Open/create log file, truncating if it exists
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(log_file)
        .map_err(|e| AppError::Other(format!("Failed to open log file: {}", e)))?;

    // Initialize env_logger with file output
    env_logger::Builder::new()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .filter_module("tickdown", log::LevelFilter::Debug) // Only log from our crate
        .filter_level(log::LevelFilter::Off) // Disable all other crates
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .init();

    Ok(())
}

async fn run_app(cli: Cli, running: Arc<AtomicBool>) -> Result<()> {
    // Create backend and terminal
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    // Initialize app state
    let mut app = initialize_app_state(&cli);

    // Run main event loop
    run_event_loop(&mut terminal, &mut app, running).await?;

    log::info!("Countdown clock shutting down");
    Ok(())
}

fn initialize_app_state(cli: &Cli) -> AppState {
    log::debug!("Initializing application state");

    let mut app = AppState::new();

    // Prefill duration inputs from CLI flags
    if let Some(hours) = cli.hours {
        app.hours_input = hours.to_string();
    }
    if let Some(minutes) = cli.minutes {
        app.minutes_input = minutes.to_string();
    }
    if let Some(seconds) = cli.seconds {
        app.seconds_input = seconds.to_string();
    }

    if cli.windowed {
        app.fullscreen = false;
        log::debug!("Starting windowed");
    }
    if cli.landscape {
        app.orientation = Orientation::Landscape;
        log::debug!("Starting in landscape orientation");
    }

    app
}

async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
    running: Arc<AtomicBool>,
) -> Result<()> {
    let frame_duration = Duration::from_millis(FRAME_DURATION_MS);
    let tick_interval = Duration::from_millis(TICK_INTERVAL_MS);
    let mut last_tick = Instant::now();
    let mut last_title = String::new();

    while running.load(Ordering::SeqCst) && !app.should_quit {
        let frame_start = Instant::now();

        // Once-per-second tick drives the live clock and the countdown.
        // Drift in the cadence is acceptable and not compensated.
        if last_tick.elapsed() >= tick_interval {
            app.tick(chrono::Local::now());
            last_tick = Instant::now();
        }

        // Mirror engine state into the terminal title
        let title = app.window_title();
        if title != last_title {
            execute!(io::stdout(), SetTitle(title.as_str()))?;
            last_title = title;
        }

        // Render UI
        terminal.draw(|f| {
            ui::layout::render(f, app);
        })?;

        // Poll for input events (non-blocking)
        if event::poll(Duration::from_millis(0))? {
            let ev = event::read()?;
            handle_event(app, ev)?;
        }

        // Sleep to maintain frame rate
        let elapsed = frame_start.elapsed();
        if elapsed < frame_duration {
            tokio::time::sleep(frame_duration - elapsed).await;
        }
    }

    Ok(())
}

fn handle_event(app: &mut AppState, ev: Event) -> Result<()> {
    match ev {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            ui::handle_key_event(app, key)?;
        }
        Event::Resize(width, height) => {
            // ratatui re-lays out from scratch on the next draw
            log::debug!("Terminal resized: {}x{}", width, height);
        }
        _ => {}
    }
    Ok(())
}
