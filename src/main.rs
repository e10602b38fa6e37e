// Binary includes library modules - some public API items are only for library consumers
#![allow(unused)]

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

mod app;
mod data;
mod error;
mod events;
mod source;
mod ui;

use app::App;
use events::Action;
use source::{HttpSource, MockSource, SensorSource};

#[derive(Parser, Debug)]
#[command(name = "airwatch")]
#[command(about = "Terminal dashboard for environmental sensor readings")]
struct Args {
    /// Base URL of the sensor API
    #[arg(short, long, default_value = "http://localhost:1880", conflicts_with = "mock")]
    url: String,

    /// Use synthetic sensor data instead of an HTTP endpoint
    #[arg(short, long)]
    mock: bool,

    /// Refresh interval in seconds
    #[arg(short, long, default_value = "30")]
    refresh: u64,

    /// Initial history range in hours
    #[arg(long, default_value = "1")]
    hours: u32,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Log to stderr when RUST_LOG is set; the terminal itself belongs to the TUI
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(io::stderr)
            .init();
    }

    let source: Box<dyn SensorSource> = if args.mock {
        Box::new(MockSource::new())
    } else {
        Box::new(HttpSource::new(&args.url))
    };

    run_tui(source, args.hours, Duration::from_secs(args.refresh.max(1)))
}

/// Run the TUI with the given data source
fn run_tui(source: Box<dyn SensorSource>, hours: u32, refresh: Duration) -> Result<()> {
    // Fetches run on a current-thread runtime; the event loop stays synchronous
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic);
    }));

    // Create app and load initial data
    let mut app = App::new(source, hours, refresh);
    rt.block_on(app.start());

    // Run the main loop
    let result = run_app(&mut terminal, &mut app, &rt);

    app.stop();

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    rt: &tokio::runtime::Runtime,
) -> Result<()> {
    while app.running {
        terminal.draw(|frame| ui::render(frame, app))?;

        // Poll for events with a short timeout
        if let Some(event) = events::poll_event(Duration::from_millis(100))? {
            match event {
                Event::Key(key) => {
                    if app.show_help {
                        // Any key closes the help overlay
                        app.toggle_help();
                    } else if let Some(action) = events::action_for_key(key) {
                        apply_action(app, rt, action);
                    }
                }
                Event::Resize(_, _) => {
                    // Terminal will redraw on next iteration
                }
                _ => {}
            }
        }

        // Auto-refresh data periodically
        if app.schedule.due(Instant::now()) {
            rt.block_on(app.tick());
        }
    }

    Ok(())
}

fn apply_action(app: &mut App, rt: &tokio::runtime::Runtime, action: Action) {
    match action {
        Action::Quit => app.quit(),
        Action::Refresh => rt.block_on(app.tick()),
        Action::SelectRange(hours) => rt.block_on(app.select_range(hours)),
        Action::RangePrev => {
            let hours = events::adjacent_preset(app.range_hours, false);
            rt.block_on(app.select_range(hours));
        }
        Action::RangeNext => {
            let hours = events::adjacent_preset(app.range_hours, true);
            rt.block_on(app.select_range(hours));
        }
        Action::ToggleHelp => app.toggle_help(),
    }
}
