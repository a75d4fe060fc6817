// Binary includes library modules - some public API items are only for library consumers
#![allow(unused)]

use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    Terminal,
};

mod app;
mod data;
mod events;
mod settings;
mod sim;
mod source;
mod ui;

use app::{App, View};
use settings::{Settings, ThemePreference};
use source::{FileSource, SimSource, TelemetrySource};

#[derive(Parser, Debug)]
#[command(name = "gaswatch")]
#[command(about = "Diagnostic TUI presenting simulated gas-compressor-station telemetry")]
struct Args {
    /// Replay a recorded station snapshot file instead of running the simulator
    #[arg(short = 'f', long)]
    replay: Option<PathBuf>,

    /// Path to a settings file (TOML); defaults to ./gaswatch.toml if present
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Refresh interval in seconds
    #[arg(short, long)]
    refresh: Option<u64>,

    /// Seed the simulator for a reproducible demo
    #[arg(long)]
    seed: Option<u64>,

    /// Theme selection
    #[arg(long, value_enum)]
    theme: Option<ThemePreference>,

    /// Gas concentration warning threshold (ppm)
    #[arg(long)]
    gas_warning: Option<f64>,

    /// Gas concentration danger threshold (ppm)
    #[arg(long)]
    gas_danger: Option<f64>,

    /// Export current station state to a JSON file and exit
    #[arg(short, long)]
    export: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut settings = Settings::load(args.settings.as_deref())?;

    // CLI flags win over file and environment.
    if let Some(refresh) = args.refresh {
        settings.refresh_secs = refresh;
    }
    if let Some(seed) = args.seed {
        settings.seed = Some(seed);
    }
    if let Some(theme) = args.theme {
        settings.theme = theme;
    }
    if let Some(warning) = args.gas_warning {
        settings.gas_warning = warning;
    }
    if let Some(danger) = args.gas_danger {
        settings.gas_danger = danger;
    }
    settings.validate()?;

    let source: Box<dyn TelemetrySource> = match args.replay {
        Some(ref path) => Box::new(FileSource::new(path)),
        None => match settings.seed {
            Some(seed) => Box::new(SimSource::with_seed(seed)),
            None => Box::new(SimSource::new()),
        },
    };

    // Handle export mode (non-interactive)
    if let Some(export_path) = args.export {
        return export_to_file(source, settings, &export_path);
    }

    run_tui(source, settings)
}

/// Take one snapshot and write the station state to a JSON file.
fn export_to_file(
    source: Box<dyn TelemetrySource>,
    settings: Settings,
    export_path: &std::path::Path,
) -> Result<()> {
    let mut app = App::new(source, settings);
    app.refresh()?;

    if app.data.is_none() {
        let reason = app
            .load_error
            .clone()
            .unwrap_or_else(|| "source produced no snapshot".to_string());
        anyhow::bail!("Cannot export: {}", reason);
    }

    app.export_state(export_path)?;
    println!("Exported station state to: {}", export_path.display());
    Ok(())
}

/// Run the TUI over the given telemetry source
fn run_tui(source: Box<dyn TelemetrySource>, settings: Settings) -> Result<()> {
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
    let mut app = App::new(source, settings);
    let _ = app.refresh();

    // Run the main loop
    let result = run_app(&mut terminal, &mut app);

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

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    let mut last_refresh = Instant::now();

    // Minimum terminal size for usable display
    const MIN_WIDTH: u16 = 60;
    const MIN_HEIGHT: u16 = 14;

    while app.running {
        // Draw UI
        terminal.draw(|frame| {
            let area = frame.area();

            // Check for minimum terminal size
            if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
                let msg = format!(
                    "Terminal too small: {}x{}\nMinimum: {}x{}\n\nResize to continue",
                    area.width, area.height, MIN_WIDTH, MIN_HEIGHT
                );
                let paragraph = ratatui::widgets::Paragraph::new(msg)
                    .alignment(ratatui::layout::Alignment::Center)
                    .style(ratatui::style::Style::default().fg(ratatui::style::Color::Yellow));
                let centered = ratatui::layout::Rect::new(0, area.height / 2 - 2, area.width, 5);
                frame.render_widget(paragraph, centered);
                return;
            }

            let chunks = Layout::vertical([
                Constraint::Length(1), // Header bar
                Constraint::Length(1), // Tabs
                Constraint::Min(10),   // Content
                Constraint::Length(1), // Status bar
            ])
            .split(area);

            // Render header with station status
            ui::common::render_header(frame, app, chunks[0]);

            // Render tabs
            ui::common::render_tabs(frame, app, chunks[1]);

            // Render current view
            match app.current_view {
                View::Overview => ui::overview::render(frame, app, chunks[2]),
                View::Charts => ui::charts::render(frame, app, chunks[2]),
                View::Alerts => ui::alerts::render(frame, app, chunks[2]),
            }

            // Render status bar
            ui::common::render_status_bar(frame, app, chunks[3]);

            // Render detail overlay if active
            if app.show_detail_overlay {
                ui::alerts::render_overlay(frame, app, area);
            }

            // Render help overlay if active
            if app.show_help {
                ui::common::render_help(frame, app, area);
            }
        })?;

        // Poll for events with a short timeout
        if let Some(event) = events::poll_event(Duration::from_millis(100))? {
            match event {
                Event::Key(key) => events::handle_key_event(app, key),
                Event::Mouse(mouse) => {
                    // Content starts after header (1) + tabs (1) + table header (1)
                    events::handle_mouse_event(app, mouse, 3);
                }
                Event::Resize(_, _) => {
                    // Terminal will redraw on next iteration
                }
                _ => {}
            }
        }

        // Auto-refresh data periodically; the timer dies with this loop
        if app.auto_refresh && last_refresh.elapsed() >= app.refresh_interval {
            let _ = app.refresh();
            last_refresh = Instant::now();
        }
    }

    Ok(())
}
