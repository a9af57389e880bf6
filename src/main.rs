//! A terminal canvas for sketching Game of Life patterns.
//!
//! Pick the pen or eraser from the toolbar, paint cells with the mouse
//! (left paints, right clears), undo the last stroke with `Ctrl+Z` and
//! count generations with the spacebar.

mod app;
mod config;
mod core;
mod ui;

use std::fs::File;
use std::io::{self, stderr, Stderr};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};

use crate::app::{
    event::{spawn_event_reader, AppEvent},
    handler,
    state::{ActiveView, AppState},
};
use crate::core::canvas::Canvas;
use crate::ui::{
    grid_widget::{pane_block, GridWidget},
    layout::AppLayout,
    popup::InfoPopup,
    status_bar::StatusBar,
    toolbar::ToolbarWidget,
};

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Paint Game of Life patterns in the terminal")]
struct Cli {
    /// Number of grid rows.
    #[arg(long, default_value_t = 60)]
    rows: usize,

    /// Number of grid columns.
    #[arg(long, default_value_t = 60)]
    cols: usize,

    /// Terminal columns per cell (overrides the config file).
    #[arg(long)]
    cell_width: Option<u16>,

    /// Read the info dialog's attribution text from this file.
    #[arg(long)]
    credits: Option<PathBuf>,

    /// Write logs here instead of stderr (filtered by `RUST_LOG`).
    #[arg(long)]
    log_file: Option<PathBuf>,
}

type Tui = Terminal<CrosstermBackend<Stderr>>;

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_ref())?;

    // Everything that can fail at startup happens before the terminal is
    // switched into raw mode.
    let config = config::AppConfig::load();
    let cell_width = match cli.cell_width {
        Some(w) => config::check_cell_width(w)?,
        None => config.cell_width,
    };
    let credits = config::load_credits(cli.credits.as_deref())?;
    let canvas = Canvas::new(cli.rows, cli.cols)?;
    tracing::info!(
        rows = cli.rows,
        cols = cli.cols,
        cells = canvas.grid().cell_count(),
        cell_width,
        "starting canvas"
    );
    let mut state = AppState::new(canvas, config, credits, cell_width);

    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode()?;
    let mut stderr_handle = stderr();
    execute!(
        stderr_handle,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange
    )?;
    let backend = CrosstermBackend::new(stderr());
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut state).await;

    // ── teardown ──────────────────────────────────────────────
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableFocusChange
    )?;
    terminal.show_cursor()?;

    result
}

fn init_tracing(log_file: Option<&PathBuf>) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::from_default_env();
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr) // never pollute stdout
                .init();
        }
    }
    Ok(())
}

// ───────────────────────────────────────── event loop ───────

async fn run(terminal: &mut Tui, state: &mut AppState) -> Result<()> {
    let mut events = spawn_event_reader(Duration::from_millis(100));

    loop {
        terminal.draw(|frame| draw(frame, state))?;

        let Some(event) = events.recv().await else {
            break;
        };
        match event {
            AppEvent::Key(k) => handler::handle_key(state, k),
            AppEvent::Mouse(m) => handler::handle_mouse(state, m),
            AppEvent::FocusLost => handler::handle_focus_lost(state),
            AppEvent::Resize | AppEvent::Tick => {}
        }

        if state.should_quit {
            break;
        }
    }

    tracing::info!(generation = state.canvas.generation(), "canvas closed");
    Ok(())
}

fn draw(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();
    state.terminal_area = area;
    let layout = AppLayout::from_area(area);

    frame.render_widget(
        ToolbarWidget {
            toolbar: &state.toolbar,
            selected: state.canvas.tool(),
        },
        layout.toolbar_area,
    );

    frame.render_widget(
        pane_block(state.canvas.tool(), state.canvas.grid().alive_count()),
        layout.grid_area,
    );
    frame.render_widget(
        GridWidget::new(state.canvas.grid(), state.cell_width),
        layout.grid_inner,
    );

    let hint = state.status_hint();
    frame.render_widget(
        StatusBar {
            generation: state.canvas.generation(),
            hint: &hint,
        },
        layout.status_area,
    );

    if state.active_view == ActiveView::InfoDialog {
        frame.render_widget(InfoPopup { text: &state.credits }, area);
    }
}
