mod app;
mod canvas;
mod ui;

use std::fs::File;
use std::io::stdout;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
        MouseButton, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use shapeclick_core::{PointerButton, Scene};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use app::App;
use canvas::Viewport;

/// Clickable shapes in the terminal
#[derive(Parser, Debug)]
#[command(name = "shapeclick")]
#[command(version, about, long_about = None)]
struct Args {
    /// Scene file (JSON) to show instead of the demo scene
    #[arg(value_name = "SCENE")]
    scene: Option<PathBuf>,

    /// Write the scene as SVG to this path and exit
    #[arg(long, value_name = "PATH")]
    export_svg: Option<PathBuf>,

    /// Start with bounding boxes shown
    #[arg(long)]
    show_bounds: bool,

    /// Start with shape names hidden
    #[arg(long)]
    hide_names: bool,

    /// Canvas units per terminal column
    #[arg(long, default_value_t = 10)]
    cell_width: i32,

    /// Canvas units per terminal row
    #[arg(long, default_value_t = 20)]
    cell_height: i32,

    /// Append logs to this file while the terminal UI runs
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args)?;

    let mut scene = match &args.scene {
        Some(path) => Scene::load(path)?,
        None => Scene::demo(),
    };
    if args.show_bounds {
        scene.show_bounding_boxes = true;
    }
    if args.hide_names {
        scene.show_names = false;
    }

    if let Some(path) = &args.export_svg {
        let shapes = scene.to_collection();
        shapeclick_export::save_svg(&shapes, scene.width, scene.height, path)?;
        info!(path = %path.display(), shapes = shapes.len(), "exported svg");
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Reserve 2 rows for status/help
    let size = terminal.size()?;
    let viewport = Viewport::new(
        size.width,
        size.height.saturating_sub(2),
        args.cell_width,
        args.cell_height,
    );
    let mut app = App::new(&scene, viewport);
    app.scene_path = args.scene.clone();

    let result = run_app(&mut terminal, &mut app);

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {:?}", e);
    }

    Ok(())
}

/// Logs go to stderr in export mode. The terminal UI owns stdout and stderr,
/// so there logs are written only when a log file is given.
fn init_tracing(args: &Args) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if args.export_svg.is_some() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| anyhow::anyhow!(e))?;
    } else if let Some(path) = &args.log_file {
        let file = File::options()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init()
            .map_err(|e| anyhow::anyhow!(e))?;
    }
    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|frame| ui::render(frame, app))?;

        if event::poll(Duration::from_millis(16))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.clear_status();
                    handle_key(app, key);
                }
                Event::Mouse(mouse) => {
                    let button = match mouse.kind {
                        MouseEventKind::Down(MouseButton::Left) => Some(PointerButton::Primary),
                        MouseEventKind::Down(MouseButton::Right) => Some(PointerButton::Secondary),
                        _ => None,
                    };
                    if let Some(button) = button {
                        app.click(mouse.column, mouse.row, button);
                    }
                }
                Event::Resize(w, h) => {
                    app.viewport.resize(w, h.saturating_sub(2));
                }
                _ => {}
            }
        }
    }

    Ok(())
}

fn handle_key(app: &mut App, key: event::KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.running = false,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
        }

        // Display flags
        KeyCode::Char('n') => app.toggle_names(),
        KeyCode::Char('b') => app.toggle_bounding_boxes(),

        // SVG export
        KeyCode::Char('e') => {
            if let Err(e) = app.export_svg() {
                warn!(error = %e, "svg export failed");
                app.set_status(format!("Error: {:#}", e));
            }
        }

        // Viewport panning
        KeyCode::Up => app.viewport.pan(0, -1),
        KeyCode::Down => app.viewport.pan(0, 1),
        KeyCode::Left => app.viewport.pan(-1, 0),
        KeyCode::Right => app.viewport.pan(1, 0),

        _ => {}
    }
}
