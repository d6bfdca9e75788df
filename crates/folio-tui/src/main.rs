use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::crossterm::event;
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use folio_core::config_file;
use folio_core::Catalog;

mod action;
mod app;
mod input;
mod theme;
mod view;

use app::App;
use theme::ThemeKind;

/// Folio TUI - browse the publication catalog in the terminal
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to a TOML catalog (defaults to the built-in catalog)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Initial category tag, or "all"
    #[arg(short, long)]
    filter: Option<String>,

    /// Initial year order: newest or oldest
    #[arg(short, long)]
    sort: Option<String>,

    /// Color theme: hacker or modern
    #[arg(long)]
    theme: Option<String>,
}

/// Log to a file under the cache dir; the terminal belongs to the UI.
fn init_logging() -> Option<WorkerGuard> {
    let dir = dirs::cache_dir()?.join("folio");
    std::fs::create_dir_all(&dir).ok()?;
    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(&dir, "folio-tui.log"));
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .ok()?;
    Some(guard)
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    let _log_guard = init_logging();

    let config = config_file::load_config();

    // Resolve config from CLI flags > env vars > config file
    let catalog_path = args
        .catalog
        .or_else(|| std::env::var("FOLIO_CATALOG").ok().map(PathBuf::from))
        .or_else(|| config.catalog_path());
    if let Some(p) = &catalog_path
        && !p.exists()
    {
        anyhow::bail!("Catalog file not found at {}", p.display());
    }
    let catalog = Catalog::resolve(catalog_path.as_deref()).with_context(|| match &catalog_path {
        Some(p) => format!("Failed to load catalog from {}", p.display()),
        None => "Built-in catalog is invalid".to_string(),
    })?;

    let selection = config
        .initial_selection()
        .context("Invalid [display] defaults in config")?
        .override_with(args.filter.as_deref(), args.sort.as_deref())?;

    let theme_kind = ThemeKind::from_name(
        args.theme
            .or_else(|| config.theme())
            .as_deref()
            .unwrap_or("hacker"),
    );

    let mut app = App::new(catalog, selection, theme_kind);
    tracing::info!(
        publications = app.catalog.publications.len(),
        "starting folio-tui"
    );

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Restore the terminal before the panic message is printed
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    let result = run(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> anyhow::Result<()> {
    while !app.should_quit {
        terminal.draw(|f| app.view(f))?;
        if event::poll(Duration::from_millis(250))? {
            let evt = event::read()?;
            app.update(input::map_event(&evt));
        }
    }
    tracing::info!("quit");
    Ok(())
}
