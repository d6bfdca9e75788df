use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use folio_core::config_file::{self, ConfigFile};
use folio_core::{Catalog, CategoryFilter, Selection};
use folio_reporting::{ExportFormat, RenderOptions};
use tracing_subscriber::EnvFilter;

mod output;

use output::ColorMode;

/// Folio - list, filter and export a publication catalog
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to a TOML catalog (defaults to the built-in catalog)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the publications for a filter and sort order
    List {
        /// Category tag, or "all"
        #[arg(short, long)]
        filter: Option<String>,

        /// Year order: newest or oldest
        #[arg(short, long)]
        sort: Option<String>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },

    /// Print the available category filters
    Categories {
        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },

    /// Render a selection to a file
    Export {
        /// Output format: html, page, json, markdown, text
        #[arg(long, default_value = "page")]
        format: String,

        /// Output path (defaults to publications.<ext>)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Category tag, or "all"
        #[arg(short, long)]
        filter: Option<String>,

        /// Year order: newest or oldest
        #[arg(short, long)]
        sort: Option<String>,
    },

    /// Validate the catalog and report every problem
    Check {
        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = config_file::load_config();

    // Resolve catalog path: CLI flag > env var > config file > built-in
    let catalog_path = cli
        .catalog
        .clone()
        .or_else(|| std::env::var("FOLIO_CATALOG").ok().map(PathBuf::from))
        .or_else(|| config.catalog_path());

    match cli.command {
        Command::Check { no_color } => check(catalog_path.as_deref(), ColorMode(!no_color)),
        Command::List {
            filter,
            sort,
            no_color,
        } => {
            let catalog = open_catalog(catalog_path.as_deref())?;
            let selection = resolve_selection(&config, filter, sort)?;
            list(&catalog, &selection, ColorMode(!no_color))
        }
        Command::Categories { no_color } => {
            let catalog = open_catalog(catalog_path.as_deref())?;
            let mut out = std::io::stdout().lock();
            output::print_categories(
                &mut out,
                &catalog,
                &catalog.categories(),
                ColorMode(!no_color),
            )?;
            Ok(())
        }
        Command::Export {
            format,
            output,
            filter,
            sort,
        } => {
            let catalog = open_catalog(catalog_path.as_deref())?;
            let selection = resolve_selection(&config, filter, sort)?;
            export(&catalog, &config, &selection, &format, output)
        }
    }
}

fn open_catalog(path: Option<&Path>) -> anyhow::Result<Catalog> {
    if let Some(p) = path
        && !p.exists()
    {
        anyhow::bail!("Catalog file not found at {}", p.display());
    }
    Catalog::resolve(path).with_context(|| match path {
        Some(p) => format!("Failed to load catalog from {}", p.display()),
        None => "Built-in catalog is invalid".to_string(),
    })
}

/// Flags override the configured defaults half by half.
fn resolve_selection(
    config: &ConfigFile,
    filter: Option<String>,
    sort: Option<String>,
) -> anyhow::Result<Selection> {
    let defaults = config
        .initial_selection()
        .context("Invalid [display] defaults in config")?;
    Ok(defaults.override_with(filter.as_deref(), sort.as_deref())?)
}

fn list(catalog: &Catalog, selection: &Selection, color: ColorMode) -> anyhow::Result<()> {
    let view = catalog.view(selection);
    if let CategoryFilter::Category(tag) = &selection.filter
        && !catalog.has_category(tag)
    {
        tracing::info!(category = %tag, "filter matches no category in the catalog");
    }
    let mut out = std::io::stdout().lock();
    output::print_view(&mut out, catalog, &view, color)?;
    out.flush()?;
    Ok(())
}

fn export(
    catalog: &Catalog,
    config: &ConfigFile,
    selection: &Selection,
    format: &str,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let format: ExportFormat = format.parse().map_err(anyhow::Error::msg)?;
    let path = output.unwrap_or_else(|| PathBuf::from(format!("publications.{}", format.extension())));
    let view = catalog.view(selection);
    let options = RenderOptions::from_config(config);

    folio_reporting::export_to_path(catalog, &view, format, &options, &path)
        .map_err(anyhow::Error::msg)
        .with_context(|| format!("Failed to export to {}", path.display()))?;

    tracing::info!(
        path = %path.display(),
        format = format.label(),
        records = view.len(),
        "exported selection"
    );
    println!("Wrote {} ({} records)", path.display(), view.len());
    Ok(())
}

fn check(path: Option<&Path>, color: ColorMode) -> anyhow::Result<()> {
    let catalog = match path {
        Some(p) => {
            let content = std::fs::read_to_string(p)
                .with_context(|| format!("Failed to read catalog {}", p.display()))?;
            // Parse without validating so every problem can be listed.
            Catalog::parse_unchecked(&content)
                .with_context(|| format!("Failed to parse {}", p.display()))?
        }
        None => Catalog::builtin(),
    };

    let problems = catalog.problems();
    let mut out = std::io::stdout().lock();
    output::print_check(&mut out, &catalog, &problems, color)?;
    if !problems.is_empty() {
        anyhow::bail!("{} catalog problem(s) found", problems.len());
    }
    Ok(())
}
