//! Gridboard CLI
//!
//! Usage:
//!   gridboard [OPTIONS] <COMMAND>
//!
//! Commands:
//!   defaults   Print a stock layout as JSON
//!   autosort   Repack a saved layout
//!   check      Lint a saved layout (exit 1 on warnings)
//!   add        Add a widget to a saved layout
//!   snippet    Print a layout as an `export const` snippet
//!
//! Options:
//!   -c, --config <FILE>      Grid config (TOML format)
//!   --variant <VARIANT>      Layout variant (default: main or mobile by viewport)
//!   --viewport <WxH>         Viewport size (default: 1920x1080)
//!   -d, --debug              Log gesture and placement decisions to stderr

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use gridboard::lint;
use gridboard::ops::add_widget;
use gridboard::{
    autosort, build_widgets_from_layout, export_layout, format_layout_snippet, homepage_layout,
    load_layout_file, template_page_layout, GridConfig, GridMath, LayoutContext, LayoutEntry,
    LayoutVariant, Point, Viewport, Widget, WidgetKind, WidgetRegistry,
};

#[derive(Parser)]
#[command(name = "gridboard")]
#[command(about = "Grid and layout engine for widget dashboards")]
struct Cli {
    /// Grid config file (TOML format)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Layout variant; defaults to main or mobile depending on the viewport
    #[arg(long, global = true)]
    variant: Option<LayoutVariant>,

    /// Viewport size as WIDTHxHEIGHT
    #[arg(long, global = true, default_value = "1920x1080")]
    viewport: Viewport,

    /// Debug mode: log gesture and placement decisions
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print a stock layout as JSON
    Defaults {
        #[arg(long, value_enum, default_value_t = Page::Home)]
        page: Page,
        /// The mobile variant of the layout
        #[arg(long)]
        mobile: bool,
    },
    /// Repack the movable widgets of a saved layout
    Autosort { file: PathBuf },
    /// Lint a saved layout
    Check { file: PathBuf },
    /// Add a widget to a saved layout
    Add {
        file: PathBuf,
        kind: WidgetKind,
        /// Drop position as X,Y; omitted means "next to the rightmost widget"
        #[arg(long, value_parser = parse_point)]
        at: Option<Point>,
    },
    /// Print a layout as an `export const NAME = [...];` snippet
    Snippet {
        file: PathBuf,
        #[arg(long, default_value = "LAYOUT")]
        name: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Page {
    Home,
    Template,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let config = match &cli.config {
        Some(path) => match GridConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading grid config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => GridConfig::default(),
    };
    let math = GridMath::new(config, cli.viewport);
    let variant = cli
        .variant
        .unwrap_or_else(|| LayoutVariant::Main.for_form_factor(math.is_mobile_viewport()));
    let ctx = LayoutContext::layout_space(math, variant);
    let registry = WidgetRegistry::builtin();

    match cli.command {
        Command::Defaults { page, mobile } => {
            let layout = match page {
                Page::Home => homepage_layout(mobile),
                Page::Template => template_page_layout(mobile),
            };
            print_layout(&layout);
        }
        Command::Autosort { file } => {
            let widgets = load_widgets(&file, &ctx, &registry);
            print_layout(&export_layout(&autosort(&widgets, &ctx)));
        }
        Command::Check { file } => {
            let widgets = load_widgets(&file, &ctx, &registry);
            let warnings = lint::check(&widgets, &ctx);
            for warning in &warnings {
                eprintln!("warning: {}", warning);
            }
            if !warnings.is_empty() {
                std::process::exit(1);
            }
            println!("{}: {} widgets, no issues", file.display(), widgets.len());
        }
        Command::Add { file, kind, at } => {
            let widgets = load_widgets(&file, &ctx, &registry);
            // never on screen, so the automatic slot is used
            let click = at.unwrap_or(Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY));
            match add_widget(&widgets, kind, click, &ctx, &registry) {
                Ok(widgets) => print_layout(&export_layout(&widgets)),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Command::Snippet { file, name } => {
            let entries = load_entries(&file);
            match format_layout_snippet(&entries, &name) {
                Ok(snippet) => println!("{}", snippet),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }
}

fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("gridboard=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_entries(path: &Path) -> Vec<LayoutEntry> {
    match load_layout_file(path) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("Error reading layout '{}': {}", path.display(), e);
            std::process::exit(1);
        }
    }
}

fn load_widgets(path: &Path, ctx: &LayoutContext, registry: &WidgetRegistry) -> Vec<Widget> {
    build_widgets_from_layout(&load_entries(path), ctx, registry)
}

fn print_layout(entries: &[LayoutEntry]) {
    match serde_json::to_string_pretty(entries) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Parse `X,Y` into a point
fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{}'", s))?;
    let x = x
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid x '{}': {}", x, e))?;
    let y = y
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid y '{}': {}", y, e))?;
    Ok(Point::new(x, y))
}
