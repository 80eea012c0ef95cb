use super::print::{print_json, print_messages, print_records};
use super::render::{parse_rgb, theme_css};
use super::setup::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use std::io::{self, Write};
use std::path::PathBuf;
use swatch::api::{ConfigAction, SwatchApi, SwatchPaths};
use swatch::config::{SwatchConfig, KEYS};
use swatch::error::{Result, SwatchError};
use swatch::store::fs::FileStore;
use tracing::Level;

const HOME_ENV: &str = "SWATCH_HOME";

/// Exit status for a failed run. Validation and missing colors get their
/// own codes so scripts can tell them apart from real failures.
pub fn exit_code(err: &SwatchError) -> i32 {
    match err {
        SwatchError::NotFound(_) => 2,
        SwatchError::Validation(_) => 65,
        _ => 1,
    }
}

/// What to print on stderr for a failed run. Validation and not-found
/// messages are shown as they are; anything else is an `Error:`.
pub fn error_message(err: &SwatchError) -> String {
    match err {
        SwatchError::NotFound(_) | SwatchError::Validation(_) => err.to_string(),
        _ => format!("Error: {}", err),
    }
}

struct AppContext {
    api: SwatchApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add { hex }) => handle_add(&ctx, &hex),
        Some(Commands::List { json }) => handle_list(&ctx, json),
        Some(Commands::View { ids, json }) => handle_view(&ctx, &ids, json),
        Some(Commands::Update { id, hex }) => handle_update(&ctx, &id, &hex),
        Some(Commands::Delete { ids }) => handle_delete(&ctx, &ids),
        Some(Commands::Clear { yes }) => handle_clear(&ctx, yes),
        Some(Commands::Css { id }) => handle_css(&ctx, &id),
        Some(Commands::Path) => handle_path(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx, false),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    // try_init: keep going if a subscriber is already installed
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn resolve_home(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(home) = flag {
        return Ok(home);
    }
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "swatch", "swatch")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| SwatchError::Store("Could not determine a data directory".to_string()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let home = resolve_home(cli.home.clone())?;
    let config = SwatchConfig::load(&home)?;
    let data_file = cli
        .file
        .clone()
        .unwrap_or_else(|| config.data_file_in(&home));

    let store = FileStore::open(&data_file)?;
    let paths = SwatchPaths { home, data_file };
    let api = SwatchApi::new(store, config.rules(), paths);

    Ok(AppContext { api })
}

fn handle_add(ctx: &AppContext, hex: &str) -> Result<()> {
    let result = ctx.api.add_color(hex)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, json: bool) -> Result<()> {
    let result = ctx.api.list_colors()?;
    if json {
        return print_json(&result.listed);
    }
    print_records(&result.listed);
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &AppContext, ids: &[String], json: bool) -> Result<()> {
    let result = ctx.api.view_colors(ids)?;
    if json {
        return print_json(&result.listed);
    }
    print_records(&result.listed);
    Ok(())
}

fn handle_update(ctx: &AppContext, id: &str, hex: &str) -> Result<()> {
    let result = ctx.api.update_color(id, hex)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &AppContext, ids: &[String]) -> Result<()> {
    let result = ctx.api.delete_colors(ids)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_clear(ctx: &AppContext, yes: bool) -> Result<()> {
    let current = ctx.api.list_colors()?.listed;
    if current.is_empty() {
        println!("No colors to clear.");
        return Ok(());
    }

    if !yes {
        println!("This will permanently remove the following colors:");
        print_records(&current);
        print!("[Y] To clear: ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        if input.trim() != "Y" {
            println!("Operation cancelled.");
            return Ok(());
        }
    }

    let result = ctx.api.clear_colors()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_css(ctx: &AppContext, id: &str) -> Result<()> {
    let ids = [id];
    let result = ctx.api.view_colors(&ids)?;
    for record in &result.listed {
        let rgb = parse_rgb(&record.hex).ok_or_else(|| {
            SwatchError::Api(format!(
                "Color {} is not a hex color: {}",
                record.id, record.hex
            ))
        })?;
        println!("{}", theme_css(rgb));
    }
    Ok(())
}

fn handle_path(ctx: &AppContext) -> Result<()> {
    println!("{}", ctx.api.paths().data_file.display());
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if let (Some(config), true) = (&result.config, result.messages.is_empty()) {
        for key in KEYS {
            if let Some(value) = config.get(key) {
                println!("{} = {}", key, value);
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}
