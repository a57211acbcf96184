use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use termtile::common::config::Config;
use termtile::common::log;
use termtile::layout_engine::{LayoutMode, calculate_tiling_positions};
use termtile::sys::geometry::{Offset, Size};
use termtile::sys::host::WindowId;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Path to configuration file to use (overrides default).
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print where each window of a layout would be placed.
    Preview {
        #[arg(long)]
        mode: LayoutMode,

        #[arg(long)]
        width: i32,

        #[arg(long)]
        height: i32,

        /// Number of windows to lay out.
        #[arg(long)]
        windows: usize,

        /// Vertical gap. Defaults to the configured gap.
        #[arg(long, allow_negative_numbers = true)]
        gap: Option<i32>,

        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Check the configuration file and report problems.
    Validate,
}

#[derive(Serialize)]
struct PreviewRow {
    id: WindowId,
    position: Offset,
    size: Size,
}

fn main() {
    let opt = Cli::parse();
    log::init_logging();

    let result = match opt.command {
        Commands::Preview {
            mode,
            width,
            height,
            windows,
            gap,
            json,
        } => preview(opt.config, mode, Size::new(width, height), windows, gap, json),
        Commands::Validate => validate(opt.config),
    };

    if let Err(e) = result {
        eprintln!("{e:#}");
        process::exit(1);
    }
}

fn preview(
    config: Option<PathBuf>,
    mode: LayoutMode,
    container: Size,
    count: usize,
    gap: Option<i32>,
    json: bool,
) -> anyhow::Result<()> {
    let gap = match gap {
        Some(gap) => gap,
        None => Config::load(config.as_deref())?.settings.tiling.gap,
    };
    let ids: Vec<WindowId> = (1..=count)
        .map(|i| WindowId::new(format!("w{i}")).context("window id must not be empty"))
        .collect::<anyhow::Result<_>>()?;

    let placements = calculate_tiling_positions(&ids, mode, container, gap)?;
    let rows: Vec<PreviewRow> = ids
        .into_iter()
        .filter_map(|id| {
            let placement = placements.get(&id).copied()?;
            Some(PreviewRow {
                id,
                position: placement.position,
                size: placement.size,
            })
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if rows.is_empty() {
        println!("{} places no windows ({count} requested)", mode.label());
        return Ok(());
    }
    println!("{} in {container}, gap {gap}", mode.label());
    println!("{:<6} {:>6} {:>6} {:>6} {:>6}", "id", "x", "y", "width", "height");
    for row in rows {
        println!(
            "{:<6} {:>6} {:>6} {:>6} {:>6}",
            row.id.as_str(),
            row.position.x,
            row.position.y,
            row.size.width,
            row.size.height
        );
    }
    Ok(())
}

fn validate(config: Option<PathBuf>) -> anyhow::Result<()> {
    let config = Config::load(config.as_deref())?;
    let issues = config.validate();
    if issues.is_empty() {
        println!("configuration ok");
        return Ok(());
    }
    for issue in &issues {
        eprintln!("{issue}");
    }
    anyhow::bail!("{} configuration issue(s) found", issues.len())
}
