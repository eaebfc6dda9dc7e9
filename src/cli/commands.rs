use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};

use crate::index_storage::{DEFAULT_INDEX_FILENAME, render_index, write_index};
use crate::indexer::{
    ErrorPolicy, PerspectiveIndex, apply_perspective_index, build_filename_index,
    build_perspective_index, check_index,
};
use crate::utils::{format_path_with_tilde, resolve_data_dir};

#[derive(Parser)]
#[command(name = "data-list-indexer")]
#[command(version = "0.1.0")]
#[command(about = "Build the dataList.json index for a folder of perspective files", long_about = None)]
pub struct Cli {
    /// Data directory to scan (defaults to $DATA_LIST_DIR, then the current directory)
    #[arg(short, long, global = true)]
    pub dir: Option<PathBuf>,

    /// Index file name, written inside the data directory
    #[arg(short, long, global = true, default_value = DEFAULT_INDEX_FILENAME)]
    pub output: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Index files by name: id and name are the file name without `.json`
    Names,
    /// Index files by their perspectiveId/name fields, renaming each file to <perspectiveId>.json
    Perspectives {
        /// Show the renames and the index without changing anything
        #[arg(long)]
        dry_run: bool,

        /// What to do with a file that cannot be parsed
        #[arg(long, value_enum, default_value_t = ErrorPolicy::Abort)]
        on_error: ErrorPolicy,
    },
    /// Check an existing index for duplicate ids and missing files
    Check,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Some(command) = &cli.command {
        let data_dir = resolve_data_dir(cli.dir.clone());
        validate_index_name(&cli.output)?;

        match command {
            Commands::Names => index_by_name(&data_dir, &cli.output)?,
            Commands::Perspectives { dry_run, on_error } => {
                index_perspectives(&data_dir, &cli.output, *dry_run, *on_error)?
            }
            Commands::Check => check(&data_dir, &cli.output)?,
        }
    } else {
        println!("Use --help for usage information");
    }

    Ok(())
}

/// The index lives inside the data directory, so it must be a bare file name
fn validate_index_name(name: &str) -> Result<()> {
    let path = Path::new(name);
    if name.is_empty() || path.file_name().and_then(|n| n.to_str()) != Some(name) {
        bail!("Index file must be a plain file name, got {:?}", name);
    }
    Ok(())
}

fn index_by_name(data_dir: &Path, index_name: &str) -> Result<()> {
    let records = build_filename_index(data_dir, index_name)?;
    let path = write_index(data_dir, index_name, &records)?;

    println!("Wrote {} records to {}", records.len(), format_path_with_tilde(&path));
    Ok(())
}

fn index_perspectives(
    data_dir: &Path,
    index_name: &str,
    dry_run: bool,
    policy: ErrorPolicy,
) -> Result<()> {
    let index = build_perspective_index(data_dir, index_name, policy)?;

    if dry_run {
        print_dry_run(&index)?;
        return Ok(());
    }

    let path = apply_perspective_index(data_dir, index_name, &index)?;
    println!("Wrote {} records to {}", index.records.len(), format_path_with_tilde(&path));
    Ok(())
}

fn print_dry_run(index: &PerspectiveIndex) -> Result<()> {
    println!("Dry run: nothing was renamed or written");
    println!("================================");
    if index.plan.is_empty() {
        println!("No renames needed");
    }
    for planned in &index.plan.moves {
        println!("rename {} -> {}", planned.from_name, planned.to_name);
    }
    for collision in &index.plan.collisions {
        println!("collision {}: {}", collision.target, collision.sources.join(", "));
    }
    println!();
    println!("{}", render_index(&index.records)?);
    Ok(())
}

fn check(data_dir: &Path, index_name: &str) -> Result<()> {
    let report = check_index(data_dir, index_name)?;

    println!("Index check: {}", index_name);
    println!("================================");
    println!("Total records: {}", report.total);
    println!("Data directory: {}", format_path_with_tilde(data_dir));
    for id in &report.duplicate_ids {
        println!("  Duplicate id: {}", id);
    }
    for id in &report.missing_files {
        println!("  Missing file: {}.json", id);
    }

    if !report.is_clean() {
        bail!(
            "Index has {} duplicate ids and {} missing files",
            report.duplicate_ids.len(),
            report.missing_files.len()
        );
    }

    println!("Index is consistent");
    Ok(())
}
