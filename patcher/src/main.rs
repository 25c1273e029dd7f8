//! Command-line entry point for `patcher`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use patcher::apply::{ApplyOptions, apply_all};
use patcher::check::{CheckReport, CheckStatus, check_patches};
use patcher::core::types::Patch;
use patcher::exit_codes;
use patcher::io::manifest::{
    DEFAULT_MANIFEST_NAME, ManifestSource, load_manifest, write_builtin_manifest,
};
use patcher::logging;
use patcher::select::select_patches;

#[derive(Parser)]
#[command(
    name = "patcher",
    version,
    about = "Apply literal, fail-fast text patches to project files"
)]
struct Cli {
    /// Project root that patch paths are relative to.
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    /// Patch manifest. Defaults to `<root>/patches.toml`, falling back to the
    /// built-in patch set when that file does not exist. A manifest named
    /// here must exist.
    #[arg(long, global = true)]
    manifest: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Apply patches in order, stopping at the first missing literal (default).
    Apply {
        /// Only apply the named patch. Repeatable.
        #[arg(long, value_name = "NAME")]
        only: Vec<String>,
        /// Print a unified diff per patch instead of writing.
        #[arg(long)]
        dry_run: bool,
    },
    /// Report whether every patch's literals are present, without writing.
    Check {
        /// Only check the named patch. Repeatable.
        #[arg(long, value_name = "NAME")]
        only: Vec<String>,
    },
    /// Print the patches in the manifest.
    List,
    /// Write the built-in manifest to disk.
    Init {
        /// Overwrite an existing manifest.
        #[arg(short, long)]
        force: bool,
    },
}

fn main() {
    logging::init();
    let code = match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{:#}", err);
            exit_codes::for_error(&err)
        }
    };
    std::process::exit(code);
}

fn run() -> Result<i32> {
    // Usage errors exit with INVALID, not clap's default code.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            err.print().context("print usage")?;
            return Ok(if err.use_stderr() {
                exit_codes::INVALID
            } else {
                exit_codes::OK
            });
        }
    };
    let manifest = match cli.manifest.clone() {
        Some(path) => ManifestSource::Explicit(path),
        None => ManifestSource::Default(cli.root.join(DEFAULT_MANIFEST_NAME)),
    };

    match cli.command.unwrap_or(Command::Apply {
        only: Vec::new(),
        dry_run: false,
    }) {
        Command::Apply { only, dry_run } => cmd_apply(&cli.root, &manifest, &only, dry_run),
        Command::Check { only } => cmd_check(&cli.root, &manifest, &only),
        Command::List => cmd_list(&manifest),
        Command::Init { force } => cmd_init(manifest.path(), force),
    }
}

fn cmd_apply(
    root: &Path,
    manifest: &ManifestSource,
    only: &[String],
    dry_run: bool,
) -> Result<i32> {
    let patches = load_manifest(manifest)?;
    let selected = select_patches(&patches, only)?;
    let applied = apply_all(root, &selected, &ApplyOptions { dry_run })?;
    for patch in applied {
        match patch.diff {
            Some(diff) => {
                println!("dry-run: {} {}", patch.name, patch.path.display());
                print!("{diff}");
            }
            None => println!(
                "applied: {} {} ({} -> {} bytes)",
                patch.name,
                patch.path.display(),
                patch.bytes_before,
                patch.bytes_after
            ),
        }
    }
    Ok(exit_codes::OK)
}

fn cmd_check(root: &Path, manifest: &ManifestSource, only: &[String]) -> Result<i32> {
    let patches = load_manifest(manifest)?;
    let selected = select_patches(&patches, only)?;
    let reports = check_patches(root, &selected)?;
    for report in &reports {
        match &report.status {
            CheckStatus::Ready => println!("ok: {} ({})", report.name, report.path.display()),
            CheckStatus::Missing(err) => println!(
                "missing: {}: {} ({})",
                report.name,
                err,
                report.path.display()
            ),
        }
    }
    if reports.iter().all(CheckReport::is_ready) {
        Ok(exit_codes::OK)
    } else {
        Ok(exit_codes::PRECONDITION)
    }
}

fn cmd_list(manifest: &ManifestSource) -> Result<i32> {
    let patches: Vec<Patch> = load_manifest(manifest)?;
    for patch in patches {
        println!("{}\t{}\t{}", patch.name, patch.edit, patch.path.display());
    }
    Ok(exit_codes::OK)
}

fn cmd_init(manifest_path: &Path, force: bool) -> Result<i32> {
    write_builtin_manifest(manifest_path, force)?;
    println!("wrote {}", manifest_path.display());
    Ok(exit_codes::OK)
}
