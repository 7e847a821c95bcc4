//! Command-line compiler driver.
//!
//! Accepts a single `.jack` file or a directory, compiles every unit found,
//! and writes each unit's instructions to a sibling `.vm` file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::Parser;
use log::info;

#[derive(Debug, Parser)]
#[command(name = "jackc", about = "Compile Jack source to VM instructions", version)]
struct Args {
    /// A .jack file, or a directory containing .jack files.
    path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let sources = collect_sources(&args.path)?;
    if sources.is_empty() {
        bail!("no .jack files under {}", args.path.display());
    }
    for source in &sources {
        compile_file(source)?;
    }
    Ok(())
}

/// The `.jack` files designated by the argument: the file itself, or the
/// directory's immediate children (no recursion), sorted for stable output
/// order.
fn collect_sources(path: &Path) -> anyhow::Result<Vec<PathBuf>> {
    if path.is_file() {
        return Ok(vec![path.to_owned()]);
    }

    let entries = fs::read_dir(path)
        .with_context(|| format!("failed to read directory {}", path.display()))?;
    let mut sources = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("failed to read entry in {}", path.display()))?;
        let candidate = entry.path();
        if candidate.extension().is_some_and(|ext| ext == "jack") {
            sources.push(candidate);
        }
    }
    sources.sort();
    Ok(sources)
}

fn compile_file(source: &Path) -> anyhow::Result<()> {
    let text = fs::read_to_string(source)
        .with_context(|| format!("failed to read {}", source.display()))?;
    let lines = jackc::compile_source(&text)
        .with_context(|| format!("failed to compile {}", source.display()))?;

    let output = source.with_extension("vm");
    let mut rendered = lines.join("\n");
    rendered.push('\n');
    fs::write(&output, rendered)
        .with_context(|| format!("failed to write {}", output.display()))?;

    info!("{} -> {}", source.display(), output.display());
    Ok(())
}
