use anyhow::{Result, bail};
use std::path::Path;
use tracing::{debug, info, warn};

use crate::builders::exporter;
use crate::builders::extractor;
use crate::builders::reporter::{ConsoleReporter, ListingReporter};
use crate::core::reader;
use crate::core::registry::BlockRegistry;
use crate::core::scanner;

pub fn list_blocks(file: &Path, format: Option<&str>) -> Result<()> {
    let registry = load_registry(file)?;

    match format {
        Some(format) => {
            let rendered = exporter::render(&registry, format)?;
            println!("{rendered}");
        }
        None => ConsoleReporter::new().report(&registry)?,
    }

    Ok(())
}

pub fn extract_blocks(file: &Path, block_type: &str) -> Result<()> {
    let registry = load_registry(file)?;

    info!("extracting {} blocks from {}", block_type, file.display());
    let outcome = extractor::extract_to_file(&registry, block_type, file)?;
    if outcome.block_count == 0 {
        warn!(
            "no {} blocks found, wrote an empty {}",
            block_type,
            outcome.target.display()
        );
    }

    println!(
        "✓ Extracted {} block(s) to {}",
        outcome.block_count,
        outcome.target.display()
    );
    Ok(())
}

// Shared front half of both commands: validate the input file, read it
// into lines, scan, and fold the blocks into a registry. Per-block
// diagnostics are emitted here so the scanner itself stays pure.
fn load_registry(file: &Path) -> Result<BlockRegistry> {
    check_input_file(file)?;

    let lines = reader::read_lines(file)?;
    let blocks = scanner::scan_blocks(&lines);
    for block in &blocks {
        debug!(
            "found {} block :: {} at lines {} to {}",
            block.block_type,
            block.block_name,
            block.start_line + 1,
            block.end_line + 1
        );
    }

    Ok(BlockRegistry::from_blocks(blocks))
}

fn check_input_file(file: &Path) -> Result<()> {
    if !file.exists() {
        bail!("Target file {} does not exist", file.display());
    }
    if !has_tf_extension(file) {
        bail!("Target file {} is not a terraform file", file.display());
    }
    Ok(())
}

pub fn has_tf_extension(file: &Path) -> bool {
    file.to_string_lossy().ends_with(".tf")
}
