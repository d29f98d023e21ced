use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::registry::{ANONYMOUS_BLOCK_TYPE, BlockRegistry};

/// What an extraction produced: the file it wrote and how many blocks
/// went into it.
#[derive(Debug)]
pub struct ExtractOutcome {
    pub target: PathBuf,
    pub block_count: usize,
}

/// Writes every block of `block_type` to `<dir-of-source>/<block_type>.tf`.
///
/// Each block line is written followed by a newline. Anonymous `locals`
/// blocks get one blank line between successive blocks; named blocks are
/// written back-to-back in name order. A type with no registered blocks
/// still produces the (empty) target file.
pub fn extract_to_file(
    registry: &BlockRegistry,
    block_type: &str,
    source_path: &Path,
) -> Result<ExtractOutcome> {
    let target_dir = source_path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let target = target_dir.join(format!("{block_type}.tf"));

    let mut content = String::new();
    let mut block_count = 0;

    if block_type == ANONYMOUS_BLOCK_TYPE {
        for (position, block) in registry.anonymous_blocks().iter().enumerate() {
            if position > 0 {
                content.push('\n');
            }
            for line in block {
                content.push_str(line);
                content.push('\n');
            }
            block_count += 1;
        }
    } else if let Some(entries) = registry.named_blocks(block_type) {
        for lines in entries.values() {
            for line in lines {
                content.push_str(line);
                content.push('\n');
            }
            block_count += 1;
        }
    }

    fs::write(&target, content)
        .with_context(|| format!("Failed to write extracted blocks to {}", target.display()))?;

    Ok(ExtractOutcome {
        target,
        block_count,
    })
}
