use anyhow::Result;
use colored::Colorize;
use std::collections::BTreeMap;

use crate::core::registry::{ANONYMOUS_BLOCK_TYPE, BlockRegistry, RegistryEntry};

pub trait ListingReporter {
    fn report(&self, registry: &BlockRegistry) -> Result<()>;
}

/// A concrete implementation of `ListingReporter` that prints the
/// listing to the console.
///
/// This is the primary reporter used by the `list` command when no
/// serialization format is requested.
pub struct ConsoleReporter;

impl ConsoleReporter {
    /// Constructs a new `ConsoleReporter` instance.
    pub fn new() -> Self {
        Self
    }

    /// A private helper that formats the listing section for a single
    /// block type: the type header plus one tree row per entry name,
    /// with each entry's line count.
    ///
    /// # Arguments
    /// * `block_type`: The block type this section covers.
    /// * `entries`: The name-to-lines map registered under that type.
    ///
    /// # Returns
    /// A `String` containing the formatted section, without a trailing
    /// newline.
    fn format_type_listing(
        &self,
        block_type: &str,
        entries: &BTreeMap<String, Vec<String>>,
    ) -> String {
        let mut section = format!(
            "📁 {} ({} block(s))",
            block_type.bright_yellow().bold(),
            entries.len()
        );

        for (position, (name, lines)) in entries.iter().enumerate() {
            let glyph = if position + 1 == entries.len() {
                "└─"
            } else {
                "├─"
            };
            section.push_str(&format!("\n  {} {} ({} line(s))", glyph, name, lines.len()));
        }

        section
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Implementation of the `ListingReporter` trait for `ConsoleReporter`.
impl ListingReporter for ConsoleReporter {
    /// Generates and prints the full listing to the standard output.
    fn report(&self, registry: &BlockRegistry) -> Result<()> {
        println!("{}", "📊 Terraform Block Listing".cyan().bold());
        println!("==========================");

        // If the scan found nothing at all, print a simple message and exit.
        if registry.is_empty() {
            println!("No blocks found in the input file.");
            return Ok(());
        }

        let mut type_count = 0;

        // One section per named type; the reserved anonymous type is
        // skipped here and only shows up in the summary count.
        for (block_type, entry) in registry.iter() {
            if block_type == ANONYMOUS_BLOCK_TYPE {
                continue;
            }
            if let RegistryEntry::Named(entries) = entry {
                type_count += 1;
                println!("{}", self.format_type_listing(block_type, entries));
            }
        }

        println!("\n{}", "📈 Summary:".cyan().bold());
        println!("  Block types: {type_count}");
        println!("  Named blocks: {}", registry.named_block_count());
        println!(
            "  {} blocks: {}",
            ANONYMOUS_BLOCK_TYPE,
            registry.anonymous_blocks().len()
        );

        Ok(())
    }
}
