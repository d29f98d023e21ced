use std::collections::BTreeMap;

use crate::core::scanner::Block;

/// The reserved block type whose blocks carry no distinguishing name.
/// Its blocks accumulate as an ordered list instead of a named map.
pub const ANONYMOUS_BLOCK_TYPE: &str = "locals";

/// One registry entry, tagged by how its blocks are keyed.
///
/// The reserved `locals` type stores an ordered list of block
/// line-vectors; every other type stores a name-to-lines map. Modeling
/// the two shapes as variants keeps every read site free of runtime
/// type assertions.
#[derive(Debug, Clone, PartialEq)]
pub enum RegistryEntry {
    Anonymous(Vec<Vec<String>>),
    Named(BTreeMap<String, Vec<String>>),
}

/// The keyed accumulation of all scanned blocks, grouped by type.
///
/// Built once per command invocation by folding the scanner's output in
/// emission order; read-only afterwards. Within a named type a later
/// block with the same name overwrites the earlier one, without error.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BlockRegistry {
    entries: BTreeMap<String, RegistryEntry>,
}

impl BlockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds a full scan result into a registry, in emission order.
    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        blocks.into_iter().fold(Self::new(), Self::register)
    }

    /// Registers one block and returns the updated registry.
    ///
    /// The reserved `locals` entry is created on first use regardless of
    /// the block's own type, so a registry that has seen any block
    /// always exposes that key. Anonymous blocks append to the list and
    /// their name is ignored; named blocks insert with last-write-wins
    /// semantics, an empty name becoming the literal empty-string key.
    pub fn register(mut self, block: Block) -> Self {
        self.entries
            .entry(ANONYMOUS_BLOCK_TYPE.to_string())
            .or_insert_with(|| RegistryEntry::Anonymous(Vec::new()));

        if block.block_type == ANONYMOUS_BLOCK_TYPE {
            if let Some(RegistryEntry::Anonymous(list)) =
                self.entries.get_mut(ANONYMOUS_BLOCK_TYPE)
            {
                list.push(block.lines);
            }
        } else {
            let entry = self
                .entries
                .entry(block.block_type)
                .or_insert_with(|| RegistryEntry::Named(BTreeMap::new()));
            // Only the reserved key holds the Anonymous variant, and it
            // is excluded by the branch above.
            if let RegistryEntry::Named(map) = entry {
                map.insert(block.block_name, block.lines);
            }
        }

        self
    }

    /// The ordered anonymous block list; empty when no block has been
    /// registered at all.
    pub fn anonymous_blocks(&self) -> &[Vec<String>] {
        match self.entries.get(ANONYMOUS_BLOCK_TYPE) {
            Some(RegistryEntry::Anonymous(list)) => list,
            _ => &[],
        }
    }

    /// The name-to-lines map for one non-reserved block type.
    pub fn named_blocks(&self, block_type: &str) -> Option<&BTreeMap<String, Vec<String>>> {
        match self.entries.get(block_type) {
            Some(RegistryEntry::Named(map)) => Some(map),
            _ => None,
        }
    }

    /// Iterates every entry in block-type order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RegistryEntry)> {
        self.entries.iter().map(|(key, entry)| (key.as_str(), entry))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of named blocks across all non-reserved types.
    pub fn named_block_count(&self) -> usize {
        self.entries
            .values()
            .map(|entry| match entry {
                RegistryEntry::Named(map) => map.len(),
                RegistryEntry::Anonymous(_) => 0,
            })
            .sum()
    }
}
