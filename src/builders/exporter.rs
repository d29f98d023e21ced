use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::core::registry::{BlockRegistry, RegistryEntry};

/// A serializable inventory of the registry: how many anonymous blocks
/// were seen, and the entry names under every named type.
#[derive(Debug, Serialize)]
pub struct RegistrySummary {
    pub anonymous_blocks: usize,
    pub types: BTreeMap<String, Vec<String>>,
}

impl RegistrySummary {
    pub fn from_registry(registry: &BlockRegistry) -> Self {
        let mut types = BTreeMap::new();
        for (block_type, entry) in registry.iter() {
            if let RegistryEntry::Named(entries) = entry {
                types.insert(block_type.to_string(), entries.keys().cloned().collect());
            }
        }

        Self {
            anonymous_blocks: registry.anonymous_blocks().len(),
            types,
        }
    }
}

/// Renders the registry inventory in the requested format. Anything
/// other than `json` or `yaml` falls back to TOML.
pub fn render(registry: &BlockRegistry, format: &str) -> Result<String> {
    let summary = RegistrySummary::from_registry(registry);

    let content = match format {
        "json" => {
            serde_json::to_string_pretty(&summary).context("Failed to serialize to JSON")?
        }
        "yaml" => serde_yaml::to_string(&summary).context("Failed to serialize to YAML")?,
        "toml" | _ => toml::to_string_pretty(&summary).context("Failed to serialize to TOML")?,
    };

    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::registry::BlockRegistry;
    use crate::core::scanner::Block;

    fn sample_registry() -> BlockRegistry {
        BlockRegistry::new()
            .register(Block {
                block_type: "locals".to_string(),
                block_name: String::new(),
                start_line: 0,
                end_line: 0,
                lines: vec!["locals { a = 1 }".to_string()],
            })
            .register(Block {
                block_type: "resource".to_string(),
                block_name: "x.y".to_string(),
                start_line: 1,
                end_line: 1,
                lines: vec!["resource \"x\" \"y\" { z = 2 }".to_string()],
            })
    }

    #[test]
    fn test_json_render_carries_names_and_counts() {
        let rendered = render(&sample_registry(), "json").unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["anonymous_blocks"], 1);
        assert_eq!(value["types"]["resource"][0], "x.y");
    }

    #[test]
    fn test_yaml_render() {
        let rendered = render(&sample_registry(), "yaml").unwrap();
        assert!(rendered.contains("anonymous_blocks: 1"));
        assert!(rendered.contains("- x.y"));
    }

    #[test]
    fn test_unknown_format_falls_back_to_toml() {
        let rendered = render(&sample_registry(), "ini").unwrap();
        assert!(rendered.contains("anonymous_blocks = 1"));
        assert!(rendered.contains("[types]"));
    }
}
