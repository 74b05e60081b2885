use crate::headless::map::{ClassMap, PropertyMap};
use crate::style::{parse_declarations, split_blocks, to_camel_case};

/// Outcome of extracting one stylesheet.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Extraction {
    pub classes: ClassMap,
    /// Blocks matched, counting repeats of the same class.
    pub block_count: usize,
    /// Non-whitespace bytes inside matched blocks that no declaration consumed.
    pub skipped_bytes: usize,
}

/// Build the class map for every `.{prefix}name { ... }` block in `css`.
///
/// A class seen twice keeps only its last block's properties. Within one
/// block a repeated property keeps its last value.
pub fn extract(css: &str, prefix: &str) -> Extraction {
    let mut extraction = Extraction::default();

    for block in split_blocks(css, prefix) {
        let scan = parse_declarations(&block.body);
        if scan.skipped_bytes > 0 {
            log::debug!(
                ".{}: {} bytes did not parse as declarations",
                block.class_name,
                scan.skipped_bytes
            );
        }

        let mut properties = PropertyMap::new();
        for decl in scan.declarations {
            log::trace!(".{} {}", block.class_name, decl);
            properties.insert(to_camel_case(&decl.property), decl.value);
        }

        if extraction
            .classes
            .insert(block.class_name.clone(), properties)
            .is_some()
        {
            log::debug!(".{} redefined, keeping the later block", block.class_name);
        }
        extraction.block_count += 1;
        extraction.skipped_bytes += scan.skipped_bytes;
    }
    extraction
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::is_semantic_class;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap;

    fn class(extraction: &Extraction, name: &str) -> Vec<(String, String)> {
        extraction
            .classes
            .get(name)
            .map(|props| {
                props
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn content(extraction: &Extraction) -> BTreeMap<String, BTreeMap<String, String>> {
        extraction
            .classes
            .iter()
            .map(|(name, props)| {
                let props = props
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.clone()))
                    .collect();
                (name.to_string(), props)
            })
            .collect()
    }

    #[test]
    fn test_card_example() {
        let extraction = extract(".na-card { font-size: 14px; background-color: #111; }", "na-");
        assert_eq!(
            class(&extraction, "na-card"),
            vec![
                ("fontSize".to_string(), "14px".to_string()),
                ("backgroundColor".to_string(), "#111".to_string()),
            ]
        );
        assert_eq!(extraction.classes.len(), 1);
    }

    #[test]
    fn test_last_block_wins_without_merging() {
        let css = r#"
            .na-btn { color: red; padding: 4px; }
            .na-card { color: black; }
            .na-btn { color: blue; }
        "#;
        let extraction = extract(css, "na-");
        assert_eq!(
            class(&extraction, "na-btn"),
            vec![("color".to_string(), "blue".to_string())]
        );
        assert_eq!(extraction.classes.keys().collect::<Vec<_>>(), vec!["na-btn", "na-card"]);
        assert_eq!(extraction.block_count, 3);
    }

    #[test]
    fn test_no_blocks_gives_empty_map() {
        let extraction = extract("@tailwind base;\n.btn { color: red; }\n", "na-");
        assert!(extraction.classes.is_empty());
        assert_eq!(extraction.block_count, 0);
        assert_eq!(extraction.skipped_bytes, 0);
    }

    #[test]
    fn test_block_with_only_junk_keeps_an_empty_entry() {
        let extraction = extract(".na-ghost { not a declaration }", "na-");
        assert!(extraction.classes.contains_key("na-ghost"));
        assert!(class(&extraction, "na-ghost").is_empty());
        assert_eq!(extraction.skipped_bytes, "notadeclaration".len());
    }

    #[test]
    fn test_every_key_is_a_semantic_class() {
        let css = r#"
            :root { --na-ink: #111; }
            .na-h1 { font-size: 2rem; }
            .na-h1:hover { color: red; }
            .prose .na-data { font-family: monospace; }
            .NA-shout { color: red; }
            .na-grid-2 { grid-template-columns: repeat(2, 1fr); }
        "#;
        let extraction = extract(css, "na-");
        for name in extraction.classes.keys() {
            assert!(is_semantic_class(name, "na-"), "unexpected key {name}");
        }
        assert_eq!(
            extraction.classes.keys().collect::<Vec<_>>(),
            vec!["na-h1", "na-data", "na-grid-2"]
        );
    }

    #[test]
    fn test_values_are_never_blank() {
        let css = ".na-x { color: ; margin:  0 ; padding:\t;}";
        let extraction = extract(css, "na-");
        for (_, props) in extraction.classes.iter() {
            for (_, value) in props.iter() {
                assert!(!value.is_empty());
                assert_eq!(value.trim(), value);
            }
        }
        assert_eq!(
            class(&extraction, "na-x"),
            vec![("margin".to_string(), "0".to_string())]
        );
    }

    #[test]
    fn test_block_order_does_not_change_content() {
        let forward = ".na-a { color: red; } .na-b { margin: 0; } .na-c { gap: 4px; }";
        let shuffled = ".na-c { gap: 4px; } .na-a { color: red; } .na-b { margin: 0; }";
        assert_eq!(
            content(&extract(forward, "na-")),
            content(&extract(shuffled, "na-"))
        );
    }
}
