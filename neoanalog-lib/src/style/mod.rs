//! Tokenizing for the flat stylesheet subset the extractor understands.

pub mod blocks;
pub mod declarations;
pub mod owned_css;

pub use blocks::split_blocks;
pub use declarations::{parse_declarations, to_camel_case, DeclarationScan};
pub use owned_css::{OwnedDeclaration, SemanticClassBlock};

/// `[a-z0-9-]`, the alphabet of class-name suffixes and property names.
pub(crate) fn is_name_byte(byte: u8) -> bool {
    byte.is_ascii_lowercase() || byte.is_ascii_digit() || byte == b'-'
}

/// True if `name` is `prefix` followed by at least one `[a-z0-9-]` character.
pub fn is_semantic_class(name: &str, prefix: &str) -> bool {
    match name.strip_prefix(prefix) {
        Some(rest) => !rest.is_empty() && rest.bytes().all(is_name_byte),
        None => false,
    }
}
