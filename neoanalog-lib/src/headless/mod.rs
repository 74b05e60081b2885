//! Stylesheet to headless map: the semantic class vocabulary as JSON.

pub mod extract;
pub mod map;

pub use extract::{extract, Extraction};
pub use map::{ClassMap, HeadlessMap, Meta, OrderedMap, PropertyMap};
