//! Splits a stylesheet into top-level semantic class blocks.
//!
//! Only the flat `.prefix-name { prop: value; ... }` form is recognised. A body
//! runs up to the first closing brace, so a `}` inside a value ends the block
//! early. Everything that does not fit the form is ignored.

use crate::style::is_name_byte;
use crate::style::owned_css::SemanticClassBlock;

/// Collect every non-overlapping semantic class block in source order.
///
/// Scanning only ever moves forward: after a match it resumes past the closing
/// brace, after a miss it resumes at the byte following the `.` it tried.
pub fn split_blocks(css: &str, prefix: &str) -> Vec<SemanticClassBlock> {
    let mut blocks = Vec::new();
    let mut cursor = 0;

    while let Some(offset) = css[cursor..].find('.') {
        let dot = cursor + offset;
        match match_block_at(css, dot + 1, prefix) {
            Some((block, end)) => {
                log::debug!("found block .{}", block.class_name);
                blocks.push(block);
                cursor = end;
            }
            None => cursor = dot + 1,
        }
    }
    blocks
}

/// Try to read `prefix name \s* { body }` starting right after a `.`.
/// Returns the block and the byte offset just past its closing brace.
fn match_block_at(css: &str, start: usize, prefix: &str) -> Option<(SemanticClassBlock, usize)> {
    let rest = css[start..].strip_prefix(prefix)?;

    let name_len = rest.bytes().take_while(|b| is_name_byte(*b)).count();
    if name_len == 0 {
        return None;
    }
    let (name, after_name) = rest.split_at(name_len);

    let inner = after_name.trim_start().strip_prefix('{')?;
    let close = inner.find('}')?;
    if close == 0 {
        return None;
    }

    let end = css.len() - inner.len() + close + 1;
    let block = SemanticClassBlock {
        class_name: format!("{prefix}{name}"),
        body: inner[..close].to_string(),
    };
    Some((block, end))
}
