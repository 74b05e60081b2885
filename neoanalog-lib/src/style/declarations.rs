use crate::style::is_name_byte;
use crate::style::owned_css::OwnedDeclaration;

/// Declarations read from one block body, plus how much of it was not understood.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DeclarationScan {
    pub declarations: Vec<OwnedDeclaration>,
    /// Non-whitespace bytes of the body that no declaration consumed.
    pub skipped_bytes: usize,
}

/// Read every `name: value;` pair from a block body, in order.
///
/// `name` is `[a-z0-9-]+`, the value runs to the next `;`. Text that does not
/// fit (a missing semicolon, an uppercase property, a value that trims to
/// nothing) is passed over and only shows up in `skipped_bytes`.
pub fn parse_declarations(body: &str) -> DeclarationScan {
    let bytes = body.as_bytes();
    let mut scan = DeclarationScan::default();
    let mut consumed = 0;
    let mut pos = 0;

    while pos < bytes.len() {
        if !is_name_byte(bytes[pos]) {
            pos += 1;
            continue;
        }
        match match_declaration_at(body, pos) {
            Some((decl, end)) => {
                scan.skipped_bytes += significant_bytes(&body[consumed..pos]);
                if decl.value.is_empty() {
                    scan.skipped_bytes += significant_bytes(&body[pos..end]);
                } else {
                    scan.declarations.push(decl);
                }
                consumed = end;
                pos = end;
            }
            // Any later start inside the same name run would fail the same way.
            None => pos += name_run(&body[pos..]),
        }
    }
    scan.skipped_bytes += significant_bytes(&body[consumed..]);
    scan
}

/// `font-size` -> `fontSize`. A hyphen followed by a lowercase letter is
/// dropped and the letter upper-cased; everything else is kept.
pub fn to_camel_case(property: &str) -> String {
    let mut out = String::with_capacity(property.len());
    let mut chars = property.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '-' {
            if let Some(&next) = chars.peek() {
                if next.is_ascii_lowercase() {
                    out.push(next.to_ascii_uppercase());
                    chars.next();
                    continue;
                }
            }
        }
        out.push(ch);
    }
    out
}

fn match_declaration_at(body: &str, start: usize) -> Option<(OwnedDeclaration, usize)> {
    let rest = &body[start..];
    let (name, after_name) = rest.split_at(name_run(rest));

    let after_colon = after_name.trim_start().strip_prefix(':')?;
    let semicolon = after_colon.find(';')?;
    if semicolon == 0 {
        return None;
    }

    let end = body.len() - after_colon.len() + semicolon + 1;
    let decl = OwnedDeclaration {
        property: name.trim().to_string(),
        value: after_colon[..semicolon].trim().to_string(),
    };
    Some((decl, end))
}

fn name_run(text: &str) -> usize {
    text.bytes().take_while(|b| is_name_byte(*b)).count()
}

fn significant_bytes(text: &str) -> usize {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .map(char::len_utf8)
        .sum()
}
