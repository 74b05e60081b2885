/// CSS custom property reference for a dotted token path.
///
/// `colors.paper` becomes `var(--colors-paper)`.
pub fn css_var(path: &str) -> String {
    format!("var(--{})", path.replace('.', "-"))
}
