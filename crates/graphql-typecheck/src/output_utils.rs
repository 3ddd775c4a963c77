pub(crate) const GREEN_CHECK: &str = "\u{2705}";
pub(crate) const RED_X: &str = "\u{274c}";

/// Indent every line of `text` by `width` spaces.
pub(crate) fn indented(text: &str, width: usize) -> String {
    let prefix = " ".repeat(width);
    text.lines()
        .map(|line| format!("{prefix}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
