// Pshe Character Converter
// Applies a layout table to text, one char at a time

use crate::Layout;

/// Replace every char of `input` that is a key of `layout`.
///
/// Unmapped chars are copied unchanged, so the result always has the same
/// number of chars as the input.
pub fn convert(layout: &Layout, input: &str) -> String {
    input
        .chars()
        .map(|c| layout.get(c).unwrap_or(c))
        .collect()
}

/// Join raw command-line arguments with single spaces and convert the result
pub fn convert_args<S: AsRef<str>>(layout: &Layout, args: &[S]) -> String {
    let joined = args
        .iter()
        .map(|a| a.as_ref())
        .collect::<Vec<_>>()
        .join(" ");
    convert(layout, &joined)
}
