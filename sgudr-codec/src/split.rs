//! Delimiter-based string splitting
//!
//! Unlike [`str::split`], the text after the last delimiter is only kept
//! when the caller asks for it. Configuration strings in the device
//! identification protocol are often terminated by the delimiter, so the
//! trailing remainder is either a real field or an artefact to drop.

/// Splits `text` at every occurrence of `delimiter`.
///
/// Every segment that is followed by a delimiter is emitted, including
/// empty ones. The final remainder (which may be empty) is emitted only
/// when `append_last` is true, so text without any delimiter yields either
/// the whole input or nothing at all.
///
/// # Examples
///
/// ```
/// use sgudr_codec::split::split;
///
/// assert_eq!(split("a,b,,c", ',', true), vec!["a", "b", "", "c"]);
/// assert_eq!(split("a,b,c", ',', false), vec!["a", "b"]);
/// ```
pub fn split(text: &str, delimiter: char, append_last: bool) -> Vec<String> {
    let mut segments: Vec<String> = text.split(delimiter).map(str::to_owned).collect();

    // `str::split` always yields the remainder as its last item
    if !append_last {
        segments.pop();
    }

    segments
}
