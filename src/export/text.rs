//! ICS text escaping and line folding.
//!
//! Implements the RFC 5545 content-line rules the serializer depends on:
//! TEXT value escaping and octet-based folding of long lines.

/// Maximum octets on the first segment of a folded line.
const FIRST_SEGMENT_OCTETS: usize = 75;

/// Maximum octets on each continuation segment (one leading space is added
/// on top, keeping the physical line at 75 octets).
const CONTINUATION_OCTETS: usize = 74;

/// Escapes a TEXT property value.
///
/// Applies, in order: backslash to `\\`, semicolon to `\;`, comma to `\,`,
/// newline to the literal `\n`. Carriage returns are stripped beforehand so
/// CRLF input cannot inject raw CR octets into the output stream.
///
/// # Example
///
/// ```
/// use stable_scheduler::export::escape_text;
///
/// assert_eq!(escape_text("a;b,c\nd"), "a\\;b\\,c\\nd");
/// assert_eq!(escape_text("back\\slash"), "back\\\\slash");
/// ```
pub fn escape_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            ';' => out.push_str("\\;"),
            ',' => out.push_str("\\,"),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            _ => out.push(ch),
        }
    }
    out
}

/// Folds a content line to the 75-octet limit.
///
/// The first segment carries up to 75 octets; every continuation is a CRLF,
/// one space, and up to 74 further octets, so no physical line exceeds 75
/// octets. Segments are cut on `char` boundaries, so a continuation may be
/// shorter than its budget when a multi-byte character straddles it, never
/// longer.
///
/// # Example
///
/// ```
/// use stable_scheduler::export::fold_line;
///
/// let long = format!("DESCRIPTION:{}", "x".repeat(100));
/// let folded = fold_line(&long);
/// for physical in folded.split("\r\n") {
///     assert!(physical.len() <= 75);
/// }
/// ```
pub fn fold_line(line: &str) -> String {
    if line.len() <= FIRST_SEGMENT_OCTETS {
        return line.to_string();
    }

    let mut out = String::with_capacity(line.len() + 3 * (line.len() / CONTINUATION_OCTETS + 1));
    let mut rest = line;
    let mut budget = FIRST_SEGMENT_OCTETS;

    while !rest.is_empty() {
        if !out.is_empty() {
            out.push_str("\r\n ");
        }
        let cut = floor_char_boundary(rest, budget);
        out.push_str(&rest[..cut]);
        rest = &rest[cut..];
        budget = CONTINUATION_OCTETS;
    }
    out
}

/// Largest index `<= index` that is a char boundary of `s`.
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    let mut boundary = index;
    while !s.is_char_boundary(boundary) {
        boundary -= 1;
    }
    boundary
}
