//! [§ 8.2.2.5 Preprocessing the input stream](https://www.w3.org/TR/html5/syntax.html#preprocessing-the-input-stream)
//!
//! Applied to each chunk before it reaches the tokenizer. The transform is
//! purely textual; the only thing carried between chunks is whether the
//! previous chunk ended in a CARRIAGE RETURN, so that a CR LF pair split
//! across two chunks still collapses to a single LINE FEED.

/// Normalize one chunk of input.
///
/// - "U+000D CARRIAGE RETURN (CR) characters and U+000A LINE FEED (LF)
///   characters are treated specially. Any LF character that immediately
///   follows a CR character must be ignored, and all CR characters must then
///   be converted to LF characters."
/// - Control characters other than whitespace and NULL are replaced with
///   U+FFFD REPLACEMENT CHARACTER.
/// - Noncharacters are replaced with U+FFFD REPLACEMENT CHARACTER.
///
/// `follows_carriage_return` says whether the previous chunk ended in CR.
/// Returns the normalized text and whether this chunk ended in CR.
#[must_use]
pub fn preprocess(input: &str, follows_carriage_return: bool) -> (String, bool) {
    let mut output = String::with_capacity(input.len());
    let mut after_carriage_return = follows_carriage_return;

    for c in input.chars() {
        match c {
            '\r' => {
                output.push('\n');
                after_carriage_return = true;
                continue;
            }
            '\n' if after_carriage_return => {}
            c if is_control_character(c) || is_noncharacter(c) => output.push('\u{FFFD}'),
            c => output.push(c),
        }
        after_carriage_return = false;
    }

    (output, after_carriage_return)
}

/// C0 and C1 controls that are parse errors in the input stream.
///
/// TAB, LF, FF and CR are whitespace; NULL is left for the tokenizer, which
/// handles it per state.
#[must_use]
pub const fn is_control_character(c: char) -> bool {
    matches!(
        c,
        '\u{0001}'..='\u{0008}' | '\u{000B}' | '\u{000E}'..='\u{001F}' | '\u{007F}'..='\u{009F}'
    )
}

/// U+FDD0 to U+FDEF, and the last two code points of every plane
/// (U+FFFE, U+FFFF, U+1FFFE, U+1FFFF, ..., U+10FFFF).
#[must_use]
pub const fn is_noncharacter(c: char) -> bool {
    matches!(c, '\u{FDD0}'..='\u{FDEF}') || ((c as u32) & 0xFFFE) == 0xFFFE
}
