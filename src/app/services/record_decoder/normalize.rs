//! Encoding normalization for fixed-width records
//!
//! The legacy master file is nominally ASCII but carries stray UTF-8 and
//! Latin-1 bytes. Each stage below mirrors one step of the scrub the
//! downstream systems were built against, so the output must stay
//! byte-for-byte identical to theirs.

/// Placeholder produced by lossy decoding
const REPLACEMENT_CHAR: char = '\u{FFFD}';

/// Characters turned into a space straight after UTF-8 decoding
const SCRUBBED_CHARS: [char; 3] = [REPLACEMENT_CHAR, '\u{00A6}', '\u{00A0}'];

/// Latin-1 cannot represent characters above U+00FF; they are written as a
/// non-ASCII byte so the ASCII stage scrubs them like any other.
const UNENCODABLE_BYTE: u8 = 0x80;

/// Normalize a raw record to plain ASCII
///
/// Invalid UTF-8, the replacement character, the broken bar and the
/// non-breaking space all become a single space, as does any other
/// non-ASCII character. ASCII bytes are never altered.
pub fn normalize_record(raw: &[u8]) -> String {
    let text = String::from_utf8_lossy(raw);
    let scrubbed = replace_with_space(&text, &SCRUBBED_CHARS);
    let latin1 = encode_latin1(&scrubbed);
    let ascii = decode_ascii_lossy(&latin1);
    replace_with_space(&ascii, &[REPLACEMENT_CHAR])
}

fn replace_with_space(text: &str, targets: &[char]) -> String {
    text.chars()
        .map(|c| if targets.contains(&c) { ' ' } else { c })
        .collect()
}

fn encode_latin1(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| u8::try_from(u32::from(c)).unwrap_or(UNENCODABLE_BYTE))
        .collect()
}

fn decode_ascii_lossy(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| if b.is_ascii() { char::from(b) } else { REPLACEMENT_CHAR })
        .collect()
}
