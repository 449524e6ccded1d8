//! Address extraction from raw ARP dumps.
//!
//! Only the first whitespace-delimited token of each line is considered.
//! Lines without a qualifying token contribute nothing; extraction itself
//! never fails.

use std::io::Read;

use log::debug;

use crate::address::{Address, AddressSet};

/// Extracts the distinct dotted-quad tokens that lead a line of `text`.
pub fn extract_addresses(text: &str) -> AddressSet {
    let mut set = AddressSet::new();
    let mut lines = 0usize;

    for line in split_lines(text) {
        lines += 1;
        let Some(first) = first_token(line) else {
            continue;
        };
        if let Some(address) = Address::parse(first) {
            set.insert(address);
        }
    }

    debug!("scanned {} lines, kept {} distinct addresses", lines, set.len());
    set
}

/// Lossy variant of [`extract_addresses`]: byte sequences that are not valid
/// UTF-8 are dropped, never reported.
pub fn extract_addresses_from_bytes(bytes: &[u8]) -> AddressSet {
    extract_addresses(&decode_dropping_invalid(bytes))
}

/// Reads `reader` to the end and extracts from its contents.
///
/// Only I/O failures are surfaced; malformed content is tolerated.
pub fn extract_addresses_from_reader<R: Read>(mut reader: R) -> std::io::Result<AddressSet> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    Ok(extract_addresses_from_bytes(&buf))
}

fn decode_dropping_invalid(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    text
}

fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_line_boundary)
}

// Form feed, vertical tab, the file/group/record separators and the Unicode
// line/paragraph separators all end a line, not just `\n` and `\r`.
fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\x0b'
            | '\x0c'
            | '\x1c'
            | '\x1d'
            | '\x1e'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

fn first_token(line: &str) -> Option<&str> {
    line.split(|c: char| c.is_whitespace() || c == '\x1f')
        .find(|token| !token.is_empty())
}
