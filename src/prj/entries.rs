//! Key/value line decoding.
//!
//! Each non-block line inside a block carries at most one entry. The
//! splitting rules are heuristic, inherited from the format's history:
//! quoted keys may contain spaces, a value with unquoted embedded
//! whitespace means the `=` belonged to an undelimited payload, and two
//! inline-list key shapes (`Key(...)` and `Key[n: ...]`) carry their
//! elements on the key side of the line.

use log::trace;

use super::scalar;
use super::value::{Map, Value};

/// Decode one key/value line into `into`.
///
/// Inserts exactly one key; a later duplicate of the same key
/// overwrites. Lines with no decodable `key=value` structure are stored
/// verbatim as an anonymous key with a `Null` value.
pub fn decode_entry(line: &str, into: &mut Map) {
    let (key, value) = match split_key_value(line) {
        Some((key, value)) if accepts_split(value) => (key, Some(value)),
        _ => (line, None),
    };

    // Inline-list key shapes win over plain scalar decoding.
    if let Some((name, items)) = round_bracket_list(key) {
        into.insert(name.to_string(), Value::List(decode_items(items)));
    } else if let Some((name, items)) = square_bracket_list(key) {
        into.insert(name.to_string(), Value::List(decode_items(items)));
    } else {
        if value.is_none() {
            trace!("marker line kept verbatim: {:?}", key);
        }
        into.insert(key.to_string(), scalar::coerce(value));
    }
}

/// Split a line into `(key, value)` at its first decodable `=`.
///
/// A quoted key (`'Key With Spaces'=...`) is tried first, then a bare
/// key, which must be non-empty and contain no whitespace.
fn split_key_value(line: &str) -> Option<(&str, &str)> {
    if let Some(rest) = line.strip_prefix('\'') {
        if let Some(close) = rest.find('\'') {
            if let Some(value) = rest[close + 1..].strip_prefix('=') {
                return Some((&rest[..close], value));
            }
        }
    }
    let eq = line.find('=')?;
    let key = &line[..eq];
    if key.is_empty() || key.contains(char::is_whitespace) {
        return None;
    }
    Some((key, &line[eq + 1..]))
}

/// Decide whether a split value really belongs to its key.
///
/// Escaped apostrophes count as quoted content for this test only: each
/// `\'` pair is normalized to `"` before looking for embedded
/// whitespace. A value with unquoted whitespace means the `=` was part
/// of an undelimited payload, and the whole line is kept as a marker.
fn accepts_split(value: &str) -> bool {
    let normalized = value.replace("\\'", "\"");
    if !normalized.contains(char::is_whitespace) {
        return true;
    }
    leading_quoted_run(&normalized)
        .map(|run| run.contains(char::is_whitespace))
        .unwrap_or(false)
}

/// The leading `'...'` substring of a value, without its quotes.
fn leading_quoted_run(value: &str) -> Option<&str> {
    let rest = value.strip_prefix('\'')?;
    let close = rest.find('\'')?;
    Some(&rest[..close])
}

/// Match the `Key(items)` inline-list shape.
fn round_bracket_list(key: &str) -> Option<(&str, &str)> {
    bracketed(key, '(', ')')
}

/// Match the `Key[n: items]` inline-list shape.
///
/// The element count between the bracket and the colon is redundant
/// with the items themselves and is dropped.
fn square_bracket_list(key: &str) -> Option<(&str, &str)> {
    let (name, body) = bracketed(key, '[', ']')?;
    let colon = body.find(':')?;
    let count = &body[..colon];
    if count.is_empty() || !count.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((name, &body[colon + 1..]))
}

/// Split an inline-list key into its identifier and bracketed body.
///
/// The identifier is either quoted (and may then contain spaces) or a
/// bare token with no whitespace; the body must run to the end of the
/// key.
fn bracketed(key: &str, open: char, close: char) -> Option<(&str, &str)> {
    let (name, rest) = if let Some(rest) = key.strip_prefix('\'') {
        let end = rest.find('\'')?;
        (&rest[..end], &rest[end + 1..])
    } else {
        let at = key.find(open)?;
        let name = &key[..at];
        if name.contains(char::is_whitespace) {
            return None;
        }
        (name, &key[at..])
    };
    if name.is_empty() {
        return None;
    }
    let body = rest.strip_prefix(open)?.strip_suffix(close)?;
    Some((name, body))
}

/// Decode a comma-separated items string into a list.
///
/// Plain numeric/string lists split on every comma. Items carrying
/// structured or quoted content split only on commas with an even
/// number of apostrophes remaining to their right, so a quoted element
/// keeps its embedded commas.
fn decode_items(items: &str) -> Vec<Value> {
    let parts = if items.contains('(') || items.contains('=') || items.contains('\'') {
        split_outside_quotes(items)
    } else {
        items.split(',').collect()
    };
    parts
        .into_iter()
        .map(|part| scalar::coerce(Some(part.trim())))
        .collect()
}

/// Split on commas that have an even number of apostrophes to their
/// right, i.e. commas not inside a quoted element.
fn split_outside_quotes(items: &str) -> Vec<&str> {
    let total = items.matches('\'').count();
    let mut seen = 0;
    let mut parts = Vec::new();
    let mut start = 0;
    for (index, ch) in items.char_indices() {
        match ch {
            '\'' => seen += 1,
            ',' if (total - seen) % 2 == 0 => {
                parts.push(&items[start..index]);
                start = index + 1;
            }
            _ => {}
        }
    }
    parts.push(&items[start..]);
    parts
}
