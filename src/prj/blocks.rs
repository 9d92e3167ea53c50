//! Recursive `$begin`/`$end` block traversal.

use std::mem;

use log::trace;

use super::entries;
use super::value::{Map, Value};

/// Per-parse traversal state: the decoded lines and the shared cursor.
///
/// One context is created per top-level parse and threaded by mutable
/// reference through every level of the descent, so sibling and nested
/// walks never duplicate or rewind position. The cursor only moves
/// forward within a parse.
pub struct WalkContext<'a> {
    lines: &'a [String],
    cursor: usize,
}

impl<'a> WalkContext<'a> {
    pub fn new(lines: &'a [String]) -> Self {
        Self { lines, cursor: 0 }
    }
}

/// Walk one named block, merging the result into `into`.
///
/// Scans forward from the context cursor for `$begin '<keyword>'`,
/// decodes the block body (descending into nested blocks through the
/// same context), and stops on the matching `$end` line, which is left
/// for the caller to consume. Reaching end of input in any state yields
/// a partial (possibly empty) result rather than an error.
///
/// A block re-using a name already present in `into` promotes the prior
/// value to a list and appends to it, keeping file order.
pub fn walk(keyword: &str, into: &mut Map, ctx: &mut WalkContext<'_>) {
    let lines = ctx.lines;
    let begin_marker = format!("$begin '{keyword}'");
    let end_marker = format!("$end '{keyword}'");

    let mut found = false;
    let mut prior: Option<Value> = None;
    let mut contents = Map::new();

    while ctx.cursor < lines.len() {
        let line = lines[ctx.cursor].trim();
        if !found {
            if line == begin_marker {
                found = true;
                // Remember any earlier sibling of the same name for
                // duplicate-block promotion after the body is decoded.
                prior = into
                    .get_mut(keyword)
                    .map(|slot| mem::replace(slot, Value::Null));
            }
            ctx.cursor += 1;
            continue;
        }
        if line == end_marker {
            break;
        }
        if let Some(child) = begin_keyword(line) {
            walk(child, &mut contents, ctx);
            // The recursive call stopped on the child's own $end line;
            // the shared increment below consumes it.
        } else {
            entries::decode_entry(&lines[ctx.cursor], &mut contents);
        }
        ctx.cursor += 1;
    }

    if !found {
        trace!("block {:?} not found", keyword);
        return;
    }

    let node = Value::Block(contents);
    let merged = match prior {
        Some(Value::List(mut list)) => {
            list.push(node);
            Value::List(list)
        }
        Some(single) => Value::List(vec![single, node]),
        None => node,
    };
    into.insert(keyword.to_string(), merged);
}

/// Find the first `$begin` marker anywhere in the lines and return its
/// keyword: the document root.
pub fn find_root(lines: &[String]) -> Option<&str> {
    lines.iter().find_map(|line| begin_keyword(line))
}

/// Extract the keyword of a `$begin '<name>'` marker, if the line
/// carries one.
///
/// Matches anywhere in the line; the name runs to the line's last
/// apostrophe and must be non-empty.
fn begin_keyword(line: &str) -> Option<&str> {
    let at = line.find("$begin '")?;
    let rest = &line[at + "$begin '".len()..];
    let close = rest.rfind('\'')?;
    if close == 0 {
        return None;
    }
    Some(&rest[..close])
}
