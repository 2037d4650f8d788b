//! Splitting a history file into per-hand blocks.

use regex::Regex;

/// Split a raw log into hand blocks.
///
/// Each block is the text after one marker occurrence, up to the start of the
/// next occurrence or the end of input. Anything before the first marker is
/// dropped, so a log without markers yields no blocks.
pub fn split_blocks<'a>(log: &'a str, marker: &Regex) -> Vec<&'a str> {
    marker.split(log).skip(1).collect()
}
