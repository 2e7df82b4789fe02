use super::types::FakeReason;
use super::utils::{strip_tags, ZERO_WIDTH_SPACE};
use regex::Regex;
use std::sync::LazyLock;

/// Class name of the pure-black foreground style used to hide decoy text
pub const BLACK_TEXT_MARKER: &str = "color000000";

/// `line:` values in this range only ever appear on decoy cues
pub const DECOY_LINE_RANGE: std::ops::Range<u16> = 100..999;

const STYLE_PREFIX: &str = "Style:";

static LINE_SETTING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"line:([1-9][0-9]{2})").unwrap());

/// Check whether a block is a `Style:` directive rather than a cue
pub fn is_directive_block(block: &str) -> bool {
    block.starts_with(STYLE_PREFIX)
}

/// Detect blocks inserted to look like captions while showing nothing real
pub fn detect_fake_block(block: &str) -> Option<FakeReason> {
    if block.contains(BLACK_TEXT_MARKER) {
        return Some(FakeReason::BlackText);
    }

    if let Some(line) = find_decoy_line(block) {
        return Some(FakeReason::DecoyLine(line));
    }

    if is_invisible(block) {
        return Some(FakeReason::InvisibleText);
    }

    None
}

/// First `line:` setting whose leading three digits fall in the decoy range.
///
/// Only the first three digits count, so `line:1000` is a decoy (it reads as
/// `line:100`) while `line:999` and `line:99` are not.
fn find_decoy_line(block: &str) -> Option<u16> {
    if !block.contains("line:") {
        return None;
    }

    LINE_SETTING_RE
        .captures_iter(block)
        .filter_map(|caps| caps[1].parse::<u16>().ok())
        .find(|n| DECOY_LINE_RANGE.contains(n))
}

fn is_invisible(block: &str) -> bool {
    strip_tags(block)
        .chars()
        .all(|c| c == ' ' || c == '\n' || c == ZERO_WIDTH_SPACE)
}
