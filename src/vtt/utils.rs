use super::types::Cue;
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Header written at the top of every cleaned document
pub const VTT_HEADER: &str = "WEBVTT\nKind: captions\nLanguage: en-US\n";

/// Separator between blocks, and the terminator after the last one
pub const BLOCK_SEPARATOR: &str = "\n\n";

pub const ZERO_WIDTH_SPACE: char = '\u{200B}';

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());
static ALIGN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+align:.*$").unwrap());
static POSITION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+position:.*$").unwrap());

/// Rewrite CRLF and lone CR line endings to LF so blank-line separators are found
pub fn normalize_line_endings(document: &str) -> Cow<'_, str> {
    if document.contains('\r') {
        Cow::Owned(document.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(document)
    }
}

/// Split a document into cue blocks, skipping the leading header segment
pub fn split_blocks(document: &str) -> impl Iterator<Item = &str> {
    document.split(BLOCK_SEPARATOR).skip(1)
}

/// Remove every `<...>` tag
pub fn strip_tags(text: &str) -> Cow<'_, str> {
    TAG_RE.replace_all(text, "")
}

pub fn strip_zero_width(text: &str) -> Cow<'_, str> {
    if text.contains(ZERO_WIDTH_SPACE) {
        Cow::Owned(text.replace(ZERO_WIDTH_SPACE, ""))
    } else {
        Cow::Borrowed(text)
    }
}

/// Tag-free, zero-width-free, trimmed caption text
pub fn clean_cue_text(text: &str) -> String {
    let untagged = strip_tags(text);
    strip_zero_width(&untagged)
        .trim_matches(is_trimmable)
        .to_string()
}

/// Whitespace plus the ASCII information separators U+001C..U+001F
pub(crate) fn is_trimmable(c: char) -> bool {
    c.is_whitespace() || ('\u{1C}'..='\u{1F}').contains(&c)
}

/// Drop trailing `align:` and `position:` settings from a timing line
pub fn strip_cue_settings(timing: &str) -> String {
    let without_align = ALIGN_RE.replace(timing, "");
    POSITION_RE.replace(&without_align, "").into_owned()
}

/// Render accepted cues into a complete document
pub fn serialize_cues(cues: &[Cue]) -> String {
    let body_len: usize = cues.iter().map(|c| c.timing.len() + c.text.len() + 3).sum();
    let mut out = String::with_capacity(VTT_HEADER.len() + body_len + 3);
    out.push_str(VTT_HEADER);
    out.push('\n');
    for (i, cue) in cues.iter().enumerate() {
        if i > 0 {
            out.push_str(BLOCK_SEPARATOR);
        }
        out.push_str(&cue.to_string());
    }
    out.push_str(BLOCK_SEPARATOR);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_cue_settings() {
        assert_eq!(
            strip_cue_settings("00:00:01.000 --> 00:00:02.000 align:start position:50%"),
            "00:00:01.000 --> 00:00:02.000"
        );
        assert_eq!(
            strip_cue_settings("00:00:01.000 --> 00:00:02.000 position:10% line:0"),
            "00:00:01.000 --> 00:00:02.000"
        );
        assert_eq!(
            strip_cue_settings("00:00:01.000 --> 00:00:02.000 line:42"),
            "00:00:01.000 --> 00:00:02.000 line:42"
        );
    }

    #[test]
    fn test_clean_cue_text() {
        assert_eq!(clean_cue_text("Hello<c.colorFFFFFF> world</c>"), "Hello world");
        assert_eq!(clean_cue_text("\u{200B}\u{200B} <i>hi</i>\u{200B} "), "hi");
        assert_eq!(clean_cue_text("<b></b>"), "");
        assert_eq!(clean_cue_text("a < b"), "a < b");
        assert_eq!(clean_cue_text("\u{1C}Hi there\u{1F}\u{1D} "), "Hi there");
        assert_eq!(clean_cue_text("\u{1E}\u{200B}"), "");
    }

    #[test]
    fn test_split_blocks_skips_header() {
        let doc = "WEBVTT\nKind: captions\n\n00:01 --> 00:02\nA\n\n00:02 --> 00:03\nB";
        let blocks: Vec<&str> = split_blocks(doc).collect();
        assert_eq!(blocks, vec!["00:01 --> 00:02\nA", "00:02 --> 00:03\nB"]);
        assert_eq!(split_blocks("WEBVTT").count(), 0);
    }

    #[test]
    fn test_normalize_line_endings() {
        assert!(matches!(normalize_line_endings("a\nb"), Cow::Borrowed(_)));
        assert_eq!(normalize_line_endings("a\r\n\r\nb"), "a\n\nb");
        assert_eq!(normalize_line_endings("a\r\rb\r"), "a\n\nb\n");
        assert_eq!(normalize_line_endings("a\r\n\rb"), "a\n\nb");
    }

    #[test]
    fn test_serialize_empty() {
        assert_eq!(serialize_cues(&[]), "WEBVTT\nKind: captions\nLanguage: en-US\n\n\n\n");
    }

    #[test]
    fn test_serialize_cues() {
        let cues = vec![
            Cue {
                timing: "00:01.000 --> 00:02.000".to_string(),
                text: "One".to_string(),
            },
            Cue {
                timing: "00:02.000 --> 00:03.000".to_string(),
                text: "Two".to_string(),
            },
        ];
        assert_eq!(
            serialize_cues(&cues),
            "WEBVTT\nKind: captions\nLanguage: en-US\n\n\
             00:01.000 --> 00:02.000\nOne\n\n\
             00:02.000 --> 00:03.000\nTwo\n\n"
        );
    }
}
