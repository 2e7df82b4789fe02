use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// A caption that survived cleaning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cue {
    pub timing: String,
    pub text: String,
}

impl fmt::Display for Cue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.timing, self.text)
    }
}

/// Why a block was recognised as a decoy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FakeReason {
    /// Styled with the pure-black foreground class
    BlackText,
    /// Carries a `line:` setting in the reserved decoy range
    DecoyLine(u16),
    /// Nothing but spaces, newlines and zero-width spaces once tags are gone
    InvisibleText,
}

/// Why a block did not make it into the output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    Blank,
    Directive,
    Fake(FakeReason),
    TooShort,
    EmptyText,
    Duplicate,
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DropReason::Blank => write!(f, "blank block"),
            DropReason::Directive => write!(f, "style or comment directive"),
            DropReason::Fake(FakeReason::BlackText) => write!(f, "fake cue (black text)"),
            DropReason::Fake(FakeReason::DecoyLine(n)) => {
                write!(f, "fake cue (decoy line:{})", n)
            }
            DropReason::Fake(FakeReason::InvisibleText) => write!(f, "fake cue (invisible text)"),
            DropReason::TooShort => write!(f, "no timing/text pair"),
            DropReason::EmptyText => write!(f, "empty after cleaning"),
            DropReason::Duplicate => write!(f, "duplicate text"),
        }
    }
}

/// Outcome of classifying one block
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockVerdict {
    Keep(Cue),
    Drop(DropReason),
}

/// Cleaned caption texts accepted so far in one run
#[derive(Debug, Default)]
pub struct SeenTexts(HashSet<String>);

impl SeenTexts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, text: &str) -> bool {
        self.0.contains(text)
    }

    /// Records `text`, returning false if it was already present.
    pub fn insert(&mut self, text: &str) -> bool {
        if self.0.contains(text) {
            return false;
        }
        self.0.insert(text.to_string())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Per-run counters, one per drop reason
#[derive(Serialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct CleanReport {
    pub blocks: usize,
    pub kept: usize,
    pub blank: usize,
    pub directive: usize,
    pub black_text: usize,
    pub decoy_line: usize,
    pub invisible_text: usize,
    pub too_short: usize,
    pub empty_text: usize,
    pub duplicate: usize,
}

impl CleanReport {
    pub(crate) fn record(&mut self, verdict: &BlockVerdict) {
        self.blocks += 1;
        match verdict {
            BlockVerdict::Keep(_) => self.kept += 1,
            BlockVerdict::Drop(reason) => match reason {
                DropReason::Blank => self.blank += 1,
                DropReason::Directive => self.directive += 1,
                DropReason::Fake(FakeReason::BlackText) => self.black_text += 1,
                DropReason::Fake(FakeReason::DecoyLine(_)) => self.decoy_line += 1,
                DropReason::Fake(FakeReason::InvisibleText) => self.invisible_text += 1,
                DropReason::TooShort => self.too_short += 1,
                DropReason::EmptyText => self.empty_text += 1,
                DropReason::Duplicate => self.duplicate += 1,
            },
        }
    }

    /// Total number of blocks that were dropped for any reason
    pub fn dropped(&self) -> usize {
        self.blocks - self.kept
    }

    /// Number of blocks dropped as decoys
    pub fn fake(&self) -> usize {
        self.black_text + self.decoy_line + self.invisible_text
    }
}
