use super::detector::{detect_fake_block, is_directive_block};
use super::types::{BlockVerdict, CleanReport, Cue, DropReason, SeenTexts};
use super::utils::{
    clean_cue_text, is_trimmable, normalize_line_endings, serialize_cues, split_blocks,
    strip_cue_settings,
};
use log::{debug, info, warn};

/// Cleans a complete WebVTT document in one pass.
///
/// Holds no state between runs; every call gets its own set of seen texts,
/// so one instance can be shared freely across threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct Transformer;

impl Transformer {
    pub fn new() -> Self {
        Self
    }

    /// Transform `document` into its cleaned form
    pub fn run(&self, document: &str) -> String {
        self.run_with_report(document).0
    }

    /// Transform `document` and report what happened to each block
    pub fn run_with_report(&self, document: &str) -> (String, CleanReport) {
        let document = normalize_line_endings(document);
        let mut seen = SeenTexts::new();
        let mut report = CleanReport::default();
        let mut cues = Vec::new();

        for (index, block) in split_blocks(&document).enumerate() {
            let verdict = classify_block(block, &mut seen);
            report.record(&verdict);

            match verdict {
                BlockVerdict::Keep(cue) => cues.push(cue),
                BlockVerdict::Drop(reason) => {
                    debug!("Dropping block #{}: {}", index + 1, reason);
                }
            }
        }

        info!(
            "Kept {} of {} blocks ({} fake, {} duplicate)",
            report.kept,
            report.blocks,
            report.fake(),
            report.duplicate
        );
        if report.kept == 0 && report.blocks > report.blank {
            warn!("Every cue block was dropped; output contains only the header");
        }

        (serialize_cues(&cues), report)
    }
}

/// Transform a document with a fresh [`Transformer`]
pub fn transform(document: &str) -> String {
    Transformer::new().run(document)
}

/// Decide whether one block survives, recording its text in `seen` if it does
pub fn classify_block(block: &str, seen: &mut SeenTexts) -> BlockVerdict {
    if block.trim_matches(is_trimmable).is_empty() {
        return BlockVerdict::Drop(DropReason::Blank);
    }
    if is_directive_block(block) {
        return BlockVerdict::Drop(DropReason::Directive);
    }
    if let Some(reason) = detect_fake_block(block) {
        return BlockVerdict::Drop(DropReason::Fake(reason));
    }

    let Some((timing, body)) = block.split_once('\n') else {
        return BlockVerdict::Drop(DropReason::TooShort);
    };

    let text = clean_cue_text(body);
    if text.is_empty() {
        return BlockVerdict::Drop(DropReason::EmptyText);
    }
    if !seen.insert(&text) {
        return BlockVerdict::Drop(DropReason::Duplicate);
    }

    BlockVerdict::Keep(Cue {
        timing: strip_cue_settings(timing),
        text,
    })
}
