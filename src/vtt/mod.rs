mod detector;
mod extractor;
mod transformer;
mod types;
mod utils;

pub use extractor::{clean_local_file, clean_stream};
pub use transformer::{classify_block, transform, Transformer};
pub use types::{BlockVerdict, CleanReport, Cue, DropReason, FakeReason, SeenTexts};

// Exports for testing
pub use detector::{detect_fake_block, is_directive_block, BLACK_TEXT_MARKER, DECOY_LINE_RANGE};
pub use utils::{
    clean_cue_text, serialize_cues, strip_cue_settings, strip_tags, strip_zero_width,
    VTT_HEADER,
};
