pub mod vtt;
pub use vtt::{
    classify_block, clean_local_file, clean_stream, transform, BlockVerdict, CleanReport, Cue,
    DropReason, FakeReason, SeenTexts, Transformer,
};

pub mod errors;
pub use errors::{InputError, OutputError, VttCleanError, VttCleanResult};
