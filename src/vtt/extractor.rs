use super::transformer::Transformer;
use super::types::CleanReport;
use crate::errors::{InputError, OutputError, VttCleanResult};
use log::info;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Clean the subtitle file at `input` and write the result to `output`.
///
/// The input is read and transformed completely before `output` is created,
/// so an unreadable input never truncates an existing output file.
pub fn clean_local_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
) -> VttCleanResult<CleanReport> {
    let (input, output) = (input.as_ref(), output.as_ref());

    let file = File::open(input).map_err(|e| InputError::io(input, e))?;
    let document = read_document(file).map_err(|e| InputError::io(input, e))?;
    info!("Read {} ({} bytes)", input.display(), document.len());

    let (cleaned, report) = Transformer::new().run_with_report(&document);

    let file = File::create(output).map_err(|e| OutputError::io(output, e))?;
    write_document(file, &cleaned).map_err(|e| OutputError::io(output, e))?;
    info!("Wrote {} ({} cues)", output.display(), report.kept);

    Ok(report)
}

/// Core cleaning over any reader/writer pair
pub fn clean_stream<R: Read, W: Write>(reader: R, writer: W) -> VttCleanResult<CleanReport> {
    let document = read_document(reader)
        .map_err(|e| InputError::new("cannot read input stream", e))?;

    let (cleaned, report) = Transformer::new().run_with_report(&document);

    write_document(writer, &cleaned)
        .map_err(|e| OutputError::new("cannot write output stream", e))?;

    Ok(report)
}

fn read_document<R: Read>(reader: R) -> io::Result<String> {
    let mut document = String::new();
    BufReader::new(reader).read_to_string(&mut document)?;
    Ok(document)
}

fn write_document<W: Write>(writer: W, document: &str) -> io::Result<()> {
    let mut writer = BufWriter::new(writer);
    writer.write_all(document.as_bytes())?;
    writer.flush()
}
