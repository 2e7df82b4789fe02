use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use vttclean::clean_local_file;

#[derive(Parser)]
#[command(
    name = "vttclean",
    version,
    about = "Strip obfuscation markup, decoy cues and repeated captions from WebVTT files"
)]
struct Cli {
    /// Input VTT file
    #[arg(short, long)]
    input: PathBuf,
    /// Output VTT file
    #[arg(short, long)]
    output: PathBuf,
    /// Print a JSON summary of kept and dropped blocks
    #[arg(long)]
    report: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let report = clean_local_file(&cli.input, &cli.output).with_context(|| {
        format!(
            "failed to clean {} into {}",
            cli.input.display(),
            cli.output.display()
        )
    })?;

    if cli.report {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}
