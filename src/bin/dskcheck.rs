/// Command line bad sector report for DSK images

use clap::{ArgAction, Parser};
use dskcheck::{DiskImage, DskReader, FileAggregator, ScanOptions, Verbosity};
use log::debug;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    version,
    about = "Report sector errors in DSK files",
    after_help = "Set RUST_LOG to control diagnostic logging (trace, debug, info, warn, error)."
)]
struct Cli {
    /// Verbose output; repeat to report every track
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// DSK images to check
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let options = ScanOptions {
        verbosity: Verbosity(cli.verbose),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut aggregator = FileAggregator::new(options);

    for (index, path) in cli.files.iter().enumerate() {
        if cli.files.len() > 1 {
            let separator = if index > 0 { "\n\n" } else { "" };
            if writeln!(out, "{}File: {}", separator, path.display()).is_err() {
                return ExitCode::from(1);
            }
        }

        let image = match DiskImage::open(path) {
            Ok(image) => image,
            Err(e) => {
                let _ = out.flush();
                eprintln!("Failed to open '{}': {}", path.display(), e);
                return ExitCode::from(2);
            }
        };
        debug!("{}: {}", path.display(), image.format().name());

        let mut reader = DskReader::new(image);
        if let Err(e) = aggregator.scan_file(&mut reader, &mut out) {
            eprintln!("Error writing report for '{}': {}", path.display(), e);
            return ExitCode::from(1);
        }
    }

    ExitCode::SUCCESS
}
