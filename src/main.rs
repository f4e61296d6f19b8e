use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use devocal::{process_directory, process_file, ProcessingConfig, SeparationMethod};

#[derive(Parser, Debug)]
#[command(name = "devocal")]
#[command(about = "Remove vocals from stereo music recordings", long_about = None)]
struct Args {
    /// Input audio file, or a directory in batch mode
    input: PathBuf,

    /// Output file (single-file mode) or output directory (batch mode).
    /// Derived from the input when omitted.
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Separation method: center (fast channel difference) or spectral
    /// (phase-masked STFT)
    #[arg(short = 'm', long, default_value = "center")]
    method: String,

    /// Skip the enhancement stage (normalization + high-pass filter)
    #[arg(long)]
    no_enhance: bool,

    /// Process every audio file in the input directory
    #[arg(short = 'b', long)]
    batch: bool,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let method: SeparationMethod = match args.method.parse() {
        Ok(method) => method,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            return ExitCode::from(2);
        }
    };

    let config = ProcessingConfig {
        method,
        enhance: !args.no_enhance,
    };

    if args.batch {
        // Batch mode: per-file failures are reported in the summary, not via
        // the exit code. Only a failure to start the run is fatal.
        let result = match process_directory(&args.input, args.output.as_deref(), &config) {
            Ok(result) => result,
            Err(e) => {
                eprintln!("ERROR: {}", e);
                return ExitCode::FAILURE;
            }
        };

        println!(
            "Batch complete: {} successful, {} failed",
            result.successful, result.failed
        );
        for (name, reason) in &result.failures {
            println!("  {}: {}", name, reason);
        }
        ExitCode::SUCCESS
    } else {
        match process_file(&args.input, args.output.as_deref(), &config) {
            Ok(path) => {
                println!("Instrumental written to {}", path.display());
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("ERROR: {}", e);
                ExitCode::FAILURE
            }
        }
    }
}
