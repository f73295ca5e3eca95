//! CLI for spellout - text normalization for speech synthesis.

use clap::Parser;
use spellout::NormalizerRegistry;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Text to normalize
    text: String,

    /// Output file path (optional, prints to stdout if not specified)
    output: Option<PathBuf>,

    /// Two-letter language code (default: sr)
    #[arg(long, default_value = "sr")]
    lang: String,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let registry = NormalizerRegistry::with_defaults();

    match registry.get(&args.lang) {
        Ok(normalizer) => {
            let normalized = normalizer.normalize(&args.text);
            if let Some(output) = args.output {
                if let Err(e) = std::fs::write(&output, &normalized) {
                    eprintln!("Error writing output: {}", e);
                    std::process::exit(1);
                }
                println!("Successfully wrote {:?}", output);
            } else {
                println!("{}", normalized);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
