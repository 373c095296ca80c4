//! vd2svg CLI
//!
//! Usage:
//!   vd2svg [OPTIONS] [FILE]
//!   vd2svg --batch [--manifest <FILE>] [--root <DIR>]
//!
//! Options:
//!   -o, --output <FILE>      Write the SVG to a file instead of stdout
//!   -b, --batch              Convert every asset listed in a manifest
//!   -m, --manifest <FILE>    Batch manifest (TOML format)
//!   -r, --root <DIR>         Directory manifest paths are relative to
//!   --compact                Write the SVG on a single line
//!   --no-declaration         Omit the XML declaration
//!   -v, --verbose            Log progress
//!   -h, --help               Print help

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::Parser;

use vd2svg::{batch, vector_to_svg_with_config, ConvertConfig, Manifest, SvgConfig};

#[derive(Parser)]
#[command(name = "vd2svg")]
#[command(about = "Convert vector-drawable XML icons into standalone SVG files")]
struct Cli {
    /// Input file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Output file (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Convert every asset listed in the manifest
    #[arg(short, long)]
    batch: bool,

    /// Batch manifest file (TOML format); the built-in channel logo set if omitted
    #[arg(short, long, requires = "batch")]
    manifest: Option<PathBuf>,

    /// Directory the manifest paths are relative to
    #[arg(short, long, default_value = ".")]
    root: PathBuf,

    /// Write the SVG on a single line
    #[arg(long)]
    compact: bool,

    /// Omit the XML declaration
    #[arg(long)]
    no_declaration: bool,

    /// Log progress (debug level)
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let config = ConvertConfig::new().with_svg(
        SvgConfig::new()
            .with_pretty_print(!cli.compact)
            .with_standalone(!cli.no_declaration),
    );

    if cli.batch {
        run_batch(&cli, &config);
        return;
    }

    // Read input
    let (source, filename) = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => (content, path.display().to_string()),
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => (buffer, "<stdin>".to_string()),
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let svg = match vector_to_svg_with_config(&source, &config) {
        Ok(svg) => svg,
        Err(e) => {
            eprintln!("{}", e.format(&source, &filename));
            std::process::exit(1);
        }
    };

    match &cli.output {
        Some(path) => {
            if let Err(e) = fs::write(path, svg) {
                eprintln!("Error writing file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        }
        None => println!("{}", svg),
    }
}

fn run_batch(cli: &Cli, config: &ConvertConfig) {
    let manifest = match &cli.manifest {
        Some(path) => match Manifest::from_file(path) {
            Ok(m) => m,
            Err(e) => {
                eprintln!("Error loading manifest '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Manifest::default(),
    };

    match batch::run(&manifest, &cli.root, config) {
        Ok(report) => {
            eprintln!(
                "Converted {} file(s), removed {} stale file(s)",
                report.written.len(),
                report.removed.len()
            );
        }
        Err(e @ batch::BatchError::Convert { .. }) => {
            eprintln!("{}", e.format());
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
