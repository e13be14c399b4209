//! ocrpdf CLI - PDF page OCR tool

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;

use ocrpdf::{pipeline, PipelineOptions};

#[derive(Parser)]
#[command(name = "ocrpdf")]
#[command(version)]
#[command(about = "Extract text from PDF pages with OCR", long_about = None)]
struct Cli {
    /// Input PDF file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output text file
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// OCR language identifier
    #[arg(long, default_value = ocrpdf::DEFAULT_LANGUAGE)]
    lang: String,

    /// Rasterization resolution in DPI
    #[arg(long, default_value_t = ocrpdf::DEFAULT_DPI)]
    dpi: f32,

    /// OCR engine name (first available if not set)
    #[arg(long)]
    engine: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List available OCR engines and their languages
    Engines {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Engines { json }) => cmd_engines(json),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            if let Some(input) = cli.input {
                cmd_run(
                    &input,
                    cli.output.as_deref(),
                    &cli.lang,
                    cli.dpi,
                    cli.engine.as_deref(),
                )
            } else {
                println!("{}", "Usage: ocrpdf <FILE> [OUTPUT]".yellow());
                println!("       ocrpdf --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_run(
    input: &Path,
    output: Option<&Path>,
    lang: &str,
    dpi: f32,
    engine: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut options = PipelineOptions::new(input)
        .with_language(lang)
        .with_dpi(dpi);
    if let Some(path) = output {
        options = options.with_output(path);
    }
    if let Some(name) = engine {
        options = options.with_engine(name);
    }
    debug!("pipeline options: {:?}", options);

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message("Recognizing pages...");

    let summary = pipeline::run_with_observer(&options, |page| {
        pb.println(format!(
            "{} Page {:>3}: {:>6} chars",
            "-".dimmed(),
            page.number,
            page.char_count()
        ));
        pb.tick();
    })?;

    pb.finish_and_clear();

    println!(
        "\n{} {} pages, {} characters",
        "Done!".green().bold(),
        summary.pages,
        summary.total_chars
    );
    println!("{} {}", "Saved to".green(), summary.output.display());

    Ok(())
}

fn cmd_engines(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let engines = ocrpdf::discover();
    if engines.is_empty() {
        return Err(Box::new(ocrpdf::Error::NoEngine));
    }

    let infos = engines
        .iter()
        .map(|e| e.info())
        .collect::<ocrpdf::Result<Vec<_>>>()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&infos)?);
        return Ok(());
    }

    println!("{}", "Available OCR engines:".cyan().bold());
    for info in &infos {
        println!("  {} {}", "-".dimmed(), info.name.bold());
        println!("    languages: {}", info.languages.join(", "));
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "ocrpdf".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("PDF page OCR tool");
}
