// Thu Aug 27 2026 - Alex

use abi_surface_mapper::component::DEFAULT_PREFIX;
use abi_surface_mapper::utils::logging;
use abi_surface_mapper::{
    decl, Classifier, ComponentMapper, Config, ReportEmitter, SymbolAggregator, Walker,
};
use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version = "1.0.0")]
#[command(about = "Maps the public ABI surface of a multi-component native library", long_about = None)]
struct Args {
    inputs: Vec<PathBuf>,

    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(short, long, default_value = DEFAULT_PREFIX)]
    prefix: String,

    #[arg(long = "publish-override")]
    publish_overrides: Vec<String>,

    #[arg(short, long)]
    verbose: bool,

    #[arg(long)]
    no_progress: bool,

    #[arg(long)]
    summary: bool,
}

fn main() {
    let args = Args::parse();

    if std::env::var_os("RUST_LOG").is_some() {
        logging::init_from_env();
    } else {
        logging::init_logger(args.verbose);
    }

    let config = Config::new()
        .with_prefix(args.prefix.clone())
        .with_publish_overrides(args.publish_overrides.clone())
        .with_output_file(args.output.clone());

    if let Err(e) = config.validate() {
        eprintln!("{} Invalid configuration: {}", "[!]".red(), e);
        std::process::exit(2);
    }

    let mapper = ComponentMapper::new(&config.project_prefix);
    let classifier = Classifier::with_overrides(config.publish_overrides.iter().cloned());
    let walker = Walker::new(&mapper, &classifier);
    let mut aggregator = SymbolAggregator::new();

    let progress = if config.enable_progress_bars && !args.no_progress && args.inputs.len() > 1 {
        let pb = ProgressBar::new(args.inputs.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap()
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let mut failed = 0usize;
    for input in &args.inputs {
        if let Some(ref pb) = progress {
            pb.set_message(input.display().to_string());
        }
        log::debug!("Processing: {}", input.display());

        // A malformed document is reported and the run continues
        match decl::load_document(input) {
            Ok(forest) => walker.walk(&forest, &mut aggregator),
            Err(e) => {
                eprintln!("{} {}", "[!]".red(), e);
                failed += 1;
            }
        }

        if let Some(ref pb) = progress {
            pb.inc(1);
        }
    }

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    if let Err(e) = emit_report(&aggregator, &config) {
        eprintln!("{} Failed to write report: {}", "[!]".red(), e);
        std::process::exit(1);
    }

    if args.summary || config.output_file.is_some() {
        print_summary(&aggregator, args.inputs.len(), failed);
    }
}

fn emit_report(aggregator: &SymbolAggregator, config: &Config) -> anyhow::Result<()> {
    match &config.output_file {
        Some(path) => {
            ReportEmitter::save_report(aggregator, path)
                .with_context(|| format!("writing report to {}", path.display()))?;
            println!("{} Report saved to: {}", "[+]".green(), path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            ReportEmitter::write_report(aggregator, &mut out)
                .context("writing report to stdout")?;
        }
    }
    Ok(())
}

fn print_summary(aggregator: &SymbolAggregator, inputs: usize, failed: usize) {
    println!();
    println!("{}", "ABI Surface Summary".cyan().bold());
    println!("{}", "-".repeat(40).cyan());
    println!(
        "  Documents processed: {}",
        (inputs - failed).to_string().green()
    );
    if failed > 0 {
        println!("  Documents failed: {}", failed.to_string().red());
    }
    println!(
        "  Components: {}",
        aggregator.component_count().to_string().green()
    );
    println!(
        "  Public symbols: {}",
        aggregator.public_count().to_string().green()
    );
    println!(
        "  Private symbols: {}",
        aggregator.private_count().to_string().yellow()
    );
}
