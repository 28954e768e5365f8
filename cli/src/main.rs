//! CLI entrypoint for euler-brick
//!
//! Wires the layers together: parses arguments, loads configuration,
//! and dispatches between single-shot evaluation and the interactive
//! REPL.

use anyhow::{Result, anyhow, bail};
use brick_application::{EvaluatePairInput, EvaluatePairUseCase, EvaluationParams};
use brick_domain::Strictness;
use brick_presentation::{
    AppConfig, BrickRepl, Cli, ConfigLoader, ConsoleFormatter, OutputFormat, set_color_enabled,
};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting euler-brick");

    if cli.show_config {
        print_config_locations();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("failed to load configuration: {e}"))?
    };

    if !config.output.color {
        set_color_enabled(false);
    }

    // CLI flags win over config file values
    let strictness = if cli.strict || config.evaluation.strict {
        Strictness::Strict
    } else {
        Strictness::Lenient
    };
    let output = resolve_output_format(&cli, &config);

    if cli.interactive {
        let mut repl = BrickRepl::new()
            .with_strictness(strictness)
            .with_banner(!cli.quiet && config.repl.show_banner)
            .with_history_file(config.repl.history_file.as_ref().map(PathBuf::from));
        repl.run()?;
        return Ok(());
    }

    let (first, second) = match (&cli.first, &cli.second) {
        (Some(first), Some(second)) => (first.clone(), second.clone()),
        _ => bail!("Two triples are required. Use --interactive for the prompt-driven mode."),
    };

    if !cli.quiet && output == OutputFormat::Full {
        println!();
        println!("+============================================================+");
        println!("|              euler-brick - Face Pair Checker               |");
        println!("+============================================================+");
        println!();
    }

    let input = EvaluatePairInput::new(first, second)
        .with_params(EvaluationParams::default().with_strictness(strictness));
    let evaluation = EvaluatePairUseCase::new().execute(input)?;

    let rendered = match output {
        OutputFormat::Full => ConsoleFormatter::format(&evaluation),
        OutputFormat::Verdict => ConsoleFormatter::format_verdict_only(&evaluation),
        OutputFormat::Json => ConsoleFormatter::format_json(&evaluation),
    };

    println!("{}", rendered);

    Ok(())
}

/// Pick the output format: explicit flag, then config file, then full.
fn resolve_output_format(cli: &Cli, config: &AppConfig) -> OutputFormat {
    if let Some(format) = cli.output {
        return format;
    }
    match config.output.format.as_deref() {
        Some(value) => value.parse().unwrap_or_else(|e: String| {
            warn!("{e}, falling back to full output");
            OutputFormat::Full
        }),
        None => OutputFormat::Full,
    }
}

fn print_config_locations() {
    println!("Configuration file locations (highest priority first):");
    println!("  1. --config <path>");
    for name in ConfigLoader::project_config_names() {
        println!("  2. ./{name}");
    }
    match ConfigLoader::global_config_path() {
        Some(path) => println!("  3. {}", path.display()),
        None => println!("  3. (no global config directory on this platform)"),
    }
}
