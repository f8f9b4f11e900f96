use anyhow::Context;
use clap::Parser;
use gedcheck::prompt::{output_location_exists, prompt_input_path, prompt_output_path};
use gedcheck::{RuleEngine, RuleId, TeeSink, ValidatorConfig, parse_file};
use log::info;
use std::io;
use std::path::PathBuf;
use std::time::Instant;

/// Check a GEDCOM file for inconsistent dates and relationships
#[derive(Parser, Debug)]
#[command(name = "gedcheck", version, about, long_about = None)]
struct Args {
    /// GEDCOM file to check; prompted for when omitted
    input: Option<PathBuf>,

    /// Report file; prompted for when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Evaluate rules in parallel
    #[arg(long)]
    parallel: bool,

    /// Skip a rule by user-story code (repeatable), e.g. --disable US16
    #[arg(long = "disable", value_name = "RULE")]
    disabled: Vec<RuleId>,

    /// Write findings to the report file only
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    let input = match args.input {
        Some(path) => path,
        None => prompt_input_path(&mut stdin.lock(), &mut stdout)
            .context("Failed to read the input file path")?,
    };
    let output = match args.output {
        Some(path) if !output_location_exists(&path) => {
            anyhow::bail!("Output directory does not exist: {}", path.display())
        }
        Some(path) => path,
        None => prompt_output_path(&mut stdin.lock(), &mut stdout)
            .context("Failed to read the output file path")?,
    };

    let config = args
        .disabled
        .into_iter()
        .fold(ValidatorConfig::default(), ValidatorConfig::disable)
        .with_output_path(output)
        .with_console_echo(!args.quiet)
        .with_parallel_rules(args.parallel);
    info!("Running with {config}");

    let start = Instant::now();
    let records = parse_file(&input)
        .with_context(|| format!("Failed to parse {}", input.display()))?;

    let mut sink = TeeSink::create(&config.output_path, config.echo_to_console)
        .with_context(|| format!("Failed to create {}", config.output_path.display()))?;
    let summary = RuleEngine::from_config(&config)
        .run(&records.individuals, &records.families, &mut sink)
        .context("Failed to write the report")?;

    info!("Finished in {:?}", start.elapsed());
    if !args.quiet {
        eprintln!("{summary}");
    }
    Ok(())
}
