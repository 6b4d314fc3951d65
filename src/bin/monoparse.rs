use clap::Parser;
use monoparse::{
    config::{DemoCase, DemoConfig, OutputFormat},
    demo, grammars, InternalResult,
};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a JSON config file with demo cases
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Grammar to run the input with (see --list)
    #[arg(short, long)]
    grammar: Option<String>,

    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// List the available grammars and exit
    #[arg(long)]
    list: bool,

    /// Text to parse; without it the configured cases are run
    input: Option<String>,
}

fn run(cli: Cli) -> InternalResult<()> {
    if cli.list {
        for grammar in grammars::all() {
            println!("{:<12} {}", grammar.name, grammar.description);
        }
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => DemoConfig::from_file(path)?,
        None => DemoConfig::default(),
    };
    info!("config loaded.");

    if let Some(format) = cli.format {
        config.format = format;
    }
    match (cli.input, cli.grammar) {
        (Some(input), grammar) => {
            let grammar = grammar.unwrap_or_else(|| "keywords".to_string());
            config.cases = vec![DemoCase::new(grammar, input)];
        }
        (None, Some(grammar)) => config.cases.retain(|case| case.grammar == grammar),
        (None, None) => {}
    }
    debug!("config: {:?}", config);

    for outcome in demo::run_all(&config)? {
        println!("{}", demo::render(&outcome, config.format)?);
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
