use std::fs;
use std::io::{self, Read};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use feedjson::cli::{Cli, Commands};
use feedjson::config::{parse_dialects, Config};
use feedjson::resolvers::ResolverRegistry;
use feedjson::services::ConvertService;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = Config::from_env()?;
    if !cli.dialects.is_empty() {
        config.dialects = parse_dialects(&cli.dialects.join(","))?;
    }

    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .with_writer(io::stderr)
        .init();

    let service = ConvertService::new(ResolverRegistry::with_order(&config.dialects));

    match cli.command {
        Commands::Convert {
            path,
            compact,
            output,
        } => cmd_convert(&service, path.as_deref(), !compact && config.pretty, output),
        Commands::Detect { path } => cmd_detect(&service, path.as_deref()),
    }
}

fn read_input(path: Option<&str>) -> anyhow::Result<String> {
    match path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("Failed to read feed file: {}", path))
        }
        None => {
            let mut xml = String::new();
            io::stdin()
                .read_to_string(&mut xml)
                .context("Failed to read feed from stdin")?;
            Ok(xml)
        }
    }
}

fn cmd_convert(
    service: &ConvertService,
    path: Option<&str>,
    pretty: bool,
    output: Option<String>,
) -> anyhow::Result<()> {
    let xml = read_input(path)?;
    let feed = service.convert_str(&xml)?;
    let json = ConvertService::render_json(&feed, pretty)?;

    match output {
        Some(path) => {
            fs::write(&path, &json).with_context(|| format!("Failed to write {}", path))?;
            eprintln!("Wrote {} items to {}", feed.items.len(), path);
        }
        None => {
            println!("{}", json);
        }
    }

    Ok(())
}

fn cmd_detect(service: &ConvertService, path: Option<&str>) -> anyhow::Result<()> {
    let xml = read_input(path)?;
    let dialect = service.detect_str(&xml)?;
    println!("{}", dialect);
    Ok(())
}
