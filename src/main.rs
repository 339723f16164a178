mod cli;

use reelname::config;
use reelname::processor::Orchestrator;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands, RenameArgs};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "reelname=debug,reelname_parser=debug,reelname_av=debug".to_string()
        } else {
            "reelname=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Rename { files, options } => {
            // Lookups are sequential; a single-threaded runtime is enough
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;
            rt.block_on(rename_files(&files, cli.config.as_deref(), &options))
        }
        Commands::Parse { files, json } => parse_files(&files, json),
        Commands::Probe { file, json } => probe_file(&file, json),
        Commands::CheckTools => check_tools(),
        Commands::Validate { path } => {
            let path = path.or(cli.config);
            validate_config(path.as_deref())
        }
    }
}

async fn rename_files(
    files: &[PathBuf],
    config_path: Option<&Path>,
    options: &RenameArgs,
) -> Result<()> {
    let mut config = config::load_config_or_default(config_path)?;
    options.apply(&mut config.rename);
    config::validate_config(&config)?;

    let mut orchestrator = Orchestrator::from_config(&config)?;
    let summary = orchestrator.run(files).await?;

    println!("Finished! {}", summary);
    Ok(())
}

fn parse_files(files: &[PathBuf], json: bool) -> Result<()> {
    let signals: Vec<_> = files.iter().map(reelname_parser::parse_path).collect();

    if json {
        let json_str = serde_json::to_string_pretty(&signals)?;
        println!("{}", json_str);
        return Ok(());
    }

    for (file, s) in files.iter().zip(&signals) {
        println!("File: {}", file.display());
        println!("  Title: {}", s.raw_title);
        println!("  Type: {}", s.media_type);
        if let Some(ref year) = s.year {
            println!("  Year: {}", year);
        }
        if let (Some(season), Some(episode)) = (s.season(), s.episode()) {
            println!("  Episode: S{}E{}", season, episode);
        }
        println!("  Extension: {}", s.extension);
    }

    Ok(())
}

fn probe_file(file: &Path, json: bool) -> Result<()> {
    if !file.exists() {
        anyhow::bail!("File does not exist: {:?}", file);
    }
    reelname_av::require_tool("ffprobe")?;

    let props = reelname_av::probe_properties(file)?;

    if json {
        let json_str = serde_json::to_string_pretty(&props)?;
        println!("{}", json_str);
    } else {
        println!("File: {}", file.display());
        match (props.width, props.height) {
            (Some(w), Some(h)) => println!("Dimensions: {}x{}", w, h),
            _ => println!("Dimensions: unknown"),
        }
        match props.runtime_minutes {
            Some(minutes) => println!("Runtime: {} min", minutes),
            None => println!("Runtime: unknown"),
        }
    }

    Ok(())
}

fn check_tools() -> Result<()> {
    println!("Checking external tools...\n");

    let tools = reelname_av::check_tools();
    let mut all_ok = true;

    for tool in &tools {
        let status = if tool.available {
            "✓"
        } else {
            all_ok = false;
            "✗"
        };

        print!("{} {}", status, tool.name);

        if let Some(ref version) = tool.version {
            print!(" ({})", version.lines().next().unwrap_or(""));
        }

        if let Some(ref path) = tool.path {
            print!(" - {}", path.display());
        }

        println!();
    }

    println!();
    if all_ok {
        println!("All required tools are available!");
    } else {
        println!("Some tools are missing. Runtime-based matching will be skipped.");
    }

    Ok(())
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    let config = match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            config
        }
        None => {
            println!("No config file specified, using defaults");
            config::load_config_or_default(None)?
        }
    };

    let rename = &config.rename;
    println!(
        "  API key: {}",
        if config.imdb.api_key.is_empty() { "missing" } else { "set" }
    );
    println!("  Language: {}", config.imdb.language);
    println!("  Base URL: {}", config.imdb.base_url);
    println!(
        "  Search: advanced={} basic={}",
        rename.advanced_search, rename.basic_search
    );
    println!("  Simulate: {}", rename.simulate);
    println!("  Offset: {}", rename.offset);
    println!("  Interactive: {}", rename.interactive);
    println!("  Extensions: {}", rename.extensions.join(", "));

    Ok(())
}
