mod cli;

use mediahub::{
    config,
    report::{FileReport, ParseReport},
    scan,
};

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "mediahub=debug,mediahub_parser=trace".to_string()
        } else {
            "mediahub=info,mediahub_parser=info".to_string()
        }
    });

    // Logs go to stderr so JSON output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Parse {
            title,
            subtitle,
            file,
            anime,
            json,
        } => parse_title(cli.config.as_deref(), &title, &subtitle, file, anime, json),
        Commands::Scan { dir, json } => scan_directory(&dir, cli.config.as_deref(), json),
        Commands::Validate { path } => {
            let path = path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("mediahub {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn parse_title(
    config_path: Option<&Path>,
    title: &str,
    subtitle: &str,
    file: bool,
    anime: bool,
    json: bool,
) -> Result<()> {
    let mut config = config::load_config_or_default(config_path)?;
    config.parser.is_file |= file;
    config.parser.anime |= anime;
    let parser = config.build_parser()?;

    let Some(info) = parser.parse_with_subtitle(title, subtitle) else {
        anyhow::bail!("Nothing to parse: the name is empty");
    };
    let report = ParseReport::from(&info);

    if json {
        let json_str = serde_json::to_string_pretty(&report)?;
        println!("{}", json_str);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn print_report(report: &ParseReport) {
    println!("Title: {}", report.title);
    if !report.cn_name.is_empty() {
        println!("Chinese name: {}", report.cn_name);
    }
    if !report.en_name.is_empty() {
        println!("English name: {}", report.en_name);
    }
    println!("Type: {}", report.media_type);
    if let Some(year) = report.year {
        println!("Year: {}", year);
    }

    let season_episode = report.season_episode();
    if !season_episode.is_empty() {
        println!(
            "Season/Episode: {} ({} seasons, {} episodes)",
            season_episode, report.total_seasons, report.total_episodes
        );
    }

    let fields = [
        ("Resolution", &report.resolution),
        ("Source", &report.source),
        ("Video codec", &report.video_codec),
        ("Audio codec", &report.audio_codec),
        ("Part", &report.part),
    ];
    for (label, value) in fields {
        if let Some(value) = value {
            println!("{}: {}", label, value);
        }
    }
    if !report.effects.is_empty() {
        println!("Effects: {}", report.effects.join(", "));
    }
}

fn scan_directory(dir: &Path, config_path: Option<&Path>, json: bool) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    let parser = config.build_parser()?;

    let entries = scan::scan_dir(dir, &parser, &config.scan)?;

    if json {
        let reports: Vec<FileReport> = entries.iter().map(FileReport::from).collect();
        let json_str = serde_json::to_string_pretty(&reports)?;
        println!("{}", json_str);
    } else {
        for entry in &entries {
            let report = ParseReport::from(&entry.info);
            println!(
                "{}\t{}\t{}\t{}",
                entry.path.display(),
                report.title,
                report.media_type,
                report.season_episode()
            );
        }
        println!("\nScanned {} files", entries.len());
    }

    Ok(())
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            println!("  Single-file names: {}", config.parser.is_file);
            println!("  Anime titles: {}", config.parser.anime);
            println!("  Ignored words: {}", config.words.ignored.len());
            println!("  Replaced words: {}", config.words.replaced.len());
            println!("  Offset rules: {}", config.words.offset.len());
            println!(
                "  Scan threads: {}",
                config
                    .scan
                    .threads
                    .map_or_else(|| "auto".to_string(), |n| n.to_string())
            );
        }
        None => {
            println!("No config file specified, using defaults");
            let config = config::Config::default();
            println!("Default config:");
            println!("  Video files only: {}", config.scan.extensions_only);
        }
    }

    Ok(())
}
