//! Directory scanner.
//!
//! Walks a directory tree, collects video files and parses their names in
//! parallel.

use crate::config::ScanConfig;
use anyhow::{Context, Result};
use mediahub_parser::config::ParserConfig;
use mediahub_parser::numeral::is_media_file;
use mediahub_parser::{MetaInfo, Parser};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// A parsed file.
#[derive(Debug, Clone)]
pub struct ScanEntry {
    pub path: PathBuf,
    pub info: MetaInfo,
}

/// Scan `root` and parse the name of every file found.
///
/// File names are always parsed as single files, whatever `parser` was
/// configured with. Entries come back sorted by path; unreadable entries
/// are logged and skipped.
pub fn scan_dir(root: &Path, parser: &Parser, config: &ScanConfig) -> Result<Vec<ScanEntry>> {
    if !root.is_dir() {
        anyhow::bail!("Scan root is not a directory: {:?}", root);
    }

    info!("Scanning directory: {:?}", root);
    let files = collect_files(root, config.extensions_only);
    debug!("Found {} candidate files", files.len());

    let parser = parser.clone().with_config(ParserConfig {
        is_file: true,
        ..parser.config().clone()
    });

    let mut entries = match config.threads {
        Some(threads) => rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .context("Failed to build scan thread pool")?
            .install(|| parse_all(&files, &parser)),
        None => parse_all(&files, &parser),
    };
    entries.sort_by(|a, b| a.path.cmp(&b.path));

    info!(
        "Scan complete: {} files parsed from {:?}",
        entries.len(),
        root
    );
    Ok(entries)
}

fn collect_files(root: &Path, extensions_only: bool) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).follow_links(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        if extensions_only && !is_media_file(&entry.file_name().to_string_lossy()) {
            debug!("Skipping non-video file: {:?}", entry.path());
            continue;
        }

        files.push(entry.into_path());
    }

    files
}

fn parse_all(files: &[PathBuf], parser: &Parser) -> Vec<ScanEntry> {
    files
        .par_iter()
        .filter_map(|path| {
            let name = path.file_name()?.to_string_lossy();
            let info = parser.parse(&name)?;
            Some(ScanEntry {
                path: path.clone(),
                info,
            })
        })
        .collect()
}
