// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::io::Write;
use std::path::Path;
use std::time::Instant;

use anyhow::{bail, Context};
use clap::Parser;
use glean::build::{format_bytes, largest_page, run_build};
use glean::{
    search_with, DirSource, Highlighter, IndexLoader, SearchIndex, SearchOptions, SearchOutcome,
};
use tracing_subscriber::EnvFilter;

mod cli;
use cli::display::{self, kv, row, section_bot, section_mid, section_top};
use cli::{Cli, Commands};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Index { input, output } => index_site(&input, &output),
        Commands::Inspect { file } => inspect_index(&file),
        Commands::Search {
            site,
            query,
            limit,
            index_path,
            min_query_len,
            context_before,
            context_after,
            fallback_len,
        } => {
            let options = SearchOptions {
                min_query_len,
                context_before,
                context_after,
                fallback_len,
            };
            search_site(&site, &index_path, &query, limit, &options)
        }
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", display::failure("error:"), e);
        std::process::exit(1);
    }
}

fn index_site(input: &Path, output: &Path) -> anyhow::Result<()> {
    if !input.is_dir() {
        bail!("input is not a directory: {}", input.display());
    }
    let start = Instant::now();
    let summary = run_build(input, output).context("building search index")?;

    println!(
        "{} {} pages, {} → {} ({:.1?})",
        display::success("indexed"),
        summary.pages,
        format_bytes(summary.bytes),
        summary.output.display(),
        start.elapsed()
    );
    Ok(())
}

fn compress_brotli(data: &[u8]) -> anyhow::Result<Vec<u8>> {
    let mut compressed = Vec::new();
    {
        let mut encoder = brotli::CompressorWriter::new(&mut compressed, 4096, 11, 22);
        encoder.write_all(data)?;
    }
    Ok(compressed)
}

fn inspect_index(file: &Path) -> anyhow::Result<()> {
    let bytes = fs::read(file).with_context(|| format!("reading {}", file.display()))?;
    let index = SearchIndex::from_json(&bytes)?;
    let compressed = compress_brotli(&bytes)?;

    let content_chars: usize = index.pages.iter().map(|p| p.content.chars().count()).sum();
    let empty = index.pages.iter().filter(|p| p.content.is_empty()).count();

    section_top("SEARCH INDEX");
    kv("file", &file.display().to_string());
    kv("pages", &index.len().to_string());
    kv("content", &format!("{} chars", content_chars));
    if empty > 0 {
        kv("empty pages", &display::themed(display::YELLOW, &[], &empty.to_string()));
    }
    if let Some(page) = largest_page(&index) {
        kv("largest", &format!("{} ({})", page.title, format_bytes(page.content.len())));
    }

    section_mid("TRANSFER");
    kv("raw", &format_bytes(bytes.len()));
    kv(
        "brotli",
        &format!(
            "{}  saves {}",
            format_bytes(compressed.len()),
            display::savings_colored(bytes.len(), compressed.len())
        ),
    );
    section_bot();
    Ok(())
}

fn load_index(site: &str, index_path: &str) -> anyhow::Result<std::sync::Arc<SearchIndex>> {
    let mut loader = IndexLoader::new(index_path);

    if site.starts_with("http://") || site.starts_with("https://") {
        return load_remote(&mut loader, site);
    }

    let index = loader.load_from(&DirSource::new(site))?;
    Ok(index)
}

#[cfg(feature = "http")]
fn load_remote(loader: &mut IndexLoader, site: &str) -> anyhow::Result<std::sync::Arc<SearchIndex>> {
    let source = glean::HttpSource::new(site)?;
    let Some(ticket) = loader.begin() else {
        bail!("index fetch already in flight");
    };
    tracing::debug!(url = %source.resolve(&ticket.path)?, "fetching index");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("starting runtime")?;
    let response = runtime.block_on(source.fetch(&ticket.path));
    Ok(loader.complete(&ticket, response)?)
}

#[cfg(not(feature = "http"))]
fn load_remote(_loader: &mut IndexLoader, site: &str) -> anyhow::Result<std::sync::Arc<SearchIndex>> {
    bail!("{} is a URL but glean was built without the `http` feature", site)
}

fn search_site(
    site: &str,
    index_path: &str,
    query: &str,
    limit: usize,
    options: &SearchOptions,
) -> anyhow::Result<()> {
    let index = load_index(site, index_path)?;

    let start = Instant::now();
    let outcome = search_with(&index, query, options);
    let elapsed = start.elapsed();

    let results = match outcome {
        SearchOutcome::Hint => {
            println!(
                "{}",
                display::themed(
                    display::GRAY,
                    &[],
                    &format!("Query too short: type at least {} characters.", options.min_query_len.max(1))
                )
            );
            return Ok(());
        }
        SearchOutcome::Matches(results) => results,
    };

    section_top(&format!("\"{}\"", query));
    if results.is_empty() {
        row(&format!(" {}", display::themed(display::GRAY, &[], "No results found")));
        section_bot();
        return Ok(());
    }

    let highlighter = Highlighter::new(query);
    for (i, result) in results.iter().take(limit).enumerate() {
        if i > 0 {
            row("");
        }
        display::result_entry(i, result, &highlighter);
    }
    section_mid("SUMMARY");
    kv(
        "matches",
        &format!(
            "{} of {} pages{}",
            results.len(),
            index.len(),
            if results.len() > limit {
                format!(" (showing {})", limit)
            } else {
                String::new()
            }
        ),
    );
    kv("time", &format!("{:.2?}", elapsed));
    section_bot();
    Ok(())
}
