use std::collections::HashSet;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use x_link_extractor::export::{self, ExportError};
use x_link_extractor::parser::{self, ExtractionResult};
use x_link_extractor::settings;

#[derive(Parser)]
#[command(name = "xlinks", about = "Extract and export X (Twitter) links from any text")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List extracted links grouped by account
    Extract {
        /// Input files (default: stdin)
        files: Vec<PathBuf>,
        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Tweet permalinks as a JSON array
    Tweets {
        /// Input files (default: stdin)
        files: Vec<PathBuf>,
    },
    /// Non-blank lines as a JSON array
    Lines {
        /// Input files (default: stdin)
        files: Vec<PathBuf>,
    },
    /// All extracted links, one per line
    Links {
        /// Input files (default: stdin)
        files: Vec<PathBuf>,
    },
    /// Account names, one per line
    Usernames {
        /// Input files (default: stdin)
        files: Vec<PathBuf>,
    },
    /// Write grouped links to a CSV sheet
    Export {
        /// Input files (default: stdin)
        files: Vec<PathBuf>,
        /// Output file name without extension (default: XLINKS_EXPORT_FILENAME or "x-links")
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Extract each file separately and show per-file counts
    Scan {
        /// Input files
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Extract { files, json } => {
            let result = parser::extract(&read_input(&files)?);
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else if result.is_empty() {
                println!("No X links found.");
            } else {
                print_grouped(&result);
            }
            Ok(())
        }
        Commands::Tweets { files } => {
            let result = parser::extract(&read_input(&files)?);
            let tweets = parser::tweet_links(&result.links);
            if tweets.is_empty() {
                println!("No tweet links found.");
            } else {
                println!("{}", export::render_json_array(&tweets));
            }
            Ok(())
        }
        Commands::Lines { files } => {
            let lines = parser::lines_to_array(&read_input(&files)?);
            if lines.is_empty() {
                println!("No non-blank lines found.");
            } else {
                println!("{}", export::render_json_array(&lines));
            }
            Ok(())
        }
        Commands::Links { files } => {
            let result = parser::extract(&read_input(&files)?);
            match export::links_text(&result) {
                Some(text) => println!("{}", text),
                None => println!("No X links found."),
            }
            Ok(())
        }
        Commands::Usernames { files } => {
            let result = parser::extract(&read_input(&files)?);
            match export::usernames_text(&result) {
                Some(text) => println!("{}", text),
                None => println!("No accounts found."),
            }
            Ok(())
        }
        Commands::Export { files, output } => {
            let cfg = settings::load()?;
            let result = parser::extract(&read_input(&files)?);
            let path = export::export_path(
                output.as_deref().unwrap_or(&cfg.export_filename),
                settings::DEFAULT_EXPORT_FILENAME,
            );
            match export::write_csv_file(&result, &path) {
                Ok(rows) => {
                    println!("Exported {} rows to {}", rows, path.display());
                    Ok(())
                }
                Err(ExportError::NoLinks) => {
                    println!("{}", ExportError::NoLinks);
                    Ok(())
                }
                Err(e) => Err(e).with_context(|| format!("Failed to export {}", path.display())),
            }
        }
        Commands::Scan { files } => scan(&files),
    }
}

/// Concatenated contents of `files`, or all of stdin when none are given.
fn read_input(files: &[PathBuf]) -> Result<String> {
    if files.is_empty() {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        return Ok(text);
    }
    let parts = files
        .iter()
        .map(|p| read_file(p))
        .collect::<Result<Vec<_>>>()?;
    Ok(parts.join("\n"))
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn print_grouped(result: &ExtractionResult) {
    println!(
        "Found {} links across {} accounts\n",
        result.links.len(),
        result.profiles.len()
    );

    let mut grouped: HashSet<&str> = HashSet::new();
    for profile in result.profiles.values() {
        println!("@{} ({})", profile.account, profile.profile_url);
        for record in &profile.links {
            grouped.insert(record.url.as_str());
            println!("  {:<8} {}", record.link_type, record.url);
        }
    }

    let ungrouped: Vec<_> = result
        .links
        .iter()
        .filter(|l| !grouped.contains(l.as_str()))
        .collect();
    if !ungrouped.is_empty() {
        println!("\nNot attributed to an account:");
        for link in ungrouped {
            println!("  {}", link);
        }
    }
}

struct ScanRow {
    file: String,
    links: usize,
    accounts: usize,
    tweets: usize,
}

fn scan(files: &[PathBuf]) -> Result<()> {
    use indicatif::{ProgressBar, ProgressStyle};
    use rayon::prelude::*;

    let t0 = Instant::now();
    let inputs = files
        .iter()
        .map(|p| -> Result<(String, String)> { Ok((p.display().to_string(), read_file(p)?)) })
        .collect::<Result<Vec<_>>>()?;

    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec})")?
            .progress_chars("#>-"),
    );

    let rows: Vec<ScanRow> = inputs
        .par_iter()
        .map(|(file, text)| {
            let result = parser::extract(text);
            let row = ScanRow {
                file: file.clone(),
                links: result.links.len(),
                accounts: result.profiles.len(),
                tweets: parser::tweet_links(&result.links).len(),
            };
            pb.inc(1);
            row
        })
        .collect();
    pb.finish_and_clear();
    info!(files = rows.len(), "Scan complete");

    println!(
        "{:>3} | {:<40} | {:>6} | {:>8} | {:>6}",
        "#", "File", "Links", "Accounts", "Tweets"
    );
    println!("{}", "-".repeat(75));
    for (i, r) in rows.iter().enumerate() {
        println!(
            "{:>3} | {:<40} | {:>6} | {:>8} | {:>6}",
            i + 1,
            shorten_path(&r.file, 40),
            r.links,
            r.accounts,
            r.tweets
        );
    }

    let total: usize = rows.iter().map(|r| r.links).sum();
    println!("\n{} files | {} links", rows.len(), total);

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("Done in {}", format_elapsed(elapsed));
    }
    Ok(())
}

/// Keep the tail of a long path, where file names differ.
fn shorten_path(path: &str, max: usize) -> String {
    let len = path.chars().count();
    if len <= max {
        return path.to_string();
    }
    let tail: String = path.chars().skip(len - max.saturating_sub(3)).collect();
    format!("...{}", tail)
}

fn format_elapsed(d: std::time::Duration) -> String {
    match d.as_secs() {
        s if s >= 60 => format!("{}m {:02}s", s / 60, s % 60),
        _ => format!("{:.1}s", d.as_secs_f64()),
    }
}

// ── Tests ──
