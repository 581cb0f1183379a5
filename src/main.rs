//! # slackpack CLI
//!
//! Command-line interface for the slackpack library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use slackpack::SlackpackError;
use slackpack::cli::Args;
use slackpack::config::ConvertConfig;
use slackpack::core::{load_archive, write_channels};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), SlackpackError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();
    let config = ConvertConfig::default();

    println!("📦 slackpack v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Archive: {}", args.archive.display());
    println!("💾 Output:  {}", config.output_dir.display());
    println!();

    println!("⏳ Reading channels...");
    let load_start = Instant::now();
    let (users, channels) = load_archive(&args.archive, &config)?;
    let kept: usize = channels.iter().map(|c| c.messages.len()).sum();
    let skipped: usize = channels.iter().map(|c| c.skipped).sum();
    println!(
        "   {} users, {} channels, {} messages ({:.2}s)",
        users.len(),
        channels.len(),
        kept,
        load_start.elapsed().as_secs_f64()
    );

    println!("💾 Writing output...");
    let write_start = Instant::now();
    write_channels(&channels, &config)?;
    println!("   Written in {:.2}s", write_start.elapsed().as_secs_f64());

    println!();
    println!("✅ Done! Output saved to {}", config.output_dir.display());

    println!();
    println!("📊 Summary:");
    for channel in &channels {
        println!("   #{:<20} {} messages", channel.name, channel.messages.len());
    }
    println!("   Skipped:   {} records (joins, thread replies, non-messages)", skipped);
    println!("   Total time: {:.2}s", total_start.elapsed().as_secs_f64());

    Ok(())
}
