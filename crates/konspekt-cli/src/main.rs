use std::time::Duration;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::fs;

use konspekt_core::{
    Locale, detect_chapters, extract_video_id, fetch_transcript, format_timestamp,
    get_cache_dir, get_transcript_path, load_transcript, render_digest, save_transcript,
};

/// CLI wrapper for Locale enum (needed for clap ValueEnum)
#[derive(Clone, Default, ValueEnum)]
enum CliLocale {
    #[default]
    En,
    Ru,
}

impl From<CliLocale> for Locale {
    fn from(cli: CliLocale) -> Self {
        match cli {
            CliLocale::En => Locale::En,
            CliLocale::Ru => Locale::Ru,
        }
    }
}

#[derive(Parser)]
#[command(name = "konspekt")]
#[command(about = "Fetch YouTube captions and print a condensed, chaptered digest")]
struct Cli {
    /// Video URL
    url: String,

    /// Digest language
    #[arg(short, long, default_value = "en")]
    lang: CliLocale,

    /// Force re-fetching even if a cached transcript exists
    #[arg(short, long)]
    force: bool,
}

fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let locale: Locale = cli.lang.into();

    // Validate the URL early
    let Some(video_id) = extract_video_id(&cli.url) else {
        eprintln!(
            "{} unrecognized video URL: {}",
            style("Error:").red().bold(),
            cli.url
        );
        std::process::exit(1);
    };

    let cache_dir = get_cache_dir(&video_id);
    fs::create_dir_all(&cache_dir).await?;

    println!(
        "\n{}  {}\n",
        style("konspekt").cyan().bold(),
        style("Video Digest").dim()
    );

    // Step 1: Transcript (check cache)
    let transcript_path = get_transcript_path(&cache_dir, locale);
    let transcript = if !cli.force && transcript_path.exists() {
        let transcript = load_transcript(&transcript_path).await?;
        println!(
            "{} Transcript: {} segments, {} {}",
            style("✓").green().bold(),
            transcript.segments.len(),
            style(&transcript.language).yellow(),
            style("(cached)").dim()
        );
        transcript
    } else {
        let spinner = create_spinner("Fetching captions...");
        match fetch_transcript(&video_id, locale).await {
            Ok(transcript) => {
                save_transcript(&transcript, &transcript_path).await?;
                spinner.finish_with_message(format!(
                    "{} Transcript: {} segments, {} selected",
                    style("✓").green().bold(),
                    transcript.segments.len(),
                    style(&transcript.language).yellow()
                ));
                transcript
            }
            Err(e) => {
                spinner.finish_and_clear();
                eprintln!(
                    "{} {}",
                    style("Error:").red().bold(),
                    e.user_message(locale)
                );
                eprintln!("{} {}", style("Detail:").dim(), style(&e).dim());
                std::process::exit(1);
            }
        }
    };

    // Step 2: Chapters (pure, in-memory)
    let chapters = detect_chapters(&transcript.segments, locale);
    let first_start = chapters.first().map(|c| c.start_time).unwrap_or(0.0);
    println!(
        "{} Chapters detected: {} (first at {})",
        style("✓").green().bold(),
        chapters.len(),
        format_timestamp(first_start)
    );

    println!("\n{}\n", style("─".repeat(60)).dim());

    // Step 3: Digest
    let digest = render_digest(&chapters, locale);
    println!("{}", digest);

    Ok(())
}
