mod extract;
mod grammar;
mod lexicon;
mod reader;
mod writer;

use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};

use grammar::MorphGrammar;

#[derive(Parser)]
#[command(
    name = "newsbio",
    about = "Extract person names with birth dates and places from Russian news dumps"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the pipeline and write entries as a JSON array
    Run {
        /// Input file: one `category<TAB>title<TAB>text` record per line
        #[arg(short, long)]
        input: PathBuf,
        /// Output JSON path
        #[arg(short, long)]
        output: PathBuf,
        /// Max records to process (default: all)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Run the pipeline and print entries as a table instead of writing
    Preview {
        /// Input file
        #[arg(short, long)]
        input: PathBuf,
        /// Max records to process
        #[arg(short = 'n', long, default_value = "50")]
        limit: usize,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            input,
            output,
            limit,
        } => {
            println!("Reading {}...", input.display());
            let records = reader::read_records(&input, limit)?;
            let entries = run_pipeline(&records);
            writer::write_entries(&output, &entries)?;
            println!("Saved {} entries → {}", entries.len(), output.display());
            Ok(())
        }
        Commands::Preview { input, limit } => {
            let records = reader::read_records(&input, Some(limit))?;
            let entries = run_pipeline(&records);
            if entries.is_empty() {
                println!("No entries found in {} records.", records.len());
                return Ok(());
            }

            println!(
                "{:>3} | {:<28} | {:<18} | {:<16}",
                "#", "Name", "Birth date", "Birth place"
            );
            println!("{}", "-".repeat(74));
            for (i, e) in entries.iter().enumerate() {
                println!(
                    "{:>3} | {:<28} | {:<18} | {:<16}",
                    i + 1,
                    truncate(&e.name, 28),
                    e.birth_date.as_deref().unwrap_or("-"),
                    e.birth_place.as_deref().unwrap_or("-"),
                );
            }
            println!("\n{} entries from {} records", entries.len(), records.len());
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }

    result
}

/// Sequential pass over all records, one progress tick per record.
fn run_pipeline(records: &[reader::Record]) -> Vec<extract::Entry> {
    let grammar = MorphGrammar::new();

    let pb = ProgressBar::new(records.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} ({per_sec})")
            .unwrap()
            .progress_chars("=> "),
    );

    let mut entries = Vec::new();
    for record in records {
        entries.extend(extract::extract_from_record(&grammar, record));
        pb.inc(1);
    }
    pb.finish_and_clear();

    entries
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{}...", truncated)
    }
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}
