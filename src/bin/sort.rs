// jd-dict Sort CLI Tool
// Command-line interface for re-ordering a generated dictionary

use clap::Parser;
use jd_dict::sort::{backup_path, read_dict_file, sort_entries, write_dict_file, SortKey};
use std::path::PathBuf;

/// Jiandao Dictionary Sorter - Re-order dictionary entries in place
#[derive(Parser, Debug)]
#[command(name = "jd-sort")]
#[command(about = "Sort a generated dictionary by code, word, or length", long_about = None)]
#[command(version = "0.2.0")]
struct Args {
    /// Dictionary file to sort
    #[arg(value_name = "FILE", default_value = "result.dict.yaml")]
    file: PathBuf,

    /// Sort key: code, word, word-length, or code-length
    #[arg(short, long)]
    by: SortKey,

    /// Skip the .backup copy of the previous file
    #[arg(long)]
    no_backup: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut dict = read_dict_file(&args.file)?;

    if dict.entries.is_empty() {
        println!("❌ No entries found in {}", args.file.display());
        return Ok(());
    }

    println!("🔎 Sorting {} entries by {}", dict.entries.len(), args.by);
    sort_entries(&mut dict.entries, args.by);

    write_dict_file(&args.file, &dict, !args.no_backup)?;

    if !args.no_backup {
        println!(
            "✅ Previous file saved to {}",
            backup_path(&args.file).display()
        );
    }
    println!(
        "✅ Wrote {} entries to {}",
        dict.entries.len(),
        args.file.display()
    );

    println!("\nFirst entries:");
    for line in preview(&dict.entries) {
        println!("{line}");
    }
    println!("\n✨ Sort completed successfully!");

    Ok(())
}

/// Up to ten entry lines, indented for display
fn preview(entries: &[String]) -> Vec<String> {
    entries.iter().take(10).map(|e| format!("  {e}")).collect()
}
