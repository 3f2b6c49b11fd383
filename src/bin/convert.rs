// jd-dict Convert CLI Tool
// Command-line interface for word list → 键道6 dictionary conversion

use clap::Parser;
use jd_dict::{read_word_list, write_dict, Converter};
use std::path::PathBuf;

/// Jiandao Dictionary Converter - Encode a word list and merge it into a RIME dictionary
#[derive(Parser, Debug)]
#[command(name = "jd-convert")]
#[command(about = "Convert a word list into collision-free 键道6 codes", long_about = None)]
#[command(version = "0.2.0")]
struct Args {
    /// Word list file, one word per line
    #[arg(value_name = "WORDS", default_value = "All.txt")]
    words: PathBuf,

    /// Per-character shape table (character, tab, shape keys)
    #[arg(short, long, default_value = "jdx.csv")]
    shapes: PathBuf,

    /// Directory scanned for existing *.dict.yaml files
    #[arg(short, long, default_value = ".")]
    dict_dir: PathBuf,

    /// Output dictionary file
    #[arg(short, long, default_value = "result.dict.yaml")]
    output: PathBuf,

    /// Dictionary name written into the output header
    #[arg(short, long, default_value = "xkjd6.result")]
    name: String,

    /// Show per-stage details and the code-length histogram
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load shape table and existing dictionaries
    if args.verbose {
        println!(
            "🔍 Loading {} and scanning {} for dictionaries...",
            args.shapes.display(),
            args.dict_dir.display()
        );
    }

    let converter = Converter::new(&args.shapes, &args.dict_dir, Some(&args.output))?;

    if args.verbose {
        println!(
            "✅ Loaded {} shape keys, {} known words, {} used codes\n",
            converter.shapes().len(),
            converter.existing().known_count(),
            converter.existing().used_count()
        );
    }

    // Run the pipeline
    let words = read_word_list(&args.words)?;

    if args.verbose {
        println!(
            "🔎 Converting {} words from {}",
            words.len(),
            args.words.display()
        );
        println!("─────────────────────────────────────────────────\n");
    }

    let conversion = converter.convert(&words);
    let stats = conversion.stats;

    println!("Words processed:   {}", stats.words);
    println!("Candidates:        {}", stats.candidates);
    println!("Duplicates:        {}", stats.duplicates);
    println!("Unreadable words:  {}", stats.unreadable);
    println!("Unencodable words: {}", stats.unencodable);
    println!("Missing shapes:    {}", stats.missing_shape);
    println!("Already known:     {}", stats.known_words);
    println!("Entries emitted:   {}\n", stats.emitted);

    if conversion.entries.is_empty() {
        println!("❌ No new entries to write.");
        return Ok(());
    }

    write_dict(&args.output, &args.name, &conversion.entries)?;
    println!(
        "✅ Wrote {} entries to {}",
        conversion.entries.len(),
        args.output.display()
    );

    if args.verbose {
        println!("\nCode lengths:");
        for (length, count) in conversion.codes_by_length() {
            println!(
                "  {} keys: {:>6}  {}",
                length,
                count,
                count_bar(count, stats.emitted)
            );
        }
        println!("\n─────────────────────────────────────────────────");
        println!("✨ Conversion completed successfully!");
    }

    Ok(())
}

/// Generate a visual proportion bar
fn count_bar(count: usize, total: usize) -> String {
    let bar_len = 10;
    let filled = if total == 0 { 0 } else { count * bar_len / total };
    let mut bar = String::from("[");
    for i in 0..bar_len {
        if i < filled {
            bar.push('█');
        } else {
            bar.push('░');
        }
    }
    bar.push(']');
    bar
}
