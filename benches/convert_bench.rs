// Performance benchmarks for jd-dict conversion operations

use jd_dict::{
    Converter, ExistingDictionary, Keymap, PinyinTranscriber, ShapeTable, Syllable, Transcriber,
    Variant,
};
use std::time::Instant;

const CHARS: &[char] = &[
    '中', '央', '国', '人', '民', '大', '天', '好', '海', '山', '水', '书', '出', '光', '双',
    '华', '东', '西', '南', '北', '上', '下', '左', '右', '前', '后', '春', '夏', '秋', '冬',
    '日', '月', '星', '风', '云', '雨', '雪', '花', '草', '木',
];

fn main() {
    println!("🏃 jd-dict Performance Benchmarks\n");

    let words = word_pool();
    let converter = Converter::with_transcriber(
        shape_table(),
        ExistingDictionary::new(),
        PinyinTranscriber::new(),
    );

    // Warmup
    let _ = converter.convert(&words[..100]);

    bench_transcription(&words);
    bench_encoding();
    bench_pipeline(&converter, &words);
    report_distribution(&converter, &words);

    println!("\n✅ Benchmarks completed!");
}

/// Every two-character combination of the benchmark pool
fn word_pool() -> Vec<String> {
    let mut words = Vec::new();
    for &a in CHARS {
        for &b in CHARS {
            words.push(format!("{a}{b}"));
        }
    }
    words
}

/// Synthetic shape table covering the benchmark pool
fn shape_table() -> ShapeTable {
    ShapeTable::from_pairs(
        CHARS
            .iter()
            .enumerate()
            .map(|(i, &ch)| (ch, (b'a' + (i % 26) as u8) as char)),
    )
}

fn bench_transcription(words: &[String]) {
    println!("📖 TRANSCRIPTION (pinyin lookup + syllable split)");
    println!("─────────────────────────────────────────────────");

    let transcriber = PinyinTranscriber::new();

    let start = Instant::now();
    let mut syllables = 0usize;
    for word in words {
        syllables += transcriber.transcribe(word).iter().flatten().count();
    }
    let duration = start.elapsed();

    println!(
        "  {} words → {} syllables in {:.3}ms",
        words.len(),
        syllables,
        duration.as_secs_f64() * 1000.0
    );
    println!();
}

fn bench_encoding() {
    println!("🔤 SYLLABLE ENCODING (keymap lookup)");
    println!("────────────────────────────────────");

    let keymap = Keymap::new();
    let syllables = [
        Syllable::new("zh", "ong"),
        Syllable::new("y", "ang"),
        Syllable::new("sh", "uang"),
        Syllable::new("", "er"),
        Syllable::new("j", "u"),
        Syllable::new("t", "ian"),
    ];

    let rounds = 100_000;
    let start = Instant::now();
    let mut encoded = 0usize;
    for _ in 0..rounds {
        for syllable in &syllables {
            for variant in Variant::ALL {
                if keymap.syllable_code(syllable, variant).is_some() {
                    encoded += 1;
                }
            }
        }
    }
    let duration = start.elapsed();

    println!(
        "  {} encodings in {:.3}ms ({:.1}ns each)",
        encoded,
        duration.as_secs_f64() * 1000.0,
        duration.as_nanos() as f64 / encoded as f64
    );
    println!();
}

fn bench_pipeline(converter: &Converter, words: &[String]) {
    println!("🔁 FULL PIPELINE (transcribe, encode, resolve)");
    println!("──────────────────────────────────────────────");

    for size in [100, 400, words.len()] {
        let batch = &words[..size.min(words.len())];

        let start = Instant::now();
        let conversion = converter.convert(batch);
        let duration = start.elapsed();

        println!(
            "  {:>5} words → {} entries in {:.3}ms ({:.1}µs/word)",
            batch.len(),
            conversion.entries.len(),
            duration.as_secs_f64() * 1000.0,
            duration.as_micros() as f64 / batch.len() as f64
        );
    }
    println!();
}

fn report_distribution(converter: &Converter, words: &[String]) {
    println!("📊 CODE DISTRIBUTION");
    println!("────────────────────");

    let conversion = converter.convert(words);
    for (length, count) in conversion.codes_by_length() {
        println!("  {} keys: {} entries", length, count);
    }
    println!("  Stats: {:?}", conversion.stats);
}
