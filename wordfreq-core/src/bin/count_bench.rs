//! Word Count Benchmarking Tool
//!
//! Measures throughput of the counting pipeline on a large text file, such as
//! a book collection or a Wikipedia dump.
//!
//! ## What It Benchmarks
//!
//! 1. **Tokenization**: Splitting raw text on whitespace
//! 2. **Normalization**: Tokenizing plus stripping punctuation and lowercasing every token
//! 3. **Full Pipeline**: Tokenize, normalize, count and rank
//!
//! ## Usage
//!
//! ```bash
//! ./target/release/count_bench /path/to/corpus.txt
//! ```
//!
//! ## Example Output
//!
//! ```text
//! === Pipeline ===
//! --------------------------------
//! Mode        : Pipeline
//! Elapsed     : 0.452 s
//! Throughput  : 0.218 GiB/s
//! Tokens      : 15_489_234
//! Tokens/sec  : 34_265_478
//! --------------------------------
//! ```
//!
//! Build with `--release`; use an input of 100MB+ for stable numbers.

use std::env;
use std::fs;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use wordfreq_core::analyzer::{Tokenizer, WordNormalizer};
use wordfreq_core::CountWords;

const WARMUP_RUNS: usize = 1;
const MEASURE_RUNS: usize = 5;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    let Some(path) = args.get(1) else {
        eprintln!("Usage: count_bench <path>");
        return ExitCode::FAILURE;
    };

    println!("Loading file...");
    let input = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("count_bench: cannot read {path}: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("File size: {}\n", fmt_bytes(input.len() as u64));

    bench_tokenize(&input);
    bench_normalize(&input);
    bench_pipeline(&input);

    ExitCode::SUCCESS
}

fn bench_tokenize(input: &str) {
    let tokenizer = Tokenizer::new();

    println!("=== Tokenize ===");

    warmup(|| {
        let mut sink = 0u64;
        tokenizer.tokenize(input, |_t, _p| sink += 1);
        std::hint::black_box(sink);
    });

    let mut tokens = 0u64;
    let elapsed = measure(|| {
        let mut local = 0u64;
        tokenizer.tokenize(input, |_t, _p| local += 1);
        tokens = local;
        std::hint::black_box(tokens);
    });

    print_perf("Tokenize", input.len(), elapsed, tokens);
}

fn bench_normalize(input: &str) {
    let tokenizer = Tokenizer::new();
    let normalizer = WordNormalizer::new();
    let mut buf = String::with_capacity(64);

    println!("=== Normalize ===");

    warmup(|| {
        tokenizer.tokenize(input, |t, _p| {
            normalizer.normalize_into(t, &mut buf);
            std::hint::black_box(&buf);
        });
    });

    let mut tokens = 0u64;
    let elapsed = measure(|| {
        let mut local = 0u64;
        tokenizer.tokenize(input, |t, _p| {
            normalizer.normalize_into(t, &mut buf);
            std::hint::black_box(&buf);
            local += 1;
        });
        tokens = local;
    });

    print_perf("Normalize", input.len(), elapsed, tokens);
}

fn bench_pipeline(input: &str) {
    let pipeline = CountWords::default();

    println!("=== Pipeline ===");

    warmup(|| {
        std::hint::black_box(pipeline.count(input));
    });

    let mut tokens = 0u64;
    let elapsed = measure(|| {
        let series = pipeline.count(input);
        tokens = series.total();
        std::hint::black_box(series);
    });

    print_perf("Pipeline", input.len(), elapsed, tokens);
}

fn warmup<F: FnMut()>(mut f: F) {
    for _ in 0..WARMUP_RUNS {
        f();
    }
}

fn measure<F: FnMut()>(mut f: F) -> Duration {
    let mut total = Duration::ZERO;

    for _ in 0..MEASURE_RUNS {
        let start = Instant::now();
        f();
        total += start.elapsed();
    }

    total / MEASURE_RUNS as u32
}

fn print_perf(label: &str, input_bytes: usize, elapsed: Duration, tokens: u64) {
    let secs = elapsed.as_secs_f64();
    let gib = input_bytes as f64 / (1024.0 * 1024.0 * 1024.0);

    println!("--------------------------------");
    println!("Mode        : {}", label);
    println!("Elapsed     : {:.3} s", secs);
    println!("Throughput  : {:.3} GiB/s", gib / secs);

    if tokens > 0 {
        println!("Tokens      : {}", fmt_count(tokens));
        println!("Tokens/sec  : {}", fmt_count((tokens as f64 / secs) as u64));
    }

    println!("--------------------------------\n");
}

fn fmt_bytes(b: u64) -> String {
    if b >= 1024 * 1024 * 1024 {
        format!("{:.2} GiB", b as f64 / (1024.0 * 1024.0 * 1024.0))
    } else if b >= 1024 * 1024 {
        format!("{:.2} MiB", b as f64 / (1024.0 * 1024.0))
    } else if b >= 1024 {
        format!("{:.2} KiB", b as f64 / 1024.0)
    } else {
        format!("{} B", b)
    }
}

fn fmt_count(n: u64) -> String {
    let s = n.to_string();
    let mut out = String::with_capacity(s.len() + s.len() / 3);

    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push('_');
        }
        out.push(ch);
    }

    out.chars().rev().collect()
}
