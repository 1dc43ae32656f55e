//! huffviz: command-line walkthrough of Huffman coding.
//!
//! Resolves an input text (literal, file, generated sample, or a
//! quantized synthetic waveform), runs the full coding pipeline, and
//! prints every stage: frequency table, tree shape, codebook, encoded
//! bitstring, decode verification, and compression statistics.

mod config;
mod input_gen;

use std::process::ExitCode;

use huffviz_core::pipeline::{process, PipelineRun};

use crate::config::{Config, InputSource};

/// How many bits of the encoded stream to show before eliding.
const BITS_PREVIEW: usize = 96;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!("run with --help for usage");
            return ExitCode::FAILURE;
        }
    };

    if config.print_config {
        config.print();
    }

    let text = match load_input(&config) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let run = match process(&text, config.policy) {
        Ok(run) => run,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    print_run(&run, &config);

    if run.verified() && run.skipped_symbols == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Resolve the input text from the configured source.
fn load_input(config: &Config) -> Result<String, String> {
    match &config.source {
        InputSource::Text(text) => Ok(text.clone()),
        InputSource::File(path) => std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {e}", path.display())),
        InputSource::AudioDemo => {
            let samples = input_gen::synth_audio_samples(config.seed, config.audio_samples);
            Ok(input_gen::quantize_samples(&samples, config.quant_levels))
        }
        InputSource::GeneratedSample => Ok(input_gen::generate_sample_text(
            config.seed,
            config.sample_len,
        )),
    }
}

/// Print every stage of a completed run.
fn print_run(run: &PipelineRun, config: &Config) {
    println!("=== Frequency Analysis ===");
    if run.frequencies.is_empty() {
        println!("(empty input, nothing to encode)");
        println!();
        return;
    }
    for entry in run.frequencies.sorted_for_display() {
        println!("{:?}: {}", entry.symbol, entry.frequency);
    }
    println!();

    println!("=== Huffman Tree ===");
    if let Some(tree) = &run.tree {
        println!("Leaves: {}", tree.leaf_count());
        println!("Depth: {}", tree.depth());
        println!("Total weight: {}", tree.frequency());
    }
    println!();

    println!("=== Codebook ===");
    for (symbol, code) in run.codes.sorted_by_length() {
        println!("{symbol:?} -> {code} ({} bits)", code.len());
    }
    println!();

    println!("=== Encoded ===");
    if run.bits.len() > BITS_PREVIEW {
        println!("{}... ({} bits total)", &run.bits[..BITS_PREVIEW], run.bits.len());
    } else {
        println!("{} ({} bits)", run.bits, run.bits.len());
    }
    if run.skipped_symbols > 0 {
        println!(
            "Warning: {} symbol(s) had no codeword and were skipped",
            run.skipped_symbols
        );
    }
    println!();

    println!("=== Verification ===");
    if run.verified() {
        println!("Decoded output matches input: PASSED");
    } else {
        println!(
            "Decoded output differs from input: FAILED ({} vs {} chars)",
            run.decoded.chars().count(),
            run.text.chars().count()
        );
    }
    println!();

    if config.print_stats {
        println!("=== Compression ===");
        println!("Original: {} bits", run.stats.original_bits);
        println!("Encoded: {} bits", run.stats.encoded_bits);
        println!("Ratio: {:.2}:1", run.stats.compression_ratio);
        println!("Space saved: {:.1}%", run.stats.space_saved_percent);
        println!("Average code length: {:.2} bits", run.stats.average_code_length);
        println!("Entropy: {:.2} bits/symbol", run.stats.entropy);
        println!("Efficiency: {:.1}%", run.stats.efficiency * 100.0);
        println!();
    }
}
