//! Configuration for the huffviz command line.
//!
//! Handles parsing command-line arguments and generating sensible
//! defaults (including randomized defaults that are reproducible with a
//! seed).
//!
//! # Philosophy
//!
//! The tool should work with ZERO arguments: it generates a sample text,
//! runs the full coding pipeline over it, and prints every stage. All
//! randomized defaults derive from the seed so runs are reproducible.

use huffviz_core::UnknownSymbolPolicy;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;

/// Where the input text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Text given directly on the command line
    Text(String),

    /// Text read from a file
    File(PathBuf),

    /// Synthesized waveform samples quantized into a small alphabet
    AudioDemo,

    /// Seeded sample text with a skewed symbol distribution
    GeneratedSample,
}

/// Complete configuration for one run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Input source
    pub source: InputSource,

    /// Seed for all randomness (generated inputs)
    pub seed: u64,

    /// Length of generated sample text
    pub sample_len: usize,

    /// Number of synthesized audio samples
    pub audio_samples: usize,

    /// Quantization levels for the audio demo (2-26)
    pub quant_levels: usize,

    /// How encoding treats symbols without a codeword
    pub policy: UnknownSymbolPolicy,

    /// Whether to print the resolved configuration
    pub print_config: bool,

    /// Whether to print the compression statistics section
    pub print_stats: bool,
}

impl Config {
    /// Parse configuration from command-line arguments.
    ///
    /// If no source is given, a sample text is generated. If --seed is
    /// provided, all randomness derives from it (fully deterministic);
    /// otherwise the seed is time-based and printed via --print-config.
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut source: Option<InputSource> = None;
        let mut seed: Option<u64> = None;
        let mut sample_len: Option<usize> = None;
        let mut audio_samples: Option<usize> = None;
        let mut quant_levels: Option<usize> = None;
        let mut policy = UnknownSymbolPolicy::Skip;
        let mut print_config = false;
        let mut print_stats = true;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--text" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--text requires a string".to_string());
                    }
                    source = Some(InputSource::Text(args[i].clone()));
                }
                "--in" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--in requires a path".to_string());
                    }
                    source = Some(InputSource::File(PathBuf::from(&args[i])));
                }
                "--audio-demo" => {
                    source = Some(InputSource::AudioDemo);
                }
                "--seed" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--seed requires a number".to_string());
                    }
                    seed = Some(args[i].parse().map_err(|_| "invalid seed")?);
                }
                "--sample-len" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--sample-len requires a number".to_string());
                    }
                    sample_len = Some(args[i].parse().map_err(|_| "invalid sample-len")?);
                }
                "--samples" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--samples requires a number".to_string());
                    }
                    audio_samples = Some(args[i].parse().map_err(|_| "invalid samples")?);
                }
                "--levels" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--levels requires a number".to_string());
                    }
                    let levels: usize = args[i].parse().map_err(|_| "invalid levels")?;
                    if !(2..=26).contains(&levels) {
                        return Err("--levels must be between 2 and 26".to_string());
                    }
                    quant_levels = Some(levels);
                }
                "--fail-on-unknown" => {
                    policy = UnknownSymbolPolicy::Fail;
                }
                "--print-config" => {
                    print_config = true;
                }
                "--no-stats" => {
                    print_stats = false;
                }
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                _ => {
                    return Err(format!("unknown argument: {}", args[i]));
                }
            }
            i += 1;
        }

        // Determine seed (explicit or time-based)
        let seed = seed.unwrap_or_else(|| {
            use std::time::{SystemTime, UNIX_EPOCH};
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|t| t.as_millis() as u64)
                .unwrap_or(0)
        });

        // Randomized default for the generated sample length
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let config = Config {
            source: source.unwrap_or(InputSource::GeneratedSample),
            seed,
            sample_len: sample_len.unwrap_or_else(|| rng.gen_range(200..=2000)),
            audio_samples: audio_samples.unwrap_or(1000),
            quant_levels: quant_levels.unwrap_or(8),
            policy,
            print_config,
            print_stats,
        };

        Ok(config)
    }

    /// Print the configuration in human-readable form.
    pub fn print(&self) {
        println!("=== Configuration ===");
        match &self.source {
            InputSource::Text(text) => println!("Input: literal text ({} chars)", text.chars().count()),
            InputSource::File(path) => println!("Input: file {}", path.display()),
            InputSource::AudioDemo => println!(
                "Input: synthesized audio ({} samples, {} levels)",
                self.audio_samples, self.quant_levels
            ),
            InputSource::GeneratedSample => {
                println!("Input: generated sample ({} chars)", self.sample_len)
            }
        }
        println!("Seed: {}", self.seed);
        println!(
            "Unknown symbols: {}",
            match self.policy {
                UnknownSymbolPolicy::Skip => "skip (counted)",
                UnknownSymbolPolicy::Fail => "fail",
            }
        );
        println!();
    }
}

fn print_help() {
    println!("huffviz: Huffman coding walkthrough on the command line");
    println!();
    println!("USAGE:");
    println!("    huffviz [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --text <STRING>       Encode this text");
    println!("    --in <PATH>           Encode the contents of a file");
    println!("    --audio-demo          Encode a quantized synthetic waveform");
    println!("    --seed <N>            Random seed for determinism");
    println!();
    println!("    --sample-len <N>      Generated sample length (default: random 200-2000)");
    println!("    --samples <N>         Audio demo sample count (default: 1000)");
    println!("    --levels <N>          Audio quantization levels, 2-26 (default: 8)");
    println!();
    println!("    --fail-on-unknown     Error on symbols without a codeword");
    println!("    --print-config        Print resolved configuration");
    println!("    --no-stats            Don't print compression statistics");
    println!("    --help, -h            Print this help");
    println!();
    println!("EXAMPLES:");
    println!("    huffviz                          # Run on a generated sample");
    println!("    huffviz --text 'hello world'     # Classic demo input");
    println!("    huffviz --audio-demo --seed 42   # Deterministic audio walkthrough");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_args(&args(&["--seed", "7"])).unwrap();
        assert_eq!(config.source, InputSource::GeneratedSample);
        assert_eq!(config.seed, 7);
        assert_eq!(config.audio_samples, 1000);
        assert_eq!(config.quant_levels, 8);
        assert_eq!(config.policy, UnknownSymbolPolicy::Skip);
        assert!((200..=2000).contains(&config.sample_len));
        assert!(config.print_stats);
        assert!(!config.print_config);
    }

    #[test]
    fn test_seeded_defaults_are_deterministic() {
        let a = Config::from_args(&args(&["--seed", "99"])).unwrap();
        let b = Config::from_args(&args(&["--seed", "99"])).unwrap();
        assert_eq!(a.sample_len, b.sample_len);
    }

    #[test]
    fn test_text_source() {
        let config = Config::from_args(&args(&["--text", "abc"])).unwrap();
        assert_eq!(config.source, InputSource::Text("abc".to_string()));
    }

    #[test]
    fn test_audio_demo_options() {
        let config =
            Config::from_args(&args(&["--audio-demo", "--samples", "50", "--levels", "4"]))
                .unwrap();
        assert_eq!(config.source, InputSource::AudioDemo);
        assert_eq!(config.audio_samples, 50);
        assert_eq!(config.quant_levels, 4);
    }

    #[test]
    fn test_levels_out_of_range() {
        assert!(Config::from_args(&args(&["--levels", "1"])).is_err());
        assert!(Config::from_args(&args(&["--levels", "27"])).is_err());
    }

    #[test]
    fn test_missing_value() {
        assert!(Config::from_args(&args(&["--text"])).is_err());
        assert!(Config::from_args(&args(&["--seed"])).is_err());
    }

    #[test]
    fn test_unknown_argument() {
        assert!(Config::from_args(&args(&["--bogus"])).is_err());
    }

    #[test]
    fn test_fail_on_unknown() {
        let config = Config::from_args(&args(&["--fail-on-unknown"])).unwrap();
        assert_eq!(config.policy, UnknownSymbolPolicy::Fail);
    }
}
