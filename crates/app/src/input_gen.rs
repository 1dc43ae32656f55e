//! Demo input generation.
//!
//! Two seeded sources mirror the demo's input modes:
//! - Sample text with a skewed, roughly English-like symbol
//!   distribution, so the generated codewords have visibly different
//!   lengths.
//! - A synthesized waveform quantized into a small fixed alphabet,
//!   standing in for an uploaded audio file: samples in [-1, 1] are
//!   normalized into discrete levels and each level maps to one
//!   character ('a' upward).

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Letter weights for generated sample text. The skew is the point:
/// a flat distribution would give every symbol the same code length.
const SAMPLE_WEIGHTS: &[(char, u32)] = &[
    (' ', 15),
    ('e', 12),
    ('t', 9),
    ('a', 8),
    ('o', 7),
    ('i', 7),
    ('n', 6),
    ('s', 6),
    ('h', 5),
    ('r', 5),
    ('d', 4),
    ('l', 4),
    ('u', 3),
    ('c', 2),
    ('m', 2),
    ('.', 1),
];

/// Generate `len` characters of sample text with a skewed distribution.
///
/// Deterministic for a given seed.
pub fn generate_sample_text(seed: u64, len: usize) -> String {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let total: u32 = SAMPLE_WEIGHTS.iter().map(|&(_, w)| w).sum();

    let mut out = String::with_capacity(len);
    for _ in 0..len {
        let mut pick = rng.gen_range(0..total);
        for &(symbol, weight) in SAMPLE_WEIGHTS {
            if pick < weight {
                out.push(symbol);
                break;
            }
            pick -= weight;
        }
    }
    out
}

/// Synthesize `count` waveform samples in [-1, 1].
///
/// A sine carrier under a slow envelope plus a little noise: enough
/// structure that quantization produces an uneven symbol distribution,
/// enough noise that every level shows up. Deterministic for a given
/// seed.
pub fn synth_audio_samples(seed: u64, count: usize) -> Vec<f32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut samples = Vec::with_capacity(count);

    for i in 0..count {
        let t = i as f32 / 64.0;
        let envelope = (t / 8.0).sin().abs();
        let carrier = (t * 2.2).sin();
        let noise: f32 = rng.gen_range(-0.1..0.1);
        samples.push((carrier * envelope + noise).clamp(-1.0, 1.0));
    }

    samples
}

/// Quantize samples into `levels` discrete levels mapped to characters.
///
/// Each sample is normalized from [-1, 1] to [0, levels-1] and mapped to
/// 'a' + level. Out-of-range samples clamp to the nearest level.
/// `levels` itself is clamped to 2-26.
pub fn quantize_samples(samples: &[f32], levels: usize) -> String {
    let levels = levels.clamp(2, 26);

    samples
        .iter()
        .map(|&sample| {
            let normalized = ((sample + 1.0) / 2.0).clamp(0.0, 1.0);
            let level = (normalized * (levels - 1) as f32).floor() as usize;
            (b'a' + level.min(levels - 1) as u8) as char
        })
        .collect()
}
